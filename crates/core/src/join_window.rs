//! Join-window evaluation
//!
//! Decides, for one clock sample, whether a webinar's landing page offers
//! "join livestream" or "request reminder". The window opens a fixed lead
//! time before the scheduled start, or as soon as the scheduled calendar day
//! begins, and never closes.

use chrono::{DateTime, Datelike, TimeDelta, TimeZone};
use serde::Serialize;

use crate::countdown::Countdown;
use crate::invariants::assert_countdown_invariants;
use crate::models::WebinarRecord;
use crate::schedule;

/// Default lead time, in minutes, before the start at which joining is allowed
pub const DEFAULT_JOIN_LEAD_MINUTES: u32 = 5;

/// One evaluation of a scheduled webinar against the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountdownState {
    /// Time to start, clamped at zero
    pub countdown: Countdown,
    /// Signed milliseconds from now to the start (negative once started)
    pub delta_millis: i64,
    pub join_window_open: bool,
    pub same_calendar_day: bool,
}

impl CountdownState {
    /// Join is offered inside the lead window or anywhere on the start day
    pub fn show_join_action(&self) -> bool {
        self.join_window_open || self.same_calendar_day
    }
}

/// Evaluator output; `Inactive` when the webinar has no usable schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum WindowState {
    Inactive,
    Active(CountdownState),
}

impl WindowState {
    pub fn is_active(&self) -> bool {
        matches!(self, WindowState::Active(_))
    }

    pub fn show_join_action(&self) -> bool {
        match self {
            WindowState::Inactive => false,
            WindowState::Active(state) => state.show_join_action(),
        }
    }

    pub fn countdown(&self) -> Option<Countdown> {
        match self {
            WindowState::Inactive => None,
            WindowState::Active(state) => Some(state.countdown),
        }
    }
}

/// True when both instants fall on the same year/month/day in `a`'s zone
pub fn is_same_calendar_day<Tz: TimeZone>(a: &DateTime<Tz>, b: &DateTime<Tz>) -> bool {
    let b = b.with_timezone(&a.timezone());
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

/// Join-window policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinWindow {
    lead: TimeDelta,
}

impl Default for JoinWindow {
    fn default() -> Self {
        Self::from_lead_minutes(DEFAULT_JOIN_LEAD_MINUTES)
    }
}

impl JoinWindow {
    pub fn new(lead: TimeDelta) -> Self {
        Self { lead }
    }

    pub fn from_lead_minutes(minutes: u32) -> Self {
        Self::new(TimeDelta::minutes(i64::from(minutes)))
    }

    pub fn lead(&self) -> TimeDelta {
        self.lead
    }

    /// Whether a signed delta (start minus now) falls inside the window
    pub fn is_open(&self, delta_millis: i64) -> bool {
        delta_millis <= self.lead.num_milliseconds()
    }

    /// Evaluate a resolved start against `now`
    pub fn evaluate<Tz: TimeZone>(
        &self,
        target: Option<&DateTime<Tz>>,
        now: &DateTime<Tz>,
    ) -> WindowState {
        let Some(target) = target else {
            return WindowState::Inactive;
        };

        let delta_millis = target.clone().signed_duration_since(now).num_milliseconds();
        let countdown = Countdown::from_delta_millis(delta_millis);
        assert_countdown_invariants(&countdown);

        WindowState::Active(CountdownState {
            countdown,
            delta_millis,
            join_window_open: self.is_open(delta_millis),
            same_calendar_day: is_same_calendar_day(target, now),
        })
    }

    /// Resolve a webinar's schedule in `now`'s zone and evaluate it
    pub fn evaluate_webinar<Tz: TimeZone>(
        &self,
        webinar: &WebinarRecord,
        now: &DateTime<Tz>,
    ) -> WindowState {
        let target = schedule::start_of(webinar, &now.timezone());
        self.evaluate(target.as_ref(), now)
    }
}
