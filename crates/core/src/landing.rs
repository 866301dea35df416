//! Landing page actions
//!
//! Maps a join-window evaluation to the call-to-action a webinar's landing
//! page offers, and dispatches that action into notifications and an
//! optional navigation.

use serde::Serialize;

use crate::countdown::Countdown;
use crate::join_window::WindowState;
use crate::models::WebinarRecord;

pub const HEADLINE_STARTED: &str = "The webinar has started!";
pub const HEADLINE_EARLY: &str = "Seems like you are a little early";
pub const NOT_FOUND_MESSAGE: &str = "No webinar found";

pub const LIVESTREAM_NOT_CONFIGURED: &str = "Livestream not configured for this webinar";
pub const REMINDER_SET: &str = "Reminder set! We'll notify you when the webinar starts.";
pub const JOINING_LIVESTREAM: &str = "Joining livestream";

/// Call-to-action offered on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LandingAction {
    Join,
    Reminder,
}

impl LandingAction {
    pub fn for_state(state: &WindowState) -> Self {
        if state.show_join_action() {
            LandingAction::Join
        } else {
            LandingAction::Reminder
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LandingAction::Join => "Join Livestream",
            LandingAction::Reminder => "Get Reminder",
        }
    }
}

/// Navigation target
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Route {
    /// Live view of a webinar's stream
    LiveView { webinar_id: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::LiveView { webinar_id } => format!("/webinar/{}/live", webinar_id),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationLevel::Info => write!(f, "info"),
            NotificationLevel::Success => write!(f, "success"),
            NotificationLevel::Error => write!(f, "error"),
        }
    }
}

/// User-facing notification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

/// What invoking an action produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOutcome {
    pub notification: Notification,
    pub navigation: Option<Route>,
}

/// Invoke `action` for `webinar`.
///
/// Join navigates to the live view only when a stream is configured;
/// otherwise it reports an error and stays put. Reminder is
/// acknowledgement-only.
pub fn dispatch(action: LandingAction, webinar: &WebinarRecord) -> ActionOutcome {
    match action {
        LandingAction::Join => match webinar.stream_call_id() {
            Some(_) => ActionOutcome {
                notification: Notification::info(JOINING_LIVESTREAM),
                navigation: Some(Route::LiveView {
                    webinar_id: webinar.id.clone(),
                }),
            },
            None => {
                tracing::warn!(webinar_id = %webinar.id, "Join requested without a stream");
                ActionOutcome {
                    notification: Notification::error(LIVESTREAM_NOT_CONFIGURED),
                    navigation: None,
                }
            }
        },
        LandingAction::Reminder => ActionOutcome {
            notification: Notification::success(REMINDER_SET),
            navigation: None,
        },
    }
}

/// Landing page state for one webinar at one tick
#[derive(Debug, Clone)]
pub struct LandingView {
    pub webinar: WebinarRecord,
    pub state: WindowState,
}

impl LandingView {
    pub fn new(webinar: WebinarRecord, state: WindowState) -> Self {
        Self { webinar, state }
    }

    pub fn action(&self) -> LandingAction {
        LandingAction::for_state(&self.state)
    }

    pub fn headline(&self) -> &'static str {
        match self.action() {
            LandingAction::Join => HEADLINE_STARTED,
            LandingAction::Reminder => HEADLINE_EARLY,
        }
    }

    /// Countdown to display; hidden once join is offered
    pub fn visible_countdown(&self) -> Option<Countdown> {
        match self.action() {
            LandingAction::Join => None,
            LandingAction::Reminder => Some(self.state.countdown().unwrap_or_default()),
        }
    }

    /// Invoke the currently offered action
    pub fn invoke(&self) -> ActionOutcome {
        dispatch(self.action(), &self.webinar)
    }

    /// Invoke `action` only if it is the one on offer
    pub fn try_invoke(&self, action: LandingAction) -> Option<ActionOutcome> {
        (self.action() == action).then(|| dispatch(action, &self.webinar))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::join_window::CountdownState;

    fn webinar(stream: Option<&str>) -> WebinarRecord {
        WebinarRecord {
            id: "w-7".into(),
            name: "Async Rust".into(),
            description: String::new(),
            date: "2025-03-01".into(),
            time: Some("02:30".into()),
            period: Some("PM".into()),
            thumbnail: None,
            stream_call_id: stream.map(Into::into),
        }
    }

    fn open_state() -> WindowState {
        WindowState::Active(CountdownState {
            countdown: Countdown::from_millis(240_000),
            delta_millis: 240_000,
            join_window_open: true,
            same_calendar_day: true,
        })
    }

    fn early_state() -> WindowState {
        WindowState::Active(CountdownState {
            countdown: Countdown::from_millis(90_000_000),
            delta_millis: 90_000_000,
            join_window_open: false,
            same_calendar_day: false,
        })
    }

    #[test]
    fn test_join_with_stream_navigates_to_live_view() {
        let outcome = dispatch(LandingAction::Join, &webinar(Some("call-1")));
        assert_eq!(outcome.notification.level, NotificationLevel::Info);
        let route = outcome.navigation.unwrap();
        assert_eq!(route.path(), "/webinar/w-7/live");
    }

    #[test]
    fn test_join_without_stream_reports_error_and_stays() {
        let view = LandingView::new(webinar(None), open_state());
        assert_eq!(view.action(), LandingAction::Join);

        let outcome = view.invoke();
        assert_eq!(outcome.notification, Notification::error(LIVESTREAM_NOT_CONFIGURED));
        assert!(outcome.navigation.is_none());
    }

    #[test]
    fn test_reminder_is_acknowledgement_only() {
        let view = LandingView::new(webinar(Some("call-1")), early_state());
        assert_eq!(view.action(), LandingAction::Reminder);
        assert_eq!(view.headline(), HEADLINE_EARLY);

        let outcome = view.invoke();
        assert_eq!(outcome.notification, Notification::success(REMINDER_SET));
        assert!(outcome.navigation.is_none());
    }

    #[test]
    fn test_countdown_hidden_once_join_offered() {
        let view = LandingView::new(webinar(Some("call-1")), open_state());
        assert_eq!(view.headline(), HEADLINE_STARTED);
        assert!(view.visible_countdown().is_none());

        let early = LandingView::new(webinar(Some("call-1")), early_state());
        assert_eq!(early.visible_countdown().unwrap().days, 1);
    }

    #[test]
    fn test_only_offered_action_can_be_invoked() {
        let early = LandingView::new(webinar(Some("call-1")), early_state());
        assert!(early.try_invoke(LandingAction::Join).is_none());
        assert!(early.try_invoke(LandingAction::Reminder).is_some());

        let open = LandingView::new(webinar(Some("call-1")), open_state());
        assert!(open.try_invoke(LandingAction::Reminder).is_none());
        assert!(open.try_invoke(LandingAction::Join).unwrap().navigation.is_some());
    }

    #[test]
    fn test_inactive_schedule_offers_reminder_with_zero_countdown() {
        let view = LandingView::new(webinar(Some("call-1")), WindowState::Inactive);
        assert_eq!(view.action(), LandingAction::Reminder);
        assert!(view.visible_countdown().unwrap().is_zero());
    }
}
