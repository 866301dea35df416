//! Countdown ticker
//!
//! Re-evaluates a webinar's join window on a fixed period and publishes the
//! latest state on a watch channel. The ticker owns its task: dropping it
//! aborts the task, so a torn-down view never keeps a timer alive.

use std::time::Duration;

use chrono::{DateTime, TimeZone};
use lobby_core::{JoinWindow, WebinarRecord, WindowState};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub struct CountdownTicker {
    handle: JoinHandle<()>,
    rx: watch::Receiver<WindowState>,
}

impl CountdownTicker {
    /// Evaluate once immediately, then every `period` using `clock`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start<Tz, F>(webinar: WebinarRecord, window: JoinWindow, period: Duration, clock: F) -> Self
    where
        Tz: TimeZone + Send + 'static,
        Tz::Offset: Send,
        F: Fn() -> DateTime<Tz> + Send + 'static,
    {
        let initial = window.evaluate_webinar(&webinar, &clock());
        let (tx, rx) = watch::channel(initial);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // First tick completes immediately; the initial state is already published
            interval.tick().await;

            loop {
                interval.tick().await;
                let state = window.evaluate_webinar(&webinar, &clock());
                tx.send_if_modified(|current| {
                    if *current == state {
                        false
                    } else {
                        *current = state;
                        true
                    }
                });
            }
        });

        tracing::debug!(period_ms = period.as_millis() as u64, "Countdown ticker started");
        Self { handle, rx }
    }

    /// Latest published state
    pub fn current(&self) -> WindowState {
        *self.rx.borrow()
    }

    /// A receiver that observes every published change
    pub fn subscribe(&self) -> watch::Receiver<WindowState> {
        self.rx.clone()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.handle.abort();
        tracing::debug!("Countdown ticker stopped");
    }
}
