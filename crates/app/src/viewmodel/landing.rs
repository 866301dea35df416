//! Webinar landing view model
//!
//! Terminal rendering of a webinar's landing page: headline, countdown and
//! the offered call-to-action, plus the join / reminder handlers.

use std::io::Write;
use std::path::Path;

use chrono::Local;
use lobby_core::landing::NOT_FOUND_MESSAGE;
use lobby_core::schedule::Schedule;
use lobby_core::{
    ActionOutcome, LandingAction, LandingView, NotificationLevel, Result, WebinarRecord,
};

use crate::state::AppState;
use crate::ticker::CountdownTicker;

/// Evaluate a webinar against the local clock
fn view_now(state: &AppState, webinar: WebinarRecord) -> LandingView {
    let window_state = state
        .config
        .join_window()
        .evaluate_webinar(&webinar, &Local::now());
    LandingView::new(webinar, window_state)
}

fn render(view: &LandingView, default_thumbnail: &str, out: &mut dyn Write) -> Result<()> {
    let webinar = &view.webinar;
    writeln!(out, "{}", view.headline())?;
    if let Some(countdown) = view.visible_countdown() {
        let fields: Vec<String> = countdown
            .labelled()
            .iter()
            .map(|(label, value)| format!("{} {}", value, label))
            .collect();
        writeln!(out, "  {}", fields.join("  "))?;
    }
    writeln!(out, "{}", webinar.name)?;
    if !webinar.description.is_empty() {
        writeln!(out, "{}", webinar.description)?;
    }
    if let Some(schedule) = Schedule::from_record(webinar) {
        writeln!(out, "Starts {}", schedule.naive().format("%Y-%m-%d %I:%M %p"))?;
    }
    writeln!(out, "Thumbnail {}", webinar.thumbnail_or(default_thumbnail))?;
    writeln!(out, "[{}]", view.action().label())?;
    Ok(())
}

fn report(outcome: &ActionOutcome, out: &mut dyn Write) -> Result<()> {
    let notification = &outcome.notification;
    match notification.level {
        NotificationLevel::Error => tracing::warn!(notice = %notification.message, "Action failed"),
        _ => tracing::info!(notice = %notification.message, "Action completed"),
    }
    writeln!(out, "[{}] {}", notification.level, notification.message)?;
    if let Some(route) = &outcome.navigation {
        writeln!(out, "-> {}", route.path())?;
    }
    Ok(())
}

fn not_found(id: &str, out: &mut dyn Write) -> Result<()> {
    tracing::debug!(webinar_id = %id, "Webinar not found");
    writeln!(out, "{}", NOT_FOUND_MESSAGE)?;
    Ok(())
}

pub fn list_webinars(state: &AppState, out: &mut dyn Write) -> Result<()> {
    let webinars = state.catalog.list()?;
    if webinars.is_empty() {
        writeln!(out, "No webinars published")?;
    }
    for webinar in webinars {
        let view = view_now(state, webinar);
        writeln!(
            out,
            "{:<16} {:<32} {}",
            view.webinar.id,
            view.webinar.name,
            view.action().label()
        )?;
    }
    Ok(())
}

/// Publish webinars from a JSON file holding one record or a list
pub fn import(state: &AppState, path: &Path, out: &mut dyn Write) -> Result<()> {
    let text = std::fs::read_to_string(path)?;
    let records: Vec<WebinarRecord> = if text.trim_start().starts_with('[') {
        serde_json::from_str(&text)?
    } else {
        vec![serde_json::from_str(&text)?]
    };

    let count = records.len();
    for record in records {
        state.catalog.upsert(record)?;
    }
    tracing::info!(count, path = %path.display(), "Imported webinars");
    writeln!(out, "Imported {} webinar(s)", count)?;
    Ok(())
}

pub fn show(state: &AppState, id: &str, out: &mut dyn Write) -> Result<()> {
    let Some(webinar) = state.catalog.find(id)? else {
        return not_found(id, out);
    };

    if let Some(name) = state.current_username() {
        writeln!(out, "Signed in as {}", name)?;
    }
    let view = view_now(state, webinar);
    render(&view, &state.config.default_thumbnail, out)
}

/// Invoke `action` if the landing page currently offers it
pub fn invoke(state: &AppState, id: &str, action: LandingAction, out: &mut dyn Write) -> Result<()> {
    let Some(webinar) = state.catalog.find(id)? else {
        return not_found(id, out);
    };

    let view = view_now(state, webinar);
    match view.try_invoke(action) {
        Some(outcome) => report(&outcome, out),
        None => {
            writeln!(
                out,
                "\"{}\" is not available right now; the page offers \"{}\"",
                action.label(),
                view.action().label()
            )?;
            Ok(())
        }
    }
}

/// Re-render on every tick until `ticks` renders or Ctrl-C
pub async fn watch(
    state: &AppState,
    id: &str,
    ticks: Option<u32>,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(webinar) = state.catalog.find(id)? else {
        return not_found(id, out);
    };

    let ticker = CountdownTicker::start(
        webinar.clone(),
        state.config.join_window(),
        state.config.tick_interval(),
        Local::now,
    );
    let mut rx = ticker.subscribe();
    let thumbnail = state.config.default_thumbnail.as_str();

    render(&LandingView::new(webinar.clone(), ticker.current()), thumbnail, out)?;
    let mut rendered = 1;

    loop {
        if ticks.is_some_and(|limit| rendered >= limit) {
            break;
        }

        tokio::select! {
            changed = rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let window_state = *rx.borrow_and_update();
                writeln!(out)?;
                render(&LandingView::new(webinar.clone(), window_state), thumbnail, out)?;
                out.flush()?;
                rendered += 1;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted");
                break;
            }
        }
    }

    Ok(())
}
