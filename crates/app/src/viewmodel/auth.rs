//! Authentication view model

use std::io::Write;

use lobby_core::Result;

use crate::state::AppState;

pub fn login(state: &AppState, email: &str, out: &mut dyn Write) -> Result<()> {
    let user = state.directory().login_by_email(email.trim()).clone();
    tracing::info!(user_id = %user.id, role = %user.role, "Logged in");
    writeln!(out, "Logged in as {} <{}> ({})", user.name, user.email, user.role)?;
    Ok(())
}

pub fn logout(state: &AppState, out: &mut dyn Write) -> Result<()> {
    state.directory().logout();
    writeln!(out, "Logged out")?;
    Ok(())
}

pub fn whoami(state: &AppState, out: &mut dyn Write) -> Result<()> {
    let directory = state.directory();
    match (directory.current_user(), directory.active_user_id()) {
        (Some(user), _) => {
            writeln!(out, "{} <{}> ({})", user.name, user.email, user.role)?;
        }
        (None, Some(id)) => {
            writeln!(out, "Active user {} is not known to this session", id)?;
        }
        (None, None) => {
            writeln!(out, "Not logged in")?;
        }
    }
    Ok(())
}

pub fn list_users(state: &AppState, out: &mut dyn Write) -> Result<()> {
    let directory = state.directory();
    let active = directory.active_user_id();
    for user in directory.list_all() {
        let marker = if active.as_deref() == Some(user.id.as_str()) { "*" } else { " " };
        writeln!(
            out,
            "{} {:<12} {:<20} {:<24} {}",
            marker, user.id, user.name, user.email, user.role
        )?;
    }
    Ok(())
}

pub fn use_user(state: &AppState, id: &str, out: &mut dyn Write) -> Result<()> {
    match state.directory().set_active(id) {
        Some(user) => writeln!(out, "Now acting as {} ({})", user.name, user.role)?,
        None => writeln!(out, "No user with id {}", id)?,
    }
    Ok(())
}
