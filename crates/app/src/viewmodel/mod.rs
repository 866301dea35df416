//! View models driving the terminal front-end

mod auth;
mod landing;

use std::io::Write;

use clap::Parser;
use lobby_core::{LandingAction, Result};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::cli::{Command, ShellLine};
use crate::state::AppState;

/// Run one top-level command
pub async fn run(command: Command, state: &AppState, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Shell => {
            let stdin = tokio::io::BufReader::new(tokio::io::stdin());
            shell(state, stdin, out).await
        }
        command => execute(command, state, out).await,
    }
}

async fn execute(command: Command, state: &AppState, out: &mut dyn Write) -> Result<()> {
    match command {
        Command::Login { email } => auth::login(state, &email, out),
        Command::Logout => auth::logout(state, out),
        Command::Whoami => auth::whoami(state, out),
        Command::Users => auth::list_users(state, out),
        Command::Use { id } => auth::use_user(state, &id, out),
        Command::Webinars => landing::list_webinars(state, out),
        Command::Import { path } => landing::import(state, &path, out),
        Command::Show { id } => landing::show(state, &id, out),
        Command::Watch { id, ticks } => landing::watch(state, &id, ticks, out).await,
        Command::Join { id } => landing::invoke(state, &id, LandingAction::Join, out),
        Command::Remind { id } => landing::invoke(state, &id, LandingAction::Reminder, out),
        Command::Shell => {
            writeln!(out, "Already in a shell")?;
            Ok(())
        }
    }
}

/// Read commands line by line until EOF or `exit`.
///
/// Users registered here live until the shell exits.
async fn shell<R>(state: &AppState, input: R, out: &mut dyn Write) -> Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    write!(out, "lobby> ")?;
    out.flush()?;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "exit" || line == "quit" {
            break;
        }
        if !line.is_empty() {
            match ShellLine::try_parse_from(line.split_whitespace()) {
                Ok(parsed) => {
                    if let Err(e) = execute(parsed.command, state, out).await {
                        tracing::error!(error = %e, "Command failed");
                        writeln!(out, "error: {}", e)?;
                    }
                }
                Err(e) => write!(out, "{}", e.render())?,
            }
        }
        write!(out, "lobby> ")?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
