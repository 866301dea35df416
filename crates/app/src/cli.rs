//! Command line interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "lobby", version, about = "Webinar lobby: countdowns, join window and demo users")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// One line typed at the `shell` prompt
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct ShellLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Log in by email, registering a viewer if the email is new
    Login { email: String },
    /// Clear the active user
    Logout,
    /// Show the active user
    Whoami,
    /// List users known to this process
    Users,
    /// Make an existing user active
    Use { id: String },
    /// List published webinars
    Webinars,
    /// Publish webinars from a JSON file (one record or a list)
    Import { path: PathBuf },
    /// Render a webinar's landing page once
    Show { id: String },
    /// Render a webinar's landing page on every tick
    Watch {
        id: String,
        /// Stop after this many updates
        #[arg(long)]
        ticks: Option<u32>,
    },
    /// Join a webinar's livestream
    Join { id: String },
    /// Ask for a reminder before a webinar starts
    Remind { id: String },
    /// Run commands interactively, keeping registered users for the session
    Shell,
}
