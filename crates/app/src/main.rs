//! Lobby - webinar landing countdowns and demo sign-in
//!
//! Terminal front-end over `lobby-core`: renders a webinar's landing page,
//! ticks its countdown, and dispatches the join or reminder action.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod state;
mod ticker;
mod viewmodel;

fn main() {
    // Initialize logging (stderr, so command output stays clean)
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    tracing::debug!(command = ?cli.command, "Starting Lobby");

    // Initialize tokio runtime for the countdown ticker
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize application state
    let app_state = match state::AppState::new() {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to initialize application: {}", e);
            std::process::exit(1);
        }
    };

    let mut stdout = std::io::stdout();
    if let Err(e) = runtime.block_on(viewmodel::run(cli.command, &app_state, &mut stdout)) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}
