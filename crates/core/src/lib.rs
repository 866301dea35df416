//! Lobby Core Library
//!
//! Webinar landing logic (schedule decoding, countdown, join window,
//! landing actions) and the demo user directory, over a local key-value
//! store.

pub mod config;
pub mod countdown;
pub mod directory;
pub mod error;
pub mod invariants;
pub mod join_window;
pub mod landing;
pub mod models;
pub mod schedule;
pub mod storage;

pub use config::{LobbyConfig, LobbyDirs};
pub use countdown::Countdown;
pub use directory::UserDirectory;
pub use error::{Error, Result};
pub use join_window::{CountdownState, JoinWindow, WindowState};
pub use landing::{dispatch, ActionOutcome, LandingAction, LandingView, Notification, NotificationLevel, Route};
pub use models::*;
pub use storage::{
    KeyValueStore, MemoryStore, SqliteStore, WebinarCatalog, CURRENT_USER_KEY, WEBINARS_KEY,
};
