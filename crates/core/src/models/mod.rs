//! Data models for Lobby

mod user;
mod webinar;

pub use user::*;
pub use webinar::*;
