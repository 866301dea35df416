//! Lobby configuration
//!
//! Loaded from `lobby.toml` in the platform config directory. Every field
//! has a default, so a missing file or a partial file is fine.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::join_window::{JoinWindow, DEFAULT_JOIN_LEAD_MINUTES};

pub const CONFIG_FILE_NAME: &str = "lobby.toml";
pub const DATABASE_FILE_NAME: &str = "lobby.db";

pub const DEFAULT_THUMBNAIL: &str =
    "https://images.unsplash.com/photo-1526498460520-4c246339dccb?q=80&w=1200&auto=format&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LobbyConfig {
    /// Minutes before the start at which joining opens
    pub join_lead_minutes: u32,
    /// Countdown refresh period
    pub tick_interval_ms: u64,
    /// Image shown for webinars published without a thumbnail
    pub default_thumbnail: String,
    /// Overrides the store location under the data directory
    pub database_path: Option<PathBuf>,
}

impl Default for LobbyConfig {
    fn default() -> Self {
        Self {
            join_lead_minutes: DEFAULT_JOIN_LEAD_MINUTES,
            tick_interval_ms: 1_000,
            default_thumbnail: DEFAULT_THUMBNAIL.to_string(),
            database_path: None,
        }
    }
}

impl LobbyConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load from `path`, falling back to defaults when it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&text)?;
        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn join_window(&self) -> JoinWindow {
        JoinWindow::from_lead_minutes(self.join_lead_minutes)
    }

    /// Tick period, never shorter than 10ms
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms.max(10))
    }

    /// Store location: explicit override or `<data_dir>/lobby.db`
    pub fn database_path(&self, data_dir: &Path) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(|| data_dir.join(DATABASE_FILE_NAME))
    }
}

/// Platform directories for config and data
#[derive(Debug, Clone)]
pub struct LobbyDirs {
    pub config_dir: PathBuf,
    pub data_dir: PathBuf,
}

impl LobbyDirs {
    pub fn discover() -> Result<Self> {
        let dirs = ProjectDirs::from("dev", "onyx", "lobby").ok_or_else(|| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine data directory",
            ))
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_dir().to_path_buf(),
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }
}
