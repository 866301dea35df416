//! Application state management

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use lobby_core::{LobbyConfig, LobbyDirs, Result, SqliteStore, UserDirectory, WebinarCatalog};

/// Main application state
///
/// One directory per process; its records vanish on exit while the
/// active-user reference persists in the store.
pub struct AppState {
    pub config: LobbyConfig,
    pub store: Arc<SqliteStore>,
    pub catalog: WebinarCatalog<Arc<SqliteStore>>,
    directory: Mutex<UserDirectory<Arc<SqliteStore>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        let dirs = LobbyDirs::discover()?;
        let config = LobbyConfig::load_or_default(&dirs.config_file())?;
        let db_path = config.database_path(&dirs.data_dir);

        // Ensure parent directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        tracing::debug!(path = %db_path.display(), "Opening store");
        let state = Self::with_store(config, SqliteStore::open(&db_path)?);
        tracing::debug!(schema_version = state.store.schema_version(), "Store ready");
        Ok(state)
    }

    pub fn with_store(config: LobbyConfig, store: SqliteStore) -> Self {
        let store = Arc::new(store);
        Self {
            config,
            catalog: WebinarCatalog::new(store.clone()),
            directory: Mutex::new(UserDirectory::new(store.clone())),
            store,
        }
    }

    /// In-memory state (for testing)
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::with_store(
            LobbyConfig::default(),
            SqliteStore::open_in_memory().expect("in-memory store"),
        )
    }

    pub fn directory(&self) -> MutexGuard<'_, UserDirectory<Arc<SqliteStore>>> {
        self.directory.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Display name of the active user, if it resolves
    pub fn current_username(&self) -> Option<String> {
        self.directory().current_user().map(|u| u.name.clone())
    }
}
