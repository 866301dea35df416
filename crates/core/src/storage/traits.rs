//! Storage port
//!
//! A minimal key-value interface standing in for client-local storage,
//! allowing different implementations (SQLite, in-memory).

use std::sync::Arc;

use crate::error::Result;

/// Key holding the JSON list of published webinars
pub const WEBINARS_KEY: &str = "webinars";

/// Key holding the active user's id
pub const CURRENT_USER_KEY: &str = "currentUserId";

/// Local key-value store
pub trait KeyValueStore {
    /// Read a value, `None` when the key is unset
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an unset key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}
