//! Demo user directory
//!
//! An in-memory list of users plus an "active user" reference persisted in
//! a [`KeyValueStore`]. This is a stand-in for real authentication: there
//! are no passwords and no sessions, only an id pointer.
//!
//! The record list lives for the process; the active reference outlives it.
//! After a restart the reference may name a user created in an earlier
//! process, in which case it resolves to nothing.

use tracing::{debug, info, instrument, warn};

use crate::invariants::assert_directory_invariants;
use crate::models::{UserRecord, UserRole};
use crate::storage::{KeyValueStore, CURRENT_USER_KEY};

/// Users present at process start
pub fn seed_users() -> Vec<UserRecord> {
    vec![
        UserRecord::new("user-1", "John Doe", "john@example.com", UserRole::Host),
        UserRecord::new("user-2", "Jane Smith", "jane@example.com", UserRole::Host),
        UserRecord::new("user-3", "Viewer One", "viewer1@example.com", UserRole::Viewer),
    ]
}

pub struct UserDirectory<S> {
    users: Vec<UserRecord>,
    store: S,
}

impl<S: KeyValueStore> UserDirectory<S> {
    /// Directory holding the seed users
    pub fn new(store: S) -> Self {
        Self::with_users(store, seed_users())
    }

    pub fn with_users(store: S, users: Vec<UserRecord>) -> Self {
        assert_directory_invariants(&users);
        Self { users, store }
    }

    /// Find user by exact id
    pub fn find_by_id(&self, id: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Find user by exact (case-sensitive) email
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }

    /// Make `id` the active user if it exists.
    ///
    /// An unknown id leaves the current reference untouched.
    #[instrument(skip(self))]
    pub fn set_active(&self, id: &str) -> Option<&UserRecord> {
        let user = self.find_by_id(id)?;
        self.persist_active(&user.id);
        Some(user)
    }

    /// Log in by email, creating a viewer on first sight.
    ///
    /// Existing emails are reused as-is, so repeated logins neither grow
    /// the directory nor change the returned id.
    #[instrument(skip(self))]
    pub fn login_by_email(&mut self, email: &str) -> &UserRecord {
        let index = match self.users.iter().position(|u| u.email == email) {
            Some(index) => index,
            None => {
                let user = UserRecord::viewer_from_email(email);
                info!(user_id = %user.id, "Registered new viewer");
                self.users.push(user);
                assert_directory_invariants(&self.users);
                self.users.len() - 1
            }
        };

        self.persist_active(&self.users[index].id);
        &self.users[index]
    }

    /// Clear the active reference
    #[instrument(skip(self))]
    pub fn logout(&self) {
        if let Err(e) = self.store.remove(CURRENT_USER_KEY) {
            warn!(error = %e, "Failed to clear active user");
        }
    }

    /// Raw active reference, which may dangle
    pub fn active_user_id(&self) -> Option<String> {
        match self.store.get(CURRENT_USER_KEY) {
            Ok(id) => id.filter(|id| !id.is_empty()),
            Err(e) => {
                warn!(error = %e, "Failed to read active user");
                None
            }
        }
    }

    /// Resolve the active reference; re-read from the store on every call
    pub fn current_user(&self) -> Option<&UserRecord> {
        let id = self.active_user_id()?;
        let user = self.find_by_id(&id);
        if user.is_none() {
            debug!(user_id = %id, "Active user reference does not resolve");
        }
        user
    }

    /// Snapshot of all users in insertion order
    pub fn list_all(&self) -> &[UserRecord] {
        &self.users
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn persist_active(&self, id: &str) {
        if let Err(e) = self.store.set(CURRENT_USER_KEY, id) {
            warn!(user_id = %id, error = %e, "Failed to persist active user");
        }
    }
}
