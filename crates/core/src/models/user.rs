//! User model

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role tag carried by a demo user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Host,
    Viewer,
}

impl UserRole {
    /// Hosts run webinars; viewers only watch them
    pub fn is_host(&self) -> bool {
        matches!(self, UserRole::Host)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Host => "host",
            UserRole::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A demo user account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

impl UserRecord {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: UserRole,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Synthesize a viewer for an email that has never logged in.
    ///
    /// The display name is the local part of the address (everything
    /// before the first `@`, or the whole string when there is none).
    pub fn viewer_from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email);
        Self {
            id: format!("user-{}", Uuid::new_v4().simple()),
            name: name.to_string(),
            email: email.to_string(),
            role: UserRole::Viewer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewer_name_is_local_part() {
        let user = UserRecord::viewer_from_email("ada@lovelace.dev");
        assert_eq!(user.name, "ada");
        assert_eq!(user.email, "ada@lovelace.dev");
        assert_eq!(user.role, UserRole::Viewer);
        assert!(user.id.starts_with("user-"));
    }

    #[test]
    fn test_viewer_without_at_sign_keeps_whole_string() {
        let user = UserRecord::viewer_from_email("nobody");
        assert_eq!(user.name, "nobody");
    }

    #[test]
    fn test_synthesized_ids_are_unique() {
        let a = UserRecord::viewer_from_email("a@x.io");
        let b = UserRecord::viewer_from_email("a@x.io");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&UserRole::Host).unwrap();
        assert_eq!(json, "\"host\"");
        assert!(UserRole::Host.is_host());
        assert!(!UserRole::Viewer.is_host());
    }
}
