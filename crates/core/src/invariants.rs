//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::countdown::Countdown;
use crate::models::UserRecord;

/// Validate that a countdown is a normalized decomposition
pub fn assert_countdown_invariants(countdown: &Countdown) {
    debug_assert!(countdown.hours < 24, "Countdown has {} hours", countdown.hours);
    debug_assert!(
        countdown.minutes < 60,
        "Countdown has {} minutes",
        countdown.minutes
    );
    debug_assert!(
        countdown.seconds < 60,
        "Countdown has {} seconds",
        countdown.seconds
    );
}

/// Validate that a user directory has unique ids and unique emails
pub fn assert_directory_invariants(users: &[UserRecord]) {
    for (i, user) in users.iter().enumerate() {
        debug_assert!(!user.id.is_empty(), "User at index {} has empty id", i);

        let later = &users[i + 1..];
        debug_assert!(
            !later.iter().any(|u| u.id == user.id),
            "Duplicate user id {}",
            user.id
        );
        debug_assert!(
            !later.iter().any(|u| u.email == user.email),
            "Duplicate user email {}",
            user.email
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserRole;

    #[test]
    fn test_valid_countdown() {
        assert_countdown_invariants(&Countdown::from_millis(987_654_321));
    }

    #[test]
    fn test_valid_directory() {
        let users = vec![
            UserRecord::new("user-1", "A", "a@x.io", UserRole::Host),
            UserRecord::new("user-2", "B", "b@x.io", UserRole::Viewer),
        ];
        assert_directory_invariants(&users);
    }

    #[test]
    #[should_panic(expected = "Duplicate user email")]
    fn test_duplicate_email_detected() {
        let users = vec![
            UserRecord::new("user-1", "A", "a@x.io", UserRole::Host),
            UserRecord::new("user-2", "B", "a@x.io", UserRole::Viewer),
        ];
        assert_directory_invariants(&users);
    }

    #[test]
    #[should_panic(expected = "hours")]
    fn test_denormalized_countdown_detected() {
        let countdown = Countdown {
            days: 0,
            hours: 25,
            minutes: 0,
            seconds: 0,
        };
        assert_countdown_invariants(&countdown);
    }
}
