//! Countdown decomposition

use serde::Serialize;

pub const MILLIS_PER_SECOND: u64 = 1_000;
pub const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
pub const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
pub const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;

/// Time left until a webinar starts, truncated to whole seconds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    pub const ZERO: Countdown = Countdown {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Split a non-negative duration into days / hours / minutes / seconds
    pub fn from_millis(total: u64) -> Self {
        Self {
            days: total / MILLIS_PER_DAY,
            hours: (total / MILLIS_PER_HOUR) % 24,
            minutes: (total / MILLIS_PER_MINUTE) % 60,
            seconds: (total / MILLIS_PER_SECOND) % 60,
        }
    }

    /// Clamp a signed delta to zero before decomposing it
    pub fn from_delta_millis(delta: i64) -> Self {
        Self::from_millis(delta.max(0) as u64)
    }

    pub fn to_millis(&self) -> u64 {
        self.days * MILLIS_PER_DAY
            + self.hours * MILLIS_PER_HOUR
            + self.minutes * MILLIS_PER_MINUTE
            + self.seconds * MILLIS_PER_SECOND
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Fields as zero-padded labels, in display order
    pub fn labelled(&self) -> [(&'static str, String); 4] {
        [
            ("Days", format!("{:02}", self.days)),
            ("Hours", format!("{:02}", self.hours)),
            ("Minutes", format!("{:02}", self.minutes)),
            ("Seconds", format!("{:02}", self.seconds)),
        ]
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decomposes_mixed_duration() {
        let total = 2 * MILLIS_PER_DAY + 3 * MILLIS_PER_HOUR + 4 * MILLIS_PER_MINUTE + 5_999;
        let c = Countdown::from_millis(total);
        assert_eq!(
            c,
            Countdown {
                days: 2,
                hours: 3,
                minutes: 4,
                seconds: 5
            }
        );
    }

    #[test]
    fn test_reconstruction_is_within_one_second() {
        let samples = [
            0,
            999,
            1_000,
            59_999,
            MILLIS_PER_HOUR - 1,
            MILLIS_PER_DAY + 1,
            123_456_789,
            40 * MILLIS_PER_DAY + 17,
        ];
        for total in samples {
            let rebuilt = Countdown::from_millis(total).to_millis();
            assert!(rebuilt <= total, "{total}");
            assert!(total - rebuilt < 1_000, "{total}");
        }
    }

    #[test]
    fn test_negative_delta_clamps_to_zero() {
        assert!(Countdown::from_delta_millis(-5_000).is_zero());
        assert_eq!(Countdown::from_delta_millis(61_000).minutes, 1);
    }

    #[test]
    fn test_display_is_zero_padded() {
        let c = Countdown::from_millis(MILLIS_PER_DAY + 5 * MILLIS_PER_SECOND);
        assert_eq!(c.to_string(), "01d 00h 00m 05s");
        assert_eq!(c.labelled()[3], ("Seconds", "05".to_string()));
    }
}
