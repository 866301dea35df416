//! Schedule decoding
//!
//! Turns the raw `date` / `time` / `period` strings of a webinar into an
//! absolute instant. Malformed input never errors; it yields `None`, which
//! the join window treats as "no timing available".

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::models::WebinarRecord;

/// Time used when a webinar was published without one
pub const DEFAULT_TIME: &str = "12:00";

/// 12-hour clock designator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Parse `AM` / `PM`, ignoring case and surrounding whitespace
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AM" => Some(Period::Am),
            "PM" => Some(Period::Pm),
            _ => None,
        }
    }
}

/// Convert a 12-hour clock hour to hour-of-day.
///
/// With a period, hours 0..=12 are accepted; 12 AM is midnight and 12 PM
/// is noon. Without a period the hour is already 24-hour.
pub fn to_24_hour(hour: u32, period: Option<Period>) -> Option<u32> {
    match period {
        Some(Period::Am) if hour <= 12 => Some(if hour == 12 { 0 } else { hour }),
        Some(Period::Pm) if hour <= 12 => Some(if hour == 12 { 12 } else { hour + 12 }),
        None if hour < 24 => Some(hour),
        _ => None,
    }
}

/// Parse an `HH:MM` wall-clock string into (hour, minute)
pub fn parse_clock(s: &str) -> Option<(u32, u32)> {
    let (hh, mm) = s.trim().split_once(':')?;
    let hour: u32 = hh.trim().parse().ok()?;
    let minute: u32 = mm.trim().parse().ok()?;
    (minute < 60).then_some((hour, minute))
}

/// Parse a calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// For timestamps only the calendar date in the timestamp's own offset is
/// kept; the wall-clock time comes from the webinar's `time` field.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// A decoded, zone-free webinar start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schedule {
    pub date: NaiveDate,
    /// Hour of day, 0..=23
    pub hour: u32,
    pub minute: u32,
}

impl Schedule {
    pub fn new(date: NaiveDate, hour: u32, minute: u32) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { date, hour, minute })
    }

    /// Decode the schedule of a webinar record
    pub fn from_record(record: &WebinarRecord) -> Option<Self> {
        let date = parse_date(&record.date)?;
        let clock = record
            .time
            .as_deref()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(DEFAULT_TIME);
        let (hour, minute) = parse_clock(clock)?;
        let period = match record.period.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(p) => Some(Period::parse(p)?),
        };
        Self::new(date, to_24_hour(hour, period)?, minute)
    }

    pub fn naive(&self) -> NaiveDateTime {
        // hour and minute are range-checked on construction
        let time = NaiveTime::from_hms_opt(self.hour, self.minute, 0).unwrap_or_default();
        self.date.and_time(time)
    }

    /// Resolve to an instant in `tz`.
    ///
    /// Returns `None` when the wall-clock time does not exist in the zone
    /// (a DST gap). Ambiguous times resolve to the earlier instant.
    pub fn resolve<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        tz.from_local_datetime(&self.naive()).earliest()
    }
}

/// Decode and resolve a webinar's start in one step
pub fn start_of<Tz: TimeZone>(record: &WebinarRecord, tz: &Tz) -> Option<DateTime<Tz>> {
    Schedule::from_record(record)?.resolve(tz)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, FixedOffset, Timelike, Utc};

    fn record(date: &str, time: Option<&str>, period: Option<&str>) -> WebinarRecord {
        WebinarRecord {
            id: "w".into(),
            name: "n".into(),
            description: String::new(),
            date: date.into(),
            time: time.map(Into::into),
            period: period.map(Into::into),
            thumbnail: None,
            stream_call_id: None,
        }
    }

    #[test]
    fn test_twelve_hour_decoding() {
        assert_eq!(to_24_hour(12, Some(Period::Am)), Some(0));
        assert_eq!(to_24_hour(12, Some(Period::Pm)), Some(12));
        for h in 0..12 {
            assert_eq!(to_24_hour(h, Some(Period::Am)), Some(h));
            assert_eq!(to_24_hour(h, Some(Period::Pm)), Some(h + 12));
        }
        assert_eq!(to_24_hour(13, Some(Period::Pm)), None);
        assert_eq!(to_24_hour(17, None), Some(17));
        assert_eq!(to_24_hour(24, None), None);
    }

    #[test]
    fn test_period_parsing_is_lenient_on_case() {
        assert_eq!(Period::parse(" pm "), Some(Period::Pm));
        assert_eq!(Period::parse("Am"), Some(Period::Am));
        assert_eq!(Period::parse("noon"), None);
    }

    #[test]
    fn test_afternoon_schedule_resolves() {
        let schedule = Schedule::from_record(&record("2025-03-01", Some("02:30"), Some("PM"))).unwrap();
        assert_eq!(schedule.hour, 14);
        assert_eq!(schedule.minute, 30);

        let tz = FixedOffset::east_opt(3600).unwrap();
        let start = schedule.resolve(&tz).unwrap();
        assert_eq!((start.year(), start.month(), start.day()), (2025, 3, 1));
        assert_eq!((start.hour(), start.minute()), (14, 30));
    }

    #[test]
    fn test_missing_time_defaults_to_noon() {
        let schedule = Schedule::from_record(&record("2025-03-01", None, None)).unwrap();
        assert_eq!((schedule.hour, schedule.minute), (12, 0));
    }

    #[test]
    fn test_rfc3339_date_keeps_calendar_day() {
        let schedule =
            Schedule::from_record(&record("2025-03-01T00:00:00.000Z", Some("09:15"), Some("AM")))
                .unwrap();
        assert_eq!(schedule.date, NaiveDate::from_ymd_opt(2025, 3, 1).unwrap());
        assert_eq!(schedule.hour, 9);
    }

    #[test]
    fn test_malformed_inputs_yield_none() {
        assert!(start_of(&record("not a date", Some("02:30"), Some("PM")), &Utc).is_none());
        assert!(start_of(&record("2025-02-30", Some("02:30"), Some("PM")), &Utc).is_none());
        assert!(start_of(&record("2025-03-01", Some("0230"), Some("PM")), &Utc).is_none());
        assert!(start_of(&record("2025-03-01", Some("02:75"), Some("PM")), &Utc).is_none());
        assert!(start_of(&record("2025-03-01", Some("14:30"), Some("PM")), &Utc).is_none());
        assert!(start_of(&record("2025-03-01", Some("02:30"), Some("XM")), &Utc).is_none());
    }
}
