//! Webinar model

use serde::{Deserialize, Serialize};

/// A scheduled webinar as stored under the `webinars` key.
///
/// Date, time and period are kept as the raw strings the publisher wrote;
/// [`crate::schedule`] decides whether they form a valid point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebinarRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Calendar date, `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
    /// Wall-clock `HH:MM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// `AM` or `PM`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream_call_id: Option<String>,
}

impl WebinarRecord {
    /// Configured livestream identifier, treating blank values as absent
    pub fn stream_call_id(&self) -> Option<&str> {
        self.stream_call_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
    }

    pub fn has_stream(&self) -> bool {
        self.stream_call_id().is_some()
    }

    /// Thumbnail URI, or `fallback` when none was published
    pub fn thumbnail_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.thumbnail
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(fallback)
    }
}
