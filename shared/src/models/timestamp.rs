//! Lenient timestamp parsing for backend payloads
//!
//! The backend emits `createdAt` both with and without an offset
//! (`2024-05-01T18:30:00Z`, `2024-05-01T18:30:00.123`). Values are kept as
//! naive UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Parse a backend timestamp, returning `None` when the format is unknown
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    if let Ok(dt) = s.parse::<NaiveDateTime>() {
        return Some(dt);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(dt);
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

/// `#[serde(with = "lenient")]` for `Option<NaiveDateTime>` fields
pub mod lenient {
    use super::*;

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(|s| {
            let parsed = parse_timestamp(s);
            if parsed.is_none() {
                tracing::warn!(value = %s, "Unrecognized timestamp format, ignoring");
            }
            parsed
        }))
    }
}
