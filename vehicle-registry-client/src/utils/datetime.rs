//! Millisecond-epoch timestamp serialization.
//!
//! The registry reports `ctime`/`mtime` as millisecond Unix timestamps.
//! Deserialization also accepts RFC3339 strings so snapshots written by
//! other tooling stay readable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// Serialize a `DateTime<Utc>` as a millisecond Unix timestamp.
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_i64(dt.timestamp_millis())
}

/// Deserialize a millisecond Unix timestamp or an RFC3339 string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        Millis(i64),
        Rfc3339(String),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::Millis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| Error::custom(format!("timestamp out of range: {ms}"))),
        Timestamp::Rfc3339(s) => DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| Error::custom(format!("invalid RFC3339 timestamp: {e}"))),
    }
}
