//! Fallback deserialization for loosely-shaped response envelopes.

use serde::Deserialize;
use serde::Deserializer;
use serde::de::DeserializeOwned;

/// Deserialize a field into `T`, falling back to `T::default()` when the
/// value is null or does not match the expected shape.
///
/// Combined with `#[serde(default)]` this makes an envelope field tolerate
/// absent, null, and malformed values alike, which is the contract for
/// `data.result` and `data.total` in list responses.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}
