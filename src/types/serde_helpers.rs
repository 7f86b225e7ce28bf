//! Custom serde helpers for Bitget's loosely typed response fields.
//!
//! Bitget encodes most numbers as JSON strings, timestamps as either strings
//! or numbers depending on the endpoint, and sends `""` where a value is
//! missing. Each helper goes through `serde_json::Value` first so that it
//! behaves the same with or without `arbitrary_precision`.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

fn number_text(value: Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) if s.is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(format!("expected a string or number, got {other}")),
    }
}

/// Deserialize a string or a number into a `String`.
///
/// The envelope `code` is `"00000"` on most endpoints but some return a
/// bare number.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use bitget_api_client::types::serde_helpers::string_or_number;
///
/// #[derive(Deserialize)]
/// struct Envelope {
///     #[serde(deserialize_with = "string_or_number::deserialize")]
///     code: String,
/// }
///
/// let a: Envelope = serde_json::from_str(r#"{"code":"00000"}"#).unwrap();
/// let b: Envelope = serde_json::from_str(r#"{"code":40009}"#).unwrap();
/// assert_eq!(a.code, "00000");
/// assert_eq!(b.code, "40009");
/// ```
pub mod string_or_number {
    use super::*;

    /// Deserialize a string or number as its text.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(de::Error::custom(format!(
                "expected a string or number, got {other}"
            ))),
        }
    }
}

/// Millisecond timestamps sent as either `"1700000000000"` or `1700000000000`.
pub mod millis {
    use super::*;

    /// Deserialize a required millisecond timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = number_text(Value::deserialize(deserializer)?)
            .map_err(<D::Error as de::Error>::custom)?
            .ok_or_else(|| <D::Error as de::Error>::custom("missing timestamp"))?;
        text.parse::<u64>().map_err(de::Error::custom)
    }
}

/// Optional millisecond timestamps; `null` and `""` become `None`.
///
/// Use together with `#[serde(default)]`.
pub mod optional_millis {
    use super::*;

    /// Deserialize an optional millisecond timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        number_text(Value::deserialize(deserializer)?)
            .map_err(<D::Error as de::Error>::custom)?
            .map(|text| text.parse::<u64>().map_err(<D::Error as de::Error>::custom))
            .transpose()
    }
}

/// Helper for decimal fields that may be `""` or `null`.
///
/// Use together with `#[serde(default)]`.
///
/// # Example
///
/// ```rust
/// use rust_decimal::Decimal;
/// use serde::Deserialize;
/// use bitget_api_client::types::serde_helpers::maybe_decimal;
///
/// #[derive(Deserialize)]
/// struct Balance {
///     #[serde(default, deserialize_with = "maybe_decimal::deserialize")]
///     limit_available: Option<Decimal>,
/// }
///
/// let empty: Balance = serde_json::from_str(r#"{"limit_available":""}"#).unwrap();
/// assert!(empty.limit_available.is_none());
///
/// let set: Balance = serde_json::from_str(r#"{"limit_available":"1.5"}"#).unwrap();
/// assert_eq!(set.limit_available, Some(Decimal::new(15, 1)));
/// ```
pub mod maybe_decimal {
    use super::*;

    /// Deserialize an optional decimal from a string or number.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        number_text(Value::deserialize(deserializer)?)
            .map_err(<D::Error as de::Error>::custom)?
            .map(|text| text.parse::<Decimal>().map_err(<D::Error as de::Error>::custom))
            .transpose()
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// Bitget returns `""` instead of null for unset fields such as `clientOid`
/// or `tag`.
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}
