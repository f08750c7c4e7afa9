//! Raw service responses.
//!
//! Two backend versions are in the wild. Both share the top-level fields
//! below; they differ only in the per-day entries of `temperature_debug`:
//!
//! - morning/afternoon: `{ date, morning_temp, afternoon_temp, gdd }`
//! - min/max: `{ date, tmin, tmax, gdd }`, with a separate `daily_gdd` array
//!   at the top level that is not needed here and is ignored
//!
//! Every field is deserialized leniently. A field with an unexpected type is
//! treated as missing instead of failing the whole response.

use crate::error::FetchError;
use serde::Deserialize;
use serde_json::Value;

/// Unvalidated body of a `GET /gdd` response.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawResponse {
    /// Set when the service reports a failure.
    #[serde(default, deserialize_with = "lenient::error_message")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_gdd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub growth_stage: Option<String>,
    /// Per-day entries in the order the service sent them.
    #[serde(default, deserialize_with = "lenient::entries")]
    pub temperature_debug: Option<Vec<RawDayEntry>>,
}

/// One element of `temperature_debug`, in either backend shape.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawDayEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub gdd: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub morning_temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub afternoon_temp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub tmin: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub tmax: Option<f64>,
}

impl RawResponse {
    /// Parse a response body.
    ///
    /// Anything that is not a JSON object is a transport failure; field-level
    /// problems never are.
    pub fn from_json(body: &str) -> Result<Self, FetchError> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(FetchError::Transport(format!(
                "expected a JSON object, got {}",
                json_kind(&value)
            )));
        }
        Ok(RawResponse::deserialize(value)?)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

mod lenient {
    use super::RawDayEntry;
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let value = Value::deserialize(d)?;
        match value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            other => {
                log::warn!("Expected a number, got {}; treating as missing", other);
                Ok(None)
            }
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        match value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s)),
            Value::Number(n) => Ok(Some(n.to_string())),
            other => {
                log::warn!("Expected a string, got {}; treating as missing", other);
                Ok(None)
            }
        }
    }

    /// Any truthy value reports an error: a non-empty string is used as is,
    /// other values by their JSON text.
    pub fn error_message<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        let value = Value::deserialize(d)?;
        let message = match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        };
        Ok(message)
    }

    pub fn entries<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<RawDayEntry>>, D::Error> {
        let value = Value::deserialize(d)?;
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        RawDayEntry::deserialize(item).unwrap_or_else(|e| {
                            log::warn!("temperature_debug[{}] is not an entry: {}", i, e);
                            RawDayEntry::default()
                        })
                    })
                    .collect(),
            )),
            other => {
                log::warn!(
                    "temperature_debug is not an array ({}); treating as missing",
                    other
                );
                Ok(None)
            }
        }
    }
}
