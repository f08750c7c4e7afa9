//! Maps either backend response shape into one canonical per-day series.
//!
//! Shape is decided per entry from the fields it exposes, never from a
//! response-level version flag, so a response mixing shapes across rows
//! still maps row by row.

use crate::error::FetchError;
use crate::response::{RawDayEntry, RawResponse};
use serde::Serialize;

/// Growth stage shown when the service does not name one.
pub const UNKNOWN_STAGE: &str = "Unknown Stage";

/// Which pair of readings filled a record's temperature slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ReadingKind {
    /// `morning_temp` / `afternoon_temp`
    MorningAfternoon,
    /// `tmin` / `tmax`
    MinMax,
}

/// One day of the GDD series, independent of the backend shape.
///
/// Missing values stay `None` so that "no data" is never confused with zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanonicalDayRecord {
    /// Calendar date as sent by the service (empty if it sent none).
    pub date: String,
    pub gdd: Option<f64>,
    /// Morning reading or daily minimum.
    pub primary_temp: Option<f64>,
    /// Afternoon reading or daily maximum.
    pub secondary_temp: Option<f64>,
    /// `None` when the entry carried neither pair of readings.
    pub kind: Option<ReadingKind>,
}

impl From<&RawDayEntry> for CanonicalDayRecord {
    fn from(entry: &RawDayEntry) -> Self {
        let (kind, primary_temp, secondary_temp) =
            if entry.morning_temp.is_some() || entry.afternoon_temp.is_some() {
                (
                    Some(ReadingKind::MorningAfternoon),
                    entry.morning_temp,
                    entry.afternoon_temp,
                )
            } else if entry.tmin.is_some() || entry.tmax.is_some() {
                (Some(ReadingKind::MinMax), entry.tmin, entry.tmax)
            } else {
                (None, None, None)
            };
        CanonicalDayRecord {
            date: entry.date.clone().unwrap_or_default(),
            gdd: entry.gdd,
            primary_temp,
            secondary_temp,
            kind,
        }
    }
}

/// Scalar results of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuerySummary {
    pub total_gdd: f64,
    pub growth_stage: String,
}

impl Default for QuerySummary {
    fn default() -> Self {
        Self {
            total_gdd: 0.0,
            growth_stage: UNKNOWN_STAGE.to_string(),
        }
    }
}

/// A successful response in canonical form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedResponse {
    pub summary: QuerySummary,
    /// Same length and order as `temperature_debug`.
    pub series: Vec<CanonicalDayRecord>,
}

/// Normalize a raw response.
///
/// A reported `error` short-circuits; nothing else is read. Otherwise
/// missing or malformed summary fields take their defaults.
pub fn normalize(raw: &RawResponse) -> Result<NormalizedResponse, FetchError> {
    if let Some(message) = &raw.error {
        return Err(FetchError::BackendReported(message.clone()));
    }

    let summary = QuerySummary {
        total_gdd: raw.total_gdd.unwrap_or(0.0),
        growth_stage: raw
            .growth_stage
            .clone()
            .filter(|stage| !stage.is_empty())
            .unwrap_or_else(|| UNKNOWN_STAGE.to_string()),
    };

    let series = raw
        .temperature_debug
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(CanonicalDayRecord::from)
        .collect();

    Ok(NormalizedResponse { summary, series })
}
