//! Render-ready projections of the canonical series.
//!
//! All structs derive `Serialize` so they can be handed to D3.js as JSON
//! from the Dioxus frontend, or written out as CSV by the CLI.

use crate::controller::RequestStatus;
use crate::normalize::{CanonicalDayRecord, QuerySummary, ReadingKind};
use serde::Serialize;

/// Placeholder for a value the service did not send.
pub const NOT_AVAILABLE: &str = "N/A";

/// One point of the GDD/temperature line chart.
///
/// `None` serializes to `null`, which the chart draws as a gap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub date: String,
    pub gdd: Option<f64>,
    pub primary_temp: Option<f64>,
    pub secondary_temp: Option<f64>,
}

/// One row of the daily records table, already formatted for display.
///
/// `min` and `max` hold the primary and secondary temperature slots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub date: String,
    pub gdd: String,
    pub min: String,
    pub max: String,
}

/// Column headers and legend entries for the two temperature slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesLabels {
    pub primary: &'static str,
    pub secondary: &'static str,
}

impl SeriesLabels {
    pub const MORNING_AFTERNOON: SeriesLabels = SeriesLabels {
        primary: "Morning Temp (°C)",
        secondary: "Afternoon Temp (°C)",
    };
    pub const MIN_MAX: SeriesLabels = SeriesLabels {
        primary: "Min Temp (°C)",
        secondary: "Max Temp (°C)",
    };

    /// Morning/afternoon labels if any record came from that shape, min/max otherwise.
    pub fn for_series(series: &[CanonicalDayRecord]) -> Self {
        if series
            .iter()
            .any(|r| r.kind == Some(ReadingKind::MorningAfternoon))
        {
            Self::MORNING_AFTERNOON
        } else {
            Self::MIN_MAX
        }
    }
}

/// Everything the presentation layer draws from one query result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedViews {
    pub chart_series: Vec<ChartPoint>,
    pub table_rows: Vec<TableRow>,
    /// Only present on success with a positive total.
    pub summary_line: Option<String>,
    pub labels: SeriesLabels,
}

/// Read-only projection of the whole dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub status: RequestStatus,
    pub error_message: Option<String>,
    #[serde(flatten)]
    pub views: DerivedViews,
}

/// Build chart, table and summary views from a summary and series.
pub fn build_views(
    status: RequestStatus,
    summary: &QuerySummary,
    series: &[CanonicalDayRecord],
) -> DerivedViews {
    DerivedViews {
        chart_series: series.iter().map(chart_point).collect(),
        table_rows: series.iter().map(table_row).collect(),
        summary_line: summary_line(status, summary),
        labels: SeriesLabels::for_series(series),
    }
}

fn chart_point(record: &CanonicalDayRecord) -> ChartPoint {
    ChartPoint {
        date: record.date.clone(),
        gdd: record.gdd,
        primary_temp: record.primary_temp,
        secondary_temp: record.secondary_temp,
    }
}

fn table_row(record: &CanonicalDayRecord) -> TableRow {
    TableRow {
        date: record.date.clone(),
        gdd: format_value(record.gdd),
        min: format_temperature(record.primary_temp),
        max: format_temperature(record.secondary_temp),
    }
}

fn summary_line(status: RequestStatus, summary: &QuerySummary) -> Option<String> {
    // NaN fails the comparison too.
    if status == RequestStatus::Success && summary.total_gdd > 0.0 {
        Some(format!(
            "Total GDD: {:.2} | Current Growth Stage: {}",
            summary.total_gdd, summary.growth_stage
        ))
    } else {
        None
    }
}

/// Two decimal places, or "N/A".
pub fn format_value(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.2}", v))
}

/// Two decimal places with a "°C" suffix, or "N/A".
pub fn format_temperature(value: Option<f64>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |v| format!("{:.2}°C", v))
}
