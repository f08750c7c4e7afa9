//! Planting date helpers.

use chrono::NaiveDate;

/// Date format used by the service's `start_date` parameter and by HTML date inputs.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

/// Parse a planting date from form input.
///
/// Blank input and anything that is not a valid "YYYY-MM-DD" date count as no date.
pub fn parse_planting_date(s: &str) -> Option<NaiveDate> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    match NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Ignoring planting date {:?}: {}", trimmed, e);
            None
        }
    }
}
