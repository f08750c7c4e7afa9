//! Query parameters and the outbound request they encode to.
//!
//! The store performs no range validation. A negative, NaN or infinite base
//! temperature is forwarded to the service exactly as coerced from the input.

use crate::dates::format_date;
use chrono::NaiveDate;

/// Location shown when the dashboard first opens.
pub const DEFAULT_LOCATION: &str = "Larnaca";

/// Base temperature (°C) shown when the dashboard first opens.
pub const DEFAULT_BASE_TEMPERATURE: f64 = 10.0;

/// The three user inputs that determine a GDD query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryParameters {
    pub location: String,
    /// Base temperature in °C, passed through unvalidated.
    pub base_temperature: f64,
    /// No query is issued until this is set.
    pub planting_date: Option<NaiveDate>,
}

impl QueryParameters {
    pub fn new(
        location: impl Into<String>,
        base_temperature: f64,
        planting_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            location: location.into(),
            base_temperature,
            planting_date,
        }
    }

    /// The request these parameters encode to, or `None` while no planting date is set.
    pub fn to_query(&self) -> Option<GddQuery> {
        let planting_date = self.planting_date?;
        Some(GddQuery {
            location: self.location.clone(),
            base_temp: format_base_temperature(self.base_temperature),
            start_date: format_date(&planting_date),
        })
    }
}

impl Default for QueryParameters {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION, DEFAULT_BASE_TEMPERATURE, None)
    }
}

/// Query string values for `GET /gdd`, and the key identifying a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GddQuery {
    pub location: String,
    pub base_temp: String,
    pub start_date: String,
}

impl GddQuery {
    /// `(name, value)` pairs in the order the service documents them.
    pub fn pairs(&self) -> [(&'static str, &str); 3] {
        [
            ("location", self.location.as_str()),
            ("base_temp", self.base_temp.as_str()),
            ("start_date", self.start_date.as_str()),
        ]
    }
}

/// Coerce base temperature form input to a number.
///
/// Blank input becomes 0 and anything unparseable becomes NaN. No other
/// feedback is given; the result goes to the service as is.
pub fn coerce_base_temperature(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let unsigned = trimmed.trim_start_matches(['+', '-']);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) && unsigned != "Infinity" {
        return f64::NAN;
    }
    if unsigned == "Infinity" {
        return if trimmed.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a base temperature for the query string: `10`, `10.5`, `NaN`, `Infinity`.
pub fn format_base_temperature(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

/// Holds the current parameters. Each setter replaces one field and reports
/// whether the value actually changed.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    params: QueryParameters,
}

impl ParameterStore {
    pub fn new(params: QueryParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &QueryParameters {
        &self.params
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> bool {
        let location = location.into();
        if self.params.location == location {
            return false;
        }
        self.params.location = location;
        true
    }

    pub fn set_base_temperature(&mut self, base_temperature: f64) -> bool {
        if same_number(self.params.base_temperature, base_temperature) {
            return false;
        }
        self.params.base_temperature = base_temperature;
        true
    }

    /// Set the base temperature from raw form input.
    pub fn set_base_temperature_input(&mut self, input: &str) -> bool {
        self.set_base_temperature(coerce_base_temperature(input))
    }

    pub fn set_planting_date(&mut self, planting_date: Option<NaiveDate>) -> bool {
        if self.params.planting_date == planting_date {
            return false;
        }
        self.params.planting_date = planting_date;
        true
    }

    /// Set the planting date from raw form input ("YYYY-MM-DD" or blank).
    pub fn set_planting_date_input(&mut self, input: &str) -> bool {
        self.set_planting_date(crate::dates::parse_planting_date(input))
    }

    /// Key of the request the current parameters call for.
    pub fn request_key(&self) -> Option<GddQuery> {
        self.params.to_query()
    }
}

/// Value identity: NaN equals NaN, and 0 differs from -0.
fn same_number(a: f64, b: f64) -> bool {
    a.to_bits() == b.to_bits() || (a.is_nan() && b.is_nan())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn defaults_match_the_dashboard() {
        let params = QueryParameters::default();
        assert_eq!(params.location, "Larnaca");
        assert_eq!(params.base_temperature, 10.0);
        assert!(params.planting_date.is_none());
        assert!(params.to_query().is_none());
    }

    #[test]
    fn query_encodes_exact_tuple() {
        let params = QueryParameters::new("Larnaca", 10.0, Some(date("2024-03-01")));
        let query = params.to_query().unwrap();
        assert_eq!(
            query.pairs(),
            [
                ("location", "Larnaca"),
                ("base_temp", "10"),
                ("start_date", "2024-03-01"),
            ]
        );
    }

    #[test]
    fn base_temperature_formatting() {
        assert_eq!(format_base_temperature(10.5), "10.5");
        assert_eq!(format_base_temperature(-3.0), "-3");
        assert_eq!(format_base_temperature(-0.0), "0");
        assert_eq!(format_base_temperature(f64::NAN), "NaN");
        assert_eq!(format_base_temperature(f64::NEG_INFINITY), "-Infinity");
    }

    #[test]
    fn base_temperature_coercion_passes_through() {
        assert_eq!(coerce_base_temperature("12"), 12.0);
        assert_eq!(coerce_base_temperature(" 7.5 "), 7.5);
        assert_eq!(coerce_base_temperature("-4"), -4.0);
        assert_eq!(coerce_base_temperature(""), 0.0);
        assert!(coerce_base_temperature("abc").is_nan());
        assert!(coerce_base_temperature("inf").is_nan());
        assert_eq!(coerce_base_temperature("Infinity"), f64::INFINITY);
        assert_eq!(coerce_base_temperature("1e2"), 100.0);
    }

    #[test]
    fn setters_report_changes_only() {
        let mut store = ParameterStore::default();
        assert!(!store.set_location("Larnaca"));
        assert!(store.set_location("Limassol"));
        assert!(!store.set_base_temperature(10.0));
        assert!(store.set_base_temperature_input("abc"));
        // NaN to NaN is not a change.
        assert!(!store.set_base_temperature_input("xyz"));
        assert!(store.set_planting_date_input("2024-03-01"));
        assert!(!store.set_planting_date(Some(date("2024-03-01"))));
    }

    #[test]
    fn request_key_follows_parameters() {
        let mut store = ParameterStore::default();
        assert!(store.request_key().is_none());
        store.set_planting_date_input("2024-03-01");
        let first = store.request_key().unwrap();
        store.set_base_temperature(8.0);
        let second = store.request_key().unwrap();
        assert_ne!(first, second);
        assert_eq!(second.base_temp, "8");
    }
}
