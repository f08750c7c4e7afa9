//! Request lifecycle for one dashboard session.
//!
//! The controller performs no I/O. Changing a parameter returns a
//! [`PendingRequest`] when a fetch is due; the caller performs it through a
//! [`GddSource`](crate::source::GddSource) and hands the outcome back with
//! [`RequestController::complete`]. Every request carries a generation
//! number, and only the latest generation may update state, so a slow
//! response for superseded parameters is dropped.

use crate::error::FetchError;
use crate::normalize::{normalize, CanonicalDayRecord, QuerySummary};
use crate::params::{GddQuery, ParameterStore, QueryParameters};
use crate::response::RawResponse;
use crate::views::{build_views, DashboardView};
use chrono::NaiveDate;
use log::{debug, info, warn};
use serde::Serialize;

/// Where the latest request is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RequestStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// A fetch the caller should perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub generation: u64,
    pub query: GddQuery,
}

/// What [`RequestController::complete`] did with an outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// A newer request was issued (or the request was abandoned) meanwhile.
    Stale,
}

/// Owns the parameters, request status and last result of one dashboard session.
#[derive(Debug, Clone, Default)]
pub struct RequestController {
    store: ParameterStore,
    status: RequestStatus,
    summary: QuerySummary,
    series: Vec<CanonicalDayRecord>,
    error_message: Option<String>,
    /// Generation of the latest issued request; 0 before the first.
    generation: u64,
}

impl RequestController {
    pub fn new(params: QueryParameters) -> Self {
        Self {
            store: ParameterStore::new(params),
            ..Self::default()
        }
    }

    pub fn params(&self) -> &QueryParameters {
        self.store.params()
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn summary(&self) -> &QuerySummary {
        &self.summary
    }

    pub fn series(&self) -> &[CanonicalDayRecord] {
        &self.series
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == RequestStatus::Loading
    }

    pub fn set_location(&mut self, location: impl Into<String>) -> Option<PendingRequest> {
        let changed = self.store.set_location(location);
        self.trigger_if(changed)
    }

    pub fn set_base_temperature(&mut self, base_temperature: f64) -> Option<PendingRequest> {
        let changed = self.store.set_base_temperature(base_temperature);
        self.trigger_if(changed)
    }

    /// Set the base temperature from raw form input, coercing it without validation.
    pub fn set_base_temperature_input(&mut self, input: &str) -> Option<PendingRequest> {
        let changed = self.store.set_base_temperature_input(input);
        self.trigger_if(changed)
    }

    pub fn set_planting_date(&mut self, planting_date: Option<NaiveDate>) -> Option<PendingRequest> {
        let changed = self.store.set_planting_date(planting_date);
        self.trigger_if(changed)
    }

    /// Set the planting date from raw form input ("YYYY-MM-DD" or blank).
    pub fn set_planting_date_input(&mut self, input: &str) -> Option<PendingRequest> {
        let changed = self.store.set_planting_date_input(input);
        self.trigger_if(changed)
    }

    /// Replace all three parameters at once. Fires only if the tuple changed.
    pub fn set_parameters(&mut self, params: QueryParameters) -> Option<PendingRequest> {
        let QueryParameters {
            location,
            base_temperature,
            planting_date,
        } = params;
        let mut changed = self.store.set_location(location);
        changed |= self.store.set_base_temperature(base_temperature);
        changed |= self.store.set_planting_date(planting_date);
        self.trigger_if(changed)
    }

    fn trigger_if(&mut self, changed: bool) -> Option<PendingRequest> {
        if changed {
            self.on_parameters_changed()
        } else {
            None
        }
    }

    /// Evaluate the trigger for the current parameters.
    ///
    /// Without a planting date nothing is issued and previous results stay
    /// as they are; a request still in flight is abandoned. Otherwise a new
    /// request supersedes any earlier one.
    pub fn on_parameters_changed(&mut self) -> Option<PendingRequest> {
        let Some(query) = self.store.request_key() else {
            if self.status == RequestStatus::Loading {
                debug!("Planting date cleared; abandoning request #{}", self.generation);
                self.generation += 1;
                self.status = RequestStatus::Idle;
            }
            return None;
        };

        self.generation += 1;
        self.status = RequestStatus::Loading;
        self.error_message = None;
        debug!(
            "Issuing GDD request #{} for {} (base {}) from {}",
            self.generation, query.location, query.base_temp, query.start_date
        );
        Some(PendingRequest {
            generation: self.generation,
            query,
        })
    }

    /// Apply the outcome of a fetch: the response body, or why there is none.
    pub fn complete(&mut self, generation: u64, outcome: Result<String, FetchError>) -> Completion {
        if generation != self.generation || self.status != RequestStatus::Loading {
            debug!(
                "Discarding response #{} (latest is #{})",
                generation, self.generation
            );
            return Completion::Stale;
        }

        let normalized = outcome
            .and_then(|body| RawResponse::from_json(&body))
            .and_then(|raw| normalize(&raw));

        match normalized {
            Ok(normalized) => {
                info!(
                    "GDD request #{} succeeded: {} days, total {}",
                    generation,
                    normalized.series.len(),
                    normalized.summary.total_gdd
                );
                self.status = RequestStatus::Success;
                self.summary = normalized.summary;
                self.series = normalized.series;
            }
            Err(FetchError::BackendReported(message)) => {
                warn!("GDD service reported an error: {}", message);
                self.status = RequestStatus::Error;
                self.error_message = Some(message);
                self.summary = QuerySummary::default();
                self.series.clear();
            }
            Err(err @ FetchError::Transport(_)) => {
                // The previous series stays on screen; the status marks it stale.
                warn!("GDD request #{} failed: {}", generation, err);
                self.status = RequestStatus::Error;
                self.error_message = Some(err.user_message());
            }
        }
        Completion::Applied
    }

    /// Everything the presentation layer needs to render.
    pub fn view(&self) -> DashboardView {
        DashboardView {
            status: self.status,
            error_message: self.error_message.clone(),
            views: build_views(self.status, &self.summary, &self.series),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TRANSPORT_FAILURE_MESSAGE;
    use crate::views::TableRow;

    const VEGETATIVE: &str = r#"{"total_gdd": 42.5, "growth_stage": "Vegetative",
        "temperature_debug": [{"date": "2024-03-01", "tmin": 8, "tmax": 18, "gdd": 3}]}"#;

    const EMERGENCE: &str = r#"{"total_gdd": 5, "growth_stage": "Emergence",
        "temperature_debug": [{"date": "2024-04-01", "morning_temp": 9, "afternoon_temp": 14, "gdd": 1.5}]}"#;

    fn ok(body: &str) -> Result<String, FetchError> {
        Ok(body.to_string())
    }

    fn with_date(date: &str) -> (RequestController, PendingRequest) {
        let mut controller = RequestController::default();
        let pending = controller.set_planting_date_input(date).unwrap();
        (controller, pending)
    }

    #[test]
    fn starts_idle_without_planting_date() {
        let mut controller = RequestController::default();
        assert_eq!(controller.status(), RequestStatus::Idle);
        assert!(controller.on_parameters_changed().is_none());
        assert!(controller.set_location("Paphos").is_none());
        assert!(controller.set_base_temperature(5.0).is_none());
        assert_eq!(controller.status(), RequestStatus::Idle);
    }

    #[test]
    fn end_to_end_min_max_response() {
        let mut controller = RequestController::default();
        let pending = controller
            .set_parameters(QueryParameters::new(
                "Larnaca",
                10.0,
                NaiveDate::from_ymd_opt(2024, 3, 1),
            ))
            .unwrap();
        assert_eq!(controller.status(), RequestStatus::Loading);
        assert_eq!(
            pending.query.pairs(),
            [("location", "Larnaca"), ("base_temp", "10"), ("start_date", "2024-03-01")]
        );

        assert_eq!(controller.complete(pending.generation, ok(VEGETATIVE)), Completion::Applied);
        let view = controller.view();
        assert_eq!(view.status, RequestStatus::Success);
        let summary = view.views.summary_line.unwrap();
        assert!(summary.contains("42.50"));
        assert!(summary.contains("Vegetative"));
        assert_eq!(
            view.views.table_rows[0],
            TableRow {
                date: "2024-03-01".to_string(),
                gdd: "3.00".to_string(),
                min: "8.00°C".to_string(),
                max: "18.00°C".to_string(),
            }
        );
    }

    #[test]
    fn stale_response_never_overwrites_newer_result() {
        let (mut controller, first) = with_date("2024-03-01");
        let second = controller.set_location("Nicosia").unwrap();
        assert!(second.generation > first.generation);

        assert_eq!(controller.complete(second.generation, ok(EMERGENCE)), Completion::Applied);
        assert_eq!(controller.complete(first.generation, ok(VEGETATIVE)), Completion::Stale);

        assert_eq!(controller.status(), RequestStatus::Success);
        assert_eq!(controller.summary().growth_stage, "Emergence");
        assert_eq!(controller.series()[0].date, "2024-04-01");
    }

    #[test]
    fn stale_response_arriving_first_is_discarded() {
        let (mut controller, first) = with_date("2024-03-01");
        let second = controller.set_base_temperature(8.0).unwrap();

        assert_eq!(controller.complete(first.generation, ok(VEGETATIVE)), Completion::Stale);
        assert_eq!(controller.status(), RequestStatus::Loading);
        assert!(controller.series().is_empty());

        controller.complete(second.generation, ok(EMERGENCE));
        assert_eq!(controller.summary().growth_stage, "Emergence");
    }

    #[test]
    fn unchanged_value_does_not_refire() {
        let (mut controller, _) = with_date("2024-03-01");
        assert!(controller.set_planting_date_input("2024-03-01").is_none());
        assert!(controller.set_location("Larnaca").is_none());
        assert!(controller.set_base_temperature_input("10").is_none());
        assert!(controller.set_parameters(controller.params().clone()).is_none());
    }

    #[test]
    fn backend_error_resets_results() {
        let (mut controller, first) = with_date("2024-03-01");
        controller.complete(first.generation, ok(VEGETATIVE));

        let second = controller.set_location("Atlantis").unwrap();
        controller.complete(second.generation, ok(r#"{"error": "Location not found"}"#));

        let view = controller.view();
        assert_eq!(view.status, RequestStatus::Error);
        assert_eq!(view.error_message.as_deref(), Some("Location not found"));
        assert!(view.views.table_rows.is_empty());
        assert!(view.views.summary_line.is_none());
        assert_eq!(controller.summary(), &QuerySummary::default());
    }

    #[test]
    fn transport_failure_keeps_previous_series() {
        let (mut controller, first) = with_date("2024-03-01");
        controller.complete(first.generation, ok(VEGETATIVE));

        let second = controller.set_base_temperature(12.0).unwrap();
        controller.complete(
            second.generation,
            Err(FetchError::Transport("connection reset".to_string())),
        );
        assert_eq!(controller.status(), RequestStatus::Error);
        assert_eq!(controller.error_message(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert_eq!(controller.series().len(), 1);
        assert!(controller.view().views.summary_line.is_none());

        let third = controller.set_base_temperature(11.0).unwrap();
        controller.complete(third.generation, ok("<html>Bad Gateway</html>"));
        assert_eq!(controller.error_message(), Some(TRANSPORT_FAILURE_MESSAGE));
        assert_eq!(controller.series().len(), 1);
    }

    #[test]
    fn new_request_clears_error_message() {
        let (mut controller, first) = with_date("2024-03-01");
        controller.complete(first.generation, ok(r#"{"error": "Service unavailable"}"#));
        assert!(controller.error_message().is_some());

        let second = controller.set_location("Limassol").unwrap();
        assert_eq!(controller.status(), RequestStatus::Loading);
        assert!(controller.error_message().is_none());
        controller.complete(second.generation, ok(EMERGENCE));
        assert_eq!(controller.status(), RequestStatus::Success);
    }

    #[test]
    fn clearing_planting_date_abandons_request_and_keeps_data() {
        let (mut controller, first) = with_date("2024-03-01");
        controller.complete(first.generation, ok(VEGETATIVE));

        let second = controller.set_location("Paphos").unwrap();
        assert!(controller.set_planting_date_input("").is_none());
        assert_eq!(controller.status(), RequestStatus::Idle);
        assert_eq!(controller.complete(second.generation, ok(EMERGENCE)), Completion::Stale);
        assert_eq!(controller.summary().growth_stage, "Vegetative");
    }

    #[test]
    fn clearing_planting_date_after_success_is_a_no_op() {
        let (mut controller, first) = with_date("2024-03-01");
        controller.complete(first.generation, ok(VEGETATIVE));
        assert!(controller.set_planting_date(None).is_none());
        assert_eq!(controller.status(), RequestStatus::Success);
        assert_eq!(controller.series().len(), 1);
    }

    #[test]
    fn duplicate_completion_is_ignored() {
        let (mut controller, first) = with_date("2024-03-01");
        assert_eq!(controller.complete(first.generation, ok(VEGETATIVE)), Completion::Applied);
        assert_eq!(controller.complete(first.generation, ok(EMERGENCE)), Completion::Stale);
        assert_eq!(controller.summary().growth_stage, "Vegetative");
    }

    #[test]
    fn non_numeric_base_temperature_is_sent_as_is() {
        let (mut controller, _) = with_date("2024-03-01");
        let pending = controller.set_base_temperature_input("warm").unwrap();
        assert_eq!(pending.query.base_temp, "NaN");
        assert!(controller.params().base_temperature.is_nan());

        let pending = controller.set_base_temperature_input("").unwrap();
        assert_eq!(pending.query.base_temp, "0");
    }
}
