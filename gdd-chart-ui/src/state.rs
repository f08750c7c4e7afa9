//! Application state managed via Dioxus context.
//!
//! `AppState` is provided once with `use_context_provider`; child components
//! retrieve it with `use_context::<AppState>()`. The request controller lives
//! in a Signal, so every view derived from it re-renders when a response lands.

use crate::fetch::WebFetchSource;
use gdd_core::config::DEFAULT_SERVICE_URL;
use gdd_core::{GddSource, PendingRequest, QueryParameters, RequestController, ServiceConfig};
use dioxus::prelude::*;

/// Service URL baked in at build time, if any.
const SERVICE_URL_OVERRIDE: Option<&str> = option_env!("GDD_SERVICE_URL");

/// Shared state for one dashboard session.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Parameters, request status and the latest result
    pub controller: Signal<RequestController>,
    /// Base URL of the GDD service
    pub service_url: Signal<String>,
}

impl AppState {
    /// Create the state with default parameters and the configured service URL.
    pub fn new() -> Self {
        let url = SERVICE_URL_OVERRIDE.unwrap_or(DEFAULT_SERVICE_URL);
        Self::with_service_url(url.to_string())
    }

    pub fn with_service_url(service_url: String) -> Self {
        Self {
            controller: Signal::new(RequestController::new(QueryParameters::default())),
            service_url: Signal::new(service_url),
        }
    }

    /// Perform a pending request in the background and feed its outcome
    /// back to the controller. Outcomes of superseded requests are dropped
    /// by the controller itself.
    pub fn dispatch(self, pending: Option<PendingRequest>) {
        let Some(pending) = pending else {
            return;
        };
        let config = ServiceConfig::new(self.service_url.peek().clone());
        let source = WebFetchSource::new(&config);
        let mut controller = self.controller;
        spawn(async move {
            let outcome = source.fetch(&pending.query).await;
            controller.write().complete(pending.generation, outcome);
        });
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
