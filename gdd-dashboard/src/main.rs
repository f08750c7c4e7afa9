//! Growing Degree Days (GDD) Tracker
//!
//! Shows GDD accumulation for a planting as a D3.js line chart and a daily
//! records table, for a location, base temperature and planting date.
//!
//! Data flow:
//! 1. `ParameterForm` edits go to the `RequestController` in `AppState`.
//! 2. When a parameter change calls for a request, `AppState::dispatch`
//!    fetches it in the background and completes it on the controller,
//!    which drops responses for superseded parameters.
//! 3. The view memo re-derives summary, chart points and table rows from the
//!    controller, and the chart effect re-renders D3 when the points change.

use dioxus::prelude::*;
use gdd_chart_ui::components::{
    ChartContainer, ErrorDisplay, GddTable, LoadingSpinner, ParameterForm, SectionHeader,
    SummaryPanel,
};
use gdd_chart_ui::js_bridge;
use gdd_chart_ui::state::AppState;
use gdd_core::RequestStatus;

/// DOM id for the D3 chart container div.
const CHART_CONTAINER_ID: &str = "gdd-chart";

const CHART_HEIGHT: u32 = 300;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("gdd-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Effect 1: one-time setup ───
    use_effect(move || {
        js_bridge::init_charts();
        // Parameters may already be complete when the session starts.
        let pending = state.controller.write().on_parameters_changed();
        state.dispatch(pending);
    });

    let view = use_memo(move || state.controller.read().view());

    // ─── Effect 2: re-render the chart whenever the series changes ───
    use_effect(move || {
        let current = view();
        let views = current.views;

        if views.chart_series.is_empty() {
            js_bridge::destroy_chart(CHART_CONTAINER_ID);
            return;
        }

        let data_json = serde_json::to_string(&views.chart_series).unwrap_or_default();
        let config_json = serde_json::json!({
            "gddLabel": "GDD",
            "primaryLabel": views.labels.primary,
            "secondaryLabel": views.labels.secondary,
            "height": CHART_HEIGHT,
        })
        .to_string();

        js_bridge::render_gdd_chart(CHART_CONTAINER_ID, &data_json, &config_json);
    });

    // ─── Render ───
    let current = view();
    let has_rows = !current.views.table_rows.is_empty();

    rsx! {
        div {
            style: "padding: 20px; font-family: Arial, sans-serif; background-color: #e6f7e6; min-height: 100vh;",

            h1 { "Growing Degree Days (GDD) Tracker" }

            ParameterForm {}

            if current.status == RequestStatus::Loading {
                LoadingSpinner {}
            }

            if let Some(message) = current.error_message.clone() {
                ErrorDisplay { message: message, stale: has_rows }
            }

            if let Some(line) = current.views.summary_line.clone() {
                SummaryPanel { line: line }
            }

            SectionHeader {
                title: "GDD & Temperature Progression Over Time".to_string(),
                note: format!(
                    "Left axis: GDD. Right axis: {} and {}.",
                    current.views.labels.primary, current.views.labels.secondary
                ),
            }

            ChartContainer {
                id: CHART_CONTAINER_ID.to_string(),
                empty: !has_rows,
                height: CHART_HEIGHT,
            }

            SectionHeader { title: "Daily GDD & Temperature Records".to_string() }

            GddTable {
                rows: current.views.table_rows.clone(),
                labels: current.views.labels,
            }
        }
    }
}
