//! Reusable Dioxus RSX components for the GDD dashboard.

mod chart_container;
mod error_display;
mod gdd_table;
mod loading_spinner;
mod parameter_form;
mod section_header;
mod summary_panel;

pub use chart_container::ChartContainer;
pub use error_display::ErrorDisplay;
pub use gdd_table::GddTable;
pub use loading_spinner::LoadingSpinner;
pub use parameter_form::ParameterForm;
pub use section_header::SectionHeader;
pub use summary_panel::SummaryPanel;
