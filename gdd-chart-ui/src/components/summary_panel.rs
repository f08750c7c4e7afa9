//! Total GDD and growth stage.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct SummaryPanelProps {
    /// Preformatted summary, e.g. "Total GDD: 42.50 | Current Growth Stage: Vegetative"
    pub line: String,
}

#[component]
pub fn SummaryPanel(props: SummaryPanelProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 20px; padding: 8px 12px; background: #F1F8E9; border-left: 4px solid #7CB342;",
            h3 {
                style: "margin: 0; font-size: 16px;",
                "{props.line}"
            }
        }
    }
}
