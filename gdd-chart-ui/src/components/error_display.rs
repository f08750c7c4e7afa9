//! Error message box.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Results from an earlier query are still shown below
    #[props(default = false)]
    pub stale: bool,
}

/// Shows a failed query's message, noting when older results remain on screen.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            strong { "Error: " }
            "{props.message}"
            if props.stale {
                p {
                    style: "margin: 4px 0 0 0; font-size: 12px; color: #8E2424;",
                    "Showing results from the last successful query."
                }
            }
        }
    }
}
