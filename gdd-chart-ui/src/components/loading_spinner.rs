//! Loading indicator.

use dioxus::prelude::*;

#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        p {
            style: "color: #666; margin: 8px 0;",
            "Loading GDD data..."
        }
    }
}
