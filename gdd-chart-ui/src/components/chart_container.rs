//! Chart container with a placeholder while there is nothing to plot.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Whether there are any points to draw
    #[props(default = false)]
    pub empty: bool,
    #[props(default = 300)]
    pub height: u32,
}

/// A fixed-height div for the D3.js chart.
///
/// The target div is always mounted so the bridge can find it; the
/// placeholder sits on top of it when the series is empty.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!("height: {}px; position: relative; width: 100%;", props.height);

    rsx! {
        div {
            style: "{style}",
            if props.empty {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #888; font-size: 13px;",
                    "No daily records yet. Pick a planting date to start."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
        }
    }
}
