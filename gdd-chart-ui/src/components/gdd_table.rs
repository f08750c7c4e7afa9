//! Daily GDD and temperature records.

use dioxus::prelude::*;
use gdd_core::views::{SeriesLabels, TableRow};

const CELL_STYLE: &str = "padding: 8px; border-bottom: 1px solid #ddd;";
const HEADER_STYLE: &str = "padding: 10px; border-bottom: 1px solid #ddd; text-align: left;";

#[derive(Props, Clone, PartialEq)]
pub struct GddTableProps {
    pub rows: Vec<TableRow>,
    pub labels: SeriesLabels,
}

/// One row per day, in the order the service returned them. Values are
/// already formatted, including "N/A" for missing readings.
#[component]
pub fn GddTable(props: GddTableProps) -> Element {
    rsx! {
        table {
            style: "width: 100%; border-collapse: collapse; margin-top: 8px;",
            thead {
                tr {
                    style: "background-color: #f2f2f2;",
                    th { style: HEADER_STYLE, "Date" }
                    th { style: HEADER_STYLE, "Daily GDD" }
                    th { style: HEADER_STYLE, "{props.labels.primary}" }
                    th { style: HEADER_STYLE, "{props.labels.secondary}" }
                }
            }
            tbody {
                for (index, row) in props.rows.iter().enumerate() {
                    tr {
                        key: "{index}",
                        td { style: CELL_STYLE, "{row.date}" }
                        td { style: CELL_STYLE, "{row.gdd}" }
                        td { style: CELL_STYLE, "{row.min}" }
                        td { style: CELL_STYLE, "{row.max}" }
                    }
                }
            }
        }
    }
}
