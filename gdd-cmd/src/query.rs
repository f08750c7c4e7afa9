//! One-shot GDD query.

use gdd_core::dates::parse_planting_date;
use gdd_core::params::coerce_base_temperature;
use gdd_core::source::HttpGddSource;
use gdd_core::{
    DashboardView, GddSource, QueryParameters, RequestController, RequestStatus, ServiceConfig,
    TableRow,
};
use log::info;
use std::io::Write;
use std::time::Duration;

/// Arguments of the `query` subcommand.
#[derive(Debug, Clone)]
pub struct QueryOptions {
    pub location: String,
    pub base_temp: String,
    pub planting_date: String,
    pub service_url: String,
    pub timeout_secs: u64,
    pub csv: Option<String>,
}

/// Query the service, print the results and optionally export the table.
///
/// Fails with the dashboard's error message if the query fails; a CSV is
/// only written for successful queries.
pub async fn run_query(options: QueryOptions) -> anyhow::Result<()> {
    let config = ServiceConfig::new(options.service_url)
        .with_timeout(Duration::from_secs(options.timeout_secs));
    let source = HttpGddSource::new(&config)?;

    let params = QueryParameters::new(
        options.location,
        coerce_base_temperature(&options.base_temp),
        parse_planting_date(&options.planting_date),
    );

    info!("Querying {}", config.gdd_url());
    let view = query_once(&source, params).await?;
    print!("{}", report(&view)?);

    if let Some(path) = options.csv {
        let file = std::fs::File::create(&path)?;
        write_table_csv(file, &view.views.table_rows)?;
        info!("Wrote {} rows to {}", view.views.table_rows.len(), path);
    }
    Ok(())
}

/// Run a single request through a fresh controller and return its view.
pub async fn query_once<S: GddSource>(
    source: &S,
    params: QueryParameters,
) -> anyhow::Result<DashboardView> {
    let mut controller = RequestController::new(params);
    let pending = controller
        .on_parameters_changed()
        .ok_or_else(|| anyhow::anyhow!("a planting date (YYYY-MM-DD) is required"))?;

    let outcome = source.fetch(&pending.query).await;
    controller.complete(pending.generation, outcome);
    Ok(controller.view())
}

/// Text to print for a finished query.
///
/// A failed query yields its error message as the error instead, so it is
/// reported once by the caller.
pub fn report(view: &DashboardView) -> anyhow::Result<String> {
    if view.status != RequestStatus::Success {
        let message = view.error_message.as_deref().unwrap_or_default();
        anyhow::bail!("GDD query failed: {}", message);
    }
    Ok(render_view(view))
}

/// Plain-text rendering of the summary and the daily records.
pub fn render_view(view: &DashboardView) -> String {
    let mut out = String::new();

    if let Some(line) = &view.views.summary_line {
        out.push_str(line);
        out.push('\n');
    }
    if view.views.table_rows.is_empty() {
        return out;
    }

    let labels = view.views.labels;
    out.push('\n');
    out.push_str(&format!(
        "{:<12} {:>10} {:>20} {:>20}\n",
        "Date", "Daily GDD", labels.primary, labels.secondary
    ));
    for row in &view.views.table_rows {
        out.push_str(&format!(
            "{:<12} {:>10} {:>20} {:>20}\n",
            row.date, row.gdd, row.min, row.max
        ));
    }
    out
}

/// Write table rows as CSV with a `date,gdd,min,max` header.
pub fn write_table_csv<W: Write>(writer: W, rows: &[TableRow]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
