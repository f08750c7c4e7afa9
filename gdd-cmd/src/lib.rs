//! Command implementations for the GDD CLI.
//!
//! Drives the same request controller as the web dashboard, against the
//! live service, and prints the summary and daily records.

use clap::Subcommand;
use gdd_core::config::{DEFAULT_SERVICE_URL, DEFAULT_TIMEOUT_SECS};
use gdd_core::params::DEFAULT_LOCATION;

pub mod query;

#[derive(Subcommand)]
pub enum Command {
    /// Query GDD accumulation for one planting
    Query {
        /// Location name understood by the GDD service
        #[arg(short, long, default_value = DEFAULT_LOCATION)]
        location: String,

        /// Base temperature in °C (passed through without validation)
        #[arg(short, long, default_value = "10", allow_hyphen_values = true)]
        base_temp: String,

        /// Planting date, YYYY-MM-DD
        #[arg(short = 'd', long)]
        planting_date: String,

        /// Base URL of the GDD service
        #[arg(long, env = "GDD_SERVICE_URL", default_value = DEFAULT_SERVICE_URL)]
        service_url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,

        /// Also write the daily records table to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Query {
            location,
            base_temp,
            planting_date,
            service_url,
            timeout_secs,
            csv,
        } => {
            let options = query::QueryOptions {
                location,
                base_temp,
                planting_date,
                service_url,
                timeout_secs,
                csv,
            };
            query::run_query(options).await
        }
    }
}
