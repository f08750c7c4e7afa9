//! GDD CLI - query Growing Degree Day accumulation from the command line.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "gdd-cli",
    version,
    about = "Growing Degree Days (GDD) tracker"
)]
struct Cli {
    #[command(subcommand)]
    command: gdd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    gdd_cmd::run(cli.command).await
}
