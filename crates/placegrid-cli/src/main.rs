mod check;
mod progress;
mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::check::{run_check, DEFAULT_CHECK_LOCATION};
use crate::search::{run_search, SearchArgs};

#[derive(Debug, Parser)]
#[command(name = "placegrid")]
#[command(about = "Exhaustive grid search over a places API")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search a location exhaustively and write a JSON report
    Search(SearchArgs),
    /// Verify the API key by geocoding a known location
    Check {
        /// Location to geocode
        #[arg(long, default_value = DEFAULT_CHECK_LOCATION)]
        location: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = placegrid_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search(args) => run_search(&config, &args).await,
        Commands::Check { location } => run_check(&config, &location).await,
    }
}
