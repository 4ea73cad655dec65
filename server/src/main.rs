//! Population dashboard backend and terminal client

use clap::{Parser, Subcommand};
use population_server::commands::{self, serve::ServeArgs, simulate::SimulateArgs, watch::WatchArgs};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "population",
    about = "Live-drifting world population backend",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the population and health endpoints
    Serve(ServeArgs),

    /// Poll a running backend and render snapshots in the terminal
    Watch(WatchArgs),

    /// Run the simulation offline and print the final snapshot
    Simulate(SimulateArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Watch(args) => commands::watch::run(args).await,
        Commands::Simulate(args) => commands::simulate::run(args),
    }
}
