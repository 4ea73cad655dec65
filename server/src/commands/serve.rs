use std::net::{IpAddr, SocketAddr};

use anyhow::Context;
use clap::Args;
use simulation::SimulationWorld;
use tokio::net::TcpListener;
use tracing::info;

use super::SimArgs;
use crate::{router, AppState};

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 4000)]
    pub port: u16,

    /// Address to bind
    #[arg(long, env = "BIND_ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    #[command(flatten)]
    pub sim: SimArgs,
}

pub async fn run(args: ServeArgs) -> anyhow::Result<()> {
    let world = SimulationWorld::from_config(args.sim.to_config())
        .context("invalid simulation config")?;
    info!(
        countries = world.records().len(),
        population = world.total_population(),
        "Simulation seeded"
    );

    let addr = SocketAddr::new(args.bind, args.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Population backend listening on http://{addr}");
    axum::serve(listener, router(AppState::new(world)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")?;

    info!("Population backend stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
    }
}
