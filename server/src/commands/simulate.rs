use std::time::Instant;

use anyhow::Context;
use clap::Args;
use simulation::SimulationWorld;
use tracing::info;

use super::SimArgs;

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Number of snapshots to run
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub ticks: u64,

    #[command(flatten)]
    pub sim: SimArgs,
}

/// Run the simulation offline and print the final snapshot as JSON
pub fn run(args: SimulateArgs) -> anyhow::Result<()> {
    let mut world = SimulationWorld::from_config(args.sim.to_config())
        .context("invalid simulation config")?;

    info!("Running {} ticks...", args.ticks);
    let start = Instant::now();
    for _ in 1..args.ticks {
        world.tick();
    }
    let snapshot = world.snapshot();
    let elapsed = start.elapsed();

    info!(
        "Simulation complete: {:?} total, {:?} per tick, {} final population",
        elapsed,
        elapsed.div_f64(args.ticks as f64),
        snapshot.total_population()
    );

    let json = serde_json::to_string_pretty(&snapshot).context("failed to encode snapshot")?;
    println!("{json}");
    Ok(())
}
