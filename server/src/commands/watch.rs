//! Terminal dashboard - polls the population endpoint on a fixed interval

use std::time::Duration;

use anyhow::Context;
use clap::Args;
use colored::Colorize;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};
use simulation::{Snapshot, Trend};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

const MAX_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Base URL of the population backend
    #[arg(long, env = "POPULATION_URL", default_value = "http://127.0.0.1:4000")]
    pub url: String,

    /// Seconds between polls
    #[arg(short, long, default_value_t = 5, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: u64,

    /// Fetch a single snapshot and exit
    #[arg(long)]
    pub once: bool,
}

pub async fn run(args: WatchArgs) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(request_timeout(args.interval))
        .build()
        .context("failed to build HTTP client")?;
    let endpoint = population_url(&args.url);

    if args.once {
        let snapshot = fetch(&client, &endpoint).await?;
        println!("{}", render(&snapshot));
        return Ok(());
    }

    info!("Polling {endpoint} every {}s", args.interval);
    let mut ticker = tokio::time::interval(Duration::from_secs(args.interval));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut shutdown => break,
        }
        // A failed poll just waits for the next tick
        tokio::select! {
            result = fetch(&client, &endpoint) => match result {
                Ok(snapshot) => println!("{}", render(&snapshot)),
                Err(err) => warn!("poll failed: {err:#}"),
            },
            _ = &mut shutdown => break,
        }
    }

    info!("Stopping watch");
    Ok(())
}

/// A poll never outlives the next one
pub fn request_timeout(interval_secs: u64) -> Duration {
    Duration::from_secs(interval_secs.clamp(1, MAX_REQUEST_TIMEOUT_SECS))
}

pub fn population_url(base: &str) -> String {
    format!("{}/api/population", base.trim_end_matches('/'))
}

async fn fetch(client: &reqwest::Client, endpoint: &str) -> anyhow::Result<Snapshot> {
    client
        .get(endpoint)
        .send()
        .await
        .with_context(|| format!("request to {endpoint} failed"))?
        .error_for_status()?
        .json::<Snapshot>()
        .await
        .context("malformed snapshot")
}

/// One row per country with the same content as the map tooltip
pub fn render(snapshot: &Snapshot) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Country", "Population", "Trend", "Change %"]);

    for country in &snapshot.countries {
        let color = trend_color(country.trend);
        table.add_row(vec![
            Cell::new(&country.name),
            Cell::new(format_population(country.population)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{} {}", country.trend.arrow(), country.trend)).fg(color),
            Cell::new(format!("{:+.3}", country.change))
                .fg(color)
                .set_alignment(CellAlignment::Right),
        ]);
    }

    format!(
        "{} {}\n{}\nTotal: {}",
        "World population".bold(),
        snapshot.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed(),
        table,
        format_population(snapshot.total_population()),
    )
}

fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Steady => Color::Yellow,
    }
}

/// `1411750000` -> `1,411,750,000`
pub fn format_population(population: u64) -> String {
    let digits = population.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
