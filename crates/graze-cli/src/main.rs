//! Headless runner for the wolf-sheep-grass simulation.
//!
//! Usage: `graze [config.json] [steps]`
//!
//! Loads the world configuration from the optional JSON file (defaults
//! otherwise), runs the requested number of ticks, and prints the three
//! population series as JSON on stdout.

use anyhow::{Context, Result};
use graze_core::WorldConfig;
use graze_world::World;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_STEPS: usize = 1000;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => WorldConfig::load(&path)
            .with_context(|| format!("failed to load config file {}", path))?,
        None => WorldConfig::default(),
    };
    let steps = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid step count {:?}", raw))?,
        None => DEFAULT_STEPS,
    };

    info!(seed = config.seed, size = config.size, steps, "configured");

    let mut world = World::new(config)?;
    let series = world.run(steps);

    serde_json::to_writer(std::io::stdout().lock(), &series)?;
    println!();

    Ok(())
}
