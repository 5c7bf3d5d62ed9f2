//! Mech Gunnery - Entry Point
//!
//! Loads a scenario, resolves one firing phase and prints the combat log.

use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use mech_gunnery::catalog::{load_catalog, RuleCatalog};
use mech_gunnery::core::error::Result;
use mech_gunnery::core::EngineConfig;
use mech_gunnery::dice::SeededRoller;
use mech_gunnery::game::{Entity, PhaseSummary, Scenario};

/// Resolve a firing phase and print its combat log
#[derive(Parser, Debug)]
#[command(name = "mech-gunnery")]
#[command(about = "Resolve declared weapon attacks and print the combat log")]
struct Args {
    /// Scenario JSON with entities and declared attacks
    #[arg(long, default_value = "data/scenarios/duel.json")]
    scenario: PathBuf,

    /// Weapon and ammo catalog TOML (built-in catalog when omitted)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Engine config TOML
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dice seed; overrides the config seed
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// JSON output structure
#[derive(Serialize)]
struct PhaseOutput<'a> {
    seed: u64,
    phase: &'a PhaseSummary,
    entities: &'a [Entity],
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    // RUST_LOG wins over the config filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let catalog = match &args.catalog {
        Some(path) => load_catalog(path)?,
        None => RuleCatalog::standard(),
    };

    let seed = args.seed.or(config.seed).unwrap_or_else(rand::random);
    tracing::info!(seed, "Session seed");
    let mut roller = SeededRoller::new(seed);

    let mut state = Scenario::load(&args.scenario)?.into_state(&catalog)?;
    let summary = state.resolve_phase(&catalog, &config.rules, &mut roller)?;

    match args.format {
        OutputFormat::Text => {
            println!("=== Turn {} firing phase (seed {}) ===", summary.turn, seed);
            for report in &summary.reports {
                println!("{}", report.render());
            }
            println!();
            for entity in state.entities() {
                let status = if entity.destroyed { "DESTROYED" } else { "operational" };
                println!(
                    "{}: {} (armor {}, heat {})",
                    entity.name,
                    status,
                    entity.total_armor(),
                    entity.heat
                );
            }
        }
        OutputFormat::Json => {
            let output = PhaseOutput {
                seed,
                phase: &summary,
                entities: state.entities(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }

    Ok(())
}
