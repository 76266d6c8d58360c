//! Prisoner's Arena - Iterated Prisoner's Dilemma Tournament
//!
//! Runs every built-in strategy against every other, writes the move
//! transcripts and the averaged leaderboard to a results file.

mod cli;

use std::fs::File;
use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use arena_engine::{assemble_roster, ResultsWriter, StrategyRegistry, Tournament};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = cli::Args::parse();
    let registry = StrategyRegistry::with_builtins().context("Failed to register built-in strategies")?;

    if args.list {
        for def in registry.iter() {
            let kind = if def.is_stochastic() { "stochastic" } else { "" };
            println!("{:<26} {:<10} {}", def.name(), kind, def.description());
        }
        return Ok(());
    }

    let config = args.run_config().context("Failed to load run configuration")?;
    let roster = assemble_roster(&registry, &config.selection())?;

    let mut rng = config.rng();
    let round_length = config.resolve_round_length(&mut rng);
    let tournament = Tournament::new(roster, config.match_config(round_length), rng)?;

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create {}", args.output.display()))?;
    let mut results = ResultsWriter::new(BufWriter::new(file));
    results.write_header(round_length)?;
    let report = tournament.run_with(|pairing| results.write_pairing(pairing))?;
    results.write_standings(&report.standings)?;
    info!(path = %args.output.display(), "results written");

    if let Some(path) = &args.json {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), &report)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), "JSON report written");
    }

    ResultsWriter::new(io::stdout().lock()).write_standings(&report.standings)?;
    Ok(())
}
