//! Command-line arguments

use std::path::PathBuf;

use arena_engine::RunConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "prisoners-arena",
    about = "Run an Iterated Prisoner's Dilemma round-robin between the built-in strategies",
    long_about = "Plays every pair of strategies against each other, averages stochastic pairings\n\
                  over several matches and writes transcripts plus a ranked leaderboard."
)]
pub struct Args {
    /// JSON run configuration; the flags below override it
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Strategy to run first
    #[arg(long = "compare")]
    pub compare: Option<String>,

    /// Strategy to leave out (repeatable)
    #[arg(short = 'x', long = "exclude")]
    pub exclude: Vec<String>,

    /// Leave out every stochastic strategy
    #[arg(long = "no-stochastic")]
    pub no_stochastic: bool,

    /// Matches per pairing when a stochastic strategy is involved
    #[arg(short = 'r', long = "rounds")]
    pub rounds: Option<u32>,

    /// Turns per match, at most 100000 (drawn from the even values in [100, 498] when unset)
    #[arg(short = 'l', long = "round-length")]
    pub round_length: Option<u32>,

    /// Random seed for reproducibility
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Results file
    #[arg(short = 'o', long = "output", default_value = "results.txt")]
    pub output: PathBuf,

    /// Also write the full report as JSON
    #[arg(long = "json")]
    pub json: Option<PathBuf>,

    /// List available strategies and exit
    #[arg(long = "list")]
    pub list: bool,
}

impl Args {
    /// Config file (or defaults) with command-line overrides applied
    pub fn run_config(&self) -> arena_engine::Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::from_file(path)?,
            None => RunConfig::default(),
        };

        if let Some(compare) = &self.compare {
            config.compare = Some(compare.clone());
        }
        config.exclude.extend(self.exclude.iter().cloned());
        if self.no_stochastic {
            config.with_stochastic = false;
        }
        if let Some(rounds) = self.rounds {
            config.rounds = rounds;
        }
        if self.round_length.is_some() {
            config.round_length = self.round_length;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}
