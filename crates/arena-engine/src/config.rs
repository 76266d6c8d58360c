//! Run configuration

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ArenaError, Result};
use crate::game::MatchConfig;
use crate::pairing::Selection;
use crate::payoff::PayoffMatrix;
use crate::random::ArenaRng;
use crate::rounds::DEFAULT_ROUNDS;

/// Shortest drawn round length
pub const MIN_ROUND_LENGTH: u32 = 100;
/// Drawn round lengths stay below this
pub const MAX_ROUND_LENGTH: u32 = 500;
/// Longest round length a run may configure
pub const ROUND_LENGTH_LIMIT: u32 = 100_000;

/// Pick the run's round length: an even value in [100, 498]
pub fn draw_round_length(rng: &mut ArenaRng) -> u32 {
    MIN_ROUND_LENGTH + 2 * rng.next_range((MAX_ROUND_LENGTH - MIN_ROUND_LENGTH) / 2)
}

/// Everything a run can be told from outside
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunConfig {
    /// Turns per match, drawn at startup when unset
    pub round_length: Option<u32>,
    /// Repetitions for pairings with a stochastic side
    pub rounds: u32,
    /// Strategy to run first
    pub compare: Option<String>,
    pub exclude: Vec<String>,
    pub with_stochastic: bool,
    /// Run seed, from entropy when unset
    pub seed: Option<u64>,
    pub payoff: PayoffMatrix,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            round_length: None,
            rounds: DEFAULT_ROUNDS,
            compare: None,
            exclude: Vec::new(),
            with_stochastic: true,
            seed: None,
            payoff: PayoffMatrix::CLASSIC,
        }
    }
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rounds == 0 {
            return Err(ArenaError::InvalidConfig("rounds must be at least 1".to_string()));
        }
        match self.round_length {
            Some(0) => {
                return Err(ArenaError::InvalidConfig("round_length must be at least 1".to_string()));
            }
            Some(n) if n > ROUND_LENGTH_LIMIT => {
                return Err(ArenaError::InvalidConfig(format!(
                    "round_length {} exceeds the limit of {}",
                    n, ROUND_LENGTH_LIMIT
                )));
            }
            Some(n) if n % 2 == 1 => {
                warn!(round_length = n, "round length is odd, the last defection cannot be answered evenly");
            }
            _ => {}
        }
        self.payoff.validate()?;
        Ok(())
    }

    pub fn selection(&self) -> Selection {
        Selection {
            compare: self.compare.clone(),
            exclude: self.exclude.clone(),
            with_stochastic: self.with_stochastic,
        }
    }

    /// Root random stream for the run
    pub fn rng(&self) -> ArenaRng {
        match self.seed {
            Some(seed) => ArenaRng::new(seed),
            None => ArenaRng::from_entropy(),
        }
    }

    /// The configured round length, or a fresh draw
    pub fn resolve_round_length(&self, rng: &mut ArenaRng) -> u32 {
        self.round_length.unwrap_or_else(|| draw_round_length(rng))
    }

    pub fn match_config(&self, round_length: u32) -> MatchConfig {
        MatchConfig {
            round_length,
            rounds: self.rounds,
            payoff: self.payoff,
        }
    }
}
