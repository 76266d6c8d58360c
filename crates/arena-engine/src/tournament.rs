//! Tournament driver: every pairing in schedule order, then the leaderboard

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ArenaError, Result};
use crate::game::MatchConfig;
use crate::leaderboard::{Leaderboard, Standing};
use crate::pairing::{calculate_match_count, Pairings};
use crate::random::ArenaRng;
use crate::rounds::play_pairing;
use crate::strategy::StrategyDef;

/// One finished pairing, ready for the results file
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairingReport {
    /// 0-based position in the schedule
    pub index: usize,
    pub name_a: String,
    pub name_b: String,
    /// First repetition's moves, one letter per turn
    pub transcript_a: String,
    pub transcript_b: String,
    pub score_a: f64,
    pub score_b: f64,
    pub repetitions: u32,
}

/// Everything a run produced
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentReport {
    pub round_length: u32,
    pub rounds: u32,
    pub seed: u64,
    pub pairings: Vec<PairingReport>,
    pub standings: Vec<Standing>,
}

pub struct Tournament {
    roster: Vec<StrategyDef>,
    config: MatchConfig,
    rng: ArenaRng,
}

impl Tournament {
    /// Fails if two roster entries share a name
    pub fn new(roster: Vec<StrategyDef>, config: MatchConfig, rng: ArenaRng) -> Result<Self> {
        let mut seen = HashSet::with_capacity(roster.len());
        for def in &roster {
            if !seen.insert(def.name()) {
                return Err(ArenaError::DuplicateStrategy(def.name().to_string()));
            }
        }
        Ok(Self { roster, config, rng })
    }

    pub fn match_count(&self) -> usize {
        calculate_match_count(self.roster.len())
    }

    /// Run every pairing and collect the report
    pub fn run(&self) -> Result<TournamentReport> {
        self.run_with(|_| Ok(()))
    }

    /// Run every pairing, handing each finished one to `observer` before the next starts
    ///
    /// The first error, from a match or from the observer, stops the run.
    pub fn run_with<F>(&self, mut observer: F) -> Result<TournamentReport>
    where
        F: FnMut(&PairingReport) -> Result<()>,
    {
        let total = self.match_count();
        info!(
            participants = self.roster.len(),
            matches = total,
            round_length = self.config.round_length,
            seed = self.rng.seed(),
            "tournament started"
        );

        let mut board = Leaderboard::new(self.roster.iter().map(|d| d.name()))?;
        let mut pairings = Vec::with_capacity(total);

        for (index, (i, j)) in Pairings::new(self.roster.len()).enumerate() {
            let (a, b) = (&self.roster[i], &self.roster[j]);
            info!("{}/{}", index + 1, total);

            let result = play_pairing(a, b, &self.config, &self.rng, index as u32)?;
            debug!(
                a = a.name(),
                b = b.name(),
                score_a = result.score_a,
                score_b = result.score_b,
                repetitions = result.repetitions,
                "pairing finished"
            );
            board.record(a.name(), result.score_a, b.name(), result.score_b);

            let report = PairingReport {
                index,
                name_a: a.name().to_string(),
                name_b: b.name().to_string(),
                transcript_a: result.first.transcript_a(),
                transcript_b: result.first.transcript_b(),
                score_a: result.score_a,
                score_b: result.score_b,
                repetitions: result.repetitions,
            };
            observer(&report)?;
            pairings.push(report);
        }

        let standings = board.standings();
        if let Some(top) = standings.first() {
            info!(winner = %top.name, average = top.average, "tournament finished");
        }

        Ok(TournamentReport {
            round_length: self.config.round_length,
            rounds: self.config.rounds,
            seed: self.rng.seed(),
            pairings,
            standings,
        })
    }
}
