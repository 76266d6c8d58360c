//! Match execution engine

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};
use crate::payoff::PayoffMatrix;
use crate::random::ArenaRng;
use crate::strategy::{Move, Play, StrategyDef, Turn};

/// Rules shared by every match of a run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Turns per match
    pub round_length: u32,
    /// Repetitions of a pairing that involves a stochastic strategy
    pub rounds: u32,
    pub payoff: PayoffMatrix,
}

/// Result of a complete match
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// History from side A's point of view
    pub history: Vec<Turn>,
    /// Wide enough for any valid table over any accepted round length
    pub total_score_a: u64,
    pub total_score_b: u64,
}

impl MatchResult {
    /// Score a completed history (side A's point of view)
    pub fn score(history: Vec<Turn>, payoff: &PayoffMatrix) -> Self {
        let (total_score_a, total_score_b) = history
            .iter()
            .map(|t| payoff.score(t.own, t.opponent))
            .fold((0u64, 0u64), |(a, b), (sa, sb)| (a + u64::from(sa), b + u64::from(sb)));
        Self { history, total_score_a, total_score_b }
    }

    pub fn turn_count(&self) -> usize {
        self.history.len()
    }

    /// History from side B's point of view
    pub fn mirrored_history(&self) -> Vec<Turn> {
        self.history.iter().map(|t| t.mirrored()).collect()
    }

    /// Per-turn average score for each side
    pub fn normalized(&self) -> (f64, f64) {
        if self.history.is_empty() {
            return (0.0, 0.0);
        }
        let turns = self.history.len() as f64;
        (self.total_score_a as f64 / turns, self.total_score_b as f64 / turns)
    }

    /// Side A's moves as letters
    pub fn transcript_a(&self) -> String {
        self.history.iter().map(|t| t.own.letter()).collect()
    }

    /// Side B's moves as letters
    pub fn transcript_b(&self) -> String {
        self.history.iter().map(|t| t.opponent.letter()).collect()
    }
}

fn validate(def: &StrategyDef, play: Play) -> Result<Move> {
    play.to_move().ok_or_else(|| ArenaError::InvalidMove {
        strategy: def.name().to_string(),
        value: play.value(),
    })
}

/// Play one match between fresh instances of two strategies
///
/// Returns both histories, each from its own side's point of view.
/// `rng` is the match stream; each side gets its own stream derived from it.
pub fn simulate(
    strategy_a: &StrategyDef,
    strategy_b: &StrategyDef,
    turn_count: u32,
    payoff: &PayoffMatrix,
    rng: &ArenaRng,
) -> Result<(Vec<Turn>, Vec<Turn>)> {
    let mut player_a = strategy_a.instantiate(payoff, rng.for_side(0));
    let mut player_b = strategy_b.instantiate(payoff, rng.for_side(1));

    let mut history_a: Vec<Turn> = Vec::with_capacity(turn_count as usize);
    let mut history_b: Vec<Turn> = Vec::with_capacity(turn_count as usize);

    for _ in 0..turn_count {
        // Neither side sees the other's move for this turn
        let move_a = validate(strategy_a, player_a.decide(&history_a))?;
        let move_b = validate(strategy_b, player_b.decide(&history_b))?;

        history_a.push(Turn::new(move_a, move_b));
        history_b.push(Turn::new(move_b, move_a));
    }

    Ok((history_a, history_b))
}

/// Run and score a complete match
pub fn run_match(
    strategy_a: &StrategyDef,
    strategy_b: &StrategyDef,
    turn_count: u32,
    payoff: &PayoffMatrix,
    rng: &ArenaRng,
) -> Result<MatchResult> {
    let (history, _) = simulate(strategy_a, strategy_b, turn_count, payoff, rng)?;
    Ok(MatchResult::score(history, payoff))
}
