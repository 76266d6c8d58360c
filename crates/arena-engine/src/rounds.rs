//! Repeated matches for one pairing and score averaging

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::Result;
use crate::game::{run_match, MatchConfig, MatchResult};
use crate::random::ArenaRng;
use crate::strategy::StrategyDef;

/// Default repetitions for pairings involving a stochastic strategy
pub const DEFAULT_ROUNDS: u32 = 10;

/// Averaged outcome of one scheduled pairing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PairingResult {
    /// First repetition, kept for the transcript
    pub first: MatchResult,
    pub repetitions: u32,
    /// Mean per-turn score of side A over all repetitions
    pub score_a: f64,
    /// Mean per-turn score of side B over all repetitions
    pub score_b: f64,
}

/// How many matches a pairing needs
///
/// Two deterministic strategies always replay the same match, so once is enough.
pub fn repetitions(strategy_a: &StrategyDef, strategy_b: &StrategyDef, rounds: u32) -> u32 {
    if strategy_a.is_stochastic() || strategy_b.is_stochastic() {
        rounds.max(1)
    } else {
        1
    }
}

/// Play every repetition of a pairing and average the normalized scores
///
/// Repetition `r` of pairing `pair_index` always uses `rng.for_match(pair_index, r)`.
pub fn play_pairing(
    strategy_a: &StrategyDef,
    strategy_b: &StrategyDef,
    config: &MatchConfig,
    rng: &ArenaRng,
    pair_index: u32,
) -> Result<PairingResult> {
    let count = repetitions(strategy_a, strategy_b, config.rounds);

    let mut first: Option<MatchResult> = None;
    let mut sum_a = 0.0;
    let mut sum_b = 0.0;

    for repetition in 0..count {
        let stream = rng.for_match(pair_index, repetition);
        let result = run_match(strategy_a, strategy_b, config.round_length, &config.payoff, &stream)?;
        let (norm_a, norm_b) = result.normalized();
        trace!(
            a = strategy_a.name(),
            b = strategy_b.name(),
            repetition,
            norm_a,
            norm_b,
            "repetition finished"
        );
        sum_a += norm_a;
        sum_b += norm_b;
        if first.is_none() {
            first = Some(result);
        }
    }

    Ok(PairingResult {
        first: first.unwrap_or_else(|| MatchResult::score(Vec::new(), &config.payoff)),
        repetitions: count,
        score_a: sum_a / count as f64,
        score_b: sum_b / count as f64,
    })
}
