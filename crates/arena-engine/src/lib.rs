//! Tournament engine for Prisoner's Arena
//!
//! Core logic for an Iterated Prisoner's Dilemma round-robin: strategies,
//! match simulation, repetition averaging, scheduling and the leaderboard.
//! Sequential and fully reproducible from a single seed.

mod config;
mod error;
mod game;
mod leaderboard;
mod pairing;
mod payoff;
mod random;
mod registry;
mod report;
mod rounds;
pub mod strategies;
mod strategy;
mod tournament;

pub use config::{draw_round_length, RunConfig, MAX_ROUND_LENGTH, MIN_ROUND_LENGTH, ROUND_LENGTH_LIMIT};
pub use error::{ArenaError, Result};
pub use game::{run_match, simulate, MatchConfig, MatchResult};
pub use leaderboard::{Leaderboard, Standing};
pub use pairing::{assemble_roster, calculate_match_count, generate_all_pairings, Pairings, Selection};
pub use payoff::{PayoffError, PayoffMatrix};
pub use random::ArenaRng;
pub use registry::StrategyRegistry;
pub use report::{format_score, ResultsWriter};
pub use rounds::{play_pairing, repetitions, PairingResult, DEFAULT_ROUNDS};
pub use strategies::builtin_strategies;
pub use strategy::{Move, Play, Setup, Strategy, StrategyDef, StrategyFactory, StrategyKind, Turn};
pub use tournament::{PairingReport, Tournament, TournamentReport};
