//! Strategy contract and descriptors

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::payoff::PayoffMatrix;
use crate::random::ArenaRng;

/// A move in the Prisoner's Dilemma
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Defect = 0,
    Cooperate = 1,
}

impl Move {
    /// Transcript letters, indexed by move
    pub const LETTERS: [char; 2] = ['D', 'C'];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        Self::LETTERS[self.index()]
    }

    pub fn opposite(self) -> Self {
        match self {
            Move::Defect => Move::Cooperate,
            Move::Cooperate => Move::Defect,
        }
    }
}

/// One completed turn, from the point of view of the side holding the history
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub own: Move,
    pub opponent: Move,
}

impl Turn {
    pub fn new(own: Move, opponent: Move) -> Self {
        Self { own, opponent }
    }

    /// The same turn seen from the other side
    pub fn mirrored(self) -> Self {
        Self { own: self.opponent, opponent: self.own }
    }
}

/// Raw decision returned by a strategy
///
/// Only 0 (defect) and 1 (cooperate) are legal; the match loop rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Play(i64);

impl Play {
    pub fn value(self) -> i64 {
        self.0
    }

    pub fn to_move(self) -> Option<Move> {
        match self.0 {
            0 => Some(Move::Defect),
            1 => Some(Move::Cooperate),
            _ => None,
        }
    }
}

impl From<Move> for Play {
    fn from(m: Move) -> Self {
        Play(m as i64)
    }
}

impl From<bool> for Play {
    fn from(cooperate: bool) -> Self {
        Play(cooperate as i64)
    }
}

impl From<i64> for Play {
    fn from(value: i64) -> Self {
        Play(value)
    }
}

/// A decision agent taking part in one match
///
/// A fresh instance is built for every match, so any state kept in `self`
/// lives for exactly one match.
pub trait Strategy {
    /// Choose the next move given this match's history so far (empty on the first turn).
    fn decide(&mut self, history: &[Turn]) -> Play;
}

/// What a new instance may capture when it is built
pub struct Setup<'a> {
    /// The run's payoff table
    pub payoff: &'a PayoffMatrix,
    /// A random stream private to this instance
    pub rng: ArenaRng,
}

/// Static facts about a strategy type
pub trait StrategyKind: Strategy + Sized + 'static {
    /// Canonical display name, unique within a registry
    const NAME: &'static str;
    const DESCRIPTION: &'static str = "";
    /// Whether identical histories can lead to different moves across matches
    const STOCHASTIC: bool = false;

    fn spawn(setup: Setup<'_>) -> Self;
}

/// Builds a fresh boxed instance
pub type StrategyFactory = fn(Setup<'_>) -> Box<dyn Strategy>;

/// Named, classified recipe for strategy instances
#[derive(Clone, Copy)]
pub struct StrategyDef {
    name: &'static str,
    description: &'static str,
    stochastic: bool,
    factory: StrategyFactory,
}

fn build<K: StrategyKind>(setup: Setup<'_>) -> Box<dyn Strategy> {
    Box::new(K::spawn(setup))
}

impl StrategyDef {
    pub fn new(
        name: &'static str,
        description: &'static str,
        stochastic: bool,
        factory: StrategyFactory,
    ) -> Self {
        Self { name, description, stochastic, factory }
    }

    /// Descriptor for a strategy type
    pub fn of<K: StrategyKind>() -> Self {
        Self::new(K::NAME, K::DESCRIPTION, K::STOCHASTIC, build::<K>)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    pub fn is_stochastic(&self) -> bool {
        self.stochastic
    }

    /// Build a fresh instance for one match
    pub fn instantiate(&self, payoff: &PayoffMatrix, rng: ArenaRng) -> Box<dyn Strategy> {
        (self.factory)(Setup { payoff, rng })
    }
}

impl fmt::Debug for StrategyDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrategyDef")
            .field("name", &self.name)
            .field("stochastic", &self.stochastic)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl Strategy for Echo {
        fn decide(&mut self, history: &[Turn]) -> Play {
            history.last().map_or(Move::Cooperate, |t| t.opponent).into()
        }
    }

    impl StrategyKind for Echo {
        const NAME: &'static str = "Echo";
        const DESCRIPTION: &'static str = "Repeats the opponent.";

        fn spawn(_: Setup<'_>) -> Self {
            Echo
        }
    }

    #[test]
    fn test_move_letters() {
        assert_eq!(Move::Defect.letter(), 'D');
        assert_eq!(Move::Cooperate.letter(), 'C');
        assert_eq!(Move::Defect.index(), 0);
        assert_eq!(Move::Cooperate.index(), 1);
        assert_eq!(Move::Defect.opposite(), Move::Cooperate);
    }

    #[test]
    fn test_play_coercion() {
        assert_eq!(Play::from(false).to_move(), Some(Move::Defect));
        assert_eq!(Play::from(true).to_move(), Some(Move::Cooperate));
        assert_eq!(Play::from(0).to_move(), Some(Move::Defect));
        assert_eq!(Play::from(1).to_move(), Some(Move::Cooperate));
        assert_eq!(Play::from(Move::Cooperate).value(), 1);
        assert_eq!(Play::from(2).to_move(), None);
        assert_eq!(Play::from(-1).to_move(), None);
    }

    #[test]
    fn test_turn_mirrored() {
        let turn = Turn::new(Move::Cooperate, Move::Defect);
        assert_eq!(turn.mirrored(), Turn::new(Move::Defect, Move::Cooperate));
        assert_eq!(turn.mirrored().mirrored(), turn);
    }

    #[test]
    fn test_def_of_kind() {
        let def = StrategyDef::of::<Echo>();
        assert_eq!(def.name(), "Echo");
        assert_eq!(def.description(), "Repeats the opponent.");
        assert!(!def.is_stochastic());

        let mut instance = def.instantiate(&PayoffMatrix::CLASSIC, ArenaRng::new(1));
        assert_eq!(instance.decide(&[]).to_move(), Some(Move::Cooperate));
        let history = [Turn::new(Move::Cooperate, Move::Defect)];
        assert_eq!(instance.decide(&history).to_move(), Some(Move::Defect));
    }
}
