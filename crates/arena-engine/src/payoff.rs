//! Payoff matrix for the Prisoner's Dilemma

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::Move;

/// Ways a payoff table can fail to describe a dilemma
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PayoffError {
    /// Against the same opponent move, defecting must pay more than cooperating.
    #[error("defecting against {opponent:?} pays {defect}, which must exceed cooperating ({cooperate})")]
    DefectionNotTempting { opponent: Move, defect: u32, cooperate: u32 },

    /// For the same own move, a cooperating opponent must pay more than a defecting one.
    #[error("playing {own:?} pays {cooperator} against a cooperator, which must exceed {defector} against a defector")]
    CooperationNotRewarded { own: Move, cooperator: u32, defector: u32 },

    /// Mutual cooperation must beat mutual defection.
    #[error("mutual cooperation ({reward}) must exceed mutual defection ({punishment})")]
    NoDilemma { reward: u32, punishment: u32 },
}

/// 2x2 payoff table indexed `[own][opponent]`, `Defect = 0`, `Cooperate = 1`
///
/// ```text
/// (both defected,              opponent cooperated, you defected)
/// (opponent defected, you cooperated,   both cooperated)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[[u32; 2]; 2]", into = "[[u32; 2]; 2]")]
pub struct PayoffMatrix {
    outcomes: [[u32; 2]; 2],
}

impl PayoffMatrix {
    /// Classic table: T=5, R=3, P=1, S=0
    pub const CLASSIC: Self = Self {
        outcomes: [[1, 5], [0, 3]],
    };

    /// Build a table, rejecting any that is not a dilemma
    pub fn new(outcomes: [[u32; 2]; 2]) -> Result<Self, PayoffError> {
        let matrix = Self { outcomes };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Check the dilemma ordering
    ///
    /// Together the three checks force Temptation > Reward > Punishment > Sucker.
    pub fn validate(&self) -> Result<(), PayoffError> {
        for opponent in [Move::Defect, Move::Cooperate] {
            let defect = self.payoff(Move::Defect, opponent);
            let cooperate = self.payoff(Move::Cooperate, opponent);
            if defect <= cooperate {
                return Err(PayoffError::DefectionNotTempting { opponent, defect, cooperate });
            }
        }
        for own in [Move::Defect, Move::Cooperate] {
            let cooperator = self.payoff(own, Move::Cooperate);
            let defector = self.payoff(own, Move::Defect);
            if cooperator <= defector {
                return Err(PayoffError::CooperationNotRewarded { own, cooperator, defector });
            }
        }
        if self.reward() <= self.punishment() {
            return Err(PayoffError::NoDilemma {
                reward: self.reward(),
                punishment: self.punishment(),
            });
        }
        Ok(())
    }

    /// Points earned by playing `own` against `opponent`
    pub fn payoff(&self, own: Move, opponent: Move) -> u32 {
        self.outcomes[own.index()][opponent.index()]
    }

    /// Returns (score_a, score_b) for one turn
    pub fn score(&self, a: Move, b: Move) -> (u32, u32) {
        (self.payoff(a, b), self.payoff(b, a))
    }

    pub fn temptation(&self) -> u32 {
        self.payoff(Move::Defect, Move::Cooperate)
    }

    pub fn reward(&self) -> u32 {
        self.payoff(Move::Cooperate, Move::Cooperate)
    }

    pub fn punishment(&self) -> u32 {
        self.payoff(Move::Defect, Move::Defect)
    }

    pub fn sucker(&self) -> u32 {
        self.payoff(Move::Cooperate, Move::Defect)
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<[[u32; 2]; 2]> for PayoffMatrix {
    type Error = PayoffError;

    fn try_from(outcomes: [[u32; 2]; 2]) -> Result<Self, Self::Error> {
        Self::new(outcomes)
    }
}

impl From<PayoffMatrix> for [[u32; 2]; 2] {
    fn from(matrix: PayoffMatrix) -> Self {
        matrix.outcomes
    }
}
