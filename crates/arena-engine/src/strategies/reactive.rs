//! Tit-for-Tat and its relatives

use crate::strategy::{Move, Play, Setup, Strategy, StrategyKind, Turn};

/// Copy opponent's last move, start with cooperate
pub struct TitForTat;

impl Strategy for TitForTat {
    fn decide(&mut self, history: &[Turn]) -> Play {
        match history.last() {
            None => Move::Cooperate.into(),
            Some(last) => last.opponent.into(),
        }
    }
}

impl StrategyKind for TitForTat {
    const NAME: &'static str = "TitForTat";
    const DESCRIPTION: &'static str = "Copies opponent's last move. Starts by cooperating.";

    fn spawn(_: Setup<'_>) -> Self {
        TitForTat
    }
}

/// Start with defect, then play the opposite of the opponent's last move
pub struct ReverseTitForTat;

impl Strategy for ReverseTitForTat {
    fn decide(&mut self, history: &[Turn]) -> Play {
        match history.last() {
            None => Move::Defect.into(),
            Some(last) => last.opponent.opposite().into(),
        }
    }
}

impl StrategyKind for ReverseTitForTat {
    const NAME: &'static str = "ReverseTitForTat";
    const DESCRIPTION: &'static str = "Starts by defecting, then plays the reverse of the opponent's last move.";

    fn spawn(_: Setup<'_>) -> Self {
        ReverseTitForTat
    }
}

/// Only defect if opponent defected twice in a row
pub struct TitFor2Tats;

impl Strategy for TitFor2Tats {
    fn decide(&mut self, history: &[Turn]) -> Play {
        match history {
            [.., a, b] => (a.opponent == Move::Cooperate || b.opponent == Move::Cooperate).into(),
            _ => Move::Cooperate.into(),
        }
    }
}

impl StrategyKind for TitFor2Tats {
    const NAME: &'static str = "TitFor2Tats";
    const DESCRIPTION: &'static str = "Only retaliates after two consecutive defections.";

    fn spawn(_: Setup<'_>) -> Self {
        TitFor2Tats
    }
}

/// Tit-for-Tat until two consecutive opponent defections, then defect forever
#[derive(Default)]
pub struct GrimmTitForTat {
    angry: bool,
}

impl Strategy for GrimmTitForTat {
    fn decide(&mut self, history: &[Turn]) -> Play {
        if self.angry {
            return Move::Defect.into();
        }
        match history {
            [] => Move::Cooperate.into(),
            [.., a, b] if a.opponent == Move::Defect && b.opponent == Move::Defect => {
                self.angry = true;
                Move::Defect.into()
            }
            [.., last] => last.opponent.into(),
        }
    }
}

impl StrategyKind for GrimmTitForTat {
    const NAME: &'static str = "GrimmTitForTat";
    const DESCRIPTION: &'static str = "Tit for Tat, but two defections in a row make it defect for the rest of the match.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}
