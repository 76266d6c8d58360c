//! Fixed-pattern strategies that ignore the opponent

use crate::strategy::{Move, Play, Setup, Strategy, StrategyKind, Turn};

pub struct AlwaysCooperate;

impl Strategy for AlwaysCooperate {
    fn decide(&mut self, _history: &[Turn]) -> Play {
        Move::Cooperate.into()
    }
}

impl StrategyKind for AlwaysCooperate {
    const NAME: &'static str = "AlwaysCooperate";
    const DESCRIPTION: &'static str = "Never defects. Always cooperates.";

    fn spawn(_: Setup<'_>) -> Self {
        AlwaysCooperate
    }
}

pub struct AlwaysDefect;

impl Strategy for AlwaysDefect {
    fn decide(&mut self, _history: &[Turn]) -> Play {
        Move::Defect.into()
    }
}

impl StrategyKind for AlwaysDefect {
    const NAME: &'static str = "AlwaysDefect";
    const DESCRIPTION: &'static str = "Never cooperates. Always defects.";

    fn spawn(_: Setup<'_>) -> Self {
        AlwaysDefect
    }
}

/// C, D, C, D, ...
pub struct Alternator;

impl Strategy for Alternator {
    fn decide(&mut self, history: &[Turn]) -> Play {
        (history.len() % 2 == 0).into()
    }
}

impl StrategyKind for Alternator {
    const NAME: &'static str = "Alternator";
    const DESCRIPTION: &'static str = "Alternates between cooperating and defecting, starting with cooperation.";

    fn spawn(_: Setup<'_>) -> Self {
        Alternator
    }
}

/// D, C, D, C, ...
pub struct ReverseAlternator;

impl Strategy for ReverseAlternator {
    fn decide(&mut self, history: &[Turn]) -> Play {
        (history.len() % 2 == 1).into()
    }
}

impl StrategyKind for ReverseAlternator {
    const NAME: &'static str = "ReverseAlternator";
    const DESCRIPTION: &'static str = "Alternates between cooperating and defecting, starting with defection.";

    fn spawn(_: Setup<'_>) -> Self {
        ReverseAlternator
    }
}
