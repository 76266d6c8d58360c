//! Strategies that switch behavior once the opponent crosses a threshold

use crate::strategy::{Move, Play, Setup, Strategy, StrategyKind, Turn};

/// Cooperate until opponent defects, then always defect
#[derive(Default)]
pub struct GrimmTrigger {
    angry: bool,
}

impl Strategy for GrimmTrigger {
    fn decide(&mut self, history: &[Turn]) -> Play {
        if self.angry {
            return Move::Defect.into();
        }
        match history.last() {
            Some(last) if last.opponent == Move::Defect => {
                self.angry = true;
                Move::Defect.into()
            }
            _ => Move::Cooperate.into(),
        }
    }
}

impl StrategyKind for GrimmTrigger {
    const NAME: &'static str = "GrimmTrigger";
    const DESCRIPTION: &'static str = "Cooperates until betrayed, then always defects.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}

/// Grimm Trigger that forgives the first defection
#[derive(Default)]
pub struct DelayedGrimmTrigger {
    defections: u32,
}

impl Strategy for DelayedGrimmTrigger {
    fn decide(&mut self, history: &[Turn]) -> Play {
        let Some(last) = history.last() else {
            return Move::Cooperate.into();
        };
        if last.opponent == Move::Defect {
            self.defections += 1;
        }
        (self.defections < 2).into()
    }
}

impl StrategyKind for DelayedGrimmTrigger {
    const NAME: &'static str = "DelayedGrimmTrigger";
    const DESCRIPTION: &'static str = "Like GrimmTrigger, but forgives the first defection.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}

/// Defect until opponent cooperates, then always cooperate
#[derive(Default)]
pub struct NiceTrigger {
    nice: bool,
}

impl Strategy for NiceTrigger {
    fn decide(&mut self, history: &[Turn]) -> Play {
        if self.nice {
            return Move::Cooperate.into();
        }
        match history.last() {
            Some(last) if last.opponent == Move::Cooperate => {
                self.nice = true;
                Move::Cooperate.into()
            }
            _ => Move::Defect.into(),
        }
    }
}

impl StrategyKind for NiceTrigger {
    const NAME: &'static str = "NiceTrigger";
    const DESCRIPTION: &'static str = "Defects until the opponent cooperates, then always cooperates.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}

/// Defections before Grumpy turns
const GRUMPY_LIMIT: u32 = 5;

/// Net opponent defections push toward defecting, cooperations pull back
#[derive(Default)]
pub struct Grumpy {
    count: u32,
}

impl Strategy for Grumpy {
    fn decide(&mut self, history: &[Turn]) -> Play {
        let Some(last) = history.last() else {
            return Move::Cooperate.into();
        };
        match last.opponent {
            Move::Defect => self.count += 1,
            Move::Cooperate => self.count = self.count.saturating_sub(1),
        }
        (self.count < GRUMPY_LIMIT).into()
    }
}

impl StrategyKind for Grumpy {
    const NAME: &'static str = "Grumpy";
    const DESCRIPTION: &'static str = "Cooperates, but turns to defecting after enough defections and back after enough cooperation.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}
