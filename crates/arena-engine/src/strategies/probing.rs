//! Strategies that read more than the last move: probes, score tracking, win-stay

use crate::payoff::PayoffMatrix;
use crate::strategy::{Move, Play, Setup, Strategy, StrategyKind, Turn};

/// Repeat own move after a cooperation, switch after a defection. Start with cooperate.
pub struct Pavlov;

impl Strategy for Pavlov {
    fn decide(&mut self, history: &[Turn]) -> Play {
        match history.last() {
            None => Move::Cooperate.into(),
            Some(last) if last.opponent == Move::Cooperate => last.own.into(),
            Some(last) => last.own.opposite().into(),
        }
    }
}

impl StrategyKind for Pavlov {
    const NAME: &'static str = "Pavlov";
    const DESCRIPTION: &'static str = "Repeats its last move if the opponent cooperated, switches if it defected.";

    fn spawn(_: Setup<'_>) -> Self {
        Pavlov
    }
}

const DETECTIVE_OPENING: [Move; 4] = [Move::Cooperate, Move::Defect, Move::Cooperate, Move::Cooperate];

/// Probe with C, D, C, C; exploit an opponent that never struck back, otherwise Tit-for-Tat
#[derive(Default)]
pub struct Detective {
    exploit: bool,
}

impl Strategy for Detective {
    fn decide(&mut self, history: &[Turn]) -> Play {
        if self.exploit {
            return Move::Defect.into();
        }
        if let Some(opening) = DETECTIVE_OPENING.get(history.len()) {
            return (*opening).into();
        }
        if history.len() == DETECTIVE_OPENING.len()
            && history.iter().all(|t| t.opponent == Move::Cooperate)
        {
            self.exploit = true;
            return Move::Defect.into();
        }
        history.last().map_or(Move::Cooperate, |t| t.opponent).into()
    }
}

impl StrategyKind for Detective {
    const NAME: &'static str = "Detective";
    const DESCRIPTION: &'static str = "Opens C, D, C, C. Exploits opponents that never retaliate, otherwise plays Tit for Tat.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}

/// Alternate D, C while the opponent lets it slide, Tit-for-Tat once it retaliates
pub struct Tester {
    repeat: bool,
}

impl Default for Tester {
    fn default() -> Self {
        Self { repeat: true }
    }
}

impl Strategy for Tester {
    fn decide(&mut self, history: &[Turn]) -> Play {
        if self.repeat {
            let len = history.len();
            if len == 1 || len == 2 {
                let recent = &history[len.saturating_sub(2)..];
                self.repeat = !recent.iter().any(|t| t.opponent == Move::Defect);
            }
            return (len % 2 == 1).into();
        }
        history.last().map_or(Move::Cooperate, |t| t.opponent).into()
    }
}

impl StrategyKind for Tester {
    const NAME: &'static str = "Tester";
    const DESCRIPTION: &'static str = "Defects, then cooperates to see whether the opponent retaliates. Plays Tit for Tat once it does.";

    fn spawn(_: Setup<'_>) -> Self {
        Self::default()
    }
}

/// Track both running scores and defect while behind
pub struct Calculator {
    payoff: PayoffMatrix,
    own_score: u64,
    opponent_score: u64,
}

impl Strategy for Calculator {
    fn decide(&mut self, history: &[Turn]) -> Play {
        let Some(last) = history.last() else {
            return Move::Cooperate.into();
        };
        let (own, opponent) = self.payoff.score(last.own, last.opponent);
        self.own_score += u64::from(own);
        self.opponent_score += u64::from(opponent);
        (self.own_score >= self.opponent_score).into()
    }
}

impl StrategyKind for Calculator {
    const NAME: &'static str = "Calculator";
    const DESCRIPTION: &'static str = "Keeps score and defects whenever it is behind, cooperates otherwise.";

    fn spawn(setup: Setup<'_>) -> Self {
        Self {
            payoff: *setup.payoff,
            own_score: 0,
            opponent_score: 0,
        }
    }
}
