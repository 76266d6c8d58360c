//! Stochastic strategies. Each instance owns the random stream it was built with.

use crate::random::ArenaRng;
use crate::strategy::{Move, Play, Setup, Strategy, StrategyKind, Turn};

/// 50/50 each turn
pub struct Random {
    rng: ArenaRng,
}

impl Strategy for Random {
    fn decide(&mut self, _history: &[Turn]) -> Play {
        self.rng.gen_bool(0.5).into()
    }
}

impl StrategyKind for Random {
    const NAME: &'static str = "Random";
    const DESCRIPTION: &'static str = "Randomly cooperates or defects each turn.";
    const STOCHASTIC: bool = true;

    fn spawn(setup: Setup<'_>) -> Self {
        Self { rng: setup.rng }
    }
}

pub struct CooperateSometimesDefect {
    rng: ArenaRng,
}

impl Strategy for CooperateSometimesDefect {
    fn decide(&mut self, _history: &[Turn]) -> Play {
        self.rng.gen_bool(0.9).into()
    }
}

impl StrategyKind for CooperateSometimesDefect {
    const NAME: &'static str = "CooperateSometimesDefect";
    const DESCRIPTION: &'static str = "Cooperates 90% of the time.";
    const STOCHASTIC: bool = true;

    fn spawn(setup: Setup<'_>) -> Self {
        Self { rng: setup.rng }
    }
}

pub struct DefectSometimesCooperate {
    rng: ArenaRng,
}

impl Strategy for DefectSometimesCooperate {
    fn decide(&mut self, _history: &[Turn]) -> Play {
        self.rng.gen_bool(0.1).into()
    }
}

impl StrategyKind for DefectSometimesCooperate {
    const NAME: &'static str = "DefectSometimesCooperate";
    const DESCRIPTION: &'static str = "Defects 90% of the time.";
    const STOCHASTIC: bool = true;

    fn spawn(setup: Setup<'_>) -> Self {
        Self { rng: setup.rng }
    }
}

/// Chance that Joss defects after an opponent cooperation
const JOSS_SNEAK: f64 = 0.1;

/// Tit-for-Tat that sneaks in a defection now and then
pub struct Joss {
    rng: ArenaRng,
}

impl Strategy for Joss {
    fn decide(&mut self, history: &[Turn]) -> Play {
        match history.last() {
            None => Move::Cooperate.into(),
            Some(last) if last.opponent == Move::Defect => Move::Defect.into(),
            Some(_) => (!self.rng.gen_bool(JOSS_SNEAK)).into(),
        }
    }
}

impl StrategyKind for Joss {
    const NAME: &'static str = "Joss";
    const DESCRIPTION: &'static str = "Tit for Tat, but defects 10% of the time even after a cooperation.";
    const STOCHASTIC: bool = true;

    fn spawn(setup: Setup<'_>) -> Self {
        Self { rng: setup.rng }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payoff::PayoffMatrix;
    use crate::strategies::testing::play_script;

    fn spawn<K: StrategyKind>(seed: u64) -> K {
        K::spawn(Setup { payoff: &PayoffMatrix::CLASSIC, rng: ArenaRng::new(seed) })
    }

    fn cooperation_rate(moves: &[Move]) -> f64 {
        moves.iter().filter(|m| **m == Move::Cooperate).count() as f64 / moves.len() as f64
    }

    #[test]
    fn test_same_stream_same_moves() {
        let script = [Move::Cooperate; 50];
        let a = play_script(&mut spawn::<Random>(9), &script);
        let b = play_script(&mut spawn::<Random>(9), &script);
        assert_eq!(a, b);
    }

    #[test]
    fn test_biases() {
        let script = vec![Move::Cooperate; 2000];
        let random = cooperation_rate(&play_script(&mut spawn::<Random>(1), &script));
        let mostly_nice = cooperation_rate(&play_script(&mut spawn::<CooperateSometimesDefect>(1), &script));
        let mostly_mean = cooperation_rate(&play_script(&mut spawn::<DefectSometimesCooperate>(1), &script));

        assert!(random > 0.4 && random < 0.6, "Random cooperation rate {}", random);
        assert!(mostly_nice > 0.85 && mostly_nice < 0.95, "rate {}", mostly_nice);
        assert!(mostly_mean > 0.05 && mostly_mean < 0.15, "rate {}", mostly_mean);
    }

    #[test]
    fn test_joss_retaliates_and_sneaks() {
        let mut joss = spawn::<Joss>(3);
        let moves = play_script(&mut joss, &[Move::Defect; 20]);
        assert_eq!(moves[0], Move::Cooperate);
        assert!(moves[1..].iter().all(|m| *m == Move::Defect));

        let moves = play_script(&mut spawn::<Joss>(3), &vec![Move::Cooperate; 2000]);
        let rate = cooperation_rate(&moves);
        assert!(rate > 0.85 && rate < 0.95, "Joss cooperation rate {}", rate);
    }
}
