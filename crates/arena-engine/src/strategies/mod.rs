//! Built-in strategy catalogue

mod chance;
mod preset;
mod probing;
mod reactive;
mod threshold;

pub use chance::{CooperateSometimesDefect, DefectSometimesCooperate, Joss, Random};
pub use preset::{AlwaysCooperate, AlwaysDefect, Alternator, ReverseAlternator};
pub use probing::{Calculator, Detective, Pavlov, Tester};
pub use reactive::{GrimmTitForTat, ReverseTitForTat, TitFor2Tats, TitForTat};
pub use threshold::{DelayedGrimmTrigger, GrimmTrigger, Grumpy, NiceTrigger};

use crate::strategy::StrategyDef;

/// Every built-in strategy, in catalogue order
pub fn builtin_strategies() -> Vec<StrategyDef> {
    vec![
        StrategyDef::of::<Calculator>(),
        StrategyDef::of::<Detective>(),
        StrategyDef::of::<Pavlov>(),
        StrategyDef::of::<AlwaysCooperate>(),
        StrategyDef::of::<AlwaysDefect>(),
        StrategyDef::of::<Alternator>(),
        StrategyDef::of::<ReverseAlternator>(),
        StrategyDef::of::<Random>(),
        StrategyDef::of::<CooperateSometimesDefect>(),
        StrategyDef::of::<DefectSometimesCooperate>(),
        StrategyDef::of::<Joss>(),
        StrategyDef::of::<Tester>(),
        StrategyDef::of::<GrimmTrigger>(),
        StrategyDef::of::<DelayedGrimmTrigger>(),
        StrategyDef::of::<NiceTrigger>(),
        StrategyDef::of::<Grumpy>(),
        StrategyDef::of::<TitForTat>(),
        StrategyDef::of::<ReverseTitForTat>(),
        StrategyDef::of::<TitFor2Tats>(),
        StrategyDef::of::<GrimmTitForTat>(),
    ]
}
