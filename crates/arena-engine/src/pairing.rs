//! Roster assembly and all-pairs scheduling
//!
//! Pairings follow the combinatorial order of the roster: (0,1), (0,2), ..., (1,2), ...
//! The results file is written in this order, so it must stay reproducible.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ArenaError, Result};
use crate::registry::StrategyRegistry;
use crate::strategy::StrategyDef;

/// Which registered strategies take part, and in what order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Strategy moved to the front of the roster
    pub compare: Option<String>,
    pub exclude: Vec<String>,
    pub with_stochastic: bool,
}

/// Build the ordered participant list from a registry
///
/// The compare strategy is taken even if it is also excluded. The stochastic
/// filter is applied last and can remove the compare strategy too.
pub fn assemble_roster(registry: &StrategyRegistry, selection: &Selection) -> Result<Vec<StrategyDef>> {
    let compare = selection.compare.as_deref().filter(|name| !name.is_empty());
    let excluded: HashSet<&str> = selection.exclude.iter().map(String::as_str).collect();

    for name in &selection.exclude {
        if !registry.contains(name) {
            warn!(strategy = name.as_str(), "excluded strategy is not registered");
        }
    }

    let mut front: Option<StrategyDef> = None;
    let mut roster: Vec<StrategyDef> = Vec::with_capacity(registry.len());
    for def in registry.iter() {
        if compare == Some(def.name()) {
            front = Some(*def);
        } else if !excluded.contains(def.name()) {
            roster.push(*def);
        }
    }

    match (compare, front) {
        (_, Some(def)) => roster.insert(0, def),
        (Some(name), None) => return Err(ArenaError::UnknownCompareStrategy(name.to_string())),
        (None, None) => {}
    }

    if !selection.with_stochastic {
        roster.retain(|def| !def.is_stochastic());
    }

    Ok(roster)
}

/// Lazy iterator over every unordered pair `(i, j)`, `i < j`, of `n` participants
#[derive(Clone, Debug)]
pub struct Pairings {
    n: usize,
    i: usize,
    j: usize,
}

impl Pairings {
    pub fn new(participant_count: usize) -> Self {
        Self { n: participant_count, i: 0, j: 1 }
    }
}

impl Iterator for Pairings {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.n {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.n {
                return None;
            }
        }
        let pair = (self.i, self.j);
        self.j += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.i + 1 >= self.n {
            0
        } else {
            // rest of row i, plus every full row after it
            let rest_of_row = self.n.saturating_sub(self.j);
            rest_of_row + calculate_match_count(self.n - self.i - 1)
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Pairings {}

/// Generate all match pairings for a tournament
///
/// # Returns
/// Vector of (index_a, index_b) pairs, where index_a < index_b
pub fn generate_all_pairings(participant_count: usize) -> Vec<(usize, usize)> {
    Pairings::new(participant_count).collect()
}

/// Total number of matches: C(n, 2)
pub fn calculate_match_count(participant_count: usize) -> usize {
    participant_count * participant_count.saturating_sub(1) / 2
}
