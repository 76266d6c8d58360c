//! Score aggregation and ranking

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ArenaError, Result};

/// One leaderboard row
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based
    pub rank: usize,
    pub name: String,
    /// Sum of per-pairing normalized scores
    pub total: f64,
    pub opponents: u32,
    /// `total / opponents`, 0 without opponents
    pub average: f64,
}

#[derive(Clone, Debug)]
struct Tally {
    name: String,
    total: f64,
    opponents: u32,
}

/// Running per-strategy totals, in enrollment order
#[derive(Clone, Debug, Default)]
pub struct Leaderboard {
    tallies: Vec<Tally>,
    index: HashMap<String, usize>,
}

impl Leaderboard {
    /// Enroll every participant up front so each one is ranked, even without opponents
    ///
    /// A name enrolled twice is a `DuplicateStrategy` error.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut board = Self::default();
        for name in names {
            let name = name.into();
            if board.index.contains_key(&name) {
                return Err(ArenaError::DuplicateStrategy(name));
            }
            board.slot(name);
        }
        Ok(board)
    }

    fn slot(&mut self, name: String) -> &mut Tally {
        let i = match self.index.get(&name) {
            Some(&i) => i,
            None => {
                self.index.insert(name.clone(), self.tallies.len());
                self.tallies.push(Tally { name, total: 0.0, opponents: 0 });
                self.tallies.len() - 1
            }
        };
        &mut self.tallies[i]
    }

    /// Fold one pairing's averaged scores into both sides' totals
    pub fn record(&mut self, name_a: &str, score_a: f64, name_b: &str, score_b: f64) {
        for (name, score) in [(name_a, score_a), (name_b, score_b)] {
            let tally = self.slot(name.to_string());
            tally.total += score;
            tally.opponents += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.tallies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Ranked rows, best average first
    ///
    /// Each total is divided by that strategy's own opponent count. Ties keep
    /// enrollment order.
    pub fn standings(&self) -> Vec<Standing> {
        let mut rows: Vec<Standing> = self
            .tallies
            .iter()
            .map(|t| Standing {
                rank: 0,
                name: t.name.clone(),
                total: t.total,
                opponents: t.opponents,
                average: if t.opponents == 0 { 0.0 } else { t.total / t.opponents as f64 },
            })
            .collect();
        // sort_by is stable
        rows.sort_by(|a, b| b.average.total_cmp(&a.average));
        for (i, row) in rows.iter_mut().enumerate() {
            row.rank = i + 1;
        }
        rows
    }
}
