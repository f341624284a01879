use std::collections::HashMap;

use crate::constants::{DEFAULT_SEED, DEFAULT_TRIALS};

/// Which of the two shown systems a judge selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

/// One raw human judgment: two shown systems plus independently-elicited
/// best and worst selections.
///
/// `first_shown` / `second_shown` carry raw system codes, resolved through a
/// [`SystemMap`] at extraction time. The record is consistent only when
/// `best` and `worst` name different sides.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JudgmentRecord {
    pub first_shown: String,
    pub second_shown: String,
    /// Side picked as best.
    pub best: Side,
    /// Side picked as worst.
    pub worst: Side,
}

/// A decided pairwise outcome. Winner and loser are indices into the
/// [`SystemMap`] the record was extracted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub winner: usize,
    pub loser: usize,
}

/// What a judgment record amounts to once extracted.
///
/// `Malformed` marks an inconsistent judgment (best and worst name the same
/// side). It contributes no comparison and is never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extraction {
    Outcome(Outcome),
    Malformed,
}

/// Options for [`rank_systems`](crate::rank_systems) — the bootstrap
/// significance pipeline.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankOptions {
    /// Number of bootstrap trials per dimension.
    pub trials: usize,
    /// Master seed for the per-trial seed pool.
    pub seed: u64,
}

impl Default for RankOptions {
    fn default() -> Self {
        RankOptions {
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

/// A system's bootstrapped 95% confidence interval.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemInterval {
    pub name: String,
    pub low: f64,
    pub high: f64,
}

/// Result of ranking one quality dimension.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionReport {
    /// Per-system intervals, in map order.
    pub intervals: Vec<SystemInterval>,
    /// Deduplicated anchor clusters, members sorted by name.
    pub clusters: Vec<Vec<String>>,
    /// Unordered pairs whose intervals do not overlap, each exactly once.
    pub differing_pairs: Vec<(String, String)>,
}

/// Maps raw system codes to dense 0..N indices, with display names.
///
/// Fixed for a whole run; index order (and therefore report order) is the
/// order the pairs were declared in.
#[derive(Debug, Clone)]
pub struct SystemMap {
    names: Vec<String>,
    code_to_idx: HashMap<String, usize>,
}

impl SystemMap {
    /// Build from (code, name) pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut names: Vec<String> = Vec::with_capacity(pairs.len());
        let mut code_to_idx = HashMap::with_capacity(pairs.len());
        for (idx, &(code, name)) in pairs.iter().enumerate() {
            let prev = code_to_idx.insert(code.to_string(), idx);
            assert!(prev.is_none(), "Duplicate system code: {}", code);
            assert!(
                !names.iter().any(|n| n == name),
                "Duplicate system name: {}",
                name
            );
            names.push(name.to_string());
        }
        SystemMap { names, code_to_idx }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Index for a raw code, if the code is known.
    pub fn resolve(&self, code: &str) -> Option<usize> {
        self.code_to_idx.get(code).copied()
    }

    pub fn name(&self, idx: usize) -> &str {
        &self.names[idx]
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}
