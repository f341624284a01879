/// sigrank-core: bootstrap significance clustering for pairwise rankings.
///
/// Human best/worst judgments → TrueSkill simulations over bootstrap
/// resamples → per-system confidence intervals → overlap clusters plus
/// explicit "differs from" pairs. No IO, no filesystem — just math.
/// Bring your own judgment data.
///
/// Systems enter as raw codes plus a code→name map. The crate handles the
/// internal mapping to dense array indices — callers never think about
/// indices.
///
/// # Quick start
///
/// ```rust
/// use sigrank_core::{rank_systems, JudgmentRecord, RankOptions, Side, SystemMap};
///
/// let systems = SystemMap::from_pairs(&[("sys0", "Gold"), ("sys1", "Template")]);
///
/// let records = vec![
///     JudgmentRecord {
///         first_shown: "sys0".into(),
///         second_shown: "sys1".into(),
///         best: Side::First,
///         worst: Side::Second,
///     },
/// ];
///
/// let report = rank_systems(&records, &systems, &RankOptions { trials: 50, seed: 7 }).unwrap();
///
/// for interval in &report.intervals {
///     println!("{}: [{:.2}, {:.2}]", interval.name, interval.low, interval.high);
/// }
/// for (a, b) in &report.differing_pairs {
///     println!("{a} differs from {b}");
/// }
/// ```

pub mod bootstrap;
pub mod cluster;
pub mod constants;
pub mod error;
pub mod extract;
pub mod interval;
pub mod rating;
pub mod significance;
pub mod types;

// Re-export primary public API at crate root.
pub use bootstrap::{run_bootstrap, SeedPool};
pub use cluster::{build_clusters, is_overlapping};
pub use error::RankError;
pub use extract::extract;
pub use interval::confidence_interval;
pub use significance::rank_systems;
pub use types::{
    DimensionReport, Extraction, JudgmentRecord, Outcome, RankOptions, Side, SystemInterval,
    SystemMap,
};
