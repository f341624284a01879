/// The per-dimension significance pipeline.
///
/// One function, one options struct: bootstrap the judgment records,
/// turn each system's score distribution into a confidence interval,
/// then derive the overlap clusters and differing pairs.
use crate::bootstrap::{run_bootstrap, SeedPool};
use crate::cluster::build_clusters;
use crate::constants::MIN_TRIALS;
use crate::error::RankError;
use crate::interval::confidence_interval;
use crate::types::{DimensionReport, JudgmentRecord, RankOptions, SystemInterval, SystemMap};

/// Rank one quality dimension's judgment records.
///
/// Dimensions are independent: nothing persists between calls except what
/// the caller passes in, so running several dimensions is just calling
/// this once per record collection. A degenerate trial count is rejected
/// before any trial runs.
pub fn rank_systems(
    records: &[JudgmentRecord],
    systems: &SystemMap,
    options: &RankOptions,
) -> Result<DimensionReport, RankError> {
    if options.trials < MIN_TRIALS {
        return Err(RankError::TooFewTrials {
            trials: options.trials,
        });
    }

    let seeds = SeedPool::from_master(options.seed, options.trials);
    let distributions = run_bootstrap(records, systems, &seeds)?;

    let mut intervals = Vec::with_capacity(systems.len());
    let mut bounds = Vec::with_capacity(systems.len());
    for (idx, distribution) in distributions.iter().enumerate() {
        let (low, high) = confidence_interval(distribution);
        intervals.push(SystemInterval {
            name: systems.name(idx).to_string(),
            low,
            high,
        });
        bounds.push((low, high));
    }

    let (clusters, differing_pairs) = build_clusters(systems.names(), &bounds);

    Ok(DimensionReport {
        intervals,
        clusters,
        differing_pairs,
    })
}
