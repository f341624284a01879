/// Default number of bootstrap trials per quality dimension.
pub const DEFAULT_TRIALS: usize = 1000;

/// Default master seed for the per-trial seed pool. One master seed
/// deterministically generates every trial's RNG seed, so a whole run is
/// bit-reproducible.
pub const DEFAULT_SEED: u64 = 42069;

/// Minimum accepted trial count.
///
/// Much below this, the 2.5%/97.5% percentile positions sit deep in the
/// first and last inter-order-statistic gaps and the interval bounds are
/// single-observation artifacts rather than tail estimates.
pub const MIN_TRIALS: usize = 40;

/// Percentile bounds of the two-sided 95% confidence interval.
pub const LOWER_PERCENTILE: f64 = 2.5;
pub const UPPER_PERCENTILE: f64 = 97.5;
