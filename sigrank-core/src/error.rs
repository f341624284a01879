use thiserror::Error;

use crate::constants::MIN_TRIALS;

/// Fatal configuration errors.
///
/// Malformed judgment records are deliberately absent here: an inconsistent
/// judgment is noisy input, skipped record by record. These variants signal
/// systemic setup mistakes and halt the affected dimension.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RankError {
    /// A judgment record names a code the system map does not know. The map
    /// is assumed complete, so this means data would be silently dropped.
    #[error("unknown system code \"{code}\": the code-to-name map is incomplete")]
    UnknownSystem { code: String },

    /// Trial count too small for stable tail percentiles. Rejected before
    /// any trial runs.
    #[error("trial count {trials} is below the minimum of {min}", min = MIN_TRIALS)]
    TooFewTrials { trials: usize },
}
