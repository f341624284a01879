/// Percentile confidence intervals over empirical score distributions.
use crate::constants::{LOWER_PERCENTILE, UPPER_PERCENTILE};

/// Two-sided 95% confidence interval of a score distribution.
///
/// Percentiles interpolate linearly between order statistics, so the
/// bounds are exact functions of the sample rather than nearest-rank
/// approximations. Deterministic given the distribution.
pub fn confidence_interval(distribution: &[f64]) -> (f64, f64) {
    assert!(
        !distribution.is_empty(),
        "confidence_interval requires a non-empty distribution"
    );

    let mut sorted = distribution.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    (
        percentile(&sorted, LOWER_PERCENTILE),
        percentile(&sorted, UPPER_PERCENTILE),
    )
}

/// Linear-interpolation percentile of an ascending-sorted sample.
///
/// The `q`-th percentile sits at fractional position `q/100 * (n-1)`;
/// the value interpolates between the order statistics on either side.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let position = q / 100.0 * (sorted.len() - 1) as f64;
    let below = position.floor() as usize;
    let above = position.ceil() as usize;
    let fraction = position - below as f64;

    sorted[below] + (sorted[above] - sorted[below]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_one_to_hundred() {
        let distribution: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        let (low, high) = confidence_interval(&distribution);

        // 2.5% of the way through 99 gaps: 3 + 0.475, and symmetrically
        // 97 + 0.525 at the top.
        assert!((low - 3.475).abs() < 1e-12, "low was {low}");
        assert!((high - 97.525).abs() < 1e-12, "high was {high}");
    }

    #[test]
    fn test_input_order_is_irrelevant() {
        let forward: Vec<f64> = (1..=100).map(|v| v as f64).collect();
        let backward: Vec<f64> = (1..=100).rev().map(|v| v as f64).collect();

        assert_eq!(confidence_interval(&forward), confidence_interval(&backward));
    }

    #[test]
    fn test_constant_distribution_collapses() {
        let distribution = vec![25.0; 50];
        assert_eq!(confidence_interval(&distribution), (25.0, 25.0));
    }

    #[test]
    fn test_single_sample() {
        assert_eq!(confidence_interval(&[4.2]), (4.2, 4.2));
    }

    #[test]
    fn test_two_samples_interpolate() {
        let (low, high) = confidence_interval(&[0.0, 10.0]);
        assert!((low - 0.25).abs() < 1e-12);
        assert!((high - 9.75).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "non-empty distribution")]
    fn test_empty_distribution_panics() {
        let _ = confidence_interval(&[]);
    }
}
