/// Bootstrap resampling driver.
///
/// Each trial draws a with-replacement resample of the judgment records,
/// replays it through a fresh rating simulation, and records every
/// system's final skill estimate. Trials are independent: trial `i`
/// consumes entry `i` of an explicitly constructed seed pool, so a whole
/// run is bit-reproducible from one master seed and no ambient RNG state
/// exists anywhere.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use skillratings::trueskill::TrueSkillRating;

use crate::error::RankError;
use crate::extract::extract;
use crate::rating;
use crate::types::{Extraction, JudgmentRecord, SystemMap};

/// Pre-generated per-trial seeds: one master seed in, one seed per trial
/// out, always in the same order.
#[derive(Debug, Clone)]
pub struct SeedPool {
    seeds: Vec<u64>,
}

impl SeedPool {
    /// Derive `trials` seeds from a master seed.
    pub fn from_master(master: u64, trials: usize) -> Self {
        let mut rng = SmallRng::seed_from_u64(master);
        SeedPool {
            seeds: (0..trials).map(|_| rng.random()).collect(),
        }
    }

    pub fn trials(&self) -> usize {
        self.seeds.len()
    }

    /// Seed assigned to one trial index.
    pub fn seed(&self, trial: usize) -> u64 {
        self.seeds[trial]
    }
}

/// Collect each system's empirical score distribution across trials.
///
/// Returns one `Vec<f64>` per system (map order), each of length
/// `seeds.trials()`: every system known at trial start gets exactly one
/// score per trial, staying at the fresh baseline if it appears in no
/// resampled record. Malformed records keep their resample slots and are
/// skipped per occurrence.
pub fn run_bootstrap(
    records: &[JudgmentRecord],
    systems: &SystemMap,
    seeds: &SeedPool,
) -> Result<Vec<Vec<f64>>, RankError> {
    // Extraction is pure, so resolve every record once up front. An
    // unknown system code surfaces here, before any trial runs, instead
    // of depending on which records a resample happens to draw.
    let extractions = records
        .iter()
        .map(|record| extract(record, systems))
        .collect::<Result<Vec<Extraction>, RankError>>()?;

    let mut distributions: Vec<Vec<f64>> = (0..systems.len())
        .map(|_| Vec::with_capacity(seeds.trials()))
        .collect();

    for trial in 0..seeds.trials() {
        let mut rng = SmallRng::seed_from_u64(seeds.seed(trial));
        let mut ratings: Vec<TrueSkillRating> = vec![rating::fresh(); systems.len()];

        // Rating updates are order-sensitive, so the resampled order is
        // the processing order.
        for _ in 0..extractions.len() {
            let pick = rng.random_range(0..extractions.len());
            match extractions[pick] {
                Extraction::Outcome(outcome) => {
                    let (winner, loser) =
                        rating::update(ratings[outcome.winner], ratings[outcome.loser]);
                    ratings[outcome.winner] = winner;
                    ratings[outcome.loser] = loser;
                }
                Extraction::Malformed => {}
            }
        }

        for (idx, final_rating) in ratings.iter().enumerate() {
            distributions[idx].push(rating::skill(final_rating));
        }
    }

    Ok(distributions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn make_map() -> SystemMap {
        SystemMap::from_pairs(&[("s0", "Gold"), ("s1", "Template"), ("s2", "macro")])
    }

    fn make_record(first: &str, second: &str, best: Side, worst: Side) -> JudgmentRecord {
        JudgmentRecord {
            first_shown: first.to_string(),
            second_shown: second.to_string(),
            best,
            worst,
        }
    }

    fn first_beats_second(first: &str, second: &str) -> JudgmentRecord {
        make_record(first, second, Side::First, Side::Second)
    }

    #[test]
    fn test_seed_pool_is_deterministic() {
        let a = SeedPool::from_master(99, 20);
        let b = SeedPool::from_master(99, 20);
        let c = SeedPool::from_master(100, 20);

        assert_eq!(a.trials(), 20);
        assert!((0..20).all(|i| a.seed(i) == b.seed(i)));
        assert!((0..20).any(|i| a.seed(i) != c.seed(i)));
    }

    #[test]
    fn test_every_system_scores_once_per_trial() {
        let records = vec![
            first_beats_second("s0", "s1"),
            first_beats_second("s1", "s2"),
            first_beats_second("s0", "s2"),
        ];
        let seeds = SeedPool::from_master(7, 25);

        let distributions = run_bootstrap(&records, &make_map(), &seeds).unwrap();

        assert_eq!(distributions.len(), 3);
        for distribution in &distributions {
            assert_eq!(distribution.len(), 25);
        }
    }

    #[test]
    fn test_bit_identical_across_runs() {
        let records = vec![
            first_beats_second("s0", "s1"),
            first_beats_second("s1", "s2"),
        ];
        let seeds = SeedPool::from_master(42, 30);

        let first = run_bootstrap(&records, &make_map(), &seeds).unwrap();
        let second = run_bootstrap(&records, &make_map(), &seeds).unwrap();

        for (a, b) in first.iter().zip(second.iter()) {
            for (x, y) in a.iter().zip(b.iter()) {
                assert_eq!(x.to_bits(), y.to_bits());
            }
        }
    }

    #[test]
    fn test_all_malformed_leaves_everyone_fresh() {
        let records = vec![
            make_record("s0", "s1", Side::First, Side::First),
            make_record("s1", "s2", Side::Second, Side::Second),
        ];
        let seeds = SeedPool::from_master(3, 10);

        let distributions = run_bootstrap(&records, &make_map(), &seeds).unwrap();

        let baseline = rating::skill(&rating::fresh());
        for distribution in &distributions {
            assert!(distribution.iter().all(|&score| score == baseline));
        }
    }

    #[test]
    fn test_absent_system_stays_at_baseline() {
        // s2 appears in no record: its score must still be recorded every
        // trial, at the fresh baseline.
        let records = vec![first_beats_second("s0", "s1")];
        let seeds = SeedPool::from_master(11, 15);

        let distributions = run_bootstrap(&records, &make_map(), &seeds).unwrap();

        let baseline = rating::skill(&rating::fresh());
        assert_eq!(distributions[2].len(), 15);
        assert!(distributions[2].iter().all(|&score| score == baseline));
    }

    #[test]
    fn test_empty_records_resample_to_nothing() {
        let seeds = SeedPool::from_master(5, 10);
        let distributions = run_bootstrap(&[], &make_map(), &seeds).unwrap();

        let baseline = rating::skill(&rating::fresh());
        for distribution in &distributions {
            assert_eq!(distribution.len(), 10);
            assert!(distribution.iter().all(|&score| score == baseline));
        }
    }

    #[test]
    fn test_unknown_code_fails_before_any_trial() {
        let records = vec![first_beats_second("s0", "mystery")];
        let seeds = SeedPool::from_master(1, 10);

        let err = run_bootstrap(&records, &make_map(), &seeds).unwrap_err();
        assert_eq!(
            err,
            RankError::UnknownSystem {
                code: "mystery".to_string()
            }
        );
    }
}
