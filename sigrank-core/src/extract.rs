/// Turns one raw judgment record into a pairwise outcome.
use crate::error::RankError;
use crate::types::{Extraction, JudgmentRecord, Outcome, Side, SystemMap};

/// Decide winner and loser from a record's best/worst selections.
///
/// Both shown codes are resolved through the map first; an unknown code is
/// a configuration error (the map is assumed complete and fixed at setup),
/// never a silent drop. A record whose best and worst selections name the
/// same side is an inconsistent judgment and extracts to
/// [`Extraction::Malformed`] — it contributes no comparison. Pure function.
pub fn extract(record: &JudgmentRecord, systems: &SystemMap) -> Result<Extraction, RankError> {
    let first = systems
        .resolve(&record.first_shown)
        .ok_or_else(|| RankError::UnknownSystem {
            code: record.first_shown.clone(),
        })?;
    let second = systems
        .resolve(&record.second_shown)
        .ok_or_else(|| RankError::UnknownSystem {
            code: record.second_shown.clone(),
        })?;

    let extraction = match (record.best, record.worst) {
        (Side::First, Side::Second) => Extraction::Outcome(Outcome {
            winner: first,
            loser: second,
        }),
        (Side::Second, Side::First) => Extraction::Outcome(Outcome {
            winner: second,
            loser: first,
        }),
        _ => Extraction::Malformed,
    };

    Ok(extraction)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_map() -> SystemMap {
        SystemMap::from_pairs(&[("s0", "Gold"), ("s1", "Template")])
    }

    fn make_record(best: Side, worst: Side) -> JudgmentRecord {
        JudgmentRecord {
            first_shown: "s0".to_string(),
            second_shown: "s1".to_string(),
            best,
            worst,
        }
    }

    #[test]
    fn test_best_first_worst_second() {
        let record = make_record(Side::First, Side::Second);
        let extraction = extract(&record, &make_map()).unwrap();
        assert_eq!(
            extraction,
            Extraction::Outcome(Outcome { winner: 0, loser: 1 })
        );
    }

    #[test]
    fn test_best_second_worst_first() {
        let record = make_record(Side::Second, Side::First);
        let extraction = extract(&record, &make_map()).unwrap();
        assert_eq!(
            extraction,
            Extraction::Outcome(Outcome { winner: 1, loser: 0 })
        );
    }

    #[test]
    fn test_same_side_twice_is_malformed() {
        let both_first = make_record(Side::First, Side::First);
        let both_second = make_record(Side::Second, Side::Second);
        assert_eq!(extract(&both_first, &make_map()).unwrap(), Extraction::Malformed);
        assert_eq!(extract(&both_second, &make_map()).unwrap(), Extraction::Malformed);
    }

    #[test]
    fn test_unknown_code_is_fatal() {
        let mut record = make_record(Side::First, Side::Second);
        record.second_shown = "s9".to_string();

        let err = extract(&record, &make_map()).unwrap_err();
        assert_eq!(
            err,
            RankError::UnknownSystem {
                code: "s9".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_code_beats_malformedness() {
        // Resolution happens before side validation, so a bad code in a
        // malformed record still surfaces as the configuration error.
        let mut record = make_record(Side::First, Side::First);
        record.first_shown = "nope".to_string();
        assert!(extract(&record, &make_map()).is_err());
    }
}
