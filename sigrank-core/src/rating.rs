/// The pairwise skill-rating model.
///
/// The closed-form TrueSkill update itself comes from the `skillratings`
/// crate; this module only pins the contract the bootstrap driver relies
/// on: fresh ratings carry no prior evidence, `update` returns new values
/// instead of mutating (callers rebind both sides), and only the location
/// parameter feeds the score distributions. The uncertainty parameter is
/// not consumed downstream.
use skillratings::trueskill::{trueskill, TrueSkillConfig, TrueSkillRating};
use skillratings::Outcomes;

/// A rating representing no prior evidence (location 25, scale 25/3).
pub fn fresh() -> TrueSkillRating {
    TrueSkillRating::new()
}

/// Apply one observed pairwise outcome: winner beat loser.
///
/// Returns the new (winner, loser) ratings. Deterministic given its
/// inputs; uses the library-default TrueSkill parameters, matching the
/// classic two-player update.
pub fn update(
    winner: TrueSkillRating,
    loser: TrueSkillRating,
) -> (TrueSkillRating, TrueSkillRating) {
    trueskill(&winner, &loser, &Outcomes::WIN, &TrueSkillConfig::new())
}

/// The scalar skill estimate used for ranking.
pub fn skill(rating: &TrueSkillRating) -> f64 {
    rating.rating
}
