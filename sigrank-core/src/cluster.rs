/// Overlap clusters and pairwise distinguishability over confidence
/// intervals.

/// Closed-interval overlap: touching endpoints count as overlapping.
pub fn is_overlapping(x1: f64, x2: f64, y1: f64, y2: f64) -> bool {
    x1.max(y1) <= x2.min(y2)
}

/// Build the anchor clusters and the differing-pairs list.
///
/// Every system anchors one cluster holding itself plus each system whose
/// interval overlaps the anchor's. The member set is a star around the
/// anchor, not pairwise-overlapping, so a system can appear in several
/// clusters; clusters are deduplicated by sorted content, never merged
/// transitively. Differing pairs are the exact complement: every
/// unordered pair with disjoint intervals, reported once — the clusters
/// alone can understate distinguishability.
pub fn build_clusters(
    names: &[String],
    intervals: &[(f64, f64)],
) -> (Vec<Vec<String>>, Vec<(String, String)>) {
    assert_eq!(
        names.len(),
        intervals.len(),
        "one interval per system name"
    );

    let mut clusters: Vec<Vec<String>> = Vec::new();
    for (anchor, &(anchor_low, anchor_high)) in intervals.iter().enumerate() {
        let mut members = vec![names[anchor].clone()];
        for (other, &(other_low, other_high)) in intervals.iter().enumerate() {
            if other == anchor {
                continue;
            }
            if is_overlapping(anchor_low, anchor_high, other_low, other_high) {
                members.push(names[other].clone());
            }
        }

        members.sort();
        if !clusters.contains(&members) {
            clusters.push(members);
        }
    }

    let mut differing = Vec::new();
    for s in 0..intervals.len() {
        for t in (s + 1)..intervals.len() {
            let (s_low, s_high) = intervals[s];
            let (t_low, t_high) = intervals[t];
            if !is_overlapping(s_low, s_high, t_low, t_high) {
                differing.push((names[s].clone(), names[t].clone()));
            }
        }
    }

    (clusters, differing)
}
