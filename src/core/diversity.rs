use std::collections::HashMap;

use crate::models::{BrandCampaign, Influencer, ScoredCandidate};

/// Cluster tag sets used by the diversity pass.
///
/// Resolved once per item instead of branching on a role flag at every field
/// access: influencer-side items cluster on (niches, audience geo),
/// campaign-side items on (categories, target geo).
pub trait ClusterKeys {
    fn primary_tags(&self) -> &[String];
    fn secondary_tags(&self) -> &[String];
}

impl ClusterKeys for Influencer {
    fn primary_tags(&self) -> &[String] {
        &self.niches
    }

    fn secondary_tags(&self) -> &[String] {
        &self.audience_geo
    }
}

impl ClusterKeys for BrandCampaign {
    fn primary_tags(&self) -> &[String] {
        &self.categories
    }

    fn secondary_tags(&self) -> &[String] {
        &self.target_geo
    }
}

/// Share of already-emitted candidates above which a tag counts as
/// over-represented
const OVER_REPRESENTATION_RATIO: f64 = 0.4;
const PRIMARY_TAG_PENALTY: f64 = 0.8;
const SECONDARY_TAG_PENALTY: f64 = 0.85;

/// Penalize candidates whose cluster tags are over-represented among
/// higher-ranked output.
///
/// Single deterministic left-to-right pass over a score-sorted list. Each
/// over-represented tag compounds the candidate's penalty factor
/// multiplicatively; tag counters are incremented only after the current
/// candidate is scored, so the ratio check sees candidates emitted so far.
/// The list is re-sorted descending afterwards. Not a global optimum, and a
/// candidate's score never increases.
pub fn apply_diversity_rerank(scored: Vec<ScoredCandidate>) -> Vec<ScoredCandidate> {
    let mut primary_counts: HashMap<String, usize> = HashMap::new();
    let mut secondary_counts: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<ScoredCandidate> = Vec::with_capacity(scored.len());

    for mut candidate in scored {
        let mut penalty_factor = 1.0;
        let emitted = result.len();

        for tag in candidate.item.primary_tags() {
            let count = primary_counts.get(tag).copied().unwrap_or(0);
            if count as f64 / (emitted + 1) as f64 > OVER_REPRESENTATION_RATIO {
                penalty_factor *= PRIMARY_TAG_PENALTY;
            }
        }

        for tag in candidate.item.secondary_tags() {
            let count = secondary_counts.get(tag).copied().unwrap_or(0);
            if count as f64 / (emitted + 1) as f64 > OVER_REPRESENTATION_RATIO {
                penalty_factor *= SECONDARY_TAG_PENALTY;
            }
        }

        candidate.score *= penalty_factor;

        for tag in candidate.item.primary_tags() {
            *primary_counts.entry(tag.clone()).or_insert(0) += 1;
        }
        for tag in candidate.item.secondary_tags() {
            *secondary_counts.entry(tag.clone()).or_insert(0) += 1;
        }

        result.push(candidate);
    }

    result.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    result
}
