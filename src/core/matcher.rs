use rand::Rng;

use crate::core::{
    diversity::apply_diversity_rerank,
    exploration::apply_exploration,
    feedback::adapt_weights,
    filters::{check_eligibility, matches_filters},
    scoring::score_influencer_for_campaign,
};
use crate::models::{
    BrandCampaign, Influencer, Interaction, MatchFilters, Role, ScoredCandidate, ScoringWeights,
};

/// Main ranking orchestrator
///
/// # Pipeline stages
/// 1. Optional caller filters narrow the pool
/// 2. Hard eligibility gate per candidate
/// 3. Weighted multi-factor scoring (weights adapted from feedback history)
/// 4. Sort descending, diversity re-rank
/// 5. Epsilon-greedy exploration injection
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Rank a candidate pool for a user.
    ///
    /// A non-brand role or a missing campaign degrades to a trivial uniform
    /// score with a generic rationale: the reverse-direction scoring
    /// function (creator rates brand) is not implemented, and no filtering
    /// or weighting applies on that branch.
    pub fn rank<R: Rng>(
        &self,
        role: Role,
        campaign: Option<&BrandCampaign>,
        candidates: Vec<Influencer>,
        history: &[Interaction],
        filters: Option<&MatchFilters>,
        rng: &mut R,
    ) -> Vec<ScoredCandidate> {
        let campaign = match (role, campaign) {
            (Role::Brand, Some(campaign)) => campaign,
            _ => {
                return candidates
                    .into_iter()
                    .map(|item| ScoredCandidate {
                        item,
                        score: 0.5,
                        why: vec!["Candidate match".to_string()],
                    })
                    .collect();
            }
        };

        let pool: Vec<Influencer> = match filters {
            Some(filters) => candidates
                .iter()
                .filter(|c| matches_filters(c, filters))
                .cloned()
                .collect(),
            None => candidates.clone(),
        };

        let weights = adapt_weights(history, self.weights);

        let mut scored: Vec<ScoredCandidate> = Vec::with_capacity(pool.len());
        for influencer in pool {
            if let Err(reason) = check_eligibility(&influencer, campaign) {
                tracing::debug!(
                    "Excluding {} from campaign {}: {}",
                    influencer.handle,
                    campaign.id,
                    reason.as_str()
                );
                continue;
            }

            let (score, why) = score_influencer_for_campaign(&influencer, campaign, &weights);
            scored.push(ScoredCandidate { item: influencer, score, why });
        }

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

        let reranked = apply_diversity_rerank(scored);

        apply_exploration(reranked, &candidates, history.len(), rng)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenderMix;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_influencer(id: &str, niche: &str, engagement: f64) -> Influencer {
        Influencer {
            id: id.to_string(),
            handle: format!("@{}", id),
            niches: vec![niche.to_string()],
            audience_geo: vec!["Mumbai".to_string()],
            audience_age: vec!["18-24".to_string()],
            audience_gender_mix: GenderMix { male: 40.0, female: 55.0, other: 5.0 },
            followers: 50_000,
            engagement_rate: engagement,
            content_quality: 4.0,
            price_per_post: 20_000.0,
            platforms: vec!["Instagram".to_string()],
            past_brands: vec![],
            availability: true,
            fraud_risk: 0.1,
            brand_safety: 0.8,
        }
    }

    fn create_campaign() -> BrandCampaign {
        BrandCampaign {
            id: "camp_1".to_string(),
            brand_name: "Acme".to_string(),
            categories: vec!["Fashion".to_string()],
            target_geo: vec!["Mumbai".to_string()],
            target_age: vec!["18-24".to_string()],
            target_gender_mix: GenderMix { male: 40.0, female: 55.0, other: 5.0 },
            min_followers: 10_000,
            min_engagement: 3.0,
            brand_safety_min: 0.5,
            max_price: 50_000.0,
            preferred_platforms: vec![],
            exclusions: vec![],
        }
    }

    /// Seed whose first draw misses epsilon, keeping the pass deterministic
    fn non_exploring_rng() -> StdRng {
        for seed in 0..1000 {
            let mut rng = StdRng::seed_from_u64(seed);
            if rng.gen::<f64>() >= 0.12 {
                return StdRng::seed_from_u64(seed);
            }
        }
        unreachable!("no non-exploring seed found");
    }

    #[test]
    fn test_ineligible_candidates_never_scored() {
        let matcher = Matcher::with_default_weights();
        let campaign = create_campaign();
        let mut weak = create_influencer("weak", "Fashion", 1.0); // Below engagement floor
        weak.followers = 1_000;

        let candidates = vec![create_influencer("strong", "Fashion", 5.0), weak];
        let mut rng = non_exploring_rng();
        let ranked = matcher.rank(Role::Brand, Some(&campaign), candidates, &[], None, &mut rng);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.id, "strong");
    }

    #[test]
    fn test_ranked_descending() {
        let matcher = Matcher::with_default_weights();
        let campaign = create_campaign();
        let candidates = vec![
            create_influencer("a", "Fashion", 3.5),
            create_influencer("b", "Fashion", 6.0),
            create_influencer("c", "Gaming", 4.0),
        ];

        let mut rng = non_exploring_rng();
        let ranked = matcher.rank(Role::Brand, Some(&campaign), candidates, &[], None, &mut rng);

        for pair in ranked.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_deterministic_without_exploration() {
        let matcher = Matcher::with_default_weights();
        let campaign = create_campaign();
        let candidates: Vec<Influencer> = (0..12)
            .map(|i| create_influencer(&format!("c{}", i), "Fashion", 3.0 + (i % 5) as f64))
            .collect();

        let mut rng_a = non_exploring_rng();
        let mut rng_b = non_exploring_rng();
        let first =
            matcher.rank(Role::Brand, Some(&campaign), candidates.clone(), &[], None, &mut rng_a);
        let second =
            matcher.rank(Role::Brand, Some(&campaign), candidates, &[], None, &mut rng_b);

        let first_ids: Vec<&str> = first.iter().map(|c| c.item.id.as_str()).collect();
        let second_ids: Vec<&str> = second.iter().map(|c| c.item.id.as_str()).collect();
        assert_eq!(first_ids, second_ids);
    }

    #[test]
    fn test_missing_campaign_degrades_to_uniform_score() {
        let matcher = Matcher::with_default_weights();
        let candidates = vec![
            create_influencer("a", "Fashion", 5.0),
            create_influencer("b", "Gaming", 0.1), // Would fail hard filters
        ];

        let mut rng = non_exploring_rng();
        let ranked = matcher.rank(Role::Brand, None, candidates, &[], None, &mut rng);

        assert_eq!(ranked.len(), 2);
        for candidate in &ranked {
            assert_eq!(candidate.score, 0.5);
            assert_eq!(candidate.why, vec!["Candidate match".to_string()]);
        }
    }

    #[test]
    fn test_creator_role_degrades_to_uniform_score() {
        let matcher = Matcher::with_default_weights();
        let campaign = create_campaign();
        let candidates = vec![create_influencer("a", "Fashion", 5.0)];

        let mut rng = non_exploring_rng();
        let ranked =
            matcher.rank(Role::Creator, Some(&campaign), candidates, &[], None, &mut rng);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, 0.5);
    }

    #[test]
    fn test_filters_narrow_pool_before_scoring() {
        let matcher = Matcher::with_default_weights();
        let campaign = create_campaign();
        let candidates = vec![
            create_influencer("a", "Fashion", 5.0),
            create_influencer("b", "Gaming", 5.0),
        ];
        let filters = MatchFilters {
            niches: Some(vec!["Fashion".to_string()]),
            ..Default::default()
        };

        let mut rng = non_exploring_rng();
        let ranked = matcher.rank(
            Role::Brand,
            Some(&campaign),
            candidates,
            &[],
            Some(&filters),
            &mut rng,
        );

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].item.id, "a");
    }
}
