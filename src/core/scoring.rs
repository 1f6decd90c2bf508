use crate::core::normalize::{exact_overlap, fuzzy_overlap, normalize};
use crate::models::{BrandCampaign, GenderMix, Influencer, ScoringWeights};

/// Score a creator against a campaign.
///
/// Eleven sub-scores, each normalized to [0, 1]: nine positive factors are
/// added with their weights and the two penalties (fraud risk, brand-safety
/// gap) are subtracted with theirs. The result is clamped to [0, 1].
///
/// Alongside the score, factors that cross a notable threshold contribute a
/// human-readable sentence to the returned rationale list. The rationale is
/// explanation metadata for the caller and feeds no further computation.
pub fn score_influencer_for_campaign(
    influencer: &Influencer,
    campaign: &BrandCampaign,
    weights: &ScoringWeights,
) -> (f64, Vec<String>) {
    let mut why = Vec::new();

    let niche_score = fuzzy_overlap(&influencer.niches, &campaign.categories);
    if niche_score > 0.6 {
        why.push(format!("High niche overlap ({}%)", (niche_score * 100.0).round()));
    }

    let geo_score = exact_overlap(&influencer.audience_geo, &campaign.target_geo);
    if geo_score > 0.5 {
        why.push(format!("Strong geo match in {}", influencer.audience_geo.join(", ")));
    }

    let age_gender_score = age_gender_affinity(
        &influencer.audience_age,
        &influencer.audience_gender_mix,
        &campaign.target_age,
        &campaign.target_gender_mix,
    );

    let engagement_norm = normalize(influencer.engagement_rate, 0.0, 10.0);
    if influencer.engagement_rate > 4.5 {
        why.push(format!("Excellent engagement ({}%)", influencer.engagement_rate));
    }

    let content_quality_norm = normalize(influencer.content_quality, 1.0, 5.0);
    if influencer.content_quality >= 4.5 {
        why.push("High content quality".to_string());
    }

    let price_fit = price_fit(influencer.price_per_post, campaign.max_price);
    if price_fit > 0.7 {
        why.push("Great price fit".to_string());
    }

    let platform_fit = platform_fit(&influencer.platforms, &campaign.preferred_platforms);
    if platform_fit > 0.8 {
        why.push("Perfect platform match".to_string());
    }

    let past_brand_sim = past_brand_similarity(&influencer.past_brands, &campaign.categories);
    if past_brand_sim > 0.6 {
        why.push("Relevant brand experience".to_string());
    }

    let availability_fit = if influencer.availability { 1.0 } else { 0.0 };
    if !influencer.availability {
        why.push("Currently unavailable".to_string());
    }

    let brand_safety_gap = (campaign.brand_safety_min - influencer.brand_safety).max(0.0);

    let score = weights.niche_overlap * niche_score
        + weights.geo_affinity * geo_score
        + weights.age_gender_affinity * age_gender_score
        + weights.engagement_norm * engagement_norm
        + weights.content_quality * content_quality_norm
        + weights.price_fit * price_fit
        + weights.platform_fit * platform_fit
        + weights.past_brand_similarity * past_brand_sim
        + weights.availability_fit * availability_fit
        - weights.fraud_risk_penalty * influencer.fraud_risk
        - weights.brand_safety_penalty * brand_safety_gap;

    (score.clamp(0.0, 1.0), why)
}

/// Average of age-bracket overlap and gender-mix closeness.
///
/// Gender closeness is 1 minus the summed absolute differences across the
/// three proportions, scaled by the maximum possible difference of 200.
fn age_gender_affinity(
    influencer_age: &[String],
    influencer_gender: &GenderMix,
    target_age: &[String],
    target_gender: &GenderMix,
) -> f64 {
    let age_score = exact_overlap(influencer_age, target_age);

    let gender_diff = (influencer_gender.male - target_gender.male).abs()
        + (influencer_gender.female - target_gender.female).abs()
        + (influencer_gender.other - target_gender.other).abs();
    let gender_score = 1.0 - gender_diff / 200.0;

    (age_score + gender_score) / 2.0
}

/// `max(0, 1 - price / budget)`; a non-positive budget yields 0
#[inline]
fn price_fit(price_per_post: f64, max_price: f64) -> f64 {
    if max_price <= 0.0 {
        return 0.0;
    }
    (1.0 - price_per_post / max_price).max(0.0)
}

/// Fraction of the campaign's preferred platforms the creator is on;
/// neutral 0.5 when the campaign has no preference
fn platform_fit(influencer_platforms: &[String], preferred_platforms: &[String]) -> f64 {
    if preferred_platforms.is_empty() {
        return 0.5;
    }
    let overlap = preferred_platforms
        .iter()
        .filter(|p| influencer_platforms.contains(p))
        .count();
    overlap as f64 / preferred_platforms.len() as f64
}

/// Keyword similarity between prior collaborations and campaign categories,
/// saturating at three relevant brands
fn past_brand_similarity(past_brands: &[String], categories: &[String]) -> f64 {
    let relevant = past_brands
        .iter()
        .filter(|brand| {
            let brand = brand.to_lowercase();
            categories.iter().any(|cat| brand.contains(&cat.to_lowercase()))
        })
        .count();
    (relevant as f64 / 3.0).min(1.0)
}
