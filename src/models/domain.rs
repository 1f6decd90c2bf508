use serde::{Deserialize, Serialize};

/// Creator profile with audience and commercial data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Influencer {
    pub id: String,
    pub handle: String,
    #[serde(default)]
    pub niches: Vec<String>,
    #[serde(rename = "audienceGeo", default)]
    pub audience_geo: Vec<String>,
    #[serde(rename = "audienceAge", default)]
    pub audience_age: Vec<String>,
    #[serde(rename = "audienceGenderMix", default)]
    pub audience_gender_mix: GenderMix,
    pub followers: u64,
    #[serde(rename = "engagementRate")]
    pub engagement_rate: f64,
    #[serde(rename = "contentQuality")]
    pub content_quality: f64,
    #[serde(rename = "pricePerPost")]
    pub price_per_post: f64,
    #[serde(default)]
    pub platforms: Vec<String>,
    #[serde(rename = "pastBrands", default)]
    pub past_brands: Vec<String>,
    #[serde(default = "default_true")]
    pub availability: bool,
    #[serde(rename = "fraudRisk", default)]
    pub fraud_risk: f64,
    #[serde(rename = "brandSafety", default)]
    pub brand_safety: f64,
}

fn default_true() -> bool { true }

/// Audience gender split in percentage points (sums to 100)
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GenderMix {
    #[serde(default)]
    pub male: f64,
    #[serde(default)]
    pub female: f64,
    #[serde(default)]
    pub other: f64,
}

/// Active brand campaign with targeting and eligibility thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandCampaign {
    pub id: String,
    #[serde(rename = "brandName", default)]
    pub brand_name: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(rename = "targetGeo", default)]
    pub target_geo: Vec<String>,
    #[serde(rename = "targetAge", default)]
    pub target_age: Vec<String>,
    #[serde(rename = "targetGenderMix", default)]
    pub target_gender_mix: GenderMix,
    #[serde(rename = "minFollowers", default)]
    pub min_followers: u64,
    #[serde(rename = "minEngagement", default)]
    pub min_engagement: f64,
    #[serde(rename = "brandSafetyMin", default)]
    pub brand_safety_min: f64,
    #[serde(rename = "maxPrice")]
    pub max_price: f64,
    #[serde(rename = "preferredPlatforms", default)]
    pub preferred_platforms: Vec<String>,
    #[serde(default)]
    pub exclusions: Vec<String>,
}

/// Which side of the marketplace is requesting a feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Brand,
    Creator,
}

/// Recorded swipe event. Append-only; the full ordered per-user history
/// is the context used for feedback adaptation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interaction {
    #[serde(rename = "userId")]
    pub user_id: String,
    #[serde(rename = "targetId")]
    pub target_id: String,
    #[serde(rename = "type")]
    pub interaction_type: InteractionType,
    pub ts: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionType {
    Like,
    Superlike,
    Pass,
}

impl InteractionType {
    pub fn is_positive(self) -> bool {
        matches!(self, InteractionType::Like | InteractionType::Superlike)
    }
}

/// Scored ranking entry, rebuilt fresh on every pass
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub item: Influencer,
    pub score: f64,
    pub why: Vec<String>,
}

/// Optional constraints narrowing the candidate pool before scoring.
/// A missing field means unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchFilters {
    #[serde(default)]
    pub platforms: Option<Vec<String>>,
    #[serde(default)]
    pub niches: Option<Vec<String>>,
    #[serde(default)]
    pub geo: Option<Vec<String>>,
    #[serde(rename = "minEngagement", default)]
    pub min_engagement: Option<f64>,
    #[serde(rename = "maxPrice", default)]
    pub max_price: Option<f64>,
    #[serde(rename = "minFollowers", default)]
    pub min_followers: Option<u64>,
}

/// Scoring weights. The key set is fixed and exhaustive: every factor the
/// scoring pass references has exactly one coefficient here, so a missing
/// weight cannot occur by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub niche_overlap: f64,
    pub geo_affinity: f64,
    pub age_gender_affinity: f64,
    pub engagement_norm: f64,
    pub content_quality: f64,
    pub price_fit: f64,
    pub platform_fit: f64,
    pub past_brand_similarity: f64,
    pub availability_fit: f64,
    pub fraud_risk_penalty: f64,
    pub brand_safety_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            niche_overlap: 0.22,
            geo_affinity: 0.18,
            age_gender_affinity: 0.12,
            engagement_norm: 0.14,
            content_quality: 0.10,
            price_fit: 0.10,
            platform_fit: 0.06,
            past_brand_similarity: 0.04,
            availability_fit: 0.02,
            fraud_risk_penalty: 0.06,
            brand_safety_penalty: 0.06,
        }
    }
}
