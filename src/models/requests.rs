use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{BrandCampaign, MatchFilters, Role};

/// Request for a ranked batch of candidates
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankedBatchRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    pub role: Role,
    #[serde(default)]
    pub campaign: Option<BrandCampaign>,
    #[serde(default)]
    pub cursor: usize,
    #[serde(default)]
    pub filters: Option<MatchFilters>,
    #[serde(default = "default_limit")]
    pub limit: u16,
    /// Selects the exposure-cycling variant that wraps a finite pool
    /// across an unbounded feed
    #[serde(default)]
    pub cycle: bool,
}

fn default_limit() -> u16 {
    10
}

/// Request to record a swipe interaction
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordInteractionRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "user_id", rename = "userId")]
    pub user_id: String,
    #[validate(length(min = 1))]
    #[serde(alias = "target_id", rename = "targetId")]
    pub target_id: String,
    #[serde(alias = "interactionType", rename = "type")]
    pub interaction_type: String,
}
