use serde::{Deserialize, Serialize};
use crate::models::domain::{Interaction, ScoredCandidate};

/// Response for the ranked batch endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedBatchResponse {
    pub candidates: Vec<ScoredCandidate>,
    #[serde(rename = "nextCursor")]
    pub next_cursor: usize,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

/// Record interaction response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordInteractionResponse {
    pub success: bool,
    pub event_id: String,
}

/// Per-user interaction history response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractionsResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub interactions: Vec<Interaction>,
    pub count: usize,
}
