// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BrandCampaign, GenderMix, Influencer, Interaction, InteractionType, MatchFilters, Role,
    ScoredCandidate, ScoringWeights,
};
pub use requests::{RankedBatchRequest, RecordInteractionRequest};
pub use responses::{
    ErrorResponse, HealthResponse, InteractionsResponse, RankedBatchResponse,
    RecordInteractionResponse,
};
