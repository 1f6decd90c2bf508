//! MatchForge - Matching engine for the MatchForge creator marketplace
//!
//! This library provides the ranking core used to match creator profiles
//! with brand campaigns: hard eligibility filtering, weighted multi-factor
//! scoring with human-readable rationales, diversity re-ranking,
//! epsilon-greedy exploration and session-scoped pagination.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{current_epsilon, Matcher};
pub use models::{
    BrandCampaign, Influencer, Interaction, InteractionType, MatchFilters, Role, ScoredCandidate,
    ScoringWeights,
};
pub use services::{SessionBatcher, canonical_id};
