// Service exports
pub mod candidates;
pub mod interactions;
pub mod session;

pub use candidates::{demo_roster, CandidateRepository, InMemoryCandidateRepository};
pub use interactions::{
    demo_interactions, InMemoryInteractionStore, InteractionError, InteractionStore,
};
pub use session::{canonical_id, RankedBatch, SessionBatcher, SessionError};
