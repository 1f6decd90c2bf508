// Core algorithm exports
pub mod diversity;
pub mod exploration;
pub mod feedback;
pub mod filters;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use diversity::{apply_diversity_rerank, ClusterKeys};
pub use exploration::{apply_exploration, current_epsilon};
pub use feedback::adapt_weights;
pub use filters::{check_eligibility, matches_filters, RejectReason};
pub use matcher::Matcher;
pub use normalize::{exact_overlap, fuzzy_overlap, normalize};
pub use scoring::score_influencer_for_campaign;
