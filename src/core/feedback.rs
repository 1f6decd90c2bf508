use crate::models::{Interaction, ScoringWeights};

/// Positive interactions considered for adaptation
const RECENT_WINDOW: usize = 10;
/// Minimum evidence before adaptation engages at all
const MIN_POSITIVE_INTERACTIONS: usize = 3;

/// Derive scoring weights from a user's interaction history.
///
/// Looks at the most recent ten positive interactions (like or superlike).
/// Below three of them the defaults are returned untouched. At or above the
/// threshold the defaults are still returned: this is the current contract, a
/// stub for future feature-driven reweighting, and no learning rule is
/// applied beyond the evidence gate.
pub fn adapt_weights(history: &[Interaction], defaults: ScoringWeights) -> ScoringWeights {
    let recent_positive = history
        .iter()
        .filter(|i| i.interaction_type.is_positive())
        .rev()
        .take(RECENT_WINDOW)
        .count();

    if recent_positive < MIN_POSITIVE_INTERACTIONS {
        return defaults;
    }

    defaults
}
