use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::{Influencer, ScoredCandidate};

const EPSILON_INITIAL: f64 = 0.12;
const EPSILON_DECAY: f64 = 0.98;

/// Fraction of the scored list replaced by novel items when exploration fires
const NOVEL_FRACTION: f64 = 0.15;
const NOVEL_SCORE: f64 = 0.5;

/// Current exploration probability for a user.
///
/// Decays with accumulated interactions: `0.12 * 0.98^(n/10)`. Strictly
/// decreasing in `n` and always positive.
#[inline]
pub fn current_epsilon(interaction_count: usize) -> f64 {
    EPSILON_INITIAL * EPSILON_DECAY.powf(interaction_count as f64 / 10.0)
}

/// Epsilon-greedy novelty injection.
///
/// A single uniform draw against the user's current epsilon decides whether
/// this pass explores at all. When it does, `ceil(0.15 * len)` candidates are
/// taken from a shuffle of the pool members absent from the scored list,
/// given a fixed neutral score, and swapped in for the lowest-ranked tail of
/// equal count. Otherwise the list passes through unchanged.
///
/// The random source is injected so tests can force either outcome.
pub fn apply_exploration<R: Rng>(
    mut scored: Vec<ScoredCandidate>,
    all_candidates: &[Influencer],
    interaction_count: usize,
    rng: &mut R,
) -> Vec<ScoredCandidate> {
    let epsilon = current_epsilon(interaction_count);

    if rng.gen::<f64>() >= epsilon || all_candidates.len() <= scored.len() {
        return scored;
    }

    let scored_ids: HashSet<&str> = scored.iter().map(|c| c.item.id.as_str()).collect();
    let mut unseen: Vec<&Influencer> = all_candidates
        .iter()
        .filter(|c| !scored_ids.contains(c.id.as_str()))
        .collect();

    if unseen.is_empty() {
        return scored;
    }

    let novel_count = ((scored.len() as f64 * NOVEL_FRACTION).ceil() as usize).min(unseen.len());
    if novel_count == 0 {
        return scored;
    }

    unseen.shuffle(rng);
    let novel_items: Vec<ScoredCandidate> = unseen
        .into_iter()
        .take(novel_count)
        .map(|item| ScoredCandidate {
            item: item.clone(),
            score: NOVEL_SCORE,
            why: vec!["Novel suggestion for exploration".to_string()],
        })
        .collect();

    scored.truncate(scored.len() - novel_count);
    scored.extend(novel_items);
    scored
}
