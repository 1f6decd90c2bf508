use std::sync::Mutex;

use chrono::Utc;
use thiserror::Error;

use crate::models::{Interaction, InteractionType};

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("Interaction store lock poisoned")]
    LockPoisoned,
}

/// Append-only interaction log.
///
/// Concurrent appends from overlapping feedback submissions must serialize;
/// no ordering guarantee holds across different users. Records are never
/// mutated after append.
pub trait InteractionStore: Send + Sync {
    fn append(&self, interaction: Interaction) -> Result<(), InteractionError>;
    fn for_user(&self, user_id: &str) -> Result<Vec<Interaction>, InteractionError>;
    /// Reinitialize the log to the seed dataset (demo affordance)
    fn reset_to_seed(&self) -> Result<(), InteractionError>;
}

/// In-memory interaction log guarded by a mutex
pub struct InMemoryInteractionStore {
    interactions: Mutex<Vec<Interaction>>,
    seed: Vec<Interaction>,
}

impl InMemoryInteractionStore {
    pub fn new(seed: Vec<Interaction>) -> Self {
        Self {
            interactions: Mutex::new(seed.clone()),
            seed,
        }
    }

    pub fn with_demo_seed() -> Self {
        Self::new(demo_interactions())
    }
}

impl InteractionStore for InMemoryInteractionStore {
    fn append(&self, interaction: Interaction) -> Result<(), InteractionError> {
        let mut log = self
            .interactions
            .lock()
            .map_err(|_| InteractionError::LockPoisoned)?;
        tracing::debug!(
            "Recording interaction: {} -> {} ({:?})",
            interaction.user_id,
            interaction.target_id,
            interaction.interaction_type
        );
        log.push(interaction);
        Ok(())
    }

    fn for_user(&self, user_id: &str) -> Result<Vec<Interaction>, InteractionError> {
        let log = self
            .interactions
            .lock()
            .map_err(|_| InteractionError::LockPoisoned)?;
        Ok(log.iter().filter(|i| i.user_id == user_id).cloned().collect())
    }

    fn reset_to_seed(&self) -> Result<(), InteractionError> {
        let mut log = self
            .interactions
            .lock()
            .map_err(|_| InteractionError::LockPoisoned)?;
        *log = self.seed.clone();
        tracing::info!("Interaction log reset to seed dataset ({} records)", log.len());
        Ok(())
    }
}

/// Seed interactions for the demo brand account
pub fn demo_interactions() -> Vec<Interaction> {
    let seed = |target: &str, interaction_type| Interaction {
        user_id: "brand_demo".to_string(),
        target_id: target.to_string(),
        interaction_type,
        ts: Utc::now(),
    };

    vec![
        seed("inf_001", InteractionType::Like),
        seed("inf_003", InteractionType::Pass),
        seed("inf_005", InteractionType::Superlike),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_interaction(user: &str, target: &str, interaction_type: InteractionType) -> Interaction {
        Interaction {
            user_id: user.to_string(),
            target_id: target.to_string(),
            interaction_type,
            ts: Utc::now(),
        }
    }

    #[test]
    fn test_append_and_query_by_user() {
        let store = InMemoryInteractionStore::new(vec![]);
        store
            .append(create_interaction("user_a", "inf_1", InteractionType::Like))
            .unwrap();
        store
            .append(create_interaction("user_b", "inf_2", InteractionType::Pass))
            .unwrap();

        let for_a = store.for_user("user_a").unwrap();
        assert_eq!(for_a.len(), 1);
        assert_eq!(for_a[0].target_id, "inf_1");
    }

    #[test]
    fn test_history_preserves_append_order() {
        let store = InMemoryInteractionStore::new(vec![]);
        for i in 0..5 {
            store
                .append(create_interaction("user_a", &format!("inf_{}", i), InteractionType::Like))
                .unwrap();
        }

        let history = store.for_user("user_a").unwrap();
        let targets: Vec<&str> = history.iter().map(|i| i.target_id.as_str()).collect();
        assert_eq!(targets, vec!["inf_0", "inf_1", "inf_2", "inf_3", "inf_4"]);
    }

    #[test]
    fn test_reset_restores_seed() {
        let store = InMemoryInteractionStore::with_demo_seed();
        let seed_len = store.for_user("brand_demo").unwrap().len();

        store
            .append(create_interaction("brand_demo", "inf_007", InteractionType::Like))
            .unwrap();
        assert_eq!(store.for_user("brand_demo").unwrap().len(), seed_len + 1);

        store.reset_to_seed().unwrap();
        assert_eq!(store.for_user("brand_demo").unwrap().len(), seed_len);
    }
}
