use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

use crate::core::Matcher;
use crate::models::{
    Interaction, InteractionType, MatchFilters, RankedBatchRequest, ScoredCandidate,
};
use crate::services::candidates::CandidateRepository;
use crate::services::interactions::{InteractionError, InteractionStore};

/// Separator between a canonical candidate id and its exposure suffix
const EXPOSURE_SEPARATOR: &str = "::x";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Interaction store error: {0}")]
    Store(#[from] InteractionError),

    #[error("Session state lock poisoned")]
    LockPoisoned,
}

/// Result of a batch request
#[derive(Debug, Clone)]
pub struct RankedBatch {
    pub candidates: Vec<ScoredCandidate>,
    pub next_cursor: usize,
    pub total_candidates: usize,
}

/// Session-scoped exposure state.
///
/// Cursor, materialized ranked list and dedup set form one unit: they are
/// only ever reset together, never piecemeal.
#[derive(Debug, Default)]
struct SessionState {
    cursor: usize,
    ranked: Vec<ScoredCandidate>,
    exposed: HashSet<String>,
    filters: Option<MatchFilters>,
    exposure_counter: u64,
}

impl SessionState {
    /// Atomic reset of the whole exposure unit; the interaction log is not
    /// part of this state and stays untouched
    fn clear(&mut self) {
        *self = SessionState::default();
    }

    /// A request with different filters starts a new session generation:
    /// cursor, materialized list and dedup set all reset together.
    fn sync_filters(&mut self, filters: &Option<MatchFilters>) {
        if self.filters != *filters {
            self.clear();
            self.filters = filters.clone();
        }
    }
}

struct SessionInner {
    state: SessionState,
    rng: StdRng,
}

/// Paginates ranked output, deduplicates within a session, and persists
/// interaction events.
///
/// Candidate retrieval is the only asynchronous boundary: it is modeled as a
/// request/response call with simulated latency and performs no concurrent
/// mutation while suspended. The ranking pass itself is synchronous and
/// single-threaded.
pub struct SessionBatcher {
    repository: Arc<dyn CandidateRepository>,
    store: Arc<dyn InteractionStore>,
    matcher: Matcher,
    fetch_latency: Duration,
    inner: Mutex<SessionInner>,
}

impl SessionBatcher {
    pub fn new(
        repository: Arc<dyn CandidateRepository>,
        store: Arc<dyn InteractionStore>,
        matcher: Matcher,
        fetch_latency: Duration,
    ) -> Self {
        Self::with_rng(repository, store, matcher, fetch_latency, StdRng::from_entropy())
    }

    /// Construct with an explicit random source so tests can force the
    /// exploration outcome
    pub fn with_rng(
        repository: Arc<dyn CandidateRepository>,
        store: Arc<dyn InteractionStore>,
        matcher: Matcher,
        fetch_latency: Duration,
        rng: StdRng,
    ) -> Self {
        Self {
            repository,
            store,
            matcher,
            fetch_latency,
            inner: Mutex::new(SessionInner {
                state: SessionState::default(),
                rng,
            }),
        }
    }

    /// Rank the eligible pool for the requester and slice one page.
    ///
    /// Candidates already exposed in this session are excluded from the
    /// pool before ranking; the returned page is then marked exposed. A page
    /// shorter than the requested limit signals pool exhaustion.
    pub async fn get_ranked_batch(
        &self,
        request: &RankedBatchRequest,
    ) -> Result<RankedBatch, SessionError> {
        self.simulate_fetch_latency().await;

        let pool = self.repository.fetch_all();
        let total_candidates = pool.len();
        let history = self.store.for_user(&request.user_id)?;
        let limit = request.limit as usize;

        let mut inner = self.inner.lock().map_err(|_| SessionError::LockPoisoned)?;
        inner.state.sync_filters(&request.filters);

        let unseen: Vec<_> = pool
            .iter()
            .filter(|c| !inner.state.exposed.contains(&c.id))
            .cloned()
            .collect();

        let ranked = self.matcher.rank(
            request.role,
            request.campaign.as_ref(),
            unseen,
            &history,
            request.filters.as_ref(),
            &mut inner.rng,
        );

        let start = request.cursor.min(ranked.len());
        let end = (request.cursor + limit).min(ranked.len());
        let page: Vec<ScoredCandidate> = ranked[start..end].to_vec();

        for candidate in &page {
            inner.state.exposed.insert(candidate.item.id.clone());
        }
        let next_cursor = request.cursor + limit;
        inner.state.cursor = next_cursor;

        tracing::debug!(
            "Batch for {}: {} of {} ranked candidates (cursor {})",
            request.user_id,
            page.len(),
            ranked.len(),
            request.cursor
        );

        Ok(RankedBatch {
            candidates: page,
            next_cursor,
            total_candidates,
        })
    }

    /// Exposure-cycling variant supporting indefinite scrolling over a
    /// finite pool.
    ///
    /// The ranked list is materialized once per session generation; page
    /// indices wrap modulo its length and every emitted candidate gets a
    /// distinguishing exposure suffix on its id, so one profile can appear
    /// on multiple pages without colliding on identity keys downstream.
    pub async fn get_cycling_batch(
        &self,
        request: &RankedBatchRequest,
    ) -> Result<RankedBatch, SessionError> {
        self.simulate_fetch_latency().await;

        let pool = self.repository.fetch_all();
        let total_candidates = pool.len();
        let history = self.store.for_user(&request.user_id)?;
        let limit = request.limit as usize;

        let mut inner = self.inner.lock().map_err(|_| SessionError::LockPoisoned)?;
        inner.state.sync_filters(&request.filters);

        if inner.state.ranked.is_empty() {
            let ranked = self.matcher.rank(
                request.role,
                request.campaign.as_ref(),
                pool,
                &history,
                request.filters.as_ref(),
                &mut inner.rng,
            );
            inner.state.ranked = ranked;
        }

        let len = inner.state.ranked.len();
        if len == 0 {
            return Ok(RankedBatch {
                candidates: Vec::new(),
                next_cursor: 0,
                total_candidates,
            });
        }

        let start = request.cursor % len;
        let mut page = Vec::with_capacity(limit);
        for offset in 0..limit {
            let mut candidate = inner.state.ranked[(start + offset) % len].clone();
            let exposure = inner.state.exposure_counter;
            inner.state.exposure_counter += 1;
            candidate.item.id =
                format!("{}{}{}", candidate.item.id, EXPOSURE_SEPARATOR, exposure);
            page.push(candidate);
        }

        let next_cursor = (start + limit) % len;
        inner.state.cursor = next_cursor;

        Ok(RankedBatch {
            candidates: page,
            next_cursor,
            total_candidates,
        })
    }

    /// Append a swipe to the interaction log.
    ///
    /// Exposure-suffixed ids are resolved back to the canonical candidate id
    /// before the append; nothing is written if the caller abandoned the
    /// request before validation.
    pub fn record_interaction(
        &self,
        user_id: &str,
        target_id: &str,
        interaction_type: InteractionType,
    ) -> Result<(), SessionError> {
        let interaction = Interaction {
            user_id: user_id.to_string(),
            target_id: canonical_id(target_id).to_string(),
            interaction_type,
            ts: Utc::now(),
        };
        self.store.append(interaction)?;
        Ok(())
    }

    /// Ordered interaction history for one user
    pub fn get_interactions(&self, user_id: &str) -> Result<Vec<Interaction>, SessionError> {
        Ok(self.store.for_user(user_id)?)
    }

    /// Clear exposure/dedup state as one unit; the interaction log is
    /// untouched
    pub fn reset_session(&self) -> Result<(), SessionError> {
        let mut inner = self.inner.lock().map_err(|_| SessionError::LockPoisoned)?;
        inner.state.clear();
        tracing::info!("Session exposure state reset");
        Ok(())
    }

    /// Reinitialize the interaction log to the seed dataset and drop the
    /// session state (demo affordance)
    pub fn reset_demo(&self) -> Result<(), SessionError> {
        self.store.reset_to_seed()?;
        self.reset_session()
    }

    async fn simulate_fetch_latency(&self) {
        if !self.fetch_latency.is_zero() {
            tokio::time::sleep(self.fetch_latency).await;
        }
    }
}

/// Strip any exposure suffix, returning the canonical candidate id
pub fn canonical_id(target_id: &str) -> &str {
    match target_id.split_once(EXPOSURE_SEPARATOR) {
        Some((canonical, _)) => canonical,
        None => target_id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BrandCampaign, GenderMix, Influencer, Role};
    use crate::services::candidates::InMemoryCandidateRepository;
    use crate::services::interactions::InMemoryInteractionStore;

    fn create_influencer(id: usize) -> Influencer {
        Influencer {
            id: format!("inf_{:03}", id),
            handle: format!("@creator{}", id),
            niches: vec![format!("Niche{}", id % 5)],
            audience_geo: vec![format!("City{}", id % 3)],
            audience_age: vec!["18-24".to_string()],
            audience_gender_mix: GenderMix { male: 50.0, female: 50.0, other: 0.0 },
            followers: 20_000 + id as u64 * 1_000,
            engagement_rate: 3.0 + (id % 6) as f64,
            content_quality: 3.0 + (id % 3) as f64 * 0.5,
            price_per_post: 10_000.0 + id as f64 * 500.0,
            platforms: vec!["Instagram".to_string()],
            past_brands: vec![],
            availability: true,
            fraud_risk: 0.05,
            brand_safety: 0.9,
        }
    }

    fn create_campaign() -> BrandCampaign {
        BrandCampaign {
            id: "camp_1".to_string(),
            brand_name: "Acme".to_string(),
            categories: vec!["Niche1".to_string()],
            target_geo: vec!["City1".to_string()],
            target_age: vec!["18-24".to_string()],
            target_gender_mix: GenderMix { male: 50.0, female: 50.0, other: 0.0 },
            min_followers: 1_000,
            min_engagement: 1.0,
            brand_safety_min: 0.5,
            max_price: 100_000.0,
            preferred_platforms: vec![],
            exclusions: vec![],
        }
    }

    fn create_batcher(pool_size: usize) -> SessionBatcher {
        let candidates: Vec<Influencer> = (0..pool_size).map(create_influencer).collect();
        SessionBatcher::with_rng(
            Arc::new(InMemoryCandidateRepository::new(candidates)),
            Arc::new(InMemoryInteractionStore::new(vec![])),
            Matcher::with_default_weights(),
            Duration::ZERO,
            StdRng::seed_from_u64(7),
        )
    }

    fn create_request(cursor: usize, limit: u16) -> RankedBatchRequest {
        RankedBatchRequest {
            user_id: "brand_demo".to_string(),
            role: Role::Brand,
            campaign: Some(create_campaign()),
            cursor,
            filters: None,
            limit,
            cycle: false,
        }
    }

    #[tokio::test]
    async fn test_pages_do_not_overlap() {
        let batcher = create_batcher(25);

        let first = batcher.get_ranked_batch(&create_request(0, 10)).await.unwrap();
        assert_eq!(first.candidates.len(), 10);
        assert_eq!(first.next_cursor, 10);

        let second = batcher
            .get_ranked_batch(&create_request(first.next_cursor, 10))
            .await
            .unwrap();
        assert_eq!(second.next_cursor, 20);

        let first_ids: HashSet<String> =
            first.candidates.iter().map(|c| c.item.id.clone()).collect();
        for candidate in &second.candidates {
            assert!(
                !first_ids.contains(&candidate.item.id),
                "page 2 repeated {}",
                candidate.item.id
            );
        }
    }

    #[tokio::test]
    async fn test_short_page_signals_exhaustion() {
        let batcher = create_batcher(7);
        let batch = batcher.get_ranked_batch(&create_request(0, 10)).await.unwrap();
        assert!(batch.candidates.len() < 10);
        assert_eq!(batch.total_candidates, 7);
    }

    #[tokio::test]
    async fn test_cycling_batch_wraps_and_resolves() {
        let batcher = create_batcher(7);
        let mut request = create_request(0, 10);
        request.cycle = true;

        let batch = batcher.get_cycling_batch(&request).await.unwrap();
        assert_eq!(batch.candidates.len(), 10);
        assert_eq!(batch.next_cursor, 10 % 7);

        let ids: HashSet<String> =
            batch.candidates.iter().map(|c| c.item.id.clone()).collect();
        assert_eq!(ids.len(), 10, "synthesized ids must be unique within the page");

        let canonical_pool: HashSet<String> =
            (0..7).map(|i| format!("inf_{:03}", i)).collect();
        for candidate in &batch.candidates {
            let canonical = canonical_id(&candidate.item.id);
            assert!(
                canonical_pool.contains(canonical),
                "{} must resolve to a canonical pool id",
                candidate.item.id
            );
        }
    }

    #[tokio::test]
    async fn test_record_interaction_resolves_exposure_suffix() {
        let batcher = create_batcher(5);

        batcher
            .record_interaction("brand_demo", "inf_002::x41", InteractionType::Pass)
            .unwrap();

        let history = batcher.get_interactions("brand_demo").unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].target_id, "inf_002");
        assert_eq!(history[0].interaction_type, InteractionType::Pass);
    }

    #[tokio::test]
    async fn test_recorded_pass_has_current_timestamp() {
        let batcher = create_batcher(5);
        let before = Utc::now();

        batcher
            .record_interaction("brand_demo", "inf_001", InteractionType::Pass)
            .unwrap();

        let history = batcher.get_interactions("brand_demo").unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].ts >= before);
    }

    #[tokio::test]
    async fn test_reset_session_keeps_interaction_log() {
        let batcher = create_batcher(25);

        batcher.get_ranked_batch(&create_request(0, 10)).await.unwrap();
        batcher
            .record_interaction("brand_demo", "inf_001", InteractionType::Like)
            .unwrap();

        batcher.reset_session().unwrap();

        // Exposure state is gone: page 1 repeats the top candidates
        let repeat = batcher.get_ranked_batch(&create_request(0, 10)).await.unwrap();
        assert_eq!(repeat.candidates.len(), 10);

        // The interaction log survives a session reset
        assert_eq!(batcher.get_interactions("brand_demo").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_filter_change_resets_exposure_state() {
        let batcher = create_batcher(25);

        let first = batcher.get_ranked_batch(&create_request(0, 10)).await.unwrap();
        assert_eq!(first.candidates.len(), 10);

        let mut filtered = create_request(0, 10);
        filtered.filters = Some(MatchFilters {
            min_followers: Some(1), // Effectively unconstrained, but a new generation
            ..Default::default()
        });
        let second = batcher.get_ranked_batch(&filtered).await.unwrap();

        // With the exposure set cleared, the full pool is rankable again
        assert_eq!(second.candidates.len(), 10);
    }

    #[tokio::test]
    async fn test_reset_demo_restores_seed_log() {
        let candidates: Vec<Influencer> = (0..5).map(create_influencer).collect();
        let batcher = SessionBatcher::with_rng(
            Arc::new(InMemoryCandidateRepository::new(candidates)),
            Arc::new(InMemoryInteractionStore::with_demo_seed()),
            Matcher::with_default_weights(),
            Duration::ZERO,
            StdRng::seed_from_u64(7),
        );

        let seed_len = batcher.get_interactions("brand_demo").unwrap().len();
        batcher
            .record_interaction("brand_demo", "inf_004", InteractionType::Like)
            .unwrap();

        batcher.reset_demo().unwrap();
        assert_eq!(batcher.get_interactions("brand_demo").unwrap().len(), seed_len);
    }

    #[test]
    fn test_canonical_id_passthrough_without_suffix() {
        assert_eq!(canonical_id("inf_001"), "inf_001");
        assert_eq!(canonical_id("inf_001::x9"), "inf_001");
    }
}
