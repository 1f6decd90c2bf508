use crate::models::{GenderMix, Influencer};

/// Source of the eligible candidate pool.
///
/// The engine never owns candidate data; it pulls a full snapshot per
/// ranking pass. Implementations may be backed by memory, a file, or a
/// database interchangeably.
pub trait CandidateRepository: Send + Sync {
    fn fetch_all(&self) -> Vec<Influencer>;
}

/// In-memory candidate repository seeded with a demo roster
pub struct InMemoryCandidateRepository {
    candidates: Vec<Influencer>,
}

impl InMemoryCandidateRepository {
    pub fn new(candidates: Vec<Influencer>) -> Self {
        Self { candidates }
    }

    pub fn with_demo_roster() -> Self {
        Self::new(demo_roster())
    }
}

impl CandidateRepository for InMemoryCandidateRepository {
    fn fetch_all(&self) -> Vec<Influencer> {
        self.candidates.clone()
    }
}

/// Demo candidate roster used when no external profile store is wired up
pub fn demo_roster() -> Vec<Influencer> {
    vec![
        demo_influencer(
            "inf_001", "@priya.styles",
            &["Fashion", "Beauty"], &["Mumbai", "Delhi"], &["18-24", "25-34"],
            GenderMix { male: 20.0, female: 75.0, other: 5.0 },
            320_000, 5.4, 4.5, 28_000.0,
            &["Instagram", "YouTube"], &["Myntra Fashion", "Nykaa"],
            true, 0.05, 0.92,
        ),
        demo_influencer(
            "inf_002", "@arjun.fitlife",
            &["Fitness", "Nutrition"], &["Bangalore", "Mumbai"], &["25-34"],
            GenderMix { male: 60.0, female: 38.0, other: 2.0 },
            150_000, 6.8, 4.2, 18_000.0,
            &["Instagram"], &["HealthKart"],
            true, 0.08, 0.85,
        ),
        demo_influencer(
            "inf_003", "@meera.eats",
            &["Food", "Travel"], &["Delhi", "Jaipur"], &["18-24", "25-34", "35-44"],
            GenderMix { male: 45.0, female: 52.0, other: 3.0 },
            89_000, 4.1, 3.8, 9_500.0,
            &["Instagram", "YouTube"], &[],
            true, 0.12, 0.78,
        ),
        demo_influencer(
            "inf_004", "@dev.techtalks",
            &["Technology", "Gadgets"], &["Bangalore", "Hyderabad"], &["18-24", "25-34"],
            GenderMix { male: 72.0, female: 26.0, other: 2.0 },
            510_000, 3.2, 4.7, 65_000.0,
            &["YouTube", "Twitter"], &["TechCorp Gadgets"],
            false, 0.03, 0.95,
        ),
        demo_influencer(
            "inf_005", "@sana.couture",
            &["Fashion", "Lifestyle"], &["Mumbai"], &["18-24"],
            GenderMix { male: 15.0, female: 80.0, other: 5.0 },
            47_000, 7.9, 4.0, 6_000.0,
            &["Instagram", "TikTok"], &["Ajio Fashion"],
            true, 0.15, 0.70,
        ),
        demo_influencer(
            "inf_006", "@rohit.gaming",
            &["Gaming", "Technology"], &["Delhi", "Pune"], &["13-17", "18-24"],
            GenderMix { male: 85.0, female: 13.0, other: 2.0 },
            780_000, 4.8, 3.5, 45_000.0,
            &["YouTube", "Twitch"], &[],
            true, 0.20, 0.65,
        ),
        demo_influencer(
            "inf_007", "@ananya.wellness",
            &["Wellness", "Yoga"], &["Mumbai", "Goa"], &["25-34", "35-44"],
            GenderMix { male: 30.0, female: 65.0, other: 5.0 },
            62_000, 5.9, 4.6, 11_000.0,
            &["Instagram"], &["Wellness Retreats Co"],
            true, 0.06, 0.90,
        ),
        demo_influencer(
            "inf_008", "@kabir.streetstyle",
            &["Fashion", "Photography"], &["Delhi"], &["18-24", "25-34"],
            GenderMix { male: 55.0, female: 42.0, other: 3.0 },
            210_000, 3.9, 4.3, 32_000.0,
            &["Instagram", "YouTube"], &["Urban Fashion Hub", "StreetWear Fashion Co"],
            true, 0.10, 0.82,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn demo_influencer(
    id: &str,
    handle: &str,
    niches: &[&str],
    geo: &[&str],
    age: &[&str],
    gender_mix: GenderMix,
    followers: u64,
    engagement_rate: f64,
    content_quality: f64,
    price_per_post: f64,
    platforms: &[&str],
    past_brands: &[&str],
    availability: bool,
    fraud_risk: f64,
    brand_safety: f64,
) -> Influencer {
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
    Influencer {
        id: id.to_string(),
        handle: handle.to_string(),
        niches: owned(niches),
        audience_geo: owned(geo),
        audience_age: owned(age),
        audience_gender_mix: gender_mix,
        followers,
        engagement_rate,
        content_quality,
        price_per_post,
        platforms: owned(platforms),
        past_brands: owned(past_brands),
        availability,
        fraud_risk,
        brand_safety,
    }
}
