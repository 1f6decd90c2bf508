// Criterion benchmarks for MatchForge

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use matchforge::core::{fuzzy_overlap, scoring::score_influencer_for_campaign, Matcher};
use matchforge::models::{BrandCampaign, GenderMix, Influencer, Role, ScoringWeights};

fn create_candidate(id: usize) -> Influencer {
    Influencer {
        id: id.to_string(),
        handle: format!("@creator{}", id),
        niches: vec![format!("Niche{}", id % 8)],
        audience_geo: vec![format!("City{}", id % 5)],
        audience_age: vec!["18-24".to_string(), "25-34".to_string()],
        audience_gender_mix: GenderMix { male: 45.0, female: 50.0, other: 5.0 },
        followers: 10_000 + (id as u64 * 937) % 1_000_000,
        engagement_rate: 1.0 + (id % 9) as f64,
        content_quality: 2.0 + (id % 4) as f64 * 0.75,
        price_per_post: 5_000.0 + (id as f64 * 311.0) % 80_000.0,
        platforms: vec!["Instagram".to_string(), "YouTube".to_string()],
        past_brands: vec![format!("Brand {}", id % 10)],
        availability: id % 7 != 0,
        fraud_risk: (id % 10) as f64 / 20.0,
        brand_safety: 0.6 + (id % 5) as f64 / 12.5,
    }
}

fn create_campaign() -> BrandCampaign {
    BrandCampaign {
        id: "camp_bench".to_string(),
        brand_name: "Acme".to_string(),
        categories: vec!["Niche1".to_string(), "Niche3".to_string()],
        target_geo: vec!["City0".to_string(), "City2".to_string()],
        target_age: vec!["18-24".to_string()],
        target_gender_mix: GenderMix { male: 40.0, female: 55.0, other: 5.0 },
        min_followers: 5_000,
        min_engagement: 2.0,
        brand_safety_min: 0.5,
        max_price: 60_000.0,
        preferred_platforms: vec!["Instagram".to_string()],
        exclusions: vec![],
    }
}

fn bench_fuzzy_overlap(c: &mut Criterion) {
    let niches: Vec<String> = (0..6).map(|i| format!("Niche{}", i)).collect();
    let categories: Vec<String> = (0..4).map(|i| format!("niche{} & lifestyle", i * 2)).collect();

    c.bench_function("fuzzy_overlap", |b| {
        b.iter(|| fuzzy_overlap(black_box(&niches), black_box(&categories)));
    });
}

fn bench_scoring(c: &mut Criterion) {
    let influencer = create_candidate(3);
    let campaign = create_campaign();
    let weights = ScoringWeights::default();

    c.bench_function("score_influencer_for_campaign", |b| {
        b.iter(|| {
            score_influencer_for_campaign(
                black_box(&influencer),
                black_box(&campaign),
                black_box(&weights),
            )
        });
    });
}

fn bench_ranking_pipeline(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let campaign = create_campaign();

    let mut group = c.benchmark_group("ranking");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<Influencer> =
            (0..*candidate_count).map(create_candidate).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    let mut rng = StdRng::seed_from_u64(42);
                    matcher.rank(
                        black_box(Role::Brand),
                        black_box(Some(&campaign)),
                        black_box(candidates.clone()),
                        black_box(&[]),
                        None,
                        &mut rng,
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_fuzzy_overlap, bench_scoring, bench_ranking_pipeline);
criterion_main!(benches);
