// Criterion benchmarks for the EMC engine

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use emc_engine::core::{style::style_score, Matcher};
use emc_engine::models::{Candidate, Requester};

const NICHES: [&str; 4] = ["WeddingFilm", "DroneOperator", "RunAndGunSocial", "Colourist"];

fn create_candidate(id: usize) -> Candidate {
    let styles = (0..=(id % 3))
        .map(|offset| ((id + offset * 4) % 9 + 1) as i32)
        .collect();

    Candidate {
        id: id as i64,
        styles,
        niche: Some(NICHES[id % NICHES.len()].to_string()),
    }
}

fn create_requester() -> Requester {
    Requester {
        user_id: 0,
        style_id: Some(1),
        niche: Some("RunAndGunSocial".to_string()),
    }
}

fn bench_style_score(c: &mut Criterion) {
    c.bench_function("style_score_soft_match", |b| {
        b.iter(|| style_score(black_box(1), black_box(&[5, 6, 3])));
    });
}

fn bench_rank(c: &mut Criterion) {
    let matcher = Matcher::default();
    let requester = create_requester();
    let mut group = c.benchmark_group("rank");

    for size in [100usize, 1_000, 10_000] {
        let candidates: Vec<Candidate> = (0..size).map(create_candidate).collect();

        group.bench_with_input(BenchmarkId::from_parameter(size), &candidates, |b, candidates| {
            b.iter(|| {
                matcher
                    .rank(black_box(&requester), black_box(candidates.clone()))
                    .map(|ranked| ranked.len())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_style_score, bench_rank);
criterion_main!(benches);
