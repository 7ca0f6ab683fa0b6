//! Criterion benchmarks for the attribute matching engine.
//!
//! Uses synthetic candidate grids to measure pure engine overhead,
//! independent of any real attribute vocabulary.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use attrmatch::attributes::Attributes;
use attrmatch::matching::{find_best_matches, Candidate};
use attrmatch::policy::{FnMatcher, MatcherRegistry};

/// Builds `n` candidates over `attrs` attribute names. Every candidate
/// matches the request on all but its "own" attribute, so the working set
/// stays full through most of the filtering — the worst case for the engine.
fn dense_candidates(n: usize, attrs: usize) -> (Attributes, Vec<Candidate<usize>>) {
    let names: Vec<String> = (0..attrs).map(|i| format!("attr{i}")).collect();

    let requested: Attributes = names.iter().map(|name| (name.clone(), "wanted")).collect();

    let candidates = (0..n)
        .map(|c| {
            let map: Attributes = names
                .iter()
                .enumerate()
                .map(|(i, name)| {
                    let value = if i == c % attrs { "near" } else { "wanted" };
                    (name.clone(), value)
                })
                .collect();
            Candidate::new(c, map)
        })
        .collect();

    (requested, candidates)
}

fn scoring_policy(attrs: usize) -> MatcherRegistry {
    let mut policy = MatcherRegistry::new();
    for i in 0..attrs {
        let matcher = FnMatcher::required(|req: &str, cand: &str| {
            if req == cand {
                0
            } else if cand == "near" {
                1
            } else {
                -1
            }
        });
        policy = policy.with_matcher(format!("attr{i}"), matcher);
    }
    policy
}

fn bench_find_best_matches(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_best_matches");

    for &n in &[4usize, 16, 64] {
        let attrs = 6;
        let policy = scoring_policy(attrs);
        let (requested, candidates) = dense_candidates(n, attrs);

        group.bench_with_input(BenchmarkId::new("candidates", n), &n, |b, _| {
            b.iter(|| {
                let winners = find_best_matches(
                    black_box(&policy),
                    black_box(&requested),
                    black_box(&candidates),
                )
                .unwrap();
                black_box(winners)
            })
        });
    }

    group.finish();
}

fn bench_attribute_width(c: &mut Criterion) {
    let mut group = c.benchmark_group("attribute_width");

    for &attrs in &[2usize, 8, 32] {
        let policy = scoring_policy(attrs);
        let (requested, candidates) = dense_candidates(16, attrs);

        group.bench_with_input(BenchmarkId::new("attrs", attrs), &attrs, |b, _| {
            b.iter(|| {
                let winners = find_best_matches(
                    black_box(&policy),
                    black_box(&requested),
                    black_box(&candidates),
                )
                .unwrap();
                black_box(winners)
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find_best_matches, bench_attribute_width);
criterion_main!(benches);
