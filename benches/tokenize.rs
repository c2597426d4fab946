//! Tokenizer and extraction benchmarks
//!
//! Run with: cargo bench --bench tokenize
//!
//! - tokenize/<shape>: one title of a given structural shape
//! - extract/<titles>: parallel tokenize-and-count over a synthetic corpus

use contract_keywords::{Extractor, KeywordCounter, Tokenizer};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

// ============================================================================
// Constants and Utilities
// ============================================================================

/// Fixed seed for reproducible corpora
const BENCH_SEED: u64 = 0xDEADBEEF_CAFEBABE;

/// Simple LCG for deterministic pseudo-random picks
fn lcg_next(state: &mut u64) -> u64 {
    *state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
    *state
}

/// Titles covering each decomposition rule
const SHAPES: &[(&str, &str)] = &[
    ("plain", "시설물 유지관리 용역"),
    ("comma", "선반, NC, 밀링, 연삭기"),
    ("paren", "'09년 전산장비(PC) 정비용역"),
    ("quoted", "\"'15~'16년 동절기 제설\" 대비 자재 구매"),
    ("dash", "2015-2016 기간제 근로자 채용"),
    ("digits", "120다산콜센터 상담 시스템 고도화"),
    ("entity", "국가비축 항바이러스제 &#40;타미플루&#41; 사용기간 연장"),
    ("mixed", "1·2·3호선 냉난방·위생 [긴급] 유지관리 용역(1차) - 2단계"),
];

fn generate_corpus(count: usize) -> Vec<String> {
    let mut state = BENCH_SEED;
    (0..count)
        .map(|i| {
            let (_, title) = SHAPES[(lcg_next(&mut state) % SHAPES.len() as u64) as usize];
            format!("{} {}차", title, i % 7)
        })
        .collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn tokenize_by_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let tokenizer = Tokenizer::new();

    for (label, title) in SHAPES {
        group.bench_with_input(BenchmarkId::from_parameter(label), title, |b, title| {
            b.iter(|| tokenizer.tokenize(black_box(title)).unwrap());
        });
    }

    group.finish();
}

fn extract_by_corpus_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");
    group.measurement_time(Duration::from_secs(5));
    let tokenizer = Tokenizer::new();

    for count in [1_000usize, 10_000] {
        let corpus = generate_corpus(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("titles", count), &corpus, |b, corpus| {
            b.iter(|| {
                let counter = KeywordCounter::new();
                Extractor::new(&tokenizer)
                    .with_progress_interval(0)
                    .run(corpus.iter().cloned().map(Ok), &counter)
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(tokenize_benches, tokenize_by_shape);

criterion_group!(extract_benches, extract_by_corpus_size);

criterion_main!(tokenize_benches, extract_benches);
