//! Benchmarks for schema registration and pagination arithmetic.
//!
//! Registration runs once per schema build, so the interesting question
//! is how it scales with the number of configured content types; the
//! pagination math sits on the per-field hot path.

// Criterion macros generate items without docs - this is expected for benchmarks
// Benchmarks use expect/unwrap for simplicity - panics are acceptable in benchmarks
#![allow(missing_docs)]
#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::hint::black_box;
use std::sync::Arc;

use async_trait::async_trait;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use searchfan::{
    ArgTransformer, AuthContext, ContentTypeDescriptor, ContentTypeSet, MatchEngine, MatchQuery,
    MatchSet, PaginationArgs, PaginationWindow, ResponseInfo, ResponseShaper, Result,
    SchemaRegistrar, ShapedResponse, TransformOptions, TransformedArgs, compute_page_info,
};
use serde_json::Value;

struct StubEngine;

#[async_trait]
impl MatchEngine for StubEngine {
    async fn get_matches(&self, _query: MatchQuery<'_>) -> Result<MatchSet> {
        Ok(MatchSet::default())
    }
}

struct StubTransformer;

impl ArgTransformer for StubTransformer {
    fn transform(
        &self,
        _pagination: Option<PaginationArgs>,
        filters: Option<Value>,
        _options: TransformOptions<'_>,
    ) -> TransformedArgs {
        TransformedArgs {
            start: 0,
            limit: 10,
            filters,
        }
    }
}

struct StubShaper;

#[async_trait]
impl ResponseShaper for StubShaper {
    async fn shape(
        &self,
        matches: MatchSet,
        _content_type: &ContentTypeDescriptor,
        _auth: &AuthContext,
        window: PaginationWindow,
    ) -> Result<Option<ShapedResponse>> {
        Ok(Some(ShapedResponse {
            nodes: matches.into_records(),
            info: ResponseInfo { args: window },
        }))
    }
}

fn create_test_descriptors(count: usize) -> Vec<ContentTypeDescriptor> {
    (0..count)
        .map(|i| {
            ContentTypeDescriptor::new(
                format!("api::model{i}.model{i}"),
                format!("Model{i}"),
                format!("model{i}s"),
            )
        })
        .collect()
}

fn create_test_registrar(count: usize) -> SchemaRegistrar {
    SchemaRegistrar::new(
        ContentTypeSet::new(create_test_descriptors(count)).expect("descriptors are unique"),
        Arc::new(StubEngine),
        Arc::new(StubTransformer),
        Arc::new(StubShaper),
    )
}

fn bench_register_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("register_scaling");

    for count in &[1usize, 10, 50, 200] {
        let registrar = create_test_registrar(*count);
        group.bench_with_input(BenchmarkId::new("register", count), count, |b, _| {
            b.iter(|| black_box(registrar.register()));
        });
    }

    group.finish();
}

fn bench_compute_page_info(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_page_info");

    group.bench_function("bounded_window", |b| {
        b.iter(|| compute_page_info(black_box(25), black_box(10), black_box(10)));
    });

    group.bench_function("bounded_large_totals", |b| {
        b.iter(|| compute_page_info(black_box(1_000_000), black_box(999_990), black_box(37)));
    });

    group.bench_function("all_results", |b| {
        b.iter(|| compute_page_info(black_box(100), black_box(50), black_box(-1)));
    });

    group.finish();
}

criterion_group!(benches, bench_register_scaling, bench_compute_page_info);
criterion_main!(benches);
