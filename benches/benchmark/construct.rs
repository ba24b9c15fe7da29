use crate::common::{configure_criterion, request_context};
use criterion::{criterion_group, Criterion};
use error_meta::{
    new, with_context, with_custom_code, with_http_code, wrap_error, EnrichedError, MessageError,
};
use std::hint::black_box;

pub fn bench_new(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct/new");

    group.bench_function("no_options", |b| {
        b.iter(|| black_box(new(black_box("resource not found"), [])))
    });

    group.bench_function("two_codes", |b| {
        b.iter(|| {
            black_box(new(
                black_box("resource not found"),
                [with_http_code(404), with_custom_code(1001)],
            ))
        })
    });

    group.bench_function("codes_and_context", |b| {
        let ctx = request_context();
        b.iter(|| {
            black_box(new(
                black_box("resource not found"),
                [with_http_code(404), with_custom_code(1001), with_context(ctx.clone())],
            ))
        })
    });

    group.bench_function("builder", |b| {
        b.iter(|| {
            black_box(
                EnrichedError::new(black_box("resource not found"))
                    .with_http_code(404)
                    .with_custom_code(1001),
            )
        })
    });

    group.finish();
}

pub fn bench_wrap(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct/wrap");

    group.bench_function("plain_cause", |b| {
        b.iter(|| {
            black_box(wrap_error(
                MessageError::new("original error"),
                black_box("file not found"),
                [],
            ))
        })
    });

    group.bench_function("plain_cause_coerced", |b| {
        b.iter(|| {
            black_box(wrap_error(
                MessageError::new("original error"),
                black_box("file not found"),
                [with_http_code(404)],
            ))
        })
    });

    group.bench_function("enriched_cause", |b| {
        b.iter(|| {
            let cause = new("row missing", [with_http_code(404)]);
            black_box(wrap_error(cause, black_box("loading user"), [with_custom_code(3)]))
        })
    });

    group.finish();
}

criterion_group! {
    name = construct_benches;
    config = configure_criterion();
    targets = bench_new, bench_wrap
}
