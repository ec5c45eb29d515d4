//! Benchmarks for the recommendation pipeline
//!
//! Run with: cargo bench --package pipeline

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use domain::{AnalyzeRequest, Context};
use pipeline::{normalize_signals, StagePipeline};

fn sample_request() -> AnalyzeRequest {
    let context = Context {
        place_size: Some("villa_250_350".to_string()),
        pickup_floor: Some(2),
        destination_floor: Some(3),
        has_elevator: Some(0),
        add_heavy: Some(1),
        ..Context::default()
    };
    let image_urls = (0..8).map(|i| format!("img-{}.jpg", i)).collect();
    AnalyzeRequest::new("images", context).with_image_urls(image_urls)
}

fn bench_recommend(c: &mut Criterion) {
    let pipeline = StagePipeline::standard();
    let request = sample_request();

    c.bench_function("pipeline_recommend", |b| {
        b.iter(|| {
            let recommendation = pipeline.recommend(black_box(&request));
            black_box(recommendation)
        })
    });
}

fn bench_normalize_signals(c: &mut Criterion) {
    let request = sample_request();

    c.bench_function("normalize_signals", |b| {
        b.iter(|| {
            let signals = normalize_signals(black_box(&request));
            black_box(signals)
        })
    });
}

criterion_group!(benches, bench_recommend, bench_normalize_signals);
criterion_main!(benches);
