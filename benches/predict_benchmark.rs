use std::sync::Arc;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use iris_predictor::server::schema::PredictRequest;
use iris_predictor::{
    predict_first, species_name, ClassifierError, FeatureVector, ModelConfig, ModelHolder, Predictor,
    RuntimeConfig,
};
use ort::session::builder::GraphOptimizationLevel;

struct PetalThreshold;

impl Predictor for PetalThreshold {
    fn predict(&self, samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        Ok(samples.iter().map(|s| if s[2] < 2.5 { 0 } else if s[2] < 4.9 { 1 } else { 2 }).collect())
    }
}

fn bench_request_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("RequestPath");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let body = br#"{"features": [[5.1, 3.5, 1.4, 0.2], [6.7, 3.0, 5.2, 2.3]]}"#;
    group.bench_function("parse_request", |b| b.iter(|| {
        PredictRequest::from_slice(black_box(body)).unwrap()
    }));

    let holder = ModelHolder::from_predictor(Arc::new(PetalThreshold));
    let features = [[5.1, 3.5, 1.4, 0.2]];
    group.bench_function("predict_first_stub", |b| b.iter(|| {
        predict_first(&holder, black_box(&features)).unwrap()
    }));

    group.bench_function("species_lookup", |b| b.iter(|| {
        species_name(black_box(2))
    }));

    group.finish();
}

// Runs only when an exported model exists at the default path
fn bench_onnx_prediction(c: &mut Criterion) {
    let path = ModelConfig::default_model_path();
    if !path.exists() {
        eprintln!("Skipping ONNX benchmarks: no model at {:?}", path);
        return;
    }

    let mut group = c.benchmark_group("OnnxPrediction");
    group.sample_size(50);
    group.warm_up_time(std::time::Duration::from_secs(1));

    let configs = vec![
        ("single_thread", RuntimeConfig {
            inter_threads: 1,
            intra_threads: 1,
            optimization_level: GraphOptimizationLevel::Level1,
        }),
        ("optimized", RuntimeConfig::default()),
    ];

    for (name, runtime) in configs {
        let config = ModelConfig::new(&path).with_runtime(runtime);
        let holder = ModelHolder::load(&config);
        if !holder.is_loaded() {
            eprintln!("Skipping {}: model failed to load", name);
            continue;
        }

        group.bench_function(format!("predict_{}", name), |b| b.iter(|| {
            predict_first(&holder, black_box(&[[6.3, 2.5, 4.9, 1.5]])).unwrap()
        }));
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_request_path,
    bench_onnx_prediction
);
criterion_main!(benches);
