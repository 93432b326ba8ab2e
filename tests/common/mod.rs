#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use env_logger::{Builder, Env};
use iris_predictor::{server, ClassifierError, FeatureVector, ModelHolder, Predictor};
use tokio::net::TcpListener;

// Initialize test logger
pub fn init() {
    let _ = Builder::from_env(Env::default().default_filter_or("warn"))
        .is_test(true)
        .try_init();
}

/// Nearest-centroid stand-in for the trained model, using the per-class means
/// of the reference iris dataset.
pub struct CentroidPredictor;

const CENTROIDS: [FeatureVector; 3] = [
    [5.006, 3.428, 1.462, 0.246],
    [5.936, 2.770, 4.260, 1.326],
    [6.588, 2.974, 5.552, 2.026],
];

impl Predictor for CentroidPredictor {
    fn predict(&self, samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        Ok(samples
            .iter()
            .map(|sample| {
                CENTROIDS
                    .iter()
                    .enumerate()
                    .map(|(id, centroid)| {
                        let dist: f64 = sample.iter().zip(centroid).map(|(a, b)| (a - b).powi(2)).sum();
                        (id as i64, dist)
                    })
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(id, _)| id)
                    .unwrap_or(0)
            })
            .collect())
    }
}

/// Always returns the same class id, in or out of the species table.
pub struct FixedPredictor(pub i64);

impl Predictor for FixedPredictor {
    fn predict(&self, samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        Ok(vec![self.0; samples.len()])
    }
}

pub struct FailingPredictor;

impl Predictor for FailingPredictor {
    fn predict(&self, _samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        Err(ClassifierError::PredictionError("X has 4 features, but model expects 5".into()))
    }
}

pub fn holder(predictor: impl Predictor + 'static) -> ModelHolder {
    ModelHolder::from_predictor(Arc::new(predictor))
}

/// Starts the service on an ephemeral port and returns its base URL.
pub async fn spawn_server(model: ModelHolder) -> String {
    init();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, server::router(model)).await.unwrap();
    });
    format!("http://{}", addr)
}
