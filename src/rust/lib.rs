//! A small HTTP inference service that classifies iris flowers from four measurements.
//!
//! A scikit-learn classifier exported to ONNX is loaded once at startup into a
//! [`ModelHolder`]. The holder is then shared read-only by the axum handlers in
//! [`server`].
//!
//! # Basic Usage
//!
//! ```no_run
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! use iris_predictor::{server, ModelConfig, ModelHolder, ServerConfig};
//!
//! let config = ServerConfig {
//!     model: ModelConfig::new("../artifacts/model.onnx"),
//!     ..ServerConfig::default()
//! };
//!
//! // Never fails: a missing or broken model leaves the holder empty
//! let model = ModelHolder::load(&config.model);
//! server::serve(&config, model).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Custom classifiers
//!
//! Anything implementing [`Predictor`] can stand in for the ONNX model:
//!
//! ```
//! use std::sync::Arc;
//! use iris_predictor::{predict_first, ClassifierError, FeatureVector, ModelHolder, Predictor};
//!
//! struct PetalLength;
//!
//! impl Predictor for PetalLength {
//!     fn predict(&self, samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
//!         Ok(samples.iter().map(|s| if s[2] < 2.5 { 0 } else { 1 }).collect())
//!     }
//! }
//!
//! let holder = ModelHolder::from_predictor(Arc::new(PetalLength));
//! let prediction = predict_first(&holder, &[[5.1, 3.5, 1.4, 0.2]]).unwrap();
//! assert_eq!(prediction.species_name, "setosa");
//! ```

pub mod classifier;
pub mod config;
pub mod inference;
pub mod model_holder;
mod runtime;
pub mod server;

pub use classifier::{
    Classifier, ClassifierBuilder, ClassifierError, ClassifierInfo, FeatureVector, Predictor, Species,
    species_name, FEATURE_COUNT, UNKNOWN_SPECIES,
};
pub use config::{ModelConfig, ServerConfig};
pub use inference::{predict_first, PredictError, Prediction, MODEL_UNAVAILABLE_DETAIL};
pub use model_holder::{ModelError, ModelHolder};
pub use runtime::{RuntimeConfig, create_session_builder};
