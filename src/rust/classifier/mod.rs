mod error;
mod features;
mod model;
pub mod builder;
pub mod species;

pub use error::ClassifierError;
pub use features::{FeatureVector, FEATURE_COUNT};
pub use model::{Classifier, Predictor};
pub use builder::ClassifierBuilder;
pub use species::{Species, species_name, UNKNOWN_SPECIES};

/// Information about a loaded classifier
#[derive(Debug, Clone)]
pub struct ClassifierInfo {
    /// Path to the ONNX model file
    pub model_path: String,
    /// Name of the model input fed with the feature matrix
    pub input_name: String,
    /// Name of the model output read as class ids
    pub label_output: String,
}
