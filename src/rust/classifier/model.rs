use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use ort::session::Session;
use ort::value::Tensor;

use super::error::ClassifierError;
use super::features::{to_input_array, FeatureVector};

/// The opaque classifier seam: feature vectors in, integer class ids out.
///
/// Implementations must return exactly one class id per sample, in order.
pub trait Predictor: Send + Sync {
    fn predict(&self, samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError>;
}

/// A thread-safe iris classifier backed by an ONNX model exported from scikit-learn.
///
/// The session is wrapped in `Arc` and `Session::run` only needs `&self`, so a
/// single `Classifier` can serve concurrent requests without locking.
///
/// ```no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use iris_predictor::{Classifier, Predictor};
///
/// let classifier = Classifier::builder()
///     .with_model_path("../artifacts/model.onnx")?
///     .build()?;
///
/// let ids = classifier.predict(&[[5.1, 3.5, 1.4, 0.2]])?;
/// println!("Predicted class id: {}", ids[0]);
/// # Ok(())
/// # }
/// ```
pub struct Classifier {
    pub model_path: String,
    pub(crate) session: Arc<Session>,
    pub(crate) input_name: String,
    pub(crate) label_output: String,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Classifier>();
    }
};

impl fmt::Debug for Classifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Classifier")
            .field("model_path", &self.model_path)
            .field("input_name", &self.input_name)
            .field("label_output", &self.label_output)
            .finish()
    }
}

impl Classifier {
    /// Creates a new ClassifierBuilder for fluent construction
    pub fn builder() -> super::builder::ClassifierBuilder {
        super::builder::ClassifierBuilder::new()
    }

    /// Returns information about the loaded model
    pub fn info(&self) -> super::ClassifierInfo {
        super::ClassifierInfo {
            model_path: self.model_path.clone(),
            input_name: self.input_name.clone(),
            label_output: self.label_output.clone(),
        }
    }
}

impl Predictor for Classifier {
    fn predict(&self, samples: &[FeatureVector]) -> Result<Vec<i64>, ClassifierError> {
        let input = to_input_array(samples)?;

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(input)
                .map_err(|e| ClassifierError::PredictionError(format!("Failed to create input tensor: {}", e)))?,
        );

        let outputs = self.session.run(input_tensors)
            .map_err(|e| ClassifierError::PredictionError(format!("Failed to run model: {}", e)))?;
        let labels = outputs[self.label_output.as_str()].try_extract_tensor::<i64>()
            .map_err(|e| ClassifierError::PredictionError(format!("Failed to extract label tensor: {}", e)))?;

        let ids: Vec<i64> = labels.iter().copied().collect();
        if ids.len() != samples.len() {
            return Err(ClassifierError::PredictionError(format!(
                "Model returned {} labels for {} samples",
                ids.len(),
                samples.len()
            )));
        }

        Ok(ids)
    }
}
