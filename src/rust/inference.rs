use crate::classifier::{species_name, ClassifierError, FeatureVector};
use crate::model_holder::ModelHolder;

/// Detail reported when no model could be loaded at startup.
pub const MODEL_UNAVAILABLE_DETAIL: &str = "Model not loaded. Check server logs.";

/// The outcome of classifying one feature vector.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub class_id: i64,
    pub species_name: &'static str,
    pub features: FeatureVector,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("features must contain at least one feature vector")]
    EmptyFeatures,
    #[error("{}", MODEL_UNAVAILABLE_DETAIL)]
    ModelUnavailable,
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Classifies the first feature vector of a request.
///
/// Vectors after the first are accepted but ignored. The empty check runs
/// before the model check, so an empty request is reported as invalid even
/// when no model is loaded.
pub fn predict_first(holder: &ModelHolder, features: &[FeatureVector]) -> Result<Prediction, PredictError> {
    let sample = *features.first().ok_or(PredictError::EmptyFeatures)?;
    let model = holder.current().ok_or(PredictError::ModelUnavailable)?;

    let class_id = model
        .predict(&[sample])?
        .first()
        .copied()
        .ok_or_else(|| ClassifierError::PredictionError("Model returned no prediction".into()))?;

    Ok(Prediction {
        class_id,
        species_name: species_name(class_id),
        features: sample,
    })
}
