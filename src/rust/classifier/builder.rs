use std::path::Path;
use std::sync::Arc;
use ort::session::Session;
use log::{info, error};

use super::error::ClassifierError;
use super::model::Classifier;
use crate::runtime::{RuntimeConfig, create_session_builder};

/// Output names scikit-learn ONNX exporters use for the predicted label, in order of preference.
const LABEL_OUTPUT_NAMES: [&str; 2] = ["output_label", "label"];

/// A builder for constructing a Classifier with a fluent interface.
#[derive(Default, Debug)]
pub struct ClassifierBuilder {
    model_path: Option<String>,
    session: Option<Session>,
    label_output: Option<String>,
    runtime_config: RuntimeConfig,
}

impl ClassifierBuilder {
    pub fn new() -> Self {
        Self {
            model_path: None,
            session: None,
            label_output: None,
            runtime_config: RuntimeConfig::default(),
        }
    }

    /// Sets the runtime configuration for ONNX model execution.
    ///
    /// Must be called before [`with_model_path`](Self::with_model_path), which
    /// creates the session.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Names the model output holding the predicted class ids.
    ///
    /// Without this the builder picks `output_label`, then `label`, then the
    /// first output.
    pub fn with_label_output(mut self, name: impl Into<String>) -> Self {
        self.label_output = Some(name.into());
        self
    }

    /// Loads the ONNX model at `model_path`.
    ///
    /// # Returns
    /// * `Result<Self, ClassifierError>` - The builder instance if successful, or an error if:
    ///   - The path is empty
    ///   - A model is already set
    ///   - The file doesn't exist
    ///   - ONNX Runtime cannot load the file
    ///   - The model has no inputs or no outputs
    pub fn with_model_path(mut self, model_path: impl AsRef<Path>) -> Result<Self, ClassifierError> {
        let model_path = model_path.as_ref();
        if model_path.as_os_str().is_empty() {
            return Err(ClassifierError::BuildError("Model path cannot be empty".to_string()));
        }
        if self.model_path.is_some() {
            return Err(ClassifierError::BuildError("Model path already set".to_string()));
        }
        if !model_path.exists() {
            return Err(ClassifierError::BuildError(format!("Model file not found: {}", model_path.display())));
        }

        let session = create_session_builder(&self.runtime_config)?
            .commit_from_file(model_path)
            .map_err(|e| {
                error!("Failed to load model from {}: {}", model_path.display(), e);
                ClassifierError::ModelError(format!("Failed to load model: {}", e))
            })?;

        Self::validate_model(&session)?;
        info!("Model structure validated successfully");

        self.model_path = Some(model_path.to_string_lossy().to_string());
        self.session = Some(session);
        Ok(self)
    }

    /// Builds and returns the final Classifier instance
    pub fn build(mut self) -> Result<Classifier, ClassifierError> {
        let model_path = self.model_path.take()
            .ok_or_else(|| ClassifierError::BuildError("Model path must be set".to_string()))?;
        let session = self.session.take()
            .ok_or_else(|| ClassifierError::BuildError("No ONNX model loaded".into()))?;

        let input_name = session.inputs.first()
            .map(|input| input.name.clone())
            .ok_or_else(|| ClassifierError::ModelError("Model has no inputs".into()))?;
        let output_names: Vec<&str> = session.outputs.iter().map(|o| o.name.as_str()).collect();
        let label_output = Self::resolve_label_output(&output_names, self.label_output.as_deref())?;
        info!("Using input '{}' and label output '{}'", input_name, label_output);

        Ok(Classifier {
            model_path,
            session: Arc::new(session),
            input_name,
            label_output,
        })
    }

    fn resolve_label_output(outputs: &[&str], requested: Option<&str>) -> Result<String, ClassifierError> {
        if let Some(name) = requested {
            return outputs.iter()
                .find(|&&o| o == name)
                .map(|o| o.to_string())
                .ok_or_else(|| ClassifierError::ModelError(
                    format!("Model has no output named '{}' (outputs: {:?})", name, outputs)
                ));
        }

        LABEL_OUTPUT_NAMES.iter()
            .find(|preferred| outputs.contains(*preferred))
            .map(|o| o.to_string())
            .or_else(|| outputs.first().map(|o| o.to_string()))
            .ok_or_else(|| ClassifierError::ModelError("Model has no outputs".into()))
    }

    /// Validates that the model has at least one input and one output
    fn validate_model(session: &Session) -> Result<(), ClassifierError> {
        if session.inputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least 1 input for the feature matrix".to_string()
            ));
        }
        if session.outputs.is_empty() {
            return Err(ClassifierError::ModelError(
                "Model must have at least 1 output for the predicted label".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_path() {
        let result = ClassifierBuilder::new().with_model_path("");
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = ClassifierBuilder::new().with_model_path("/nonexistent/iris/model.onnx");
        match result {
            Err(ClassifierError::BuildError(msg)) => assert!(msg.contains("not found")),
            other => panic!("expected BuildError, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_build_without_model() {
        let result = ClassifierBuilder::new().build();
        assert!(matches!(result, Err(ClassifierError::BuildError(_))));
    }

    #[test]
    fn test_label_output_prefers_sklearn_names() {
        let outputs = ["output_probability", "output_label"];
        assert_eq!(ClassifierBuilder::resolve_label_output(&outputs, None).unwrap(), "output_label");

        let outputs = ["probabilities", "label"];
        assert_eq!(ClassifierBuilder::resolve_label_output(&outputs, None).unwrap(), "label");

        let outputs = ["y"];
        assert_eq!(ClassifierBuilder::resolve_label_output(&outputs, None).unwrap(), "y");
    }

    #[test]
    fn test_label_output_explicit() {
        let outputs = ["output_label", "class_ids"];
        assert_eq!(
            ClassifierBuilder::resolve_label_output(&outputs, Some("class_ids")).unwrap(),
            "class_ids"
        );
        assert!(ClassifierBuilder::resolve_label_output(&outputs, Some("missing")).is_err());
        assert!(ClassifierBuilder::resolve_label_output(&[], None).is_err());
    }
}
