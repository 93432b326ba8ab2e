use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use sha2::{Sha256, Digest};

use crate::classifier::{Classifier, ClassifierError, Predictor};
use crate::config::ModelConfig;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Model file not found at {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Hash mismatch: expected {expected}, got {actual}")]
    HashMismatch {
        expected: String,
        actual: String,
    },
    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Write-once handle to the classifier, built at startup and shared by every request.
///
/// A holder is either empty or holds a ready classifier; it never changes after
/// construction, so clones can be read from any task without locking.
#[derive(Clone, Default)]
pub struct ModelHolder {
    model: Option<Arc<dyn Predictor>>,
    source: Option<PathBuf>,
}

impl fmt::Debug for ModelHolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHolder")
            .field("loaded", &self.is_loaded())
            .field("source", &self.source)
            .finish()
    }
}

impl ModelHolder {
    /// Loads the model described by `config`.
    ///
    /// Failures are logged and produce an empty holder; the caller keeps
    /// serving in degraded mode and nothing retries the load.
    pub fn load(config: &ModelConfig) -> Self {
        let start_time = Instant::now();
        match Self::try_load(config) {
            Ok(classifier) => {
                log::info!(
                    "Model loaded successfully from {:?} (took {:.2?})",
                    config.path,
                    start_time.elapsed()
                );
                log::debug!("Classifier info: {:?}", classifier.info());
                Self {
                    model: Some(Arc::new(classifier)),
                    source: Some(config.path.clone()),
                }
            }
            Err(ModelError::NotFound(path)) => {
                log::error!("Error: Model file not found at {:?}", path);
                Self::empty()
            }
            Err(e) => {
                log::error!("Error loading model: {}", e);
                Self::empty()
            }
        }
    }

    pub fn try_load(config: &ModelConfig) -> Result<Classifier, ModelError> {
        let path = &config.path;
        log::info!("Loading model from {:?}", path);
        if !path.exists() {
            return Err(ModelError::NotFound(path.clone()));
        }

        if let Some(expected) = &config.expected_sha256 {
            let actual = Self::file_sha256(path)?;
            log::info!("Calculated hash: {}", actual);
            log::info!("Expected hash:   {}", expected);
            if &actual != expected {
                return Err(ModelError::HashMismatch {
                    expected: expected.clone(),
                    actual,
                });
            }
        }

        let classifier = Classifier::builder()
            .with_runtime_config(config.runtime.clone())
            .with_model_path(path)?
            .build()?;
        Ok(classifier)
    }

    /// A holder with no model; every prediction reports the model as unavailable.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_predictor(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            model: Some(predictor),
            source: None,
        }
    }

    pub fn current(&self) -> Option<&dyn Predictor> {
        self.model.as_deref()
    }

    pub fn is_loaded(&self) -> bool {
        self.model.is_some()
    }

    /// Path the model was loaded from, if it came from disk
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn file_sha256(path: &Path) -> Result<String, ModelError> {
        let bytes = fs::read(path)?;
        log::debug!("Read {} bytes from {:?}", bytes.len(), path);
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        Ok(format!("{:x}", hasher.finalize()))
    }
}
