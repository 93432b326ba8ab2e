use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::runtime::RuntimeConfig;

/// Environment variable consulted when no model path is given explicitly.
pub const MODEL_PATH_ENV: &str = "IRIS_MODEL_PATH";

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8000;

/// Where the model comes from and how it is checked and run.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// Hex-encoded SHA-256 the artifact must match before it is loaded
    pub expected_sha256: Option<String>,
    pub runtime: RuntimeConfig,
}

impl ModelConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            expected_sha256: None,
            runtime: RuntimeConfig::default(),
        }
    }

    pub fn with_expected_sha256(mut self, hash: impl Into<String>) -> Self {
        self.expected_sha256 = Some(hash.into().to_lowercase());
        self
    }

    pub fn with_runtime(mut self, runtime: RuntimeConfig) -> Self {
        self.runtime = runtime;
        self
    }

    /// Returns the default model path
    pub fn default_model_path() -> PathBuf {
        // 1. Check environment variable
        if let Ok(path) = env::var(MODEL_PATH_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }

        // 2. Artifacts directory next to the service's working directory
        PathBuf::from("..").join("artifacts").join("model.onnx")
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::new(Self::default_model_path())
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub model: ModelConfig,
}

impl ServerConfig {
    pub fn bind_address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            model: ModelConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_path() {
        // Test with environment variable
        env::set_var(MODEL_PATH_ENV, "/tmp/iris-test/model.onnx");
        let path = ModelConfig::default_model_path();
        assert_eq!(path, PathBuf::from("/tmp/iris-test/model.onnx"));
        env::remove_var(MODEL_PATH_ENV);

        // Test without environment variable
        let path = ModelConfig::default_model_path();
        assert!(path.ends_with("artifacts/model.onnx"));
        assert!(path.starts_with(".."));
    }

    #[test]
    fn test_expected_hash_is_lowercased() {
        let config = ModelConfig::new("model.onnx").with_expected_sha256("ABCDEF");
        assert_eq!(config.expected_sha256.as_deref(), Some("abcdef"));
    }

    #[test]
    fn test_bind_address() {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            model: ModelConfig::new("model.onnx"),
        };
        assert_eq!(config.bind_address().unwrap(), "127.0.0.1:9000".parse::<SocketAddr>().unwrap());

        let config = ServerConfig {
            host: "not a host".to_string(),
            ..config
        };
        assert!(config.bind_address().is_err());
    }
}
