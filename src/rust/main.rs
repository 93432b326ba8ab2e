use std::path::PathBuf;
use iris_predictor::{server, ModelConfig, ModelHolder, RuntimeConfig, ServerConfig};
use iris_predictor::config::{DEFAULT_HOST, DEFAULT_PORT};
use log::{info, warn};
use env_logger::{Builder, Env};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the ONNX model (defaults to $IRIS_MODEL_PATH, then ../artifacts/model.onnx)
    #[arg(short, long)]
    model_path: Option<PathBuf>,

    /// Expected SHA-256 of the model file; the model is not loaded on mismatch
    #[arg(long)]
    model_sha256: Option<String>,

    /// Address to listen on
    #[arg(long, default_value = DEFAULT_HOST)]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Threads used inside each ONNX operator (0 lets the runtime decide)
    #[arg(long, default_value_t = 0)]
    intra_threads: usize,
}

impl Args {
    fn into_config(self) -> ServerConfig {
        let runtime = RuntimeConfig {
            intra_threads: self.intra_threads,
            ..RuntimeConfig::default()
        };

        let mut model = ModelConfig::new(self.model_path.unwrap_or_else(ModelConfig::default_model_path))
            .with_runtime(runtime);
        if let Some(hash) = self.model_sha256 {
            model = model.with_expected_sha256(hash);
        }

        ServerConfig {
            host: self.host,
            port: self.port,
            model,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    Builder::from_env(Env::default().default_filter_or("info")).init();
    let config = Args::parse().into_config();

    info!("=== Starting Iris Species Predictor ===");
    info!("Model path: {:?}", config.model.path);
    if config.model.expected_sha256.is_some() {
        info!("Model checksum verification enabled");
    }

    let model = ModelHolder::load(&config.model);
    if !model.is_loaded() {
        warn!("Serving without a model; /predict will answer 500 until restart");
    }

    server::serve(&config, model).await
}
