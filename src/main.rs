use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::{error, info};

use cardio::{serve, Predictor, ServerConfig};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Listening port (overrides PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Path to the ONNX classifier artifact (overrides MODEL_PATH)
    #[arg(long)]
    model: Option<PathBuf>,

    /// Path to the JSON scaler artifact (overrides SCALER_PATH)
    #[arg(long)]
    scaler: Option<PathBuf>,

    /// Path to the front-end bundle directory (overrides DIST_DIR)
    #[arg(long)]
    dist: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut config = ServerConfig::from_env();

    let default_level = if config.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(model) = args.model {
        config.model_path = model;
    }
    if let Some(scaler) = args.scaler {
        config.scaler_path = scaler;
    }
    if let Some(dist) = args.dist {
        config.dist_dir = dist;
    }

    info!(
        "Loading artifacts (model: {:?}, scaler: {:?})",
        config.model_path, config.scaler_path
    );

    // Artifact loading is fatal: the process must not serve without both.
    let predictor = Predictor::builder()
        .with_model_file(&config.model_path)
        .and_then(|builder| builder.with_scaler_file(&config.scaler_path))
        .and_then(|builder| builder.build())
        .map_err(|e| {
            error!("Failed to load artifacts: {}", e);
            e
        })?;

    let info = predictor.info();
    info!(
        "Serving {} features in order {:?}",
        info.num_features, info.feature_order
    );

    serve(&config, Arc::new(predictor))
        .await
        .context("server error")?;

    Ok(())
}
