use std::env;
use std::path::PathBuf;

/// Server configuration resolved from the environment, with CLI overrides
/// applied by the binary.
///
/// Recognized variables:
/// - `PORT` — listening port (default 5000; unparseable values fall back
///   to the default)
/// - `MODEL_PATH` — classifier artifact (default `heart_disease_model.onnx`)
/// - `SCALER_PATH` — scaler artifact (default `scaler.json`)
/// - `DIST_DIR` — front-end bundle directory (default `dist`)
/// - `APP_ENV` — `development` enables debug-level logging by default
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
    pub dist_dir: PathBuf,
    pub debug: bool,
}

pub const DEFAULT_PORT: u16 = 5000;

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            model_path: PathBuf::from("heart_disease_model.onnx"),
            scaler_path: PathBuf::from("scaler.json"),
            dist_dir: PathBuf::from("dist"),
            debug: false,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            model_path: env::var("MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            scaler_path: env::var("SCALER_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.scaler_path),
            dist_dir: env::var("DIST_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.dist_dir),
            debug: env::var("APP_ENV").as_deref() == Ok("development"),
        }
    }
}
