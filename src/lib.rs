//! A thread-safe heart disease prediction service backed by an ONNX classifier.
//!
//! The library loads two artifacts at startup: a fitted binary classifier
//! (ONNX) and the standardization parameters of the scaler it was trained
//! with (JSON). Both are immutable for the life of the process and shared
//! read-only across requests.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use cardio::{FeatureVector, Predictor};
//!
//! let predictor = Predictor::builder()
//!     .with_model_file("heart_disease_model.onnx")?
//!     .with_scaler_file("scaler.json")?
//!     .build()?;
//!
//! let features = FeatureVector {
//!     age: 63.0, sex: 1.0, cp: 3.0, trestbps: 145.0, chol: 233.0,
//!     fbs: 1.0, restecg: 0.0, thalch: 150.0, exang: 0.0, oldpeak: 2.3,
//! };
//! let prediction = predictor.predict(&features)?;
//! println!("class {} ({:.1}%)", prediction.label, prediction.probability * 100.0);
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! `Predictor` is `Send + Sync`; the HTTP layer shares it across request
//! handlers through an `Arc` without any locking, since prediction never
//! mutates the loaded artifacts.

pub mod config;
pub mod predictor;
mod runtime;
pub mod server;

pub use config::ServerConfig;
pub use predictor::{
    ClassModel, FeatureVector, HeartModel, Prediction, Predictor, PredictorBuilder,
    PredictorError, PredictorInfo, Scaler, FEATURE_ORDER,
};
pub use runtime::{create_session_builder, RuntimeConfig};
pub use server::{build_router, serve};

pub fn init_logger() {
    env_logger::init();
}
