//! The inference core: feature extraction, input standardization, and the
//! ONNX classifier, assembled into an immutable [`Predictor`] shared
//! read-only by every request handler.

mod builder;
mod error;
mod features;
mod model;
#[allow(clippy::module_inception)]
mod predictor;
mod scaler;

pub use builder::PredictorBuilder;
pub use error::PredictorError;
pub use features::{FeatureVector, FEATURE_ORDER};
pub use model::{ClassModel, HeartModel};
pub use predictor::{Prediction, Predictor, PredictorInfo};
pub use scaler::Scaler;
