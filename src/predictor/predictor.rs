use serde::Serialize;

use super::error::PredictorError;
use super::features::{FeatureVector, FEATURE_ORDER};
use super::model::ClassModel;
use super::scaler::Scaler;

/// The outcome of one inference call: the predicted class label and the
/// model's confidence in that class.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Prediction {
    pub label: i64,
    pub probability: f32,
}

/// A snapshot of the predictor's configuration, for startup logging.
#[derive(Debug, Clone, Serialize)]
pub struct PredictorInfo {
    pub model_path: String,
    pub scaler_path: String,
    pub num_features: usize,
    pub feature_order: Vec<String>,
}

/// The immutable inference context: scaler plus classifier, built once at
/// startup and shared read-only across all requests.
///
/// # Thread Safety
///
/// `Predictor` is `Send + Sync`: the scaler is plain data and the model
/// trait requires `Send + Sync` of its implementations, so an `Arc<Predictor>`
/// can serve concurrent requests without locking.
pub struct Predictor {
    pub(super) model: Box<dyn ClassModel>,
    pub(super) scaler: Scaler,
    pub(super) model_path: String,
    pub(super) scaler_path: String,
}

// Compile-time verification of thread-safety
const _: () = {
    fn assert_send_sync<T: Send + Sync>() {}
    fn verify_thread_safety() {
        assert_send_sync::<Predictor>();
    }
};

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("model_path", &self.model_path)
            .field("scaler_path", &self.scaler_path)
            .finish_non_exhaustive()
    }
}

impl Predictor {
    /// Creates a new PredictorBuilder for fluent construction
    pub fn builder() -> super::builder::PredictorBuilder {
        super::builder::PredictorBuilder::new()
    }

    /// Returns information about the predictor's configuration
    pub fn info(&self) -> PredictorInfo {
        PredictorInfo {
            model_path: self.model_path.clone(),
            scaler_path: self.scaler_path.clone(),
            num_features: FEATURE_ORDER.len(),
            feature_order: FEATURE_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Standardizes the record, runs the classifier, and reports the
    /// probability of the class that was predicted.
    ///
    /// Deterministic for a fixed artifact pair: identical input yields an
    /// identical prediction.
    ///
    /// # Errors
    /// - Forwards scaling and inference errors from the backend
    /// - `PredictionError` if the predicted label has no matching entry in
    ///   the probability vector
    pub fn predict(&self, features: &FeatureVector) -> Result<Prediction, PredictorError> {
        let scaled = self.scaler.transform(features);
        let (label, proba) = self.model.predict_with_proba(&scaled)?;

        let index = usize::try_from(label).ok().filter(|i| *i < proba.len());
        let probability = match index {
            Some(i) => proba[i],
            None => {
                return Err(PredictorError::PredictionError(format!(
                    "predicted class {} has no probability entry ({} classes)",
                    label,
                    proba.len()
                )))
            }
        };

        Ok(Prediction { label, probability })
    }
}
