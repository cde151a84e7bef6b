use std::fs;
use std::path::Path;

use log::info;
use serde::Deserialize;

use super::error::PredictorError;
use super::features::{FeatureVector, FEATURE_ORDER};

/// Standardization parameters fixed at training time: per-feature mean and
/// scale, applied as `(x - mean) / scale` in canonical feature order.
///
/// The artifact is a JSON document exported from the fitted scaler:
///
/// ```json
/// {
///   "mean": [54.4, 0.68, ...],
///   "scale": [9.0, 0.46, ...],
///   "feature_names": ["age", "sex", ...]
/// }
/// ```
///
/// `feature_names` is optional; when present it must match the order the
/// model was trained with, which catches artifacts exported from a
/// different pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct Scaler {
    mean: Vec<f32>,
    scale: Vec<f32>,
    #[serde(default)]
    feature_names: Option<Vec<String>>,
}

impl Scaler {
    /// Loads and validates scaler parameters from a JSON artifact.
    ///
    /// # Errors
    /// - `ArtifactError` if the file cannot be read or parsed
    /// - `ArtifactError` if the parameters fail validation
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| {
            PredictorError::ArtifactError(format!("failed to read scaler file {:?}: {}", path, e))
        })?;
        let scaler: Scaler = serde_json::from_slice(&bytes).map_err(|e| {
            PredictorError::ArtifactError(format!("failed to parse scaler file {:?}: {}", path, e))
        })?;
        scaler.validate()?;
        info!("Scaler loaded from {:?} ({} features)", path, scaler.mean.len());
        Ok(scaler)
    }

    /// Builds a scaler directly from parameter vectors.
    pub fn from_params(mean: Vec<f32>, scale: Vec<f32>) -> Result<Self, PredictorError> {
        let scaler = Self {
            mean,
            scale,
            feature_names: None,
        };
        scaler.validate()?;
        Ok(scaler)
    }

    fn validate(&self) -> Result<(), PredictorError> {
        let expected = FEATURE_ORDER.len();
        if self.mean.len() != expected || self.scale.len() != expected {
            return Err(PredictorError::ArtifactError(format!(
                "scaler expects {} features, artifact has {} means and {} scales",
                expected,
                self.mean.len(),
                self.scale.len()
            )));
        }
        if let Some(pos) = self.scale.iter().position(|s| !s.is_finite() || *s == 0.0) {
            return Err(PredictorError::ArtifactError(format!(
                "scale for feature '{}' is not a finite non-zero number",
                FEATURE_ORDER[pos]
            )));
        }
        if let Some(names) = &self.feature_names {
            if names.iter().map(String::as_str).ne(FEATURE_ORDER) {
                return Err(PredictorError::ArtifactError(format!(
                    "scaler feature names {:?} do not match the expected order {:?}",
                    names, FEATURE_ORDER
                )));
            }
        }
        Ok(())
    }

    /// Standardizes a record into the row the model expects.
    pub fn transform(&self, features: &FeatureVector) -> [f32; 10] {
        let mut row = features.as_row();
        for (i, value) in row.iter_mut().enumerate() {
            *value = (*value - self.mean[i]) / self.scale[i];
        }
        row
    }
}
