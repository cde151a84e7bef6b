use std::path::Path;

use log::info;

use super::error::PredictorError;
use super::model::{ClassModel, HeartModel};
use super::predictor::Predictor;
use super::scaler::Scaler;
use crate::runtime::RuntimeConfig;

/// A builder for constructing a Predictor with a fluent interface.
///
/// Both artifacts are loaded and validated eagerly, so a predictor that
/// builds successfully is ready to serve. A build failure is meant to be
/// fatal at startup: the process must not serve without its artifacts.
///
/// # Example
/// ```rust,no_run
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use cardio::Predictor;
///
/// let predictor = Predictor::builder()
///     .with_model_file("heart_disease_model.onnx")?
///     .with_scaler_file("scaler.json")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct PredictorBuilder {
    model: Option<Box<dyn ClassModel>>,
    scaler: Option<Scaler>,
    model_path: Option<String>,
    scaler_path: Option<String>,
    runtime_config: RuntimeConfig,
}

impl PredictorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the ONNX Runtime threading configuration used when loading
    /// the model artifact.
    pub fn with_runtime_config(mut self, config: RuntimeConfig) -> Self {
        self.runtime_config = config;
        self
    }

    /// Loads the classifier from an ONNX artifact file.
    ///
    /// # Errors
    /// - `ArtifactError` if a model is already set or the file is missing
    /// - `ModelError` if the session cannot be created or the graph is
    ///   not a valid classifier
    pub fn with_model_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PredictorError> {
        if self.model.is_some() {
            return Err(PredictorError::ArtifactError("model already set".into()));
        }
        let path = path.as_ref();
        let model = HeartModel::from_file(path, &self.runtime_config)?;
        self.model = Some(Box::new(model));
        self.model_path = Some(path.to_string_lossy().to_string());
        Ok(self)
    }

    /// Loads the scaler parameters from a JSON artifact file.
    ///
    /// # Errors
    /// - `ArtifactError` if a scaler is already set, the file is missing,
    ///   or the parameters fail validation
    pub fn with_scaler_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PredictorError> {
        if self.scaler.is_some() {
            return Err(PredictorError::ArtifactError("scaler already set".into()));
        }
        let path = path.as_ref();
        self.scaler = Some(Scaler::from_file(path)?);
        self.scaler_path = Some(path.to_string_lossy().to_string());
        Ok(self)
    }

    /// Uses an already-constructed classifier backend instead of loading
    /// an ONNX artifact. Intended for tests and benchmarks.
    pub fn with_model(mut self, model: Box<dyn ClassModel>) -> Self {
        self.model = Some(model);
        self.model_path = Some("<in-memory>".into());
        self
    }

    /// Uses already-constructed scaler parameters.
    pub fn with_scaler(mut self, scaler: Scaler) -> Self {
        self.scaler = Some(scaler);
        self.scaler_path = Some("<in-memory>".into());
        self
    }

    /// Builds the final Predictor.
    ///
    /// # Errors
    /// - `ArtifactError` if either the model or the scaler is missing
    pub fn build(self) -> Result<Predictor, PredictorError> {
        let model = self
            .model
            .ok_or_else(|| PredictorError::ArtifactError("no classifier model loaded".into()))?;
        let scaler = self
            .scaler
            .ok_or_else(|| PredictorError::ArtifactError("no scaler loaded".into()))?;

        let predictor = Predictor {
            model,
            scaler,
            model_path: self.model_path.unwrap_or_default(),
            scaler_path: self.scaler_path.unwrap_or_default(),
        };
        info!(
            "Predictor ready (model: {}, scaler: {})",
            predictor.model_path, predictor.scaler_path
        );
        Ok(predictor)
    }
}
