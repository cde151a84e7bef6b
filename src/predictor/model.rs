use std::collections::HashMap;
use std::path::Path;

use log::info;
use ndarray::Array2;
use ort::session::Session;
use ort::value::Tensor;

use super::error::PredictorError;
use crate::runtime::{create_session_builder, RuntimeConfig};

/// A fitted binary classifier over one scaled feature row.
///
/// The trait is the seam between the HTTP/prediction plumbing and the
/// inference backend, so tests can substitute a deterministic model where
/// no ONNX artifact is available.
pub trait ClassModel: Send + Sync {
    /// Returns the predicted class label for the row.
    fn predict(&self, row: &[f32]) -> Result<i64, PredictorError>;

    /// Returns the per-class probability vector for the row.
    fn predict_proba(&self, row: &[f32]) -> Result<Vec<f32>, PredictorError>;

    /// Returns label and probabilities together. Backends that produce
    /// both in a single pass should override this.
    fn predict_with_proba(&self, row: &[f32]) -> Result<(i64, Vec<f32>), PredictorError> {
        Ok((self.predict(row)?, self.predict_proba(row)?))
    }
}

/// The production backend: an ONNX classifier exported from the training
/// pipeline, run through ONNX Runtime.
///
/// The graph is expected to take one float input of shape
/// `[batch_size, 10]` and expose two outputs in the sklearn-converter
/// convention: an `int64` label tensor and a `[batch_size, n_classes]`
/// float probability tensor (ZipMap disabled at export time).
pub struct HeartModel {
    session: std::sync::Mutex<Session>,
    input_name: String,
}

impl std::fmt::Debug for HeartModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeartModel")
            .field("input_name", &self.input_name)
            .finish_non_exhaustive()
    }
}

impl HeartModel {
    /// Loads the classifier artifact and validates its graph structure.
    ///
    /// # Errors
    /// - `ArtifactError` if the file does not exist
    /// - `ModelError` if the session cannot be created or the graph does
    ///   not have the expected inputs/outputs
    pub fn from_file<P: AsRef<Path>>(path: P, config: &RuntimeConfig) -> Result<Self, PredictorError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(PredictorError::ArtifactError(format!(
                "model file not found: {:?}",
                path
            )));
        }

        let session = create_session_builder(config)?.commit_from_file(path)?;
        Self::validate_graph(&session)?;

        let input_name = session.inputs()[0].name().to_string();
        info!(
            "Classifier model loaded from {:?} (input '{}', {} outputs)",
            path,
            input_name,
            session.outputs().len()
        );

        Ok(Self {
            session: std::sync::Mutex::new(session),
            input_name,
        })
    }

    fn validate_graph(session: &Session) -> Result<(), PredictorError> {
        if session.inputs().len() != 1 {
            return Err(PredictorError::ModelError(format!(
                "Model must have exactly 1 feature input, found {}",
                session.inputs().len()
            )));
        }
        if session.outputs().len() < 2 {
            return Err(PredictorError::ModelError(format!(
                "Model must expose label and probability outputs, found {}",
                session.outputs().len()
            )));
        }
        Ok(())
    }

    /// Runs one inference pass, extracting the label and the per-class
    /// probabilities for the first (and only) row of the batch.
    fn run(&self, row: &[f32]) -> Result<(i64, Vec<f32>), PredictorError> {
        let input_array = Array2::from_shape_vec((1, row.len()), row.to_vec())
            .map_err(|e| PredictorError::ModelError(format!("Failed to create input array: {}", e)))?;

        let mut input_tensors = HashMap::new();
        input_tensors.insert(
            self.input_name.as_str(),
            Tensor::from_array(input_array)
                .map_err(|e| PredictorError::ModelError(format!("Failed to create input tensor: {}", e)))?,
        );

        let mut session = self
            .session
            .lock()
            .map_err(|e| PredictorError::ModelError(format!("Failed to lock model session: {}", e)))?;
        let outputs = session
            .run(input_tensors)
            .map_err(|e| PredictorError::ModelError(format!("Failed to run model: {}", e)))?;

        let (_, labels) = outputs[0]
            .try_extract_tensor::<i64>()
            .map_err(|e| PredictorError::ModelError(format!("Failed to extract label tensor: {}", e)))?;
        let label = labels
            .iter()
            .next()
            .copied()
            .ok_or_else(|| PredictorError::PredictionError("model returned an empty label tensor".into()))?;

        let (proba_shape, proba_data) = outputs[1]
            .try_extract_tensor::<f32>()
            .map_err(|e| PredictorError::ModelError(format!("Failed to extract probability tensor: {}", e)))?;
        let n_classes = proba_shape.last().map(|&d| d as usize).unwrap_or(0);
        let proba: Vec<f32> = proba_data
            .iter()
            .take(n_classes)
            .copied()
            .collect();
        if proba.is_empty() {
            return Err(PredictorError::PredictionError(
                "model returned an empty probability tensor".into(),
            ));
        }

        Ok((label, proba))
    }
}

impl ClassModel for HeartModel {
    fn predict(&self, row: &[f32]) -> Result<i64, PredictorError> {
        Ok(self.run(row)?.0)
    }

    fn predict_proba(&self, row: &[f32]) -> Result<Vec<f32>, PredictorError> {
        Ok(self.run(row)?.1)
    }

    fn predict_with_proba(&self, row: &[f32]) -> Result<(i64, Vec<f32>), PredictorError> {
        self.run(row)
    }
}
