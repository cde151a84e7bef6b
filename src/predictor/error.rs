use ort::Error as OrtError;

/// Represents the different types of errors that can occur while loading
/// artifacts or serving predictions.
#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    /// Error occurred while reading or deserializing an artifact file
    #[error("Artifact error: {0}")]
    ArtifactError(String),
    /// Error occurred while loading or running the ONNX model
    #[error("Model error: {0}")]
    ModelError(String),
    /// Error occurred while making predictions
    #[error("Prediction error: {0}")]
    PredictionError(String),
    /// Error occurred due to invalid input data
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<OrtError> for PredictorError {
    fn from(err: OrtError) -> Self {
        PredictorError::ModelError(err.to_string())
    }
}
