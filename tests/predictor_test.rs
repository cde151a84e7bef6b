use std::io::Write;

use cardio::{ClassModel, FeatureVector, Predictor, PredictorError, FEATURE_ORDER};

/// Positive class when the scaled features sum above zero.
struct ThresholdModel;

impl ClassModel for ThresholdModel {
    fn predict(&self, row: &[f32]) -> Result<i64, PredictorError> {
        Ok(i64::from(row.iter().sum::<f32>() > 0.0))
    }

    fn predict_proba(&self, row: &[f32]) -> Result<Vec<f32>, PredictorError> {
        if self.predict(row)? == 1 {
            Ok(vec![0.1, 0.9])
        } else {
            Ok(vec![0.8, 0.2])
        }
    }
}

fn scaler_file(mean: f32, scale: f32) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"mean": {:?}, "scale": {:?}, "feature_names": {:?}}}"#,
        vec![mean; 10],
        vec![scale; 10],
        FEATURE_ORDER
    )
    .unwrap();
    file
}

#[test]
fn test_scaling_feeds_the_model() -> Result<(), PredictorError> {
    // With a mean of 5.0 a row of ones standardizes to negative values,
    // so the threshold model must see the scaled row, not the raw one.
    let file = scaler_file(5.0, 1.0);
    let predictor = Predictor::builder()
        .with_model(Box::new(ThresholdModel))
        .with_scaler_file(file.path())?
        .build()?;

    let prediction = predictor.predict(&FeatureVector::from_row([1.0; 10]))?;
    assert_eq!(prediction.label, 0);
    assert_eq!(prediction.probability, 0.8);

    let prediction = predictor.predict(&FeatureVector::from_row([9.0; 10]))?;
    assert_eq!(prediction.label, 1);
    assert_eq!(prediction.probability, 0.9);
    Ok(())
}

#[test]
fn test_prediction_is_deterministic() -> Result<(), PredictorError> {
    let file = scaler_file(0.0, 1.0);
    let predictor = Predictor::builder()
        .with_model(Box::new(ThresholdModel))
        .with_scaler_file(file.path())?
        .build()?;

    let features = FeatureVector::from_row([63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3]);
    let first = predictor.predict(&features)?;
    let second = predictor.predict(&features)?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_corrupt_scaler_artifact_fails_build() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json at all").unwrap();

    let result = Predictor::builder()
        .with_model(Box::new(ThresholdModel))
        .with_scaler_file(file.path());
    assert!(matches!(result, Err(PredictorError::ArtifactError(_))));
}
