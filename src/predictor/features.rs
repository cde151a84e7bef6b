use serde_json::Value;

use super::error::PredictorError;

/// The positional order the classifier was trained with. Every row handed
/// to the scaler and the model must follow this order exactly.
pub const FEATURE_ORDER: [&str; 10] = [
    "age", "sex", "cp", "trestbps", "chol", "fbs", "restecg", "thalch", "exang", "oldpeak",
];

/// One patient record, in the model's canonical feature order.
///
/// Construction from JSON is strict: every field must be present and
/// numeric. Unknown extra fields are ignored. This replaces the loose
/// column coercion a dynamic data frame would do, where a missing key
/// silently becomes a hole in the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector {
    pub age: f32,
    pub sex: f32,
    pub cp: f32,
    pub trestbps: f32,
    pub chol: f32,
    pub fbs: f32,
    pub restecg: f32,
    pub thalch: f32,
    pub exang: f32,
    pub oldpeak: f32,
}

impl FeatureVector {
    /// Extracts a feature vector from a JSON object, field by field.
    ///
    /// # Errors
    /// - `ValidationError` if the value is not a JSON object
    /// - `ValidationError` if any of the 10 fields is missing
    /// - `ValidationError` if any field is present but not numeric
    pub fn from_json(value: &Value) -> Result<Self, PredictorError> {
        let object = value.as_object().ok_or_else(|| {
            PredictorError::ValidationError("request body must be a JSON object".into())
        })?;

        let mut row = [0f32; 10];
        for (slot, name) in row.iter_mut().zip(FEATURE_ORDER) {
            let field = object.get(name).ok_or_else(|| {
                PredictorError::ValidationError(format!("missing required field '{}'", name))
            })?;
            let number = field.as_f64().ok_or_else(|| {
                PredictorError::ValidationError(format!(
                    "field '{}' must be numeric, got {}",
                    name, field
                ))
            })?;
            *slot = number as f32;
        }

        Ok(Self::from_row(row))
    }

    /// Builds a feature vector from values already in canonical order.
    pub fn from_row(row: [f32; 10]) -> Self {
        Self {
            age: row[0],
            sex: row[1],
            cp: row[2],
            trestbps: row[3],
            chol: row[4],
            fbs: row[5],
            restecg: row[6],
            thalch: row[7],
            exang: row[8],
            oldpeak: row[9],
        }
    }

    /// Returns the values in canonical order, ready for the scaler.
    pub fn as_row(&self) -> [f32; 10] {
        [
            self.age,
            self.sex,
            self.cp,
            self.trestbps,
            self.chol,
            self.fbs,
            self.restecg,
            self.thalch,
            self.exang,
            self.oldpeak,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "age": 63, "sex": 1, "cp": 3, "trestbps": 145, "chol": 233,
            "fbs": 1, "restecg": 0, "thalch": 150, "exang": 0, "oldpeak": 2.3
        })
    }

    #[test]
    fn test_parse_well_formed_record() {
        let features = FeatureVector::from_json(&sample()).unwrap();
        assert_eq!(features.age, 63.0);
        assert_eq!(features.oldpeak, 2.3);
        assert_eq!(
            features.as_row(),
            [63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3]
        );
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("chol");
        let err = FeatureVector::from_json(&value).unwrap_err();
        assert!(matches!(err, PredictorError::ValidationError(_)));
        assert!(err.to_string().contains("chol"));
    }

    #[test]
    fn test_non_numeric_field_is_rejected() {
        let mut value = sample();
        value["trestbps"] = json!("high");
        let err = FeatureVector::from_json(&value).unwrap_err();
        assert!(matches!(err, PredictorError::ValidationError(_)));
        assert!(err.to_string().contains("trestbps"));
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let mut value = sample();
        value["notes"] = json!("seen at clinic");
        assert!(FeatureVector::from_json(&value).is_ok());
    }

    #[test]
    fn test_non_object_body_is_rejected() {
        for value in [json!([1, 2, 3]), json!(42), json!("text"), json!(null)] {
            assert!(FeatureVector::from_json(&value).is_err());
        }
    }
}
