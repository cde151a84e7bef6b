use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::json;

use cardio::{ClassModel, FeatureVector, Predictor, PredictorError, Scaler};

struct ThresholdModel;

impl ClassModel for ThresholdModel {
    fn predict(&self, row: &[f32]) -> Result<i64, PredictorError> {
        Ok(i64::from(row.iter().sum::<f32>() > 0.0))
    }

    fn predict_proba(&self, row: &[f32]) -> Result<Vec<f32>, PredictorError> {
        if self.predict(row)? == 1 {
            Ok(vec![0.25, 0.75])
        } else {
            Ok(vec![0.75, 0.25])
        }
    }
}

fn bench_feature_extraction(c: &mut Criterion) {
    let body = json!({
        "age": 63, "sex": 1, "cp": 3, "trestbps": 145, "chol": 233,
        "fbs": 1, "restecg": 0, "thalch": 150, "exang": 0, "oldpeak": 2.3
    });

    c.bench_function("feature_extraction", |b| {
        b.iter(|| FeatureVector::from_json(black_box(&body)).unwrap())
    });
}

fn bench_predict(c: &mut Criterion) {
    let predictor = Predictor::builder()
        .with_model(Box::new(ThresholdModel))
        .with_scaler(Scaler::from_params(vec![54.0; 10], vec![9.0; 10]).unwrap())
        .build()
        .unwrap();
    let features =
        FeatureVector::from_row([63.0, 1.0, 3.0, 145.0, 233.0, 1.0, 0.0, 150.0, 0.0, 2.3]);

    c.bench_function("scale_and_predict", |b| {
        b.iter(|| predictor.predict(black_box(&features)).unwrap())
    });
}

criterion_group!(benches, bench_feature_extraction, bench_predict);
criterion_main!(benches);
