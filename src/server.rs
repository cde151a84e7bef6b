//! The HTTP surface: one prediction endpoint plus the static front-end
//! bundle. Errors from the inference core are translated to HTTP only
//! here; everything below the handlers speaks `Result`.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use log::info;
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ServerConfig;
use crate::predictor::{FeatureVector, Predictor};

#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<Predictor>,
}

#[derive(Debug, Serialize)]
struct PredictResponse {
    prediction: i64,
    probability: f32,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    status: &'static str,
    message: String,
}

fn error_response(message: String) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            status: "error",
            message,
        }),
    )
        .into_response()
}

/// Handles `POST /predict`: strict field extraction, then inference.
/// Any failure along the way becomes a 400 with the error's display text.
async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(body) = match payload {
        Ok(json) => json,
        Err(rejection) => return error_response(rejection.body_text()),
    };

    let result = FeatureVector::from_json(&body).and_then(|features| state.predictor.predict(&features));

    match result {
        Ok(prediction) => (
            StatusCode::OK,
            Json(PredictResponse {
                prediction: prediction.label,
                probability: prediction.probability,
                status: "success",
            }),
        )
            .into_response(),
        Err(e) => error_response(e.to_string()),
    }
}

/// Builds the application router.
///
/// Static serving mirrors the front-end bundle layout: `/` is always the
/// index document, and any other path is looked up under `dist/assets/`
/// first, then the bundle root, then 404. Path sanitization is whatever
/// `ServeDir` provides.
pub fn build_router(predictor: Arc<Predictor>, dist_dir: &Path) -> Router {
    let state = AppState { predictor };
    let bundle = ServeDir::new(dist_dir.join("assets")).fallback(ServeDir::new(dist_dir));

    Router::new()
        .route("/predict", post(predict))
        .route_service("/", ServeFile::new(dist_dir.join("index.html")))
        .fallback_service(bundle)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves until the process is stopped.
pub async fn serve(config: &ServerConfig, predictor: Arc<Predictor>) -> std::io::Result<()> {
    let app = build_router(predictor, &config.dist_dir);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Heart disease prediction API is running on http://localhost:{}",
        config.port
    );
    axum::serve(listener, app).await
}
