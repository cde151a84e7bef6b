use ort::session::builder::{GraphOptimizationLevel, SessionBuilder};
use ort::session::Session;
use ort::Result as OrtResult;
use std::sync::Once;

static INIT: Once = Once::new();

/// Threading configuration for ONNX Runtime sessions. Zero means the
/// runtime picks its own defaults, which is right for a service running
/// one small classifier.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuntimeConfig {
    pub inter_threads: usize,
    pub intra_threads: usize,
}

pub(crate) fn ensure_initialized() -> OrtResult<()> {
    INIT.call_once(|| {
        ort::init().with_name("cardio").commit();
    });
    Ok(())
}

/// Builds a session builder against the process-wide ONNX environment.
/// Graph optimization is always fully enabled; the model is loaded once
/// at startup so build time is irrelevant next to inference latency.
pub fn create_session_builder(config: &RuntimeConfig) -> OrtResult<SessionBuilder> {
    ensure_initialized()?;
    let mut builder = Session::builder()?;

    if config.inter_threads > 0 {
        builder = builder.with_inter_threads(config.inter_threads)?;
    }
    if config.intra_threads > 0 {
        builder = builder.with_intra_threads(config.intra_threads)?;
    }

    builder = builder.with_optimization_level(GraphOptimizationLevel::Level3)?;
    Ok(builder)
}
