pub mod http;
pub mod unconfigured;

use crate::config::{AppConfig, ConfigError};
use futures::future::BoxFuture;
use shared::{PatientRecord, PredictionResult};
use std::sync::Arc;

pub use http::HttpPredictor;
pub use unconfigured::UnconfiguredPredictor;

#[derive(Debug, thiserror::Error)]
pub enum PredictorError {
    #[error("prediction service not configured")]
    NotConfigured,
    #[error("request to prediction service failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("prediction service answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("malformed prediction: {0}")]
    Malformed(String),
}

/// Source of diabetes predictions.
///
/// Implementations are shared across workers behind an `Arc` and must not
/// keep per-request state.
pub trait Predictor: Send + Sync {
    fn predict<'a>(
        &'a self,
        record: &'a PatientRecord,
    ) -> BoxFuture<'a, Result<PredictionResult, PredictorError>>;

    /// Fixed example record for trying the form out.
    fn sample_record(&self) -> BoxFuture<'_, Result<PatientRecord, PredictorError>>;

    fn name(&self) -> &str;
}

/// Picks the predictor for the configured service, or the unconfigured
/// fallback when no URL is set.
pub fn from_config(config: &AppConfig) -> Result<Arc<dyn Predictor>, ConfigError> {
    match config.predictor_base_url()? {
        Some(base_url) => {
            log::info!("Using prediction service at {}", base_url);
            Ok(Arc::new(HttpPredictor::new(base_url)))
        }
        None => {
            log::warn!("PREDICTOR_URL is not set, predictions will be unavailable");
            Ok(Arc::new(UnconfiguredPredictor))
        }
    }
}
