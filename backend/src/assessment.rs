use crate::predictor::{Predictor, PredictorError};
use shared::{DisplayBundle, PatientRecord, PredictionResult};
use std::sync::Arc;

pub const SETUP_HINT: &str =
    "Make sure the prediction service is installed and running, and that PREDICTOR_URL points to it.";

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("Error making prediction: {0}")]
    PredictorUnavailable(String),
    #[error("Sample data not available")]
    SampleDataUnavailable,
}

impl AssessmentError {
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            AssessmentError::PredictorUnavailable(_) => Some(SETUP_HINT),
            AssessmentError::SampleDataUnavailable => None,
        }
    }
}

/// Turns patient records into display bundles through a [`Predictor`].
///
/// One predictor call per assessment, never retried.
#[derive(Clone)]
pub struct RiskAssessor {
    predictor: Arc<dyn Predictor>,
}

impl RiskAssessor {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self { predictor }
    }

    pub fn predictor_name(&self) -> &str {
        self.predictor.name()
    }

    pub async fn assess(&self, record: &PatientRecord) -> Result<DisplayBundle, AssessmentError> {
        let result = self.predictor.predict(record).await.map_err(|e| {
            log::error!("Predictor '{}' failed: {}", self.predictor.name(), e);
            AssessmentError::PredictorUnavailable(e.to_string())
        })?;

        Self::bundle(&result).map_err(|e| {
            log::error!("Predictor '{}' returned unusable result: {}", self.predictor.name(), e);
            AssessmentError::PredictorUnavailable(e.to_string())
        })
    }

    pub async fn sample(&self) -> Result<PatientRecord, AssessmentError> {
        self.predictor.sample_record().await.map_err(|e| {
            log::warn!("Sample record unavailable from '{}': {}", self.predictor.name(), e);
            AssessmentError::SampleDataUnavailable
        })
    }

    fn bundle(result: &PredictionResult) -> Result<DisplayBundle, PredictorError> {
        if !(0.0..=1.0).contains(&result.confidence) {
            return Err(PredictorError::Malformed(format!(
                "confidence {} is outside [0, 1]",
                result.confidence
            )));
        }
        DisplayBundle::build(result).map_err(|e| PredictorError::Malformed(e.to_string()))
    }
}
