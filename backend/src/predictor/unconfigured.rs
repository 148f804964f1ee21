use super::{Predictor, PredictorError};
use futures::future::{self, BoxFuture, FutureExt};
use shared::{PatientRecord, PredictionResult};

/// Stand-in used when no prediction service is configured. Every call fails.
pub struct UnconfiguredPredictor;

impl Predictor for UnconfiguredPredictor {
    fn predict<'a>(
        &'a self,
        _record: &'a PatientRecord,
    ) -> BoxFuture<'a, Result<PredictionResult, PredictorError>> {
        future::ready(Err(PredictorError::NotConfigured)).boxed()
    }

    fn sample_record(&self) -> BoxFuture<'_, Result<PatientRecord, PredictorError>> {
        future::ready(Err(PredictorError::NotConfigured)).boxed()
    }

    fn name(&self) -> &str {
        "unconfigured"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn always_fails() {
        let predictor = UnconfiguredPredictor;
        let record = PatientRecord::default();
        assert!(matches!(
            predictor.predict(&record).await,
            Err(PredictorError::NotConfigured)
        ));
        assert!(predictor.sample_record().await.is_err());
    }
}
