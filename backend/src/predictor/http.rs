use super::{Predictor, PredictorError};
use futures::future::{BoxFuture, FutureExt};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use shared::{PatientRecord, PredictionResult};
use url::Url;

/// Calls an external prediction service over HTTP.
///
/// `POST {base}/predict` takes a [`PatientRecord`] and answers with a
/// [`PredictionResult`]; `GET {base}/sample` answers with a record.
#[derive(Clone)]
pub struct HttpPredictor {
    client: Client,
    base_url: Url,
}

impl HttpPredictor {
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, PredictorError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PredictorError::Status {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| PredictorError::Malformed(e.to_string()))
    }

    async fn post_predict(&self, record: &PatientRecord) -> Result<PredictionResult, PredictorError> {
        let url = self.base_url.join("predict")?;
        log::debug!("POST {}", url);
        let response = self.client.post(url).json(record).send().await?;
        Self::decode(response).await
    }

    async fn get_sample(&self) -> Result<PatientRecord, PredictorError> {
        let url = self.base_url.join("sample")?;
        log::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        Self::decode(response).await
    }
}

impl Predictor for HttpPredictor {
    fn predict<'a>(
        &'a self,
        record: &'a PatientRecord,
    ) -> BoxFuture<'a, Result<PredictionResult, PredictorError>> {
        self.post_predict(record).boxed()
    }

    fn sample_record(&self) -> BoxFuture<'_, Result<PatientRecord, PredictorError>> {
        self.get_sample().boxed()
    }

    fn name(&self) -> &str {
        "http"
    }
}
