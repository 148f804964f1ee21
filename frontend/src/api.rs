use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{DisplayBundle, DocumentSummary, ErrorResponse, PatientRecord, QuickStats};
use web_sys::{File, FormData};

fn client_error(message: impl std::fmt::Display) -> ErrorResponse {
    ErrorResponse {
        error: message.to_string(),
        hint: None,
    }
}

/// Decodes a successful body, or the server's `ErrorResponse` otherwise.
async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ErrorResponse> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| client_error(format!("Failed to parse response: {}", e)));
    }

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(serde_json::from_str::<ErrorResponse>(&body)
        .unwrap_or_else(|_| client_error(format!("Server error: {} - {}", status, body))))
}

async fn send<T: DeserializeOwned>(request: Request) -> Result<T, ErrorResponse> {
    let response = request
        .send()
        .await
        .map_err(|e| client_error(format!("Network error: {}", e)))?;
    read_response(response).await
}

pub async fn predict(record: &PatientRecord) -> Result<DisplayBundle, ErrorResponse> {
    let request = Request::post("/api/predict")
        .json(record)
        .map_err(|e| client_error(format!("Failed to build request: {}", e)))?;
    send(request).await
}

pub async fn fetch_sample() -> Result<PatientRecord, ErrorResponse> {
    send(Request::get("/api/sample").build().map_err(client_error)?).await
}

pub async fn fetch_stats() -> Result<QuickStats, ErrorResponse> {
    send(Request::get("/api/stats").build().map_err(client_error)?).await
}

pub async fn analyze_document(file: &File) -> Result<DocumentSummary, ErrorResponse> {
    let form_data = FormData::new().map_err(|_| client_error("Failed to create form data"))?;
    form_data
        .append_with_blob_and_filename("document", file, &file.name())
        .map_err(|_| client_error("Failed to attach document"))?;

    let request = Request::post("/api/documents/analyze")
        .body(form_data)
        .map_err(|e| client_error(format!("Failed to build request: {}", e)))?;
    send(request).await
}
