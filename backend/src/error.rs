use crate::assessment::AssessmentError;
use crate::documents::DocumentError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use shared::{ErrorResponse, RecordError};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid patient record: {0}")]
    InvalidRecord(#[from] RecordError),
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidRecord(_) => StatusCode::BAD_REQUEST,
            ApiError::Assessment(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Document(DocumentError::TooLarge { .. }) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Document(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let hint = match self {
            ApiError::Assessment(e) => e.hint().map(str::to_string),
            _ => None,
        };
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            hint,
        })
    }
}
