pub mod display;
pub mod document;
pub mod patient;
pub mod prediction;
pub mod risk;

pub use display::{DisplayBundle, QuickStats, format_percentage, number_recommendations};
pub use document::{upload_notice, DocumentKind, DocumentSummary};
pub use patient::{PatientRecord, RecordError};
pub use prediction::PredictionResult;
pub use risk::{RiskScoreError, RiskTier};

use serde::{Deserialize, Serialize};

/// Body returned by the API for every failed request.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}
