use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// File types the document upload accepts.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    Txt,
    Docx,
}

impl DocumentKind {
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "txt" => Some(DocumentKind::Txt),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    /// Value for the `accept` attribute of the file input.
    pub fn accept_attribute() -> &'static str {
        ".pdf,.txt,.docx"
    }
}

/// Summary shown after "analyzing" an uploaded document.
///
/// Analysis is not implemented: the findings are the same for every file.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DocumentSummary {
    pub file_name: String,
    pub document_type: String,
    pub key_findings: String,
    pub critical_alerts: String,
    pub recommendations: String,
}

impl DocumentSummary {
    pub fn placeholder(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            document_type: "Medical Report".to_string(),
            key_findings: "Normal glucose levels, slightly elevated blood pressure".to_string(),
            critical_alerts: "None detected".to_string(),
            recommendations: "Regular monitoring suggested".to_string(),
        }
    }
}

/// Confirmation shown as soon as a document is picked.
pub fn upload_notice(file_name: &str) -> String {
    format!("File '{}' uploaded successfully!", file_name)
}
