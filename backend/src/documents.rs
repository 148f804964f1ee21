use actix_multipart::Multipart;
use futures::{StreamExt, TryStreamExt};
use shared::{DocumentKind, DocumentSummary};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("No document was uploaded")]
    MissingFile,
    #[error("Unsupported document type: {0} (expected PDF, TXT or DOCX)")]
    UnsupportedType(String),
    #[error("Document exceeds the {limit} byte limit")]
    TooLarge { limit: usize },
    #[error("Malformed upload: {0}")]
    Multipart(String),
}

/// What is kept of an upload once it has been read.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub size: usize,
}

/// Reads the first file field of the form. The bytes are counted against
/// `max_size` and then discarded.
pub async fn read_first_file(
    payload: &mut Multipart,
    max_size: usize,
) -> Result<UploadedDocument, DocumentError> {
    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| DocumentError::Multipart(e.to_string()))?
    {
        let Some(file_name) = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string)
        else {
            // Plain form values are skipped.
            continue;
        };

        let kind = DocumentKind::from_file_name(&file_name)
            .ok_or_else(|| DocumentError::UnsupportedType(file_name.clone()))?;

        let mut size = 0usize;
        while let Some(chunk) = field.next().await {
            let data = chunk.map_err(|e| DocumentError::Multipart(e.to_string()))?;
            size += data.len();
            if size > max_size {
                return Err(DocumentError::TooLarge { limit: max_size });
            }
        }

        return Ok(UploadedDocument {
            file_name,
            kind,
            size,
        });
    }

    Err(DocumentError::MissingFile)
}

/// Document analysis is a placeholder: every accepted upload gets the same
/// summary.
pub fn analyze(document: &UploadedDocument) -> DocumentSummary {
    log::info!(
        "Document '{}' ({}, {} bytes) received for analysis",
        document.file_name,
        document.kind,
        document.size
    );
    DocumentSummary::placeholder(document.file_name.clone())
}
