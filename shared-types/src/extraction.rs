/// Extraction error types
#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("Document error: {0}")]
    DocumentError(String),
}
