pub mod attachments;
pub mod record_store;

pub use attachments::AttachmentStore;
pub use record_store::CsvRecordStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset {path} has unexpected columns: {found}")]
    SchemaMismatch { path: String, found: String },

    #[error("Failed to replace dataset {path}: {source}")]
    Persist {
        path: String,
        source: std::io::Error,
    },

    #[error("Record store lock poisoned")]
    Poisoned,
}
