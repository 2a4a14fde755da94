pub mod candidate;
pub mod extraction;
pub mod message;

pub use candidate::{format_years, CandidateRecord, Rating, CANDIDATE_COLUMNS, UNKNOWN};
pub use extraction::ExtractionError;
pub use message::{RawAttachment, RawMessage};
