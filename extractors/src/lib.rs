//! Extractors Crate
//!
//! Turns a raw inbound message into a candidate record: header decoding,
//! scope filtering, corpus assembly from body and attachments, heuristic field
//! extraction, seniority classification and record assembly.
//!
//! # Example
//!
//! ```rust,ignore
//! use extractors::{build_corpus, extract_candidate_fields, rating_from_years, ExtractionInput};
//!
//! let corpus = build_corpus(&body, &attachment_texts);
//! let fields = extract_candidate_fields(&ExtractionInput { corpus: &corpus, ..input });
//! let rating = rating_from_years(fields.years_experience);
//! ```

pub mod assembler;
pub mod candidate_fields;
pub mod classifier;
pub mod corpus;
pub mod document;
pub mod header;
pub mod message_filter;

pub use assembler::{assemble_record, MessageMetadata};
pub use candidate_fields::{extract_candidate_fields, CandidateFields, ExtractionInput};
pub use classifier::rating_from_years;
pub use corpus::build_corpus;
pub use document::{DocumentKind, DocumentParser, DocumentTextExtractor};
pub use header::decode_header;
pub use message_filter::MessageFilter;
