pub mod config;
pub mod integrations;
pub mod pipeline;
pub mod storage;

pub use pipeline::{IntakePipeline, MessageOutcome, RunSummary};
