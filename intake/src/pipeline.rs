use chrono::{DateTime, Utc};
use extractors::{
    assemble_record, build_corpus, decode_header, extract_candidate_fields, rating_from_years,
    DocumentKind, DocumentParser, DocumentTextExtractor, ExtractionInput, MessageFilter,
    MessageMetadata,
};
use shared_types::{CandidateRecord, RawMessage};

use crate::config::IntakeConfig;
use crate::integrations::{MessageSource, SourceError};
use crate::storage::{AttachmentStore, CsvRecordStore, StoreError};

/// What happened to a single message
#[derive(Debug, Clone, PartialEq)]
pub enum MessageOutcome {
    /// Rejected by the subject/sender filter
    Skipped,
    Recorded(CandidateRecord),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub seen: usize,
    pub skipped: usize,
    pub recorded: usize,
    pub failed: usize,
}

/// Filter, extract and persist messages one at a time
pub struct IntakePipeline {
    filter: MessageFilter,
    documents: Box<dyn DocumentTextExtractor>,
    attachments: AttachmentStore,
    records: CsvRecordStore,
}

impl IntakePipeline {
    pub fn new(
        filter: MessageFilter,
        documents: Box<dyn DocumentTextExtractor>,
        attachments: AttachmentStore,
        records: CsvRecordStore,
    ) -> Self {
        Self {
            filter,
            documents,
            attachments,
            records,
        }
    }

    pub fn from_config(config: &IntakeConfig) -> Self {
        Self::new(
            MessageFilter::new(&config.filter.subject_keyword, &config.filter.sender_keyword),
            Box::new(DocumentParser::new()),
            AttachmentStore::new(&config.storage.attachments_dir),
            CsvRecordStore::new(&config.storage.output_path),
        )
    }

    pub fn records(&self) -> &CsvRecordStore {
        &self.records
    }

    /// Drain `source`. Source failures abort the run; a failure on one message is
    /// logged and counted, and the run moves on to the next.
    pub fn run(&self, source: &mut dyn MessageSource) -> Result<RunSummary, SourceError> {
        let mut summary = RunSummary::default();

        while let Some(message) = source.next_message()? {
            summary.seen += 1;
            match self.process_message(&message) {
                Ok(MessageOutcome::Skipped) => summary.skipped += 1,
                Ok(MessageOutcome::Recorded(_)) => summary.recorded += 1,
                Err(e) => {
                    tracing::error!("Failed to record message {}: {}", message.id, e);
                    summary.failed += 1;
                }
            }
        }

        tracing::info!(
            "Processed {} messages: {} recorded, {} skipped, {} failed",
            summary.seen,
            summary.recorded,
            summary.skipped,
            summary.failed
        );

        Ok(summary)
    }

    pub fn process_message(&self, message: &RawMessage) -> Result<MessageOutcome, StoreError> {
        self.process_message_at(message, Utc::now())
    }

    fn process_message_at(
        &self,
        message: &RawMessage,
        now: DateTime<Utc>,
    ) -> Result<MessageOutcome, StoreError> {
        let subject = decode_header(&message.subject);
        let sender = decode_header(&message.sender);

        if !self.filter.passes(&subject, &sender) {
            tracing::debug!("Skipping message {}: {:?} from {:?}", message.id, subject, sender);
            return Ok(MessageOutcome::Skipped);
        }

        let date = message.date.as_deref().map(decode_header);

        let mut attachment_paths = Vec::new();
        let mut attachment_texts = Vec::new();
        for attachment in &message.attachments {
            let filename = decode_header(&attachment.filename);

            match self.attachments.save(&message.id, &filename, &attachment.content) {
                Ok(path) => attachment_paths.push(path),
                Err(e) => {
                    tracing::warn!(
                        "Failed to store attachment {} of message {}: {}",
                        filename,
                        message.id,
                        e
                    );
                }
            }

            let kind = DocumentKind::detect(&filename, attachment.content_type.as_deref());
            attachment_texts.push(self.documents.extract_text(&attachment.content, kind));
        }

        let corpus = build_corpus(&message.body_text, &attachment_texts);
        let fields = extract_candidate_fields(&ExtractionInput {
            corpus: &corpus,
            subject: &subject,
            sender: &sender,
            body_text: &message.body_text,
        });
        let rating = rating_from_years(fields.years_experience);

        let metadata = MessageMetadata {
            subject: &subject,
            date: date.as_deref(),
            attachment_paths: &attachment_paths,
        };
        let record = assemble_record(&metadata, &fields, rating, now);

        self.records.append(&record)?;
        tracing::info!("Added: {} | {} | {}", record.name, record.email, record.rating);

        Ok(MessageOutcome::Recorded(record))
    }
}
