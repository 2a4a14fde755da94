use serde::{Deserialize, Serialize};

/// A message envelope as handed over by a message source.
///
/// Header values are kept as they appeared on the wire (possibly RFC 2047
/// encoded); decoding happens in the extraction layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawMessage {
    /// Source-assigned identifier (IMAP UID, `.eml` file stem, ...)
    pub id: String,

    // Headers
    pub subject: String,
    pub sender: String,
    pub date: Option<String>,

    // Content
    pub body_text: String,
    pub attachments: Vec<RawAttachment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawAttachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub content: Vec<u8>,
}
