pub mod eml_directory;
pub mod imap_source;

pub use eml_directory::EmlDirectorySource;
pub use imap_source::ImapSource;

use mail_parser::{HeaderName, MessageParser, MimeHeaders};
use shared_types::{RawAttachment, RawMessage};

/// Yields raw message envelopes one at a time; `Ok(None)` marks the end of the stream
pub trait MessageSource {
    fn next_message(&mut self) -> Result<Option<RawMessage>, SourceError>;
}

/// Failures of the mail transport; these abort a run
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("Failed to connect to IMAP server: {0}")]
    Connect(String),

    #[error("IMAP login failed: {0}")]
    Login(String),

    #[error("Failed to open mailbox {mailbox}: {message}")]
    Mailbox { mailbox: String, message: String },

    #[error("Failed to fetch message {id}: {message}")]
    Fetch { id: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse RFC 822 bytes into a [`RawMessage`], keeping header values undecoded
pub fn parse_raw_message(id: &str, raw: &[u8]) -> Option<RawMessage> {
    let parsed = MessageParser::default().parse(raw)?;

    let body_text = (0..)
        .map_while(|pos| parsed.body_text(pos))
        .collect::<Vec<_>>()
        .join("\n");

    let attachments = parsed
        .attachments()
        .filter_map(|part| {
            let filename = part.attachment_name()?.to_string();
            let content_type = part.content_type().map(|ct| match ct.subtype() {
                Some(subtype) => format!("{}/{}", ct.ctype(), subtype),
                None => ct.ctype().to_string(),
            });
            Some(RawAttachment {
                filename,
                content_type,
                content: part.contents().to_vec(),
            })
        })
        .collect();

    Some(RawMessage {
        id: id.to_string(),
        subject: trimmed(parsed.header_raw(HeaderName::Subject)).unwrap_or_default(),
        sender: trimmed(parsed.header_raw(HeaderName::From)).unwrap_or_default(),
        date: trimmed(parsed.header_raw(HeaderName::Date)),
        body_text,
        attachments,
    })
}

fn trimmed(value: Option<&str>) -> Option<String> {
    value.map(|value| value.trim().to_string())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const APPLICATION_EML: &str = "From: Jane Doe <jane.doe@example.com>\r
To: hr@example.com\r
Subject: =?UTF-8?B?QXBwbGljYXRpb24gZm9yOiBCYWNrZW5kIEVuZ2luZWVy?=\r
Date: Tue, 1 Jul 2003 10:52:37 +0200\r
MIME-Version: 1.0\r
Content-Type: multipart/mixed; boundary=\"XYZ\"\r
\r
--XYZ\r
Content-Type: text/plain; charset=utf-8\r
\r
Hello, please find my resume attached.\r
--XYZ\r
Content-Type: text/plain; name=\"resume.txt\"\r
Content-Disposition: attachment; filename=\"resume.txt\"\r
\r
Name: Jane Doe\r
Location: Austin, TX\r
6 years of experience\r
--XYZ--\r
";

    #[test]
    fn test_parse_raw_message_keeps_encoded_headers() {
        let message = parse_raw_message("42", APPLICATION_EML.as_bytes()).unwrap();

        assert_eq!(message.id, "42");
        assert_eq!(
            message.subject,
            "=?UTF-8?B?QXBwbGljYXRpb24gZm9yOiBCYWNrZW5kIEVuZ2luZWVy?="
        );
        assert_eq!(message.sender, "Jane Doe <jane.doe@example.com>");
        assert_eq!(message.date.as_deref(), Some("Tue, 1 Jul 2003 10:52:37 +0200"));
        assert!(message.body_text.contains("please find my resume attached"));
    }

    #[test]
    fn test_parse_raw_message_collects_attachments() {
        let message = parse_raw_message("42", APPLICATION_EML.as_bytes()).unwrap();

        assert_eq!(message.attachments.len(), 1);
        let attachment = &message.attachments[0];
        assert_eq!(attachment.filename, "resume.txt");
        assert_eq!(attachment.content_type.as_deref(), Some("text/plain"));
        let text = String::from_utf8_lossy(&attachment.content);
        assert!(text.contains("Location: Austin, TX"));
    }

    #[test]
    fn test_parse_plain_message_without_attachments() {
        let raw = "From: a@b.com\r\nSubject: Hi\r\n\r\nJust text\r\n";
        let message = parse_raw_message("1", raw.as_bytes()).unwrap();

        assert_eq!(message.subject, "Hi");
        assert!(message.date.is_none());
        assert!(message.attachments.is_empty());
        assert!(message.body_text.contains("Just text"));
    }
}
