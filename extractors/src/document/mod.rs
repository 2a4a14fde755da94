mod docx;
mod pdf;

pub use docx::DocxParser;
pub use pdf::PdfParser;

use std::path::Path;

/// Attachment formats the document parser knows how to turn into text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
    Unsupported,
}

impl DocumentKind {
    /// Classify by file extension first, then by declared MIME type
    pub fn detect(filename: &str, content_type: Option<&str>) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        match extension.as_deref() {
            Some("pdf") => return DocumentKind::Pdf,
            Some("docx") => return DocumentKind::Docx,
            Some("txt") | Some("text") | Some("md") => return DocumentKind::PlainText,
            _ => {}
        }

        let content_type = content_type.unwrap_or_default().to_lowercase();
        if content_type.contains("application/pdf") {
            DocumentKind::Pdf
        } else if content_type.contains("wordprocessingml.document") {
            DocumentKind::Docx
        } else if content_type.starts_with("text/plain") {
            DocumentKind::PlainText
        } else {
            DocumentKind::Unsupported
        }
    }
}

/// Turns attachment bytes into plain text.
///
/// Implementations never fail: anything that cannot be read yields an empty string.
pub trait DocumentTextExtractor {
    fn extract_text(&self, content: &[u8], kind: DocumentKind) -> String;
}

/// Default extractor handling PDF, DOCX and plain text attachments
pub struct DocumentParser {
    pdf_parser: PdfParser,
    docx_parser: DocxParser,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self {
            pdf_parser: PdfParser::new(),
            docx_parser: DocxParser::new(),
        }
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentTextExtractor for DocumentParser {
    fn extract_text(&self, content: &[u8], kind: DocumentKind) -> String {
        let result = match kind {
            DocumentKind::Pdf => self.pdf_parser.parse(content),
            DocumentKind::Docx => self.docx_parser.parse(content),
            DocumentKind::PlainText => Ok(String::from_utf8_lossy(content).into_owned()),
            DocumentKind::Unsupported => {
                tracing::warn!("Unsupported attachment type, skipping text extraction");
                return String::new();
            }
        };

        match result {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Failed to extract {:?} attachment text: {}", kind, e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(DocumentKind::detect("resume.PDF", None), DocumentKind::Pdf);
        assert_eq!(DocumentKind::detect("cv.docx", None), DocumentKind::Docx);
        assert_eq!(DocumentKind::detect("notes.txt", None), DocumentKind::PlainText);
        assert_eq!(DocumentKind::detect("photo.jpg", None), DocumentKind::Unsupported);
    }

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect("resume", Some("application/pdf")),
            DocumentKind::Pdf
        );
        assert_eq!(
            DocumentKind::detect(
                "cv",
                Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document")
            ),
            DocumentKind::Docx
        );
        assert_eq!(
            DocumentKind::detect("legacy.doc", Some("application/msword")),
            DocumentKind::Unsupported
        );
    }

    #[test]
    fn test_plain_text_passthrough() {
        let parser = DocumentParser::new();
        let text = parser.extract_text("Location: Pune".as_bytes(), DocumentKind::PlainText);
        assert_eq!(text, "Location: Pune");
    }

    #[test]
    fn test_failures_yield_empty_text() {
        let parser = DocumentParser::new();
        assert_eq!(parser.extract_text(b"garbage", DocumentKind::Pdf), "");
        assert_eq!(parser.extract_text(b"garbage", DocumentKind::Docx), "");
        assert_eq!(parser.extract_text(b"garbage", DocumentKind::Unsupported), "");
    }
}
