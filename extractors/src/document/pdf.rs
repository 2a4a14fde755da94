use shared_types::ExtractionError;
use std::panic;

pub struct PdfParser;

impl PdfParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &[u8]) -> Result<String, ExtractionError> {
        // pdf-extract panics on some malformed inputs
        match panic::catch_unwind(|| pdf_extract::extract_text_from_mem(content)) {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(ExtractionError::DocumentError(format!(
                "PDF extraction failed: {}",
                e
            ))),
            Err(_) => Err(ExtractionError::DocumentError(
                "PDF decoder aborted on malformed input".to_string(),
            )),
        }
    }
}

impl Default for PdfParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let parser = PdfParser::new();
        assert!(parser.parse(b"plain text, not a pdf").is_err());
    }
}
