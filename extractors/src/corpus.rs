/// Join body text and attachment texts into the single corpus every field
/// extractor reads.
///
/// Body first, then attachments in encounter order. Attachments whose text came
/// back empty (unsupported or failed extraction) are left out.
pub fn build_corpus<S: AsRef<str>>(body_text: &str, attachment_texts: &[S]) -> String {
    let mut segments = vec![body_text];
    segments.extend(
        attachment_texts
            .iter()
            .map(AsRef::as_ref)
            .filter(|text| !text.is_empty()),
    );
    segments.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_body_then_attachments_in_order() {
        let corpus = build_corpus("body", &["first", "second"]);
        assert_eq!(corpus, "body\nfirst\nsecond");
    }

    #[test]
    fn test_failed_attachment_is_skipped() {
        let texts = vec!["resume".to_string(), String::new(), "cover letter".to_string()];
        assert_eq!(build_corpus("hello", &texts), "hello\nresume\ncover letter");
    }

    #[test]
    fn test_no_attachments() {
        let texts: Vec<String> = Vec::new();
        assert_eq!(build_corpus("only body", &texts), "only body");
    }
}
