/// Subject/sender gate applied before any extraction work.
#[derive(Debug, Clone, Default)]
pub struct MessageFilter {
    subject_keyword: String,
    sender_keyword: String,
}

impl MessageFilter {
    /// Empty keywords impose no constraint
    pub fn new(subject_keyword: &str, sender_keyword: &str) -> Self {
        Self {
            subject_keyword: subject_keyword.trim().to_lowercase(),
            sender_keyword: sender_keyword.trim().to_lowercase(),
        }
    }

    /// Case-insensitive containment check on decoded subject and sender
    pub fn passes(&self, subject: &str, sender: &str) -> bool {
        if !self.subject_keyword.is_empty()
            && !subject.to_lowercase().contains(&self.subject_keyword)
        {
            return false;
        }
        if !self.sender_keyword.is_empty() && !sender.to_lowercase().contains(&self.sender_keyword)
        {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_criteria_accept_everything() {
        let filter = MessageFilter::new("", "");
        assert!(filter.passes("anything", "someone@example.com"));
        assert!(filter.passes("", ""));
    }

    #[test]
    fn test_subject_keyword_is_case_insensitive() {
        let filter = MessageFilter::new("Application", "");
        assert!(filter.passes("JOB APPLICATION: Backend", "a@b.com"));
        assert!(!filter.passes("Newsletter", "a@b.com"));
    }

    #[test]
    fn test_subject_mismatch_rejects_even_when_sender_matches() {
        let filter = MessageFilter::new("application", "example.com");
        assert!(!filter.passes("Weekly digest", "jobs@example.com"));
        assert!(filter.passes("Application for QA", "jobs@example.com"));
    }

    #[test]
    fn test_sender_keyword() {
        let filter = MessageFilter::new("", " Careers.Example.com ");
        assert!(filter.passes("Hi", "Jane <jane@careers.example.com>"));
        assert!(!filter.passes("Hi", "jane@other.org"));
    }
}
