use chrono::{DateTime, FixedOffset, Utc};
use shared_types::{format_years, CandidateRecord, Rating, UNKNOWN};

use crate::candidate_fields::CandidateFields;

/// Timestamp layout of the SourceEmailDate column
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Message-level values carried into the record unchanged
#[derive(Debug, Clone, Copy)]
pub struct MessageMetadata<'a> {
    /// Decoded subject
    pub subject: &'a str,
    /// Decoded Date header, if the message had one
    pub date: Option<&'a str>,
    pub attachment_paths: &'a [String],
}

/// Build the persisted record, substituting `Unknown` for every unresolved field.
///
/// `now` stands in for an unparseable or missing Date header.
pub fn assemble_record(
    metadata: &MessageMetadata,
    fields: &CandidateFields,
    rating: Rating,
    now: DateTime<Utc>,
) -> CandidateRecord {
    CandidateRecord {
        name: or_unknown(fields.name.as_deref()),
        email: or_unknown(fields.email.as_deref()),
        phone: or_unknown(fields.phone.as_deref()),
        years_experience: fields
            .years_experience
            .map(format_years)
            .unwrap_or_else(|| UNKNOWN.to_string()),
        location: or_unknown(fields.location.as_deref()),
        applied_position: or_unknown(fields.applied_position.as_deref()),
        source_email_date: format_message_date(metadata.date, now),
        email_subject: metadata.subject.to_string(),
        attachment_paths: metadata.attachment_paths.join(", "),
        rating: rating.to_string(),
    }
}

fn or_unknown(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(value) if !value.is_empty() => value.to_string(),
        _ => UNKNOWN.to_string(),
    }
}

/// Render the Date header in the sender's offset, or `now` when it cannot be parsed
pub fn format_message_date(date: Option<&str>, now: DateTime<Utc>) -> String {
    match date.and_then(parse_message_date) {
        Some(parsed) => parsed.format(DATE_FORMAT).to_string(),
        None => now.format(DATE_FORMAT).to_string(),
    }
}

pub fn parse_message_date(raw: &str) -> Option<DateTime<FixedOffset>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc2822(raw) {
        return Some(parsed);
    }

    // Trailing zone comment, e.g. "+0000 (UTC)"
    if raw.ends_with(')') {
        if let Some(open) = raw.rfind('(') {
            return DateTime::parse_from_rfc2822(raw[..open].trim()).ok();
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 4, 5, 6, 7).unwrap()
    }

    #[test]
    fn test_all_unresolved_fields_become_unknown() {
        let metadata = MessageMetadata {
            subject: "Hello there",
            date: None,
            attachment_paths: &[],
        };
        let fields = CandidateFields {
            location: Some("   ".to_string()),
            ..CandidateFields::default()
        };

        let record = assemble_record(&metadata, &fields, Rating::Unknown, fixed_now());

        assert_eq!(record.name, "Unknown");
        assert_eq!(record.email, "Unknown");
        assert_eq!(record.phone, "Unknown");
        assert_eq!(record.years_experience, "Unknown");
        assert_eq!(record.location, "Unknown");
        assert_eq!(record.applied_position, "Unknown");
        assert_eq!(record.rating, "Unknown");
        assert_eq!(record.source_email_date, "2025-03-04 05:06:07");
        for value in record.to_row().iter().take(7) {
            assert!(!value.is_empty());
        }
    }

    #[test]
    fn test_resolved_fields_are_kept() {
        let paths = vec![
            "storage/attachments/7_cv.pdf".to_string(),
            "storage/attachments/7_letter.docx".to_string(),
        ];
        let metadata = MessageMetadata {
            subject: "Application for: Backend Engineer",
            date: Some("Tue, 1 Jul 2003 10:52:37 +0200"),
            attachment_paths: &paths,
        };
        let fields = CandidateFields {
            name: Some("Jane Doe".to_string()),
            email: Some("jane.doe@example.com".to_string()),
            phone: Some("+1 555 123 4567".to_string()),
            years_experience: Some(7.0),
            location: Some("Austin, TX".to_string()),
            applied_position: Some("Backend Engineer".to_string()),
        };

        let record = assemble_record(&metadata, &fields, Rating::Senior, fixed_now());

        assert_eq!(record.name, "Jane Doe");
        assert_eq!(record.years_experience, "7.0");
        assert_eq!(record.source_email_date, "2003-07-01 10:52:37");
        assert_eq!(record.email_subject, "Application for: Backend Engineer");
        assert_eq!(
            record.attachment_paths,
            "storage/attachments/7_cv.pdf, storage/attachments/7_letter.docx"
        );
        assert_eq!(record.rating, "Senior (5+)");
    }

    #[test]
    fn test_date_with_zone_comment() {
        assert_eq!(
            format_message_date(Some("Mon, 15 Jan 2024 09:30:00 +0000 (UTC)"), fixed_now()),
            "2024-01-15 09:30:00"
        );
    }

    #[test]
    fn test_unparseable_date_uses_now() {
        assert_eq!(
            format_message_date(Some("sometime last week"), fixed_now()),
            "2025-03-04 05:06:07"
        );
        assert!(parse_message_date("").is_none());
    }
}
