use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder written for every field an extractor could not resolve
pub const UNKNOWN: &str = "Unknown";

/// Canonical column order of the candidate dataset
pub const CANDIDATE_COLUMNS: [&str; 10] = [
    "Name",
    "Email",
    "Phone",
    "YearsExperience",
    "Location",
    "AppliedPosition",
    "SourceEmailDate",
    "EmailSubject",
    "AttachmentPaths",
    "Rating",
];

/// One row of the candidate dataset.
///
/// Every column is a plain string so rows read back from storage round-trip
/// verbatim; typed values are rendered by the assembler before a record is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "YearsExperience")]
    pub years_experience: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "AppliedPosition")]
    pub applied_position: String,
    #[serde(rename = "SourceEmailDate")]
    pub source_email_date: String,
    #[serde(rename = "EmailSubject")]
    pub email_subject: String,
    #[serde(rename = "AttachmentPaths")]
    pub attachment_paths: String,
    #[serde(rename = "Rating")]
    pub rating: String,
}

impl CandidateRecord {
    /// Field values in canonical column order
    pub fn to_row(&self) -> [&str; 10] {
        [
            &self.name,
            &self.email,
            &self.phone,
            &self.years_experience,
            &self.location,
            &self.applied_position,
            &self.source_email_date,
            &self.email_subject,
            &self.attachment_paths,
            &self.rating,
        ]
    }
}

/// Seniority band derived from years of experience
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rating {
    Unknown,
    EntryLevel,
    Junior,
    MidLevel,
    Senior,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Unknown => UNKNOWN,
            Rating::EntryLevel => "Entry Level",
            Rating::Junior => "Junior (0-2)",
            Rating::MidLevel => "Mid Level (2-5)",
            Rating::Senior => "Senior (5+)",
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render years of experience with at least one decimal (`7.0`, `2.5`)
pub fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{:.1}", years)
    } else {
        years.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_labels() {
        assert_eq!(Rating::Unknown.to_string(), "Unknown");
        assert_eq!(Rating::Junior.to_string(), "Junior (0-2)");
        assert_eq!(Rating::Senior.as_str(), "Senior (5+)");
    }

    #[test]
    fn test_format_years() {
        assert_eq!(format_years(7.0), "7.0");
        assert_eq!(format_years(2.5), "2.5");
        assert_eq!(format_years(0.0), "0.0");
    }

    #[test]
    fn test_row_follows_column_order() {
        let record = CandidateRecord {
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: UNKNOWN.to_string(),
            years_experience: "3.0".to_string(),
            location: "Berlin".to_string(),
            applied_position: "Backend Engineer".to_string(),
            source_email_date: "2024-01-02 10:00:00".to_string(),
            email_subject: "Application".to_string(),
            attachment_paths: String::new(),
            rating: Rating::MidLevel.to_string(),
        };

        let row = record.to_row();
        assert_eq!(row.len(), CANDIDATE_COLUMNS.len());
        assert_eq!(row[0], "Jane Doe");
        assert_eq!(row[3], "3.0");
        assert_eq!(row[9], "Mid Level (2-5)");
    }
}
