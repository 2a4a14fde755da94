//! Heuristic candidate field extractors.
//!
//! Every extractor is an independent function over the shared [`ExtractionInput`].
//! A miss is `None`, never an error; the first match wins wherever a text holds
//! several candidates (except years of experience, which keeps the largest figure).

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").expect("valid regex")
});

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d -]{8,}\d").expect("valid regex"));

static YEARS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b\d{1,2}(?:\.\d+)?\s*\+?\s*(?:years|yrs|year)\b").expect("valid regex")
});

static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").expect("valid regex"));

static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:applying for|application for|applied for|position|role)[:\- ]+(.{3,80})")
        .expect("valid regex")
});

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bName\s*[:\-]\s*(.+)").expect("valid regex"));

const LOCATION_HINTS: [&str; 5] = [
    "location",
    "based in",
    "current location",
    "city",
    "address",
];

/// Text views of one message that the extractors read
#[derive(Debug, Clone, Copy, Default)]
pub struct ExtractionInput<'a> {
    /// Body plus attachment texts
    pub corpus: &'a str,
    /// Decoded subject
    pub subject: &'a str,
    /// Decoded sender header
    pub sender: &'a str,
    /// Body text alone
    pub body_text: &'a str,
}

/// Raw extractor outputs, before sentinel substitution
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub years_experience: Option<f64>,
    pub location: Option<String>,
    pub applied_position: Option<String>,
}

/// Run the full extractor battery over one message
pub fn extract_candidate_fields(input: &ExtractionInput) -> CandidateFields {
    let email = extract_email(input.corpus, input.sender);
    let name = extract_name(input.corpus, email.as_deref());

    CandidateFields {
        name,
        phone: extract_phone(input.corpus),
        years_experience: extract_years_experience(input.corpus),
        location: extract_location(input.corpus),
        applied_position: extract_applied_position(input.subject, input.body_text),
        email,
    }
}

pub fn extract_email(corpus: &str, sender: &str) -> Option<String> {
    EMAIL_RE
        .find(corpus)
        .or_else(|| EMAIL_RE.find(sender))
        .map(|m| m.as_str().to_string())
}

pub fn extract_phone(corpus: &str) -> Option<String> {
    PHONE_RE.find(corpus).map(|m| m.as_str().to_string())
}

/// Largest "<n> years" figure mentioned anywhere in the corpus
pub fn extract_years_experience(corpus: &str) -> Option<f64> {
    YEARS_RE
        .find_iter(corpus)
        .filter_map(|m| NUMBER_RE.find(m.as_str()))
        .filter_map(|number| number.as_str().parse::<f64>().ok())
        .fold(None, |max: Option<f64>, value| {
            Some(max.map_or(value, |current| current.max(value)))
        })
}

/// First line mentioning a location hint; the value after its colon when there is one
pub fn extract_location(corpus: &str) -> Option<String> {
    let line = corpus
        .split(is_line_boundary)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .find(|line| {
            let lower = line.to_lowercase();
            LOCATION_HINTS.iter().any(|hint| lower.contains(hint))
        })?;

    match line.split_once(':') {
        Some((_, value)) => Some(value.trim().to_string()),
        None => Some(line.to_string()),
    }
}

// Every separator a text line can end on, including form feeds and Unicode line breaks.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Subject phrase, then body phrase, then whatever follows the subject's first colon
pub fn extract_applied_position(subject: &str, body_text: &str) -> Option<String> {
    if let Some(position) = position_from_phrase(subject) {
        return Some(position);
    }
    if let Some(position) = position_from_phrase(body_text) {
        return Some(position);
    }

    let (_, after_colon) = subject.split_once(':')?;
    let after_colon = after_colon.trim();
    let length = after_colon.chars().count();
    if (2..=80).contains(&length) {
        Some(after_colon.to_string())
    } else {
        None
    }
}

fn position_from_phrase(text: &str) -> Option<String> {
    let captured = POSITION_RE.captures(text)?.get(1)?.as_str();
    let cleaned = captured.trim_matches(|c| c == ' ' || c == '.');
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.to_string())
    }
}

/// Explicit "Name:" label, falling back to a name derived from the email address
pub fn extract_name(corpus: &str, email: Option<&str>) -> Option<String> {
    let labelled = NAME_RE
        .captures(corpus)
        .and_then(|caps| caps.get(1))
        .and_then(|value| value.as_str().lines().next())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match labelled {
        Some(name) => Some(name.to_string()),
        None => email.and_then(guess_name_from_email),
    }
}

/// `jane.doe@example.com` -> `Jane Doe`
pub fn guess_name_from_email(email: &str) -> Option<String> {
    let local = email.split('@').next()?;
    let words: Vec<String> = local
        .replace(['.', '_'], " ")
        .split_whitespace()
        .map(title_case)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
