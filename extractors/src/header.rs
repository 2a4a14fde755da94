use mail_parser::MessageParser;

/// Decode a raw header value (RFC 2047 encoded-words, folded lines) into a
/// readable string.
///
/// Falls back to the raw value whenever decoding does not produce anything.
pub fn decode_header(raw: &str) -> String {
    let unfolded = unfold(raw);
    if !unfolded.contains("=?") {
        return unfolded;
    }

    // Route the value through an unstructured header so any header kind decodes the same way.
    let synthetic = format!("Subject: {}\r\n\r\n", unfolded);
    let parsed = MessageParser::default().parse(synthetic.as_bytes());

    match parsed.as_ref().and_then(|message| message.subject()) {
        Some(decoded) if !decoded.is_empty() => decoded.to_string(),
        _ => raw.to_string(),
    }
}

fn unfold(raw: &str) -> String {
    let mut lines = raw.lines();
    let mut unfolded = lines.next().unwrap_or_default().to_string();
    for line in lines {
        unfolded.push(' ');
        unfolded.push_str(line.trim_start());
    }
    unfolded
}
