//! Backslash escaping and quoting of values.
//!
//! [`decode`] is applied to the interior of quoted values on load;
//! [`encode`] is its exact inverse and is applied on save to every value
//! that [`needs_quotes`].

/// Characters whose presence forces a value to be written quoted.
const QUOTE_TRIGGERS: [char; 8] = [' ', ';', '#', '"', '\'', '\n', '\t', '\r'];

/// Translate backslash escapes into the characters they stand for.
///
/// Unknown escapes keep the escaped character and drop the backslash.  A
/// lone trailing backslash is kept as-is.
///
/// ```
/// use ini_config::ini::escape::decode;
///
/// assert_eq!(decode(r#"say \"hi\"\n"#), "say \"hi\"\n");
/// assert_eq!(decode(r"\q"), "q");
/// assert_eq!(decode(r"tail\"), "tail\\");
/// ```
#[must_use]
pub fn decode(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Replace each special character with its two-character escape.
///
/// ```
/// use ini_config::ini::escape::{decode, encode};
///
/// let value = "line one\n\t'two' \\ \"three\"";
/// assert_eq!(decode(&encode(value)), value);
/// ```
#[must_use]
pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\'' => out.push_str("\\'"),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Whether `value` must be quoted to survive a save/load cycle.
///
/// True when the value contains a space, a comment leader, a quote, or a
/// control character the parser would strip, or when trimming would alter
/// it.
#[must_use]
pub fn needs_quotes(value: &str) -> bool {
    value.contains(QUOTE_TRIGGERS) || value.trim() != value
}

/// Render a value the way it is written to disk.
///
/// ```
/// use ini_config::ini::escape::format_value;
///
/// assert_eq!(format_value("plain"), "plain");
/// assert_eq!(format_value("secret;pass"), "\"secret;pass\"");
/// assert_eq!(format_value("a\nb"), "\"a\\nb\"");
/// ```
#[must_use]
pub fn format_value(value: &str) -> String {
    if needs_quotes(value) {
        format!("\"{}\"", encode(value))
    } else {
        value.to_string()
    }
}
