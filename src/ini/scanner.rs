//! Line classifier and quote-aware comment stripper.
//!
//! Each physical line is classified on its own; quote state never carries
//! over from one line to the next.

/// Characters that start a comment outside quotes.
const COMMENT_LEADERS: [char; 2] = [';', '#'];

/// How inline comment delimiters are recognised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CommentPolicy {
    /// `;` or `#` starts a comment only at the start of the line or after
    /// whitespace, so `value#tag` keeps its `#tag`.
    #[default]
    Strict,
    /// `;` or `#` starts a comment wherever it appears outside quotes.
    Relaxed,
}

/// A classified logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Empty or comment-only line.
    Blank,
    /// `[name]` header, interior trimmed.
    Section(&'a str),
    /// `key = value`; the value is still raw (quotes and escapes intact).
    Pair {
        /// Trimmed key, never empty.
        key: &'a str,
        /// Trimmed raw value, comments stripped.
        value: &'a str,
    },
}

/// Why a line could not be classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// `[]` or `[   ]`.
    EmptySection,
    /// No unquoted `=` on a non-header line.
    MissingSeparator,
    /// The text left of `=` is empty after trimming.
    EmptyKey,
}

/// Quote state of the scanning automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Quote {
    None,
    Single,
    Double,
    /// Inside a quote, just after a backslash.
    Escaped(char),
}

impl Quote {
    /// Advance the automaton by one character.
    const fn step(self, c: char) -> Self {
        match (self, c) {
            (Self::None, '"') => Self::Double,
            (Self::None, '\'') => Self::Single,
            (Self::Double, '"') | (Self::Single, '\'') => Self::None,
            (Self::Double, '\\') => Self::Escaped('"'),
            (Self::Single, '\\') => Self::Escaped('\''),
            (Self::Escaped('"'), _) => Self::Double,
            (Self::Escaped(_), _) => Self::Single,
            (state, _) => state,
        }
    }

    const fn is_open(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Classify one raw line.
///
/// # Examples
///
/// ```
/// use ini_config::ini::scanner::{classify, CommentPolicy, Line};
///
/// assert_eq!(classify("  ; note", CommentPolicy::Strict), Ok(Line::Blank));
/// assert_eq!(classify("[ db ]", CommentPolicy::Strict), Ok(Line::Section("db")));
/// assert_eq!(
///     classify("port = 5432 # default", CommentPolicy::Strict),
///     Ok(Line::Pair { key: "port", value: "5432" }),
/// );
/// ```
///
/// # Errors
///
/// Returns a [`ScanError`] for an empty section header, a line without an
/// unquoted `=`, or an empty key.
pub fn classify(line: &str, policy: CommentPolicy) -> Result<Line<'_>, ScanError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT_LEADERS) {
        return Ok(Line::Blank);
    }

    let line = strip_comment(line, policy);
    if line.is_empty() {
        return Ok(Line::Blank);
    }

    if let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
        let name = inner.trim();
        if name.is_empty() {
            return Err(ScanError::EmptySection);
        }
        return Ok(Line::Section(name));
    }

    let eq = find_separator(line).ok_or(ScanError::MissingSeparator)?;
    let (key, value) = (line.get(..eq), line.get(eq + 1..));
    let key = key.unwrap_or_default().trim();
    if key.is_empty() {
        return Err(ScanError::EmptyKey);
    }
    Ok(Line::Pair {
        key,
        value: value.unwrap_or_default().trim(),
    })
}

/// Truncate `line` at the first comment delimiter outside quotes and trim.
///
/// Under [`CommentPolicy::Strict`] a delimiter counts only at the start of
/// the line or directly after whitespace.
///
/// ```
/// use ini_config::ini::scanner::{strip_comment, CommentPolicy};
///
/// assert_eq!(strip_comment("key=value#tag", CommentPolicy::Strict), "key=value#tag");
/// assert_eq!(strip_comment("key=value#tag", CommentPolicy::Relaxed), "key=value");
/// assert_eq!(strip_comment("k='a ; b' ; c", CommentPolicy::Strict), "k='a ; b'");
/// ```
#[must_use]
pub fn strip_comment(line: &str, policy: CommentPolicy) -> &str {
    let mut quote = Quote::None;
    let mut prev: Option<char> = None;
    for (idx, c) in line.char_indices() {
        if !quote.is_open() && COMMENT_LEADERS.contains(&c) {
            let starts_comment = match policy {
                CommentPolicy::Relaxed => true,
                CommentPolicy::Strict => prev.is_none_or(char::is_whitespace),
            };
            if starts_comment {
                return line.get(..idx).unwrap_or(line).trim();
            }
        }
        quote = quote.step(c);
        prev = Some(c);
    }
    line.trim()
}

/// Byte offset of the first `=` outside quotes.
fn find_separator(line: &str) -> Option<usize> {
    let mut quote = Quote::None;
    for (idx, c) in line.char_indices() {
        if c == '=' && !quote.is_open() {
            return Some(idx);
        }
        quote = quote.step(c);
    }
    None
}
