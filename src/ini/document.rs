//! In-memory document model with load, get, set, and save.
use std::collections::BTreeMap;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead as _, BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Serialize, Serializer};

use super::escape;
use super::scanner::{self, CommentPolicy, Line, ScanError};
use crate::error::IniError;

/// Key-value pairs of one section.
pub type Section = BTreeMap<String, String>;

/// All sections, keyed by name.  The empty name is the global section.
pub type Sections = BTreeMap<String, Section>;

/// A parsed INI document.
///
/// Sections and keys are kept sorted, so [`save`](Self::save) output is
/// deterministic.  A document is not synchronised; share it across threads
/// only behind external locking.
///
/// # Examples
///
/// ```
/// use ini_config::ini::Document;
///
/// let mut doc = Document::new();
/// doc.set("database", "user", "admin").unwrap();
/// assert_eq!(doc.get("database", "user", ""), "admin");
/// assert_eq!(doc.get("database", "port", "5432"), "5432");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Document {
    sections: Sections,
    policy: CommentPolicy,
}

impl Document {
    /// Create an empty document using the strict comment policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document that parses with `policy`.
    #[must_use]
    pub fn with_policy(policy: CommentPolicy) -> Self {
        Self {
            sections: Sections::new(),
            policy,
        }
    }

    /// Comment policy applied by [`load`](Self::load) and [`load_str`](Self::load_str).
    #[must_use]
    pub const fn policy(&self) -> CommentPolicy {
        self.policy
    }

    /// Replace the contents of this document with the parsed contents of `path`.
    ///
    /// Parsing stops at the first malformed line.  On any error the previous
    /// contents are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileNotFound`] if the file cannot be opened or
    /// read, or the first parse error encountered.
    pub fn load(&mut self, path: &Path) -> Result<(), IniError> {
        let not_found = |source| IniError::FileNotFound {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(not_found)?;
        let mut parser = Parser::new(self.policy);
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            parser.feed(idx + 1, &line.map_err(not_found)?)?;
        }
        self.sections = parser.finish();
        tracing::debug!(
            "loaded {} ({} sections)",
            path.display(),
            self.sections.len()
        );
        Ok(())
    }

    /// Replace the contents of this document with the parsed `content`.
    ///
    /// Same rules as [`load`](Self::load), reading from memory.
    ///
    /// ```
    /// use ini_config::ini::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.load_str("name = demo\n[server]\nport = 8080 ; http\n").unwrap();
    /// assert_eq!(doc.get("", "name", ""), "demo");
    /// assert_eq!(doc.get("server", "port", ""), "8080");
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the first parse error encountered.
    pub fn load_str(&mut self, content: &str) -> Result<(), IniError> {
        let mut parser = Parser::new(self.policy);
        for (idx, line) in content.lines().enumerate() {
            parser.feed(idx + 1, line)?;
        }
        self.sections = parser.finish();
        Ok(())
    }

    /// Return the value for `key` in `section`, or `default` when absent.
    #[must_use]
    pub fn get<'a>(&'a self, section: &str, key: &str, default: &'a str) -> &'a str {
        self.value(section, key).unwrap_or(default)
    }

    /// Return the value for `key` in `section`, if present.
    #[must_use]
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Set `key` in `section` to `value`, overwriting any previous value.
    ///
    /// `section` and `key` are trimmed; the section is created on demand.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::EmptyKey`] if the trimmed key is empty, or
    /// [`IniError::InvalidSection`] if the section name contains `[` or `]`.
    pub fn set(
        &mut self,
        section: &str,
        key: &str,
        value: impl Into<String>,
    ) -> Result<(), IniError> {
        let key = key.trim();
        if key.is_empty() {
            return Err(IniError::EmptyKey { line: None });
        }
        let section = section.trim();
        if section.contains(['[', ']']) {
            return Err(IniError::InvalidSection {
                line: None,
                name: section.to_string(),
            });
        }
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.into());
        Ok(())
    }

    /// Remove `key` from `section`, returning its value.
    ///
    /// A section left without keys is dropped.
    pub fn remove(&mut self, section: &str, key: &str) -> Option<String> {
        let pairs = self.sections.get_mut(section)?;
        let removed = pairs.remove(key);
        if pairs.is_empty() {
            self.sections.remove(section);
        }
        removed
    }

    /// Return the pairs of `name`, if the section exists.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    /// Read-only view of every section.
    #[must_use]
    pub const fn data(&self) -> &Sections {
        &self.sections
    }

    /// Whether the document holds no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Write this document to `path`, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns [`IniError::FileWriteFailed`] if the file cannot be created,
    /// or if writing or flushing fails.
    pub fn save(&self, path: &Path) -> Result<(), IniError> {
        let write_failed = |source| IniError::FileWriteFailed {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_failed)?;
        let mut out = BufWriter::new(file);
        self.write_to(&mut out).map_err(write_failed)?;
        out.flush().map_err(write_failed)?;
        tracing::debug!(
            "saved {} ({} sections)",
            path.display(),
            self.sections.len()
        );
        Ok(())
    }

    /// Write the on-disk form of this document to `out`.
    ///
    /// The global section comes first, followed by each named section; every
    /// non-empty block ends with a blank line.
    ///
    /// # Errors
    ///
    /// Returns any error reported by `out`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if let Some(global) = self.sections.get("").filter(|s| !s.is_empty()) {
            write_pairs(out, global)?;
            writeln!(out)?;
        }
        for (name, pairs) in self.sections.iter().filter(|(name, _)| !name.is_empty()) {
            writeln!(out, "[{name}]")?;
            write_pairs(out, pairs)?;
            writeln!(out)?;
        }
        Ok(())
    }
}

fn write_pairs<W: Write>(out: &mut W, pairs: &Section) -> io::Result<()> {
    for (key, value) in pairs {
        writeln!(out, "{key}={}", escape::format_value(value))?;
    }
    Ok(())
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.sections == other.sections
    }
}

impl Eq for Document {}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.sections.serialize(serializer)
    }
}

/// Accumulates classified lines into a fresh section map.
struct Parser {
    policy: CommentPolicy,
    current: String,
    sections: Sections,
}

impl Parser {
    fn new(policy: CommentPolicy) -> Self {
        Self {
            policy,
            current: String::new(),
            sections: Sections::new(),
        }
    }

    fn feed(&mut self, line_num: usize, line: &str) -> Result<(), IniError> {
        let classified = scanner::classify(line, self.policy).map_err(|e| match e {
            ScanError::EmptySection => IniError::InvalidSection {
                line: Some(line_num),
                name: String::new(),
            },
            ScanError::MissingSeparator => IniError::InvalidLine {
                line: line_num,
                text: scanner::strip_comment(line, self.policy).to_string(),
            },
            ScanError::EmptyKey => IniError::EmptyKey {
                line: Some(line_num),
            },
        })?;

        match classified {
            Line::Blank => Ok(()),
            Line::Section(name) => {
                name.clone_into(&mut self.current);
                Ok(())
            }
            Line::Pair { key, value } => {
                let value = unquote(value).ok_or_else(|| IniError::UnmatchedQuotes {
                    line: line_num,
                    value: value.to_string(),
                })?;
                let pairs = self.sections.entry(self.current.clone()).or_default();
                if pairs.contains_key(key) {
                    return Err(IniError::DuplicateKey {
                        line: line_num,
                        section: self.current.clone(),
                        key: key.to_string(),
                    });
                }
                pairs.insert(key.to_string(), value);
                Ok(())
            }
        }
    }

    fn finish(self) -> Sections {
        self.sections
    }
}

/// Strip matching surrounding quotes and decode escapes.
///
/// Unquoted values are returned verbatim; `None` means the opening quote
/// is not matched by the last character.
fn unquote(raw: &str) -> Option<String> {
    let Some(quote) = raw.chars().next().filter(|&c| matches!(c, '"' | '\'')) else {
        return Some(raw.to_string());
    };
    let inner = raw.strip_prefix(quote)?.strip_suffix(quote)?;
    Some(escape::decode(inner))
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn parse(content: &str) -> Result<Document, IniError> {
        let mut doc = Document::new();
        doc.load_str(content)?;
        Ok(doc)
    }

    fn parse_err(content: &str) -> IniError {
        parse(content).expect_err("content should be rejected")
    }

    // -----------------------------------------------------------------------
    // load_str
    // -----------------------------------------------------------------------

    #[test]
    fn global_pairs_precede_sections() {
        let doc = parse("host = localhost\n[db]\nuser = admin\n").expect("should parse");
        assert_eq!(doc.get("", "host", ""), "localhost");
        assert_eq!(doc.get("db", "user", ""), "admin");
        assert_eq!(doc.data().len(), 2);
    }

    #[test]
    fn reference_format_example() {
        let content = r#"; full-line comment
global_key = global_value          ; inline comment
[section_name]
key = unquoted value
quoted_key = "value with \"escapes\" and \n sequences"
single = 'also quoted; # safe inside'
"#;
        let doc = parse(content).expect("should parse");
        assert_eq!(doc.get("", "global_key", ""), "global_value");
        assert_eq!(doc.get("section_name", "key", ""), "unquoted value");
        assert_eq!(
            doc.get("section_name", "quoted_key", ""),
            "value with \"escapes\" and \n sequences"
        );
        assert_eq!(
            doc.get("section_name", "single", ""),
            "also quoted; # safe inside"
        );
    }

    #[test]
    fn quoted_value_is_exempt_from_comments() {
        let doc = parse("key=\"value ; still value # still value\"\n").expect("should parse");
        assert_eq!(doc.get("", "key", ""), "value ; still value # still value");
    }

    #[test]
    fn strict_and_relaxed_policies() {
        let doc = parse("key=value#tag\n").expect("should parse");
        assert_eq!(doc.get("", "key", ""), "value#tag");

        let mut relaxed = Document::with_policy(CommentPolicy::Relaxed);
        relaxed.load_str("key=value#tag\n").expect("should parse");
        assert_eq!(relaxed.get("", "key", ""), "value");
    }

    #[test]
    fn reopened_section_merges_keys() {
        let doc = parse("[a]\nx=1\n[b]\ny=2\n[a]\nz=3\n").expect("should parse");
        assert_eq!(doc.section("a").map(BTreeMap::len), Some(2));
    }

    #[test]
    fn empty_quoted_value() {
        let doc = parse("a = \"\"\nb = ''\n").expect("should parse");
        assert_eq!(doc.get("", "a", "x"), "");
        assert_eq!(doc.get("", "b", "x"), "");
    }

    #[test]
    fn unquoted_value_keeps_backslashes() {
        let doc = parse("path = C:\\temp\\n\n").expect("should parse");
        assert_eq!(doc.get("", "path", ""), "C:\\temp\\n");
    }

    #[test]
    fn header_only_section_is_not_stored() {
        let doc = parse("[empty]\n").expect("should parse");
        assert!(doc.section("empty").is_none());
        assert!(doc.is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let doc = parse("[s]\r\nk = v\r\n").expect("should parse");
        assert_eq!(doc.get("s", "k", ""), "v");
    }

    // -----------------------------------------------------------------------
    // load_str errors
    // -----------------------------------------------------------------------

    #[test]
    fn empty_section_is_invalid() {
        let err = parse_err("a=1\n[   ]\n");
        assert_eq!(err.kind(), ErrorKind::InvalidSection);
        assert_eq!(err.line(), Some(2));
    }

    #[test]
    fn missing_separator_is_invalid_line() {
        let err = parse_err("[s]\nstandalone_token ; note\n");
        assert!(matches!(
            err,
            IniError::InvalidLine { line: 2, ref text } if text == "standalone_token"
        ));
    }

    #[test]
    fn empty_key_is_rejected() {
        assert_eq!(parse_err(" = v\n").kind(), ErrorKind::EmptyKey);
    }

    #[test]
    fn unterminated_quote_is_rejected() {
        let err = parse_err("key=\"unterminated\n");
        assert_eq!(err.kind(), ErrorKind::UnmatchedQuotes);
    }

    #[test]
    fn mismatched_quote_characters_are_rejected() {
        assert_eq!(parse_err("k = \"value'\n").kind(), ErrorKind::UnmatchedQuotes);
        assert_eq!(parse_err("k = \"\n").kind(), ErrorKind::UnmatchedQuotes);
    }

    #[test]
    fn duplicate_key_in_global_section() {
        let err = parse_err("a=1\na=2\n");
        assert!(matches!(
            err,
            IniError::DuplicateKey { line: 2, ref section, ref key } if section.is_empty() && key == "a"
        ));
    }

    #[test]
    fn duplicate_key_across_reopened_section() {
        assert_eq!(
            parse_err("[s]\nk=1\n[t]\nk=1\n[s]\nk=2\n").kind(),
            ErrorKind::DuplicateKey
        );
    }

    #[test]
    fn failed_load_keeps_previous_contents() {
        let mut doc = parse("keep = me\n").expect("should parse");
        let err = doc
            .load_str("new = value\nbroken line\n")
            .expect_err("second load should fail");
        assert_eq!(err.kind(), ErrorKind::InvalidLine);
        assert_eq!(doc.get("", "keep", ""), "me");
        assert_eq!(doc.value("", "new"), None);
    }

    #[test]
    fn successful_load_replaces_contents() {
        let mut doc = parse("old = 1\n").expect("should parse");
        doc.load_str("new = 2\n").expect("should parse");
        assert_eq!(doc.value("", "old"), None);
        assert_eq!(doc.get("", "new", ""), "2");
    }

    // -----------------------------------------------------------------------
    // get / set / remove
    // -----------------------------------------------------------------------

    #[test]
    fn get_falls_back_to_default() {
        let doc = Document::new();
        assert_eq!(doc.get("nope", "nope", "fallback"), "fallback");
    }

    #[test]
    fn set_trims_and_overwrites() {
        let mut doc = Document::new();
        doc.set(" db ", " user ", "a").expect("set should succeed");
        doc.set("db", "user", "b").expect("set should succeed");
        assert_eq!(doc.get("db", "user", ""), "b");
        assert_eq!(doc.section("db").map(BTreeMap::len), Some(1));
    }

    #[test]
    fn set_rejects_empty_key() {
        let err = Document::new().set("section", "", "v").expect_err("empty key");
        assert!(matches!(err, IniError::EmptyKey { line: None }));
        let err = Document::new().set("section", "   ", "v").expect_err("blank key");
        assert_eq!(err.kind(), ErrorKind::EmptyKey);
    }

    #[test]
    fn set_rejects_bracketed_section() {
        let err = Document::new().set("[bad]", "k", "v").expect_err("brackets");
        assert_eq!(err.kind(), ErrorKind::InvalidSection);
        let err = Document::new().set("a]b", "k", "v").expect_err("bracket");
        assert_eq!(err.kind(), ErrorKind::InvalidSection);
    }

    #[test]
    fn set_accepts_global_section() {
        let mut doc = Document::new();
        doc.set("", "k", "v").expect("set should succeed");
        assert_eq!(doc.get("", "k", ""), "v");
    }

    #[test]
    fn remove_drops_empty_section() {
        let mut doc = Document::new();
        doc.set("s", "k", "v").expect("set should succeed");
        assert_eq!(doc.remove("s", "k").as_deref(), Some("v"));
        assert!(doc.is_empty());
        assert_eq!(doc.remove("s", "k"), None);
    }

    // -----------------------------------------------------------------------
    // write_to
    // -----------------------------------------------------------------------

    #[test]
    fn write_global_first_then_sections() {
        let mut doc = Document::new();
        doc.set("database", "user", "admin").expect("set");
        doc.set("database", "password", "secret;pass").expect("set");
        doc.set("", "host", "localhost").expect("set");
        assert_eq!(
            doc.to_string(),
            "host=localhost\n\n[database]\npassword=\"secret;pass\"\nuser=admin\n\n"
        );
    }

    #[test]
    fn write_empty_document_is_empty() {
        assert_eq!(Document::new().to_string(), "");
    }

    #[test]
    fn written_text_reloads_to_equal_document() {
        let mut doc = Document::new();
        for (i, v) in ["", " lead", "trail ", "a\"b ; c", "'x", "x'", "\\", "l1\nl2\r\n"]
            .iter()
            .enumerate()
        {
            doc.set("s", &format!("k{i}"), *v).expect("set");
        }
        let mut reloaded = Document::new();
        reloaded.load_str(&doc.to_string()).expect("reload");
        assert_eq!(reloaded, doc);
    }

    #[test]
    fn serializes_as_nested_map() {
        let mut doc = Document::new();
        doc.set("s", "k", "v").expect("set");
        let json = serde_json::to_string(&doc).expect("serialize");
        assert_eq!(json, r#"{"s":{"k":"v"}}"#);
    }

    #[test]
    fn equality_ignores_policy() {
        assert_eq!(
            Document::new(),
            Document::with_policy(CommentPolicy::Relaxed)
        );
    }
}
