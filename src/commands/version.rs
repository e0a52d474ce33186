//! Command: print version information.
use std::io::{self, Write};

/// Version string stamped by the build script, or the package version.
#[must_use]
pub fn version() -> &'static str {
    option_env!("INI_CONFIG_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Print the version to `out`.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "ini {}", version())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn prints_name_and_version() {
        let mut out = Vec::new();
        run(&mut out).expect("write");
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("ini "));
        assert!(text.ends_with('\n'));
        assert!(!version().is_empty());
    }
}
