// Shared helpers for integration tests.
//
// Provides a temporary-directory-backed workspace and a fluent builder so
// each integration test can write INI fixtures without repeating
// filesystem boilerplate.
//
// Used by all integration test binaries that declare `mod common;`.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use ini_config::cli::GlobalOpts;
use ini_config::error::IniError;
use ini_config::ini::{CommentPolicy, Document};

/// An isolated directory of INI files backed by a [`tempfile::TempDir`].
///
/// The directory is automatically deleted when dropped.
pub struct IntegrationTestContext {
    /// Temporary directory holding the fixture files.
    pub root: tempfile::TempDir,
}

impl IntegrationTestContext {
    /// Create a new, empty context.
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    /// Absolute path of `name` inside the context directory.
    pub fn path(&self, name: &str) -> PathBuf {
        self.root.path().join(name)
    }

    /// Read `name` back as a string.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.path(name)).expect("read fixture")
    }

    /// Load `name` into a fresh document with the given policy.
    pub fn load(&self, name: &str, policy: CommentPolicy) -> Result<Document, IniError> {
        let mut doc = Document::with_policy(policy);
        doc.load(&self.path(name))?;
        Ok(doc)
    }
}

/// Fluent builder for [`IntegrationTestContext`].
pub struct TestContextBuilder {
    ctx: IntegrationTestContext,
}

impl TestContextBuilder {
    /// Begin building a new, empty context.
    pub fn new() -> Self {
        Self {
            ctx: IntegrationTestContext::new(),
        }
    }

    /// Write `content` to `name` inside the context directory.
    pub fn with_file(self, name: &str, content: &str) -> Self {
        let path = self.ctx.path(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture parent");
        }
        std::fs::write(path, content).expect("write fixture");
        self
    }

    /// Finish building and return the configured context.
    pub fn build(self) -> IntegrationTestContext {
        self.ctx
    }
}

/// Global CLI options with the given comment policy.
pub fn global_opts(relaxed: bool) -> GlobalOpts {
    GlobalOpts {
        relaxed_comments: relaxed,
    }
}

/// Assert that two paths point at byte-identical files.
pub fn assert_same_contents(a: &Path, b: &Path) {
    assert_eq!(
        std::fs::read(a).expect("read first file"),
        std::fs::read(b).expect("read second file"),
        "{} and {} differ",
        a.display(),
        b.display()
    );
}
