//! Sectioned key-value configuration format.
//!
//! - **[`scanner`]** — classify lines and strip comments outside quotes
//! - **[`escape`]** — backslash escapes and quoting of values
//! - **[`document`]** — the in-memory [`Document`] with load/get/set/save
pub mod document;
pub mod escape;
pub mod scanner;

pub use document::{Document, Section, Sections};
pub use scanner::CommentPolicy;
