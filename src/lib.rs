//! Parser, editor, and formatter for INI-style configuration files.
//!
//! Files are line-oriented: `[section]` headers, `key = value` pairs, and
//! `;`/`#` comments.  Values may be wrapped in matching `"` or `'` quotes,
//! inside which comment leaders are literal and backslash escapes apply.
//!
//! The public API is organised into three layers:
//!
//! - **[`ini`]** — scanner, escape codec, and the [`Document`](ini::Document) store
//! - **[`error`]** — the closed [`IniError`](error::IniError) taxonomy
//! - **[`commands`]** — the `ini` command-line front end (`get`, `set`, `check`, …)
#![deny(clippy::or_fun_call)]
#![deny(clippy::bool_to_int_with_if)]

pub mod cli;
pub mod commands;
pub mod error;
pub mod ini;
pub mod logging;
