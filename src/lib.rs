//! # luasyntax
//!
//! A context-free syntax checker for Lua 5.1 sources.
//!
//! The checker reads a file, splits every line into tokens, and runs a
//! backtracking recursive-descent recognizer over the resulting table. Every
//! point where the input diverges from the grammar is recorded as a
//! [`Diagnostic`](diagnostics::Diagnostic); the recognizer then resynchronizes
//! and keeps scanning, so a single run reports all errors of a file. When the
//! file is clean, the signatures of all named function declarations are
//! reported instead.
//!
//! No syntax tree is built. The crate only accepts or rejects input and
//! collects diagnostics plus function spans.
//!
//! ## Layout
//!
//! - [`lexing`]: line-indexed token table
//! - [`parsing`]: cursor, grammar recognizers, error recovery, function records
//! - [`diagnostics`]: the diagnostic value type
//! - [`report`]: rendering of the final report
//! - [`config`]: embedded default configuration
//! - [`error`]: fatal errors (unreadable input, bad configuration)

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod lexing;
pub mod parsing;
pub mod report;

pub use diagnostics::Diagnostic;
pub use error::CheckError;
pub use lexing::{Position, Token, TokenTable};
pub use parsing::{check_file, check_source, Analysis, FunctionRecord, ParseOutcome, Parser};
