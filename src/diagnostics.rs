//! Syntax diagnostics
//!
//! A diagnostic is a message pinned to a token slot. The parser appends them in
//! the order they are found and never merges or reorders them.

use crate::lexing::Position;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub position: Position,
    pub message: String,
}

impl Diagnostic {
    pub fn new(position: Position, message: impl Into<String>) -> Self {
        Self {
            position,
            message: message.into(),
        }
    }

    /// 1-based source line of the offending token
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Index of the offending token within its line
    pub fn token(&self) -> usize {
        self.position.token
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "line {}, token {}: {}",
            self.position.line, self.position.token, self.message
        )
    }
}
