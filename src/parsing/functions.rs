//! Named function records
//!
//! When a `function` or `local function` declaration parses, the tokens from
//! its keyword through the closing parenthesis of its parameter list are kept
//! so the report can list the declared signatures.

use super::cursor::Checkpoint;
use super::Parser;
use crate::lexing::Position;
use tracing::debug;

/// Signature tokens of one named function declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Position of the introducing keyword
    pub position: Position,
    pub tokens: Vec<String>,
}

impl FunctionRecord {
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Render the tokens as written, e.g. `function a.b:c(x,y)`.
    ///
    /// A space is kept only where two word-like tokens meet.
    pub fn signature(&self) -> String {
        let mut signature = String::new();
        let mut previous_is_word = false;
        for token in &self.tokens {
            let is_word = token
                .chars()
                .next()
                .is_some_and(|c| c.is_alphanumeric() || c == '_');
            if previous_is_word && is_word {
                signature.push(' ');
            }
            signature.push_str(token);
            previous_is_word = is_word;
        }
        signature
    }
}

impl<'t> Parser<'t> {
    /// Keep the tokens after `before_keyword` through `signature_end`.
    ///
    /// The replay runs on a copy of the head; the parser does not move.
    pub(crate) fn record_function(
        &mut self,
        before_keyword: Checkpoint,
        signature_end: Checkpoint,
    ) {
        let mut replay = self.cursor;
        replay.restore(before_keyword);
        replay.advance();
        let position = replay.position();

        let mut tokens = Vec::new();
        while !replay.at_eof() {
            tokens.push(replay.current().text().to_string());
            if replay.position() >= signature_end.position() {
                break;
            }
            replay.advance();
        }

        let record = FunctionRecord { position, tokens };
        debug!(signature = %record.signature(), line = record.line(), "function declared");
        self.functions.push(record);
    }
}
