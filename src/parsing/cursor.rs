//! Read head over a token table
//!
//! The head always rests on the last consumed token. Consuming moves it one
//! non-blank slot forward and inspects the slot it lands on, so a failed test
//! still moves the head and the caller decides whether to rewind.

use super::patterns::Pattern;
use crate::lexing::{Position, Token, TokenTable};

/// Saved head position; restoring it is exact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(Position);

impl Checkpoint {
    pub fn position(&self) -> Position {
        self.0
    }
}

/// Outcome of consuming one token against a pattern
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'t> {
    Matched(&'t Token),
    Missed(&'t Token),
}

impl<'t> Step<'t> {
    pub fn is_match(&self) -> bool {
        matches!(self, Step::Matched(_))
    }

    pub fn token(&self) -> &'t Token {
        match self {
            Step::Matched(token) | Step::Missed(token) => token,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Cursor<'t> {
    table: &'t TokenTable,
    position: Position,
}

impl<'t> Cursor<'t> {
    /// Place a head on the `START` sentinel
    pub fn new(table: &'t TokenTable) -> Self {
        Self {
            table,
            position: table.start_position(),
        }
    }

    pub fn table(&self) -> &'t TokenTable {
        self.table
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn line(&self) -> usize {
        self.position.line
    }

    pub fn current(&self) -> &'t Token {
        &self.table.line(self.position.line)[self.position.token]
    }

    pub fn at_eof(&self) -> bool {
        self.current().is_eof()
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.position)
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.position = checkpoint.0;
    }

    /// Move to the next non-blank slot. Stays put on `EOF`.
    pub fn advance(&mut self) -> &'t Token {
        self.step_forward();
        while self.current().is_blank() {
            self.step_forward();
        }
        self.current()
    }

    /// Move to the previous non-blank slot. Stays put on `START`.
    pub fn retreat(&mut self) {
        self.step_back();
        while self.current().is_blank() {
            self.step_back();
        }
    }

    /// Advance and test the token landed on
    pub fn consume(&mut self, pattern: impl Into<Pattern>) -> Step<'t> {
        let pattern = pattern.into();
        let token = self.advance();
        if pattern.matches(token) {
            Step::Matched(token)
        } else {
            Step::Missed(token)
        }
    }

    /// Whether the next token lives on the current line, without moving
    pub fn next_on_same_line(&self) -> bool {
        let mut lookahead = *self;
        lookahead.advance();
        !lookahead.at_eof() && lookahead.line() == self.line()
    }

    /// Park the head on the last slot of `line`
    pub fn jump_to_line_end(&mut self, line: usize) {
        self.position = self.table.line_end(line);
    }

    fn step_forward(&mut self) {
        let Position { line, token } = self.position;
        if token + 1 < self.table.line(line).len() {
            self.position.token += 1;
        } else if line + 1 < self.table.line_count() {
            self.position = Position::new(line + 1, 0);
        } else {
            self.position = self.table.eof_position();
        }
    }

    fn step_back(&mut self) {
        let Position { line, token } = self.position;
        if token > 0 {
            self.position.token -= 1;
        } else if line > 0 {
            self.position = self.table.line_end(line - 1);
        } else {
            self.position = self.table.start_position();
        }
    }
}
