//! Parsing module for Lua sources
//!
//! A backtracking recursive-descent recognizer. Each grammar rule is a method
//! on [`Parser`] returning `bool`; a rule that fails puts the head back where it
//! started, so alternatives are tried by checkpointing and restoring. Failures
//! only become diagnostics at the recovery sites in [`recovery`], which also
//! re-synchronize the head so a single run reports every problem it can find.
//!
//! ```text
//! TokenTable → Cursor → grammar rules ─┬→ diagnostics
//!                                      └→ function records
//! ```

pub mod cursor;
pub mod functions;
pub mod grammar;
pub mod patterns;
pub mod recovery;

pub use cursor::{Checkpoint, Cursor, Step};
pub use functions::FunctionRecord;
pub use patterns::{Pattern, RESERVED_WORDS};
pub use recovery::Rule;

use crate::diagnostics::Diagnostic;
use crate::error::CheckError;
use crate::lexing::{Position, TokenTable};
use std::path::Path;
use tracing::{debug, info, trace};

/// Everything a finished run collected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseOutcome {
    pub diagnostics: Vec<Diagnostic>,
    pub functions: Vec<FunctionRecord>,
}

/// Parse context: one head plus the diagnostic and function sinks
#[derive(Debug)]
pub struct Parser<'t> {
    cursor: Cursor<'t>,
    diagnostics: Vec<Diagnostic>,
    functions: Vec<FunctionRecord>,
}

impl<'t> Parser<'t> {
    pub fn new(table: &'t TokenTable) -> Self {
        Self {
            cursor: Cursor::new(table),
            diagnostics: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Parse the whole table.
    ///
    /// Whatever the chunk rule leaves unparsed is reported as an invalid
    /// statement and skipped up to the next statement boundary, then parsing
    /// resumes. Every round consumes at least one token.
    pub fn run(mut self) -> ParseOutcome {
        loop {
            self.chunk();
            if self.cursor.advance().is_eof() {
                break;
            }
            self.report("Invalid statement.");
            self.skip_statement();
            trace!(resume = ?self.cursor.position(), "skipped invalid statement");
            self.eat(";");
        }
        info!(
            lines = self.cursor.table().source_line_count(),
            diagnostics = self.diagnostics.len(),
            functions = self.functions.len(),
            "parse finished"
        );
        ParseOutcome {
            diagnostics: self.diagnostics,
            functions: self.functions,
        }
    }

    pub fn cursor(&self) -> &Cursor<'t> {
        &self.cursor
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    pub fn checkpoint(&self) -> Checkpoint {
        self.cursor.checkpoint()
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.cursor.restore(checkpoint);
    }

    /// Consume one token if it matches, otherwise leave the head untouched
    pub fn eat(&mut self, pattern: impl Into<Pattern>) -> bool {
        let start = self.checkpoint();
        if self.cursor.consume(pattern).is_match() {
            true
        } else {
            self.restore(start);
            false
        }
    }

    /// Test the next token without consuming it
    pub fn peek(&self, pattern: impl Into<Pattern>) -> bool {
        let mut lookahead = self.cursor;
        lookahead.consume(pattern).is_match()
    }

    /// Run `rule`, rewinding to the entry position if it fails
    pub fn attempt(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        let start = self.checkpoint();
        let matched = rule(self);
        if !matched {
            self.restore(start);
        }
        matched
    }

    /// Like [`Parser::attempt`] for rules that produce a value
    pub fn speculate<T>(&mut self, rule: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let start = self.checkpoint();
        let produced = rule(self);
        if produced.is_none() {
            self.restore(start);
        }
        produced
    }

    pub(crate) fn report(&mut self, message: &str) {
        let position = self.cursor.position();
        self.report_at(position, message);
    }

    pub(crate) fn report_at(&mut self, position: Position, message: &str) {
        debug!(line = position.line, token = position.token, reason = message, "diagnostic");
        self.diagnostics.push(Diagnostic::new(position, message));
    }
}

/// A checked source: its token table plus everything the parser collected
#[derive(Debug, Clone)]
pub struct Analysis {
    table: TokenTable,
    diagnostics: Vec<Diagnostic>,
    functions: Vec<FunctionRecord>,
}

impl Analysis {
    pub fn from_table(table: TokenTable) -> Self {
        let outcome = Parser::new(&table).run();
        Self {
            table,
            diagnostics: outcome.diagnostics,
            functions: outcome.functions,
        }
    }

    pub fn table(&self) -> &TokenTable {
        &self.table
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Every named function parsed, in declaration order
    pub fn functions(&self) -> &[FunctionRecord] {
        &self.functions
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Functions worth reporting: none once any diagnostic exists
    pub fn declared_functions(&self) -> &[FunctionRecord] {
        if self.is_clean() {
            &self.functions
        } else {
            &[]
        }
    }
}

/// Check Lua source text
pub fn check_source(source: &str) -> Analysis {
    Analysis::from_table(TokenTable::from_source(source))
}

/// Read and check a Lua file
pub fn check_file(path: impl AsRef<Path>) -> Result<Analysis, CheckError> {
    let path = path.as_ref();
    let source =
        std::fs::read_to_string(path).map_err(|err| CheckError::from_io(path.to_path_buf(), err))?;
    Ok(check_source(&source))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eat_rewinds_on_miss() {
        let table = TokenTable::from_source("local x");
        let mut parser = Parser::new(&table);
        assert!(!parser.eat("function"));
        assert_eq!(parser.cursor().position(), Position::default());
        assert!(parser.eat("local"));
        assert_eq!(parser.cursor().position(), Position::new(1, 0));
    }

    #[test]
    fn test_eat_at_eof_stays_at_eof() {
        let table = TokenTable::from_source("x");
        let mut parser = Parser::new(&table);
        assert!(parser.eat(Pattern::Name));
        assert!(!parser.eat(";"));
        assert!(!parser.eat(";"));
        assert_eq!(parser.cursor().current().text(), "x");
    }

    #[test]
    fn test_peek_does_not_move() {
        let table = TokenTable::from_source("a = b");
        let mut parser = Parser::new(&table);
        assert!(parser.peek(Pattern::Name));
        assert!(parser.eat(Pattern::Name));
        assert!(parser.peek("="));
        assert_eq!(parser.cursor().position(), Position::new(1, 0));
    }

    #[test]
    fn test_attempt_restores_on_failure() {
        let table = TokenTable::from_source("a b c");
        let mut parser = Parser::new(&table);
        let matched = parser.attempt(|p| p.eat("a") && p.eat("b") && p.eat("x"));
        assert!(!matched);
        assert_eq!(parser.cursor().position(), Position::default());
        assert!(parser.attempt(|p| p.eat("a") && p.eat("b")));
        assert_eq!(parser.cursor().current().text(), "b");
    }

    #[test]
    fn test_speculate_restores_on_none() {
        let table = TokenTable::from_source("a b");
        let mut parser = Parser::new(&table);
        let produced: Option<()> = parser.speculate(|p| {
            let _ = p.eat("a");
            None
        });
        assert!(produced.is_none());
        assert_eq!(parser.cursor().position(), Position::default());
    }

    #[test]
    fn test_run_on_empty_source() {
        let table = TokenTable::from_source("");
        let outcome = Parser::new(&table).run();
        assert_eq!(outcome, ParseOutcome::default());
    }

    #[test]
    fn test_declared_functions_suppressed_by_diagnostics() {
        let analysis = check_source("function f() end\nx ~= 1");
        assert!(!analysis.is_clean());
        assert_eq!(analysis.functions().len(), 1);
        assert!(analysis.declared_functions().is_empty());
    }

    #[test]
    fn test_check_file_missing() {
        let err = check_file("/no/such/dir/script.lua").unwrap_err();
        assert!(matches!(err, CheckError::FileNotFound { .. }));
    }
}
