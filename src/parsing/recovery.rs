//! Panic-mode error recovery
//!
//! Recovery sites wrap one expected piece of a production. When the piece is
//! missing the site records its message and skips ahead until the piece shows
//! up, a `;` is consumed, the line ends, or the input runs out. The enclosing
//! production then carries on as if the piece had been there.

use super::patterns::Pattern;
use super::Parser;
use tracing::trace;

/// A grammar rule that restores the head when it fails
pub type Rule<'t> = fn(&mut Parser<'t>) -> bool;

/// What a recovery site expects
#[derive(Clone, Copy)]
enum Site<'t> {
    /// A rule; on failure the head is back where the rule started
    Rule(Rule<'t>),
    /// A single token; on failure the head sits on the offending token
    Token(Pattern),
}

impl<'t> Site<'t> {
    fn attempt(&self, parser: &mut Parser<'t>) -> bool {
        match self {
            Site::Rule(rule) => rule(parser),
            Site::Token(pattern) => parser.cursor.consume(*pattern).is_match(),
        }
    }

    fn rewinds(&self) -> bool {
        matches!(self, Site::Token(_))
    }
}

impl<'t> Parser<'t> {
    /// Require `rule` here, reporting `message` if it is missing
    pub fn expect_rule(&mut self, message: &str, rule: Rule<'t>) {
        self.recover(message, Site::Rule(rule), false);
    }

    /// Require a token matching `pattern` here
    pub fn expect_token(&mut self, message: &str, pattern: impl Into<Pattern>) {
        self.recover(message, Site::Token(pattern.into()), false);
    }

    /// Require `rule` here and require it to reach the end of the statement.
    ///
    /// Leftover tokens after a successful `rule` are reported with the same
    /// message, placed on the last token the rule consumed.
    pub fn expect_rule_through_statement(&mut self, message: &str, rule: Rule<'t>) {
        self.recover(message, Site::Rule(rule), true);
    }

    /// Consume the remains of a statement that was already recognized
    pub fn finish_statement(&mut self, message: &str) {
        let reached = self.cursor.position();
        self.skip_statement();
        if self.cursor.position() != reached {
            self.report_at(reached, message);
        }
    }

    /// Move to the last token of the current statement.
    ///
    /// Stops before a boundary token (`;`, `end`, `else`, `elseif`, `until`),
    /// before a token on another line, and at `EOF`.
    pub fn skip_statement(&mut self) {
        let line = self.cursor.line();
        while !self.cursor.at_eof() {
            let before = self.checkpoint();
            let token = self.cursor.advance();
            if token.is_eof()
                || self.cursor.line() != line
                || Pattern::StatementBoundary.matches(token)
            {
                self.restore(before);
                return;
            }
        }
    }

    fn recover(&mut self, message: &str, site: Site<'t>, through_statement: bool) {
        if site.attempt(self) {
            if through_statement {
                self.finish_statement(message);
            }
            return;
        }

        let origin = self.cursor.position();
        self.report_at(origin, message);

        loop {
            if site.rewinds() {
                self.cursor.retreat();
            }
            if self.cursor.consume(";").is_match() {
                trace!(at = ?self.cursor.position(), "recovered at semicolon");
                return;
            }
            if self.cursor.line() != origin.line {
                self.cursor.jump_to_line_end(origin.line);
                trace!(line = origin.line, "recovered at end of line");
                return;
            }
            if self.cursor.at_eof() {
                return;
            }
            if site.attempt(self) {
                trace!(at = ?self.cursor.position(), "recovered expected piece");
                return;
            }
        }
    }
}
