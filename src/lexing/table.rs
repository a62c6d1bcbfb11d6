//! Line-indexed token table
//!
//! The table holds one entry per physical source line, bracketed by a
//! `START` line and an `EOF` line. Because of the leading sentinel, the table
//! index of a source line is its 1-based line number.

use super::tokens::Token;
use super::tokenize_line;

/// A slot in the token table, ordered by line and then by token index
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub token: usize,
}

impl Position {
    pub fn new(line: usize, token: usize) -> Self {
        Self { line, token }
    }
}

/// Immutable table of tokens, one row per source line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenTable {
    lines: Vec<Vec<Token>>,
}

impl TokenTable {
    /// Tokenize a whole source text
    pub fn from_source(source: &str) -> Self {
        Self::from_lines(source.lines())
    }

    /// Tokenize pre-split source lines
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(lines.into_iter().map(|line| tokenize_line(line.as_ref())))
    }

    /// Build a table from already split tokens, one vector per line.
    ///
    /// Empty strings become blank slots and an empty line gets a single blank
    /// slot, exactly as tokenization would produce.
    pub fn from_token_lines<I, L, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_rows(
            lines
                .into_iter()
                .map(|line| line.into_iter().map(|t| Token::from(t.as_ref())).collect()),
        )
    }

    fn from_rows(rows: impl Iterator<Item = Vec<Token>>) -> Self {
        let mut lines = vec![vec![Token::Start]];
        for row in rows {
            if row.is_empty() {
                lines.push(vec![Token::Blank]);
            } else {
                lines.push(row);
            }
        }
        lines.push(vec![Token::Eof]);
        Self { lines }
    }

    /// Number of table lines, sentinel lines included
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of source lines
    pub fn source_line_count(&self) -> usize {
        self.lines.len() - 2
    }

    pub fn line(&self, index: usize) -> &[Token] {
        &self.lines[index]
    }

    pub fn get(&self, position: Position) -> Option<&Token> {
        self.lines.get(position.line)?.get(position.token)
    }

    /// Position of the last slot on `line`
    pub fn line_end(&self, line: usize) -> Position {
        Position::new(line, self.lines[line].len() - 1)
    }

    pub fn start_position(&self) -> Position {
        Position::default()
    }

    pub fn eof_position(&self) -> Position {
        Position::new(self.lines.len() - 1, 0)
    }
}
