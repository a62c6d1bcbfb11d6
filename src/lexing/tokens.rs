//! Token definitions for the Lua checker
//!
//! Lines are split with shell-style word rules rather than Lua's own lexical
//! grammar: a run of word characters is one token, a quoted string is one
//! token, and every other character stands alone. Multi-character operators
//! (`==`, `~=`, `..`, `...`) therefore arrive as separate one-character tokens
//! and are reassembled by the grammar.
use logos::Logos;
use std::fmt;

/// Lexeme classes recognized by the logos lexer on a single source line
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n]+")]
pub enum Lexeme {
    /// Word characters; a quote glued to the end of a word stays part of it
    #[regex(r#"[A-Za-z0-9_][A-Za-z0-9_'"]*"#)]
    Word,

    /// Quoted string, delimiters included, no escape processing
    #[regex(r#""[^"]*"|'[^']*'"#)]
    Quoted,

    /// Opening quote without a partner on the same line
    #[regex(r#""[^"]*|'[^']*"#)]
    Unterminated,

    /// Any other single character
    #[regex(r#"[^A-Za-z0-9_'" \t\r\n]"#)]
    Symbol,
}

/// One slot of the token table
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Sentinel occupying the first line of every table
    Start,
    /// Sentinel occupying the last line of every table
    Eof,
    /// Placeholder for a source line that produced no tokens
    Blank,
    /// A fragment of source text
    Text(String),
}

impl Token {
    pub fn text(&self) -> &str {
        match self {
            Token::Start => "<start>",
            Token::Eof => "<eof>",
            Token::Blank => "",
            Token::Text(text) => text,
        }
    }

    /// Source text of the token; sentinels and blanks have none
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Token::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Token::Blank)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, Token::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

impl From<&str> for Token {
    fn from(text: &str) -> Self {
        if text.is_empty() {
            Token::Blank
        } else {
            Token::Text(text.to_string())
        }
    }
}
