//! Lexical classes tested by the cursor
//!
//! Every class is an anchored regex, so a token matches only when the whole
//! token text belongs to the class. Sentinel and blank slots never match.

use crate::lexing::Token;
use once_cell::sync::Lazy;
use regex::Regex;

/// Lua 5.1 reserved words
pub const RESERVED_WORDS: [&str; 21] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[_A-Za-z][_A-Za-z0-9]*$").unwrap());

static KEYWORD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^(?:{})$", RESERVED_WORDS.join("|"))).unwrap());

static NUMBER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^-?[0-9]+(\.[0-9]+)?$").unwrap());

static DIGITS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());

static STRING_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^("[^"]*"|'[^']*')$"#).unwrap());

static UNARY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:-|not|#)$").unwrap());

static ARITHMETIC_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+|-|\*|/|\^|%|and|or)$").unwrap());

static PAIRED_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:>=|<=|==|~=|\.\.)$").unwrap());

static RELATIONAL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:<|>)$").unwrap());

static FIELD_SEPARATOR_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:,|;)$").unwrap());

static BOUNDARY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:;|end|else|elseif|until)$").unwrap());

/// A class of token texts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// One literal token text
    Exact(&'static str),
    /// Identifier: name-shaped and not reserved
    Name,
    /// One of [`RESERVED_WORDS`]
    Keyword,
    Number,
    /// Unsigned run of digits, the fractional half of a split decimal
    Digits,
    Str,
    UnaryOp,
    /// Operators that arrive as a single token
    ArithmeticOp,
    /// Two-character operators, tested against two joined tokens
    PairedOp,
    RelationalOp,
    FieldSeparator,
    /// Tokens that end a statement without belonging to it
    StatementBoundary,
}

impl Pattern {
    pub fn matches(&self, token: &Token) -> bool {
        token.as_text().is_some_and(|text| self.matches_text(text))
    }

    pub fn matches_text(&self, text: &str) -> bool {
        match self {
            Pattern::Exact(expected) => text == *expected,
            Pattern::Name => NAME_REGEX.is_match(text) && !Pattern::Keyword.matches_text(text),
            Pattern::Keyword => KEYWORD_REGEX.is_match(text),
            Pattern::Number => NUMBER_REGEX.is_match(text),
            Pattern::Digits => DIGITS_REGEX.is_match(text),
            Pattern::Str => STRING_REGEX.is_match(text),
            Pattern::UnaryOp => UNARY_REGEX.is_match(text),
            Pattern::ArithmeticOp => ARITHMETIC_REGEX.is_match(text),
            Pattern::PairedOp => PAIRED_REGEX.is_match(text),
            Pattern::RelationalOp => RELATIONAL_REGEX.is_match(text),
            Pattern::FieldSeparator => FIELD_SEPARATOR_REGEX.is_match(text),
            Pattern::StatementBoundary => BOUNDARY_REGEX.is_match(text),
        }
    }
}

impl From<&'static str> for Pattern {
    fn from(text: &'static str) -> Self {
        Pattern::Exact(text)
    }
}
