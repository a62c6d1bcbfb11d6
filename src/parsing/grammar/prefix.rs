//! Prefix expressions, variables and function calls
//!
//! Every prefix expression is parsed once as a primary followed by a run of
//! suffixes. Callers that need a call, or need an assignable expression,
//! inspect the [`Suffixed`] summary instead of parsing the prefix again.

use crate::parsing::{Checkpoint, Parser};

const CLOSING_BRACKET_EXPECTED: &str = "Closing braket expected.";

/// What a parsed prefix expression turned out to be
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Suffixed {
    /// Head position right after the last call suffix, if there was one
    pub last_call: Option<Checkpoint>,
}

impl<'t> Parser<'t> {
    /// `(Name | '(' exp ')') {'[' exp ']' | '.' Name | call_suffix}`
    pub fn prefixexp(&mut self) -> bool {
        self.suffixedexp().is_some()
    }

    pub(crate) fn suffixedexp(&mut self) -> Option<Suffixed> {
        if !self.primary() {
            return None;
        }
        let mut last_call = None;
        loop {
            self.prefix_tail();
            if !self.call_suffix() {
                return Some(Suffixed { last_call });
            }
            last_call = Some(self.checkpoint());
        }
    }

    /// `Name | '(' exp ')'`
    fn primary(&mut self) -> bool {
        if self.name() {
            return true;
        }
        if !self.eat("(") {
            return false;
        }
        self.expect_rule("Invalid expression.", Self::exp);
        self.expect_token("Closing parenthesis expected.", ")");
        true
    }

    /// `{'[' exp ']' | '.' Name}`, always succeeds
    pub fn prefix_tail(&mut self) -> bool {
        loop {
            if self.eat("[") {
                self.expect_rule("Invalid expression.", Self::exp);
                self.expect_token(CLOSING_BRACKET_EXPECTED, "]");
            } else if !self.attempt(|p| p.eat(".") && p.name()) {
                return true;
            }
        }
    }

    /// The longest prefix expression that ends in a call
    pub fn functioncall(&mut self) -> bool {
        let start = self.checkpoint();
        match self.suffixedexp().and_then(|suffixed| suffixed.last_call) {
            Some(after_call) => {
                self.restore(after_call);
                true
            }
            None => {
                self.restore(start);
                false
            }
        }
    }

    /// `args | ':' Name args`
    pub fn call_suffix(&mut self) -> bool {
        self.args() || self.attempt(|p| p.eat(":") && p.name() && p.args())
    }

    /// `'(' [explist] ')' | tableconstructor | String`
    pub fn args(&mut self) -> bool {
        if self.tableconstructor() || self.string() {
            return true;
        }
        self.attempt(|p| {
            if !p.eat("(") {
                return false;
            }
            let open = p.checkpoint();
            if p.explist() && p.eat(")") {
                return true;
            }
            p.restore(open);
            p.eat(")")
        })
    }

    /// `prefixexp`; trailing `'[' exp ']'` is already part of the suffix run
    pub fn var(&mut self) -> bool {
        self.prefixexp()
    }

    /// `var {',' var}`
    pub fn varlist(&mut self) -> bool {
        self.var() && self.more_vars()
    }

    /// `{',' var}`, always succeeds
    pub(crate) fn more_vars(&mut self) -> bool {
        while self.eat(",") {
            self.expect_rule("Invalid variable.", Self::var);
        }
        true
    }
}
