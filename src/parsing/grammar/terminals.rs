//! Single-token rules and identifier lists

use crate::parsing::{Parser, Pattern};

impl<'t> Parser<'t> {
    /// An identifier; reserved words never qualify
    pub fn name(&mut self) -> bool {
        self.eat(Pattern::Name)
    }

    /// A numeral. The tokenizer splits `3.14` at the dot, so a `.` followed by
    /// a run of digits is taken back in as the fraction.
    pub fn number(&mut self) -> bool {
        if !self.eat(Pattern::Number) {
            return false;
        }
        self.attempt(|p| p.eat(".") && p.eat(Pattern::Digits));
        true
    }

    pub fn string(&mut self) -> bool {
        self.eat(Pattern::Str)
    }

    /// `...`, three consecutive `.` tokens
    pub fn tripledot(&mut self) -> bool {
        self.attempt(|p| p.eat(".") && p.eat(".") && p.eat("."))
    }

    /// `Name {',' Name}`
    pub fn namelist(&mut self) -> bool {
        if !self.name() {
            return false;
        }
        while self.attempt(|p| p.eat(",") && p.name()) {}
        true
    }
}
