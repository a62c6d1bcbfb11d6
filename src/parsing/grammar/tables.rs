//! Table constructors

use crate::parsing::{Parser, Pattern};

impl<'t> Parser<'t> {
    /// `'{' [fieldlist] '}'`
    pub fn tableconstructor(&mut self) -> bool {
        self.attempt(|p| {
            if !p.eat("{") {
                return false;
            }
            if p.fieldlist() {
                p.expect_token("Closing curly brace expected.", "}");
                true
            } else {
                p.eat("}")
            }
        })
    }

    /// `field {fieldsep field} [fieldsep]`
    pub fn fieldlist(&mut self) -> bool {
        if !self.field() {
            return false;
        }
        while self.attempt(|p| p.fieldsep() && p.field()) {}
        self.fieldsep();
        true
    }

    /// `'[' exp ']' '=' exp | Name '=' exp | exp`
    pub fn field(&mut self) -> bool {
        if self.eat("[") {
            self.expect_rule("Invalid expression.", Self::exp);
            self.expect_token("Closing braket expected.", "]");
            self.expect_token("Invalid statement. Equal sign expected.", "=");
            self.expect_rule("Invalid expression.", Self::exp);
            return true;
        }
        // `a == b` is an expression field, not `a =` followed by `= b`
        if self.attempt(|p| p.name() && p.eat("=") && !p.peek("=")) {
            self.expect_rule("Invalid expression.", Self::exp);
            return true;
        }
        self.exp()
    }

    pub fn fieldsep(&mut self) -> bool {
        self.eat(Pattern::FieldSeparator)
    }
}
