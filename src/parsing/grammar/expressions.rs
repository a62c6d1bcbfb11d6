//! Expressions and operators

use crate::parsing::recovery::Rule;
use crate::parsing::{Parser, Pattern};

impl<'t> Parser<'t> {
    /// An operand followed by any number of `binop exp` pairs
    pub fn exp(&mut self) -> bool {
        let operands: [Rule<'t>; 9] = [
            |p| p.eat("nil"),
            |p| p.eat("false"),
            |p| p.eat("true"),
            Self::number,
            Self::string,
            Self::tripledot,
            Self::function,
            Self::prefixexp,
            Self::tableconstructor,
        ];
        if self.first_of(&operands) {
            return self.exp_tail();
        }
        self.attempt(|p| p.unop() && p.exp() && p.exp_tail())
    }

    /// `{binop exp}`, always succeeds
    pub fn exp_tail(&mut self) -> bool {
        while self.attempt(|p| p.binop() && p.exp()) {}
        true
    }

    /// `exp {',' exp}`
    pub fn explist(&mut self) -> bool {
        if !self.exp() {
            return false;
        }
        while self.eat(",") {
            self.expect_rule("Invalid expression.", Self::exp);
        }
        true
    }

    /// Binary operator.
    ///
    /// Two-character operators arrive as two tokens and are matched on the
    /// joined text of the token under the head and the one after it.
    pub fn binop(&mut self) -> bool {
        let start = self.checkpoint();
        if self.cursor.consume(Pattern::ArithmeticOp).is_match() {
            return true;
        }

        let first = self.cursor.current();
        let second = self.cursor.advance();
        if let (Some(first), Some(second)) = (first.as_text(), second.as_text()) {
            if Pattern::PairedOp.matches_text(&format!("{first}{second}")) {
                return true;
            }
        }

        self.restore(start);
        self.eat(Pattern::RelationalOp)
    }

    pub fn unop(&mut self) -> bool {
        self.eat(Pattern::UnaryOp)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::{Position, TokenTable};
    use crate::parsing::Parser;

    fn binop_span(source: &str) -> Option<Position> {
        let table = TokenTable::from_source(source);
        let mut parser = Parser::new(&table);
        parser.binop().then(|| parser.cursor().position())
    }

    #[test]
    fn test_single_token_operators() {
        for op in ["+", "-", "*", "/", "^", "%", "and", "or", "<", ">"] {
            assert_eq!(binop_span(op), Some(Position::new(1, 0)), "{op}");
        }
    }

    #[test]
    fn test_paired_operators_take_two_tokens() {
        for op in ["~=", "==", ">=", "<=", ".."] {
            assert_eq!(binop_span(op), Some(Position::new(1, 1)), "{op}");
        }
    }

    #[test]
    fn test_relational_without_equals_takes_one_token() {
        assert_eq!(binop_span("< x"), Some(Position::new(1, 0)));
    }

    #[test]
    fn test_lone_tilde_and_equals_are_not_operators() {
        assert_eq!(binop_span("~ x"), None);
        assert_eq!(binop_span("= x"), None);
        assert_eq!(binop_span("."), None);
    }

    #[test]
    fn test_failed_binop_leaves_head_in_place() {
        let table = TokenTable::from_source("x ~");
        let mut parser = Parser::new(&table);
        assert!(parser.eat(crate::parsing::Pattern::Name));
        assert!(!parser.binop());
        assert_eq!(parser.cursor().position(), Position::new(1, 0));
    }

    #[test]
    fn test_explist_reports_missing_expression_after_comma() {
        let table = TokenTable::from_source("a, , b");
        let mut parser = Parser::new(&table);
        assert!(parser.explist());
        assert_eq!(parser.diagnostics().len(), 1);
        assert_eq!(parser.diagnostics()[0].message, "Invalid expression.");
    }
}
