//! Statements and block constructs

use crate::parsing::recovery::Rule;
use crate::parsing::{Parser, Pattern};

const END_EXPECTED: &str = "Invalid statement. Keyword 'end' expected.";
const DO_EXPECTED: &str = "Invalid statement. Keyword 'do' expected.";
const THEN_EXPECTED: &str = "Invalid statement. Keyword 'then' expected.";
const UNTIL_EXPECTED: &str = "Invalid statement. Keyword 'until' expected.";
const IN_EXPECTED: &str = "Invalid statement. Keyword 'in' expected.";
const INVALID_EXPRESSION: &str = "Invalid expression.";
const INVALID_EXPRESSION_LIST: &str = "Invalid expression list.";

impl<'t> Parser<'t> {
    pub fn stat(&mut self) -> bool {
        let statements: [Rule<'t>; 8] = [
            Self::assignment_or_call,
            Self::do_block,
            Self::while_loop,
            Self::repeat_loop,
            Self::if_statement,
            Self::for_loop,
            Self::function_statement,
            Self::local_statement,
        ];
        self.first_of(&statements)
    }

    /// `return [explist] | break`
    pub fn laststat(&mut self) -> bool {
        if self.eat("return") {
            if self.explist() {
                self.finish_statement(INVALID_EXPRESSION_LIST);
            }
            return true;
        }
        self.eat("break")
    }

    /// `varlist '=' explist | functioncall`
    ///
    /// Both forms open with a prefix expression, which is parsed once. Without
    /// a following `=` the statement is the longest call it starts with.
    pub fn assignment_or_call(&mut self) -> bool {
        let start = self.checkpoint();
        let Some(first) = self.suffixedexp() else {
            return false;
        };
        if self.attempt(|p| p.more_vars() && p.eat("=")) {
            self.expect_rule_through_statement(
                INVALID_EXPRESSION_LIST,
                Self::explist_after_equals,
            );
            return true;
        }
        match first.last_call {
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

    /// `do block end`
    pub fn do_block(&mut self) -> bool {
        if !self.eat("do") {
            return false;
        }
        self.block();
        self.expect_token(END_EXPECTED, "end");
        true
    }

    /// `while exp do block end`
    pub fn while_loop(&mut self) -> bool {
        if !self.eat("while") {
            return false;
        }
        self.expect_rule(INVALID_EXPRESSION, Self::exp);
        self.expect_token(DO_EXPECTED, "do");
        self.block();
        self.expect_token(END_EXPECTED, "end");
        true
    }

    /// `repeat block until exp`
    pub fn repeat_loop(&mut self) -> bool {
        if !self.eat("repeat") {
            return false;
        }
        self.block();
        self.expect_token(UNTIL_EXPECTED, "until");
        self.expect_rule_through_statement(INVALID_EXPRESSION, Self::exp);
        true
    }

    /// `if exp then block {elseif exp then block} [else block] end`
    pub fn if_statement(&mut self) -> bool {
        if !self.eat("if") {
            return false;
        }
        self.condition_and_then();
        self.block();

        loop {
            if self.eat("elseif") {
                self.condition_and_then();
            } else if !self.misspelled_elseif() {
                break;
            }
            self.block();
        }

        if self.eat("else") {
            self.block();
        }
        self.expect_token(END_EXPECTED, "end");
        true
    }

    fn condition_and_then(&mut self) {
        self.expect_rule(INVALID_EXPRESSION, Self::exp);
        self.expect_token(THEN_EXPECTED, "then");
    }

    /// A branch that reads `<typo> exp then`, such as `elsif x then`.
    ///
    /// The typo is reported and the branch is parsed as an `elseif`.
    fn misspelled_elseif(&mut self) -> bool {
        let branch_end = self.checkpoint();
        self.cursor.advance();
        let typo = self.cursor.position();
        if self.exp() && self.eat("then") {
            self.report_at(typo, "Keyword 'elseif' expected.");
            true
        } else {
            self.restore(branch_end);
            false
        }
    }

    /// Numeric `for` when `Name '='` follows the keyword, generic otherwise
    pub fn for_loop(&mut self) -> bool {
        if !self.eat("for") {
            return false;
        }

        if self.attempt(|p| p.name() && p.eat("=")) {
            self.expect_rule(INVALID_EXPRESSION, Self::exp);
            self.expect_token("Missing comma after expression.", ",");
            self.expect_rule(INVALID_EXPRESSION, Self::exp);
            if self.eat(",") {
                self.expect_rule(INVALID_EXPRESSION, Self::exp);
            }
        } else if self.namelist() {
            self.expect_token(IN_EXPECTED, "in");
            self.expect_rule(INVALID_EXPRESSION_LIST, Self::explist);
        } else {
            return false;
        }

        self.expect_token(DO_EXPECTED, "do");
        self.block();
        self.expect_token(END_EXPECTED, "end");
        true
    }

    /// `local function Name funcbody | local namelist ['=' explist]`
    pub fn local_statement(&mut self) -> bool {
        let before_keyword = self.checkpoint();
        if !self.eat("local") {
            return false;
        }

        let function = self.speculate(|p| {
            if p.eat("function") && p.name() {
                p.funcbody()
            } else {
                None
            }
        });
        if let Some(signature_end) = function {
            self.record_function(before_keyword, signature_end);
            return true;
        }

        if !self.namelist() {
            return false;
        }
        if self.eat("=") {
            self.expect_rule(INVALID_EXPRESSION_LIST, Self::explist_after_equals);
        }
        true
    }

    /// The expression list to the right of an `=`.
    ///
    /// A list may continue on the lines after the `=`, but only when the
    /// statement ends right after it. Otherwise the `=` is taken to be missing
    /// its list and whatever follows is left for the next statement.
    pub fn explist_after_equals(&mut self) -> bool {
        if self.cursor.next_on_same_line() {
            return self.explist();
        }
        self.attempt(|p| p.explist() && p.at_statement_end())
    }

    /// Whether the next token belongs to another statement
    fn at_statement_end(&self) -> bool {
        let mut lookahead = self.cursor;
        let token = lookahead.advance();
        token.is_eof()
            || lookahead.line() != self.cursor.line()
            || Pattern::StatementBoundary.matches(token)
    }
}

#[cfg(test)]
mod tests {
    use crate::lexing::{Position, TokenTable};
    use crate::parsing::Parser;

    fn run(source: &str) -> Vec<(Position, String)> {
        let table = TokenTable::from_source(source);
        Parser::new(&table)
            .run()
            .diagnostics
            .into_iter()
            .map(|d| (d.position, d.message))
            .collect()
    }

    #[test]
    fn test_generic_for_is_not_mistaken_for_numeric() {
        assert!(run("for k in pairs(t) do end").is_empty());
    }

    #[test]
    fn test_missing_comma_in_numeric_for() {
        let diagnostics = run("for i = 1 10 do end");
        assert_eq!(
            diagnostics[0],
            (Position::new(1, 4), "Missing comma after expression.".to_string())
        );
    }

    #[test]
    fn test_misspelled_elseif() {
        let diagnostics = run("if a then\n  b()\nelsif c then\n  d()\nend");
        assert_eq!(
            diagnostics,
            vec![(Position::new(3, 0), "Keyword 'elseif' expected.".to_string())]
        );
    }

    #[test]
    fn test_missing_then() {
        let diagnostics = run("if a b() end");
        assert_eq!(diagnostics[0].1, "Invalid statement. Keyword 'then' expected.");
        assert_eq!(diagnostics[0].0, Position::new(1, 2));
    }

    #[test]
    fn test_repeat_condition_must_end_the_statement() {
        let diagnostics = run("repeat x() until x 34");
        assert_eq!(
            diagnostics,
            vec![(Position::new(1, 5), "Invalid expression.".to_string())]
        );
    }

    #[test]
    fn test_local_without_expression_on_line() {
        let diagnostics = run("local x =\ny = 2");
        assert_eq!(
            diagnostics,
            vec![(Position::new(1, 2), "Invalid expression list.".to_string())]
        );
    }

    #[test]
    fn test_expression_list_on_following_lines() {
        assert!(run("local t =\n  {1, 2}").is_empty());
        assert!(run("local x =\n  1").is_empty());
        assert!(run("local name =\n  'x' .. 'y'\nresult =\n  compute(1, 2)\n").is_empty());
        assert!(run("total = a +\n  b").is_empty());
    }

    #[test]
    fn test_expression_list_on_next_line_must_end_the_statement() {
        let diagnostics = run("x =\n  1 2");
        assert_eq!(
            diagnostics[0],
            (Position::new(1, 1), "Invalid expression list.".to_string())
        );
    }

    #[test]
    fn test_call_statement_keeps_longest_call() {
        let diagnostics = run("f(x).y");
        assert_eq!(
            diagnostics,
            vec![(Position::new(1, 4), "Invalid statement.".to_string())]
        );
    }

    #[test]
    fn test_return_with_trailing_tokens() {
        let diagnostics = run("return a b");
        assert_eq!(
            diagnostics,
            vec![(Position::new(1, 1), "Invalid expression list.".to_string())]
        );
    }

    #[test]
    fn test_bare_return_and_break() {
        assert!(run("while x do break end\nreturn").is_empty());
    }
}
