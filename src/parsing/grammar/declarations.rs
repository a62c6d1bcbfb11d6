//! Function declarations and bodies

use crate::parsing::cursor::Checkpoint;
use crate::parsing::Parser;

impl<'t> Parser<'t> {
    /// `function funcname funcbody`, recorded when it parses
    pub fn function_statement(&mut self) -> bool {
        let before_keyword = self.checkpoint();
        let signature_end = self.speculate(|p| {
            if p.eat("function") && p.funcname() {
                p.funcbody()
            } else {
                None
            }
        });
        match signature_end {
            Some(signature_end) => {
                self.record_function(before_keyword, signature_end);
                true
            }
            None => false,
        }
    }

    /// Anonymous `function funcbody` expression
    pub fn function(&mut self) -> bool {
        self.speculate(|p| if p.eat("function") { p.funcbody() } else { None })
            .is_some()
    }

    /// `'(' [parlist] ')' block end`
    ///
    /// Returns the head position right after the parameter list.
    pub fn funcbody(&mut self) -> Option<Checkpoint> {
        if !self.eat("(") {
            return None;
        }
        self.parlist();
        self.expect_token("Missing closing parenthesis.", ")");
        let signature_end = self.checkpoint();
        self.block();
        self.expect_token("Invalid statement. Keyword 'end' expected.", "end");
        Some(signature_end)
    }

    /// `Name {'.' Name} [':' Name]`
    ///
    /// A bad identifier after `.` or `:` is reported but does not fail the
    /// declaration.
    pub fn funcname(&mut self) -> bool {
        if !self.name() {
            return false;
        }
        while self.eat(".") {
            if !self.name() {
                self.report("Invalid identifier after period.");
                self.skip_bad_identifier();
            }
        }
        if self.eat(":") && !self.name() {
            self.report("Invalid identifier after colon.");
            self.skip_bad_identifier();
        }
        true
    }

    /// Step over the token in place of an identifier, unless it opens the
    /// parameter list
    fn skip_bad_identifier(&mut self) {
        if !self.peek("(") {
            self.cursor.advance();
        }
    }

    /// `namelist [',' '...'] | '...'`
    pub fn parlist(&mut self) -> bool {
        if self.namelist() {
            if self.eat(",") {
                self.expect_rule("Invalid syntax.", Self::tripledot);
            }
            return true;
        }
        self.tripledot()
    }
}
