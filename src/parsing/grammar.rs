//! Grammar rules
//!
//! One method per nonterminal of the Lua 5.1 grammar:
//!
//! ```text
//! chunk        -> {stat [';']} [laststat [';']]
//! stat         -> varlist '=' explist | functioncall | do block end
//!               | while exp do block end | repeat block until exp
//!               | if exp then block {elseif exp then block} [else block] end
//!               | for Name '=' exp ',' exp [',' exp] do block end
//!               | for namelist in explist do block end
//!               | function funcname funcbody | local function Name funcbody
//!               | local namelist ['=' explist]
//! laststat     -> return [explist] | break
//! exp          -> (nil | false | true | Number | String | '...' | function
//!                  | prefixexp | tableconstructor | unop exp) exp_tail
//! prefixexp    -> (Name | '(' exp ')') {'[' exp ']' | '.' Name | call_suffix}
//! functioncall -> prefixexp ending in call_suffix
//! ```
//!
//! `prefixexp` folds the call chain into one suffix loop, so a prefix is never
//! parsed twice. Assignments and call statements share that single parse.
//!
//! Every rule returns whether it matched and leaves the head where it started
//! when it did not.

mod declarations;
mod expressions;
mod prefix;
mod statements;
mod tables;
mod terminals;

use super::recovery::Rule;
use super::Parser;

impl<'t> Parser<'t> {
    /// `{stat [';']} [laststat [';']]`, always succeeds
    pub fn chunk(&mut self) -> bool {
        while self.stat() {
            self.eat(";");
        }
        if self.laststat() {
            self.eat(";");
        }
        true
    }

    pub fn block(&mut self) -> bool {
        self.chunk()
    }

    /// Try `rules` in order from the same position
    pub(crate) fn first_of(&mut self, rules: &[Rule<'t>]) -> bool {
        let start = self.checkpoint();
        for rule in rules {
            if rule(self) {
                return true;
            }
            self.restore(start);
        }
        false
    }
}
