//! Text report printed by the command line tool
//!
//! A clean source lists its declared functions:
//!
//! ```text
//! No errors found
//!
//! Declared functions:
//!   function foo(a,b)
//! ```
//!
//! Otherwise every diagnostic is printed with the tokens of its line and a
//! caret under the offending token:
//!
//! ```text
//! Errors found
//!
//! script.lua, line 1: Invalid statement.
//!     x ~ = 1
//!       ^
//! ```

use crate::config::ReportConfig;
use crate::diagnostics::Diagnostic;
use crate::lexing::TokenTable;
use crate::parsing::Analysis;
use std::fmt::Write;

pub fn render(analysis: &Analysis, file_name: &str, config: &ReportConfig) -> String {
    let mut out = String::new();
    if analysis.is_clean() {
        out.push_str("No errors found\n\n");
        out.push_str("Declared functions:\n");
        for function in analysis.declared_functions() {
            out.push_str(&config.function_indent);
            out.push_str(&function.signature());
            out.push('\n');
        }
    } else {
        out.push_str("Errors found\n\n");
        for diagnostic in analysis.diagnostics() {
            render_diagnostic(&mut out, analysis.table(), diagnostic, file_name, config);
        }
    }
    out
}

fn render_diagnostic(
    out: &mut String,
    table: &TokenTable,
    diagnostic: &Diagnostic,
    file_name: &str,
    config: &ReportConfig,
) {
    let _ = writeln!(
        out,
        "{}, line {}: {}",
        file_name,
        diagnostic.line(),
        diagnostic.message()
    );

    let tokens = table.line(diagnostic.line());
    out.push_str(&config.indent);
    for token in tokens {
        out.push_str(token.text());
        out.push(' ');
    }
    out.push('\n');

    out.push_str(&config.indent);
    out.push_str(&" ".repeat(caret_offset(table, diagnostic)));
    out.push_str(&config.caret);
    out.push('\n');
}

/// Column of the caret: every earlier token plus its trailing space
pub fn caret_offset(table: &TokenTable, diagnostic: &Diagnostic) -> usize {
    table
        .line(diagnostic.line())
        .iter()
        .take(diagnostic.token())
        .map(|token| token.text().chars().count() + 1)
        .sum()
}
