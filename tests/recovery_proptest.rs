//! Property-based tests for the cursor and the recovering parser
//!
//! Random token soup must never hang the parser or place a diagnostic outside
//! the table, and checkpoints must restore exactly whatever happened between.

use luasyntax::parsing::{Cursor, Parser};
use luasyntax::TokenTable;
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "x", "y", "f", "1", "'s'", "=", "~", "(", ")", "{", "}", "[", "]", ",", ";", ".", ":", "+",
    "<", "if", "then", "else", "end", "local", "function", "return", "do", "while", "for", "in",
    "repeat", "until", "not",
];

/// Small random tables: deep nesting makes backtracking expensive
fn token_lines() -> impl Strategy<Value = Vec<Vec<&'static str>>> {
    prop::collection::vec(
        prop::collection::vec(prop::sample::select(VOCABULARY), 0..6),
        0..7,
    )
}

#[derive(Debug, Clone, Copy)]
enum Move {
    Advance,
    Retreat,
}

fn moves() -> impl Strategy<Value = Vec<Move>> {
    prop::collection::vec(prop_oneof![Just(Move::Advance), Just(Move::Retreat)], 0..40)
}

fn apply(cursor: &mut Cursor<'_>, moves: &[Move]) {
    for step in moves {
        match step {
            Move::Advance => {
                cursor.advance();
            }
            Move::Retreat => cursor.retreat(),
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn parser_terminates_with_diagnostics_inside_the_table(lines in token_lines()) {
        let table = TokenTable::from_token_lines(lines);
        let outcome = Parser::new(&table).run();
        for diagnostic in &outcome.diagnostics {
            prop_assert!(table.get(diagnostic.position).is_some());
            prop_assert!(!table.get(diagnostic.position).unwrap().is_blank());
        }
    }

    #[test]
    fn checkpoint_restore_is_identity(
        lines in token_lines(),
        before in moves(),
        between in moves(),
        nested in moves(),
    ) {
        let table = TokenTable::from_token_lines(lines);
        let mut cursor = Cursor::new(&table);
        apply(&mut cursor, &before);

        let outer = cursor.checkpoint();
        let at_outer = cursor.position();
        apply(&mut cursor, &between);

        let inner = cursor.checkpoint();
        let at_inner = cursor.position();
        apply(&mut cursor, &nested);

        cursor.restore(inner);
        prop_assert_eq!(cursor.position(), at_inner);
        cursor.restore(outer);
        prop_assert_eq!(cursor.position(), at_outer);
    }

    #[test]
    fn head_never_rests_on_a_blank_slot(lines in token_lines(), steps in moves()) {
        let table = TokenTable::from_token_lines(lines);
        let mut cursor = Cursor::new(&table);
        for step in steps {
            apply(&mut cursor, &[step]);
            prop_assert!(!cursor.current().is_blank());
        }
    }

    #[test]
    fn function_records_start_at_their_keyword(lines in token_lines()) {
        let table = TokenTable::from_token_lines(lines);
        let outcome = Parser::new(&table).run();
        for function in &outcome.functions {
            let first = function.tokens.first().map(String::as_str);
            prop_assert!(matches!(first, Some("function") | Some("local")));
            prop_assert_eq!(table.get(function.position).map(|t| t.text()), first);
        }
    }
}
