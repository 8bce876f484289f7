//! Transition table of the CSV tokenizer.
//!
//! Quoted fields follow RFC 4180: separators, `\r` and `\n` are literal
//! inside quotes and `""` decodes to a single `"`. Whitespace between a
//! closing quote and the next separator or line terminator is dropped.
//!
//! Line terminators are not coalesced except for `\r\n` seen from
//! [`CsvState::Cr`]; a terminator that follows another one flushes an extra
//! empty row.

use watchlist_fsm::{Action, StateLabel, TransitionTable};

use crate::classes::{end, literal, quote, separator, text, whitespace};
use crate::collector::Collector;
use crate::error::CsvError;
use crate::separator::Separator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsvState {
    /// Beginning of a field.
    Start,
    /// Just consumed a `\r` that terminated a row.
    Cr,
    /// Just consumed a line terminator.
    Lf,
    /// Inside an unquoted field.
    Text,
    /// Inside a quoted field.
    Escaped,
    /// Saw a quote inside a quoted field: either the closing quote or the
    /// first half of `""`.
    Quote1,
    IgnoreWhitespaceAfterClosingQuote,
    Ready,
}

impl StateLabel for CsvState {
    fn is_terminal(self) -> bool {
        self == CsvState::Ready
    }
}

pub type CsvTable = TransitionTable<CsvState, Collector, CsvError>;

type Rule = Action<Collector, CsvError>;

const BUFFER: &[Rule] = &[Collector::buffer_text];
const FIELD: &[Rule] = &[Collector::col_ready];
const ROW: &[Rule] = &[Collector::row_ready];
const FIELD_ROW: &[Rule] = &[Collector::col_ready, Collector::row_ready];
const PENDING: &[Rule] = &[Collector::row_ready_if_pending];
const OPEN: &[Rule] = &[Collector::open_quote];
const CLOSE: &[Rule] = &[Collector::close_quote];
const CLOSE_FIELD: &[Rule] = &[Collector::close_quote, Collector::col_ready];
const CLOSE_FIELD_ROW: &[Rule] = &[
    Collector::close_quote,
    Collector::col_ready,
    Collector::row_ready,
];

/// Build the table for `sep`. Called once per parse.
pub fn transitions(sep: Separator) -> CsvTable {
    use CsvState::*;

    let mut table = CsvTable::new();

    table
        .on_with(Start, whitespace, Text, BUFFER)
        .on_with(Start, text(sep), Text, BUFFER)
        .on_with(Start, quote, Escaped, OPEN)
        .on_with(Start, separator(sep), Start, FIELD)
        .on_with(Start, literal('\r'), Cr, FIELD_ROW)
        .on_with(Start, literal('\n'), Lf, FIELD_ROW)
        .on_with(Start, end, Ready, PENDING);

    table
        .on(Cr, literal('\n'), Lf)
        .on_with(Cr, whitespace, Text, BUFFER)
        .on_with(Cr, text(sep), Text, BUFFER)
        .on_with(Cr, quote, Escaped, OPEN)
        .on_with(Cr, separator(sep), Start, FIELD)
        .on_with(Cr, literal('\r'), Cr, FIELD_ROW)
        .on_with(Cr, end, Ready, PENDING);

    table
        .on_with(Lf, whitespace, Text, BUFFER)
        .on_with(Lf, text(sep), Text, BUFFER)
        .on_with(Lf, quote, Escaped, OPEN)
        .on_with(Lf, separator(sep), Start, FIELD)
        .on_with(Lf, literal('\r'), Cr, FIELD_ROW)
        .on_with(Lf, literal('\n'), Lf, FIELD_ROW)
        .on_with(Lf, end, Ready, PENDING);

    // A quote inside an unquoted field can never be closed.
    table
        .on_with(Text, whitespace, Text, BUFFER)
        .on_with(Text, text(sep), Text, BUFFER)
        .on_with(Text, separator(sep), Start, FIELD)
        .on_with(Text, literal('\r'), Lf, FIELD_ROW)
        .on_with(Text, literal('\n'), Start, FIELD_ROW)
        .on_with(Text, end, Ready, FIELD_ROW)
        .on_with(Text, quote, Text, CLOSE);

    table
        .on_with(Escaped, whitespace, Escaped, BUFFER)
        .on_with(Escaped, text(sep), Escaped, BUFFER)
        .on_with(Escaped, separator(sep), Escaped, BUFFER)
        .on_with(Escaped, literal('\r'), Escaped, BUFFER)
        .on_with(Escaped, literal('\n'), Escaped, BUFFER)
        .on(Escaped, quote, Quote1);

    table
        .on_with(Quote1, quote, Escaped, BUFFER)
        .on_with(
            Quote1,
            whitespace,
            IgnoreWhitespaceAfterClosingQuote,
            CLOSE_FIELD,
        )
        .on_with(Quote1, separator(sep), Start, CLOSE_FIELD)
        .on_with(Quote1, literal('\r'), Lf, CLOSE_FIELD_ROW)
        .on_with(Quote1, literal('\n'), Start, CLOSE_FIELD_ROW)
        .on_with(Quote1, end, Ready, CLOSE_FIELD_ROW);

    table
        .on(
            IgnoreWhitespaceAfterClosingQuote,
            whitespace,
            IgnoreWhitespaceAfterClosingQuote,
        )
        .on(IgnoreWhitespaceAfterClosingQuote, separator(sep), Start)
        .on_with(IgnoreWhitespaceAfterClosingQuote, literal('\r'), Lf, ROW)
        .on_with(IgnoreWhitespaceAfterClosingQuote, literal('\n'), Start, ROW)
        .on_with(IgnoreWhitespaceAfterClosingQuote, end, Ready, ROW);

    table.on(Ready, |_| true, Ready);

    table
}
