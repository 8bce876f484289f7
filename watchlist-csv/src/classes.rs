//! Character classes used by the grammar.
//!
//! The separator-dependent classes return closures so the separator is
//! fixed when the transition table is built.

use watchlist_fsm::Symbol;

use crate::separator::Separator;

#[inline]
pub(crate) fn end(symbol: Symbol) -> bool {
    symbol.is_end()
}

#[inline]
pub(crate) fn quote(symbol: Symbol) -> bool {
    symbol.is('"')
}

/// Tab or space.
#[inline]
pub(crate) fn whitespace(symbol: Symbol) -> bool {
    matches!(symbol, Symbol::Char(' ' | '\t'))
}

pub(crate) fn literal(c: char) -> impl Fn(Symbol) -> bool + 'static {
    move |symbol| symbol.is(c)
}

pub(crate) fn separator(sep: Separator) -> impl Fn(Symbol) -> bool + 'static {
    literal(sep.as_char())
}

/// Characters allowed in a field without quoting: letters, digits, `-`,
/// `(`, `)`, `.` and the reserved mark that is not the separator.
pub(crate) fn text(sep: Separator) -> impl Fn(Symbol) -> bool + 'static {
    let other = sep.other();
    move |symbol| match symbol {
        Symbol::Char(c) => {
            c.is_alphanumeric()
                || matches!(c, '-' | '(' | ')' | '.')
                || c == other
        },
        Symbol::End => false,
    }
}
