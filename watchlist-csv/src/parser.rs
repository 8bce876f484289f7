use log::debug;
use watchlist_fsm::Automaton;

use crate::collector::Collector;
use crate::error::Result;
use crate::grammar::{self, CsvState};
use crate::options::CsvOptions;
use crate::row::Row;
use crate::separator::Separator;

/// Parse a whole CSV document.
///
/// Returns one [`Row`] per record in input order, or the first error found;
/// rows parsed before the error are discarded. Empty input yields no rows.
///
/// # Examples
///
/// ```
/// use watchlist_csv::{Separator, parse_csv};
///
/// let input = "AAPL,\"Apple, Inc.\"\nMSFT,Microsoft";
/// let rows = parse_csv(input, Separator::Comma)?;
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].get(1), Some("Apple, Inc."));
/// # Ok::<(), watchlist_csv::CsvError>(())
/// ```
pub fn parse_csv(input: &str, separator: Separator) -> Result<Vec<Row>> {
    let table = grammar::transitions(separator);
    let mut collector = Collector::new();

    Automaton::new(&table, CsvState::Start).run(input, &mut collector)?;

    let rows = collector.into_rows();
    debug!("parsed {} csv rows (separator {separator:?})", rows.len());
    Ok(rows)
}

/// [`parse_csv`] with the separator taken from `options`.
pub fn parse_with(input: &str, options: &CsvOptions) -> Result<Vec<Row>> {
    parse_csv(input, options.separator)
}
