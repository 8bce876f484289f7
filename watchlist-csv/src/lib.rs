//! CSV parsing for watchlist imports.
//!
//! The tokenizer is a [`watchlist_fsm`] transition table: [`grammar`] holds the
//! states and character classes, [`Collector`] holds the field/row buffers the
//! actions write into, and [`parse_csv`] wires both together for one input.
//!
//! ```
//! use watchlist_csv::{Separator, Table, parse_csv};
//!
//! let rows = parse_csv("symbol;price\nSAP;120,5", Separator::Semicolon)?;
//! let table = Table::from_rows(rows);
//! let record = table.records().next().unwrap();
//! assert_eq!(record.get("price"), Some("120,5"));
//! # Ok::<(), watchlist_csv::CsvError>(())
//! ```

mod classes;
mod collector;
mod error;
pub mod grammar;
mod options;
mod parser;
mod row;
mod separator;
mod table;

pub use collector::Collector;
pub use error::{CsvError, QuoteMismatch, Result};
pub use grammar::CsvState;
pub use options::CsvOptions;
pub use parser::{parse_csv, parse_with};
pub use row::Row;
pub use separator::Separator;
pub use table::{Record, Table};

pub use watchlist_fsm as fsm;
