//! Accumulation side of the CSV grammar.
//!
//! The grammar only decides *when* something happens; the [`Collector`]
//! decides *what* happens. Each public method is an action referenced from
//! the transition table and receives the [`Step`] that triggered it.

use std::mem;

use log::trace;
use watchlist_fsm::Step;

use crate::error::{CsvError, QuoteMismatch, Result};
use crate::row::Row;

/// Parse context owned by a single parse call.
#[derive(Debug, Default)]
pub struct Collector {
    /// Text of the field being scanned.
    buf: String,
    /// Column index the next flushed field is stored at.
    col: usize,
    /// Fields of the row being scanned.
    cols: Row,
    /// Completed rows.
    lines: Vec<Row>,
    /// 1 while inside a quoted field.
    quotes: u8,
}

impl Collector {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the current character to the field buffer.
    pub fn buffer_text(&mut self, step: Step) -> Result<()> {
        if let Some(c) = step.symbol.as_char() {
            self.buf.push(c);
        }
        Ok(())
    }

    /// Store the buffered field at the current column.
    pub fn col_ready(&mut self, step: Step) -> Result<()> {
        self.ensure_closed(step)?;
        self.cols.insert(self.col, mem::take(&mut self.buf));
        self.col += 1;
        Ok(())
    }

    /// Move the current row into the result and start a new one.
    pub fn row_ready(&mut self, step: Step) -> Result<()> {
        self.ensure_closed(step)?;
        trace!("row {} ready at {}", self.lines.len(), step.position);
        self.lines.push(mem::take(&mut self.cols));
        self.col = 0;
        Ok(())
    }

    /// Flush the trailing field and row when input ends right after a
    /// separator. Does nothing when no field of the row was stored yet, so a
    /// final line terminator never produces an extra empty row.
    pub fn row_ready_if_pending(&mut self, step: Step) -> Result<()> {
        if self.col == 0 {
            return Ok(());
        }
        self.col_ready(step)?;
        self.row_ready(step)
    }

    pub fn open_quote(&mut self, step: Step) -> Result<()> {
        if self.quotes != 0 {
            return Err(CsvError::QuoteMismatch {
                kind: QuoteMismatch::Open,
                position: step.position,
            });
        }
        self.quotes = 1;
        Ok(())
    }

    pub fn close_quote(&mut self, step: Step) -> Result<()> {
        if self.quotes != 1 {
            return Err(CsvError::QuoteMismatch {
                kind: QuoteMismatch::Close,
                position: step.position,
            });
        }
        self.quotes = 0;
        Ok(())
    }

    /// Fields and rows may only be flushed outside quotes.
    fn ensure_closed(&self, step: Step) -> Result<()> {
        if self.quotes != 0 {
            return Err(CsvError::QuoteMismatch {
                kind: QuoteMismatch::Open,
                position: step.position,
            });
        }
        Ok(())
    }

    /// Rows completed so far.
    pub fn rows(&self) -> &[Row] {
        &self.lines
    }

    /// `true` while a quoted field is open.
    pub fn in_quote(&self) -> bool {
        self.quotes != 0
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.lines
    }
}
