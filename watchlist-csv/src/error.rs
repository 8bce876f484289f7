use std::fmt;

use thiserror::Error;
use watchlist_fsm::{Position, Symbol};

/// Which side of a quoted field was unbalanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteMismatch {
    /// A quote was opened while another one was still open.
    Open,
    /// A quote was closed without being opened.
    Close,
}

impl fmt::Display for QuoteMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => {
                f.write_str("cannot open a quote that is already open")
            },
            Self::Close => {
                f.write_str("cannot close a quote that was never opened")
            },
        }
    }
}

/// Errors returned by [`parse_csv`](crate::parse_csv).
///
/// A failed parse never yields partial rows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CsvError {
    #[error("unknown parser state {state} at {position}")]
    UnknownState { state: String, position: Position },

    #[error("unexpected {symbol} in state {state} at {position}")]
    NoTransition {
        state: String,
        symbol: Symbol,
        position: Position,
    },

    #[error("{kind} at {position}")]
    QuoteMismatch {
        kind: QuoteMismatch,
        position: Position,
    },

    #[error("unsupported separator {0:?}, expected ',' or ';'")]
    InvalidSeparator(String),
}

impl CsvError {
    /// Where in the input the error was detected.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::UnknownState { position, .. }
            | Self::NoTransition { position, .. }
            | Self::QuoteMismatch { position, .. } => Some(*position),
            Self::InvalidSeparator(_) => None,
        }
    }
}

impl From<watchlist_fsm::Error<CsvError>> for CsvError {
    fn from(err: watchlist_fsm::Error<CsvError>) -> Self {
        match err {
            watchlist_fsm::Error::UnknownState { state, position } => {
                Self::UnknownState { state, position }
            },
            watchlist_fsm::Error::NoTransition {
                state,
                symbol,
                position,
            } => Self::NoTransition {
                state,
                symbol,
                position,
            },
            watchlist_fsm::Error::Action(err) => err,
        }
    }
}

pub type Result<T> = std::result::Result<T, CsvError>;
