use thiserror::Error;

use crate::symbol::{Position, Symbol};

/// Failures raised while driving an automaton.
///
/// `E` is the error type of the context actions. Every variant is fatal for
/// the current run.
#[derive(Debug, Error)]
pub enum Error<E> {
    #[error("unknown state {state} at {position}")]
    UnknownState { state: String, position: Position },

    #[error("no transition from state {state} for {symbol} at {position}")]
    NoTransition {
        state: String,
        symbol: Symbol,
        position: Position,
    },

    #[error(transparent)]
    Action(E),
}

impl<E> Error<E> {
    /// Position the automaton was at when the error was raised, if known.
    pub fn position(&self) -> Option<Position> {
        match self {
            Self::UnknownState { position, .. }
            | Self::NoTransition { position, .. } => Some(*position),
            Self::Action(_) => None,
        }
    }
}

pub type Result<T, E> = std::result::Result<T, Error<E>>;
