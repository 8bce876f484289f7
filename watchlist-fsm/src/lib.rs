//! Character-level Mealy automaton.
//!
//! A grammar is described as a [`TransitionTable`]: for every state an ordered
//! list of `(predicate, next state, actions)` triples. The [`Automaton`] walks
//! a string one character at a time, picks the first transition whose
//! predicate accepts the character, runs its actions against a caller-owned
//! context and moves on, tracking offset, row and column as it goes. Once the
//! input is exhausted it keeps feeding [`Symbol::End`] until the grammar
//! reaches a terminal state.
//!
//! The crate knows nothing about what the states mean; see `watchlist-csv`
//! for the CSV grammar built on top of it.

mod error;
mod machine;
mod symbol;
mod transitions;

pub use error::{Error, Result};
pub use machine::Automaton;
pub use symbol::{Position, Step, Symbol};
pub use transitions::{
    Action, Predicate, StateLabel, Transition, TransitionTable,
};
