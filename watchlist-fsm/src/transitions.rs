//! Transition tables for the automaton.
//!
//! A table maps every reachable state to an ordered list of [`Transition`]s.
//! The automaton tries them in declaration order and takes the first one
//! whose predicate accepts the current [`Symbol`]. Predicates are closures so
//! a grammar can bake configuration (a separator, a quote character) into the
//! table when it is built; actions are plain functions over a caller-owned
//! context, which keeps all mutable parse state out of the table itself.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::symbol::{Step, Symbol};

/// State labels of a grammar.
///
/// The automaton is generic over the label type and only needs to know which
/// label is absorbing.
pub trait StateLabel: Copy + Eq + Hash + fmt::Debug {
    /// Reaching a terminal state stops
    /// [`Automaton::run`](crate::Automaton::run).
    fn is_terminal(self) -> bool;
}

/// Character class test evaluated against the current symbol.
pub type Predicate = Box<dyn Fn(Symbol) -> bool>;

/// Side effect performed on the context when a transition fires.
pub type Action<C, E> = fn(&mut C, Step) -> Result<(), E>;

pub struct Transition<S, C, E> {
    predicate: Predicate,
    next: S,
    actions: Vec<Action<C, E>>,
}

impl<S: Copy, C, E> Transition<S, C, E> {
    #[inline]
    pub fn accepts(&self, symbol: Symbol) -> bool {
        (self.predicate)(symbol)
    }

    #[inline]
    pub fn next(&self) -> S {
        self.next
    }

    /// Actions in execution order. Empty when the transition only moves.
    pub fn actions(&self) -> &[Action<C, E>] {
        &self.actions
    }
}

impl<S: fmt::Debug, C, E> fmt::Debug for Transition<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("next", &self.next)
            .field("actions", &self.actions.len())
            .finish_non_exhaustive()
    }
}

/// Ordered transitions per state.
pub struct TransitionTable<S, C, E> {
    rules: HashMap<S, Vec<Transition<S, C, E>>>,
}

impl<S, C, E> Default for TransitionTable<S, C, E> {
    fn default() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }
}

impl<S: StateLabel, C, E> TransitionTable<S, C, E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a transition that only changes state.
    pub fn on<P>(&mut self, state: S, predicate: P, next: S) -> &mut Self
    where
        P: Fn(Symbol) -> bool + 'static,
    {
        self.on_with(state, predicate, next, &[])
    }

    /// Append a transition that runs `actions` in order before moving to
    /// `next`.
    pub fn on_with<P>(
        &mut self,
        state: S,
        predicate: P,
        next: S,
        actions: &[Action<C, E>],
    ) -> &mut Self
    where
        P: Fn(Symbol) -> bool + 'static,
    {
        self.rules.entry(state).or_default().push(Transition {
            predicate: Box::new(predicate),
            next,
            actions: actions.to_vec(),
        });
        self
    }

    /// Transitions declared for `state`, in declaration order.
    pub fn transitions(&self, state: S) -> Option<&[Transition<S, C, E>]> {
        self.rules.get(&state).map(Vec::as_slice)
    }

    /// First transition of `state` that accepts `symbol`.
    ///
    /// The outer `Option` is `None` when the state has no entry at all.
    pub fn select(
        &self,
        state: S,
        symbol: Symbol,
    ) -> Option<Option<&Transition<S, C, E>>> {
        self.transitions(state)
            .map(|rules| rules.iter().find(|rule| rule.accepts(symbol)))
    }

    pub fn contains(&self, state: S) -> bool {
        self.rules.contains_key(&state)
    }

    /// Number of states with at least one transition.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<S: fmt::Debug, C, E> fmt::Debug for TransitionTable<S, C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.rules.iter().map(|(state, rules)| (state, rules)))
            .finish()
    }
}
