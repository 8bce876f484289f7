use log::{debug, trace};

use crate::error::{Error, Result};
use crate::symbol::{Position, Step, Symbol};
use crate::transitions::{StateLabel, TransitionTable};

/// Mealy automaton bound to a [`TransitionTable`].
///
/// The automaton owns only its state and position; everything the actions
/// accumulate lives in the context passed to [`Automaton::run`]. A grammar
/// must give every non-terminal state a transition on [`Symbol::End`] that
/// eventually leads to a terminal state, otherwise `run` does not return.
#[derive(Debug)]
pub struct Automaton<'t, S, C, E> {
    table: &'t TransitionTable<S, C, E>,
    state: S,
    position: Position,
}

impl<'t, S: StateLabel, C, E> Automaton<'t, S, C, E> {
    #[must_use]
    pub fn new(table: &'t TransitionTable<S, C, E>, start: S) -> Self {
        Self {
            table,
            state: start,
            position: Position::default(),
        }
    }

    /// Consume `input` from the current offset until a terminal state is
    /// reached.
    ///
    /// Past the end of `input` the automaton keeps reading
    /// [`Symbol::End`].
    pub fn run(&mut self, input: &str, ctx: &mut C) -> Result<(), E> {
        let mut chars = input.chars().skip(self.position.offset);

        while !self.state.is_terminal() {
            let symbol = chars.next().map_or(Symbol::End, Symbol::Char);
            self.step(symbol, ctx)?;
        }

        debug!(
            "automaton reached terminal state {:?} at {}",
            self.state, self.position
        );
        Ok(())
    }

    /// Feed a single symbol and return the state it led to.
    pub fn step(&mut self, symbol: Symbol, ctx: &mut C) -> Result<S, E> {
        let transition = match self.table.select(self.state, symbol) {
            Some(Some(transition)) => transition,
            Some(None) => {
                return Err(Error::NoTransition {
                    state: format!("{:?}", self.state),
                    symbol,
                    position: self.position,
                });
            },
            None => {
                return Err(Error::UnknownState {
                    state: format!("{:?}", self.state),
                    position: self.position,
                });
            },
        };

        let step = Step {
            symbol,
            position: self.position,
        };
        for action in transition.actions() {
            action(ctx, step).map_err(Error::Action)?;
        }

        trace!(
            "{:?} --{}--> {:?}",
            self.state,
            symbol,
            transition.next()
        );

        self.state = transition.next();
        self.position.advance(symbol);
        Ok(self.state)
    }

    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state.is_terminal()
    }

    #[inline]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Characters consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.position.offset
    }

    #[inline]
    pub fn row(&self) -> usize {
        self.position.row
    }

    #[inline]
    pub fn column(&self) -> usize {
        self.position.column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Word {
        Between,
        Inside,
        Done,
        Orphan,
    }

    impl StateLabel for Word {
        fn is_terminal(self) -> bool {
            self == Word::Done
        }
    }

    #[derive(Debug, Default)]
    struct Words {
        current: String,
        words: Vec<String>,
        positions: Vec<Position>,
    }

    type Outcome = std::result::Result<(), String>;

    impl Words {
        fn push_char(&mut self, step: Step) -> Outcome {
            if let Some(c) = step.symbol.as_char() {
                self.current.push(c);
            }
            Ok(())
        }

        fn finish_word(&mut self, step: Step) -> Outcome {
            self.words.push(std::mem::take(&mut self.current));
            self.positions.push(step.position);
            Ok(())
        }

        fn reject(&mut self, step: Step) -> Outcome {
            Err(format!("rejected at {}", step.position.offset))
        }
    }

    fn words_table() -> TransitionTable<Word, Words, String> {
        let mut table = TransitionTable::new();
        table
            .on(Word::Between, |s| s.is(' ') || s.is('\n'), Word::Between)
            .on_with(
                Word::Between,
                |s| s.as_char().is_some_and(char::is_alphabetic),
                Word::Inside,
                &[Words::push_char],
            )
            .on_with(Word::Between, |s| s.is('!'), Word::Done, &[Words::reject])
            .on(Word::Between, Symbol::is_end, Word::Done)
            .on_with(
                Word::Inside,
                |s| s.as_char().is_some_and(char::is_alphabetic),
                Word::Inside,
                &[Words::push_char],
            )
            .on_with(
                Word::Inside,
                |s| s.is(' ') || s.is('\n'),
                Word::Between,
                &[Words::finish_word],
            )
            .on_with(
                Word::Inside,
                Symbol::is_end,
                Word::Done,
                &[Words::finish_word],
            )
            .on(Word::Done, |_| true, Word::Done);
        table
    }

    #[test]
    fn collects_words_and_tracks_position() {
        let table = words_table();
        let mut words = Words::default();
        let mut automaton = Automaton::new(&table, Word::Between);

        automaton.run("ab cd\nef", &mut words).expect("valid input");

        assert_eq!(words.words, vec!["ab", "cd", "ef"]);
        assert_eq!(words.positions[1].offset, 5);
        assert_eq!(words.positions[2].row, 1);
        assert_eq!(words.positions[2].column, 2);
        assert!(automaton.is_finished());
        assert_eq!(automaton.row(), 1);
        assert_eq!(automaton.column(), 3);
        assert_eq!(automaton.offset(), 9);
    }

    #[test]
    fn empty_input_reads_end_symbol() {
        let table = words_table();
        let mut words = Words::default();
        let mut automaton = Automaton::new(&table, Word::Between);

        automaton.run("", &mut words).expect("valid input");

        assert!(words.words.is_empty());
        assert_eq!(automaton.state(), Word::Done);
        assert_eq!(automaton.offset(), 1);
    }

    #[test]
    fn reports_unmatched_character_with_position() {
        let table = words_table();
        let mut words = Words::default();
        let mut automaton = Automaton::new(&table, Word::Between);

        let err = automaton.run("ab\nc1", &mut words).unwrap_err();

        match &err {
            Error::NoTransition {
                state,
                symbol,
                position,
            } => {
                assert_eq!(state, "Inside");
                assert_eq!(*symbol, Symbol::Char('1'));
                assert_eq!(
                    *position,
                    Position {
                        offset: 4,
                        row: 1,
                        column: 1
                    }
                );
            },
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "no transition from state Inside for '1' (U+0031) at offset 4, \
             row 1, column 1"
        );
    }

    #[test]
    fn reports_unknown_state() {
        let table = words_table();
        let mut words = Words::default();
        let mut automaton = Automaton::new(&table, Word::Orphan);

        let err = automaton.run("a", &mut words).unwrap_err();

        assert!(matches!(
            err,
            Error::UnknownState { ref state, .. } if state == "Orphan"
        ));
    }

    #[test]
    fn action_errors_abort_the_run() {
        let table = words_table();
        let mut words = Words::default();
        let mut automaton = Automaton::new(&table, Word::Between);

        let err = automaton.run("ab !cd", &mut words).unwrap_err();

        assert!(
            matches!(err, Error::Action(ref msg) if msg == "rejected at 3")
        );
        assert_eq!(err.to_string(), "rejected at 3");
        assert_eq!(words.words, vec!["ab"]);
        assert_eq!(automaton.state(), Word::Between);
    }

    #[test]
    fn single_steps_report_next_state() {
        let table = words_table();
        let mut words = Words::default();
        let mut automaton = Automaton::new(&table, Word::Between);

        assert_eq!(
            automaton.step(Symbol::Char('x'), &mut words).ok(),
            Some(Word::Inside)
        );
        assert_eq!(
            automaton.step(Symbol::End, &mut words).ok(),
            Some(Word::Done)
        );
        assert_eq!(words.words, vec!["x"]);
    }
}
