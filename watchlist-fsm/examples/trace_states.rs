//! Print every state the automaton walks through for a tiny key=value
//! grammar.
//!
//! ```bash
//! cargo run -p watchlist-fsm --example trace_states -- "aapl=187.2"
//! ```
use std::env;

use watchlist_fsm::{Automaton, StateLabel, Step, Symbol, TransitionTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Pair {
    Key,
    Value,
    Done,
}

impl StateLabel for Pair {
    fn is_terminal(self) -> bool {
        self == Pair::Done
    }
}

#[derive(Default)]
struct Printer {
    seq: usize,
}

impl Printer {
    fn print(&mut self, step: Step) -> Result<(), String> {
        self.seq += 1;
        println!("{:02}: {} at {}", self.seq, step.symbol, step.position);
        Ok(())
    }
}

fn main() {
    let input = env::args().nth(1).unwrap_or_else(|| "aapl=187.2".into());

    let mut table = TransitionTable::new();
    table
        .on_with(Pair::Key, |s| s.is('='), Pair::Value, &[Printer::print])
        .on_with(Pair::Key, |s| !s.is_end(), Pair::Key, &[Printer::print])
        .on_with(Pair::Value, |s| !s.is_end(), Pair::Value, &[Printer::print])
        .on(Pair::Value, Symbol::is_end, Pair::Done);

    let mut printer = Printer::default();
    let mut automaton = Automaton::new(&table, Pair::Key);
    match automaton.run(&input, &mut printer) {
        Ok(()) => println!("finished in {:?}", automaton.state()),
        Err(err) => eprintln!("error: {err}"),
    }
}
