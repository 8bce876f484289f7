use std::fmt;

/// Unit of input handed to predicates and actions.
///
/// Once the input is exhausted the automaton keeps feeding [`Symbol::End`]
/// until the grammar reaches its terminal state, so every state can declare
/// what end of input means for it. A literal `'\0'` in the input stays a
/// regular [`Symbol::Char`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Char(char),
    End,
}

impl Symbol {
    /// Numeric code point of the character, `None` for end of input.
    pub fn code_point(self) -> Option<u32> {
        match self {
            Self::Char(c) => Some(c as u32),
            Self::End => None,
        }
    }

    pub fn as_char(self) -> Option<char> {
        match self {
            Self::Char(c) => Some(c),
            Self::End => None,
        }
    }

    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Self::End)
    }

    /// `true` when the symbol is exactly `c`.
    #[inline]
    pub fn is(self, c: char) -> bool {
        self == Self::Char(c)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::Char(c)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Char(c) => write!(f, "{:?} (U+{:04X})", c, *c as u32),
            Self::End => f.write_str("end of input"),
        }
    }
}

/// Location of the automaton inside the input.
///
/// `offset` counts characters, not bytes. `row` is incremented by `\n`;
/// `column` is reset by both `\n` and `\r`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub offset: usize,
    pub row: usize,
    pub column: usize,
}

impl Position {
    /// Position after consuming `symbol`.
    pub(crate) fn advance(&mut self, symbol: Symbol) {
        self.offset += 1;
        match symbol {
            Symbol::Char('\n') => {
                self.row += 1;
                self.column = 0;
            },
            Symbol::Char('\r') => self.column = 0,
            _ => self.column += 1,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset {}, row {}, column {}",
            self.offset, self.row, self.column
        )
    }
}

/// What an action sees: the symbol that triggered the transition and the
/// position it was read at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub symbol: Symbol,
    pub position: Position,
}
