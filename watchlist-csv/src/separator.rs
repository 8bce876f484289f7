use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CsvError;

/// Field separator accepted by the parser.
///
/// Comma and semicolon are both reserved punctuation: whichever one is not
/// the separator is treated as ordinary field text.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    #[serde(alias = ",")]
    Comma,
    #[serde(alias = ";")]
    Semicolon,
}

impl Separator {
    #[inline]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
        }
    }

    /// The reserved mark that is plain text under this separator.
    #[inline]
    pub const fn other(self) -> char {
        match self {
            Self::Comma => ';',
            Self::Semicolon => ',',
        }
    }
}

impl TryFrom<char> for Separator {
    type Error = CsvError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            ',' => Ok(Self::Comma),
            ';' => Ok(Self::Semicolon),
            other => Err(CsvError::InvalidSeparator(other.to_string())),
        }
    }
}

impl FromStr for Separator {
    type Err = CsvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "," => Ok(Self::Comma),
            ";" => Ok(Self::Semicolon),
            name if name.eq_ignore_ascii_case("comma") => Ok(Self::Comma),
            name if name.eq_ignore_ascii_case("semicolon") => {
                Ok(Self::Semicolon)
            },
            other => Err(CsvError::InvalidSeparator(other.to_string())),
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
