use serde::{Deserialize, Serialize};

use crate::separator::Separator;

/// Configuration knobs for a parse call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field separator, comma unless configured otherwise.
    pub separator: Separator,
}

impl CsvOptions {
    pub fn with_separator(separator: Separator) -> Self {
        Self { separator }
    }
}
