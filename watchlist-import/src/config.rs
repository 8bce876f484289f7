use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use watchlist_csv::{CsvOptions, Separator};

/// Environment variable consulted when neither a flag nor an options file
/// sets the separator.
pub const SEPARATOR_ENV: &str = "WATCHLIST_CSV_SEPARATOR";

/// Convert a watchlist CSV export to JSON
#[derive(Parser, Debug)]
#[command(name = "watchlist-import", version)]
pub struct Args {
    /// CSV file to read
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Field separator: `,` or `;`
    #[arg(short, long, value_name = "SEP")]
    pub separator: Option<Separator>,

    /// JSON file holding serialized parser options
    #[arg(short, long, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Emit objects keyed by the first row instead of plain arrays
    #[arg(long)]
    pub header: bool,
}

/// Resolved command line configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub path: PathBuf,
    pub options: CsvOptions,
    pub header: bool,
}

impl Config {
    /// Combine parsed arguments with the value of [`SEPARATOR_ENV`], if set.
    ///
    /// Precedence for the separator: `--separator`, then `--options`, then
    /// the environment, then the default comma.
    pub fn resolve(args: Args, env_separator: Option<String>) -> Result<Self> {
        let mut options = match (&args.options, env_separator) {
            (Some(file), _) => load_options(file)?,
            (None, Some(raw)) => {
                let separator = raw.parse::<Separator>().with_context(|| {
                    format!("invalid {SEPARATOR_ENV} {raw:?}")
                })?;
                CsvOptions::with_separator(separator)
            },
            (None, None) => CsvOptions::default(),
        };
        if let Some(separator) = args.separator {
            options.separator = separator;
        }

        Ok(Self {
            path: args.path,
            options,
            header: args.header,
        })
    }
}

fn load_options(path: &Path) -> Result<CsvOptions> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read options {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid options file {}", path.display()))
}
