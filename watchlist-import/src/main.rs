//! Convert a watchlist CSV export to JSON on stdout.
//!
//! ```bash
//! cargo run -p watchlist-import -- quotes.csv --separator ';' --header
//! ```

mod config;

use std::{env, fs};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use watchlist_csv::{Row, Table, parse_with};

use crate::config::{Args, Config, SEPARATOR_ENV};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config = Config::resolve(Args::parse(), env::var(SEPARATOR_ENV).ok())?;
    let input = fs::read_to_string(&config.path)
        .with_context(|| format!("failed to read {}", config.path.display()))?;

    let rows = parse_with(&input, &config.options)
        .with_context(|| format!("failed to parse {}", config.path.display()))?;
    info!(
        "parsed {} rows from {} (separator {:?})",
        rows.len(),
        config.path.display(),
        config.options.separator
    );

    println!("{}", render(rows, config.header)?);
    Ok(())
}

fn render(rows: Vec<Row>, header: bool) -> Result<String> {
    let json = if header {
        serde_json::to_string_pretty(&Table::from_rows(rows).to_maps())?
    } else {
        let fields: Vec<Vec<String>> =
            rows.into_iter().map(Row::into_fields).collect();
        serde_json::to_string_pretty(&fields)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use watchlist_csv::{Separator, parse_csv};

    use super::*;

    #[test]
    fn renders_plain_arrays() {
        let rows = parse_csv("a,b\nc", Separator::Comma).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(rows, false).unwrap()).unwrap();
        assert_eq!(json, serde_json::json!([["a", "b"], ["c"]]));
    }

    #[test]
    fn renders_objects_keyed_by_header() {
        let rows =
            parse_csv("symbol;price\nSAP;120,5", Separator::Semicolon).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&render(rows, true).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "symbol": "SAP", "price": "120,5" }])
        );
    }
}
