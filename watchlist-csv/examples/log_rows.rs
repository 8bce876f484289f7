//! Print every row the parser produces for a small watchlist export.
use watchlist_csv::{Separator, parse_csv};

fn main() {
    let input = "Symbol;Name;Kurs\n\
                 SAP;\"SAP SE; Walldorf\";120,50\n\
                 BAS;BASF;\"44,10\"  \n";

    match parse_csv(input, Separator::Semicolon) {
        Ok(rows) => {
            for (idx, row) in rows.iter().enumerate() {
                println!("{idx:02}: {row:?}");
            }
        },
        Err(err) => eprintln!("parse failed: {err}"),
    }
}
