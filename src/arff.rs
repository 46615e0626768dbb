//! Loader for the declarative transaction format: a header of attribute
//! declarations followed by data rows that flag attribute presence with a
//! `t`/`f` marker per column. Anything else — comments, relation/data
//! headers, malformed rows — is skipped silently.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::dataset::{TransactionSet, Vocabulary};
use crate::error::Result;

/// Reads a transaction database from `path`.
///
/// I/O failures are fatal; unparseable lines are not. An input with no
/// recognizable rows yields an empty database, which the miner treats as
/// "zero frequent itemsets", not as an error.
pub fn load_transactions<P: AsRef<Path>>(path: P) -> Result<TransactionSet> {
    let reader = BufReader::new(File::open(path)?);

    // Column order is declaration order; ids are reassigned to sorted name
    // order once the whole file is read.
    let mut columns: Vec<String> = Vec::new();
    let mut rows: Vec<Vec<usize>> = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if line.contains('#') || line.len() < 2 {
            continue;
        }
        if let Some(name) = parse_declaration(&line) {
            columns.push(name.to_owned());
        } else if let Some(present) = parse_data_row(&line) {
            rows.push(present);
        }
        // Neither a declaration nor a data row: skip.
    }

    let vocab = Vocabulary::from_names(columns.iter().cloned());
    let transactions = rows
        .into_iter()
        .map(|present| {
            present
                .into_iter()
                .filter_map(|col| columns.get(col))
                .filter_map(|name| vocab.id(name))
                .collect()
        })
        .collect();
    Ok(TransactionSet::new(vocab, transactions))
}

/// An attribute declaration carries the keyword `attribute` and a
/// single-quoted name; returns the name between the first quote pair.
fn parse_declaration(line: &str) -> Option<&str> {
    if !line.contains("attribute") {
        return None;
    }
    let start = line.find('\'')?;
    let rest = &line[start + 1..];
    let end = rest.find('\'')?;
    Some(&rest[..end])
}

/// A data row is comma-separated `t`/`f` markers (case-insensitive).
/// Returns the column indices flagged present, or `None` if any token is
/// something else — that makes the line unrecognized, not a partial row.
fn parse_data_row(line: &str) -> Option<Vec<usize>> {
    let mut present = Vec::new();
    for (col, token) in line.split(',').enumerate() {
        let token = token.trim();
        if token.eq_ignore_ascii_case("t") {
            present.push(col);
        } else if !token.eq_ignore_ascii_case("f") {
            return None;
        }
    }
    Some(present)
}
