//! CSV-like output for the two run modes: frequent itemsets
//! (`<size>;<items>`) and association rules
//! (`<antecedent>;<consequent>;<confidence>;<support>`). No header rows.

use std::io::{self, Write};

use crate::apriori::FrequentItemsets;
use crate::dataset::{ItemId, Vocabulary};
use crate::rules::AssociationRule;

/// Itemset mode: one line per frequent itemset, every level, each exactly
/// once, in level order then canonical itemset order.
pub fn write_itemsets<W: Write>(out: &mut W, mined: &FrequentItemsets, vocab: &Vocabulary) -> io::Result<()> {
    for level in &mined.levels {
        for (itemset, _) in level {
            writeln!(out, "{};{}", itemset.len(), join_names(itemset, vocab))?;
        }
    }
    Ok(())
}

/// Rule mode: one line per rule, confidence and support rounded to two
/// decimals.
pub fn write_rules<W: Write>(out: &mut W, rules: &[AssociationRule], vocab: &Vocabulary) -> io::Result<()> {
    for rule in rules {
        writeln!(
            out,
            "{};{};{};{}",
            join_names(&rule.antecedent, vocab),
            join_names(&rule.consequent, vocab),
            fmt_ratio(rule.confidence),
            fmt_ratio(rule.support),
        )?;
    }
    Ok(())
}

/// Ids are assigned in sorted name order, so joining in id order yields
/// alphabetical items.
fn join_names(itemset: &[ItemId], vocab: &Vocabulary) -> String {
    let names: Vec<&str> = itemset.iter().map(|&id| vocab.name(id)).collect();
    names.join(",")
}

/// Rounds half-away-from-zero to 2 decimals (0.125 → 0.13) and drops one
/// trailing zero, so 1.0 prints as `1.0` and 0.75 as `0.75`.
fn fmt_ratio(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let s = format!("{rounded:.2}");
    match s.strip_suffix('0') {
        Some(trimmed) => trimmed.to_owned(),
        None => s,
    }
}
