//! Association-rule derivation from a mined frequent-itemset table.
//!
//! Every frequent itemset L of size ≥ 2 is split into antecedent →
//! consequent pairs by iterating bitmasks over its item indices; mask
//! `1 .. 2^m − 1` (exclusive) skips exactly the empty and the full subset,
//! giving the 2^m − 2 candidate splits per itemset.

use crate::apriori::{FrequentItemsets, Itemset};
use crate::dataset::ItemId;

/// A qualifying rule. Both sides are canonical itemsets, disjoint, and
/// union to a frequent itemset. Confidence and support are unrounded;
/// rounding is the output formatter's business.
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    pub antecedent: Itemset,
    pub consequent: Itemset,
    pub confidence: f64,
    pub support: f64,
}

/// Emits every rule meeting `min_confidence` (inclusive), in a stable
/// order: itemsets by level then canonical order, splits by ascending
/// bitmask.
///
/// Antecedents are non-empty proper subsets of frequent itemsets, so by
/// anti-monotonicity they sit in the table at an earlier level; the lookup
/// only misses for zero-count itemsets admitted under a non-positive
/// support threshold, where confidence is undefined and the split is
/// skipped.
pub fn generate_rules(mined: &FrequentItemsets, min_confidence: f64) -> Vec<AssociationRule> {
    let n = mined.n_transactions as f64;
    let mut rules = Vec::new();

    for level in &mined.levels {
        for (itemset, count) in level {
            let m = itemset.len();
            if m < 2 {
                continue;
            }
            for mask in 1..((1usize << m) - 1) {
                let (antecedent, consequent) = split_by_mask(itemset, mask);
                let Some(&ant_count) = mined.table.get(&antecedent) else {
                    continue;
                };
                if ant_count == 0 {
                    continue;
                }
                let confidence = *count as f64 / ant_count as f64;
                if confidence >= min_confidence {
                    rules.push(AssociationRule {
                        antecedent,
                        consequent,
                        confidence,
                        support: *count as f64 / n,
                    });
                }
            }
        }
    }
    rules
}

/// Partitions `itemset` by `mask`: set bits go to the antecedent, the rest
/// to the consequent. Both halves inherit the canonical order.
fn split_by_mask(itemset: &[ItemId], mask: usize) -> (Itemset, Itemset) {
    let picked = mask.count_ones() as usize;
    let mut antecedent = Vec::with_capacity(picked);
    let mut consequent = Vec::with_capacity(itemset.len() - picked);
    for (idx, &item) in itemset.iter().enumerate() {
        if mask & (1 << idx) != 0 {
            antecedent.push(item);
        } else {
            consequent.push(item);
        }
    }
    (antecedent, consequent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::mine;
    use crate::dataset::TransactionSet;

    fn supermarket() -> TransactionSet {
        TransactionSet::from_named(&[
            &["bread", "milk"],
            &["bread", "diapers", "beer", "eggs"],
            &["milk", "diapers", "beer", "cola"],
            &["bread", "milk", "diapers", "beer"],
            &["bread", "milk", "diapers"],
        ])
    }

    fn named(data: &TransactionSet, names: &[&str]) -> Itemset {
        let mut ids: Itemset = names
            .iter()
            .map(|n| data.vocab().id(n).unwrap())
            .collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn split_covers_both_sides() {
        let (ant, con) = split_by_mask(&[3, 5, 9], 0b101);
        assert_eq!(ant, vec![3, 9]);
        assert_eq!(con, vec![5]);
    }

    #[test]
    fn supermarket_rules_at_point_six() {
        let data = supermarket();
        let mined = mine(&data, 0.5);
        let rules = generate_rules(&mined, 0.6);

        // Four frequent pairs, both directions each qualify.
        assert_eq!(rules.len(), 8);

        let beer_diapers = rules
            .iter()
            .find(|r| {
                r.antecedent == named(&data, &["beer"])
                    && r.consequent == named(&data, &["diapers"])
            })
            .expect("beer → diapers should be emitted");
        assert_eq!(beer_diapers.confidence, 1.0);
        assert_eq!(beer_diapers.support, 0.6);

        // {milk,beer} never became frequent, so neither direction exists.
        assert!(!rules.iter().any(|r| {
            r.antecedent == named(&data, &["milk"]) && r.consequent == named(&data, &["beer"])
        }));
    }

    #[test]
    fn confidence_threshold_is_inclusive() {
        let data = supermarket();
        let mined = mine(&data, 0.5);
        // diapers → beer has confidence exactly 3/4.
        let rules = generate_rules(&mined, 0.75);
        assert!(rules.iter().any(|r| {
            r.antecedent == named(&data, &["diapers"]) && r.consequent == named(&data, &["beer"])
        }));
        let rules = generate_rules(&mined, 0.76);
        assert!(!rules.iter().any(|r| {
            r.antecedent == named(&data, &["diapers"]) && r.consequent == named(&data, &["beer"])
        }));
    }

    #[test]
    fn every_split_is_considered() {
        // At confidence 0 every one of the 2^m − 2 splits of every
        // frequent itemset of size ≥ 2 comes out as a rule.
        let data = supermarket();
        let mined = mine(&data, 0.4);
        let rules = generate_rules(&mined, 0.0);
        let expected: usize = mined
            .levels
            .iter()
            .flatten()
            .filter(|(i, _)| i.len() >= 2)
            .map(|(i, _)| (1usize << i.len()) - 2)
            .sum();
        assert_eq!(rules.len(), expected);
    }

    #[test]
    fn rule_invariants_hold() {
        let data = supermarket();
        let mined = mine(&data, 0.4);
        let rules = generate_rules(&mined, 0.5);
        for rule in &rules {
            assert!(!rule.antecedent.is_empty());
            assert!(!rule.consequent.is_empty());
            assert!(rule.antecedent.iter().all(|i| !rule.consequent.contains(i)));
            assert!((0.0..=1.0).contains(&rule.confidence));
            assert!(rule.confidence >= 0.5);
            let mut union = rule.antecedent.clone();
            union.extend_from_slice(&rule.consequent);
            union.sort_unstable();
            assert!(mined.table.contains_key(&union));
            // Support of the whole never exceeds support of the antecedent.
            assert!(rule.support <= mined.support(&rule.antecedent).unwrap() + 1e-12);
        }
    }

    #[test]
    fn no_rules_from_singleton_levels() {
        let data = TransactionSet::from_named(&[&["a"], &["a"], &["b"]]);
        let mined = mine(&data, 0.5);
        assert!(generate_rules(&mined, 0.0).is_empty());
    }
}
