//! Level-wise Apriori miner.
//!
//! One pass per itemset size k: take the size-k candidates, count how many
//! transactions contain each as a subset, keep the ones meeting the support
//! threshold, then self-join the survivors into size-(k+1) candidates. The
//! loop stops when a level comes back empty or the join produces nothing.
//!
//! Counting is the dominant cost (|transactions| × |candidates| × k per
//! level) and reduces by plain integer sums, so it is sharded across
//! transactions with a rayon fold/reduce.

use ahash::{AHashMap, AHashSet};
use log::debug;
use rayon::prelude::*;

use crate::dataset::{ItemId, TransactionSet};

/// Canonical itemset: sorted, deduplicated item ids.
pub type Itemset = Vec<ItemId>;

/// One mining level: the frequent itemsets of a fixed size, each with its
/// raw occurrence count, sorted by itemset.
pub type Level = Vec<(Itemset, u64)>;

/// Everything the mining loop produces: the per-size levels plus the
/// flattened cross-level table that rule generation looks antecedent
/// supports up in. The table only ever grows while mining runs.
#[derive(Debug, Default)]
pub struct FrequentItemsets {
    pub levels: Vec<Level>,
    pub table: AHashMap<Itemset, u64>,
    pub n_transactions: usize,
}

impl FrequentItemsets {
    /// Support fraction of an already-mined itemset, if present.
    pub fn support(&self, itemset: &[ItemId]) -> Option<f64> {
        let count = *self.table.get(itemset)?;
        Some(count as f64 / self.n_transactions as f64)
    }
}

/// Runs the full generate → count → prune loop over `data`.
///
/// The threshold comparison is inclusive: a candidate whose support
/// fraction equals `min_support` exactly is kept. `min_support ≤ 0` is
/// valid and admits every candidate the join reaches.
pub fn mine(data: &TransactionSet, min_support: f64) -> FrequentItemsets {
    let n = data.len();
    let mut result = FrequentItemsets {
        n_transactions: n,
        ..Default::default()
    };

    let mut candidates = seed_candidates(data);
    while !candidates.is_empty() {
        let counts = count_support(data.transactions(), &candidates);

        // Two-phase filter: build the retained level, then commit it.
        let mut level: Level = candidates
            .into_iter()
            .zip(counts)
            .filter(|&(_, count)| count as f64 / n as f64 >= min_support)
            .collect();
        if level.is_empty() {
            break;
        }
        level.sort_unstable();

        debug!(
            "level {}: {} frequent itemsets",
            level[0].0.len(),
            level.len()
        );
        for (itemset, count) in &level {
            result.table.insert(itemset.clone(), *count);
        }
        candidates = join_candidates(&level);
        result.levels.push(level);
    }
    result
}

/// Size-1 candidates: every distinct item occurring in any transaction.
fn seed_candidates(data: &TransactionSet) -> Vec<Itemset> {
    let mut items: Vec<ItemId> = data
        .transactions()
        .iter()
        .flatten()
        .copied()
        .collect::<AHashSet<ItemId>>()
        .into_iter()
        .collect();
    items.sort_unstable();
    items.into_iter().map(|item| vec![item]).collect()
}

/// Self-join: every unordered pair of size-k itemsets sharing exactly k−1
/// items unions into a size-(k+1) candidate, deduplicated by canonical
/// form. No subset-pruning here — the count-and-threshold filter removes
/// anything infrequent, at the cost of counting more candidates.
fn join_candidates(level: &Level) -> Vec<Itemset> {
    let Some((first, _)) = level.first() else {
        return Vec::new();
    };
    let k = first.len();

    let mut joined: AHashSet<Itemset> = AHashSet::new();
    for (i, (a, _)) in level.iter().enumerate() {
        for (b, _) in &level[i + 1..] {
            if shared_items(a, b) == k - 1 {
                joined.insert(merge_union(a, b));
            }
        }
    }
    let mut candidates: Vec<Itemset> = joined.into_iter().collect();
    candidates.sort_unstable();
    candidates
}

/// Occurrence count per candidate, indexed like `candidates`. A count of 0
/// means the candidate matched no transaction; callers treat that the same
/// as the candidate being absent.
fn count_support(transactions: &[Vec<ItemId>], candidates: &[Itemset]) -> Vec<u64> {
    transactions
        .par_iter()
        .fold(
            || vec![0u64; candidates.len()],
            |mut acc, transaction| {
                for (ci, candidate) in candidates.iter().enumerate() {
                    if is_subset(candidate, transaction) {
                        acc[ci] += 1;
                    }
                }
                acc
            },
        )
        .reduce(
            || vec![0u64; candidates.len()],
            |mut a, b| {
                for (x, y) in a.iter_mut().zip(b.iter()) {
                    *x += y;
                }
                a
            },
        )
}

/// Subset test over two sorted id slices, single merge walk.
fn is_subset(needle: &[ItemId], haystack: &[ItemId]) -> bool {
    let mut hay = haystack.iter();
    'outer: for want in needle {
        for have in hay.by_ref() {
            match have.cmp(want) {
                std::cmp::Ordering::Less => continue,
                std::cmp::Ordering::Equal => continue 'outer,
                std::cmp::Ordering::Greater => return false,
            }
        }
        return false;
    }
    true
}

/// Size of the intersection of two sorted id slices.
fn shared_items(a: &[ItemId], b: &[ItemId]) -> usize {
    let (mut i, mut j, mut shared) = (0, 0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                shared += 1;
                i += 1;
                j += 1;
            }
        }
    }
    shared
}

/// Sorted union of two sorted id slices.
fn merge_union(a: &[ItemId], b: &[ItemId]) -> Itemset {
    let mut out = Vec::with_capacity(a.len() + 1);
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                out.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                out.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out.extend_from_slice(&a[i..]);
    out.extend_from_slice(&b[j..]);
    out
}
