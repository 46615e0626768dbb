use ahash::AHashMap;

/// Interned item id. Itemsets everywhere in this crate are sorted,
/// deduplicated `Vec<ItemId>` — canonical form for hashing and lookup.
pub type ItemId = u32;

/// Bidirectional item name ↔ id mapping, frozen after construction.
///
/// Ids are assigned in sorted name order, so the canonical id order of an
/// itemset is also its alphabetical item order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    names: Vec<String>,
    index: AHashMap<String, ItemId>,
}

impl Vocabulary {
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort_unstable();
        names.dedup();
        let index = names
            .iter()
            .enumerate()
            .map(|(id, name)| (name.clone(), id as ItemId))
            .collect();
        Vocabulary { names, index }
    }

    pub fn id(&self, name: &str) -> Option<ItemId> {
        self.index.get(name).copied()
    }

    pub fn name(&self, id: ItemId) -> &str {
        &self.names[id as usize]
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// An ordered, read-only transaction database. `len()` is the support
/// denominator N for the whole run.
#[derive(Debug, Clone)]
pub struct TransactionSet {
    vocab: Vocabulary,
    transactions: Vec<Vec<ItemId>>,
}

impl TransactionSet {
    /// Canonicalizes every transaction (sort + dedup) on the way in.
    pub fn new(vocab: Vocabulary, mut transactions: Vec<Vec<ItemId>>) -> Self {
        for t in &mut transactions {
            t.sort_unstable();
            t.dedup();
        }
        TransactionSet { vocab, transactions }
    }

    /// Builds a database straight from item names; the vocabulary is the
    /// union of all items seen. Mostly useful in tests and examples.
    pub fn from_named(rows: &[&[&str]]) -> Self {
        let vocab = Vocabulary::from_names(rows.iter().flat_map(|r| r.iter().copied()));
        let transactions = rows
            .iter()
            .map(|r| {
                r.iter()
                    .filter_map(|name| vocab.id(name))
                    .collect::<Vec<ItemId>>()
            })
            .collect();
        Self::new(vocab, transactions)
    }

    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    pub fn transactions(&self) -> &[Vec<ItemId>] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_ids_follow_sorted_name_order() {
        let vocab = Vocabulary::from_names(["milk", "bread", "beer", "bread"]);
        assert_eq!(vocab.len(), 3);
        assert_eq!(vocab.id("beer"), Some(0));
        assert_eq!(vocab.id("bread"), Some(1));
        assert_eq!(vocab.id("milk"), Some(2));
        assert_eq!(vocab.name(2), "milk");
        assert_eq!(vocab.id("cola"), None);
    }

    #[test]
    fn transactions_are_canonicalized() {
        let vocab = Vocabulary::from_names(["a", "b", "c"]);
        let data = TransactionSet::new(vocab, vec![vec![2, 0, 2, 1]]);
        assert_eq!(data.transactions(), &[vec![0, 1, 2]]);
    }

    #[test]
    fn from_named_builds_union_vocabulary() {
        let data = TransactionSet::from_named(&[&["bread", "milk"], &["beer", "bread"]]);
        assert_eq!(data.len(), 2);
        assert_eq!(data.vocab().len(), 3);
        // beer=0, bread=1, milk=2
        assert_eq!(data.transactions(), &[vec![1, 2], vec![0, 1]]);
    }
}
