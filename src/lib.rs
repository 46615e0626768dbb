//! Frequent itemset mining and association rule generation.
//!
//! The classical level-wise Apriori search: generate candidate itemsets,
//! count their support over a transaction database, prune by a support
//! threshold, repeat until no larger candidates survive, then split the
//! surviving itemsets into antecedent → consequent rules filtered by a
//! confidence threshold.
//!
//! ```
//! use apriori::{generate_rules, mine, TransactionSet};
//!
//! let data = TransactionSet::from_named(&[
//!     &["bread", "milk"],
//!     &["bread", "diapers", "beer"],
//!     &["milk", "diapers", "beer"],
//! ]);
//! let mined = mine(&data, 0.5);
//! let rules = generate_rules(&mined, 0.8);
//! assert!(!rules.is_empty());
//! ```

pub mod apriori;
pub mod arff;
pub mod dataset;
pub mod error;
pub mod report;
pub mod rules;

pub use apriori::{mine, FrequentItemsets, Itemset, Level};
pub use dataset::{ItemId, TransactionSet, Vocabulary};
pub use error::{parse_threshold, AprioriError, Result};
pub use rules::{generate_rules, AssociationRule};
