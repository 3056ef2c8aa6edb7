//! Pair-keyed interaction index.
//!
//! Built once from the full dataset, immutable afterwards. Lookups are
//! symmetric by construction: both drug names are normalized and the pair
//! is canonicalized before insertion, so `{A,B}` and `{B,A}` land under the
//! same key and no swap/OR logic exists at query time. Concurrent readers
//! need no locking since nothing is mutated after `build` returns.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use crate::dataset::{DataFormatError, RawInteraction};
use crate::severity::{classify, Severity};

/// A documented interaction between two drugs.
///
/// `drug_a`/`drug_b` carry no meaningful order; they are stored in
/// canonical (lexicographic) order. Severity is derived from the
/// description exactly once, at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionRecord {
    pub drug_a: String,
    pub drug_b: String,
    pub description: String,
    pub severity: Severity,
}

/// Canonical unordered-pair key: the two normalized names, sorted.
type PairKey = (String, String);

/// Read-only lookup structure over the interaction dataset.
#[derive(Debug)]
pub struct InteractionIndex {
    by_pair: HashMap<PairKey, Vec<InteractionRecord>>,
    drug_names: Vec<String>,
    record_count: usize,
}

/// Case-fold and trim a drug name. Applied identically at construction
/// and query time.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

fn pair_key(a: String, b: String) -> PairKey {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

impl InteractionIndex {
    /// Build the index from raw dataset rows.
    ///
    /// Fail-fast: the first malformed row aborts the whole build and no
    /// partial index is returned. Row numbers in errors are 1-based over
    /// the data rows.
    pub fn build(
        rows: impl IntoIterator<Item = RawInteraction>,
    ) -> Result<Self, DataFormatError> {
        let mut by_pair: HashMap<PairKey, Vec<InteractionRecord>> = HashMap::new();
        let mut names: BTreeSet<String> = BTreeSet::new();
        let mut record_count = 0;

        for (i, raw) in rows.into_iter().enumerate() {
            let row = i + 1;

            let drug_a = normalize_name(&raw.drug_a);
            let drug_b = normalize_name(&raw.drug_b);
            if drug_a.is_empty() || drug_b.is_empty() {
                return Err(DataFormatError::MissingDrugName { row });
            }

            let description = raw.description.trim().to_string();
            if description.is_empty() {
                return Err(DataFormatError::EmptyDescription { row });
            }

            let severity = classify(&description);

            names.insert(drug_a.clone());
            names.insert(drug_b.clone());

            let (drug_a, drug_b) = pair_key(drug_a, drug_b);
            by_pair
                .entry((drug_a.clone(), drug_b.clone()))
                .or_default()
                .push(InteractionRecord {
                    drug_a,
                    drug_b,
                    description,
                    severity,
                });
            record_count += 1;
        }

        tracing::debug!(
            "Interaction index built: {} records, {} pairs, {} drugs",
            record_count,
            by_pair.len(),
            names.len()
        );

        Ok(Self {
            by_pair,
            drug_names: names.into_iter().collect(),
            record_count,
        })
    }

    /// All documented interactions between two drugs, in dataset order.
    ///
    /// Symmetric and total: argument order does not matter, and a pair
    /// with no documented interaction yields an empty slice, not an error.
    pub fn lookup(&self, name1: &str, name2: &str) -> &[InteractionRecord] {
        let key = pair_key(normalize_name(name1), normalize_name(name2));
        self.by_pair.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct normalized drug names, lexicographically sorted.
    pub fn drug_names(&self) -> &[String] {
        &self.drug_names
    }

    /// Total number of interaction records.
    pub fn len(&self) -> usize {
        self.record_count
    }

    pub fn is_empty(&self) -> bool {
        self.record_count == 0
    }
}
