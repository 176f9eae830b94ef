use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Descriptions already forwarded on one day.
///
/// Serialized as a plain JSON array of strings. Ordered so that the file on
/// disk is stable between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SentRecord {
    items: BTreeSet<String>,
}

impl SentRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn contains(&self, desc: &str) -> bool {
        self.items.contains(desc)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    /// Returns the candidates not yet in the record.
    ///
    /// Input order is kept and a description repeated in `candidates` is
    /// returned once.
    #[must_use]
    pub fn new_items(&self, candidates: &[String]) -> Vec<String> {
        let mut seen = BTreeSet::new();
        candidates
            .iter()
            .filter(|desc| !self.items.contains(desc.as_str()))
            .filter(|desc| seen.insert(desc.as_str()))
            .cloned()
            .collect()
    }
}

impl Extend<String> for SentRecord {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<String> for SentRecord {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
