use crate::error::{BioError, BioResult};
use crate::seq::dna::DnaSeq;

use indexmap::IndexMap;
use tracing::warn;

/// Identifier to sequence mapping, read-only once loaded.
///
/// Iteration follows first-insertion order. Inserting an identifier that is
/// already present replaces its sequence in place (last write wins, position
/// kept).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceStore {
    records: IndexMap<Box<str>, DnaSeq>,
}

impl SequenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sequence previously stored under `id`, if any.
    pub fn insert(&mut self, id: impl Into<Box<str>>, seq: DnaSeq) -> Option<DnaSeq> {
        let id = id.into();
        if self.records.contains_key(&id) {
            warn!(id = %id, "duplicate identifier, keeping the later sequence");
        }
        self.records.insert(id, seq)
    }

    pub fn get(&self, id: &str) -> Option<&DnaSeq> {
        self.records.get(id)
    }

    pub fn require(&self, id: &str) -> BioResult<&DnaSeq> {
        self.get(id).ok_or_else(|| BioError::IdNotFound { id: id.to_string() })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(|id| id.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &DnaSeq)> {
        self.records.iter().map(|(id, seq)| (id.as_ref(), seq))
    }

    /// Borrowed entries in store order, for slice-based parallel maps.
    pub(crate) fn entries(&self) -> Vec<(&str, &DnaSeq)> {
        self.iter().collect()
    }

    /// Drop records shorter than `min_len`; returns how many were removed.
    pub fn retain_min_len(&mut self, min_len: usize) -> usize {
        let before = self.records.len();
        self.records.retain(|_, seq| seq.len() >= min_len);
        before - self.records.len()
    }
}

impl<K: Into<Box<str>>> FromIterator<(K, DnaSeq)> for SequenceStore {
    fn from_iter<T: IntoIterator<Item = (K, DnaSeq)>>(iter: T) -> Self {
        let mut store = Self::new();
        for (id, seq) in iter {
            store.insert(id, seq);
        }
        store
    }
}
