//! Fixed-length repeats across a whole sequence store.
//!
//! Every length-N window of every sequence is counted, overlapping windows
//! included, and counts are summed across sequences. Windows are compared
//! case-insensitively and reported uppercase. Only windows seen at least
//! twice are repeats.

use crate::error::{BioError, BioResult};
use crate::seq::dna::DnaSeq;
use crate::seq::store::SequenceStore;

use indexmap::IndexMap;
use tracing::debug;

/// Smallest total count for a window to be kept as a repeat.
pub const MIN_REPEAT_COUNT: usize = 2;

/// Repeats of one window length, in order of first occurrence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepeatCounts {
    window: usize,
    counts: IndexMap<Box<str>, usize>,
}

/// Every repeat sharing the highest count.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopRepeats {
    pub repeats: Vec<Box<str>>,
    pub count: usize,
}

impl RepeatCounts {
    pub fn window(&self) -> usize {
        self.window
    }

    /// Number of distinct repeats.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn get(&self, repeat: &str) -> Option<usize> {
        self.counts
            .get(repeat.to_ascii_uppercase().as_str())
            .copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(repeat, &count)| (repeat.as_ref(), count))
    }

    /// `None` when there are no repeats at all.
    pub fn most_frequent(&self) -> Option<TopRepeats> {
        let count = self.counts.values().copied().max()?;
        let repeats = self
            .counts
            .iter()
            .filter(|&(_, &c)| c == count)
            .map(|(repeat, _)| repeat.clone())
            .collect();
        Some(TopRepeats { repeats, count })
    }
}

fn window_counts(seq: &[u8], window: usize) -> IndexMap<Vec<u8>, usize> {
    let upper = seq.to_ascii_uppercase();
    let mut counts: IndexMap<Vec<u8>, usize> = IndexMap::new();
    for w in upper.windows(window) {
        match counts.get_mut(w) {
            Some(count) => *count += 1,
            None => {
                counts.insert(w.to_vec(), 1);
            }
        }
    }
    counts
}

/// Count every window of length `window` over all sequences.
///
/// A window longer than every sequence gives an empty result, not an error.
pub fn count_repeats(store: &SequenceStore, window: i64) -> BioResult<RepeatCounts> {
    let window = usize::try_from(window)
        .ok()
        .filter(|&w| w > 0)
        .ok_or(BioError::InvalidRepeatLength { len: window })?;

    let entries = store.entries();
    let per_seq: Vec<IndexMap<Vec<u8>, usize>> =
        par_map!(&entries, |&(_, seq): &(&str, &DnaSeq)| window_counts(seq.as_bytes(), window));

    // merge in store order so first-occurrence order is stable
    let mut totals: IndexMap<Vec<u8>, usize> = IndexMap::new();
    for counts in per_seq {
        for (w, count) in counts {
            *totals.entry(w).or_insert(0) += count;
        }
    }
    let distinct = totals.len();

    let counts: IndexMap<Box<str>, usize> = totals
        .into_iter()
        .filter(|&(_, count)| count >= MIN_REPEAT_COUNT)
        .map(|(w, count)| (String::from_utf8_lossy(&w).into(), count))
        .collect();

    debug!(window, distinct, repeats = counts.len(), "counted windows");
    Ok(RepeatCounts { window, counts })
}

pub fn most_frequent_repeat(store: &SequenceStore, window: i64) -> BioResult<Option<TopRepeats>> {
    Ok(count_repeats(store, window)?.most_frequent())
}

/// Overlapping, case-insensitive occurrences of `pattern` summed over the
/// store. An empty pattern occurs nowhere.
pub fn count_occurrences(store: &SequenceStore, pattern: &[u8]) -> usize {
    let entries = store.entries();
    let counts: Vec<usize> =
        par_map!(&entries, |&(_, seq): &(&str, &DnaSeq)| seq.count_overlap(pattern));
    counts.into_iter().sum()
}
