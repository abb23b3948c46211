//! Record counts and sequence lengths.

use crate::seq::store::SequenceStore;

/// Identifiers sharing an extreme length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LengthExtremes {
    pub ids: Vec<Box<str>>,
    pub len: usize,
}

pub fn record_count(store: &SequenceStore) -> usize {
    store.len()
}

pub fn sequence_lengths(store: &SequenceStore) -> Vec<(&str, usize)> {
    store.iter().map(|(id, seq)| (id, seq.len())).collect()
}

fn extremes(store: &SequenceStore, target: Option<usize>) -> Option<LengthExtremes> {
    let len = target?;
    let ids = store
        .iter()
        .filter(|(_, seq)| seq.len() == len)
        .map(|(id, _)| id.into())
        .collect();
    Some(LengthExtremes { ids, len })
}

/// All shortest sequences, in store order. `None` for an empty store.
pub fn shortest_sequences(store: &SequenceStore) -> Option<LengthExtremes> {
    extremes(store, store.iter().map(|(_, seq)| seq.len()).min())
}

/// All longest sequences, in store order. `None` for an empty store.
pub fn longest_sequences(store: &SequenceStore) -> Option<LengthExtremes> {
    extremes(store, store.iter().map(|(_, seq)| seq.len()).max())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::DnaSeq;

    fn store(entries: &[(&str, &str)]) -> SequenceStore {
        entries
            .iter()
            .map(|&(id, seq)| (id, DnaSeq::try_from(seq).unwrap()))
            .collect()
    }

    #[test]
    fn lengths_in_store_order() {
        let s = store(&[("b", "ACGT"), ("a", "A"), ("c", "")]);
        assert_eq!(record_count(&s), 3);
        assert_eq!(sequence_lengths(&s), vec![("b", 4), ("a", 1), ("c", 0)]);
    }

    #[test]
    fn extremes_report_ties() {
        let s = store(&[("x", "AC"), ("y", "ACGT"), ("z", "GT"), ("w", "TTGA")]);
        let short = shortest_sequences(&s).unwrap();
        assert_eq!(short.len, 2);
        assert_eq!(short.ids, vec![Box::<str>::from("x"), Box::<str>::from("z")]);

        let long = longest_sequences(&s).unwrap();
        assert_eq!(long.len, 4);
        assert_eq!(long.ids, vec![Box::<str>::from("y"), Box::<str>::from("w")]);
    }

    #[test]
    fn empty_store_has_no_extremes() {
        let s = SequenceStore::new();
        assert_eq!(record_count(&s), 0);
        assert_eq!(shortest_sequences(&s), None);
        assert_eq!(longest_sequences(&s), None);
    }
}
