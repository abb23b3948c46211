use super::{extract_orfs, Orf};
use crate::error::BioResult;
use crate::seq::dna::DnaSeq;
use crate::seq::frame::ReadingFrame;
use crate::seq::store::SequenceStore;

use tracing::debug;

/// One sequence's longest ORF, as reported by file-wide queries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrfHit {
    pub id: Box<str>,
    pub orf: Orf,
}

/// First ORF attaining the maximum length; later equal-length ORFs lose.
fn first_longest<I>(orfs: I) -> Option<Orf>
where
    I: IntoIterator<Item = Orf>,
{
    orfs.into_iter().fold(None, |best, orf| match best {
        Some(best) if best.len() >= orf.len() => Some(best),
        _ => Some(orf),
    })
}

/// Longest ORF over frames 1, 2, 3. Ties go to the earlier frame, then to
/// the earlier ORF within the frame.
pub fn longest_orf(seq: &[u8]) -> Option<Orf> {
    first_longest(
        ReadingFrame::ALL
            .iter()
            .flat_map(|&frame| extract_orfs(seq, frame)),
    )
}

pub fn longest_orf_in_frame(seq: &[u8], frame: ReadingFrame) -> Option<Orf> {
    first_longest(extract_orfs(seq, frame))
}

/// Every sequence whose longest ORF matches the longest in the store.
///
/// Unlike [`longest_orf`], ties are all reported, in store order. Sequences
/// without ORFs never appear; an empty result means no ORF anywhere.
pub fn longest_orf_in_file(store: &SequenceStore) -> Vec<OrfHit> {
    let hits = collect_longest(store, longest_orf);
    debug!(hits = hits.len(), "longest orf in file");
    hits
}

pub fn longest_orf_for_identifier(store: &SequenceStore, id: &str) -> BioResult<Option<Orf>> {
    let seq = store.require(id)?;
    Ok(longest_orf(seq.as_bytes()))
}

/// [`longest_orf_in_file`] restricted to ORFs of the frame at 1-based
/// `position`.
pub fn longest_orf_at_frame(store: &SequenceStore, position: i64) -> BioResult<Vec<OrfHit>> {
    let frame = ReadingFrame::from_position(position)?;
    let hits = collect_longest(store, |seq| longest_orf_in_frame(seq, frame));
    debug!(frame = %frame, hits = hits.len(), "longest orf at frame");
    Ok(hits)
}

fn collect_longest<F>(store: &SequenceStore, per_seq: F) -> Vec<OrfHit>
where
    F: Fn(&[u8]) -> Option<Orf> + Sync,
{
    let entries = store.entries();
    let best: Vec<Option<Orf>> =
        par_map!(&entries, |&(_, seq): &(&str, &DnaSeq)| per_seq(seq.as_bytes()));

    let Some(max_len) = best.iter().flatten().map(Orf::len).max() else {
        return Vec::new();
    };

    entries
        .iter()
        .zip(best)
        .filter_map(|(&(id, _), orf)| {
            orf.filter(|orf| orf.len() == max_len).map(|orf| OrfHit {
                id: id.into(),
                orf,
            })
        })
        .collect()
}
