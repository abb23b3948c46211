use super::{CodonClass, Orf};
use crate::seq::frame::{codons, ReadingFrame};

/// Scan state threaded through one pass over a frame.
#[derive(Debug)]
enum ScanState<'a> {
    Empty,
    /// `first` is the codon index of the start codon within the frame.
    Open { first: usize, codons: Vec<&'a [u8]> },
}

impl<'a> ScanState<'a> {
    fn step(self, index: usize, codon: &'a [u8]) -> (Self, Option<(usize, Vec<&'a [u8]>)>) {
        match (CodonClass::of(codon), self) {
            // a start codon always restarts, whatever was open
            (CodonClass::Start, _) => (
                ScanState::Open {
                    first: index,
                    codons: vec![codon],
                },
                None,
            ),
            (CodonClass::Stop, ScanState::Empty) => (ScanState::Empty, None),
            // only the start codon so far: abandon without closing
            (CodonClass::Stop, ScanState::Open { codons, .. }) if codons.len() < 2 => {
                (ScanState::Empty, None)
            }
            (CodonClass::Stop, ScanState::Open { first, mut codons }) => {
                codons.push(codon);
                (ScanState::Empty, Some((first, codons)))
            }
            (CodonClass::Other, ScanState::Open { first, mut codons }) => {
                codons.push(codon);
                (ScanState::Open { first, codons }, None)
            }
            (CodonClass::Other, ScanState::Empty) => (ScanState::Empty, None),
        }
    }
}

/// Every closed ORF in one codon stream, in scan order.
///
/// `frame` tags the results and places them: codon `i` of the stream is taken
/// to start at `frame.offset() + 3 * i`. ORFs still open when the stream ends
/// are dropped, as is anything failing [`Orf::is_well_formed`].
pub fn extract_from_codons<'a, I>(stream: I, frame: ReadingFrame) -> Vec<Orf>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut out = Vec::new();
    let mut state = ScanState::Empty;

    for (index, codon) in stream.into_iter().enumerate() {
        let (next, closed) = state.step(index, codon);
        state = next;
        if let Some((first, orf_codons)) = closed {
            let start = frame.offset() + 3 * first;
            out.push(Orf::from_codons(frame, start, &orf_codons));
        }
    }

    out.retain(Orf::is_well_formed);
    out
}

/// Closed ORFs of one frame of `seq`.
pub fn extract_orfs(seq: &[u8], frame: ReadingFrame) -> Vec<Orf> {
    extract_from_codons(codons(seq, frame), frame)
}

/// Closed ORFs of all three forward frames, frame 1 first, then scan order.
pub fn orfs_in_sequence(seq: &[u8]) -> Vec<Orf> {
    ReadingFrame::ALL
        .iter()
        .flat_map(|&frame| extract_orfs(seq, frame))
        .collect()
}
