//! Forward reading frames and the codon tokenizer.
//!
//! A sequence has three forward frames, starting at offsets 0, 1 and 2.
//! Callers see them as 1-based positions (1, 2, 3).

use crate::error::{BioError, BioResult};
use std::fmt;
use std::slice::ChunksExact;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReadingFrame {
    One,
    Two,
    Three,
}

impl ReadingFrame {
    pub const ALL: [ReadingFrame; 3] = [ReadingFrame::One, ReadingFrame::Two, ReadingFrame::Three];

    /// Zero-based offset of the first codon.
    pub fn offset(self) -> usize {
        match self {
            ReadingFrame::One => 0,
            ReadingFrame::Two => 1,
            ReadingFrame::Three => 2,
        }
    }

    /// One-based position, as reported to callers.
    pub fn position(self) -> usize {
        self.offset() + 1
    }

    /// Frame at 1-based `position`. Anything but 1, 2 or 3 (negatives
    /// included) is an invalid argument.
    pub fn from_position(position: i64) -> BioResult<Self> {
        match position {
            1 => Ok(ReadingFrame::One),
            2 => Ok(ReadingFrame::Two),
            3 => Ok(ReadingFrame::Three),
            _ => Err(BioError::InvalidFramePosition { position }),
        }
    }
}

impl fmt::Display for ReadingFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.position())
    }
}

/// Non-overlapping codons of one frame. A trailing fragment of one or two
/// bases is never yielded.
#[derive(Clone, Debug)]
pub struct Codons<'a> {
    chunks: ChunksExact<'a, u8>,
}

impl<'a> Iterator for Codons<'a> {
    type Item = &'a [u8];

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.chunks.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chunks.size_hint()
    }
}

impl ExactSizeIterator for Codons<'_> {}

pub fn codons(seq: &[u8], frame: ReadingFrame) -> Codons<'_> {
    let start = frame.offset().min(seq.len());
    Codons {
        chunks: seq[start..].chunks_exact(3),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(seq: &[u8], frame: ReadingFrame) -> Vec<&[u8]> {
        codons(seq, frame).collect()
    }

    #[test]
    fn frame_one_drops_trailing_fragment() {
        let got = collect(b"ATGCCCTAAG", ReadingFrame::One);
        assert_eq!(got, vec![&b"ATG"[..], b"CCC", b"TAA"]);
    }

    #[test]
    fn shifted_frames() {
        let seq = b"AGGTGACACCGCAAGCCTTATATTAGC";
        let two = collect(seq, ReadingFrame::Two);
        assert_eq!(two.first(), Some(&&b"GGT"[..]));
        assert_eq!(two.len(), 8);
        let three = collect(seq, ReadingFrame::Three);
        assert_eq!(three.first(), Some(&&b"GTG"[..]));
        assert_eq!(three.last(), Some(&&b"TAG"[..]));
        assert_eq!(three.len(), 8);
    }

    #[test]
    fn short_sequences_yield_nothing() {
        assert!(collect(b"", ReadingFrame::One).is_empty());
        assert!(collect(b"AT", ReadingFrame::One).is_empty());
        assert!(collect(b"A", ReadingFrame::Three).is_empty());
        assert!(collect(b"ATGA", ReadingFrame::Three).is_empty());
    }

    #[test]
    fn tokenizer_keeps_case() {
        assert_eq!(collect(b"atgAAA", ReadingFrame::One), vec![&b"atg"[..], b"AAA"]);
    }

    #[test]
    fn restartable() {
        let seq = b"ATGAAATAG";
        let first: Vec<_> = codons(seq, ReadingFrame::One).collect();
        let second: Vec<_> = codons(seq, ReadingFrame::One).collect();
        assert_eq!(first, second);
        assert_eq!(codons(seq, ReadingFrame::One).len(), 3);
    }

    #[test]
    fn positions_and_offsets() {
        for (offset, frame) in ReadingFrame::ALL.iter().enumerate() {
            assert_eq!(frame.offset(), offset);
            assert_eq!(frame.position(), offset + 1);
            assert_eq!(ReadingFrame::from_position(offset as i64 + 1).unwrap(), *frame);
        }
        assert_eq!(ReadingFrame::Two.to_string(), "2");
    }

    #[test]
    fn invalid_positions() {
        for position in [0i64, 4, 100, -1, i64::MIN] {
            match ReadingFrame::from_position(position) {
                Err(BioError::InvalidFramePosition { position: p }) => assert_eq!(p, position),
                other => panic!("expected invalid frame position, got {other:?}"),
            }
        }
    }
}
