//! Open reading frames on the forward strand.
//!
//! An ORF runs from an `ATG` start codon to the next in-frame stop codon
//! (`TAA`, `TAG`, `TGA`), both included, and is at least three codons long.
//! Codons are compared case-insensitively; ORF bases keep the case of the
//! source sequence.

mod extract;
mod longest;

pub use extract::{extract_from_codons, extract_orfs, orfs_in_sequence};
pub use longest::{
    longest_orf, longest_orf_at_frame, longest_orf_for_identifier, longest_orf_in_file,
    longest_orf_in_frame, OrfHit,
};

use crate::seq::frame::ReadingFrame;
use std::fmt;

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Shortest ORF in bases: start, one inner codon, stop.
pub const MIN_ORF_LEN: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodonClass {
    Start,
    Stop,
    Other,
}

impl CodonClass {
    pub fn of(codon: &[u8]) -> Self {
        if codon.eq_ignore_ascii_case(START_CODON) {
            CodonClass::Start
        } else if is_stop_codon(codon) {
            CodonClass::Stop
        } else {
            CodonClass::Other
        }
    }
}

#[inline]
pub fn is_stop_codon(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon.eq_ignore_ascii_case(*stop))
}

/// A closed ORF and where it sits in its source sequence.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Orf {
    frame: ReadingFrame,
    start: usize,
    bases: Box<[u8]>,
}

impl Orf {
    pub(crate) fn from_codons(frame: ReadingFrame, start: usize, codons: &[&[u8]]) -> Self {
        Self {
            frame,
            start,
            bases: codons.concat().into_boxed_slice(),
        }
    }

    pub fn frame(&self) -> ReadingFrame {
        self.frame
    }

    /// Zero-based offset of the start codon in the source sequence.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exclusive end offset, just past the stop codon.
    pub fn end(&self) -> usize {
        self.start + self.bases.len()
    }

    /// Length in bases.
    pub fn len(&self) -> usize {
        self.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bases.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bases
    }

    pub fn codons(&self) -> impl Iterator<Item = &[u8]> {
        self.bases.chunks_exact(3)
    }

    /// Starts with `ATG`, ends with a stop codon, whole codons, at least
    /// [`MIN_ORF_LEN`] bases.
    pub fn is_well_formed(&self) -> bool {
        let n = self.bases.len();
        n >= MIN_ORF_LEN
            && n % 3 == 0
            && CodonClass::of(&self.bases[..3]) == CodonClass::Start
            && is_stop_codon(&self.bases[n - 3..])
    }
}

impl fmt::Display for Orf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bases))
    }
}
