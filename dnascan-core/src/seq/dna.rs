use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use crate::seq::traits::SeqBytes;
use std::fmt;

use memchr::memmem;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        if let Some((pos, b)) = dna::iupac_alphabet().first_invalid(bytes.as_slice()) {
            return Err(BioError::InvalidChar { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Overlapping, case-insensitive occurrences of `pat`.
    pub fn count_overlap(&self, pat: &[u8]) -> usize {
        if pat.is_empty() || pat.len() > self.bytes.len() {
            return 0;
        }

        let hay = self.bytes.to_ascii_uppercase();
        let pat = pat.to_ascii_uppercase();
        let finder = memmem::Finder::new(&pat);

        let mut count = 0usize;
        let mut i = 0usize;

        while i <= hay.len() - pat.len() {
            match finder.find(&hay[i..]) {
                Some(pos) => {
                    count += 1;
                    // overlap: advance by 1 past the start of the match
                    i += pos + 1;
                }
                None => break,
            }
        }

        count
    }
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    fn from_bytes(bytes: Vec<u8>) -> BioResult<Self> {
        DnaSeq::new(bytes)
    }
}

impl TryFrom<&str> for DnaSeq {
    type Error = BioError;

    fn try_from(value: &str) -> BioResult<Self> {
        DnaSeq::new(value.as_bytes().to_vec())
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // only IUPAC ASCII codes get past `new`
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}
