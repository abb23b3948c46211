use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos} (expected an IUPAC nucleotide code: ACGTRYSWKMBDHVNZ, either case)")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid frame position: {position} (must be 1, 2, or 3)")]
    InvalidFramePosition { position: i64 },

    #[error("invalid repeat length: {len} (must be a positive integer)")]
    InvalidRepeatLength { len: i64 },

    #[error("identifier not found: '{id}'")]
    IdNotFound { id: String },

    #[error("invalid sequence for record '{id}': {source}")]
    InvalidSequence {
        id: String,
        #[source]
        source: Box<BioError>,
    },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),
}

impl BioError {
    /// Caller passed an out-of-range frame position or repeat length.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            BioError::InvalidFramePosition { .. } | BioError::InvalidRepeatLength { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BioError::IdNotFound { .. })
    }
}

pub type BioResult<T> = Result<T, BioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kinds() {
        assert!(BioError::InvalidFramePosition { position: 4 }.is_invalid_argument());
        assert!(BioError::InvalidRepeatLength { len: 0 }.is_invalid_argument());
        assert!(BioError::InvalidRepeatLength { len: -3 }.is_invalid_argument());
        assert!(BioError::IdNotFound { id: "x".into() }.is_not_found());
        assert!(!BioError::IdNotFound { id: "x".into() }.is_invalid_argument());
    }

    #[test]
    fn messages() {
        let err = BioError::InvalidFramePosition { position: 0 };
        assert_eq!(
            err.to_string(),
            "invalid frame position: 0 (must be 1, 2, or 3)"
        );
        let err = BioError::IdNotFound { id: "seq9".into() };
        assert_eq!(err.to_string(), "identifier not found: 'seq9'");
        let err = BioError::InvalidChar { ch: 'U', pos: 3 };
        assert!(err.to_string().starts_with("invalid character 'U' at position 3"));
        assert!(err.to_string().contains("IUPAC"));
        let err = BioError::InvalidRepeatLength { len: -3 };
        assert_eq!(
            err.to_string(),
            "invalid repeat length: -3 (must be a positive integer)"
        );
    }
}
