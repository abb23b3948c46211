use crate::alphabets::Alphabet;
use std::sync::OnceLock;

/// Nucleotides plus the IUPAC ambiguity codes and `Z`.
pub const IUPAC_CODES: &[u8] = b"ACGTRYSWKMBDHVNZ";

/// Every nucleotide code a sequence store accepts, in either case.
pub fn iupac_alphabet() -> &'static Alphabet {
    static IUPAC: OnceLock<Alphabet> = OnceLock::new();
    IUPAC.get_or_init(|| Alphabet::case_insensitive(IUPAC_CODES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ambiguity_codes() {
        let iupac = iupac_alphabet();
        assert_eq!(iupac.first_invalid(b"GATTACA"), None);
        assert_eq!(iupac.first_invalid(b"ACGNRYkmz"), None);
        assert_eq!(iupac.first_invalid(b"#"), Some((0, b'#')));
        assert_eq!(iupac.first_invalid(b"ACGU"), Some((3, b'U')));
        assert_eq!(iupac.first_invalid(b"42"), Some((0, b'4')));
    }
}
