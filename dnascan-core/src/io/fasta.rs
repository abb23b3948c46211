use crate::error::{BioError, BioResult};
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use crate::seq::store::SequenceStore;
use crate::seq::traits::SeqBytes;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::marker::PhantomData;
use std::path::Path;
use tracing::debug;

const EXPECTED_HEADER: &str = "expected header line starting with '>'";

enum Line {
    Header,
    Blank,
    Bases,
}

impl Line {
    fn classify(text: &str) -> Self {
        if text.starts_with('>') {
            Line::Header
        } else if text.trim().is_empty() {
            Line::Blank
        } else {
            Line::Bases
        }
    }
}

/// A header line waiting to be turned into a record, with its 1-based line
/// number.
struct Header {
    text: String,
    lineno: usize,
}

/// Streaming reader over `>`-delimited records.
///
/// Sequence lines are concatenated with all whitespace removed. Blank lines
/// are skipped; any other line before the first header is a format error.
pub struct FastaRecords<R, S> {
    reader: R,
    lineno: usize,
    lookahead: Option<Header>,
    line: String,
    bases: Vec<u8>,
    _marker: PhantomData<S>,
}

impl<R: BufRead, S: SeqBytes> FastaRecords<R, S> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lineno: 0,
            lookahead: None,
            line: String::new(),
            bases: Vec::new(),
            _marker: PhantomData,
        }
    }

    /// Next raw line into `self.line`; `false` at end of input.
    fn advance(&mut self) -> BioResult<bool> {
        self.line.clear();
        if self.reader.read_line(&mut self.line)? == 0 {
            return Ok(false);
        }
        self.lineno += 1;
        Ok(true)
    }

    fn take_header(&mut self) -> BioResult<Option<Header>> {
        if let Some(header) = self.lookahead.take() {
            return Ok(Some(header));
        }
        while self.advance()? {
            match Line::classify(&self.line) {
                Line::Header => {
                    return Ok(Some(Header {
                        text: self.line.clone(),
                        lineno: self.lineno,
                    }))
                }
                Line::Blank => {}
                Line::Bases => {
                    return Err(BioError::FastaFormat {
                        msg: EXPECTED_HEADER,
                        line: self.lineno,
                    })
                }
            }
        }
        Ok(None)
    }

    /// Collect bases up to the next header, which is kept as lookahead.
    fn take_bases(&mut self) -> BioResult<Vec<u8>> {
        self.bases.clear();
        while self.advance()? {
            if let Line::Header = Line::classify(&self.line) {
                self.lookahead = Some(Header {
                    text: self.line.clone(),
                    lineno: self.lineno,
                });
                break;
            }
            self.bases
                .extend(self.line.bytes().filter(|b| !b.is_ascii_whitespace()));
        }
        Ok(std::mem::take(&mut self.bases))
    }

    fn read_record(&mut self) -> BioResult<Option<SeqRecord<S>>> {
        let Some(header) = self.take_header()? else {
            return Ok(None);
        };
        let (id, desc) = parse_header(&header.text, header.lineno)?;
        let bases = self.take_bases()?;
        let seq = S::from_bytes(bases).map_err(|err| BioError::InvalidSequence {
            id: id.to_string(),
            source: Box::new(err),
        })?;
        Ok(Some(SeqRecord { id, desc, seq }))
    }
}

impl<R: BufRead, S: SeqBytes> Iterator for FastaRecords<R, S> {
    type Item = BioResult<SeqRecord<S>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_record().transpose()
    }
}

pub fn fasta_records_from_reader<R: BufRead, S: SeqBytes>(reader: R) -> FastaRecords<R, S> {
    FastaRecords::new(reader)
}

pub fn read_fasta_records_from_reader<R: BufRead, S: SeqBytes>(
    reader: R,
) -> BioResult<Vec<SeqRecord<S>>> {
    fasta_records_from_reader(reader).collect()
}

pub fn read_fasta_records_from_bytes<S: SeqBytes>(data: &[u8]) -> BioResult<Vec<SeqRecord<S>>> {
    read_fasta_records_from_reader(Cursor::new(data))
}

/// Load every record into a store. Later duplicates overwrite earlier ones.
pub fn read_store_from_reader<R: BufRead>(reader: R) -> BioResult<SequenceStore> {
    let mut store = SequenceStore::new();
    let mut seen = 0usize;
    for record in fasta_records_from_reader::<R, DnaSeq>(reader) {
        let (id, seq) = record?.into_parts();
        store.insert(id, seq);
        seen += 1;
    }
    debug!(records = seen, unique = store.len(), "loaded fasta");
    Ok(store)
}

pub fn read_store_from_path(path: impl AsRef<Path>) -> BioResult<SequenceStore> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening fasta");
    read_store_from_reader(BufReader::new(File::open(path)?))
}

pub fn read_store_from_bytes(data: &[u8]) -> BioResult<SequenceStore> {
    read_store_from_reader(Cursor::new(data))
}

/// Split `>id description` into the identifier and an optional description.
/// The identifier must start right after `>`; `>  id` has an empty one.
fn parse_header(text: &str, lineno: usize) -> BioResult<(Box<str>, Option<Box<str>>)> {
    let body = text
        .strip_prefix('>')
        .ok_or(BioError::FastaFormat {
            msg: EXPECTED_HEADER,
            line: lineno,
        })?
        .trim_end();

    let mut parts = body.splitn(2, char::is_whitespace);
    let id = match parts.next() {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Err(BioError::FastaFormat {
                msg: "empty header",
                line: lineno,
            })
        }
    };
    let desc = parts.next().map(str::trim).filter(|d| !d.is_empty());

    Ok((id.into(), desc.map(Into::into)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(data: &[u8]) -> BioResult<Vec<SeqRecord<DnaSeq>>> {
        read_fasta_records_from_bytes(data)
    }

    #[test]
    fn wrapped_sequence_lines_are_joined() {
        let recs = records(b">chr1 partial contig\nATGAAA\nCCCTAA\n").unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].id(), "chr1");
        assert_eq!(recs[0].desc(), Some("partial contig"));
        assert_eq!(recs[0].seq().as_bytes(), b"ATGAAACCCTAA");
    }

    #[test]
    fn records_keep_file_order() {
        let recs = records(b">r1\nAC\n>r2\nGT\n>r3\nNN\n").unwrap();
        let ids: Vec<_> = recs.iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["r1", "r2", "r3"]);
        assert_eq!(recs[0].desc(), None);
    }

    #[test]
    fn header_without_bases_gives_empty_sequence() {
        let recs = records(b">empty\n>one\nA\n").unwrap();
        assert!(recs[0].seq().is_empty());
        assert_eq!(recs[1].seq().as_bytes(), b"A");
    }

    #[test]
    fn bases_before_first_header() {
        let err = records(b"\nACGT\n>r1\nAC\n").unwrap_err();
        assert!(matches!(err, BioError::FastaFormat { line: 2, .. }));
    }

    #[test]
    fn windows_line_endings_and_inner_spaces() {
        let recs = records(b"\r\n>r1 note\r\nATG\r\n\r\nAAA TAG\r\n").unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].desc(), Some("note"));
        assert_eq!(recs[0].seq().as_bytes(), b"ATGAAATAG");
    }

    #[test]
    fn bare_marker_is_an_empty_header() {
        let err = records(b">\nACGT\n").unwrap_err();
        assert!(matches!(err, BioError::FastaFormat { line: 1, .. }));
        let err = records(b">   \nACGT\n").unwrap_err();
        assert!(matches!(err, BioError::FastaFormat { line: 1, .. }));
    }

    #[test]
    fn identifier_must_follow_marker() {
        let err = records(b">r1\nAC\n>  r2 desc\nGT\n").unwrap_err();
        match err {
            BioError::FastaFormat { msg, line } => {
                assert_eq!(msg, "empty header");
                assert_eq!(line, 3);
            }
            other => panic!("expected fasta format error, got {other:?}"),
        }
    }

    #[test]
    fn later_duplicate_wins_in_store() {
        let store = read_store_from_bytes(b">a first\nAAAA\n>b\nCC\n>a second\nGG\n").unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(store.get("a").unwrap().as_bytes(), b"GG");
    }

    #[test]
    fn empty_input_gives_empty_store() {
        assert!(read_store_from_bytes(b"").unwrap().is_empty());
        assert!(read_store_from_bytes(b"\n\n").unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_store_from_path("/definitely/not/here.fa").unwrap_err();
        assert!(matches!(err, BioError::FastaIo(_)));
    }

    #[test]
    fn bad_base_names_the_record() {
        let err = records(b">seq1\nAC#\n").unwrap_err();
        match err {
            BioError::InvalidSequence { id, source } => {
                assert_eq!(id, "seq1");
                assert!(matches!(*source, BioError::InvalidChar { ch: '#', pos: 2 }));
            }
            other => panic!("expected invalid sequence error, got {other:?}"),
        }
    }

    #[test]
    fn streaming_stops_at_first_error() {
        let mut iter = fasta_records_from_reader::<_, DnaSeq>(Cursor::new(
            &b">ok\nACGT\n>bad\nAC!T\n>never\nA\n"[..],
        ));
        assert!(iter.next().unwrap().is_ok());
        assert!(iter.next().unwrap().is_err());
    }
}
