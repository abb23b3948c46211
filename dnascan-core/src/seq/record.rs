use crate::seq::traits::SeqBytes;

/// One parsed FASTA entry. The description is kept for display only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord<S: SeqBytes> {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: S,
}

impl<S: SeqBytes> SeqRecord<S> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &S {
        &self.seq
    }

    pub fn into_parts(self) -> (Box<str>, S) {
        (self.id, self.seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::DnaSeq;

    #[test]
    fn record_accessors() {
        let seq = DnaSeq::try_from("ATGC").unwrap();
        let record = SeqRecord {
            id: "id1".into(),
            desc: Some("some desc".into()),
            seq: seq.clone(),
        };
        assert_eq!(record.id(), "id1");
        assert_eq!(record.desc(), Some("some desc"));
        assert_eq!(record.seq().len(), 4);

        let (id, out) = record.into_parts();
        assert_eq!(&*id, "id1");
        assert_eq!(out, seq);
    }
}
