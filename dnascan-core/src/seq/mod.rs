pub mod dna;
pub mod frame;
pub mod record;
pub mod store;
pub mod traits;

pub use dna::DnaSeq;
pub use frame::{codons, Codons, ReadingFrame};
pub use record::SeqRecord;
pub use store::SequenceStore;
