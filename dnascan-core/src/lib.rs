#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod orf;
pub mod repeats;
pub mod seq;
pub mod stats;

pub use error::{BioError, BioResult};
pub use seq::{DnaSeq, ReadingFrame, SequenceStore};
