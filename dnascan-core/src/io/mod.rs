pub mod fasta;

pub use fasta::{read_store_from_bytes, read_store_from_path, read_store_from_reader};
