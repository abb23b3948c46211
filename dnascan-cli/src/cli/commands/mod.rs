pub mod lengths;
pub mod orf;
pub mod records;
pub mod repeats;

use std::path::Path;

use anyhow::Result;
use dnascan_core::io::read_store_from_path;
use dnascan_core::SequenceStore;

use crate::cli::LoadOptions;

/// Read a FASTA file into a store and drop records below `--min-len`.
pub fn load_store(path: &Path, options: &LoadOptions) -> Result<SequenceStore> {
    let mut store = read_store_from_path(path)?;
    let removed = store.retain_min_len(options.min_len);
    tracing::info!(
        path = %path.display(),
        records = store.len(),
        filtered = removed,
        "loaded sequences"
    );
    Ok(store)
}
