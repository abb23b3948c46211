#![allow(clippy::useless_conversion)]

use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::store::SequenceStore;
use crate::utils::to_py_err;
use dnascan_core::io::fasta;

#[pyfunction]
#[pyo3(signature = (path, min_len=0))]
fn read_fasta(py: Python<'_>, path: &str, min_len: usize) -> PyResult<SequenceStore> {
    let mut inner = py
        .allow_threads(|| fasta::read_store_from_path(path))
        .map_err(to_py_err)?;
    if min_len > 0 {
        inner.retain_min_len(min_len);
    }
    Ok(SequenceStore { inner })
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(read_fasta, m)?)?;
    Ok(())
}
