use pyo3::exceptions::{PyIOError, PyKeyError, PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use dnascan_core::error::BioError;
use dnascan_core::seq::dna::DnaSeq;

/// IO failures become `IOError`, missing identifiers `KeyError`, the rest
/// `ValueError`.
pub fn to_py_err(err: BioError) -> PyErr {
    match err {
        BioError::FastaIo(io) => PyIOError::new_err(io.to_string()),
        err if err.is_not_found() => PyKeyError::new_err(err.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

pub fn extract_seq_bytes(obj: &Bound<'_, PyAny>) -> PyResult<Vec<u8>> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.as_bytes().to_vec());
    }

    obj.extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))
}

pub fn extract_dna(obj: &Bound<'_, PyAny>) -> PyResult<DnaSeq> {
    DnaSeq::new(extract_seq_bytes(obj)?).map_err(to_py_err)
}
