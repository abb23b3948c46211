use pyo3::prelude::*;

mod fasta;
mod orf;
mod store;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    fasta::register(m)?;
    orf::register(m)?;
    store::register(m)?;
    Ok(())
}
