use pyo3::prelude::*;
use pyo3::types::PyModule;

use crate::utils::{extract_dna, to_py_err};
use dnascan_core::orf::{self, Orf as CoreOrf, OrfHit as CoreOrfHit};
use dnascan_core::seq::frame::ReadingFrame;

#[pyclass(frozen)]
#[derive(Clone)]
pub struct Orf {
    pub(crate) inner: CoreOrf,
}

#[pymethods]
impl Orf {
    /// 1-based frame position.
    #[getter]
    fn frame(&self) -> usize {
        self.inner.frame().position()
    }

    #[getter]
    fn start(&self) -> usize {
        self.inner.start()
    }

    #[getter]
    fn end(&self) -> usize {
        self.inner.end()
    }

    #[getter]
    fn sequence(&self) -> String {
        self.inner.to_string()
    }

    #[getter]
    fn codons(&self) -> Vec<String> {
        self.inner
            .codons()
            .map(|c| String::from_utf8_lossy(c).into_owned())
            .collect()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!(
            "Orf(frame={}, start={}, end={}, sequence={:?})",
            self.inner.frame(),
            self.inner.start(),
            self.inner.end(),
            self.inner.to_string()
        ))
    }
}

impl From<CoreOrf> for Orf {
    fn from(inner: CoreOrf) -> Self {
        Self { inner }
    }
}

#[pyclass(frozen)]
#[derive(Clone)]
pub struct OrfHit {
    pub(crate) id: String,
    pub(crate) orf: Orf,
}

#[pymethods]
impl OrfHit {
    #[getter]
    fn id(&self) -> &str {
        &self.id
    }

    #[getter]
    fn orf(&self) -> Orf {
        self.orf.clone()
    }

    fn __repr__(&self) -> PyResult<String> {
        Ok(format!(
            "OrfHit(id={:?}, orf={})",
            self.id,
            self.orf.__repr__()?
        ))
    }
}

impl From<CoreOrfHit> for OrfHit {
    fn from(value: CoreOrfHit) -> Self {
        Self {
            id: value.id.to_string(),
            orf: value.orf.into(),
        }
    }
}

#[pyfunction]
#[pyo3(signature = (seq, frame=None))]
fn find_orfs(seq: &Bound<'_, PyAny>, frame: Option<i64>) -> PyResult<Vec<Orf>> {
    let seq = extract_dna(seq)?;
    let orfs = match frame {
        Some(position) => {
            let frame = ReadingFrame::from_position(position).map_err(to_py_err)?;
            orf::extract_orfs(seq.as_bytes(), frame)
        }
        None => orf::orfs_in_sequence(seq.as_bytes()),
    };
    Ok(orfs.into_iter().map(Orf::from).collect())
}

#[pyfunction]
fn longest_orf(seq: &Bound<'_, PyAny>) -> PyResult<Option<Orf>> {
    let seq = extract_dna(seq)?;
    Ok(orf::longest_orf(seq.as_bytes()).map(Orf::from))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Orf>()?;
    m.add_class::<OrfHit>()?;
    m.add_function(wrap_pyfunction!(find_orfs, m)?)?;
    m.add_function(wrap_pyfunction!(longest_orf, m)?)?;
    Ok(())
}
