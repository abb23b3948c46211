#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::orf::{Orf, OrfHit};
use crate::utils::{extract_dna, extract_seq_bytes, to_py_err};
use dnascan_core::orf;
use dnascan_core::repeats;
use dnascan_core::seq::store::SequenceStore as CoreStore;
use dnascan_core::stats::{self, LengthExtremes};

#[pyclass(frozen)]
pub struct SequenceStore {
    pub(crate) inner: CoreStore,
}

fn collect_store(obj: &Bound<'_, PyAny>) -> PyResult<CoreStore> {
    let mut store = CoreStore::new();

    if let Ok(dict) = obj.downcast::<PyDict>() {
        for (id, seq) in dict.iter() {
            let id: String = id.extract()?;
            store.insert(id, extract_dna(&seq)?);
        }
        return Ok(store);
    }

    for item in obj.iter()? {
        let item = item?;
        let (id, seq): (String, Bound<'_, PyAny>) = item.extract().map_err(|_| {
            PyTypeError::new_err("SequenceStore expects a dict or (id, sequence) pairs")
        })?;
        store.insert(id, extract_dna(&seq)?);
    }
    Ok(store)
}

fn extremes_to_py(value: Option<LengthExtremes>) -> Option<(Vec<String>, usize)> {
    value.map(|ext| (ext.ids.iter().map(|id| id.to_string()).collect(), ext.len))
}

#[pymethods]
impl SequenceStore {
    #[new]
    fn new(records: &Bound<'_, PyAny>) -> PyResult<Self> {
        Ok(Self {
            inner: collect_store(records)?,
        })
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __contains__(&self, id: &str) -> bool {
        self.inner.contains(id)
    }

    fn ids(&self) -> Vec<String> {
        self.inner.ids().map(|id| id.to_string()).collect()
    }

    fn get(&self, id: &str) -> Option<String> {
        self.inner.get(id).map(|seq| seq.to_string())
    }

    fn lengths(&self) -> Vec<(String, usize)> {
        stats::sequence_lengths(&self.inner)
            .into_iter()
            .map(|(id, len)| (id.to_string(), len))
            .collect()
    }

    fn shortest_sequences(&self) -> Option<(Vec<String>, usize)> {
        extremes_to_py(stats::shortest_sequences(&self.inner))
    }

    fn longest_sequences(&self) -> Option<(Vec<String>, usize)> {
        extremes_to_py(stats::longest_sequences(&self.inner))
    }

    fn filter_min_len(&self, min_len: usize) -> Self {
        let mut inner = self.inner.clone();
        inner.retain_min_len(min_len);
        Self { inner }
    }

    fn longest_orf_in_file(&self) -> Vec<OrfHit> {
        orf::longest_orf_in_file(&self.inner)
            .into_iter()
            .map(OrfHit::from)
            .collect()
    }

    fn longest_orf_for_identifier(&self, id: &str) -> PyResult<Option<Orf>> {
        let found = orf::longest_orf_for_identifier(&self.inner, id).map_err(to_py_err)?;
        Ok(found.map(Orf::from))
    }

    fn longest_orf_at_frame(&self, position: i64) -> PyResult<Vec<OrfHit>> {
        let hits = orf::longest_orf_at_frame(&self.inner, position).map_err(to_py_err)?;
        Ok(hits.into_iter().map(OrfHit::from).collect())
    }

    fn count_repeats<'py>(&self, py: Python<'py>, n: i64) -> PyResult<Bound<'py, PyDict>> {
        let inner = &self.inner;
        let counts = py
            .allow_threads(|| repeats::count_repeats(inner, n))
            .map_err(to_py_err)?;
        let out = PyDict::new_bound(py);
        for (repeat, count) in counts.iter() {
            out.set_item(repeat, count)?;
        }
        Ok(out)
    }

    fn most_frequent_repeat(&self, n: i64) -> PyResult<Option<(Vec<String>, usize)>> {
        let top = repeats::most_frequent_repeat(&self.inner, n).map_err(to_py_err)?;
        Ok(top.map(|top| {
            (
                top.repeats.iter().map(|r| r.to_string()).collect(),
                top.count,
            )
        }))
    }

    fn count_occurrences(&self, pattern: &Bound<'_, PyAny>) -> PyResult<usize> {
        let pattern = extract_seq_bytes(pattern)?;
        Ok(repeats::count_occurrences(&self.inner, &pattern))
    }

    fn __repr__(&self) -> PyResult<String> {
        let preview: Vec<&str> = self.inner.ids().take(3).collect();
        let more = if self.inner.len() > preview.len() {
            ", ..."
        } else {
            ""
        };
        Ok(format!(
            "SequenceStore(n={}, ids=[{}{more}])",
            self.inner.len(),
            preview
                .iter()
                .map(|id| format!("{id:?}"))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<SequenceStore>()?;
    Ok(())
}
