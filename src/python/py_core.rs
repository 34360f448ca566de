//! Core type bindings for Python.

use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::session::{PlayReport, StateView};

/// Serialize a view, surfacing failures as `RuntimeError`.
pub(crate) fn view_to_json(view: &StateView) -> PyResult<String> {
    view.to_json()
        .map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Python wrapper for PlayReport.
#[pyclass(name = "PlayReport")]
#[derive(Clone, Debug)]
pub struct PyPlayReport(pub PlayReport);

#[pymethods]
impl PyPlayReport {
    /// Whether the card was played.
    #[getter]
    fn success(&self) -> bool {
        self.0.success
    }

    /// Log message, or the reason the play was rejected.
    #[getter]
    fn message(&self) -> String {
        self.0.message.clone()
    }

    /// State after the command, as JSON.
    fn state_json(&self) -> PyResult<String> {
        view_to_json(&self.0.state)
    }

    fn __bool__(&self) -> bool {
        self.0.success
    }

    fn __repr__(&self) -> String {
        format!(
            "PlayReport(success={}, message={:?})",
            if self.0.success { "True" } else { "False" },
            self.0.message
        )
    }
}
