//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::games::Variant;
use crate::session::Session;

use super::py_core::{view_to_json, PyPlayReport};

/// Python wrapper for a game session.
///
/// One instance is one independent game.
#[pyclass(name = "EconomyGame")]
pub struct PyEconomyGame {
    session: Session,
}

#[pymethods]
impl PyEconomyGame {
    /// Start a new game.
    ///
    /// # Arguments
    /// - variant: "factory_empire" or "grand_engine"
    /// - seed: RNG seed; a fresh one is drawn when omitted
    #[new]
    #[pyo3(signature = (variant = "factory_empire", seed = None))]
    fn new(variant: &str, seed: Option<u64>) -> PyResult<Self> {
        let variant: Variant = variant
            .parse()
            .map_err(|e: crate::games::UnknownVariant| PyValueError::new_err(e.to_string()))?;

        let session = match seed {
            Some(seed) => Session::new_variant(variant, seed),
            None => Session::new_random(variant),
        }
        .map_err(|e| PyValueError::new_err(e.to_string()))?;

        Ok(Self { session })
    }

    /// Current state as JSON.
    fn state_json(&self) -> PyResult<String> {
        view_to_json(&self.session.state())
    }

    /// Play the card at a hand position.
    ///
    /// Negative or out-of-range positions come back as an unsuccessful report.
    fn play_card(&mut self, index: i64) -> PyPlayReport {
        PyPlayReport(self.session.play_card_signed(index))
    }

    /// Hand positions that can be played right now.
    fn legal_plays(&self) -> Vec<usize> {
        self.session.legal_plays()
    }

    #[getter]
    fn turn(&self) -> u32 {
        self.session.turn()
    }

    /// "in-progress", "won" or "lost".
    #[getter]
    fn outcome(&self) -> String {
        self.session.outcome().to_string()
    }

    #[getter]
    fn game_name(&self) -> String {
        self.session.game_name().to_string()
    }

    /// Seed that reproduces this game.
    #[getter]
    fn seed(&self) -> u64 {
        self.session.game_state().seed()
    }

    fn __repr__(&self) -> String {
        format!(
            "EconomyGame(game={:?}, turn={}, outcome={})",
            self.session.game_name(),
            self.session.turn(),
            self.session.outcome()
        )
    }
}
