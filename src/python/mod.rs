//! Python bindings for the card economy engine.
//!
//! # Quick Start
//!
//! ```python
//! import card_economy
//!
//! game = card_economy.EconomyGame("grand_engine", seed=42)
//! report = game.play_card(0)
//! print(report.message, game.outcome)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_games;

pub use py_core::*;
pub use py_games::*;

/// card_economy: a single-player card economy game engine.
#[pymodule]
fn card_economy(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayReport>()?;
    m.add_class::<PyEconomyGame>()?;

    Ok(())
}
