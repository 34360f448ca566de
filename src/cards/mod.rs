//! Card system: definitions, catalog, and deck compositions.
//!
//! ## Key Types
//!
//! - `CardId`: Dense identifier assigned by the catalog
//! - `CardDefinition`: Static card data (key, title, cost, effect)
//! - `Catalog`: Per-variant card and resource declarations
//! - `DeckComposition`: Copies of each card key in a starting deck

pub mod composition;
pub mod definition;
pub mod registry;

pub use composition::DeckComposition;
pub use definition::{CardDefinition, CardId};
pub use registry::{Catalog, CatalogError};
