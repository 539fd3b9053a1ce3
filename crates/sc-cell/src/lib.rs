//! sc-cell: layer stacking and cell assembly for sonocell.
//!
//! Turns an ordered raw layer set (one repeating unit plus the case) into the
//! full layered cell:
//! - `PropertySchema`: ordered column keys shared by every layer
//! - `Layer` / `LayerSet`: schema-checked layers in layup order
//! - `stack_layers`: the case-bounded fold that repeats the unit
//! - `CellTable`: the 1-based indexed table handed to persistence

pub mod error;
pub mod layer;
pub mod schema;
pub mod stack;
pub mod table;

// Re-exports for ergonomics
pub use error::{CellError, CellResult};
pub use layer::{Layer, LayerSet};
pub use schema::PropertySchema;
pub use stack::{CASE_LAYER, Stack, stack_layers};
pub use table::{CellTable, DEFAULT_INDEX_NAME, assemble_cell, assemble_cell_with_index};
