//! sc-materials: layer material data for sonocell.
//!
//! Provides:
//! - `MaterialProps`: SI-typed acoustic-mechanical properties of one layer
//! - A reference catalog of pouch-cell layer materials
//! - Lithiation fits mapping cell voltage to electrode property shifts
//!
//! # Architecture
//!
//! Materials are carried as uom quantities inside the crate and flattened to
//! plain `[E, rho, x, alpha]` vectors at the boundary where layer tables are
//! built. The catalog is a compile-time constant so study files can reference
//! materials by id without any I/O.

pub mod catalog;
pub mod error;
pub mod lithiation;
pub mod props;

// Re-exports for ergonomics
pub use catalog::{
    MaterialEntry, filter_reference_catalog, find_material, reference_cell_catalog,
};
pub use error::{MaterialError, MaterialResult};
pub use lithiation::{
    Lithiation, MAX_CELL_VOLTAGE, MIN_CELL_VOLTAGE, adjust_density, adjust_stiffness,
    state_of_charge,
};
pub use props::{MaterialProps, PROPS_PER_MATERIAL};
