//! sc-core: stable foundation for sonocell.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + tolerances + float helpers)
//! - ids (1-based layer numbering for assembled cells)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{ScError, ScResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
