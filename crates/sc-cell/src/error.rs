//! Cell assembly errors.

use thiserror::Error;

/// Result type for cell assembly operations.
pub type CellResult<T> = Result<T, CellError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CellError {
    /// A schema needs at least the name column.
    #[error("Property schema must carry at least a name column")]
    EmptySchema,

    /// A layer's property vector does not line up with the schema keys.
    #[error("Layer '{layer}' carries {got} property values, schema expects {expected}")]
    SchemaMismatch {
        layer: String,
        expected: usize,
        got: usize,
    },

    /// The raw layer set never defined the enclosure.
    #[error("Raw layer set has no 'case' layer")]
    MissingCase,

    /// Material names double as lookup keys, so they must be unique.
    #[error("Material '{name}' appears more than once in the raw layer set")]
    DuplicateMaterial { name: String },

    /// Lookup under a key the schema does not define.
    #[error("Unknown property key: {key}")]
    UnknownKey { key: String },
}
