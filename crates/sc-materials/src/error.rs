//! Material property errors.

use sc_core::ScError;
use thiserror::Error;

/// Result type for material operations.
pub type MaterialResult<T> = Result<T, MaterialError>;

/// Errors that can occur while building or adjusting material properties.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MaterialError {
    /// Cell voltage outside the window the lithiation fits were built from.
    #[error("Cell voltage {voltage} V is outside the supported 2.7 V to 4.2 V window")]
    VoltageOutOfRange { voltage: f64 },

    /// Property vector does not match the `[E, rho, x, alpha]` layout.
    #[error("Property vector has {got} entries, expected {expected}")]
    BadVector { expected: usize, got: usize },

    /// Non-physical property value (zero density, negative thickness, ...).
    #[error("Invalid material property: {message}")]
    Invalid { message: String },
}

impl From<ScError> for MaterialError {
    fn from(err: ScError) -> Self {
        MaterialError::Invalid {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = MaterialError::VoltageOutOfRange { voltage: 5.0 };
        assert!(err.to_string().contains("5 V"));

        let err = MaterialError::BadVector {
            expected: 4,
            got: 3,
        };
        assert!(err.to_string().contains("3 entries"));
    }
}
