//! Property schema shared by every layer in a cell.

use crate::error::{CellError, CellResult};

/// Ordered column keys for layer property tables.
///
/// The first key names the layer itself; the remaining keys label the numeric
/// properties every layer carries, in vector order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertySchema {
    keys: Vec<String>,
}

impl PropertySchema {
    /// Schema from explicit keys. The leading key is the name column.
    pub fn new(keys: Vec<String>) -> CellResult<Self> {
        if keys.is_empty() {
            return Err(CellError::EmptySchema);
        }
        Ok(Self { keys })
    }

    /// The `["name", "E", "rho", "x", "alpha"]` schema used for acoustic runs.
    pub fn mechanical() -> Self {
        Self {
            keys: ["name", "E", "rho", "x", "alpha"]
                .into_iter()
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The key labelling the layer-name column.
    pub fn name_key(&self) -> &str {
        &self.keys[0]
    }

    /// Keys labelling the numeric value columns.
    pub fn value_keys(&self) -> &[String] {
        &self.keys[1..]
    }

    /// Number of numeric values a conforming layer carries.
    pub fn value_count(&self) -> usize {
        self.keys.len() - 1
    }

    /// Position of `key` within the numeric value columns.
    pub fn value_position(&self, key: &str) -> Option<usize> {
        self.value_keys().iter().position(|k| k == key)
    }
}
