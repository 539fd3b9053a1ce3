//! Assembled cell tables.

use crate::error::{CellError, CellResult};
use crate::layer::Layer;
use crate::schema::PropertySchema;
use crate::stack::Stack;
use sc_core::ids::LayerNo;
use sc_core::numeric::Real;

/// Default name of the index column in assembled tables.
pub const DEFAULT_INDEX_NAME: &str = "layer_no";

/// A stacked cell with 1-based row labels, ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct CellTable {
    index_name: String,
    schema: PropertySchema,
    layers: Vec<Layer>,
}

/// Label the stacked layers with a 1-based `layer_no` index.
pub fn assemble_cell(stack: Stack) -> CellTable {
    assemble_cell_with_index(stack, DEFAULT_INDEX_NAME)
}

/// Same as `assemble_cell` with a caller-chosen index column name.
pub fn assemble_cell_with_index(stack: Stack, index_name: impl Into<String>) -> CellTable {
    let (schema, layers) = stack.into_parts();
    CellTable {
        index_name: index_name.into(),
        schema,
        layers,
    }
}

impl CellTable {
    /// Rebuild a table from parsed parts, checking every row against the schema.
    pub fn from_parts(
        index_name: impl Into<String>,
        schema: PropertySchema,
        layers: Vec<Layer>,
    ) -> CellResult<Self> {
        for layer in &layers {
            if layer.values().len() != schema.value_count() {
                return Err(CellError::SchemaMismatch {
                    layer: layer.name().to_string(),
                    expected: schema.value_count(),
                    got: layer.values().len(),
                });
            }
        }
        Ok(Self {
            index_name: index_name.into(),
            schema,
            layers,
        })
    }

    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer names in row order.
    pub fn names(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Rows paired with their 1-based layer numbers.
    pub fn rows(&self) -> impl Iterator<Item = (LayerNo, &Layer)> + '_ {
        self.layers
            .iter()
            .enumerate()
            .map(|(i, layer)| (LayerNo::from_position(i as u32), layer))
    }

    /// All values under one schema key, in row order.
    pub fn column(&self, key: &str) -> CellResult<Vec<Real>> {
        let pos = self
            .schema
            .value_position(key)
            .ok_or_else(|| CellError::UnknownKey {
                key: key.to_string(),
            })?;
        Ok(self.layers.iter().map(|l| l.values()[pos]).collect())
    }

    /// Interface depths: cumulative thickness at the bottom of each layer.
    pub fn layer_boundaries(&self) -> CellResult<Vec<Real>> {
        let mut depth = 0.0;
        self.column("x").map(|xs| {
            xs.into_iter()
                .map(|x| {
                    depth += x;
                    depth
                })
                .collect()
        })
    }

    /// Total through-thickness of the assembled cell.
    pub fn total_thickness(&self) -> CellResult<Real> {
        Ok(self.column("x")?.iter().sum())
    }
}
