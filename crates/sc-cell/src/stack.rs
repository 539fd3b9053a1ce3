//! Folding a raw layer set into the full cell layup.

use crate::error::{CellError, CellResult};
use crate::layer::{Layer, LayerSet};
use crate::schema::PropertySchema;

/// Name of the enclosure material. It must be present in every raw set and is
/// excluded from the repeating unit.
pub const CASE_LAYER: &str = "case";

/// The full layer sequence of a cell, case to case.
#[derive(Debug, Clone, PartialEq)]
pub struct Stack {
    schema: PropertySchema,
    layers: Vec<Layer>,
}

impl Stack {
    pub fn schema(&self) -> &PropertySchema {
        &self.schema
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub(crate) fn into_parts(self) -> (PropertySchema, Vec<Layer>) {
        (self.schema, self.layers)
    }
}

/// Fold `no_stacks` copies of the repeating unit between two case layers.
///
/// Each copy is laid down facing the previous one, so the unit is reversed
/// before every append. With unit `[B, A]` and `no_stacks = 2` the result is
/// `[case, A, B, B, A, case]`. `no_stacks = 0` leaves just the two case
/// layers.
pub fn stack_layers(
    schema: &PropertySchema,
    raw: &LayerSet,
    no_stacks: usize,
) -> CellResult<Stack> {
    let case_props = raw.get(CASE_LAYER).ok_or(CellError::MissingCase)?;
    let case = Layer::build(schema, CASE_LAYER, case_props)?;

    let mut unit: Vec<Layer> = Vec::with_capacity(raw.len().saturating_sub(1));
    for (name, props) in raw.iter() {
        if name == CASE_LAYER {
            continue;
        }
        unit.push(Layer::build(schema, name, props)?);
    }

    let mut layers = Vec::with_capacity(2 + no_stacks * unit.len());
    layers.push(case.clone());
    for _ in 0..no_stacks {
        unit.reverse();
        layers.extend(unit.iter().cloned());
    }
    layers.push(case);

    Ok(Stack {
        schema: schema.clone(),
        layers,
    })
}
