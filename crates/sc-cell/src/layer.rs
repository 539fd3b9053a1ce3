//! Single layers and the ordered raw layer set.

use crate::error::{CellError, CellResult};
use crate::schema::PropertySchema;
use sc_core::numeric::Real;

/// One physical layer: a material name plus its property vector.
///
/// The vector is positional; `PropertySchema::value_keys` gives the meaning
/// of each slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    name: String,
    values: Vec<Real>,
}

impl Layer {
    /// Pair `name` and `props` against `schema`, rejecting any arity mismatch.
    pub fn build(
        schema: &PropertySchema,
        name: impl Into<String>,
        props: &[Real],
    ) -> CellResult<Self> {
        let name = name.into();
        if props.len() != schema.value_count() {
            return Err(CellError::SchemaMismatch {
                layer: name,
                expected: schema.value_count(),
                got: props.len(),
            });
        }
        Ok(Self {
            name,
            values: props.to_vec(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Real] {
        &self.values
    }

    /// Value under a schema key, `None` for the name column or unknown keys.
    pub fn value(&self, schema: &PropertySchema, key: &str) -> Option<Real> {
        schema.value_position(key).map(|i| self.values[i])
    }
}

/// Insertion-ordered raw material set for one repeating unit.
///
/// Order is meaningful: it is the top-to-bottom layup of the unit, so the
/// entries live in a `Vec` rather than a map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerSet {
    entries: Vec<(String, Vec<Real>)>,
}

impl LayerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a material, keeping names unique.
    pub fn push(&mut self, name: impl Into<String>, props: Vec<Real>) -> CellResult<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(CellError::DuplicateMaterial { name });
        }
        self.entries.push((name, props));
        Ok(())
    }

    pub fn from_pairs(pairs: Vec<(String, Vec<Real>)>) -> CellResult<Self> {
        let mut set = Self::new();
        for (name, props) in pairs {
            set.push(name, props)?;
        }
        Ok(set)
    }

    pub fn get(&self, name: &str) -> Option<&[Real]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, props)| props.as_slice())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(n, _)| n == name)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Real])> + '_ {
        self.entries
            .iter()
            .map(|(n, props)| (n.as_str(), props.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
