//! Study schema definitions.

use sc_core::numeric::Real;
use serde::{Deserialize, Serialize};

/// A saved acoustic study: solver configuration plus the cell build recipe.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Study {
    pub version: u32,
    #[serde(default = "default_study_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub properties: SimulationProperties,
    #[serde(default)]
    pub materials: Vec<MaterialDef>,
    #[serde(default)]
    pub stacking: StackingDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lithiation: Option<LithiationDef>,
}

fn default_study_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Study {
    /// Study preloaded with the reference pouch-cell materials and default
    /// solver configuration.
    pub fn reference(name: impl Into<String>) -> Self {
        let materials = sc_materials::reference_cell_catalog()
            .iter()
            .map(|entry| MaterialDef {
                id: entry.canonical_id.to_string(),
                youngs_modulus_pa: entry.e_pa,
                density_kg_m3: entry.rho_kg_m3,
                thickness_m: entry.x_m,
                alpha: entry.alpha,
            })
            .collect();

        Self {
            version: crate::migrate::LATEST_VERSION,
            id: default_study_id(),
            name: name.into(),
            properties: SimulationProperties::default(),
            materials,
            stacking: StackingDef::default(),
            lithiation: None,
        }
    }
}

/// Scalar solver configuration, staged verbatim for the k-space solver.
///
/// Serialized names follow the solver's configuration keys, capitalization
/// included, so the staged JSON needs no renaming step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimulationProperties {
    /// Grid points across the cell thickness.
    #[serde(rename = "Nx")]
    pub nx: u32,
    /// Courant number the solver derives its time step from.
    pub cfl: Real,
    /// Simulated physical duration [s].
    pub simulation_duration: Real,
    /// Source centre frequency [Hz].
    pub source_freq: Real,
    /// Source pressure magnitude [Pa].
    pub source_mag: Real,
    /// Exponent of the power-law absorption model.
    pub alpha_power: Real,
}

impl Default for SimulationProperties {
    fn default() -> Self {
        Self {
            nx: 512,
            cfl: 0.2,
            simulation_duration: 1e-7,
            source_freq: 25e6,
            source_mag: 2.0,
            alpha_power: 1.5,
        }
    }
}

/// One material row: id plus `[E, rho, x, alpha]` magnitudes in SI units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MaterialDef {
    pub id: String,
    pub youngs_modulus_pa: Real,
    pub density_kg_m3: Real,
    pub thickness_m: Real,
    pub alpha: Real,
}

/// How many repeating units to fold between the case layers, and what to
/// call the index column of the assembled table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StackingDef {
    #[serde(default = "default_no_stacks")]
    pub no_stacks: usize,
    #[serde(default = "default_index_name")]
    pub index_name: String,
}

impl Default for StackingDef {
    fn default() -> Self {
        Self {
            no_stacks: default_no_stacks(),
            index_name: default_index_name(),
        }
    }
}

fn default_no_stacks() -> usize {
    1
}

fn default_index_name() -> String {
    "layer_no".to_string()
}

/// Optional state-of-charge correction applied to the electrodes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LithiationDef {
    /// Open-circuit cell voltage [V] the cell is resting at.
    pub voltage_v: Real,
}
