use crate::props::MaterialProps;
use sc_core::numeric::Real;

/// One material in the built-in reference catalog.
///
/// Property magnitudes are stored as plain SI numbers so the catalog can be a
/// compile-time constant; `props()` lifts them into typed quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialEntry {
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
    pub e_pa: Real,
    pub rho_kg_m3: Real,
    pub x_m: Real,
    pub alpha: Real,
}

impl MaterialEntry {
    pub fn props(&self) -> MaterialProps {
        MaterialProps::from_si(self.e_pa, self.rho_kg_m3, self.x_m, self.alpha)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

/// Layer materials of the reference pouch cell, in through-thickness order
/// for a single repeating unit (outer case first).
const REFERENCE_CELL_CATALOG: [MaterialEntry; 8] = [
    MaterialEntry {
        canonical_id: "case",
        display_name: "Case",
        aliases: &["casing", "pouch"],
        e_pa: 70e9,
        rho_kg_m3: 2700.0,
        x_m: 100e-6,
        alpha: 0.7,
    },
    MaterialEntry {
        canonical_id: "aluminum",
        display_name: "Aluminum current collector",
        aliases: &["al", "aluminium"],
        e_pa: 70e9,
        rho_kg_m3: 2700.0,
        x_m: 10e-6,
        alpha: 0.7,
    },
    MaterialEntry {
        canonical_id: "cathode",
        display_name: "Cathode",
        aliases: &["positive electrode"],
        e_pa: 200e9,
        rho_kg_m3: 3300.0,
        x_m: 50e-6,
        alpha: 0.5,
    },
    MaterialEntry {
        canonical_id: "anode",
        display_name: "Anode",
        aliases: &["negative electrode"],
        e_pa: 10e9,
        rho_kg_m3: 2260.0,
        x_m: 60e-6,
        alpha: 0.6,
    },
    MaterialEntry {
        canonical_id: "anolyte",
        display_name: "Anode-side electrolyte",
        aliases: &["electrolyte"],
        e_pa: 2e9,
        rho_kg_m3: 1000.0,
        x_m: 50e-6,
        alpha: 1.2,
    },
    MaterialEntry {
        canonical_id: "separator",
        display_name: "Separator",
        aliases: &["membrane"],
        e_pa: 2e9,
        rho_kg_m3: 920.0,
        x_m: 20e-6,
        alpha: 1.1,
    },
    MaterialEntry {
        canonical_id: "catholyte",
        display_name: "Cathode-side electrolyte",
        aliases: &["electrolyte"],
        e_pa: 2e9,
        rho_kg_m3: 1000.0,
        x_m: 50e-6,
        alpha: 1.2,
    },
    MaterialEntry {
        canonical_id: "copper",
        display_name: "Copper current collector",
        aliases: &["cu"],
        e_pa: 130e9,
        rho_kg_m3: 8960.0,
        x_m: 10e-6,
        alpha: 0.5,
    },
];

/// Full reference catalog in layup order.
pub fn reference_cell_catalog() -> &'static [MaterialEntry] {
    &REFERENCE_CELL_CATALOG
}

/// Entries whose id, display name or alias contains `query` (case-insensitive).
pub fn filter_reference_catalog(query: &str) -> Vec<MaterialEntry> {
    REFERENCE_CELL_CATALOG
        .iter()
        .filter(|entry| entry.matches_query(query))
        .copied()
        .collect()
}

/// Look up a catalog entry by canonical id.
pub fn find_material(id: &str) -> Option<&'static MaterialEntry> {
    REFERENCE_CELL_CATALOG
        .iter()
        .find(|entry| entry.canonical_id.eq_ignore_ascii_case(id.trim()))
}
