//! Turn a validated study into the inputs the staging step consumes.

use crate::error::PipelineResult;
use sc_cell::{LayerSet, PropertySchema};
use sc_materials::{Lithiation, MaterialProps};
use sc_project::schema::{SimulationProperties, Study};
use sc_project::validate::validate_study;

/// A study compiled down to raw stacking inputs.
///
/// All schema-level concerns (defaults, ids, versioning) are resolved here;
/// downstream code only sees property vectors.
#[derive(Debug, Clone)]
pub struct CompiledStudy {
    pub schema: PropertySchema,
    pub layer_set: LayerSet,
    pub properties: SimulationProperties,
    pub no_stacks: usize,
    pub index_name: String,
}

/// Validate, apply the lithiation correction, and flatten materials into an
/// ordered layer set.
pub fn compile_study(study: &Study) -> PipelineResult<CompiledStudy> {
    validate_study(study)?;

    let lithiation = match &study.lithiation {
        Some(def) => Some(Lithiation::from_voltage(def.voltage_v)?),
        None => None,
    };

    let mut materials: Vec<(String, MaterialProps)> = Vec::with_capacity(study.materials.len());
    for def in &study.materials {
        let props = MaterialProps::from_si(
            def.youngs_modulus_pa,
            def.density_kg_m3,
            def.thickness_m,
            def.alpha,
        );
        props.validate()?;
        materials.push((def.id.clone(), props));
    }

    if let Some(lithiation) = lithiation {
        // Validation guarantees both electrodes exist when lithiation is set.
        let anode_at = materials.iter().position(|(id, _)| id == "anode");
        let cathode_at = materials.iter().position(|(id, _)| id == "cathode");
        if let (Some(a), Some(c)) = (anode_at, cathode_at) {
            let mut anode = materials[a].1;
            let mut cathode = materials[c].1;
            lithiation.adjust(&mut anode, &mut cathode);
            materials[a].1 = anode;
            materials[c].1 = cathode;
        }
    }

    let layer_set = LayerSet::from_pairs(
        materials
            .into_iter()
            .map(|(id, props)| (id, props.to_vector()))
            .collect(),
    )?;

    Ok(CompiledStudy {
        schema: PropertySchema::mechanical(),
        layer_set,
        properties: study.properties.clone(),
        no_stacks: study.stacking.no_stacks,
        index_name: study.stacking.index_name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PipelineError;
    use sc_project::schema::LithiationDef;

    #[test]
    fn reference_study_compiles_in_catalog_order() {
        let compiled = compile_study(&Study::reference("ref")).unwrap();

        assert_eq!(compiled.layer_set.len(), 8);
        assert_eq!(compiled.no_stacks, 1);
        assert_eq!(compiled.index_name, "layer_no");
        assert_eq!(compiled.properties.nx, 512);

        let names: Vec<&str> = compiled.layer_set.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            [
                "case",
                "aluminum",
                "cathode",
                "anode",
                "anolyte",
                "separator",
                "catholyte",
                "copper",
            ]
        );

        let case = compiled.layer_set.get("case").unwrap();
        assert_eq!(case, &[70e9, 2700.0, 100e-6, 0.7]);
    }

    #[test]
    fn lithiation_shifts_only_the_electrodes() {
        let mut study = Study::reference("charged");
        study.lithiation = Some(LithiationDef { voltage_v: 3.45 });

        let compiled = compile_study(&study).unwrap();

        let anode = compiled.layer_set.get("anode").unwrap();
        let cathode = compiled.layer_set.get("cathode").unwrap();
        let case = compiled.layer_set.get("case").unwrap();

        // soc(3.45) is just above 0.5; the anode softens, the cathode stiffens
        assert!(anode[0] < 10e9);
        assert!(anode[1] < 2260.0);
        assert!(cathode[0] > 200e9);
        assert!(cathode[1] > 3300.0);
        assert_eq!(case[0], 70e9);

        // thickness and absorption are untouched
        assert_eq!(anode[2], 60e-6);
        assert_eq!(anode[3], 0.6);
    }

    #[test]
    fn invalid_study_is_rejected_before_compilation() {
        let mut study = Study::reference("bad");
        study.materials.clear();
        let err = compile_study(&study).unwrap_err();
        assert!(matches!(err, PipelineError::Project(_)));
    }

    #[test]
    fn out_of_window_voltage_is_a_material_error() {
        let mut study = Study::reference("overcharged");
        study.lithiation = Some(LithiationDef { voltage_v: 5.0 });
        let err = compile_study(&study).unwrap_err();
        assert!(matches!(err, PipelineError::Material(_)));
        assert!(err.to_string().contains("5"));
    }
}
