//! Study validation logic.

use crate::migrate::LATEST_VERSION;
use crate::schema::{MaterialDef, SimulationProperties, Study};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

fn invalid(field: &str, value: impl std::fmt::Display, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_study(study: &Study) -> Result<(), ValidationError> {
    if study.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: study.version,
        });
    }

    if study.name.trim().is_empty() {
        return Err(invalid("study name", &study.name, "must not be empty"));
    }

    if study.materials.is_empty() {
        return Err(invalid(
            "materials",
            "[]",
            "at least the case layer is required",
        ));
    }

    let mut ids: HashSet<&str> = HashSet::new();
    for material in &study.materials {
        if !ids.insert(material.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: material.id.clone(),
                context: "materials".to_string(),
            });
        }
        validate_material(material)?;
    }

    if !ids.contains("case") {
        return Err(ValidationError::MissingReference {
            id: "case".to_string(),
            context: "materials (stacking enclosure)".to_string(),
        });
    }

    validate_properties(&study.properties)?;

    if study.stacking.index_name.trim().is_empty() {
        return Err(invalid(
            "stacking.index_name",
            &study.stacking.index_name,
            "must not be empty",
        ));
    }

    if let Some(lithiation) = &study.lithiation {
        if !lithiation.voltage_v.is_finite() {
            return Err(invalid(
                "lithiation.voltage_v",
                lithiation.voltage_v,
                "must be finite",
            ));
        }
        for electrode in ["anode", "cathode"] {
            if !ids.contains(electrode) {
                return Err(ValidationError::MissingReference {
                    id: electrode.to_string(),
                    context: "materials (lithiation adjustment)".to_string(),
                });
            }
        }
    }

    Ok(())
}

fn validate_material(material: &MaterialDef) -> Result<(), ValidationError> {
    if material.id.trim().is_empty() {
        return Err(invalid("material id", &material.id, "must not be empty"));
    }

    let positive = [
        ("youngs_modulus_pa", material.youngs_modulus_pa),
        ("density_kg_m3", material.density_kg_m3),
        ("thickness_m", material.thickness_m),
    ];
    for (field, value) in positive {
        if !(value.is_finite() && value > 0.0) {
            return Err(invalid(
                &format!("material '{}' {field}", material.id),
                value,
                "must be finite and positive",
            ));
        }
    }

    if !(material.alpha.is_finite() && material.alpha >= 0.0) {
        return Err(invalid(
            &format!("material '{}' alpha", material.id),
            material.alpha,
            "must be finite and non-negative",
        ));
    }

    Ok(())
}

fn validate_properties(p: &SimulationProperties) -> Result<(), ValidationError> {
    if p.nx < 2 {
        return Err(invalid(
            "properties.Nx",
            p.nx,
            "grid needs at least two points",
        ));
    }
    if !(p.cfl.is_finite() && p.cfl > 0.0 && p.cfl <= 1.0) {
        return Err(invalid("properties.cfl", p.cfl, "must lie in (0, 1]"));
    }
    if !(p.simulation_duration.is_finite() && p.simulation_duration > 0.0) {
        return Err(invalid(
            "properties.simulation_duration",
            p.simulation_duration,
            "must be finite and positive",
        ));
    }
    if !(p.source_freq.is_finite() && p.source_freq > 0.0) {
        return Err(invalid(
            "properties.source_freq",
            p.source_freq,
            "must be finite and positive",
        ));
    }
    if !(p.source_mag.is_finite() && p.source_mag >= 0.0) {
        return Err(invalid(
            "properties.source_mag",
            p.source_mag,
            "must be finite and non-negative",
        ));
    }
    if !(p.alpha_power.is_finite() && p.alpha_power > 0.0) {
        return Err(invalid(
            "properties.alpha_power",
            p.alpha_power,
            "must be finite and positive",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::LithiationDef;

    #[test]
    fn reference_study_is_valid() {
        assert!(validate_study(&Study::reference("ok")).is_ok());
    }

    #[test]
    fn future_version_is_rejected() {
        let mut study = Study::reference("ok");
        study.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn duplicate_material_id_is_rejected() {
        let mut study = Study::reference("ok");
        let dup = study.materials[1].clone();
        study.materials.push(dup);
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn missing_case_is_rejected() {
        let mut study = Study::reference("ok");
        study.materials.retain(|m| m.id != "case");
        let err = validate_study(&study).unwrap_err();
        assert!(matches!(err, ValidationError::MissingReference { .. }));
        assert!(err.to_string().contains("case"));
    }

    #[test]
    fn non_physical_material_is_rejected() {
        let mut study = Study::reference("ok");
        study.materials[2].density_kg_m3 = -1.0;
        assert!(matches!(
            validate_study(&study),
            Err(ValidationError::InvalidValue { .. })
        ));

        let mut study = Study::reference("ok");
        study.materials[0].thickness_m = f64::NAN;
        assert!(validate_study(&study).is_err());
    }

    #[test]
    fn courant_number_above_one_is_rejected() {
        let mut study = Study::reference("ok");
        study.properties.cfl = 1.5;
        let err = validate_study(&study).unwrap_err();
        assert!(err.to_string().contains("cfl"));
    }

    #[test]
    fn lithiation_requires_both_electrodes() {
        let mut study = Study::reference("ok");
        study.lithiation = Some(LithiationDef { voltage_v: 3.45 });
        assert!(validate_study(&study).is_ok());

        study.materials.retain(|m| m.id != "anode");
        let err = validate_study(&study).unwrap_err();
        assert!(matches!(err, ValidationError::MissingReference { .. }));
        assert!(err.to_string().contains("anode"));
    }

    #[test]
    fn empty_index_name_is_rejected() {
        let mut study = Study::reference("ok");
        study.stacking.index_name = "  ".to_string();
        assert!(validate_study(&study).is_err());
    }
}
