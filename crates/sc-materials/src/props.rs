//! Acoustic-mechanical layer properties.

use crate::error::{MaterialError, MaterialResult};
use sc_core::numeric::{Real, ensure_finite, ensure_positive};
use sc_core::units::{Density, Length, Pressure, kg_m3, m, pa};

/// Number of numeric properties carried per material.
pub const PROPS_PER_MATERIAL: usize = 4;

/// Properties of one cell layer material.
///
/// Young's modulus, density and thickness are SI quantities; `alpha` is the
/// power-law absorption coefficient in dB/(MHz^y cm) as the solver consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProps {
    pub youngs_modulus: Pressure,
    pub density: Density,
    pub thickness: Length,
    pub alpha: Real,
}

impl MaterialProps {
    /// Build from raw SI magnitudes (Pa, kg/m^3, m).
    pub fn from_si(e_pa: Real, rho_kg_m3: Real, x_m: Real, alpha: Real) -> Self {
        Self {
            youngs_modulus: pa(e_pa),
            density: kg_m3(rho_kg_m3),
            thickness: m(x_m),
            alpha,
        }
    }

    /// Flatten to the `[E, rho, x, alpha]` vector layout used by layer tables.
    pub fn to_vector(&self) -> Vec<Real> {
        vec![
            self.youngs_modulus.value,
            self.density.value,
            self.thickness.value,
            self.alpha,
        ]
    }

    /// Young's modulus in GPa, for display.
    pub fn youngs_modulus_gpa(&self) -> Real {
        use uom::si::pressure::gigapascal;
        self.youngs_modulus.get::<gigapascal>()
    }

    /// Thickness in micrometres, for display.
    pub fn thickness_microns(&self) -> Real {
        use uom::si::length::micrometer;
        self.thickness.get::<micrometer>()
    }

    /// Rebuild from the `[E, rho, x, alpha]` vector layout.
    pub fn from_vector(values: &[Real]) -> MaterialResult<Self> {
        if values.len() != PROPS_PER_MATERIAL {
            return Err(MaterialError::BadVector {
                expected: PROPS_PER_MATERIAL,
                got: values.len(),
            });
        }
        Ok(Self::from_si(values[0], values[1], values[2], values[3]))
    }

    /// Reject non-finite or non-physical values.
    pub fn validate(&self) -> MaterialResult<()> {
        ensure_positive(self.youngs_modulus.value, "Young's modulus")?;
        ensure_positive(self.density.value, "density")?;
        ensure_positive(self.thickness.value, "layer thickness")?;
        let alpha = ensure_finite(self.alpha, "absorption coefficient")?;
        if alpha < 0.0 {
            return Err(MaterialError::Invalid {
                message: format!("negative absorption coefficient: {alpha}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_round_trip() {
        let case = MaterialProps::from_si(70e9, 2700.0, 100e-6, 0.7);
        let v = case.to_vector();
        assert_eq!(v, vec![70e9, 2700.0, 100e-6, 0.7]);

        let back = MaterialProps::from_vector(&v).unwrap();
        assert_eq!(back, case);
    }

    #[test]
    fn display_units_scale_from_si() {
        let case = MaterialProps::from_si(70e9, 2700.0, 100e-6, 0.7);
        assert_eq!(case.youngs_modulus_gpa(), 70.0);
        assert!((case.thickness_microns() - 100.0).abs() < 1e-9);
    }

    #[test]
    fn from_vector_rejects_wrong_arity() {
        let err = MaterialProps::from_vector(&[70e9, 2700.0, 100e-6]).unwrap_err();
        assert!(matches!(
            err,
            MaterialError::BadVector {
                expected: 4,
                got: 3
            }
        ));
    }

    #[test]
    fn validate_rejects_non_physical() {
        let mut p = MaterialProps::from_si(70e9, 2700.0, 100e-6, 0.7);
        assert!(p.validate().is_ok());

        p.density = kg_m3(0.0);
        assert!(p.validate().is_err());

        let mut q = MaterialProps::from_si(70e9, 2700.0, 100e-6, -0.1);
        assert!(q.validate().is_err());
        q.alpha = f64::NAN;
        assert!(q.validate().is_err());
    }
}
