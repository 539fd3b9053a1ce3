//! Lithiation-dependent electrode property shifts.
//!
//! All three fits are linear in state of charge. They come from quasi-static
//! measurements on a graphite/NMC couple and hold over the 2.7 V to 4.2 V
//! operating window only.

use crate::error::{MaterialError, MaterialResult};
use crate::props::MaterialProps;
use sc_core::numeric::Real;
use sc_core::units::{kg_m3, pa};

pub const MIN_CELL_VOLTAGE: Real = 2.7;
pub const MAX_CELL_VOLTAGE: Real = 4.2;

/// Map open-circuit cell voltage [V] to state of charge.
///
/// Errors when the voltage lies strictly outside the operating window; the
/// window limits themselves are accepted.
pub fn state_of_charge(voltage: Real) -> MaterialResult<Real> {
    if !(MIN_CELL_VOLTAGE..=MAX_CELL_VOLTAGE).contains(&voltage) {
        return Err(MaterialError::VoltageOutOfRange { voltage });
    }
    Ok(0.67 * voltage - 1.8)
}

/// Densities of (anode, cathode) at `soc`, scaled from delithiated baselines.
///
/// Lithium moves from cathode to anode on charge, but the anode swells faster
/// than it gains mass, so its density falls while the cathode's rises.
pub fn adjust_density(soc: Real, rho_anode_0: Real, rho_cathode_0: Real) -> (Real, Real) {
    (
        rho_anode_0 * (1.0 - 0.03 * soc),
        rho_cathode_0 * (1.0 + 0.03 * soc),
    )
}

/// Young's moduli of (anode, cathode) at `soc`, scaled from delithiated baselines.
pub fn adjust_stiffness(soc: Real, e_anode_0: Real, e_cathode_0: Real) -> (Real, Real) {
    (
        e_anode_0 * (1.0 - 0.05 * soc),
        e_cathode_0 * (1.0 + 0.01 * soc),
    )
}

/// Electrode adjustment frozen at one state of charge.
#[derive(Debug, Clone, Copy)]
pub struct Lithiation {
    soc: Real,
}

impl Lithiation {
    pub fn from_voltage(voltage: Real) -> MaterialResult<Self> {
        Ok(Self {
            soc: state_of_charge(voltage)?,
        })
    }

    pub fn at_soc(soc: Real) -> Self {
        Self { soc }
    }

    pub fn soc(&self) -> Real {
        self.soc
    }

    /// Scale both electrodes' density and stiffness in place.
    ///
    /// Thickness and absorption are left untouched; the fits only cover the
    /// mechanical pair.
    pub fn adjust(&self, anode: &mut MaterialProps, cathode: &mut MaterialProps) {
        let (rho_a, rho_c) = adjust_density(self.soc, anode.density.value, cathode.density.value);
        let (e_a, e_c) = adjust_stiffness(
            self.soc,
            anode.youngs_modulus.value,
            cathode.youngs_modulus.value,
        );
        anode.density = kg_m3(rho_a);
        cathode.density = kg_m3(rho_c);
        anode.youngs_modulus = pa(e_a);
        cathode.youngs_modulus = pa(e_c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nominal_voltage_gives_mid_soc() {
        let soc = state_of_charge(3.45).unwrap();
        assert!((soc - 0.5).abs() < 0.1);
    }

    #[test]
    fn window_limits_are_accepted() {
        assert!(state_of_charge(MIN_CELL_VOLTAGE).is_ok());
        assert!(state_of_charge(MAX_CELL_VOLTAGE).is_ok());
    }

    #[test]
    fn out_of_window_voltage_is_rejected() {
        for v in [0.0, 2.6, 4.3, 12.0, f64::NAN] {
            let err = state_of_charge(v);
            assert!(err.is_err(), "voltage {v} should be rejected");
        }
    }

    #[test]
    fn stiffness_fit_matches_reference_points() {
        let (e_anode, e_cathode) = adjust_stiffness(0.5, 10e9, 200e9);
        assert!((e_anode - 9.75e9).abs() < 1e6);
        assert!((e_cathode - 201e9).abs() < 1e6);
    }

    #[test]
    fn density_fit_matches_reference_points() {
        let (rho_anode, rho_cathode) = adjust_density(0.5, 2260.0, 3300.0);
        assert!((rho_anode - 2226.1).abs() < 1e-6);
        assert!((rho_cathode - 3349.5).abs() < 1e-6);
    }

    #[test]
    fn adjust_touches_only_mechanical_pair() {
        let mut anode = MaterialProps::from_si(10e9, 2260.0, 60e-6, 0.6);
        let mut cathode = MaterialProps::from_si(200e9, 3300.0, 50e-6, 0.5);

        Lithiation::at_soc(0.5).adjust(&mut anode, &mut cathode);

        assert!((anode.youngs_modulus.value - 9.75e9).abs() < 1e6);
        assert!((cathode.youngs_modulus.value - 201e9).abs() < 1e6);
        assert_eq!(anode.thickness.value, 60e-6);
        assert_eq!(anode.alpha, 0.6);
        assert_eq!(cathode.thickness.value, 50e-6);
        assert_eq!(cathode.alpha, 0.5);
    }

    #[test]
    fn zero_soc_is_identity() {
        let mut anode = MaterialProps::from_si(10e9, 2260.0, 60e-6, 0.6);
        let mut cathode = MaterialProps::from_si(200e9, 3300.0, 50e-6, 0.5);
        let (a0, c0) = (anode, cathode);

        Lithiation::at_soc(0.0).adjust(&mut anode, &mut cathode);

        assert_eq!(anode, a0);
        assert_eq!(cathode, c0);
    }
}
