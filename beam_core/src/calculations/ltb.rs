//! # Lateral-Torsional Buckling
//!
//! Simplified check using the Euler form over the support span:
//! Mcr = π²·E·I/(K·span)², SF = Mcr/Mmax.

use serde::{Deserialize, Serialize};

use crate::equations::ltb_critical_moment;
use crate::materials::Material;
use crate::section::SectionProperties;
use crate::units::knm;

/// LTB summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LtbResult {
    /// Mcr (kN·m)
    pub critical_moment_knm: f64,
    /// Mcr / Mmax, 0 when the beam carries no moment
    pub safety_factor: f64,
}

/// Evaluate LTB for the given span and peak moment (N·m)
pub fn evaluate(
    material: &Material,
    section: &SectionProperties,
    span_m: f64,
    k: f64,
    max_moment_nm: f64,
) -> LtbResult {
    let mcr = ltb_critical_moment(material.e_pa, section.inertia_m4, k, span_m);
    let safety_factor = if max_moment_nm > 0.0 { mcr / max_moment_nm } else { 0.0 };
    LtbResult {
        critical_moment_knm: knm(mcr),
        safety_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialKey;
    use crate::section::{CrossSectionSpec, SectionShape};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_ltb_uses_span() {
        let section = CrossSectionSpec::new(SectionShape::IBeam, 0.2, 0.4).properties();
        let steel = Material::lookup(MaterialKey::Steel);
        let result = evaluate(steel, &section, 6.0, 1.0, 50_000.0);
        let mcr = PI * PI * 200e9 * section.inertia_m4 / 36.0;
        assert_relative_eq!(result.critical_moment_knm, mcr / 1000.0, max_relative = 1e-12);
        assert_relative_eq!(result.safety_factor, mcr / 50_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_moment_gives_zero_factor() {
        let section = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2).properties();
        let result = evaluate(Material::lookup(MaterialKey::Wood), &section, 4.0, 1.0, 0.0);
        assert!(result.critical_moment_knm > 0.0);
        assert_eq!(result.safety_factor, 0.0);
    }
}
