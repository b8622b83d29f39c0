//! # Stresses
//!
//! Two distinct products:
//!
//! - [`StressField`]: pointwise flexural stress σ(x) = |M(x)·c/I| at every
//!   station, with c = h/2 for every profile.
//! - [`CombinedStress`]: one scalar summary built from the maxima only,
//!   τ = 1.5·Vmax/A and σ_vm = √(σmax² + 3τ²). There is no pointwise von
//!   Mises curve.

use serde::{Deserialize, Serialize};

use crate::equations::{flexural_stress, peak_shear_stress, von_mises};
use crate::section::SectionProperties;
use crate::units::{MegaPascals, Pascals};

/// Flexural stress along the beam
#[derive(Debug, Clone, PartialEq)]
pub struct StressField {
    /// σ at each station (Pa)
    pub values_pa: Vec<f64>,
    /// Largest σ (Pa)
    pub max_pa: f64,
}

/// Pointwise flexural stress from a sampled moment diagram
pub fn flexural_field(moments_nm: &[f64], section: &SectionProperties) -> StressField {
    let values_pa: Vec<f64> = moments_nm
        .iter()
        .map(|&m| flexural_stress(m, section.extreme_fiber_m, section.inertia_m4))
        .collect();
    let max_pa = values_pa.iter().copied().fold(0.0f64, f64::max);
    StressField { values_pa, max_pa }
}

/// Scalar shear and von Mises summary derived from the maxima
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CombinedStress {
    /// Peak shear stress τ = 1.5·Vmax/A (MPa)
    pub shear_stress_mpa: f64,
    /// σ_vm = √(σmax² + 3τ²) (MPa)
    pub von_mises_mpa: f64,
}

impl CombinedStress {
    /// Build from the maximum shear (N) and maximum flexural stress (Pa)
    pub fn from_maxima(max_shear_n: f64, max_stress_pa: f64, section: &SectionProperties) -> Self {
        let tau = peak_shear_stress(max_shear_n, section.area_m2);
        CombinedStress {
            shear_stress_mpa: MegaPascals::from(Pascals(tau)).value(),
            von_mises_mpa: MegaPascals::from(Pascals(von_mises(max_stress_pa, tau))).value(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::{CrossSectionSpec, SectionShape};
    use approx::assert_relative_eq;

    fn rect() -> SectionProperties {
        CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2).properties()
    }

    #[test]
    fn test_flexural_field() {
        let field = flexural_field(&[0.0, -12_500.0, 25_000.0], &rect());
        // σ = M·c/I = 25000·0.1/6.6667e-5 = 37.5 MPa
        assert_relative_eq!(field.max_pa, 37.5e6, max_relative = 1e-9);
        assert_relative_eq!(field.values_pa[1], 18.75e6, max_relative = 1e-9);
        assert_eq!(field.values_pa[0], 0.0);
    }

    #[test]
    fn test_combined_stress_from_maxima() {
        let combined = CombinedStress::from_maxima(5_000.0, 37.5e6, &rect());
        // τ = 1.5·5000/0.02 = 0.375 MPa
        assert_relative_eq!(combined.shear_stress_mpa, 0.375, max_relative = 1e-9);
        let expected = (37.5f64.powi(2) + 3.0 * 0.375f64.powi(2)).sqrt();
        assert_relative_eq!(combined.von_mises_mpa, expected, max_relative = 1e-9);
    }

    #[test]
    fn test_degenerate_section() {
        let empty = SectionProperties {
            area_m2: 0.0,
            inertia_m4: 0.0,
            extreme_fiber_m: 0.0,
        };
        assert_eq!(flexural_field(&[100.0], &empty).max_pa, 0.0);
        let combined = CombinedStress::from_maxima(100.0, 0.0, &empty);
        assert_eq!(combined.shear_stress_mpa, 0.0);
        assert_eq!(combined.von_mises_mpa, 0.0);
    }
}
