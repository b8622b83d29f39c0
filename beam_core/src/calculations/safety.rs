//! # Safety Aggregation
//!
//! Strength safety factors, utilization, the deflection serviceability check
//! and the beam's self-weight summary.
//!
//! # Formulas
//! - SF_yield = fy / σmax, SF_ult = fu / σmax (0 when σmax = 0)
//! - Utilization = σmax / fy × 100 %
//! - Deflection limit = L / n (n = 360 by default), ratio = |dmax| / limit
//! - Self-weight = L·A·ρ·g

use serde::{Deserialize, Serialize};

use crate::materials::Material;
use crate::section::SectionProperties;
use crate::units::{kn, mm, GRAVITY};

/// Strength-based safety summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SafetySummary {
    /// fy / σmax
    pub yield_safety_factor: f64,
    /// fu / σmax
    pub ultimate_safety_factor: f64,
    /// σmax / fy as a percentage
    pub utilization_pct: f64,
}

impl SafetySummary {
    /// Evaluate against the material strengths for a peak stress in Pa
    pub fn evaluate(material: &Material, max_stress_pa: f64) -> Self {
        if max_stress_pa <= 0.0 {
            return SafetySummary {
                yield_safety_factor: 0.0,
                ultimate_safety_factor: 0.0,
                utilization_pct: 0.0,
            };
        }

        let utilization_pct = if material.yield_strength_pa > 0.0 {
            max_stress_pa / material.yield_strength_pa * 100.0
        } else {
            0.0
        };

        SafetySummary {
            yield_safety_factor: material.yield_strength_pa / max_stress_pa,
            ultimate_safety_factor: material.ultimate_strength_pa / max_stress_pa,
            utilization_pct,
        }
    }
}

/// Serviceability deflection check
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeflectionCheck {
    /// Allowed deflection L/n (mm)
    pub limit_mm: f64,
    /// |dmax| / limit
    pub ratio: f64,
    /// Whether the ratio is within the limit
    pub compliant: bool,
}

impl DeflectionCheck {
    /// Compare the peak deflection (m) with L divided by `limit_ratio`.
    ///
    /// A limit that is not a positive finite length is never compliant.
    pub fn evaluate(max_deflection_m: f64, beam_length_m: f64, limit_ratio: f64) -> Self {
        let limit_m = if limit_ratio > 0.0 {
            beam_length_m / limit_ratio
        } else {
            0.0
        };
        let valid_limit = limit_m.is_finite() && limit_m > 0.0;
        let ratio = if valid_limit {
            max_deflection_m.abs() / limit_m
        } else {
            0.0
        };
        DeflectionCheck {
            limit_mm: mm(limit_m),
            ratio,
            compliant: valid_limit && Self::is_compliant(ratio),
        }
    }

    /// A ratio of exactly 1 is still compliant
    pub fn is_compliant(ratio: f64) -> bool {
        ratio <= 1.0
    }
}

/// Total self-weight of the beam over its full length (kN)
pub fn self_weight_kn(material: &Material, section: &SectionProperties, beam_length_m: f64) -> f64 {
    kn(beam_length_m * section.area_m2 * material.density_kg_m3 * GRAVITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::materials::MaterialKey;
    use crate::section::{CrossSectionSpec, SectionShape};
    use approx::assert_relative_eq;

    #[test]
    fn test_safety_factors() {
        let steel = Material::lookup(MaterialKey::Steel);
        let s = SafetySummary::evaluate(steel, 125e6);
        assert_relative_eq!(s.yield_safety_factor, 2.0);
        assert_relative_eq!(s.ultimate_safety_factor, 3.2);
        assert_relative_eq!(s.utilization_pct, 50.0);
    }

    #[test]
    fn test_zero_stress() {
        let s = SafetySummary::evaluate(Material::lookup(MaterialKey::Concrete), 0.0);
        assert_eq!(s.yield_safety_factor, 0.0);
        assert_eq!(s.ultimate_safety_factor, 0.0);
        assert_eq!(s.utilization_pct, 0.0);
    }

    #[test]
    fn test_deflection_boundary() {
        // L = 22.5 m → limit 62.5 mm
        let at_limit = DeflectionCheck::evaluate(-0.0625, 22.5, 360.0);
        assert_relative_eq!(at_limit.limit_mm, 62.5, max_relative = 1e-12);
        assert_eq!(at_limit.ratio, 1.0);
        assert!(at_limit.compliant);

        assert!(DeflectionCheck::is_compliant(1.0));
        assert!(!DeflectionCheck::is_compliant(1.000_001));

        let over = DeflectionCheck::evaluate(0.063, 22.5, 360.0);
        assert!(over.ratio > 1.0);
        assert!(!over.compliant);
    }

    #[test]
    fn test_custom_limit_ratio() {
        let check = DeflectionCheck::evaluate(0.02, 4.8, 240.0);
        assert_relative_eq!(check.limit_mm, 20.0, max_relative = 1e-12);
        assert_relative_eq!(check.ratio, 1.0, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_limit_ratio_not_compliant() {
        for bad in [0.0, -360.0, f64::NAN] {
            let check = DeflectionCheck::evaluate(0.5, 10.0, bad);
            assert_eq!(check.ratio, 0.0);
            assert!(!check.compliant, "ratio {} must not pass", bad);
        }
    }

    #[test]
    fn test_self_weight() {
        let section = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2).properties();
        let w = self_weight_kn(Material::lookup(MaterialKey::Steel), &section, 10.0);
        // 10 · 0.02 · 7850 · 9.81 / 1000
        assert_relative_eq!(w, 15.4017, max_relative = 1e-6);
    }
}
