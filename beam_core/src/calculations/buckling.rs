//! # Euler Buckling
//!
//! Critical axial load and slenderness for the member treated as a column of
//! effective length Le = K·L over the full beam length.
//!
//! ```text
//! Pcr = π²·E·I / Le²
//! λ   = Le / r,   r = √(I/A)
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::equations::{euler_critical_load, slenderness_ratio};
use crate::materials::Material;
use crate::section::SectionProperties;
use crate::units::kn;

/// Slenderness above which the risk is high
pub const HIGH_RISK_SLENDERNESS: f64 = 200.0;

/// Slenderness above which the risk is medium
pub const MEDIUM_RISK_SLENDERNESS: f64 = 100.0;

/// Buckling risk class derived from slenderness
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BucklingRisk {
    /// λ ≤ 100
    Low,
    /// 100 < λ ≤ 200
    Medium,
    /// λ > 200
    High,
}

impl BucklingRisk {
    /// Classify a slenderness ratio; both thresholds are strict
    pub fn classify(slenderness: f64) -> Self {
        if slenderness > HIGH_RISK_SLENDERNESS {
            BucklingRisk::High
        } else if slenderness > MEDIUM_RISK_SLENDERNESS {
            BucklingRisk::Medium
        } else {
            BucklingRisk::Low
        }
    }
}

impl fmt::Display for BucklingRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BucklingRisk::Low => "Low",
            BucklingRisk::Medium => "Medium",
            BucklingRisk::High => "High",
        };
        f.write_str(label)
    }
}

/// Euler buckling summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucklingResult {
    /// Pcr (kN)
    pub critical_load_kn: f64,
    /// λ = Le/r
    pub slenderness_ratio: f64,
    /// Classification of λ
    pub risk: BucklingRisk,
}

/// Evaluate buckling for effective length K·L
pub fn evaluate(
    material: &Material,
    section: &SectionProperties,
    beam_length_m: f64,
    k: f64,
) -> BucklingResult {
    let effective_length = k * beam_length_m;
    let slenderness = slenderness_ratio(effective_length, section.radius_of_gyration_m());
    BucklingResult {
        critical_load_kn: kn(euler_critical_load(
            material.e_pa,
            section.inertia_m4,
            effective_length,
        )),
        slenderness_ratio: slenderness,
        risk: BucklingRisk::classify(slenderness),
    }
}
