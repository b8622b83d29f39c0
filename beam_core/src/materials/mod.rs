//! # Materials Database
//!
//! Immutable material records selected by key. The engine never mutates a
//! material; it only reads stiffness, strength and density from it.
//!
//! ## Available Materials
//!
//! - **steel**: Structural steel A36
//! - **aluminum**: Aluminum 6061-T6
//! - **concrete**: Concrete f'c = 30 MPa
//! - **wood**: Structural pine
//! - **stainlessSteel**: Stainless steel 304
//!
//! ## Example
//!
//! ```rust
//! use beam_core::materials::{Material, MaterialKey};
//!
//! let steel = Material::lookup(MaterialKey::Steel);
//! assert_eq!(steel.e_pa, 200e9);
//!
//! let key: MaterialKey = "stainlessSteel".parse().unwrap();
//! assert_eq!(key, MaterialKey::StainlessSteel);
//! ```

mod catalog;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::CalcError;

pub use catalog::catalog;

/// Catalog key for a material record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialKey {
    Steel,
    Aluminum,
    Concrete,
    Wood,
    StainlessSteel,
}

impl MaterialKey {
    /// All catalog keys in display order
    pub const ALL: [MaterialKey; 5] = [
        MaterialKey::Steel,
        MaterialKey::Aluminum,
        MaterialKey::Concrete,
        MaterialKey::Wood,
        MaterialKey::StainlessSteel,
    ];

    /// Key as it appears in JSON requests
    pub fn code(&self) -> &'static str {
        match self {
            MaterialKey::Steel => "steel",
            MaterialKey::Aluminum => "aluminum",
            MaterialKey::Concrete => "concrete",
            MaterialKey::Wood => "wood",
            MaterialKey::StainlessSteel => "stainlessSteel",
        }
    }
}

impl fmt::Display for MaterialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MaterialKey {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "steel" => Ok(MaterialKey::Steel),
            "aluminum" | "aluminium" => Ok(MaterialKey::Aluminum),
            "concrete" => Ok(MaterialKey::Concrete),
            "wood" => Ok(MaterialKey::Wood),
            "stainlesssteel" => Ok(MaterialKey::StainlessSteel),
            _ => Err(CalcError::material_not_found(s)),
        }
    }
}

/// Mechanical and physical properties of a material.
///
/// All values are base SI: moduli and strengths in Pa, density in kg/m³,
/// thermal expansion in 1/°C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Descriptive name
    pub name: String,
    /// Young's modulus E (Pa)
    pub e_pa: f64,
    /// Shear modulus G (Pa)
    pub g_pa: f64,
    /// Density (kg/m³)
    pub density_kg_m3: f64,
    /// Yield strength (Pa)
    pub yield_strength_pa: f64,
    /// Ultimate strength (Pa)
    pub ultimate_strength_pa: f64,
    /// Poisson's ratio
    pub poisson_ratio: f64,
    /// Coefficient of thermal expansion (1/°C)
    pub thermal_expansion: f64,
}

impl Material {
    /// Look up the catalog record for a key.
    ///
    /// Every key has a record, so this never fails.
    pub fn lookup(key: MaterialKey) -> &'static Material {
        &catalog()[&key]
    }

    /// Look up a material by its string key
    pub fn lookup_str(key: &str) -> Result<&'static Material, CalcError> {
        key.parse::<MaterialKey>().map(Material::lookup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_resolves() {
        for key in MaterialKey::ALL {
            let mat = Material::lookup(key);
            assert!(mat.e_pa > 0.0, "{} has no modulus", key);
            assert!(mat.ultimate_strength_pa >= mat.yield_strength_pa);
        }
    }

    #[test]
    fn test_parse_keys() {
        assert_eq!("steel".parse::<MaterialKey>().unwrap(), MaterialKey::Steel);
        assert_eq!("Stainless_Steel".parse::<MaterialKey>().unwrap(), MaterialKey::StainlessSteel);
        assert_eq!("aluminium".parse::<MaterialKey>().unwrap(), MaterialKey::Aluminum);

        let err = "granite".parse::<MaterialKey>().unwrap_err();
        assert_eq!(err, CalcError::material_not_found("granite"));
    }

    #[test]
    fn test_key_serialization() {
        let json = serde_json::to_string(&MaterialKey::StainlessSteel).unwrap();
        assert_eq!(json, "\"stainlessSteel\"");
        let key: MaterialKey = serde_json::from_str("\"wood\"").unwrap();
        assert_eq!(key, MaterialKey::Wood);
    }

    #[test]
    fn test_lookup_str() {
        let conc = Material::lookup_str("concrete").unwrap();
        assert_eq!(conc.density_kg_m3, 2400.0);
        assert!(Material::lookup_str("unobtainium").is_err());
    }
}
