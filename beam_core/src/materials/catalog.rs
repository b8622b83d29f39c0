//! Static material table.
//!
//! Adding a material means adding a key to [`MaterialKey`] and a row here;
//! nothing in the solver changes.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{Material, MaterialKey};

static CATALOG: Lazy<HashMap<MaterialKey, Material>> = Lazy::new(|| {
    let rows = [
        (
            MaterialKey::Steel,
            Material {
                name: "Structural Steel A36".to_string(),
                e_pa: 200e9,
                g_pa: 79.3e9,
                density_kg_m3: 7850.0,
                yield_strength_pa: 250e6,
                ultimate_strength_pa: 400e6,
                poisson_ratio: 0.3,
                thermal_expansion: 11.7e-6,
            },
        ),
        (
            MaterialKey::Aluminum,
            Material {
                name: "Aluminum 6061-T6".to_string(),
                e_pa: 69e9,
                g_pa: 26e9,
                density_kg_m3: 2700.0,
                yield_strength_pa: 240e6,
                ultimate_strength_pa: 290e6,
                poisson_ratio: 0.33,
                thermal_expansion: 23.6e-6,
            },
        ),
        (
            MaterialKey::Concrete,
            Material {
                name: "Concrete f'c=30 MPa".to_string(),
                e_pa: 30e9,
                g_pa: 12.5e9,
                density_kg_m3: 2400.0,
                yield_strength_pa: 30e6,
                ultimate_strength_pa: 30e6,
                poisson_ratio: 0.2,
                thermal_expansion: 10e-6,
            },
        ),
        (
            MaterialKey::Wood,
            Material {
                name: "Wood (Structural Pine)".to_string(),
                e_pa: 12e9,
                g_pa: 0.75e9,
                density_kg_m3: 500.0,
                yield_strength_pa: 40e6,
                ultimate_strength_pa: 50e6,
                poisson_ratio: 0.4,
                thermal_expansion: 5e-6,
            },
        ),
        (
            MaterialKey::StainlessSteel,
            Material {
                name: "Stainless Steel 304".to_string(),
                e_pa: 193e9,
                g_pa: 86e9,
                density_kg_m3: 8000.0,
                yield_strength_pa: 215e6,
                ultimate_strength_pa: 505e6,
                poisson_ratio: 0.29,
                thermal_expansion: 17.2e-6,
            },
        ),
    ];
    rows.into_iter().collect()
});

/// The full material catalog keyed by [`MaterialKey`]
pub fn catalog() -> &'static HashMap<MaterialKey, Material> {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_complete() {
        assert_eq!(catalog().len(), MaterialKey::ALL.len());
    }

    #[test]
    fn test_steel_values() {
        let steel = &catalog()[&MaterialKey::Steel];
        assert_eq!(steel.yield_strength_pa, 250e6);
        assert_eq!(steel.density_kg_m3, 7850.0);
    }
}
