//! # Deflection Models
//!
//! The deflected shape is produced by a pluggable [`DeflectionModel`]. The
//! default, [`ShapeFunctionDeflection`], scales the local moment by a
//! simply-supported shape function:
//!
//! ```text
//! d(x) = −(M(x)·x²)/(2EI) · (1 − (x/L)²)
//! ```
//!
//! It is an approximation, not a double integration of curvature, and it
//! vanishes at both beam ends whatever the support layout. A model that
//! integrates curvature can be dropped in through the trait.

use crate::equations::shape_function_deflection;

/// Strategy that turns a sampled moment diagram into deflections
pub trait DeflectionModel: Send + Sync {
    /// Short name used in logs and reports
    fn name(&self) -> &str;

    /// Deflection (m, downward negative) at each station.
    ///
    /// `stations` and `moments` have the same length; `ei` is the flexural
    /// rigidity in N·m².
    fn deflections(&self, stations: &[f64], moments: &[f64], ei: f64, length_m: f64) -> Vec<f64>;
}

/// Moment-scaled simply-supported shape function
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeFunctionDeflection;

impl DeflectionModel for ShapeFunctionDeflection {
    fn name(&self) -> &str {
        "shape-function"
    }

    fn deflections(&self, stations: &[f64], moments: &[f64], ei: f64, length_m: f64) -> Vec<f64> {
        stations
            .iter()
            .zip(moments)
            .map(|(&x, &m)| shape_function_deflection(m, x, ei, length_m))
            .collect()
    }
}

/// Deflections with their peak magnitude
#[derive(Debug, Clone, PartialEq)]
pub struct DeflectionField {
    /// Deflection at each station (m)
    pub values_m: Vec<f64>,
    /// Largest |d| (m)
    pub max_abs_m: f64,
}

/// Run a model and collect its peak
pub fn compute(
    model: &dyn DeflectionModel,
    stations: &[f64],
    moments: &[f64],
    ei: f64,
    length_m: f64,
) -> DeflectionField {
    let values_m = model.deflections(stations, moments, ei, length_m);
    let max_abs_m = values_m.iter().fold(0.0f64, |acc, d| acc.max(d.abs()));
    DeflectionField { values_m, max_abs_m }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_shape_function_model() {
        let stations = [0.0, 2.5, 5.0, 7.5, 10.0];
        let moments = [0.0, 12_500.0, 25_000.0, 12_500.0, 0.0];
        let ei = 200e9 * 6.666_666_666_666_667e-5;
        let field = compute(&ShapeFunctionDeflection, &stations, &moments, ei, 10.0);

        assert_eq!(field.values_m.len(), 5);
        assert_eq!(field.values_m[0], 0.0);
        assert_relative_eq!(field.values_m[4], 0.0, epsilon = 1e-15);
        // -(25000·25)/(2EI)·(1 − 0.25)
        let expected = 25_000.0 * 25.0 / (2.0 * ei) * 0.75;
        assert_relative_eq!(field.values_m[2], -expected, max_relative = 1e-12);
        assert_relative_eq!(field.max_abs_m, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_rigidity_gives_zero() {
        let field = compute(&ShapeFunctionDeflection, &[0.0, 1.0], &[10.0, 10.0], 0.0, 2.0);
        assert_eq!(field.values_m, vec![0.0, 0.0]);
        assert_eq!(field.max_abs_m, 0.0);
    }

    struct Flat;

    impl DeflectionModel for Flat {
        fn name(&self) -> &str {
            "flat"
        }

        fn deflections(
            &self,
            stations: &[f64],
            _moments: &[f64],
            _ei: f64,
            _length_m: f64,
        ) -> Vec<f64> {
            vec![-0.001; stations.len()]
        }
    }

    #[test]
    fn test_custom_model() {
        let field = compute(&Flat, &[0.0, 1.0, 2.0], &[0.0; 3], 1.0, 2.0);
        assert_eq!(Flat.name(), "flat");
        assert_relative_eq!(field.max_abs_m, 0.001);
    }
}
