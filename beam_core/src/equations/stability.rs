//! # Stability Formulas
//!
//! Euler column buckling and the simplified lateral-torsional buckling check.
//! Every function returns 0 instead of NaN or infinity when a denominator
//! degenerates.

use std::f64::consts::PI;

/// Euler critical load Pcr = π²EI/Le²
///
/// # Example
/// ```rust
/// use beam_core::equations::stability::euler_critical_load;
///
/// // E = 200 GPa, I = 1e-6 m⁴, Le = 2 m
/// let pcr = euler_critical_load(200e9, 1e-6, 2.0);
/// assert!((pcr - 493_480.2).abs() < 1.0);
/// ```
#[inline]
pub fn euler_critical_load(e: f64, inertia: f64, effective_length: f64) -> f64 {
    if effective_length > 0.0 {
        PI * PI * e * inertia / effective_length.powi(2)
    } else {
        0.0
    }
}

/// Slenderness ratio λ = Le/r
#[inline]
pub fn slenderness_ratio(effective_length: f64, radius_of_gyration: f64) -> f64 {
    if radius_of_gyration > 0.0 {
        effective_length / radius_of_gyration
    } else {
        0.0
    }
}

/// Critical lateral-torsional buckling moment Mcr = π²EI/(K·span)²
///
/// Uses the same Euler form as column buckling with the support span as the
/// unbraced length. Warping and St. Venant torsion are not modeled.
#[inline]
pub fn ltb_critical_moment(e: f64, inertia: f64, k: f64, span: f64) -> f64 {
    euler_critical_load(e, inertia, k * span)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_euler() {
        let pcr = euler_critical_load(200e9, 6.6667e-5, 10.0);
        assert_relative_eq!(pcr, PI * PI * 200e9 * 6.6667e-5 / 100.0, max_relative = 1e-12);
        assert_eq!(euler_critical_load(200e9, 1e-6, 0.0), 0.0);
    }

    #[test]
    fn test_slenderness() {
        assert_eq!(slenderness_ratio(10.0, 0.1), 100.0);
        assert_eq!(slenderness_ratio(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_ltb_matches_euler_on_effective_span() {
        assert_relative_eq!(
            ltb_critical_moment(69e9, 2e-5, 0.7, 6.0),
            euler_critical_load(69e9, 2e-5, 4.2),
            max_relative = 1e-12
        );
        assert_eq!(ltb_critical_moment(69e9, 2e-5, 1.0, 0.0), 0.0);
    }
}
