//! # Cross-Section Property Formulas
//!
//! Closed-form area and second moment of area for the supported profile
//! families. All functions take SI dimensions (m) and return m² / m⁴.
//!
//! ## Notation
//!
//! - `b` = Width of section (diameter for circular sections)
//! - `h` = Height (depth) of section
//! - `A` = Cross-sectional area
//! - `I` = Second moment of area about the horizontal centroidal axis
//! - `r` = Radius of gyration √(I/A)
//!
//! The I- and T-profiles are proportional approximations: plate thicknesses
//! are fixed fractions of the overall width and height, not rolled-shape data.

use std::f64::consts::PI;

/// Web thickness of the I-profile as a fraction of the overall width
pub const I_BEAM_WEB_RATIO: f64 = 0.4;
/// Flange thickness of the I-profile as a fraction of the overall height
pub const I_BEAM_FLANGE_RATIO: f64 = 0.15;
/// Flange thickness of the T-profile as a fraction of the overall height
pub const T_BEAM_FLANGE_RATIO: f64 = 0.2;
/// Web width of the T-profile as a fraction of the overall width
pub const T_BEAM_WEB_RATIO: f64 = 0.3;
/// Web height of the T-profile as a fraction of the overall height
pub const T_BEAM_WEB_HEIGHT_RATIO: f64 = 0.8;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Area of a solid rectangle
///
/// ```text
///     ┌─────────┐
///   h │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// A = b·h
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_area;
///
/// let a = rectangular_area(0.1, 0.2);
/// assert!((a - 0.02).abs() < 1e-12);
/// ```
#[inline]
pub fn rectangular_area(b: f64, h: f64) -> f64 {
    b * h
}

/// Second moment of area of a solid rectangle (strong axis)
///
/// # Formula
/// I = b·h³/12
///
/// # Example
/// ```rust
/// use beam_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(0.1, 0.2);
/// assert!((i - 6.6667e-5).abs() < 1e-8);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Area of a solid circle of diameter `d`
///
/// # Formula
/// A = π·(d/2)²
#[inline]
pub fn circular_area(d: f64) -> f64 {
    PI * (d / 2.0).powi(2)
}

/// Second moment of area of a solid circle of diameter `d`
///
/// # Formula
/// I = π·(d/2)⁴/4
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * (d / 2.0).powi(4) / 4.0
}

// =============================================================================
// I-PROFILE (thin-flange approximation)
// =============================================================================

/// Area of the proportional I-profile
///
/// ```text
///     ┌─────────────┐  ← flange, tf = 0.15h
///     └────┐   ┌────┘
///          │   │       ← web, tw = 0.4b
///     ┌────┘   └────┐
///     └─────────────┘
///            b
/// ```
///
/// Computed as the bounding rectangle minus the two side voids.
///
/// # Formula
/// A = b·h − (b − tw)(h − 2tf)
#[inline]
pub fn i_beam_area(b: f64, h: f64) -> f64 {
    let tw = b * I_BEAM_WEB_RATIO;
    let tf = h * I_BEAM_FLANGE_RATIO;
    b * h - (b - tw) * (h - 2.0 * tf)
}

/// Second moment of area of the proportional I-profile
///
/// # Formula
/// I = b·h³/12 − (b − tw)(h − 2tf)³/12
#[inline]
pub fn i_beam_moment_of_inertia(b: f64, h: f64) -> f64 {
    let tw = b * I_BEAM_WEB_RATIO;
    let tf = h * I_BEAM_FLANGE_RATIO;
    b * h.powi(3) / 12.0 - (b - tw) * (h - 2.0 * tf).powi(3) / 12.0
}

// =============================================================================
// T-PROFILE (flange on top of a web)
// =============================================================================

/// Flange and web rectangles of the T-profile as (width, height, centroid y)
/// measured from the bottom of the web.
fn t_beam_parts(b: f64, h: f64) -> [(f64, f64, f64); 2] {
    let flange_thick = h * T_BEAM_FLANGE_RATIO;
    let web_width = b * T_BEAM_WEB_RATIO;
    let web_height = h * T_BEAM_WEB_HEIGHT_RATIO;
    [
        (b, flange_thick, h - flange_thick / 2.0),
        (web_width, web_height, web_height / 2.0),
    ]
}

/// Area of the proportional T-profile
///
/// # Formula
/// A = b·(0.2h) + (0.3b)·(0.8h)
#[inline]
pub fn t_beam_area(b: f64, h: f64) -> f64 {
    t_beam_parts(b, h).iter().map(|(w, t, _)| w * t).sum()
}

/// Height of the T-profile centroid above the bottom of the web
///
/// # Formula
/// yc = Σ(Aᵢ·yᵢ) / ΣAᵢ
pub fn t_beam_centroid(b: f64, h: f64) -> f64 {
    let parts = t_beam_parts(b, h);
    let area: f64 = parts.iter().map(|(w, t, _)| w * t).sum();
    if area == 0.0 {
        return 0.0;
    }
    parts.iter().map(|(w, t, y)| w * t * y).sum::<f64>() / area
}

/// Second moment of area of the T-profile about its own centroid
///
/// ```text
///     ┌─────────────┐  ← flange b × 0.2h
///     └────┐   ┌────┘
///          │   │       ← web 0.3b × 0.8h
///          │   │
///          └───┘
/// ```
///
/// # Formula (parallel-axis theorem)
/// I = Σ(wᵢ·tᵢ³/12 + Aᵢ·(yᵢ − yc)²)
pub fn t_beam_moment_of_inertia(b: f64, h: f64) -> f64 {
    let yc = t_beam_centroid(b, h);
    t_beam_parts(b, h)
        .iter()
        .map(|(w, t, y)| w * t.powi(3) / 12.0 + w * t * (y - yc).powi(2))
        .sum()
}

// =============================================================================
// GENERIC
// =============================================================================

/// Radius of gyration r = √(I/A), 0 for a degenerate area
#[inline]
pub fn radius_of_gyration(inertia: f64, area: f64) -> f64 {
    if area > 0.0 && inertia > 0.0 {
        (inertia / area).sqrt()
    } else {
        0.0
    }
}

/// Elastic section modulus S = I/c, 0 for a degenerate fiber distance
#[inline]
pub fn section_modulus(inertia: f64, c: f64) -> f64 {
    if c > 0.0 {
        inertia / c
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rectangle() {
        assert_relative_eq!(rectangular_area(0.1, 0.2), 0.02, max_relative = 1e-12);
        let expected = 0.1 * 0.008 / 12.0;
        let inertia = rectangular_moment_of_inertia(0.1, 0.2);
        assert_relative_eq!(inertia, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_circle() {
        // d = 0.2 m -> r = 0.1 m
        assert_relative_eq!(circular_area(0.2), PI * 0.01, max_relative = 1e-12);
        assert_relative_eq!(circular_moment_of_inertia(0.2), PI * 1e-4 / 4.0, max_relative = 1e-12);
    }

    #[test]
    fn test_i_beam() {
        // b = 0.2, h = 0.4: tw = 0.08, tf = 0.06
        // A = 0.08 - 0.12 * 0.28 = 0.0464
        assert_relative_eq!(i_beam_area(0.2, 0.4), 0.0464, max_relative = 1e-9);
        let expected = 0.2 * 0.4f64.powi(3) / 12.0 - 0.12 * 0.28f64.powi(3) / 12.0;
        assert_relative_eq!(i_beam_moment_of_inertia(0.2, 0.4), expected, max_relative = 1e-12);
        assert!(i_beam_moment_of_inertia(0.2, 0.4) < rectangular_moment_of_inertia(0.2, 0.4));
    }

    #[test]
    fn test_t_beam() {
        // b = 0.3, h = 0.5: flange 0.3 x 0.1 @ y = 0.45, web 0.09 x 0.4 @ y = 0.2
        let a1 = 0.03;
        let a2 = 0.036;
        assert_relative_eq!(t_beam_area(0.3, 0.5), a1 + a2, max_relative = 1e-12);

        let yc = (a1 * 0.45 + a2 * 0.2) / (a1 + a2);
        assert_relative_eq!(t_beam_centroid(0.3, 0.5), yc, max_relative = 1e-12);

        let i1 = 0.3 * 0.1f64.powi(3) / 12.0 + a1 * (0.45 - yc).powi(2);
        let i2 = 0.09 * 0.4f64.powi(3) / 12.0 + a2 * (0.2 - yc).powi(2);
        assert_relative_eq!(t_beam_moment_of_inertia(0.3, 0.5), i1 + i2, max_relative = 1e-12);
    }

    #[test]
    fn test_degenerate_guards() {
        assert_eq!(radius_of_gyration(1.0, 0.0), 0.0);
        assert_eq!(section_modulus(1.0, 0.0), 0.0);
        assert_eq!(t_beam_centroid(0.0, 0.0), 0.0);
    }
}
