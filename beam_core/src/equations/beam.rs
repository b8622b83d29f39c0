//! # Beam Load Formulas
//!
//! Closed-form resultants and internal-force contributions for each load
//! family acting on a straight beam. Contributions are what a single load
//! subtracts from the running shear and moment at a station `x`, measured from
//! the left end of the beam. Each span-load formula has three regimes: before
//! the load (nothing), inside the loaded length (growing), and past the loaded
//! length (full resultant acting at its centroid).
//!
//! ## Notation
//!
//! - `F` = Point force (positive downward)
//! - `w` = Uniform intensity, or peak intensity of a triangular load
//! - `s`, `e` = Start and end of a span load
//! - `x` = Station along the beam
//! - `V`, `M` = Shear and moment contributions
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom fiber (sagging)
//! - Reactions: Positive upward

// =============================================================================
// RESULTANTS
// =============================================================================

/// Resultant of a uniform load w over [s, e]
///
/// ```text
///      w w w w w
///    ↓ ↓ ↓ ↓ ↓ ↓
///    ├─────┼─────┤
///    s     c     e
/// ```
///
/// # Formulas
/// - W = w·(e − s)
/// - c = s + (e − s)/2
///
/// # Returns
/// (total force, centroid position)
#[inline]
pub fn uniform_resultant(w: f64, s: f64, e: f64) -> (f64, f64) {
    let length = e - s;
    (w * length, s + length / 2.0)
}

/// Resultant of a triangular load rising from 0 at s to w at e
///
/// ```text
///                ↓ w
///           ↓ ↓ ↓
///      ↓ ↓ ↓ ↓ ↓
///    ├───────┼───┤
///    s       c   e
/// ```
///
/// # Formulas
/// - W = w·(e − s)/2
/// - c = s + 2(e − s)/3
#[inline]
pub fn triangular_resultant(w: f64, s: f64, e: f64) -> (f64, f64) {
    let length = e - s;
    (w * length / 2.0, s + 2.0 * length / 3.0)
}

// =============================================================================
// INTERNAL FORCE CONTRIBUTIONS
// =============================================================================

/// Shear and moment removed by a point force F at position a
///
/// # Formulas
/// - x < a: (0, 0)
/// - x ≥ a: (F, F·(x − a))
#[inline]
pub fn point_load_contribution(f: f64, a: f64, x: f64) -> (f64, f64) {
    if x >= a {
        (f, f * (x - a))
    } else {
        (0.0, 0.0)
    }
}

/// Shear and moment removed by a uniform load w over [s, e]
///
/// # Formulas
/// - x < s: (0, 0)
/// - s ≤ x ≤ e: (w·(x − s), w·(x − s)²/2)
/// - x > e: (W, W·(x − c)) with W, c from [`uniform_resultant`]
#[inline]
pub fn uniform_load_contribution(w: f64, s: f64, e: f64, x: f64) -> (f64, f64) {
    if x < s {
        (0.0, 0.0)
    } else if x <= e {
        let u = x - s;
        (w * u, w * u * u / 2.0)
    } else {
        let (total, centroid) = uniform_resultant(w, s, e);
        (total, total * (x - centroid))
    }
}

/// Shear and moment removed by a triangular load (0 at s, w at e)
///
/// # Formulas
/// - x < s: (0, 0)
/// - s ≤ x ≤ e: (w·(x − s)²/(2ℓ), w·(x − s)³/(6ℓ)) with ℓ = e − s
/// - x > e: (W, W·(x − c)) with W, c from [`triangular_resultant`]
#[inline]
pub fn triangular_load_contribution(w: f64, s: f64, e: f64, x: f64) -> (f64, f64) {
    let length = e - s;
    if x < s || length <= 0.0 {
        (0.0, 0.0)
    } else if x <= e {
        let u = x - s;
        (w * u * u / (2.0 * length), w * u.powi(3) / (6.0 * length))
    } else {
        let (total, centroid) = triangular_resultant(w, s, e);
        (total, total * (x - centroid))
    }
}

/// Shear and moment added by an upward reaction R at support position a
///
/// # Formulas
/// - x < a: (0, 0)
/// - x ≥ a: (R, R·(x − a))
#[inline]
pub fn reaction_contribution(r: f64, a: f64, x: f64) -> (f64, f64) {
    point_load_contribution(r, a, x)
}

// =============================================================================
// DEFLECTION AND STRESS
// =============================================================================

/// Approximate deflection from the local moment and a simply-supported
/// shape function.
///
/// # Formula
/// d(x) = −(M·x²)/(2EI) · (1 − (x/L)²)
///
/// This is not a double integration of curvature. It vanishes at x = 0 and
/// x = L regardless of the actual support layout.
///
/// Returns 0 when EI or L is not positive.
#[inline]
pub fn shape_function_deflection(moment: f64, x: f64, ei: f64, length: f64) -> f64 {
    if ei <= 0.0 || length <= 0.0 {
        return 0.0;
    }
    -(moment * x * x) / (2.0 * ei) * (1.0 - (x / length).powi(2))
}

/// Flexural stress magnitude σ = |M·c/I|, 0 for a degenerate inertia
#[inline]
pub fn flexural_stress(moment: f64, c: f64, inertia: f64) -> f64 {
    if inertia > 0.0 {
        (moment * c / inertia).abs()
    } else {
        0.0
    }
}

/// Peak shear stress using the parabolic (rectangular-section) factor
///
/// # Formula
/// τ = 1.5·V/A
#[inline]
pub fn peak_shear_stress(shear: f64, area: f64) -> f64 {
    if area > 0.0 {
        1.5 * shear / area
    } else {
        0.0
    }
}

/// Von Mises equivalent stress for a normal/shear pair
///
/// # Formula
/// σ_vm = √(σ² + 3τ²)
#[inline]
pub fn von_mises(sigma: f64, tau: f64) -> f64 {
    (sigma * sigma + 3.0 * tau * tau).sqrt()
}
