//! # Shear and Moment Diagrams
//!
//! Samples V(x) and M(x) at `segments + 1` equally spaced stations over the
//! full beam length by superposition:
//!
//! 1. Each reaction acts as a step once the station reaches its support:
//!    V += R, M += R·(x − support).
//! 2. Each load subtracts its closed-form contribution (see
//!    [`crate::equations::beam`]).
//!
//! Concentrated moments only change M(x) when
//! [`MomentLoadMode::Discontinuous`] is selected; by default they act through
//! the reactions alone.

use crate::equations::{
    point_load_contribution, reaction_contribution, triangular_load_contribution,
    uniform_load_contribution,
};
use crate::loads::AppliedLoad;

use super::input::MomentLoadMode;
use super::reactions::Reactions;

/// Sampled shear and moment along the beam, in base SI units
#[derive(Debug, Clone, PartialEq)]
pub struct InternalForceField {
    /// Station positions (m)
    pub stations_m: Vec<f64>,
    /// Shear at each station (N)
    pub shear_n: Vec<f64>,
    /// Bending moment at each station (N·m)
    pub moment_nm: Vec<f64>,
    /// Largest |V| (N)
    pub max_shear_n: f64,
    /// Largest |M| (N·m)
    pub max_moment_nm: f64,
}

/// Equally spaced stations from 0 to `length` inclusive
pub fn stations(length_m: f64, segments: usize) -> Vec<f64> {
    let segments = segments.max(1);
    // scale before dividing so the last station lands exactly on L
    (0..=segments)
        .map(|i| i as f64 * length_m / segments as f64)
        .collect()
}

/// Shear and moment at a single station
pub fn shear_moment_at(
    x: f64,
    loads: &[AppliedLoad],
    reactions: &Reactions,
    mode: MomentLoadMode,
) -> (f64, f64) {
    let (mut v, mut m) = (0.0, 0.0);

    for (r, at) in [
        (reactions.r1_n, reactions.supports.a_m),
        (reactions.r2_n, reactions.supports.b_m),
    ] {
        let (dv, dm) = reaction_contribution(r, at, x);
        v += dv;
        m += dm;
    }

    for load in loads {
        let (dv, dm) = match *load {
            AppliedLoad::Point {
                force_n,
                position_m,
            } => point_load_contribution(force_n, position_m, x),
            AppliedLoad::Uniform {
                w_n_m,
                start_m,
                end_m,
            } => uniform_load_contribution(w_n_m, start_m, end_m, x),
            AppliedLoad::Triangular {
                peak_n_m,
                start_m,
                end_m,
            } => triangular_load_contribution(peak_n_m, start_m, end_m, x),
            AppliedLoad::Moment { moment_nm, position_m } => match mode {
                MomentLoadMode::ReactionsOnly => (0.0, 0.0),
                // a clockwise couple raises the sagging moment past its position
                MomentLoadMode::Discontinuous if x >= position_m => (0.0, -moment_nm),
                MomentLoadMode::Discontinuous => (0.0, 0.0),
            },
        };
        v -= dv;
        m -= dm;
    }

    (v, m)
}

/// Sample V and M over [0, length]
pub fn compute(
    loads: &[AppliedLoad],
    reactions: &Reactions,
    length_m: f64,
    segments: usize,
    mode: MomentLoadMode,
) -> InternalForceField {
    let stations_m = stations(length_m, segments);
    let mut shear_n = Vec::with_capacity(stations_m.len());
    let mut moment_nm = Vec::with_capacity(stations_m.len());
    let mut max_shear_n = 0.0f64;
    let mut max_moment_nm = 0.0f64;

    for &x in &stations_m {
        let (v, m) = shear_moment_at(x, loads, reactions, mode);
        max_shear_n = max_shear_n.max(v.abs());
        max_moment_nm = max_moment_nm.max(m.abs());
        shear_n.push(v);
        moment_nm.push(m);
    }

    InternalForceField {
        stations_m,
        shear_n,
        moment_nm,
        max_shear_n,
        max_moment_nm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::reactions::solve;
    use crate::loads::Load;
    use crate::supports::SupportPair;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 0.01; // 1% tolerance for tests

    fn field(
        loads: &[AppliedLoad],
        a: f64,
        b: f64,
        length: f64,
        mode: MomentLoadMode,
    ) -> InternalForceField {
        let reactions = solve(loads, SupportPair { a_m: a, b_m: b });
        compute(loads, &reactions, length, 200, mode)
    }

    #[test]
    fn test_station_count_and_spacing() {
        let xs = stations(10.0, 200);
        assert_eq!(xs.len(), 201);
        assert_eq!(xs[0], 0.0);
        assert_relative_eq!(xs[200], 10.0, max_relative = 1e-12);
        assert_relative_eq!(xs[1] - xs[0], 0.05, max_relative = 1e-9);
    }

    #[test]
    fn test_point_load_diagram() {
        let loads = [Load::point(10.0, 5.0).to_applied(1.0)];
        let f = field(&loads, 0.0, 10.0, 10.0, MomentLoadMode::ReactionsOnly);
        // M_max = PL/4 = 25 kN·m at midspan
        assert_relative_eq!(f.max_moment_nm, 25_000.0, max_relative = EPSILON);
        assert_relative_eq!(f.moment_nm[100], 25_000.0, max_relative = 1e-9);
        assert_relative_eq!(f.max_shear_n, 5_000.0, max_relative = 1e-9);
        // closes at both ends
        assert_relative_eq!(f.moment_nm[0], 0.0, epsilon = 1e-9);
        assert_relative_eq!(f.moment_nm[200], 0.0, epsilon = 1e-6);
        assert_relative_eq!(f.shear_n[200], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_uniform_load_diagram() {
        // 2 kN/m over 8 m: M_max = wL²/8 = 16 kN·m, V_max = wL/2 = 8 kN
        let loads = [Load::distributed(2.0, 0.0, 8.0).to_applied(1.0)];
        let f = field(&loads, 0.0, 8.0, 8.0, MomentLoadMode::ReactionsOnly);
        assert_relative_eq!(f.max_moment_nm, 16_000.0, max_relative = 1e-6);
        assert_relative_eq!(f.max_shear_n, 8_000.0, max_relative = 1e-6);
        assert_relative_eq!(f.shear_n[100], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_triangular_load_diagram() {
        // peak w at the right end, full span L: M_max = wL²/(9√3) at x = L/√3
        let w = 3.0;
        let l = 9.0;
        let loads = [Load::triangular(w, 0.0, l).to_applied(1.0)];
        let f = field(&loads, 0.0, l, l, MomentLoadMode::ReactionsOnly);
        let expected = w * 1000.0 * l * l / (9.0 * 3f64.sqrt());
        assert_relative_eq!(f.max_moment_nm, expected, max_relative = EPSILON);
        assert_relative_eq!(f.moment_nm[200], 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cantilever_style_overhang() {
        // supports at 0 and 6 on an 8 m beam, 4 kN at the tip
        let loads = [Load::point(4.0, 8.0).to_applied(1.0)];
        let f = field(&loads, 0.0, 6.0, 8.0, MomentLoadMode::ReactionsOnly);
        // hogging moment over the right support: -P·2 = -8 kN·m
        let at_support = f.stations_m.iter().position(|&x| (x - 6.0).abs() < 1e-9).unwrap();
        assert_relative_eq!(f.moment_nm[at_support], -8_000.0, max_relative = 1e-9);
        assert_relative_eq!(f.max_moment_nm, 8_000.0, max_relative = 1e-9);
        assert_relative_eq!(*f.moment_nm.last().unwrap(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_moment_load_modes() {
        let loads = [Load::moment(10.0, 5.0).to_applied(1.0)];

        // default mode: no jump, so the diagram does not close at the far end
        let plain = field(&loads, 0.0, 10.0, 10.0, MomentLoadMode::ReactionsOnly);
        assert_relative_eq!(plain.moment_nm[200], -10_000.0, max_relative = 1e-9);
        assert_relative_eq!(plain.moment_nm[99] - plain.moment_nm[100], 50.0, max_relative = 1e-6);

        let jump = field(&loads, 0.0, 10.0, 10.0, MomentLoadMode::Discontinuous);
        assert_relative_eq!(jump.moment_nm[200], 0.0, epsilon = 1e-6);
        let step = jump.moment_nm[100] - jump.moment_nm[99];
        assert_relative_eq!(step, 10_000.0 - 50.0, max_relative = 1e-6);
        // shear is identical in both modes
        assert_eq!(plain.shear_n, jump.shear_n);
    }
}
