//! # Support Reactions
//!
//! Two-support static equilibrium. The beam is always solved as a statically
//! determinate system with two vertical reactions, whatever support kinds were
//! declared:
//!
//! - ΣM about the lower support A = 0  →  R2 = (Σ Fᵢ·(xᵢ − a) + ΣC) / span
//! - ΣFy = 0                           →  R1 = ΣFᵢ − R2
//!
//! Lever arms are signed, so loads on an overhang left of A reduce R2.

use crate::loads::AppliedLoad;
use crate::materials::Material;
use crate::section::SectionProperties;
use crate::supports::SupportPair;
use crate::units::GRAVITY;

use super::input::AnalysisInput;

/// Support reactions in newtons, positive upward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reactions {
    /// Reaction at the lower support (N)
    pub r1_n: f64,
    /// Reaction at the upper support (N)
    pub r2_n: f64,
    /// Supports the reactions act at
    pub supports: SupportPair,
}

/// Self-weight as a line load (N/m)
pub fn self_weight_intensity(material: &Material, section: &SectionProperties) -> f64 {
    material.density_kg_m3 * section.area_m2 * GRAVITY
}

/// Build the full set of factored loads in solver units.
///
/// User loads are scaled by the load factor. Self-weight, when requested, is
/// appended unfactored as a uniform load spanning the two supports.
pub fn factored_loads(input: &AnalysisInput, section: &SectionProperties) -> Vec<AppliedLoad> {
    let mut loads: Vec<AppliedLoad> = input
        .loads
        .iter()
        .map(|load| load.to_applied(input.load_factor))
        .collect();

    if input.include_self_weight {
        let pair = input.support_pair();
        loads.push(AppliedLoad::Uniform {
            w_n_m: self_weight_intensity(input.material_record(), section),
            start_m: pair.a_m,
            end_m: pair.b_m,
        });
    }

    loads
}

/// Total downward vertical load (N)
pub fn total_vertical_load(loads: &[AppliedLoad]) -> f64 {
    loads.iter().filter_map(AppliedLoad::resultant).map(|(f, _)| f).sum()
}

/// Moment of all loads about a point, clockwise positive (N·m)
pub fn moment_about(loads: &[AppliedLoad], point_m: f64) -> f64 {
    loads
        .iter()
        .map(|load| match *load {
            AppliedLoad::Moment { moment_nm, .. } => moment_nm,
            _ => load
                .resultant()
                .map(|(force, centroid)| force * (centroid - point_m))
                .unwrap_or(0.0),
        })
        .sum()
}

/// Solve the two vertical reactions
pub fn solve(loads: &[AppliedLoad], supports: SupportPair) -> Reactions {
    let r2 = moment_about(loads, supports.a_m) / supports.span_m();
    let r1 = total_vertical_load(loads) - r2;
    Reactions {
        r1_n: r1,
        r2_n: r2,
        supports,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loads::Load;
    use crate::materials::MaterialKey;
    use crate::section::{CrossSectionSpec, SectionShape};
    use crate::supports::Support;
    use approx::assert_relative_eq;

    fn pair(a: f64, b: f64) -> SupportPair {
        SupportPair { a_m: a, b_m: b }
    }

    #[test]
    fn test_midspan_point_load() {
        let loads = [Load::point(10.0, 5.0).to_applied(1.0)];
        let r = solve(&loads, pair(0.0, 10.0));
        assert_relative_eq!(r.r1_n, 5000.0, max_relative = 1e-12);
        assert_relative_eq!(r.r2_n, 5000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_asymmetric_point_load() {
        // R1 = P(L-a)/L = 7 kN, R2 = Pa/L = 3 kN
        let loads = [Load::point(10.0, 3.0).to_applied(1.0)];
        let r = solve(&loads, pair(0.0, 10.0));
        assert_relative_eq!(r.r1_n, 7000.0, max_relative = 1e-12);
        assert_relative_eq!(r.r2_n, 3000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_triangular_load() {
        // 6 kN/m peak over [0, 6] on a 6 m span: W = 18 kN at x = 4
        let loads = [Load::triangular(6.0, 0.0, 6.0).to_applied(1.0)];
        let r = solve(&loads, pair(0.0, 6.0));
        assert_relative_eq!(r.r2_n, 12_000.0, max_relative = 1e-12);
        assert_relative_eq!(r.r1_n, 6_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_couple_only() {
        let loads = [Load::moment(4.0, 3.0).to_applied(1.0)];
        let r = solve(&loads, pair(0.0, 8.0));
        assert_relative_eq!(r.r2_n, 500.0, max_relative = 1e-12);
        assert_relative_eq!(r.r1_n, -500.0, max_relative = 1e-12);
    }

    #[test]
    fn test_overhang_moment_balance() {
        // supports at 2 and 8, load on the left overhang
        let loads = [
            Load::point(6.0, 0.5).to_applied(1.0),
            Load::distributed(2.0, 3.0, 9.0).to_applied(1.0),
        ];
        let supports = pair(2.0, 8.0);
        let r = solve(&loads, supports);
        assert_relative_eq!(r.r1_n + r.r2_n, total_vertical_load(&loads), max_relative = 1e-12);
        // ΣM about B including R1 is zero
        let about_b = moment_about(&loads, supports.b_m) + r.r1_n * (supports.b_m - supports.a_m);
        assert_relative_eq!(about_b, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_factored_loads_and_self_weight() {
        let mut input = AnalysisInput::new(
            10.0,
            MaterialKey::Steel,
            CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2),
            vec![Support::roller(9.0), Support::pinned(1.0)],
        )
        .with_load(Load::point(10.0, 5.0))
        .with_load_factor(1.5);
        let props = input.section_properties();

        let loads = factored_loads(&input, &props);
        assert_eq!(loads.len(), 1);
        assert_relative_eq!(total_vertical_load(&loads), 15_000.0, max_relative = 1e-12);

        input.include_self_weight = true;
        let loads = factored_loads(&input, &props);
        let w = 7850.0 * 0.02 * 9.81;
        match loads[1] {
            AppliedLoad::Uniform { w_n_m, start_m, end_m } => {
                assert_relative_eq!(w_n_m, w, max_relative = 1e-12);
                assert_eq!((start_m, end_m), (1.0, 9.0));
            }
            other => panic!("unexpected {:?}", other),
        }
        // self-weight is not scaled by the load factor
        assert_relative_eq!(total_vertical_load(&loads), 15_000.0 + w * 8.0, max_relative = 1e-12);
    }
}
