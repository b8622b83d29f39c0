//! # Structural Mechanics Equations
//!
//! Fundamental formulas used by the analysis pipeline, kept in one place so
//! they can be checked against textbook references independently of the
//! sampling and aggregation logic.
//!
//! ## Modules
//!
//! - [`section`] - Cross-section properties (A, I, r, S)
//! - [`beam`] - Load resultants, internal-force contributions, deflection and stress
//! - [`stability`] - Euler buckling and lateral-torsional buckling
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Negative downward (as returned by the shape function)
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition
//! - Timoshenko & Gere, Theory of Elastic Stability

pub mod beam;
pub mod section;
pub mod stability;

pub use beam::{
    flexural_stress,
    peak_shear_stress,
    point_load_contribution,
    reaction_contribution,
    shape_function_deflection,
    triangular_load_contribution,
    triangular_resultant,
    uniform_load_contribution,
    uniform_resultant,
    von_mises,
};

pub use section::{
    circular_area,
    circular_moment_of_inertia,
    i_beam_area,
    i_beam_moment_of_inertia,
    radius_of_gyration,
    rectangular_area,
    rectangular_moment_of_inertia,
    section_modulus,
    t_beam_area,
    t_beam_centroid,
    t_beam_moment_of_inertia,
};

pub use stability::{euler_critical_load, ltb_critical_moment, slenderness_ratio};
