//! # beam_core - Static Beam Analysis Engine
//!
//! `beam_core` analyzes a prismatic beam on two supports under any mix of
//! point, distributed, triangular and concentrated-moment loads. It computes
//! support reactions, sampled shear/moment/deflection/stress diagrams and the
//! derived checks (safety factors, serviceability, Euler buckling,
//! lateral-torsional buckling). All inputs and outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Data-Driven**: Materials and section shapes are lookup tables
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::{analyze, AnalysisInput, AnalysisSettings};
//! use beam_core::loads::Load;
//! use beam_core::materials::MaterialKey;
//! use beam_core::section::{CrossSectionSpec, SectionShape};
//!
//! let section = CrossSectionSpec::new(SectionShape::IBeam, 0.2, 0.4);
//! let input = AnalysisInput::simply_supported(8.0, MaterialKey::Steel, section)
//!     .with_load(Load::point(20.0, 3.0))
//!     .with_load(Load::distributed(5.0, 0.0, 8.0))
//!     .with_self_weight(true);
//!
//! let result = analyze(&input, &AnalysisSettings::default()).unwrap();
//! println!("R1 = {:.2} kN, Mmax = {:.2} kN·m", result.reactions.r1_kn, result.max_moment_knm);
//!
//! // Serialize to JSON for storage or transmission
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! assert!(json.contains("max_moment_knm"));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The analysis pipeline and its result bundle
//! - [`equations`] - Closed-form section, load and stability formulas
//! - [`loads`] / [`supports`] - Request building blocks
//! - [`materials`] / [`section`] - Material catalog and shape table
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`export`] - CSV and JSON export documents
//! - [`file_io`] - Atomic file saves and request loading

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod loads;
pub mod materials;
pub mod section;
pub mod supports;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, AnalysisInput, AnalysisResult, AnalysisSettings};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_input, save_json};
