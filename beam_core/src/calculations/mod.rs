//! # Structural Calculations
//!
//! The beam-analysis engine. Every calculation follows the same pattern:
//!
//! - [`AnalysisInput`] - Request (JSON-serializable), with `validate()`
//! - [`AnalysisResult`] - Result bundle (JSON-serializable)
//! - [`analyze`] - Pure function from request to result
//!
//! ## Pipeline
//!
//! - [`validation`] - Rejects inconsistent requests
//! - [`reactions`] - Two-support equilibrium, load factoring, self-weight
//! - [`internal_forces`] - Sampled shear and moment diagrams
//! - [`deflection`] - Pluggable deflection models
//! - [`stress`] - Flexural stress series and combined-stress summary
//! - [`buckling`] / [`ltb`] - Stability checks
//! - [`safety`] - Safety factors and serviceability
//! - [`analysis`] - Orchestration and the result bundle
//! - [`sweep`] - Parallel parameter sweeps

pub mod analysis;
pub mod buckling;
pub mod deflection;
pub mod input;
pub mod internal_forces;
pub mod ltb;
pub mod reactions;
pub mod safety;
pub mod stress;
pub mod sweep;
pub mod validation;

// Re-export commonly used types
pub use analysis::{
    analyze, analyze_with_model, AnalysisResult, DiagramRow, DiagramSeries, ReactionSummary,
    SectionSummary,
};
pub use buckling::{BucklingResult, BucklingRisk};
pub use deflection::{DeflectionModel, ShapeFunctionDeflection};
pub use input::{AnalysisInput, AnalysisSettings, MomentLoadMode};
pub use ltb::LtbResult;
pub use safety::{DeflectionCheck, SafetySummary};
pub use stress::CombinedStress;
pub use sweep::{effective_length_sweep, load_factor_sweep, SweepPoint};
