//! # Analysis Request and Settings
//!
//! [`AnalysisInput`] is the complete description of one beam problem.
//! [`AnalysisSettings`] holds the engine knobs that are not part of the
//! physical problem (sampling resolution, serviceability limit, moment-load
//! modeling).
//!
//! ## JSON Example
//!
//! ```json
//! {
//!   "label": "B-1",
//!   "beam_length_m": 10.0,
//!   "material": "steel",
//!   "section": { "shape": "rectangular", "width_m": 0.1, "height_m": 0.2 },
//!   "supports": [
//!     { "id": "1", "type": "pinned", "position_m": 0.0 },
//!     { "id": "2", "type": "roller", "position_m": 10.0 }
//!   ],
//!   "loads": [
//!     { "id": "P1", "type": "point", "position_m": 5.0, "magnitude": 10.0 }
//!   ],
//!   "include_self_weight": false,
//!   "load_factor": 1.0,
//!   "effective_length_factor": 1.0
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::loads::Load;
use crate::materials::{Material, MaterialKey};
use crate::section::{CrossSectionSpec, SectionProperties};
use crate::supports::{Support, SupportPair};

/// Lowest load factor / effective-length factor considered good practice.
/// Smaller values are accepted but logged.
pub const RECOMMENDED_MIN_FACTOR: f64 = 0.5;

fn default_factor() -> f64 {
    1.0
}

/// Input parameters for a two-support beam analysis.
///
/// All positions are measured in meters from the left end of the beam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// User label (e.g., "B-1")
    #[serde(default)]
    pub label: String,

    /// Overall beam length L (m)
    pub beam_length_m: f64,

    /// Catalog key of the beam material
    pub material: MaterialKey,

    /// Cross-section shape and dimensions
    pub section: CrossSectionSpec,

    /// Applied loads (magnitudes unfactored)
    #[serde(default)]
    pub loads: Vec<Load>,

    /// Exactly two supports
    pub supports: Vec<Support>,

    /// Add the beam's own weight as a distributed load between the supports
    #[serde(default)]
    pub include_self_weight: bool,

    /// Multiplier applied to every user load (not to self-weight)
    #[serde(default = "default_factor")]
    pub load_factor: f64,

    /// Effective-length factor K for buckling and LTB
    #[serde(default = "default_factor")]
    pub effective_length_factor: f64,
}

impl AnalysisInput {
    /// Create an unloaded beam on the given supports with unit factors
    pub fn new(
        beam_length_m: f64,
        material: MaterialKey,
        section: CrossSectionSpec,
        supports: Vec<Support>,
    ) -> Self {
        AnalysisInput {
            label: String::new(),
            beam_length_m,
            material,
            section,
            loads: Vec::new(),
            supports,
            include_self_weight: false,
            load_factor: 1.0,
            effective_length_factor: 1.0,
        }
    }

    /// Pinned support at 0 and roller at L
    pub fn simply_supported(
        beam_length_m: f64,
        material: MaterialKey,
        section: CrossSectionSpec,
    ) -> Self {
        Self::new(
            beam_length_m,
            material,
            section,
            vec![Support::pinned(0.0), Support::roller(beam_length_m)],
        )
    }

    /// Add a load (builder pattern)
    pub fn with_load(mut self, load: Load) -> Self {
        self.loads.push(load);
        self
    }

    /// Enable or disable self-weight (builder pattern)
    pub fn with_self_weight(mut self, include: bool) -> Self {
        self.include_self_weight = include;
        self
    }

    /// Set the load factor (builder pattern)
    pub fn with_load_factor(mut self, factor: f64) -> Self {
        self.load_factor = factor;
        self
    }

    /// Set the effective-length factor K (builder pattern)
    pub fn with_effective_length_factor(mut self, k: f64) -> Self {
        self.effective_length_factor = k;
        self
    }

    /// Set the label (builder pattern)
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Catalog record of the beam material
    pub fn material_record(&self) -> &'static Material {
        Material::lookup(self.material)
    }

    /// Derived section properties
    pub fn section_properties(&self) -> SectionProperties {
        self.section.properties()
    }

    /// The two supports ordered by position
    pub fn support_pair(&self) -> SupportPair {
        SupportPair::from_supports(&self.supports, self.beam_length_m)
    }
}

/// How concentrated moment loads enter the shear/moment diagrams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MomentLoadMode {
    /// Couples only enter the reaction balance; M(x) has no jump at the
    /// couple.
    #[default]
    ReactionsOnly,
    /// Couples also add a +M0 step to M(x) for x at or past their position,
    /// which closes the moment diagram to zero at a free end.
    Discontinuous,
}

/// Default number of sampling segments along the beam
pub const DEFAULT_SEGMENTS: usize = 200;

/// Default serviceability limit divisor (L/360)
pub const DEFAULT_DEFLECTION_LIMIT_RATIO: f64 = 360.0;

fn default_segments() -> usize {
    DEFAULT_SEGMENTS
}

fn default_deflection_limit_ratio() -> f64 {
    DEFAULT_DEFLECTION_LIMIT_RATIO
}

/// Engine settings that do not describe the physical problem.
///
/// ## JSON Example
///
/// ```json
/// { "segments": 400, "deflection_limit_ratio": 240, "moment_load_mode": "discontinuous" }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Number of equal segments; the diagrams have `segments + 1` stations
    #[serde(default = "default_segments")]
    pub segments: usize,

    /// Deflection limit is L divided by this value
    #[serde(default = "default_deflection_limit_ratio")]
    pub deflection_limit_ratio: f64,

    /// Treatment of concentrated moment loads in the diagrams
    #[serde(default)]
    pub moment_load_mode: MomentLoadMode,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        AnalysisSettings {
            segments: DEFAULT_SEGMENTS,
            deflection_limit_ratio: DEFAULT_DEFLECTION_LIMIT_RATIO,
            moment_load_mode: MomentLoadMode::ReactionsOnly,
        }
    }
}

impl AnalysisSettings {
    /// Set the number of segments (builder pattern, minimum 1)
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments.max(1);
        self
    }

    /// Set the moment-load mode (builder pattern)
    pub fn with_moment_load_mode(mut self, mode: MomentLoadMode) -> Self {
        self.moment_load_mode = mode;
        self
    }

    /// Set the deflection limit divisor (builder pattern)
    pub fn with_deflection_limit_ratio(mut self, ratio: f64) -> Self {
        self.deflection_limit_ratio = ratio;
        self
    }

    /// Segment count actually used for sampling
    pub fn effective_segments(&self) -> usize {
        self.segments.max(1)
    }

    /// Reject a deflection limit divisor that is not a finite number > 0.
    ///
    /// A zero, negative or NaN divisor would collapse the limit to zero and
    /// report every beam as compliant.
    pub fn validate(&self) -> CalcResult<()> {
        let ratio = self.deflection_limit_ratio;
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(CalcError::invalid_input(
                "deflection_limit_ratio",
                ratio.to_string(),
                "Deflection limit ratio must be a finite number greater than zero",
            ));
        }
        Ok(())
    }
}
