//! # Beam Analysis
//!
//! The full pipeline for one request, strictly leaf-first:
//!
//! ```text
//! section ─► reactions ─► V(x), M(x) ─┬─► d(x) ─────────┐
//!                                     └─► σ(x) ─► τ, σvm ├─► safety summary
//!                      buckling (K·L), LTB (K·span) ─────┘
//! ```
//!
//! [`analyze`] is a pure function: the request is validated first, nothing is
//! cached, and the returned [`AnalysisResult`] is owned by the caller.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::calculations::{analyze, AnalysisInput, AnalysisSettings};
//! use beam_core::loads::Load;
//! use beam_core::materials::MaterialKey;
//! use beam_core::section::{CrossSectionSpec, SectionShape};
//!
//! let section = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2);
//! let input = AnalysisInput::simply_supported(10.0, MaterialKey::Steel, section)
//!     .with_load(Load::point(10.0, 5.0));
//!
//! let result = analyze(&input, &AnalysisSettings::default()).unwrap();
//! assert!((result.reactions.r1_kn - 5.0).abs() < 1e-9);
//! assert!((result.max_moment_knm - 25.0).abs() < 1e-6);
//! assert_eq!(result.diagrams.len(), 201);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::CalcResult;
use crate::units::{kn, knm, mm, mpa};

use super::buckling::{self, BucklingResult};
use super::deflection::{self, DeflectionModel, ShapeFunctionDeflection};
use super::input::{AnalysisInput, AnalysisSettings, RECOMMENDED_MIN_FACTOR};
use super::internal_forces;
use super::ltb::{self, LtbResult};
use super::reactions::{factored_loads, solve};
use super::safety::{self_weight_kn, DeflectionCheck, SafetySummary};
use super::stress::{flexural_field, CombinedStress};

/// Support reactions in kN, positive upward
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactionSummary {
    /// Reaction at the lower support
    pub r1_kn: f64,
    /// Reaction at the upper support
    pub r2_kn: f64,
    /// Position of the lower support (m)
    pub r1_position_m: f64,
    /// Position of the upper support (m)
    pub r2_position_m: f64,
}

/// Section properties in reporting units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub area_cm2: f64,
    pub inertia_cm4: f64,
}

/// One station of the aligned diagram series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramRow {
    pub x_m: f64,
    pub shear_kn: f64,
    pub moment_knm: f64,
    pub deflection_mm: f64,
    pub stress_mpa: f64,
}

/// Sampled diagrams, all series aligned by station index
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagramSeries {
    /// Station positions (m)
    pub x_m: Vec<f64>,
    /// Shear V (kN)
    pub shear_kn: Vec<f64>,
    /// Bending moment M (kN·m)
    pub moment_knm: Vec<f64>,
    /// Deflection d (mm, downward negative)
    pub deflection_mm: Vec<f64>,
    /// Flexural stress σ (MPa)
    pub stress_mpa: Vec<f64>,
}

impl DiagramSeries {
    /// Number of stations
    pub fn len(&self) -> usize {
        self.x_m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x_m.is_empty()
    }

    /// Per-station records, in station order.
    ///
    /// Stops at the shortest series when a deserialized result has series of
    /// unequal length.
    pub fn rows(&self) -> impl Iterator<Item = DiagramRow> + '_ {
        self.x_m
            .iter()
            .zip(&self.shear_kn)
            .zip(&self.moment_knm)
            .zip(&self.deflection_mm)
            .zip(&self.stress_mpa)
            .map(|((((&x_m, &shear_kn), &moment_knm), &deflection_mm), &stress_mpa)| DiagramRow {
                x_m,
                shear_kn,
                moment_knm,
                deflection_mm,
                stress_mpa,
            })
    }
}

/// Complete result of one beam analysis.
///
/// ## JSON Example (abridged)
///
/// ```json
/// {
///   "reactions": { "r1_kn": 5.0, "r2_kn": 5.0, "r1_position_m": 0.0, "r2_position_m": 10.0 },
///   "applied_load_factor": 1.0,
///   "include_self_weight": false,
///   "section": { "area_cm2": 200.0, "inertia_cm4": 6666.67 },
///   "self_weight_kn": 15.4,
///   "max_shear_kn": 5.0,
///   "max_moment_knm": 25.0,
///   "max_deflection_mm": 35.2,
///   "max_stress_mpa": 37.5,
///   "combined_stress": { "shear_stress_mpa": 0.375, "von_mises_mpa": 37.5 },
///   "safety": {
///     "yield_safety_factor": 6.67,
///     "ultimate_safety_factor": 10.67,
///     "utilization_pct": 15.0
///   },
///   "deflection_check": { "limit_mm": 27.8, "ratio": 1.27, "compliant": false },
///   "buckling": { "critical_load_kn": 1315.9, "slenderness_ratio": 173.2, "risk": "medium" },
///   "ltb": { "critical_moment_knm": 1315.9, "safety_factor": 52.6 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub reactions: ReactionSummary,

    /// Load factor the user loads were scaled by
    pub applied_load_factor: f64,

    /// Whether self-weight was part of the load set
    pub include_self_weight: bool,

    pub section: SectionSummary,

    /// Weight of the full beam length (kN), reported whether or not it was applied
    pub self_weight_kn: f64,

    pub diagrams: DiagramSeries,

    /// Largest |V| (kN)
    pub max_shear_kn: f64,
    /// Largest |M| (kN·m)
    pub max_moment_knm: f64,
    /// Largest |d| (mm)
    pub max_deflection_mm: f64,
    /// Largest σ (MPa)
    pub max_stress_mpa: f64,

    /// Scalar shear / von Mises summary from the maxima
    pub combined_stress: CombinedStress,

    pub safety: SafetySummary,

    pub deflection_check: DeflectionCheck,

    pub buckling: BucklingResult,

    pub ltb: LtbResult,

    /// Name of the deflection model used
    #[serde(default)]
    pub deflection_model: String,
}

/// Analyze a beam with the default shape-function deflection model.
///
/// # Returns
///
/// * `Ok(AnalysisResult)` - Reactions, diagrams and derived checks
/// * `Err(CalcError)` - The first validation failure of the request or the
///   settings; nothing is computed
pub fn analyze(input: &AnalysisInput, settings: &AnalysisSettings) -> CalcResult<AnalysisResult> {
    analyze_with_model(input, settings, &ShapeFunctionDeflection)
}

/// Analyze a beam with a caller-supplied deflection model
pub fn analyze_with_model(
    input: &AnalysisInput,
    settings: &AnalysisSettings,
    model: &dyn DeflectionModel,
) -> CalcResult<AnalysisResult> {
    input.validate()?;
    settings.validate()?;

    if input.load_factor < RECOMMENDED_MIN_FACTOR {
        warn!(
            "load factor {} is below the recommended minimum {}",
            input.load_factor, RECOMMENDED_MIN_FACTOR
        );
    }
    if input.effective_length_factor < RECOMMENDED_MIN_FACTOR {
        warn!(
            "effective-length factor {} is below the recommended minimum {}",
            input.effective_length_factor, RECOMMENDED_MIN_FACTOR
        );
    }

    let length = input.beam_length_m;
    let k = input.effective_length_factor;
    let material = input.material_record();
    let section = input.section_properties();
    let supports = input.support_pair();

    // === Statics ===
    let loads = factored_loads(input, &section);
    let reactions = solve(&loads, supports);
    debug!(
        "reactions: R1 = {:.3} N at {} m, R2 = {:.3} N at {} m ({} loads)",
        reactions.r1_n,
        supports.a_m,
        reactions.r2_n,
        supports.b_m,
        loads.len()
    );

    // === Diagrams ===
    let forces = internal_forces::compute(
        &loads,
        &reactions,
        length,
        settings.effective_segments(),
        settings.moment_load_mode,
    );
    let ei = material.e_pa * section.inertia_m4;
    let deflections = deflection::compute(model, &forces.stations_m, &forces.moment_nm, ei, length);
    let stresses = flexural_field(&forces.moment_nm, &section);

    // === Derived checks ===
    let combined_stress =
        CombinedStress::from_maxima(forces.max_shear_n, stresses.max_pa, &section);
    let safety = SafetySummary::evaluate(material, stresses.max_pa);
    let deflection_check = DeflectionCheck::evaluate(
        deflections.max_abs_m,
        length,
        settings.deflection_limit_ratio,
    );
    let buckling = buckling::evaluate(material, &section, length, k);
    let ltb = ltb::evaluate(material, &section, supports.span_m(), k, forces.max_moment_nm);

    debug!(
        "maxima: V = {:.3} N, M = {:.3} N·m, d = {:.6} m, σ = {:.0} Pa ({} stations, {} model)",
        forces.max_shear_n,
        forces.max_moment_nm,
        deflections.max_abs_m,
        stresses.max_pa,
        forces.stations_m.len(),
        model.name()
    );

    let diagrams = DiagramSeries {
        shear_kn: forces.shear_n.iter().map(|&v| kn(v)).collect(),
        moment_knm: forces.moment_nm.iter().map(|&m| knm(m)).collect(),
        deflection_mm: deflections.values_m.iter().map(|&d| mm(d)).collect(),
        stress_mpa: stresses.values_pa.iter().map(|&s| mpa(s)).collect(),
        x_m: forces.stations_m,
    };

    Ok(AnalysisResult {
        reactions: ReactionSummary {
            r1_kn: kn(reactions.r1_n),
            r2_kn: kn(reactions.r2_n),
            r1_position_m: supports.a_m,
            r2_position_m: supports.b_m,
        },
        applied_load_factor: input.load_factor,
        include_self_weight: input.include_self_weight,
        section: SectionSummary {
            area_cm2: section.area_cm2(),
            inertia_cm4: section.inertia_cm4(),
        },
        self_weight_kn: self_weight_kn(material, &section, length),
        diagrams,
        max_shear_kn: kn(forces.max_shear_n),
        max_moment_knm: knm(forces.max_moment_nm),
        max_deflection_mm: mm(deflections.max_abs_m),
        max_stress_mpa: mpa(stresses.max_pa),
        combined_stress,
        safety,
        deflection_check,
        buckling,
        ltb,
        deflection_model: model.name().to_string(),
    })
}
