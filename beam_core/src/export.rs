//! # Export
//!
//! Converts a finished analysis into interchange formats. Nothing here feeds
//! back into the engine; it only reads the request and its result.
//!
//! - [`diagram_csv`] - Aligned diagram table as CSV text
//! - [`ExportBundle`] - Self-describing JSON document (project info, beam,
//!   supports, loads, factors and the full result)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::calculations::{AnalysisInput, AnalysisResult};
use crate::errors::CalcResult;
use crate::loads::Load;
use crate::section::SectionShape;
use crate::supports::Support;

/// Header row of the diagram CSV
pub const CSV_HEADER: [&str; 5] = ["x (m)", "V (kN)", "M (kN-m)", "delta (mm)", "sigma (MPa)"];

/// Quote a CSV field, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn csv_line<I, S>(fields: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    fields
        .into_iter()
        .map(|f| quote(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Diagram series as CSV: one header row, then one row per station.
///
/// Every field is double-quoted and rows are joined with `\n`.
///
/// # Example
///
/// ```text
/// "x (m)","V (kN)","M (kN-m)","delta (mm)","sigma (MPa)"
/// "0","5","0","0","0"
/// "0.05","5","0.25","-0.0009...","0.375"
/// ```
pub fn diagram_csv(result: &AnalysisResult) -> String {
    let mut lines = Vec::with_capacity(result.diagrams.len() + 1);
    lines.push(csv_line(CSV_HEADER));
    for row in result.diagrams.rows() {
        lines.push(csv_line([
            row.x_m.to_string(),
            row.shear_kn.to_string(),
            row.moment_knm.to_string(),
            row.deflection_mm.to_string(),
            row.stress_mpa.to_string(),
        ]));
    }
    lines.join("\n")
}

/// Who ran the analysis and when
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInfo {
    pub date: DateTime<Utc>,
    pub analyst: String,
    pub notes: String,
}

/// Nominal section dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width_m: f64,
    pub height_m: f64,
}

/// Section properties carried in the beam summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BeamProperties {
    pub inertia_cm4: f64,
    pub area_cm2: f64,
    /// Weight of the full beam (kN)
    pub weight_kn: f64,
}

/// Beam description for the export document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSummary {
    pub length_m: f64,
    /// Catalog name of the material (e.g., "Structural Steel A36")
    pub material: String,
    pub cross_section: SectionShape,
    pub dimensions: Dimensions,
    pub properties: BeamProperties,
}

/// Global factors applied to the request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportMeta {
    pub include_self_weight: bool,
    pub load_factor: f64,
    pub effective_length_factor: f64,
}

/// Complete, self-describing analysis export.
///
/// ## Example
///
/// ```rust
/// use beam_core::calculations::{analyze, AnalysisInput, AnalysisSettings};
/// use beam_core::export::ExportBundle;
/// use beam_core::loads::Load;
/// use beam_core::materials::MaterialKey;
/// use beam_core::section::{CrossSectionSpec, SectionShape};
///
/// let section = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2);
/// let input = AnalysisInput::simply_supported(10.0, MaterialKey::Steel, section)
///     .with_load(Load::point(10.0, 5.0));
/// let result = analyze(&input, &AnalysisSettings::default()).unwrap();
///
/// let bundle = ExportBundle::new(&input, &result, "J. Doe", "Midspan check");
/// let json = bundle.to_json_pretty().unwrap();
/// assert!(json.contains("\"analyst\": \"J. Doe\""));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportBundle {
    pub project_info: ProjectInfo,
    pub beam: BeamSummary,
    pub supports: Vec<Support>,
    pub loads: Vec<Load>,
    pub meta: ExportMeta,
    pub results: AnalysisResult,
}

impl ExportBundle {
    /// Assemble an export stamped with the current UTC time
    pub fn new(
        input: &AnalysisInput,
        result: &AnalysisResult,
        analyst: impl Into<String>,
        notes: impl Into<String>,
    ) -> Self {
        ExportBundle {
            project_info: ProjectInfo {
                date: Utc::now(),
                analyst: analyst.into(),
                notes: notes.into(),
            },
            beam: BeamSummary {
                length_m: input.beam_length_m,
                material: input.material_record().name.clone(),
                cross_section: input.section.shape,
                dimensions: Dimensions {
                    width_m: input.section.width_m,
                    height_m: input.section.height_m,
                },
                properties: BeamProperties {
                    inertia_cm4: result.section.inertia_cm4,
                    area_cm2: result.section.area_cm2,
                    weight_kn: result.self_weight_kn,
                },
            },
            supports: input.supports.clone(),
            loads: input.loads.clone(),
            meta: ExportMeta {
                include_self_weight: input.include_self_weight,
                load_factor: input.load_factor,
                effective_length_factor: input.effective_length_factor,
            },
            results: result.clone(),
        }
    }

    /// Pretty-printed JSON
    pub fn to_json_pretty(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
