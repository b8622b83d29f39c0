//! Discrete Load Definitions
//!
//! [`Load`] is the user-facing record (kN-based units, optional fields as in
//! the JSON request). [`AppliedLoad`] is the resolved form the solver works
//! with: load factor applied, converted to newtons, and reduced to its
//! vertical action.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::load_types::LoadKind;
use crate::equations::{triangular_resultant, uniform_resultant};

/// Angle used when a point load does not specify one (purely vertical)
pub const DEFAULT_ANGLE_DEG: f64 = 90.0;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A single load on the beam.
///
/// ## JSON Example
///
/// ```json
/// { "id": "L1", "type": "triangular", "position_m": 4.0, "end_position_m": 8.0, "magnitude": 6.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// Identifier used in validation messages
    #[serde(default = "new_id")]
    pub id: String,

    /// Load family
    #[serde(rename = "type")]
    pub kind: LoadKind,

    /// Position (point/moment) or start of the loaded length (m)
    pub position_m: f64,

    /// End of the loaded length (span loads only, m)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_position_m: Option<f64>,

    /// Magnitude: kN, kN/m or kN·m depending on `kind`
    pub magnitude: f64,

    /// Inclination from the beam axis in degrees (point loads only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_deg: Option<f64>,
}

impl Load {
    fn with_kind(
        kind: LoadKind,
        magnitude: f64,
        position_m: f64,
        end_position_m: Option<f64>,
    ) -> Self {
        Load {
            id: new_id(),
            kind,
            position_m,
            end_position_m,
            magnitude,
            angle_deg: None,
        }
    }

    /// Create a vertical point load (kN) at `position_m`
    pub fn point(magnitude_kn: f64, position_m: f64) -> Self {
        Self::with_kind(LoadKind::Point, magnitude_kn, position_m, None)
    }

    /// Create a uniform load (kN/m) over [start_m, end_m]
    pub fn distributed(magnitude_kn_m: f64, start_m: f64, end_m: f64) -> Self {
        Self::with_kind(LoadKind::Distributed, magnitude_kn_m, start_m, Some(end_m))
    }

    /// Create a triangular load rising to `peak_kn_m` at `end_m`
    pub fn triangular(peak_kn_m: f64, start_m: f64, end_m: f64) -> Self {
        Self::with_kind(LoadKind::Triangular, peak_kn_m, start_m, Some(end_m))
    }

    /// Create a concentrated moment (kN·m) at `position_m`
    pub fn moment(magnitude_knm: f64, position_m: f64) -> Self {
        Self::with_kind(LoadKind::Moment, magnitude_knm, position_m, None)
    }

    /// Set the inclination (builder pattern)
    pub fn with_angle(mut self, angle_deg: f64) -> Self {
        self.angle_deg = Some(angle_deg);
        self
    }

    /// Set the identifier (builder pattern)
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Loaded interval for span loads
    pub fn span(&self) -> Option<(f64, f64)> {
        if self.kind.is_span_load() {
            self.end_position_m.map(|end| (self.position_m, end))
        } else {
            None
        }
    }

    /// Fraction of a point load acting vertically, sin(angle).
    ///
    /// 1 for every other load kind.
    pub fn vertical_fraction(&self) -> f64 {
        match self.kind {
            LoadKind::Point => self.angle_deg.unwrap_or(DEFAULT_ANGLE_DEG).to_radians().sin(),
            _ => 1.0,
        }
    }

    /// Resolve into solver units with the load factor applied
    pub fn to_applied(&self, load_factor: f64) -> AppliedLoad {
        let magnitude = self.magnitude * load_factor * 1000.0;
        let start = self.position_m;
        let end = self.end_position_m.unwrap_or(start);
        match self.kind {
            LoadKind::Point => AppliedLoad::Point {
                force_n: magnitude * self.vertical_fraction(),
                position_m: start,
            },
            LoadKind::Distributed => AppliedLoad::Uniform {
                w_n_m: magnitude,
                start_m: start,
                end_m: end,
            },
            LoadKind::Triangular => AppliedLoad::Triangular {
                peak_n_m: magnitude,
                start_m: start,
                end_m: end,
            },
            LoadKind::Moment => AppliedLoad::Moment {
                moment_nm: magnitude,
                position_m: start,
            },
        }
    }
}

/// A load in solver units (N, N/m, N·m), already factored
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppliedLoad {
    /// Vertical component of a point load
    Point { force_n: f64, position_m: f64 },
    /// Uniform line load
    Uniform { w_n_m: f64, start_m: f64, end_m: f64 },
    /// Triangular line load, zero at start
    Triangular { peak_n_m: f64, start_m: f64, end_m: f64 },
    /// Concentrated couple, same sense as the moment of a downward load about the left support
    Moment { moment_nm: f64, position_m: f64 },
}

impl AppliedLoad {
    /// Total vertical force and its line of action.
    ///
    /// Couples have no force resultant and return `None`.
    pub fn resultant(&self) -> Option<(f64, f64)> {
        match *self {
            AppliedLoad::Point { force_n, position_m } => Some((force_n, position_m)),
            AppliedLoad::Uniform {
                w_n_m,
                start_m,
                end_m,
            } => Some(uniform_resultant(w_n_m, start_m, end_m)),
            AppliedLoad::Triangular {
                peak_n_m,
                start_m,
                end_m,
            } => Some(triangular_resultant(peak_n_m, start_m, end_m)),
            AppliedLoad::Moment { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_builders() {
        let load = Load::distributed(5.0, 0.0, 6.0);
        assert_eq!(load.kind, LoadKind::Distributed);
        assert_eq!(load.span(), Some((0.0, 6.0)));
        assert!(!load.id.is_empty());

        let point = Load::point(10.0, 5.0);
        assert_eq!(point.span(), None);
        assert_ne!(point.id, load.id);
    }

    #[test]
    fn test_vertical_fraction() {
        assert_relative_eq!(Load::point(10.0, 5.0).vertical_fraction(), 1.0);
        let inclined = Load::point(10.0, 5.0).with_angle(30.0);
        assert_relative_eq!(inclined.vertical_fraction(), 0.5, epsilon = 1e-12);
        let horizontal = Load::point(10.0, 5.0).with_angle(0.0);
        assert_relative_eq!(horizontal.vertical_fraction(), 0.0, epsilon = 1e-12);
        // angle is ignored for span loads
        assert_eq!(Load::distributed(1.0, 0.0, 1.0).with_angle(30.0).vertical_fraction(), 1.0);
    }

    #[test]
    fn test_to_applied_scales_and_converts() {
        match Load::point(10.0, 5.0).to_applied(1.5) {
            AppliedLoad::Point { force_n, position_m } => {
                assert_relative_eq!(force_n, 15_000.0, max_relative = 1e-12);
                assert_eq!(position_m, 5.0);
            }
            other => panic!("unexpected {:?}", other),
        }

        let tri = Load::triangular(4.0, 2.0, 8.0).to_applied(1.0);
        let (total, centroid) = tri.resultant().unwrap();
        assert_relative_eq!(total, 12_000.0);
        assert_relative_eq!(centroid, 6.0);

        assert_eq!(Load::moment(3.0, 2.0).to_applied(1.0).resultant(), None);
    }

    #[test]
    fn test_json_defaults() {
        let json = r#"{ "type": "point", "position_m": 2.5, "magnitude": 4.0 }"#;
        let load: Load = serde_json::from_str(json).unwrap();
        assert_eq!(load.kind, LoadKind::Point);
        assert_eq!(load.angle_deg, None);
        assert!(!load.id.is_empty());

        let back = serde_json::to_string(&load).unwrap();
        assert!(!back.contains("end_position_m"));
    }
}
