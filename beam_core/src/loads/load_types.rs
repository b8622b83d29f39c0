//! Load family definitions

use std::fmt;

use serde::{Deserialize, Serialize};

/// Load family, which fixes the unit and meaning of `magnitude`
///
/// # Example
/// ```
/// use beam_core::loads::LoadKind;
///
/// assert_eq!(LoadKind::Distributed.unit(), "kN/m");
/// assert!(LoadKind::Triangular.is_span_load());
/// assert!(!LoadKind::Moment.is_span_load());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadKind {
    /// Concentrated force (kN), optionally inclined
    Point,
    /// Uniform line load (kN/m) over [start, end]
    Distributed,
    /// Line load rising linearly from 0 at start to the peak (kN/m) at end
    Triangular,
    /// Concentrated couple (kN·m)
    Moment,
}

impl LoadKind {
    /// All load kinds in display order
    pub const ALL: [LoadKind; 4] = [
        LoadKind::Point,
        LoadKind::Distributed,
        LoadKind::Triangular,
        LoadKind::Moment,
    ];

    /// Unit of the magnitude as entered by the user
    pub fn unit(&self) -> &'static str {
        match self {
            LoadKind::Point => "kN",
            LoadKind::Distributed | LoadKind::Triangular => "kN/m",
            LoadKind::Moment => "kN-m",
        }
    }

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            LoadKind::Point => "Point load",
            LoadKind::Distributed => "Distributed load",
            LoadKind::Triangular => "Triangular load",
            LoadKind::Moment => "Moment",
        }
    }

    /// Whether the load acts over a length and therefore needs an end position
    pub fn is_span_load(&self) -> bool {
        matches!(self, LoadKind::Distributed | LoadKind::Triangular)
    }
}

impl fmt::Display for LoadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
