//! # Supports
//!
//! The solver always treats the beam as resting on exactly two vertical
//! reaction points. The support kind (fixed, pinned, roller) is carried as
//! metadata for reports and drawings only: a "fixed" support does NOT add a
//! moment reaction, and the system is never solved as indeterminate.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declared support condition (metadata only, see module docs)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportKind {
    /// Restrains translation and rotation
    Fixed,
    /// Restrains translation, free rotation
    Pinned,
    /// Restrains vertical translation only
    Roller,
}

impl SupportKind {
    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            SupportKind::Fixed => "Fixed (translation and rotation restrained)",
            SupportKind::Pinned => "Pinned (translation restrained, free rotation)",
            SupportKind::Roller => "Roller (vertical restraint only)",
        }
    }
}

impl fmt::Display for SupportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SupportKind::Fixed => "fixed",
            SupportKind::Pinned => "pinned",
            SupportKind::Roller => "roller",
        };
        f.write_str(name)
    }
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// A support point along the beam
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// Identifier used in reports
    #[serde(default = "new_id")]
    pub id: String,
    /// Declared condition
    #[serde(rename = "type")]
    pub kind: SupportKind,
    /// Position from the left end of the beam (m)
    pub position_m: f64,
}

impl Support {
    /// Create a support with a generated id
    pub fn new(kind: SupportKind, position_m: f64) -> Self {
        Support {
            id: new_id(),
            kind,
            position_m,
        }
    }

    /// Create a pinned support
    pub fn pinned(position_m: f64) -> Self {
        Self::new(SupportKind::Pinned, position_m)
    }

    /// Create a roller support
    pub fn roller(position_m: f64) -> Self {
        Self::new(SupportKind::Roller, position_m)
    }

    /// Create a fixed support
    pub fn fixed(position_m: f64) -> Self {
        Self::new(SupportKind::Fixed, position_m)
    }
}

/// The two reaction points ordered by position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SupportPair {
    /// Lower support position (R1 acts here)
    pub a_m: f64,
    /// Upper support position (R2 acts here)
    pub b_m: f64,
}

/// Minimum span used as a divisor when the supports coincide
pub const MIN_SPAN_M: f64 = 1e-4;

impl SupportPair {
    /// Order the first two supports by position.
    ///
    /// Missing supports default to the beam ends, which only happens when the
    /// caller skipped validation.
    pub fn from_supports(supports: &[Support], beam_length_m: f64) -> Self {
        let first = supports.first().map(|s| s.position_m).unwrap_or(0.0);
        let second = supports.get(1).map(|s| s.position_m).unwrap_or(beam_length_m);
        SupportPair {
            a_m: first.min(second),
            b_m: first.max(second),
        }
    }

    /// Distance between the supports, never below [`MIN_SPAN_M`]
    pub fn span_m(&self) -> f64 {
        (self.b_m - self.a_m).max(MIN_SPAN_M)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_is_sorted() {
        let supports = vec![Support::roller(8.0), Support::fixed(1.0)];
        let pair = SupportPair::from_supports(&supports, 10.0);
        assert_eq!(pair.a_m, 1.0);
        assert_eq!(pair.b_m, 8.0);
        assert_eq!(pair.span_m(), 7.0);
    }

    #[test]
    fn test_span_guard() {
        let supports = vec![Support::pinned(3.0), Support::roller(3.0)];
        let pair = SupportPair::from_supports(&supports, 10.0);
        assert_eq!(pair.span_m(), MIN_SPAN_M);
    }

    #[test]
    fn test_missing_supports_default_to_ends() {
        let pair = SupportPair::from_supports(&[], 6.0);
        assert_eq!((pair.a_m, pair.b_m), (0.0, 6.0));
    }

    #[test]
    fn test_json() {
        let json = r#"{ "id": "1", "type": "fixed", "position_m": 0.0 }"#;
        let support: Support = serde_json::from_str(json).unwrap();
        assert_eq!(support.kind, SupportKind::Fixed);
        assert_eq!(support.kind.to_string(), "fixed");
        assert!(support.kind.description().starts_with("Fixed"));
    }
}
