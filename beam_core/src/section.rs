//! # Cross Sections
//!
//! Profile families are looked up in a static shape table that maps each
//! [`SectionShape`] to an immutable [`ShapeFormula`] record. A new profile is
//! one new table row plus its formulas in [`crate::equations::section`].
//!
//! ## Example
//!
//! ```rust
//! use beam_core::section::{CrossSectionSpec, SectionShape};
//!
//! let spec = CrossSectionSpec::new(SectionShape::Rectangular, 0.1, 0.2);
//! let props = spec.properties();
//! assert!((props.area_m2 - 0.02).abs() < 1e-12);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::equations::section as formulas;
use crate::errors::CalcError;
use crate::units::{Cm4, M4, SqCentimeters, SqMeters};

/// Profile family of a cross section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SectionShape {
    #[serde(rename = "rectangular")]
    Rectangular,
    /// Solid circle; the width dimension is the diameter
    #[serde(rename = "circular")]
    Circular,
    #[serde(rename = "I-beam")]
    IBeam,
    #[serde(rename = "T-beam")]
    TBeam,
}

impl SectionShape {
    /// All shapes in display order
    pub const ALL: [SectionShape; 4] = [
        SectionShape::Rectangular,
        SectionShape::Circular,
        SectionShape::IBeam,
        SectionShape::TBeam,
    ];

    /// Tag as it appears in JSON requests
    pub fn tag(&self) -> &'static str {
        match self {
            SectionShape::Rectangular => "rectangular",
            SectionShape::Circular => "circular",
            SectionShape::IBeam => "I-beam",
            SectionShape::TBeam => "T-beam",
        }
    }

    /// Formula record for this shape
    pub fn formula(&self) -> &'static ShapeFormula {
        &SHAPE_TABLE[self]
    }
}

impl fmt::Display for SectionShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for SectionShape {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionShape::ALL
            .iter()
            .copied()
            .find(|shape| shape.tag().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::unknown_section(s))
    }
}

/// Closed-form area and inertia for one profile family, as functions of
/// (width, height) in meters.
pub struct ShapeFormula {
    /// Human-readable profile name
    pub display_name: &'static str,
    /// A(b, h) in m²
    pub area: fn(f64, f64) -> f64,
    /// I(b, h) in m⁴
    pub inertia: fn(f64, f64) -> f64,
}

impl fmt::Debug for ShapeFormula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeFormula")
            .field("display_name", &self.display_name)
            .finish()
    }
}

static SHAPE_TABLE: Lazy<HashMap<SectionShape, ShapeFormula>> = Lazy::new(|| {
    let mut table = HashMap::new();
    table.insert(
        SectionShape::Rectangular,
        ShapeFormula {
            display_name: "Rectangular",
            area: formulas::rectangular_area,
            inertia: formulas::rectangular_moment_of_inertia,
        },
    );
    table.insert(
        SectionShape::Circular,
        ShapeFormula {
            display_name: "Circular (solid)",
            area: |d, _| formulas::circular_area(d),
            inertia: |d, _| formulas::circular_moment_of_inertia(d),
        },
    );
    table.insert(
        SectionShape::IBeam,
        ShapeFormula {
            display_name: "I-beam",
            area: formulas::i_beam_area,
            inertia: formulas::i_beam_moment_of_inertia,
        },
    );
    table.insert(
        SectionShape::TBeam,
        ShapeFormula {
            display_name: "T-beam",
            area: formulas::t_beam_area,
            inertia: formulas::t_beam_moment_of_inertia,
        },
    );
    table
});

/// Shape tag plus nominal dimensions of a cross section.
///
/// ## JSON Example
///
/// ```json
/// { "shape": "I-beam", "width_m": 0.2, "height_m": 0.4 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrossSectionSpec {
    /// Profile family
    pub shape: SectionShape,
    /// Overall width (diameter for circular sections) in meters
    pub width_m: f64,
    /// Overall height in meters
    pub height_m: f64,
}

impl CrossSectionSpec {
    /// Create a new section spec
    pub fn new(shape: SectionShape, width_m: f64, height_m: f64) -> Self {
        CrossSectionSpec {
            shape,
            width_m,
            height_m,
        }
    }

    /// Derive area, inertia and extreme-fiber distance.
    ///
    /// Dimensions are assumed validated; zero dimensions simply yield zero
    /// properties.
    pub fn properties(&self) -> SectionProperties {
        let formula = self.shape.formula();
        SectionProperties {
            area_m2: (formula.area)(self.width_m, self.height_m),
            inertia_m4: (formula.inertia)(self.width_m, self.height_m),
            extreme_fiber_m: self.height_m / 2.0,
        }
    }

    /// Height of the neutral axis above the bottom fiber.
    ///
    /// Differs from `height/2` only for the T-profile.
    pub fn centroid_height_m(&self) -> f64 {
        match self.shape {
            SectionShape::TBeam => formulas::t_beam_centroid(self.width_m, self.height_m),
            _ => self.height_m / 2.0,
        }
    }
}

/// Derived geometric properties of a section in SI units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Cross-sectional area (m²)
    pub area_m2: f64,
    /// Second moment of area (m⁴)
    pub inertia_m4: f64,
    /// Distance from neutral axis to the extreme fiber used for stress (m).
    ///
    /// Always half the nominal height, including for the asymmetric T-profile.
    pub extreme_fiber_m: f64,
}

impl SectionProperties {
    /// Radius of gyration √(I/A) in m
    pub fn radius_of_gyration_m(&self) -> f64 {
        formulas::radius_of_gyration(self.inertia_m4, self.area_m2)
    }

    /// Elastic section modulus I/c in m³
    pub fn section_modulus_m3(&self) -> f64 {
        formulas::section_modulus(self.inertia_m4, self.extreme_fiber_m)
    }

    /// Area in cm²
    pub fn area_cm2(&self) -> f64 {
        SqCentimeters::from(SqMeters(self.area_m2)).value()
    }

    /// Inertia in cm⁴
    pub fn inertia_cm4(&self) -> f64 {
        Cm4::from(M4(self.inertia_m4)).value()
    }
}
