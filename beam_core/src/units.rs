//! # Unit Types
//!
//! Lightweight SI newtypes used at the boundary between the numeric core and
//! the reported results. The core works in base SI (N, N·m, Pa, m, m², m⁴);
//! results are reported in engineering units (kN, kN·m, MPa, mm, cm², cm⁴).
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{KiloNewtons, Newtons, Meters, Millimeters};
//!
//! let r: KiloNewtons = Newtons(5000.0).into();
//! assert_eq!(r.0, 5.0);
//!
//! let d: Millimeters = Meters(0.0125).into();
//! assert_eq!(d.0, 12.5);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Standard gravitational acceleration used for self-weight (m/s²)
pub const GRAVITY: f64 = 9.81;

// ============================================================================
// Length
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment
// ============================================================================

/// Moment in newton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtonMeters(pub f64);

impl From<NewtonMeters> for KiloNewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KiloNewtonMeters(nm.0 / 1000.0)
    }
}

impl From<KiloNewtonMeters> for NewtonMeters {
    fn from(knm: KiloNewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

// ============================================================================
// Stress
// ============================================================================

/// Stress in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

impl From<Pascals> for MegaPascals {
    fn from(pa: Pascals) -> Self {
        MegaPascals(pa.0 / 1e6)
    }
}

impl From<MegaPascals> for Pascals {
    fn from(mpa: MegaPascals) -> Self {
        Pascals(mpa.0 * 1e6)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Area in square meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMeters(pub f64);

/// Area in square centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqCentimeters(pub f64);

impl From<SqMeters> for SqCentimeters {
    fn from(m2: SqMeters) -> Self {
        SqCentimeters(m2.0 * 1e4)
    }
}

/// Second moment of area in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct M4(pub f64);

/// Second moment of area in cm⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cm4(pub f64);

impl From<M4> for Cm4 {
    fn from(m4: M4) -> Self {
        Cm4(m4.0 * 1e8)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(KiloNewtonMeters);
impl_arithmetic!(Pascals);
impl_arithmetic!(MegaPascals);
impl_arithmetic!(SqMeters);
impl_arithmetic!(SqCentimeters);
impl_arithmetic!(M4);
impl_arithmetic!(Cm4);

/// Convert a force in newtons to kilonewtons
pub fn kn(n: f64) -> f64 {
    KiloNewtons::from(Newtons(n)).value()
}

/// Convert a moment in N·m to kN·m
pub fn knm(nm: f64) -> f64 {
    KiloNewtonMeters::from(NewtonMeters(nm)).value()
}

/// Convert a stress in Pa to MPa
pub fn mpa(pa: f64) -> f64 {
    MegaPascals::from(Pascals(pa)).value()
}

/// Convert a length in m to mm
pub fn mm(m: f64) -> f64 {
    Millimeters::from(Meters(m)).value()
}
