//! # Unit Types
//!
//! Type-safe wrappers for SI engineering units. These are lightweight f64
//! newtypes: the solver works in SI base units (m, N, Pa, m⁴) and reports are
//! usually given in kN, kN·m and mm.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::units::{Kilonewtons, Newtons, Meters, Millimeters};
//!
//! let load: Newtons = Kilonewtons(100.0).into();
//! assert_eq!(load.0, 100_000.0);
//!
//! let deflection: Millimeters = Meters(0.0134).into();
//! assert!((deflection.0 - 13.4).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimetres
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
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilonewtons(pub f64);

impl From<Newtons> for Kilonewtons {
    fn from(n: Newtons) -> Self {
        Kilonewtons(n.0 / 1000.0)
    }
}

impl From<Kilonewtons> for Newtons {
    fn from(kn: Kilonewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in newton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonMeters(pub f64);

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonMeters(pub f64);

impl From<NewtonMeters> for KilonewtonMeters {
    fn from(nm: NewtonMeters) -> Self {
        KilonewtonMeters(nm.0 / 1000.0)
    }
}

impl From<KilonewtonMeters> for NewtonMeters {
    fn from(knm: KilonewtonMeters) -> Self {
        NewtonMeters(knm.0 * 1000.0)
    }
}

// ============================================================================
// Distributed Load Units
// ============================================================================

/// Distributed load in newtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NewtonsPerMeter(pub f64);

/// Distributed load in kilonewtons per metre
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KilonewtonsPerMeter(pub f64);

impl From<NewtonsPerMeter> for KilonewtonsPerMeter {
    fn from(npm: NewtonsPerMeter) -> Self {
        KilonewtonsPerMeter(npm.0 / 1000.0)
    }
}

impl From<KilonewtonsPerMeter> for NewtonsPerMeter {
    fn from(knpm: KilonewtonsPerMeter) -> Self {
        NewtonsPerMeter(knpm.0 * 1000.0)
    }
}

// ============================================================================
// Stress / Modulus Units
// ============================================================================

/// Stress or elastic modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress or elastic modulus in gigapascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1e9)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1e9)
    }
}

// ============================================================================
// Section Properties
// ============================================================================

/// Second moment of area in m⁴
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetersToFourth(pub f64);

/// Second moment of area in cm⁴ (the unit section tables use)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CentimetersToFourth(pub f64);

impl From<CentimetersToFourth> for MetersToFourth {
    fn from(cm4: CentimetersToFourth) -> Self {
        MetersToFourth(cm4.0 * 1e-8)
    }
}

impl From<MetersToFourth> for CentimetersToFourth {
    fn from(m4: MetersToFourth) -> Self {
        CentimetersToFourth(m4.0 * 1e8)
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

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Newtons);
impl_arithmetic!(Kilonewtons);
impl_arithmetic!(NewtonMeters);
impl_arithmetic!(KilonewtonMeters);
impl_arithmetic!(NewtonsPerMeter);
impl_arithmetic!(KilonewtonsPerMeter);
impl_arithmetic!(Pascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(MetersToFourth);
impl_arithmetic!(CentimetersToFourth);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kilonewtons_to_newtons() {
        let n: Newtons = Kilonewtons(1.5).into();
        assert_eq!(n.0, 1500.0);
    }

    #[test]
    fn test_moment_to_knm() {
        let knm: KilonewtonMeters = NewtonMeters(150_000.0).into();
        assert_eq!(knm.0, 150.0);
    }

    #[test]
    fn test_line_load_to_kn_per_m() {
        let q: KilonewtonsPerMeter = NewtonsPerMeter(12_500.0).into();
        assert_eq!(q.0, 12.5);
        let back: NewtonsPerMeter = q.into();
        assert_eq!(back.0, 12_500.0);
    }

    #[test]
    fn test_cm4_to_m4() {
        let m4: MetersToFourth = CentimetersToFourth(5696.0).into();
        assert!((m4.0 - 5696e-8).abs() < 1e-15);
    }

    #[test]
    fn test_gpa_to_pa() {
        let pa: Pascals = Gigapascals(210.0).into();
        assert_eq!(pa.0, 210e9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Meters(6.0);
        let b = Meters(2.0);
        assert_eq!((a + b).0, 8.0);
        assert_eq!((a - b).0, 4.0);
        assert_eq!((a * 2.0).0, 12.0);
        assert_eq!((a / 2.0).0, 3.0);
    }

    #[test]
    fn test_serialization() {
        let m = Meters(6.5);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "6.5");

        let roundtrip: Meters = serde_json::from_str(&json).unwrap();
        assert_eq!(m, roundtrip);
    }
}
