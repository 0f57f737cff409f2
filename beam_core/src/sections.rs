//! Section Properties and Steel Section Catalog
//!
//! The solver only needs flexural rigidity EI, carried by [`SectionProperties`].
//! Rolled steel sections are looked up from a small built-in catalog of
//! European HEB wide-flange profiles, with the table values (mm, cm², cm⁴)
//! converted to SI base units on demand.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::sections::{section_catalog, SectionProperties};
//!
//! let heb200 = section_catalog().lookup("HEB200").unwrap();
//! let props: SectionProperties = heb200.properties();
//! assert!((props.i_m4 - 5696e-8).abs() < 1e-12);
//! assert!((props.flexural_rigidity() - 210e9 * 5696e-8).abs() < 1.0);
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcError, CalcResult};
use crate::units::{CentimetersToFourth, Gigapascals, MetersToFourth, Pascals};

/// Elastic modulus of structural steel (Pa)
pub const STEEL_E_PA: f64 = 210e9;

/// Designation of the section used when a scenario names none
pub const DEFAULT_SECTION: &str = "HEB200";

/// Elastic modulus and second moment of area of a prismatic section.
///
/// Both values are in SI base units. Only the product EI enters the solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionProperties {
    /// Elastic modulus (Pa)
    pub e_pa: f64,
    /// Second moment of area about the bending axis (m⁴)
    pub i_m4: f64,
}

impl SectionProperties {
    /// Create section properties from E (Pa) and I (m⁴)
    pub fn new(e_pa: f64, i_m4: f64) -> Self {
        Self { e_pa, i_m4 }
    }

    /// Flexural rigidity EI (N·m²)
    pub fn flexural_rigidity(&self) -> f64 {
        self.e_pa * self.i_m4
    }

    /// Check that E, I and their product are positive and finite.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("e_pa", self.e_pa)?;
        require_positive("i_m4", self.i_m4)?;
        let ei = self.flexural_rigidity();
        if !ei.is_finite() || ei <= 0.0 {
            return Err(CalcError::invalid_input(
                "flexural_rigidity",
                ei.to_string(),
                "EI must be positive and finite",
            ));
        }
        Ok(())
    }
}

/// A rolled steel section with its table properties.
///
/// Dimensions follow the units used in European section tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SteelSection {
    /// Designation (e.g., "HEB200")
    pub designation: String,
    /// Overall height h (mm)
    pub h_mm: f64,
    /// Flange width b (mm)
    pub b_mm: f64,
    /// Web thickness tw (mm)
    pub tw_mm: f64,
    /// Flange thickness tf (mm)
    pub tf_mm: f64,
    /// Cross-sectional area A (cm²)
    pub area_cm2: f64,
    /// Strong-axis second moment of area I (cm⁴)
    pub i_cm4: f64,
    /// Elastic modulus E (Pa)
    pub e_pa: f64,
    /// Mass per metre (kg/m)
    pub mass_kg_per_m: f64,
}

impl SteelSection {
    /// Strong-axis I in m⁴
    pub fn i_m4(&self) -> f64 {
        MetersToFourth::from(CentimetersToFourth(self.i_cm4)).value()
    }

    /// Section properties for the solver
    pub fn properties(&self) -> SectionProperties {
        SectionProperties::new(self.e_pa, self.i_m4())
    }
}

impl std::fmt::Display for SteelSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (A={:.1} cm², I={:.0} cm⁴, E={:.0} GPa)",
            self.designation,
            self.area_cm2,
            self.i_cm4,
            Gigapascals::from(Pascals(self.e_pa)).value()
        )
    }
}

/// Lookup table of steel sections, keyed by uppercase designation.
#[derive(Debug, Clone, Default)]
pub struct SectionCatalog {
    sections: HashMap<String, SteelSection>,
}

impl SectionCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a section, replacing any with the same designation
    pub fn insert(&mut self, section: SteelSection) {
        self.sections.insert(section.designation.to_uppercase(), section);
    }

    /// Look up a section by designation (case-insensitive, spaces ignored)
    ///
    /// ```rust
    /// use beam_core::sections::section_catalog;
    ///
    /// assert!(section_catalog().lookup("heb 200").is_ok());
    /// ```
    pub fn lookup(&self, designation: &str) -> CalcResult<&SteelSection> {
        let key: String = designation
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();
        self.sections.get(&key).ok_or_else(|| {
            CalcError::invalid_input(
                "section",
                designation,
                format!("Section not found in catalog; available: {}", self.designations().join(", ")),
            )
        })
    }

    /// All designations, sorted by section height
    pub fn designations(&self) -> Vec<&str> {
        let mut sections: Vec<&SteelSection> = self.sections.values().collect();
        sections.sort_by(|a, b| a.h_mm.total_cmp(&b.h_mm));
        sections.iter().map(|s| s.designation.as_str()).collect()
    }
}

/// HEB profiles: (designation, h, b, tw, tf, A cm², I cm⁴, kg/m)
const HEB_PROFILES: [(&str, f64, f64, f64, f64, f64, f64, f64); 11] = [
    ("HEB100", 100.0, 100.0, 6.0, 10.0, 26.0, 449.5, 20.4),
    ("HEB120", 120.0, 120.0, 6.5, 11.0, 34.0, 864.4, 26.7),
    ("HEB140", 140.0, 140.0, 7.0, 12.0, 43.0, 1509.0, 33.7),
    ("HEB160", 160.0, 160.0, 8.0, 13.0, 54.3, 2492.0, 42.6),
    ("HEB180", 180.0, 180.0, 8.5, 14.0, 65.3, 3831.0, 51.2),
    ("HEB200", 200.0, 200.0, 9.0, 15.0, 78.1, 5696.0, 61.3),
    ("HEB220", 220.0, 220.0, 9.5, 16.0, 91.0, 8091.0, 71.5),
    ("HEB240", 240.0, 240.0, 10.0, 17.0, 106.0, 11260.0, 83.2),
    ("HEB260", 260.0, 260.0, 10.0, 17.5, 118.4, 14920.0, 93.0),
    ("HEB280", 280.0, 280.0, 10.5, 18.0, 131.4, 19270.0, 103.0),
    ("HEB300", 300.0, 300.0, 11.0, 19.0, 149.1, 25170.0, 117.0),
];

static CATALOG: Lazy<SectionCatalog> = Lazy::new(|| {
    let mut catalog = SectionCatalog::new();
    for (designation, h, b, tw, tf, area, i, mass) in HEB_PROFILES {
        catalog.insert(SteelSection {
            designation: designation.to_string(),
            h_mm: h,
            b_mm: b,
            tw_mm: tw,
            tf_mm: tf,
            area_cm2: area,
            i_cm4: i,
            e_pa: STEEL_E_PA,
            mass_kg_per_m: mass,
        });
    }
    catalog
});

/// The built-in section catalog
pub fn section_catalog() -> &'static SectionCatalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_heb200_properties() {
        let heb200 = section_catalog().lookup(DEFAULT_SECTION).unwrap();
        assert_eq!(heb200.h_mm, 200.0);
        assert_eq!(heb200.tf_mm, 15.0);
        assert_eq!(heb200.area_cm2, 78.1);
        assert_relative_eq!(heb200.i_m4(), 5696e-8, max_relative = 1e-12);

        let props = heb200.properties();
        assert_relative_eq!(props.flexural_rigidity(), 1.19616e7, max_relative = 1e-9);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let upper = section_catalog().lookup("HEB300").unwrap();
        let lower = section_catalog().lookup("heb300").unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_unknown_section() {
        let err = section_catalog().lookup("IPE999").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("available: HEB100, HEB120"));
    }

    #[test]
    fn test_designations_sorted_by_height() {
        let names = section_catalog().designations();
        assert_eq!(names.len(), 11);
        assert_eq!(names.first(), Some(&"HEB100"));
        assert_eq!(names.last(), Some(&"HEB300"));
    }

    #[test]
    fn test_validate_rejects_non_positive() {
        assert!(SectionProperties::new(210e9, 5696e-8).validate().is_ok());
        assert!(SectionProperties::new(0.0, 5696e-8).validate().is_err());
        assert!(SectionProperties::new(210e9, -1.0).validate().is_err());
        assert!(SectionProperties::new(f64::NAN, 1.0).validate().is_err());
        // Underflows to zero
        assert!(SectionProperties::new(1e-200, 1e-200).validate().is_err());
    }

    #[test]
    fn test_display() {
        let heb200 = section_catalog().lookup("HEB200").unwrap();
        let text = heb200.to_string();
        assert!(text.contains("HEB200"));
        assert!(text.contains("5696"));
        assert!(text.contains("E=210 GPa"));
    }
}
