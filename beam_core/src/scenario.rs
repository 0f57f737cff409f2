//! # Beam Scenarios
//!
//! A scenario is everything needed to run one analysis: the span, the
//! section, the supports, the loads and the solver settings. It is the
//! JSON document the command-line tool reads.
//!
//! ```json
//! {
//!   "label": "Roof beam B1",
//!   "span_m": 6.0,
//!   "section": { "type": "Catalog", "designation": "HEB200" },
//!   "supports": { "left": "Fixed", "right": "Pinned" },
//!   "loads": { "point": { "magnitude_n": 100000.0, "position_m": 3.0 } }
//! }
//! ```
//!
//! Omitted `section`, `supports`, `loads` and `settings` take their defaults
//! (HEB200, pinned-pinned, no load, default settings).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{require_positive, CalcResult};
use crate::file_io::load_json;
use crate::loads::{DistributedLoad, LoadSet, PointLoad};
use crate::sections::{section_catalog, SectionProperties, DEFAULT_SECTION};
use crate::settings::AnalysisSettings;
use crate::supports::SupportConfiguration;
use crate::units::{Gigapascals, Pascals};

/// Where the section stiffness comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionSpec {
    /// A designation from the built-in steel catalog
    Catalog { designation: String },
    /// Explicit E (Pa) and I (m⁴)
    Custom { e_pa: f64, i_m4: f64 },
}

impl Default for SectionSpec {
    fn default() -> Self {
        SectionSpec::Catalog {
            designation: DEFAULT_SECTION.to_string(),
        }
    }
}

impl SectionSpec {
    /// Catalog section by designation
    pub fn catalog(designation: impl Into<String>) -> Self {
        SectionSpec::Catalog {
            designation: designation.into(),
        }
    }

    /// Resolve to E and I
    pub fn properties(&self) -> CalcResult<SectionProperties> {
        let properties = match self {
            SectionSpec::Catalog { designation } => section_catalog().lookup(designation)?.properties(),
            SectionSpec::Custom { e_pa, i_m4 } => SectionProperties::new(*e_pa, *i_m4),
        };
        properties.validate()?;
        Ok(properties)
    }

    /// One-line description for reports
    pub fn describe(&self) -> String {
        match self {
            SectionSpec::Catalog { designation } => match section_catalog().lookup(designation) {
                Ok(section) => section.to_string(),
                Err(_) => designation.clone(),
            },
            SectionSpec::Custom { e_pa, i_m4 } => format!(
                "Custom (I={:.4e} m⁴, E={:.0} GPa)",
                i_m4,
                Gigapascals::from(Pascals(*e_pa)).value()
            ),
        }
    }
}

/// One beam analysis request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamScenario {
    /// User label (e.g., "B-1")
    #[serde(default)]
    pub label: String,
    /// Span length (m)
    pub span_m: f64,
    /// Section stiffness source
    #[serde(default)]
    pub section: SectionSpec,
    /// End support conditions
    #[serde(default)]
    pub supports: SupportConfiguration,
    /// Applied loads
    #[serde(default)]
    pub loads: LoadSet,
    /// Solver settings
    #[serde(default)]
    pub settings: AnalysisSettings,
}

impl Default for BeamScenario {
    /// HEB200 over 6 m, pinned both ends, 100 kN at midspan
    fn default() -> Self {
        let span_m = 6.0;
        BeamScenario::new("HEB200 demonstration beam", span_m).with_point_load(PointLoad::at_midspan(100_000.0, span_m))
    }
}

impl BeamScenario {
    /// Unloaded HEB200 span with pinned supports
    pub fn new(label: impl Into<String>, span_m: f64) -> Self {
        Self {
            label: label.into(),
            span_m,
            section: SectionSpec::default(),
            supports: SupportConfiguration::default(),
            loads: LoadSet::default(),
            settings: AnalysisSettings::default(),
        }
    }

    pub fn with_section(mut self, section: SectionSpec) -> Self {
        self.section = section;
        self
    }

    pub fn with_supports(mut self, supports: SupportConfiguration) -> Self {
        self.supports = supports;
        self
    }

    pub fn with_point_load(mut self, load: PointLoad) -> Self {
        self.loads.point = Some(load);
        self
    }

    pub fn with_distributed_load(mut self, load: DistributedLoad) -> Self {
        self.loads.distributed = Some(load);
        self
    }

    pub fn with_settings(mut self, settings: AnalysisSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Resolved section stiffness
    pub fn section_properties(&self) -> CalcResult<SectionProperties> {
        self.section.properties()
    }

    /// Check every part of the scenario without solving it
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("span_m", self.span_m)?;
        self.section_properties()?;
        self.settings.validate()?;
        self.loads.validate(self.span_m)
    }

    /// Parse and validate a scenario from JSON text
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let scenario: Self = serde_json::from_str(json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    /// Load and validate a scenario file
    pub fn from_json_file(path: &Path) -> CalcResult<Self> {
        let scenario: Self = load_json(path)?;
        scenario.validate()?;
        log::debug!("loaded scenario '{}' from {}", scenario.label, path.display());
        Ok(scenario)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::ReactionMethod;
    use crate::supports::SupportKind;

    #[test]
    fn test_default_scenario() {
        let scenario = BeamScenario::default();
        assert_eq!(scenario.span_m, 6.0);
        assert_eq!(scenario.supports.kind(), SupportKind::PinnedPinned);
        assert_eq!(scenario.loads.point, Some(PointLoad::new(100_000.0, 3.0)));
        assert!(scenario.loads.distributed.is_none());
        assert_eq!(scenario.settings.sample_count, 500);

        let props = scenario.section_properties().unwrap();
        assert!((props.flexural_rigidity() - 1.19616e7).abs() < 1.0);
    }

    #[test]
    fn test_minimal_json() {
        let scenario = BeamScenario::from_json_str(r#"{"span_m": 4.0}"#).unwrap();
        assert_eq!(scenario.section, SectionSpec::catalog("HEB200"));
        assert!(scenario.loads.is_empty());
        assert_eq!(scenario.label, "");
    }

    #[test]
    fn test_full_json() {
        let json = r#"{
            "label": "B-2",
            "span_m": 8.0,
            "section": { "type": "Custom", "e_pa": 200e9, "i_m4": 1e-4 },
            "supports": { "left": "Fixed", "right": "Pinned" },
            "loads": { "distributed": { "intensity_n_per_m": 10000.0, "start_m": 0.0, "end_m": 8.0 } },
            "settings": { "reaction_method": "Exact" }
        }"#;
        let scenario = BeamScenario::from_json_str(json).unwrap();
        assert_eq!(scenario.supports.kind(), SupportKind::FixedPinned);
        assert_eq!(scenario.settings.reaction_method, ReactionMethod::Exact);
        assert!((scenario.section_properties().unwrap().flexural_rigidity() - 2e7).abs() < 1e-3);
    }

    #[test]
    fn test_unknown_section() {
        let scenario = BeamScenario::new("x", 6.0).with_section(SectionSpec::catalog("IPE999"));
        assert!(scenario.validate().unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_load_outside_span_rejected() {
        let json = r#"{"span_m": 4.0, "loads": {"point": {"magnitude_n": 1.0, "position_m": 5.0}}}"#;
        assert!(BeamScenario::from_json_str(json).unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_missing_span_is_serialization_error() {
        let err = BeamScenario::from_json_str("{}").unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_describe() {
        assert!(SectionSpec::default().describe().starts_with("HEB200 (A=78.1 cm²"));
        assert_eq!(SectionSpec::catalog("IPE999").describe(), "IPE999");
        let custom = SectionSpec::Custom { e_pa: 200e9, i_m4: 1e-4 }.describe();
        assert!(custom.starts_with("Custom"));
        assert!(custom.contains("E=200 GPa"));
    }
}
