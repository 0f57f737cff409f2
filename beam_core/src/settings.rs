//! # Analysis Settings
//!
//! Solver configuration passed explicitly into every analysis. Nothing here
//! is global: two scenarios can be solved side by side with different
//! settings.
//!
//! Every field has a default, so a settings file only needs the values it
//! changes:
//!
//! ```json
//! { "sample_count": 1001, "reaction_method": "Exact" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::file_io::load_json;

/// Number of profile samples when none is given
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Midspan detection tolerance as a fraction of the span
pub const DEFAULT_MIDSPAN_TOLERANCE: f64 = 1e-9;

/// How the shear/moment/deflection profile is produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProfileMethod {
    /// Closed form for a lone midspan point load, numerical integration otherwise
    #[default]
    Auto,
    /// Always integrate the discretized load numerically
    Numerical,
    /// Exact piecewise solution; only valid for a lone point load
    ClosedForm,
}

/// How support reactions are computed for patch loads on fixed/propped spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReactionMethod {
    /// Fixed shares (1/2 fixed-fixed, 0.6/0.4 propped) regardless of patch position
    #[default]
    Simplified,
    /// Exact indeterminate reactions for any patch position
    Exact,
}

/// Solver configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    /// Number of uniformly spaced profile samples (≥ 2)
    pub sample_count: usize,
    /// Profile generation method
    pub profile_method: ProfileMethod,
    /// Reaction formula set
    pub reaction_method: ReactionMethod,
    /// Midspan detection tolerance as a fraction of the span
    pub midspan_tolerance: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            profile_method: ProfileMethod::default(),
            reaction_method: ReactionMethod::default(),
            midspan_tolerance: DEFAULT_MIDSPAN_TOLERANCE,
        }
    }
}

impl AnalysisSettings {
    /// Set the number of profile samples
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Set the profile method
    pub fn with_profile_method(mut self, method: ProfileMethod) -> Self {
        self.profile_method = method;
        self
    }

    /// Set the reaction method
    pub fn with_reaction_method(mut self, method: ReactionMethod) -> Self {
        self.reaction_method = method;
        self
    }

    /// Check the settings are usable
    pub fn validate(&self) -> CalcResult<()> {
        if self.sample_count < 2 {
            return Err(CalcError::invalid_input(
                "sample_count",
                self.sample_count.to_string(),
                "At least 2 samples are required",
            ));
        }
        require_finite("midspan_tolerance", self.midspan_tolerance)?;
        if self.midspan_tolerance < 0.0 {
            return Err(CalcError::invalid_input(
                "midspan_tolerance",
                self.midspan_tolerance.to_string(),
                "Tolerance must not be negative",
            ));
        }
        Ok(())
    }

    /// Parse settings from a JSON string; missing fields take their defaults
    pub fn from_json_str(json: &str) -> CalcResult<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn from_json_file(path: &Path) -> CalcResult<Self> {
        let settings: Self = load_json(path)?;
        settings.validate()?;
        Ok(settings)
    }
}
