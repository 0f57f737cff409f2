//! Beam Loads
//!
//! A beam carries at most one concentrated load and at most one uniform patch
//! load. Both act downward; magnitudes are never negative.
//!
//! # Example
//!
//! ```
//! use beam_core::loads::{DistributedLoad, LoadSet, PointLoad};
//!
//! let loads = LoadSet::new()
//!     .with_point(PointLoad::new(100_000.0, 3.0))
//!     .with_distributed(DistributedLoad::new(10_000.0, 0.0, 6.0));
//!
//! assert_eq!(loads.total_load_n(), 160_000.0);
//! assert!(loads.validate(6.0).is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{require_finite, CalcError, CalcResult};

/// Concentrated load P (N) at distance xp (m) from the left end
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointLoad {
    /// Magnitude (N), positive downward
    pub magnitude_n: f64,
    /// Distance from the left end (m)
    pub position_m: f64,
}

impl PointLoad {
    /// Create a point load
    pub fn new(magnitude_n: f64, position_m: f64) -> Self {
        Self {
            magnitude_n,
            position_m,
        }
    }

    /// Point load at the middle of a span
    pub fn at_midspan(magnitude_n: f64, span_m: f64) -> Self {
        Self::new(magnitude_n, span_m / 2.0)
    }

    /// Check magnitude and position against the span length
    pub fn validate(&self, span_m: f64) -> CalcResult<()> {
        require_finite("point_load.magnitude_n", self.magnitude_n)?;
        require_finite("point_load.position_m", self.position_m)?;
        if self.magnitude_n < 0.0 {
            return Err(CalcError::invalid_input(
                "point_load.magnitude_n",
                self.magnitude_n.to_string(),
                "Load magnitude must not be negative",
            ));
        }
        if self.position_m < 0.0 || self.position_m > span_m {
            return Err(CalcError::invalid_input(
                "point_load.position_m",
                self.position_m.to_string(),
                format!("Position must lie within [0, {}]", span_m),
            ));
        }
        Ok(())
    }
}

/// Uniform load q (N/m) over [start, end] (m)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistributedLoad {
    /// Intensity (N/m), positive downward
    pub intensity_n_per_m: f64,
    /// Start of the loaded patch, from the left end (m)
    pub start_m: f64,
    /// End of the loaded patch, from the left end (m)
    pub end_m: f64,
}

impl DistributedLoad {
    /// Create a uniform patch load
    pub fn new(intensity_n_per_m: f64, start_m: f64, end_m: f64) -> Self {
        Self {
            intensity_n_per_m,
            start_m,
            end_m,
        }
    }

    /// Uniform load over the whole span
    pub fn full_span(intensity_n_per_m: f64, span_m: f64) -> Self {
        Self::new(intensity_n_per_m, 0.0, span_m)
    }

    /// Loaded length Δx = end - start (m)
    pub fn loaded_length_m(&self) -> f64 {
        self.end_m - self.start_m
    }

    /// Resultant force q·Δx (N)
    pub fn resultant_n(&self) -> f64 {
        self.intensity_n_per_m * self.loaded_length_m()
    }

    /// Centroid of the patch (m from the left end)
    pub fn centroid_m(&self) -> f64 {
        (self.start_m + self.end_m) / 2.0
    }

    /// True if x lies inside the loaded patch (ends inclusive)
    pub fn covers(&self, x_m: f64) -> bool {
        x_m >= self.start_m && x_m <= self.end_m
    }

    /// Check intensity and range: 0 ≤ start ≤ end ≤ L
    pub fn validate(&self, span_m: f64) -> CalcResult<()> {
        require_finite("distributed_load.intensity_n_per_m", self.intensity_n_per_m)?;
        require_finite("distributed_load.start_m", self.start_m)?;
        require_finite("distributed_load.end_m", self.end_m)?;
        if self.intensity_n_per_m < 0.0 {
            return Err(CalcError::invalid_input(
                "distributed_load.intensity_n_per_m",
                self.intensity_n_per_m.to_string(),
                "Load intensity must not be negative",
            ));
        }
        if self.start_m < 0.0 || self.start_m > span_m {
            return Err(CalcError::invalid_input(
                "distributed_load.start_m",
                self.start_m.to_string(),
                format!("Start must lie within [0, {}]", span_m),
            ));
        }
        if self.end_m < 0.0 || self.end_m > span_m {
            return Err(CalcError::invalid_input(
                "distributed_load.end_m",
                self.end_m.to_string(),
                format!("End must lie within [0, {}]", span_m),
            ));
        }
        if self.start_m > self.end_m {
            return Err(CalcError::invalid_input(
                "distributed_load",
                format!("[{}, {}]", self.start_m, self.end_m),
                "Start must not be greater than end",
            ));
        }
        Ok(())
    }
}

/// The loads acting on one beam: an optional point load and an optional patch load
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadSet {
    /// Concentrated load, if any
    #[serde(default)]
    pub point: Option<PointLoad>,
    /// Uniform patch load, if any
    #[serde(default)]
    pub distributed: Option<DistributedLoad>,
}

impl LoadSet {
    /// Empty load set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the two optional loads
    pub fn from_parts(point: Option<PointLoad>, distributed: Option<DistributedLoad>) -> Self {
        Self { point, distributed }
    }

    /// Add a point load (builder pattern)
    pub fn with_point(mut self, load: PointLoad) -> Self {
        self.point = Some(load);
        self
    }

    /// Add a distributed load (builder pattern)
    pub fn with_distributed(mut self, load: DistributedLoad) -> Self {
        self.distributed = Some(load);
        self
    }

    /// Total applied load P + q·Δx (N)
    pub fn total_load_n(&self) -> f64 {
        let p = self.point.map_or(0.0, |p| p.magnitude_n);
        let w = self.distributed.map_or(0.0, |d| d.resultant_n());
        p + w
    }

    /// True when nothing is applied (absent or zero-resultant loads)
    pub fn is_empty(&self) -> bool {
        self.total_load_n() == 0.0
    }

    /// The point load when it is the only non-zero load on the beam
    pub fn sole_point_load(&self) -> Option<PointLoad> {
        let distributed_is_zero = self.distributed.map_or(true, |d| d.resultant_n() == 0.0);
        match self.point {
            Some(p) if p.magnitude_n > 0.0 && distributed_is_zero => Some(p),
            _ => None,
        }
    }

    /// The point load when it is the only load and sits at midspan
    ///
    /// `tolerance` is a fraction of the span.
    pub fn midspan_point_load(&self, span_m: f64, tolerance: f64) -> Option<PointLoad> {
        self.sole_point_load()
            .filter(|p| (p.position_m - span_m / 2.0).abs() <= tolerance * span_m)
    }

    /// Validate both loads against the span
    pub fn validate(&self, span_m: f64) -> CalcResult<()> {
        if let Some(point) = &self.point {
            point.validate(span_m)?;
        }
        if let Some(distributed) = &self.distributed {
            distributed.validate(span_m)?;
        }
        Ok(())
    }
}
