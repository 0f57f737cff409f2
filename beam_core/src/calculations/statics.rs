//! Single-Span Beam Statics
//!
//! Turns span length, section stiffness, support conditions and loads into
//! support reactions and sampled shear, moment and deflection profiles.
//!
//! ## Reactions
//! Point-load and patch-load reactions are solved independently and
//! superposed; the right reaction is always `total - R1`, so equilibrium
//! holds exactly.
//!
//! ## Profiles
//! - **Closed form**: exact piecewise solution for a lone point load
//!   (used automatically when that load sits at midspan)
//! - **Numerical**: the load is discretized onto the sample grid and
//!   integrated twice for V and M, then twice more for deflection. The
//!   deflection is corrected by its chord so that y(0) = y(L) = 0; end
//!   rotation at fixed supports is not enforced.
//!
//! ## Sign Convention
//! - Positive moment: tension on bottom fiber (sagging)
//! - Positive shear: left side up, right side down
//! - Positive deflection: downward
//!
//! ## Example
//! ```rust
//! use beam_core::calculations::statics::solve;
//! use beam_core::loads::PointLoad;
//! use beam_core::sections::SectionProperties;
//! use beam_core::supports::SupportConfiguration;
//!
//! // 6 m HEB200, 100 kN at midspan
//! let section = SectionProperties::new(210e9, 5696e-8);
//! let (reactions, profile) = solve(
//!     6.0,
//!     &section,
//!     SupportConfiguration::pinned_pinned(),
//!     Some(PointLoad::new(100_000.0, 3.0)),
//!     None,
//!     500,
//! )
//! .unwrap();
//!
//! assert!((reactions.left_n - 50_000.0).abs() < 1e-6);
//! let summary = profile.summary();
//! println!("Max moment: {:.1} kNm", summary.max_moment_nm / 1000.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::beam::{
    midspan_reference, patch_reactions_exact, patch_reactions_simplified, point_load_initial_parameters,
    point_load_response_at, point_reactions, MidspanReference,
};
use crate::errors::{require_positive, CalcError, CalcResult};
use crate::loads::{DistributedLoad, LoadSet, PointLoad};
use crate::scenario::BeamScenario;
use crate::sections::SectionProperties;
use crate::settings::{AnalysisSettings, ProfileMethod, ReactionMethod};
use crate::supports::{SupportConfiguration, SupportKind};

/// Vertical support reactions, positive upward
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    /// Left support reaction R1 (N)
    pub left_n: f64,
    /// Right support reaction R2 (N)
    pub right_n: f64,
}

impl Reactions {
    /// Sum of both reactions (N)
    pub fn total_n(&self) -> f64 {
        self.left_n + self.right_n
    }
}

/// Shear, moment and deflection sampled at uniformly spaced abscissas
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseProfile {
    /// Sample positions from the left end (m), x[0] = 0 and x[n-1] = L
    pub x_m: Vec<f64>,
    /// Shear force V (N)
    pub shear_n: Vec<f64>,
    /// Bending moment M (N·m)
    pub moment_nm: Vec<f64>,
    /// Deflection y (m), positive downward
    pub deflection_m: Vec<f64>,
}

/// Largest-magnitude response values and where they occur.
///
/// Values keep their sign; positions are measured from the left end.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ResponseSummary {
    /// Shear with the largest magnitude (N)
    pub max_shear_n: f64,
    /// Position of the maximum shear (m)
    pub max_shear_position_m: f64,
    /// Moment with the largest magnitude (N·m)
    pub max_moment_nm: f64,
    /// Position of the maximum moment (m)
    pub max_moment_position_m: f64,
    /// Deflection with the largest magnitude (m, positive downward)
    pub max_deflection_m: f64,
    /// Position of the maximum deflection (m)
    pub max_deflection_position_m: f64,
}

impl ResponseProfile {
    /// Profile of `sample_count` zeros over the span
    pub fn zeros(span_m: f64, sample_count: usize) -> Self {
        ResponseProfile {
            x_m: sample_positions(span_m, sample_count),
            shear_n: vec![0.0; sample_count],
            moment_nm: vec![0.0; sample_count],
            deflection_m: vec![0.0; sample_count],
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.x_m.len()
    }

    /// True if the profile has no samples
    pub fn is_empty(&self) -> bool {
        self.x_m.is_empty()
    }

    /// Distance between neighbouring samples (m)
    pub fn spacing_m(&self) -> f64 {
        match self.x_m.as_slice() {
            [first, .., last] => (last - first) / (self.x_m.len() - 1) as f64,
            _ => 0.0,
        }
    }

    /// Iterate over `(x, V, M, y)` tuples
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.x_m
            .iter()
            .zip(&self.shear_n)
            .zip(&self.moment_nm)
            .zip(&self.deflection_m)
            .map(|(((&x, &v), &m), &y)| (x, v, m, y))
    }

    /// Find the largest-magnitude shear, moment and deflection
    pub fn summary(&self) -> ResponseSummary {
        let mut summary = ResponseSummary::default();

        for (x, v, m, y) in self.points() {
            if v.abs() > summary.max_shear_n.abs() {
                summary.max_shear_n = v;
                summary.max_shear_position_m = x;
            }
            if m.abs() > summary.max_moment_nm.abs() {
                summary.max_moment_nm = m;
                summary.max_moment_position_m = x;
            }
            if y.abs() > summary.max_deflection_m.abs() {
                summary.max_deflection_m = y;
                summary.max_deflection_position_m = x;
            }
        }

        summary
    }
}

/// Which procedure produced a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileSource {
    /// Exact piecewise point-load solution
    ClosedForm,
    /// Discrete integration of the sampled load
    Numerical,
    /// No load applied; everything is zero
    Unloaded,
}

/// Complete output of one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaticsResult {
    /// Support reactions
    pub reactions: Reactions,
    /// Sampled response
    pub profile: ResponseProfile,
    /// Maxima of the sampled response
    pub summary: ResponseSummary,
    /// Procedure used for the profile
    pub source: ProfileSource,
    /// Reaction formula set used
    pub reaction_method: ReactionMethod,
    /// Closed-form values when the only load is a point load at midspan
    pub reference: Option<MidspanReference>,
}

/// Solve a beam with default settings and the given sample count.
///
/// # Errors
/// `CalcError::InvalidInput` for non-positive span or stiffness, loads
/// outside the span, malformed patch ranges, or `sample_count < 2`.
pub fn solve(
    span_m: f64,
    section: &SectionProperties,
    supports: SupportConfiguration,
    point_load: Option<PointLoad>,
    distributed_load: Option<DistributedLoad>,
    sample_count: usize,
) -> CalcResult<(Reactions, ResponseProfile)> {
    let settings = AnalysisSettings::default().with_sample_count(sample_count);
    let loads = LoadSet::from_parts(point_load, distributed_load);
    let result = solve_with(span_m, section, supports, &loads, &settings)?;
    Ok((result.reactions, result.profile))
}

/// Run the analysis described by a scenario
pub fn analyze(scenario: &BeamScenario) -> CalcResult<StaticsResult> {
    let section = scenario.section_properties()?;
    solve_with(
        scenario.span_m,
        &section,
        scenario.supports,
        &scenario.loads,
        &scenario.settings,
    )
}

/// Solve a beam with explicit settings
pub fn solve_with(
    span_m: f64,
    section: &SectionProperties,
    supports: SupportConfiguration,
    loads: &LoadSet,
    settings: &AnalysisSettings,
) -> CalcResult<StaticsResult> {
    require_positive("span_m", span_m)?;
    section.validate()?;
    settings.validate()?;
    loads.validate(span_m)?;

    let kind = supports.kind();
    let ei = section.flexural_rigidity();
    let n = settings.sample_count;

    log::debug!(
        "solving {} span L={} m, EI={:.4e} N·m², total load {} N, {} samples",
        supports,
        span_m,
        ei,
        loads.total_load_n(),
        n
    );

    let reference = loads
        .midspan_point_load(span_m, settings.midspan_tolerance)
        .map(|p| midspan_reference(kind, p.magnitude_n, span_m, ei));
    if let Some(reference) = &reference {
        require_finite_deflection(ei, &[reference.max_deflection_m])?;
    }

    if loads.is_empty() {
        log::debug!("no load applied, returning zero profile");
        let profile = ResponseProfile::zeros(span_m, n);
        return Ok(StaticsResult {
            reactions: Reactions::default(),
            summary: profile.summary(),
            profile,
            source: ProfileSource::Unloaded,
            reaction_method: settings.reaction_method,
            reference,
        });
    }

    let reactions = compute_reactions(kind, span_m, loads, settings.reaction_method);
    log::debug!("reactions R1={:.3} N, R2={:.3} N", reactions.left_n, reactions.right_n);

    let closed_form_load = match settings.profile_method {
        ProfileMethod::Numerical => None,
        ProfileMethod::Auto => loads.midspan_point_load(span_m, settings.midspan_tolerance),
        ProfileMethod::ClosedForm => match loads.sole_point_load() {
            Some(p) => Some(p),
            None => {
                return Err(CalcError::invalid_input(
                    "profile_method",
                    "ClosedForm",
                    "Closed-form profiles require a single point load and no distributed load",
                ))
            }
        },
    };

    let (profile, source) = match closed_form_load {
        Some(p) => (closed_form_profile(kind, span_m, ei, p, n), ProfileSource::ClosedForm),
        None => (
            numerical_profile(span_m, ei, loads, reactions.left_n, n),
            ProfileSource::Numerical,
        ),
    };
    log::debug!("profile generated by {:?}", source);
    require_finite_deflection(ei, &profile.deflection_m)?;

    Ok(StaticsResult {
        reactions,
        summary: profile.summary(),
        profile,
        source,
        reaction_method: settings.reaction_method,
        reference,
    })
}

/// Superpose point-load and patch-load reactions.
///
/// R2 is taken as `total - R1` so that R1 + R2 equals the applied load.
pub fn compute_reactions(kind: SupportKind, span_m: f64, loads: &LoadSet, method: ReactionMethod) -> Reactions {
    let mut r1 = 0.0;

    if let Some(p) = &loads.point {
        r1 += point_reactions(kind, p.magnitude_n, p.position_m, span_m).0;
    }
    if let Some(q) = &loads.distributed {
        let (qa, qb, w) = (q.start_m, q.end_m, q.intensity_n_per_m);
        r1 += match method {
            ReactionMethod::Simplified => patch_reactions_simplified(kind, w, qa, qb, span_m).0,
            ReactionMethod::Exact => patch_reactions_exact(kind, w, qa, qb, span_m).0,
        };
    }

    Reactions {
        left_n: r1,
        right_n: loads.total_load_n() - r1,
    }
}

/// Uniformly spaced abscissas with exact end points
fn sample_positions(span_m: f64, sample_count: usize) -> Vec<f64> {
    let last = sample_count.saturating_sub(1).max(1) as f64;
    (0..sample_count)
        .map(|i| if i + 1 == sample_count { span_m } else { span_m * i as f64 / last })
        .collect()
}

/// Exact profile for a lone point load
fn closed_form_profile(kind: SupportKind, span_m: f64, ei: f64, load: PointLoad, n: usize) -> ResponseProfile {
    let (p, a) = (load.magnitude_n, load.position_m);
    let params = point_load_initial_parameters(kind, p, a, span_m, ei);
    let x_m = sample_positions(span_m, n);

    let mut profile = ResponseProfile {
        shear_n: Vec::with_capacity(n),
        moment_nm: Vec::with_capacity(n),
        deflection_m: Vec::with_capacity(n),
        x_m,
    };
    for &x in &profile.x_m {
        let (v, m, y) = point_load_response_at(&params, p, a, x, ei);
        profile.shear_n.push(v);
        profile.moment_nm.push(m);
        profile.deflection_m.push(y);
    }
    profile
}

/// Load intensity at each sample (N/m).
///
/// The point load becomes an impulse P/Δx at its nearest sample; the patch
/// adds q at every sample inside [qa, qb].
fn discretize_load(x_m: &[f64], dx: f64, loads: &LoadSet) -> Vec<f64> {
    let mut intensity = vec![0.0; x_m.len()];

    if let Some(p) = &loads.point {
        let index = ((p.position_m / dx).round() as usize).min(x_m.len() - 1);
        log::trace!("point load {} N lumped at sample {} (x={})", p.magnitude_n, index, x_m[index]);
        intensity[index] += p.magnitude_n / dx;
    }
    if let Some(q) = &loads.distributed {
        for (w, &x) in intensity.iter_mut().zip(x_m) {
            if q.covers(x) {
                *w += q.intensity_n_per_m;
            }
        }
    }

    intensity
}

/// Running sum of `values`, scaled by `step`
fn cumulative_integral(values: &[f64], step: f64) -> Vec<f64> {
    values
        .iter()
        .scan(0.0, |acc, v| {
            *acc += v;
            Some(*acc * step)
        })
        .collect()
}

/// Numerically integrated profile starting from the left reaction.
///
/// Samples are `linspace(0, L, n)`, so Δx = L/(n-1) rather than L/n and the
/// last sample sits on the right support.
fn numerical_profile(span_m: f64, ei: f64, loads: &LoadSet, r1: f64, n: usize) -> ResponseProfile {
    let x_m = sample_positions(span_m, n);
    let dx = span_m / (n - 1) as f64;
    let intensity = discretize_load(&x_m, dx, loads);

    let shear_n: Vec<f64> = cumulative_integral(&intensity, dx)
        .into_iter()
        .map(|applied| r1 - applied)
        .collect();
    let moment_nm = cumulative_integral(&shear_n, dx);

    // Double integral of curvature, then remove the chord between the end values
    let slope = cumulative_integral(&moment_nm, 1.0);
    let y_raw: Vec<f64> = cumulative_integral(&slope, 1.0)
        .into_iter()
        .map(|s| s * dx * dx / ei)
        .collect();
    let (y_first, y_last) = (y_raw[0], y_raw[n - 1]);
    let deflection_m: Vec<f64> = x_m
        .iter()
        .zip(&y_raw)
        .map(|(&x, &y)| -(y - (y_first + (y_last - y_first) * x / span_m)))
        .collect();

    ResponseProfile {
        x_m,
        shear_n,
        moment_nm,
        deflection_m,
    }
}

/// Reject deflections that overflowed because EI is vanishingly small
fn require_finite_deflection(ei: f64, deflection_m: &[f64]) -> CalcResult<()> {
    match deflection_m.iter().find(|y| !y.is_finite()) {
        Some(bad) => Err(CalcError::invalid_input(
            "flexural_rigidity",
            ei.to_string(),
            format!("Deflection is not finite ({}); EI is too small", bad),
        )),
        None => Ok(()),
    }
}
