//! # Single-Span Beam Formulas
//!
//! Closed-form equations for a prismatic single span with pinned or fixed
//! ends, under a concentrated load and/or a uniform patch load.
//!
//! ## Notation
//!
//! - `L` = Span length
//! - `x` = Position along beam from left end
//! - `a` = Point load position from left end, `b = L - a`
//! - `P` = Point load magnitude
//! - `q` = Uniform load intensity over `[qa, qb]`
//! - `EI` = Flexural rigidity
//! - `R1` = Left reaction, `R2` = Right reaction
//! - `M0` = Moment at the left end (non-zero only when that end is fixed)
//! - `θ0` = Slope at the left end (zero when that end is fixed)
//!
//! ## Sign Conventions
//!
//! - Loads: Positive downward
//! - Moment: Positive causes tension on bottom (sagging)
//! - Shear: Positive when left side up relative to right
//! - Deflection: Positive downward
//! - Reactions: Positive upward
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1
//! - Structural Analysis by R.C. Hibbeler

use serde::{Deserialize, Serialize};

use crate::supports::SupportKind;

/// Share of a patch load taken by the fixed end of a propped cantilever
/// (full-span exact value is 5/8)
pub const PROPPED_FIXED_END_SHARE: f64 = 0.6;

// =============================================================================
// POINT LOAD REACTIONS
// =============================================================================

/// Reactions for point load P at position a on a simple span L
///
/// ```text
///        P
///        ↓
///    ────┬────────────
///    △   a            △
///   R1  ←───────L────→ R2
/// ```
///
/// # Formulas (Roark's Table 8.1, Case 1a)
/// - R1 = P(L-a)/L
/// - R2 = Pa/L
#[inline]
pub fn point_load_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let r1 = p * (l - a) / l;
    let r2 = p * a / l;
    (r1, r2)
}

/// Reactions for point load P at position a on a fixed-fixed span
///
/// # Formulas (Roark's Table 8.1, Case 1d)
/// - R1 = Pb²(3a+b)/L³
/// - R2 = P - R1
#[inline]
pub fn fixed_fixed_point_reactions(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    let r1 = p * b * b * (3.0 * a + b) / l.powi(3);
    (r1, p - r1)
}

/// End moments for point load P at position a on a fixed-fixed span
///
/// # Formulas
/// - M1 = -Pab²/L²
/// - M2 = -Pa²b/L²
///
/// Both are hogging (negative).
#[inline]
pub fn fixed_fixed_point_end_moments(p: f64, a: f64, l: f64) -> (f64, f64) {
    let b = l - a;
    (-p * a * b * b / (l * l), -p * a * a * b / (l * l))
}

/// Reaction at the pinned end of a propped cantilever
///
/// `d` is the distance from the FIXED end to the load.
///
/// # Formula (Roark's Table 8.1, Case 1c)
/// R_pinned = Pd²(3L-d)/(2L³)
///
/// For a load at midspan this gives 5P/16; the fixed end takes 11P/16.
#[inline]
pub fn propped_point_pinned_reaction(p: f64, d: f64, l: f64) -> f64 {
    p * d * d * (3.0 * l - d) / (2.0 * l.powi(3))
}

/// Left and right reactions for a point load under any support combination
pub fn point_reactions(kind: SupportKind, p: f64, a: f64, l: f64) -> (f64, f64) {
    match kind {
        SupportKind::PinnedPinned => point_load_reactions(p, a, l),
        SupportKind::FixedFixed => fixed_fixed_point_reactions(p, a, l),
        SupportKind::FixedPinned => {
            let r2 = propped_point_pinned_reaction(p, a, l);
            (p - r2, r2)
        }
        SupportKind::PinnedFixed => {
            // R1 = Pb²(3L-b)/(2L³), b measured to the fixed right end
            let r1 = propped_point_pinned_reaction(p, l - a, l);
            (r1, p - r1)
        }
    }
}

// =============================================================================
// UNIFORM PATCH LOAD REACTIONS
// =============================================================================

/// Reactions for partial uniform load q from qa to qb on a simple span
///
/// # Formulas
/// Total load W = q(qb-qa), centroid at c = (qa+qb)/2
/// - R1 = W(L-c)/L
/// - R2 = Wc/L
#[inline]
pub fn partial_uniform_reactions(q: f64, qa: f64, qb: f64, l: f64) -> (f64, f64) {
    let total_load = q * (qb - qa);
    let centroid = (qa + qb) / 2.0;
    let r1 = total_load * (l - centroid) / l;
    (r1, total_load - r1)
}

/// Patch load reactions using fixed shares per support combination.
///
/// Exact for pinned-pinned (any patch) and fixed-fixed (full span only).
/// Propped cantilevers use a constant 0.6 / 0.4 split regardless of patch
/// position, which is close to the full-span 5/8 / 3/8 split but not exact.
pub fn patch_reactions_simplified(kind: SupportKind, q: f64, qa: f64, qb: f64, l: f64) -> (f64, f64) {
    let w = q * (qb - qa);
    let r1 = match kind {
        SupportKind::PinnedPinned => return partial_uniform_reactions(q, qa, qb, l),
        SupportKind::FixedFixed => w / 2.0,
        SupportKind::FixedPinned => PROPPED_FIXED_END_SHARE * w,
        SupportKind::PinnedFixed => (1.0 - PROPPED_FIXED_END_SHARE) * w,
    };
    (r1, w - r1)
}

/// Patch load reactions from the exact indeterminate solution.
///
/// Integrates the unit point-load left reaction over the patch. That
/// influence line is a cubic in the load position, so three-point Simpson
/// quadrature is exact.
pub fn patch_reactions_exact(kind: SupportKind, q: f64, qa: f64, qb: f64, l: f64) -> (f64, f64) {
    let w = q * (qb - qa);
    let unit_r1 = |x: f64| point_reactions(kind, 1.0, x, l).0;
    let mid = (qa + qb) / 2.0;
    let r1 = w / 6.0 * (unit_r1(qa) + 4.0 * unit_r1(mid) + unit_r1(qb));
    (r1, w - r1)
}

// =============================================================================
// EXACT POINT LOAD PROFILE (METHOD OF INITIAL PARAMETERS)
// =============================================================================

/// State at the left end that fixes the whole point-load solution.
///
/// With the left-end shear `R1`, moment `M0` and slope `θ0` known (and
/// zero left-end deflection), the beam equation integrates in closed form:
///
/// ```text
/// V(x) = R1 - P·H(x-a)
/// M(x) = M0 + R1·x - P⟨x-a⟩
/// EI·y_up(x) = EI·θ0·x + M0·x²/2 + R1·x³/6 - P⟨x-a⟩³/6
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InitialParameters {
    /// Left reaction R1 (N)
    pub shear: f64,
    /// Left end moment M0 (N·m)
    pub moment: f64,
    /// Left end slope θ0 (rad, positive counterclockwise)
    pub slope: f64,
}

/// Left-end parameters for point load P at position a.
///
/// Fixed left ends have θ0 = 0 and M0 from the statics of the right end.
/// Pinned left ends have M0 = 0 and θ0 chosen so that y(L) = 0.
pub fn point_load_initial_parameters(kind: SupportKind, p: f64, a: f64, l: f64, ei: f64) -> InitialParameters {
    let b = l - a;
    let (r1, _) = point_reactions(kind, p, a, l);
    match kind {
        SupportKind::FixedFixed => InitialParameters {
            shear: r1,
            moment: fixed_fixed_point_end_moments(p, a, l).0,
            slope: 0.0,
        },
        SupportKind::FixedPinned => InitialParameters {
            shear: r1,
            // M(L) = M0 + R1·L - P·b = 0
            moment: p * b - r1 * l,
            slope: 0.0,
        },
        SupportKind::PinnedPinned | SupportKind::PinnedFixed => {
            let slope = -(r1 * l.powi(3) / 6.0 - p * b.powi(3) / 6.0) / (ei * l);
            InitialParameters {
                shear: r1,
                moment: 0.0,
                slope,
            }
        }
    }
}

/// Shear, moment and downward deflection at x for point load P at a.
///
/// Left of the load (x < a) the shear is R1; at and beyond it, R1 - P.
pub fn point_load_response_at(params: &InitialParameters, p: f64, a: f64, x: f64, ei: f64) -> (f64, f64, f64) {
    let past = (x - a).max(0.0);
    let shear = if x < a { params.shear } else { params.shear - p };
    let moment = params.moment + params.shear * x - p * past;
    let y_up = params.slope * x
        + (params.moment * x * x / 2.0 + params.shear * x.powi(3) / 6.0 - p * past.powi(3) / 6.0) / ei;
    (shear, moment, -y_up)
}

// =============================================================================
// MIDSPAN POINT LOAD REFERENCE VALUES
// =============================================================================

/// Closed-form reference values for a single point load at midspan.
///
/// | Supports       | R1, R2         | M_max   | y_max          |
/// |----------------|----------------|---------|----------------|
/// | Pinned-Pinned  | P/2, P/2       | PL/4    | PL³/48EI       |
/// | Fixed-Fixed    | P/2, P/2       | PL/8    | PL³/192EI      |
/// | Propped        | 11P/16, 5P/16  | 3PL/16  | 7PL³/768EI     |
///
/// The propped M_max is the fixed-end moment; y_max is the deflection under the load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MidspanReference {
    /// Left reaction (N)
    pub reaction_left_n: f64,
    /// Right reaction (N)
    pub reaction_right_n: f64,
    /// Maximum moment magnitude (N·m)
    pub max_moment_nm: f64,
    /// Deflection under the load (m, downward)
    pub max_deflection_m: f64,
    /// Shear formula label (e.g., "P/2")
    pub shear_formula: String,
    /// Moment formula label (e.g., "PL/4")
    pub moment_formula: String,
    /// Deflection formula label (e.g., "PL^3 / 48EI")
    pub deflection_formula: String,
}

/// Reference values for point load P at midspan of span L
pub fn midspan_reference(kind: SupportKind, p: f64, l: f64, ei: f64) -> MidspanReference {
    let (r1, r2, m, y, f_v, f_m, f_y) = match kind {
        SupportKind::PinnedPinned => (
            p / 2.0,
            p / 2.0,
            p * l / 4.0,
            p * l.powi(3) / (48.0 * ei),
            "P/2",
            "PL/4",
            "PL^3 / 48EI",
        ),
        SupportKind::FixedFixed => (
            p / 2.0,
            p / 2.0,
            p * l / 8.0,
            p * l.powi(3) / (192.0 * ei),
            "P/2",
            "PL/8",
            "PL^3 / 192EI",
        ),
        SupportKind::FixedPinned | SupportKind::PinnedFixed => {
            let fixed = 11.0 * p / 16.0;
            let pinned = 5.0 * p / 16.0;
            let (r1, r2) = if kind == SupportKind::FixedPinned {
                (fixed, pinned)
            } else {
                (pinned, fixed)
            };
            (
                r1,
                r2,
                3.0 * p * l / 16.0,
                7.0 * p * l.powi(3) / (768.0 * ei),
                "11P/16",
                "3PL/16",
                "7PL^3 / 768EI",
            )
        }
    };

    MidspanReference {
        reaction_left_n: r1,
        reaction_right_n: r2,
        max_moment_nm: m,
        max_deflection_m: y,
        shear_formula: f_v.to_string(),
        moment_formula: f_m.to_string(),
        deflection_formula: f_y.to_string(),
    }
}

// =============================================================================
// UNIT TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    const EI: f64 = 210e9 * 5696e-8;
    const ALL_KINDS: [SupportKind; 4] = [
        SupportKind::PinnedPinned,
        SupportKind::FixedFixed,
        SupportKind::FixedPinned,
        SupportKind::PinnedFixed,
    ];

    #[test]
    fn test_point_load_asymmetric_reactions() {
        // 10 m beam, 1000 N at 3 m from left
        let (r1, r2) = point_load_reactions(1000.0, 3.0, 10.0);
        assert_relative_eq!(r1, 700.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fixed_fixed_point_reactions() {
        let (r1, r2) = fixed_fixed_point_reactions(1000.0, 5.0, 10.0);
        assert_relative_eq!(r1, 500.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 500.0, max_relative = 1e-12);

        // a = 2.5, b = 7.5: R1 = P·56.25·15/1000
        let (r1, _) = fixed_fixed_point_reactions(1000.0, 2.5, 10.0);
        assert_relative_eq!(r1, 843.75, max_relative = 1e-12);
    }

    #[test]
    fn test_propped_midspan_reactions() {
        let (r1, r2) = point_reactions(SupportKind::FixedPinned, 16.0, 3.0, 6.0);
        assert_relative_eq!(r1, 11.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 5.0, max_relative = 1e-12);

        let (r1, r2) = point_reactions(SupportKind::PinnedFixed, 16.0, 3.0, 6.0);
        assert_relative_eq!(r1, 5.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 11.0, max_relative = 1e-12);
    }

    #[test]
    fn test_point_reactions_sum_to_load() {
        for kind in ALL_KINDS {
            for a in [0.0, 1.3, 3.0, 5.9, 6.0] {
                let (r1, r2) = point_reactions(kind, 1234.0, a, 6.0);
                assert_relative_eq!(r1 + r2, 1234.0, max_relative = 1e-12);
            }
        }
    }

    #[test]
    fn test_partial_uniform_symmetric() {
        let (r1, r2) = partial_uniform_reactions(100.0, 2.0, 8.0, 10.0);
        assert_relative_eq!(r1, 300.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 300.0, max_relative = 1e-12);
    }

    #[test]
    fn test_simplified_patch_shares() {
        let (r1, r2) = patch_reactions_simplified(SupportKind::FixedPinned, 10.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(r1, 60.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 40.0, max_relative = 1e-12);

        let (r1, _) = patch_reactions_simplified(SupportKind::PinnedFixed, 10.0, 0.0, 10.0, 10.0);
        assert_relative_eq!(r1, 40.0, max_relative = 1e-12);

        // Fixed-fixed splits evenly even for an off-center patch
        let (r1, r2) = patch_reactions_simplified(SupportKind::FixedFixed, 10.0, 0.0, 2.0, 10.0);
        assert_relative_eq!(r1, 10.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 10.0, max_relative = 1e-12);
    }

    #[test]
    fn test_exact_patch_full_span() {
        let (w, l) = (10.0, 8.0);
        let (r1, r2) = patch_reactions_exact(SupportKind::FixedFixed, w, 0.0, l, l);
        assert_relative_eq!(r1, w * l / 2.0, max_relative = 1e-12);
        assert_relative_eq!(r2, w * l / 2.0, max_relative = 1e-12);

        let (r1, r2) = patch_reactions_exact(SupportKind::FixedPinned, w, 0.0, l, l);
        assert_relative_eq!(r1, 5.0 * w * l / 8.0, max_relative = 1e-12);
        assert_relative_eq!(r2, 3.0 * w * l / 8.0, max_relative = 1e-12);

        let (r1, _) = patch_reactions_exact(SupportKind::PinnedFixed, w, 0.0, l, l);
        assert_relative_eq!(r1, 3.0 * w * l / 8.0, max_relative = 1e-12);
    }

    #[test]
    fn test_exact_patch_matches_simple_beam_statics() {
        let exact = patch_reactions_exact(SupportKind::PinnedPinned, 100.0, 2.0, 5.0, 10.0);
        let statics = partial_uniform_reactions(100.0, 2.0, 5.0, 10.0);
        assert_relative_eq!(exact.0, statics.0, max_relative = 1e-12);
        assert_relative_eq!(exact.1, statics.1, max_relative = 1e-12);
    }

    #[test]
    fn test_closed_form_matches_simple_beam_midspan_expressions() {
        // y = Px(3L² - 4x²)/48EI and M = Px/2 for x ≤ L/2
        let (p, l) = (100_000.0, 6.0);
        let params = point_load_initial_parameters(SupportKind::PinnedPinned, p, l / 2.0, l, EI);
        for x in [0.0, 0.7, 1.5, 2.9, 3.0] {
            let (v, m, y) = point_load_response_at(&params, p, l / 2.0, x, EI);
            let expected_y = p * x * (3.0 * l * l - 4.0 * x * x) / (48.0 * EI);
            assert_relative_eq!(m, p * x / 2.0, epsilon = 1e-6);
            assert_relative_eq!(y, expected_y, epsilon = 1e-12);
            if x < l / 2.0 {
                assert_relative_eq!(v, p / 2.0);
            }
        }
    }

    #[test]
    fn test_closed_form_matches_fixed_fixed_midspan_expressions() {
        // M = P/8(4x - L), y = Px²(3L - 4x)/48EI for x ≤ L/2
        let (p, l) = (100_000.0, 6.0);
        let params = point_load_initial_parameters(SupportKind::FixedFixed, p, l / 2.0, l, EI);
        for x in [0.0, 1.0, 2.2, 3.0] {
            let (_, m, y) = point_load_response_at(&params, p, l / 2.0, x, EI);
            assert_relative_eq!(m, p / 8.0 * (4.0 * x - l), epsilon = 1e-6);
            assert_relative_eq!(y, p * x * x * (3.0 * l - 4.0 * x) / (48.0 * EI), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_closed_form_matches_propped_midspan_expressions() {
        // Fixed left: M = P/16(11x - 3L), y = Px²(9L - 11x)/96EI for x ≤ L/2
        //             M = 5P/16(L - x),   y = P(L-x)(3L² - 5(L-x)²)/96EI beyond
        let (p, l) = (100_000.0, 6.0);
        let params = point_load_initial_parameters(SupportKind::FixedPinned, p, l / 2.0, l, EI);
        for x in [0.0, 1.0, 3.0] {
            let (_, m, y) = point_load_response_at(&params, p, l / 2.0, x, EI);
            assert_relative_eq!(m, p / 16.0 * (11.0 * x - 3.0 * l), epsilon = 1e-6);
            assert_relative_eq!(y, p * x * x * (9.0 * l - 11.0 * x) / (96.0 * EI), epsilon = 1e-12);
        }
        for x in [3.5, 4.8, 6.0] {
            let (_, m, y) = point_load_response_at(&params, p, l / 2.0, x, EI);
            let r = l - x;
            assert_relative_eq!(m, 5.0 * p / 16.0 * r, epsilon = 1e-6);
            assert_relative_eq!(y, p * r * (3.0 * l * l - 5.0 * r * r) / (96.0 * EI), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_closed_form_boundary_conditions_off_center() {
        let (p, a, l) = (50_000.0, 1.7, 6.0);
        for kind in ALL_KINDS {
            let params = point_load_initial_parameters(kind, p, a, l, EI);
            let (_, m_end, y_end) = point_load_response_at(&params, p, a, l, EI);
            let (_, _, y_start) = point_load_response_at(&params, p, a, 0.0, EI);
            assert_abs_diff_eq!(y_start, 0.0, epsilon = 1e-15);
            assert_abs_diff_eq!(y_end, 0.0, epsilon = 1e-12);
            if kind == SupportKind::PinnedPinned || kind == SupportKind::FixedPinned {
                assert_abs_diff_eq!(m_end, 0.0, epsilon = 1e-6);
            }
            if kind == SupportKind::PinnedFixed || kind == SupportKind::FixedFixed {
                // Zero slope at the fixed right end
                let h = 1e-6;
                let (_, _, y_h) = point_load_response_at(&params, p, a, l - h, EI);
                assert_abs_diff_eq!(y_h / h, 0.0, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn test_midspan_reference_values() {
        let (p, l) = (100_000.0, 6.0);
        let pp = midspan_reference(SupportKind::PinnedPinned, p, l, EI);
        assert_relative_eq!(pp.max_moment_nm, 150_000.0, max_relative = 1e-12);
        assert_relative_eq!(pp.max_deflection_m, p * l.powi(3) / (48.0 * EI), max_relative = 1e-12);
        assert_eq!(pp.moment_formula, "PL/4");

        let ff = midspan_reference(SupportKind::FixedFixed, p, l, EI);
        assert_relative_eq!(ff.max_moment_nm, 75_000.0, max_relative = 1e-12);
        assert_eq!(ff.deflection_formula, "PL^3 / 192EI");

        let fp = midspan_reference(SupportKind::PinnedFixed, p, l, EI);
        assert_relative_eq!(fp.reaction_left_n, 5.0 * p / 16.0, max_relative = 1e-12);
        assert_relative_eq!(fp.reaction_right_n, 11.0 * p / 16.0, max_relative = 1e-12);
        assert_relative_eq!(fp.max_moment_nm, 3.0 * p * l / 16.0, max_relative = 1e-12);
    }
}
