//! # Structural Engineering Equations
//!
//! Closed-form beam mechanics used by the statics solver. Keeping the
//! formulas in one place makes them easy to check against references and
//! documents the sign conventions once.
//!
//! ## Modules
//!
//! - [`beam`] - Reactions, point-load profiles and midspan reference values
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Shear**: Positive when left side moves up relative to right
//! - **Deflection**: Positive downward
//! - **Reactions**: Positive upward (resisting gravity)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition

pub mod beam;

pub use beam::{
    fixed_fixed_point_end_moments,
    fixed_fixed_point_reactions,
    midspan_reference,
    partial_uniform_reactions,
    patch_reactions_exact,
    patch_reactions_simplified,
    point_load_initial_parameters,
    point_load_reactions,
    point_load_response_at,
    point_reactions,
    propped_point_pinned_reaction,
    InitialParameters,
    MidspanReference,
};
