//! # Structural Calculations
//!
//! Each calculation follows the pattern:
//!
//! - an input description (JSON-serializable)
//! - a `*Result` with everything computed (JSON-serializable)
//! - a pure function returning `Result<*Result, CalcError>`
//!
//! ## Available Calculations
//!
//! - [`statics`] - Single-span beam reactions and shear/moment/deflection profiles

pub mod statics;

// Re-export commonly used types
pub use statics::{
    analyze, compute_reactions, solve, solve_with, ProfileSource, Reactions, ResponseProfile, ResponseSummary,
    StaticsResult,
};
