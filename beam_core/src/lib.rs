//! # beam_core - Single-Span Beam Statics Engine
//!
//! `beam_core` computes support reactions and shear, moment and deflection
//! profiles for a prismatic single-span beam. All inputs and outputs are
//! JSON-serializable, so results can be stored or handed to other tools as-is.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **SI Internally**: Newtons, metres and pascals; kN/mm only for display
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::calculations::analyze;
//! use beam_core::scenario::BeamScenario;
//!
//! // HEB200, 6 m, pinned both ends, 100 kN at midspan
//! let scenario = BeamScenario::default();
//! let result = analyze(&scenario).unwrap();
//!
//! assert!((result.reactions.left_n - 50_000.0).abs() < 1e-6);
//! let json = serde_json::to_string_pretty(&result).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The statics solver
//! - [`equations`] - Closed-form beam formulas
//! - [`loads`] - Point and patch loads
//! - [`sections`] - Section stiffness and the steel catalog
//! - [`supports`] - End support conditions
//! - [`settings`] - Solver settings
//! - [`scenario`] - Complete analysis requests
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types
//! - [`file_io`] - JSON files with atomic saves

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod file_io;
pub mod loads;
pub mod scenario;
pub mod sections;
pub mod settings;
pub mod supports;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{analyze, solve, solve_with, Reactions, ResponseProfile, ResponseSummary, StaticsResult};
pub use errors::{CalcError, CalcResult};
pub use file_io::{load_json, save_json};
pub use loads::{DistributedLoad, LoadSet, PointLoad};
pub use scenario::{BeamScenario, SectionSpec};
pub use sections::{section_catalog, SectionProperties, SteelSection};
pub use settings::{AnalysisSettings, ProfileMethod, ReactionMethod};
pub use supports::{SupportCondition, SupportConfiguration, SupportKind};
