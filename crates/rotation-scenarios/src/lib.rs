//! # Rotation Scenarios
//!
//! Scenario comparison for restaurant customer rotation planning.
//!
//! A [`ScenarioSet`] is an ordered list of named [`CalculationInput`]s.
//! Each scenario is evaluated independently through the rotation
//! calculator, so evaluations may run in any order or in parallel; results
//! always come back in scenario order.
//!
//! ## Quick Start
//!
//! ```rust
//! use rotation_scenarios::prelude::*;
//! use rotation_core::InputField;
//!
//! let mut set = ScenarioSet::new();
//! let baseline = set.scenarios()[0].id;
//! let copy = set.duplicate(baseline)?;
//! set.update(copy, InputField::LocalCustomers, 400.0)?;
//!
//! for row in set.compare(&EvaluationConfig::default()) {
//!     println!("{}: {} / {} ({})", row.name, row.capacity, row.target, row.status);
//! }
//! # Ok::<(), rotation_scenarios::ScenarioError>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel evaluation for large sets
//!
//! [`CalculationInput`]: rotation_core::CalculationInput

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod comparison;
pub mod config;
pub mod error;
pub mod parallel;
pub mod scenario;
pub mod set;

// Re-export error types at crate root
pub use error::{ScenarioError, ScenarioResult};

pub use comparison::{ComparisonRow, ScenarioEvaluation};
pub use config::EvaluationConfig;
pub use scenario::{Scenario, ScenarioId};
pub use set::ScenarioSet;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::comparison::{best_by_gap, ComparisonRow, ScenarioEvaluation};
    pub use crate::config::EvaluationConfig;
    pub use crate::error::{ScenarioError, ScenarioResult};
    pub use crate::scenario::{Scenario, ScenarioId};
    pub use crate::set::{ScenarioSet, BASELINE_NAME};
}
