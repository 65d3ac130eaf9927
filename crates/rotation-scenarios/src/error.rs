//! Error types for scenario management.

use rotation_core::RotationError;
use thiserror::Error;

use crate::scenario::ScenarioId;

/// Result type for scenario operations.
pub type ScenarioResult<T> = Result<T, ScenarioError>;

/// Errors that can occur while managing or evaluating scenarios.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScenarioError {
    /// No scenario with the given id.
    #[error("Scenario not found: {id}")]
    ScenarioNotFound {
        /// The id that failed to resolve.
        id: ScenarioId,
    },

    /// The last remaining scenario cannot be removed.
    #[error("Cannot remove '{name}': at least one scenario must remain")]
    LastScenario {
        /// Name of the scenario that was kept.
        name: String,
    },

    /// A scenario set was built from an empty list.
    #[error("Scenario set has no scenarios")]
    EmptyScenarioSet,

    /// A scenario's input violates the calculator's domain.
    #[error("Invalid scenario '{name}': {source}")]
    InvalidScenario {
        /// Name of the offending scenario.
        name: String,
        /// The underlying validation failure.
        #[source]
        source: RotationError,
    },
}

impl ScenarioError {
    /// Create a not found error.
    #[must_use]
    pub fn not_found(id: ScenarioId) -> Self {
        Self::ScenarioNotFound { id }
    }

    /// Create an invalid scenario error.
    #[must_use]
    pub fn invalid(name: impl Into<String>, source: RotationError) -> Self {
        Self::InvalidScenario {
            name: name.into(),
            source,
        }
    }
}
