//! Evaluated scenarios and the side-by-side comparison view.

use serde::{Deserialize, Serialize};

use rotation_core::{CalculationInput, CalculationResult, CapacityStatus};

use crate::scenario::{Scenario, ScenarioId};

/// A scenario together with its computed metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEvaluation {
    /// Scenario id.
    pub id: ScenarioId,
    /// Scenario name.
    pub name: String,
    /// The input that was evaluated.
    pub input: CalculationInput,
    /// Calculator output.
    pub result: CalculationResult,
}

impl ScenarioEvaluation {
    /// Pairs a scenario with its result.
    #[must_use]
    pub fn new(scenario: &Scenario, result: CalculationResult) -> Self {
        Self {
            id: scenario.id,
            name: scenario.name.clone(),
            input: scenario.input,
            result,
        }
    }

    /// Condenses the evaluation into a comparison row.
    #[must_use]
    pub fn to_row(&self) -> ComparisonRow {
        ComparisonRow {
            name: self.name.clone(),
            capacity: self.result.total_capacity,
            target: self.input.target_dishes,
            gap: self.result.gap,
            active_base: self.result.total_active_base(),
            status: self.result.status(),
        }
    }
}

/// One line of the capacity-versus-target comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Scenario name.
    pub name: String,
    /// Total capacity in dishes per day.
    pub capacity: f64,
    /// Target dishes per day.
    pub target: f64,
    /// `capacity - target`.
    pub gap: f64,
    /// Local plus tourist active base.
    pub active_base: f64,
    /// Surplus, on target or shortfall.
    pub status: CapacityStatus,
}

/// Returns the evaluation with the largest gap; the first one wins ties.
#[must_use]
pub fn best_by_gap(evaluations: &[ScenarioEvaluation]) -> Option<&ScenarioEvaluation> {
    evaluations.iter().fold(None, |best, e| match best {
        Some(b) if b.result.gap >= e.result.gap => Some(b),
        _ => Some(e),
    })
}
