//! Ordered, never-empty collection of scenarios.

use serde::Serialize;
use tracing::debug;

use rotation_core::{compute, try_compute, CalculationInput, InputField};

use crate::comparison::{best_by_gap, ComparisonRow, ScenarioEvaluation};
use crate::config::EvaluationConfig;
use crate::error::{ScenarioError, ScenarioResult};
use crate::parallel::{maybe_parallel_map, maybe_parallel_try_map};
use crate::scenario::{Scenario, ScenarioId};

/// Name given to the baseline scenario.
pub const BASELINE_NAME: &str = "Current";

/// An ordered list of named scenarios.
///
/// A set always holds at least one scenario. Insertion order is display
/// order and is preserved by every evaluation.
///
/// # Example
///
/// ```rust
/// use rotation_scenarios::prelude::*;
/// use rotation_core::InputField;
///
/// let mut set = ScenarioSet::new();
/// let id = set.add();
/// set.update(id, InputField::WalkInDaily, 60.0).unwrap();
///
/// let rows = set.compare(&EvaluationConfig::default());
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[1].name, "Scenario 2");
/// assert!(rows[1].capacity > rows[0].capacity);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioSet {
    /// Creates a set holding one baseline scenario with the default preset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scenarios: vec![Scenario::with_defaults(BASELINE_NAME)],
        }
    }

    /// Builds a set from existing scenarios.
    pub fn from_scenarios(scenarios: Vec<Scenario>) -> ScenarioResult<Self> {
        if scenarios.is_empty() {
            return Err(ScenarioError::EmptyScenarioSet);
        }
        Ok(Self { scenarios })
    }

    /// Number of scenarios.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    /// Always false: a set cannot be emptied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Scenarios in order.
    #[must_use]
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    /// Iterates over scenarios in order.
    pub fn iter(&self) -> impl Iterator<Item = &Scenario> {
        self.scenarios.iter()
    }

    /// Looks up a scenario by id.
    #[must_use]
    pub fn get(&self, id: ScenarioId) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    /// Looks up a scenario by name; the first match wins.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<&Scenario> {
        self.scenarios.iter().find(|s| s.name == name)
    }

    fn get_mut(&mut self, id: ScenarioId) -> ScenarioResult<&mut Scenario> {
        self.scenarios
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ScenarioError::not_found(id))
    }

    /// Appends `"Scenario N"` with the default preset, N being the new length.
    pub fn add(&mut self) -> ScenarioId {
        let name = format!("Scenario {}", self.scenarios.len() + 1);
        self.add_named(name, CalculationInput::default())
    }

    /// Appends a named scenario.
    pub fn add_named(&mut self, name: impl Into<String>, input: CalculationInput) -> ScenarioId {
        let scenario = Scenario::new(name, input);
        let id = scenario.id;
        debug!(%id, name = %scenario.name, "scenario added");
        self.scenarios.push(scenario);
        id
    }

    /// Appends a copy of an existing scenario named `"<name> (copy)"`.
    pub fn duplicate(&mut self, id: ScenarioId) -> ScenarioResult<ScenarioId> {
        let copy = self
            .get(id)
            .ok_or_else(|| ScenarioError::not_found(id))?
            .duplicate();
        let new_id = copy.id;
        debug!(source = %id, %new_id, "scenario duplicated");
        self.scenarios.push(copy);
        Ok(new_id)
    }

    /// Removes a scenario. The last remaining scenario cannot be removed.
    pub fn remove(&mut self, id: ScenarioId) -> ScenarioResult<Scenario> {
        let index = self
            .scenarios
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| ScenarioError::not_found(id))?;
        if self.scenarios.len() == 1 {
            return Err(ScenarioError::LastScenario {
                name: self.scenarios[index].name.clone(),
            });
        }
        Ok(self.scenarios.remove(index))
    }

    /// Sets one input field of a scenario.
    pub fn update(&mut self, id: ScenarioId, field: InputField, value: f64) -> ScenarioResult<()> {
        self.get_mut(id)?.update(field, value);
        Ok(())
    }

    /// Renames a scenario.
    pub fn rename(&mut self, id: ScenarioId, name: impl Into<String>) -> ScenarioResult<()> {
        self.get_mut(id)?.name = name.into();
        Ok(())
    }

    /// Restores the default preset on one scenario.
    pub fn reset(&mut self, id: ScenarioId) -> ScenarioResult<()> {
        self.get_mut(id)?.input = CalculationInput::default();
        Ok(())
    }

    /// Evaluates every scenario, in order, without validating inputs.
    #[must_use]
    pub fn evaluate(&self, config: &EvaluationConfig) -> Vec<ScenarioEvaluation> {
        debug!(count = self.scenarios.len(), "evaluating scenarios");
        maybe_parallel_map(&self.scenarios, config, |s| {
            ScenarioEvaluation::new(s, compute(&s.input))
        })
    }

    /// Validates and evaluates every scenario, failing on the first invalid one.
    pub fn try_evaluate(&self, config: &EvaluationConfig) -> ScenarioResult<Vec<ScenarioEvaluation>> {
        debug!(count = self.scenarios.len(), "evaluating scenarios with validation");
        maybe_parallel_try_map(&self.scenarios, config, |s| {
            try_compute(&s.input)
                .map(|r| ScenarioEvaluation::new(s, r))
                .map_err(|e| ScenarioError::invalid(s.name.clone(), e))
        })
    }

    /// Capacity-versus-target rows, one per scenario, in order.
    #[must_use]
    pub fn compare(&self, config: &EvaluationConfig) -> Vec<ComparisonRow> {
        self.evaluate(config)
            .iter()
            .map(ScenarioEvaluation::to_row)
            .collect()
    }

    /// The scenario with the largest gap; the earliest wins ties.
    #[must_use]
    pub fn best_by_gap(&self, config: &EvaluationConfig) -> Option<ScenarioEvaluation> {
        best_by_gap(&self.evaluate(config)).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_baseline() {
        let set = ScenarioSet::new();
        assert_eq!(set.len(), 1);
        assert_eq!(set.scenarios()[0].name, BASELINE_NAME);
        assert_eq!(set.scenarios()[0].input, CalculationInput::default());
    }

    #[test]
    fn test_add_names_by_position() {
        let mut set = ScenarioSet::new();
        set.add();
        set.add();
        let names: Vec<_> = set.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Current", "Scenario 2", "Scenario 3"]);
    }

    #[test]
    fn test_duplicate() {
        let mut set = ScenarioSet::new();
        let base = set.scenarios()[0].id;
        set.update(base, InputField::TargetDishes, 300.0).unwrap();
        let copy = set.duplicate(base).unwrap();
        let copy = set.get(copy).unwrap();
        assert_eq!(copy.name, "Current (copy)");
        assert_eq!(copy.input.target_dishes, 300.0);
    }

    #[test]
    fn test_remove_keeps_last() {
        let mut set = ScenarioSet::new();
        let base = set.scenarios()[0].id;
        let extra = set.add();

        assert!(matches!(
            set.remove(ScenarioId::new()),
            Err(ScenarioError::ScenarioNotFound { .. })
        ));
        assert_eq!(set.remove(base).unwrap().name, "Current");
        assert!(matches!(
            set.remove(extra),
            Err(ScenarioError::LastScenario { .. })
        ));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_from_empty_fails() {
        assert_eq!(
            ScenarioSet::from_scenarios(Vec::new()).unwrap_err(),
            ScenarioError::EmptyScenarioSet
        );
    }

    #[test]
    fn test_reset_and_rename() {
        let mut set = ScenarioSet::new();
        let id = set.scenarios()[0].id;
        set.update(id, InputField::NoShowRate, 40.0).unwrap();
        set.rename(id, "Baseline").unwrap();
        set.reset(id).unwrap();
        let s = set.get(id).unwrap();
        assert_eq!(s.name, "Baseline");
        assert_eq!(s.input, CalculationInput::default());
    }

    #[test]
    fn test_try_evaluate_names_invalid_scenario() {
        let mut set = ScenarioSet::new();
        let id = set.add();
        set.rename(id, "Broken").unwrap();
        set.update(id, InputField::TouristFrequency, 0.0).unwrap();

        let err = set.try_evaluate(&EvaluationConfig::sequential()).unwrap_err();
        assert!(matches!(err, ScenarioError::InvalidScenario { ref name, .. } if name == "Broken"));

        // unchecked evaluation still computes every scenario
        assert_eq!(set.evaluate(&EvaluationConfig::sequential()).len(), 2);
    }
}
