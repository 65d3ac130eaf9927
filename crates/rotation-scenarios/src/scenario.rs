//! A single named parameter set.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use rotation_core::{CalculationInput, InputField};

/// Opaque scenario identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioId(Uuid);

impl ScenarioId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ScenarioId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named set of calculator inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// Unique id within its set.
    pub id: ScenarioId,
    /// Display name.
    pub name: String,
    /// Calculator input for this scenario.
    pub input: CalculationInput,
}

impl Scenario {
    /// Creates a scenario with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, input: CalculationInput) -> Self {
        Self {
            id: ScenarioId::new(),
            name: name.into(),
            input,
        }
    }

    /// Creates a scenario holding the default preset.
    #[must_use]
    pub fn with_defaults(name: impl Into<String>) -> Self {
        Self::new(name, CalculationInput::default())
    }

    /// Returns a copy with a fresh id and `" (copy)"` appended to the name.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self::new(format!("{} (copy)", self.name), self.input)
    }

    /// Sets one input field.
    pub fn update(&mut self, field: InputField, value: f64) {
        self.input.set(field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_gets_new_id() {
        let original = Scenario::with_defaults("Current");
        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.name, "Current (copy)");
        assert_eq!(copy.input, original.input);
    }

    #[test]
    fn test_update() {
        let mut s = Scenario::with_defaults("High season");
        s.update(InputField::TouristCustomers, 400.0);
        assert_eq!(s.input.tourist_customers, 400.0);
    }

    #[test]
    fn test_id_serializes_as_uuid() {
        let id = ScenarioId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id.as_uuid()));
    }
}
