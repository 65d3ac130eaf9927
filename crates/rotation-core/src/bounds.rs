//! Control ranges for input fields.
//!
//! Every field an operator can edit has a slider range. Values entered as
//! text are clamped to that range before they reach the calculator, which
//! is where the calculator's domain constraints are enforced in practice.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{CalculationInput, InputField};

/// Unit shown next to an input control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    /// Head count.
    People,
    /// Calendar days.
    Days,
    /// Dishes.
    Dishes,
    /// Percentage points.
    Percent,
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Unit::People => "people",
            Unit::Days => "days",
            Unit::Dishes => "dishes",
            Unit::Percent => "%",
        };
        write!(f, "{name}")
    }
}

/// Range, step and unit of one input control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldBounds {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Slider increment.
    pub step: f64,
    /// Display unit.
    pub unit: Unit,
}

impl FieldBounds {
    /// Creates bounds with the given range, step and unit.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64, unit: Unit) -> Self {
        Self {
            min,
            max,
            step,
            unit,
        }
    }

    /// Returns true if `value` lies within `[min, max]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Pulls a value into range. NaN and values below `min` become `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() || value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Rounds to the nearest slider step from `min`, then clamps.
    #[must_use]
    pub fn snap(&self, value: f64) -> f64 {
        if self.step <= 0.0 || value.is_nan() {
            return self.clamp(value);
        }
        let steps = ((value - self.min) / self.step).round();
        self.clamp(self.min + steps * self.step)
    }
}

/// Bounds for every input field.
#[derive(Debug, Clone, PartialEq)]
pub struct InputBounds {
    bounds: [FieldBounds; 11],
}

impl Default for InputBounds {
    /// The ranges of the planning tool's sliders. Every slider steps by one.
    fn default() -> Self {
        Self {
            bounds: [
                FieldBounds::new(0.0, 10_000.0, 1.0, Unit::People),
                FieldBounds::new(0.0, 10_000.0, 1.0, Unit::People),
                FieldBounds::new(1.0, 30.0, 1.0, Unit::Days),
                FieldBounds::new(7.0, 90.0, 1.0, Unit::Days),
                FieldBounds::new(50.0, 500.0, 1.0, Unit::Dishes),
                FieldBounds::new(1.0, 8.0, 1.0, Unit::People),
                FieldBounds::new(1.0, 5.0, 1.0, Unit::Dishes),
                FieldBounds::new(0.0, 100.0, 1.0, Unit::People),
                FieldBounds::new(50.0, 100.0, 1.0, Unit::Percent),
                FieldBounds::new(50.0, 100.0, 1.0, Unit::Percent),
                FieldBounds::new(0.0, 50.0, 1.0, Unit::Percent),
            ],
        }
    }
}

impl InputBounds {
    /// Creates the default slider bounds.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounds of one field.
    #[must_use]
    pub fn get(&self, field: InputField) -> FieldBounds {
        self.bounds[index(field)]
    }

    /// Replaces the bounds of one field.
    pub fn set(&mut self, field: InputField, bounds: FieldBounds) {
        self.bounds[index(field)] = bounds;
    }

    /// Clamps a single value for a field.
    #[must_use]
    pub fn clamp(&self, field: InputField, value: f64) -> f64 {
        self.get(field).clamp(value)
    }

    /// Clamps every field of an input.
    #[must_use]
    pub fn clamp_input(&self, input: &CalculationInput) -> CalculationInput {
        let mut clamped = *input;
        for (field, value) in input.iter() {
            clamped.set(field, self.clamp(field, value));
        }
        clamped
    }

    /// Fields whose value lies outside their bounds.
    #[must_use]
    pub fn out_of_range(&self, input: &CalculationInput) -> Vec<InputField> {
        input
            .iter()
            .filter(|(field, value)| !self.get(*field).contains(*value))
            .map(|(field, _)| field)
            .collect()
    }

    /// Iterates over `(field, bounds)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (InputField, FieldBounds)> + '_ {
        InputField::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}

fn index(field: InputField) -> usize {
    InputField::ALL
        .iter()
        .position(|&f| f == field)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let b = FieldBounds::new(1.0, 30.0, 1.0, Unit::Days);
        assert_eq!(b.clamp(0.0), 1.0);
        assert_eq!(b.clamp(45.0), 30.0);
        assert_eq!(b.clamp(12.5), 12.5);
        assert_eq!(b.clamp(f64::NAN), 1.0);
    }

    #[test]
    fn test_snap() {
        let b = FieldBounds::new(1.0, 8.0, 0.5, Unit::People);
        assert_eq!(b.snap(3.3), 3.5);
        assert_eq!(b.snap(9.9), 8.0);
    }

    #[test]
    fn test_default_bounds_table() {
        let bounds = InputBounds::default();
        assert_eq!(bounds.get(InputField::TouristFrequency).min, 7.0);
        assert_eq!(bounds.get(InputField::TouristFrequency).max, 90.0);
        assert_eq!(bounds.get(InputField::NoShowRate).max, 50.0);
        assert_eq!(bounds.get(InputField::WeekdayShowUp).unit, Unit::Percent);
    }

    #[test]
    fn test_default_sliders_step_by_one() {
        let bounds = InputBounds::default();
        assert!(bounds.iter().all(|(_, b)| b.step == 1.0));
        assert_eq!(bounds.get(InputField::AvgGroupSize).snap(2.5), 3.0);
    }

    #[test]
    fn test_defaults_within_bounds() {
        let bounds = InputBounds::default();
        assert!(bounds.out_of_range(&CalculationInput::default()).is_empty());
    }

    #[test]
    fn test_clamp_input() {
        let bounds = InputBounds::default();
        let input = CalculationInput::default()
            .with(InputField::TargetDishes, 10.0)
            .with(InputField::NoShowRate, 80.0);
        assert_eq!(
            bounds.out_of_range(&input),
            vec![InputField::TargetDishes, InputField::NoShowRate]
        );
        let clamped = bounds.clamp_input(&input);
        assert_eq!(clamped.target_dishes, 50.0);
        assert_eq!(clamped.no_show_rate, 50.0);
        assert_eq!(clamped.local_customers, 100.0);
    }

    #[test]
    fn test_set_override() {
        let mut bounds = InputBounds::default();
        bounds.set(
            InputField::LocalCustomers,
            FieldBounds::new(0.0, 20_000.0, 10.0, Unit::People),
        );
        assert_eq!(bounds.clamp(InputField::LocalCustomers, 15_000.0), 15_000.0);
    }
}
