//! Calculation input record and field addressing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RotationError;

/// Parameters describing a restaurant's customer base and service targets.
///
/// Frequencies are expressed as τ, the number of days between a customer's
/// repeat visits. Show-up and no-show rates are percentages (0-100).
///
/// # Example
///
/// ```rust
/// use rotation_core::types::{CalculationInput, InputField};
///
/// let mut input = CalculationInput::default();
/// input.set(InputField::WalkInDaily, 35.0);
/// assert_eq!(input.get(InputField::WalkInDaily), 35.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    /// Count of local customers.
    pub local_customers: f64,
    /// Count of tourist customers.
    pub tourist_customers: f64,
    /// Days between repeat visits for locals (τ).
    pub local_frequency: f64,
    /// Days between repeat visits for tourists (τ).
    pub tourist_frequency: f64,
    /// Target dishes served per day.
    pub target_dishes: f64,
    /// Average party size.
    pub avg_group_size: f64,
    /// Dishes ordered per person per visit (μ).
    pub dishes_per_person: f64,
    /// Walk-in customers per day.
    pub walk_in_daily: f64,
    /// Probability (%) a weekday reservation shows.
    pub weekday_show_up: f64,
    /// Probability (%) a weekend reservation shows.
    pub weekend_show_up: f64,
    /// Probability (%) of a no-show, applied after show-up.
    pub no_show_rate: f64,
}

impl Default for CalculationInput {
    /// The reset preset of the planning tool.
    fn default() -> Self {
        Self {
            local_customers: 100.0,
            tourist_customers: 50.0,
            local_frequency: 7.0,
            tourist_frequency: 30.0,
            target_dishes: 200.0,
            avg_group_size: 3.0,
            dishes_per_person: 2.0,
            walk_in_daily: 20.0,
            weekday_show_up: 85.0,
            weekend_show_up: 75.0,
            no_show_rate: 15.0,
        }
    }
}

impl CalculationInput {
    /// Creates an input record holding the default preset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a single field.
    #[must_use]
    pub fn get(&self, field: InputField) -> f64 {
        match field {
            InputField::LocalCustomers => self.local_customers,
            InputField::TouristCustomers => self.tourist_customers,
            InputField::LocalFrequency => self.local_frequency,
            InputField::TouristFrequency => self.tourist_frequency,
            InputField::TargetDishes => self.target_dishes,
            InputField::AvgGroupSize => self.avg_group_size,
            InputField::DishesPerPerson => self.dishes_per_person,
            InputField::WalkInDaily => self.walk_in_daily,
            InputField::WeekdayShowUp => self.weekday_show_up,
            InputField::WeekendShowUp => self.weekend_show_up,
            InputField::NoShowRate => self.no_show_rate,
        }
    }

    /// Overwrites a single field.
    pub fn set(&mut self, field: InputField, value: f64) {
        let slot = match field {
            InputField::LocalCustomers => &mut self.local_customers,
            InputField::TouristCustomers => &mut self.tourist_customers,
            InputField::LocalFrequency => &mut self.local_frequency,
            InputField::TouristFrequency => &mut self.tourist_frequency,
            InputField::TargetDishes => &mut self.target_dishes,
            InputField::AvgGroupSize => &mut self.avg_group_size,
            InputField::DishesPerPerson => &mut self.dishes_per_person,
            InputField::WalkInDaily => &mut self.walk_in_daily,
            InputField::WeekdayShowUp => &mut self.weekday_show_up,
            InputField::WeekendShowUp => &mut self.weekend_show_up,
            InputField::NoShowRate => &mut self.no_show_rate,
        };
        *slot = value;
    }

    /// Returns a copy with one field replaced.
    #[must_use]
    pub fn with(mut self, field: InputField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Writes a committed editor value into this record.
    pub fn apply(&mut self, commit: FieldCommit) {
        self.set(commit.field, commit.value);
    }

    /// Iterates over `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (InputField, f64)> + '_ {
        InputField::ALL.iter().map(move |&field| (field, self.get(field)))
    }
}

/// Names one of the eleven calculation input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    /// Count of local customers.
    LocalCustomers,
    /// Count of tourist customers.
    TouristCustomers,
    /// Local visit frequency (τ, days).
    LocalFrequency,
    /// Tourist visit frequency (τ, days).
    TouristFrequency,
    /// Target dishes per day.
    TargetDishes,
    /// Average party size.
    AvgGroupSize,
    /// Dishes per person per visit (μ).
    DishesPerPerson,
    /// Walk-ins per day.
    WalkInDaily,
    /// Weekday show-up rate (%).
    WeekdayShowUp,
    /// Weekend show-up rate (%).
    WeekendShowUp,
    /// No-show rate (%).
    NoShowRate,
}

impl InputField {
    /// All fields in declaration order.
    pub const ALL: [InputField; 11] = [
        InputField::LocalCustomers,
        InputField::TouristCustomers,
        InputField::LocalFrequency,
        InputField::TouristFrequency,
        InputField::TargetDishes,
        InputField::AvgGroupSize,
        InputField::DishesPerPerson,
        InputField::WalkInDaily,
        InputField::WeekdayShowUp,
        InputField::WeekendShowUp,
        InputField::NoShowRate,
    ];

    /// Returns the snake_case identifier.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocalCustomers => "local_customers",
            Self::TouristCustomers => "tourist_customers",
            Self::LocalFrequency => "local_frequency",
            Self::TouristFrequency => "tourist_frequency",
            Self::TargetDishes => "target_dishes",
            Self::AvgGroupSize => "avg_group_size",
            Self::DishesPerPerson => "dishes_per_person",
            Self::WalkInDaily => "walk_in_daily",
            Self::WeekdayShowUp => "weekday_show_up",
            Self::WeekendShowUp => "weekend_show_up",
            Self::NoShowRate => "no_show_rate",
        }
    }

    /// Returns the camelCase identifier used by the web front end.
    #[must_use]
    pub fn camel_case(&self) -> &'static str {
        match self {
            Self::LocalCustomers => "localCustomers",
            Self::TouristCustomers => "touristCustomers",
            Self::LocalFrequency => "localFrequency",
            Self::TouristFrequency => "touristFrequency",
            Self::TargetDishes => "targetDishes",
            Self::AvgGroupSize => "avgGroupSize",
            Self::DishesPerPerson => "dishesPerPerson",
            Self::WalkInDaily => "walkInDaily",
            Self::WeekdayShowUp => "weekdayShowUp",
            Self::WeekendShowUp => "weekendShowUp",
            Self::NoShowRate => "noShowRate",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::LocalCustomers => "Local customers",
            Self::TouristCustomers => "Tourist customers",
            Self::LocalFrequency => "Local visit frequency",
            Self::TouristFrequency => "Tourist visit frequency",
            Self::TargetDishes => "Target dishes per day",
            Self::AvgGroupSize => "Average group size",
            Self::DishesPerPerson => "Dishes per person",
            Self::WalkInDaily => "Walk-ins per day",
            Self::WeekdayShowUp => "Weekday show-up",
            Self::WeekendShowUp => "Weekend show-up",
            Self::NoShowRate => "No-show rate",
        }
    }

    /// Returns true for the fields expressed as percentages.
    #[must_use]
    pub fn is_percentage(&self) -> bool {
        matches!(
            self,
            Self::WeekdayShowUp | Self::WeekendShowUp | Self::NoShowRate
        )
    }

    /// Returns true for the fields the calculator divides by.
    #[must_use]
    pub fn is_divisor(&self) -> bool {
        matches!(
            self,
            Self::LocalFrequency
                | Self::TouristFrequency
                | Self::AvgGroupSize
                | Self::DishesPerPerson
        )
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputField {
    type Err = RotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let normalized = trimmed.replace('-', "_");
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == normalized || field.camel_case() == trimmed)
            .ok_or_else(|| RotationError::unknown_field(trimmed))
    }
}

/// A value committed by an input control for a specific field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldCommit {
    /// The field being written.
    pub field: InputField,
    /// The committed value.
    pub value: f64,
}

impl FieldCommit {
    /// Creates a new commit.
    #[must_use]
    pub fn new(field: InputField, value: f64) -> Self {
        Self { field, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_preset() {
        let input = CalculationInput::default();
        assert_eq!(input.local_customers, 100.0);
        assert_eq!(input.tourist_frequency, 30.0);
        assert_eq!(input.no_show_rate, 15.0);
    }

    #[test]
    fn test_get_set_every_field() {
        let mut input = CalculationInput::default();
        for (i, field) in InputField::ALL.iter().enumerate() {
            let value = 1000.0 + i as f64;
            input.set(*field, value);
            assert_eq!(input.get(*field), value);
        }
    }

    #[test]
    fn test_parse_field_names() {
        assert_eq!(
            "walk_in_daily".parse::<InputField>().unwrap(),
            InputField::WalkInDaily
        );
        assert_eq!(
            "walkInDaily".parse::<InputField>().unwrap(),
            InputField::WalkInDaily
        );
        assert_eq!(
            "no-show-rate".parse::<InputField>().unwrap(),
            InputField::NoShowRate
        );
        assert!("seats".parse::<InputField>().is_err());
    }

    #[test]
    fn test_apply_commit() {
        let mut input = CalculationInput::default();
        input.apply(FieldCommit::new(InputField::TargetDishes, 320.0));
        assert_eq!(input.target_dishes, 320.0);
    }

    #[test]
    fn test_iter_order() {
        let input = CalculationInput::default();
        let fields: Vec<_> = input.iter().map(|(f, _)| f).collect();
        assert_eq!(fields, InputField::ALL.to_vec());
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&CalculationInput::default()).unwrap();
        assert!(json.contains("\"walk_in_daily\":20.0"));
        let back: CalculationInput = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CalculationInput::default());
    }
}
