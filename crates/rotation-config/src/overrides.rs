//! Partial inputs and bound overrides as they appear in configuration files.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use rotation_core::bounds::FieldBounds;
use rotation_core::{CalculationInput, InputField};

/// A calculation input where every field is optional.
///
/// Missing fields fall through to whatever input the overrides are applied to.
/// Unknown keys are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputOverrides {
    /// Local customer base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_customers: Option<f64>,
    /// Tourist customer base.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tourist_customers: Option<f64>,
    /// Days between local visits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_frequency: Option<f64>,
    /// Days between tourist visits.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tourist_frequency: Option<f64>,
    /// Target dishes per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dishes: Option<f64>,
    /// People per group.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_group_size: Option<f64>,
    /// Dishes ordered per person.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dishes_per_person: Option<f64>,
    /// Walk-in customers per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walk_in_daily: Option<f64>,
    /// Weekday show-up rate, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday_show_up: Option<f64>,
    /// Weekend show-up rate, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekend_show_up: Option<f64>,
    /// No-show rate, percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_show_rate: Option<f64>,
}

impl InputOverrides {
    /// The override for one field, if set.
    #[must_use]
    pub fn get(&self, field: InputField) -> Option<f64> {
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

    /// Sets or clears the override for one field.
    pub fn set(&mut self, field: InputField, value: Option<f64>) {
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

    /// Returns true if no field is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        InputField::ALL.iter().all(|&f| self.get(f).is_none())
    }

    /// Iterates over the fields that are set.
    pub fn iter(&self) -> impl Iterator<Item = (InputField, f64)> + '_ {
        InputField::ALL
            .iter()
            .filter_map(move |&f| self.get(f).map(|v| (f, v)))
    }

    /// Layers these overrides over `base`.
    #[must_use]
    pub fn apply(&self, base: &CalculationInput) -> CalculationInput {
        self.iter()
            .fold(*base, |input, (field, value)| input.with(field, value))
    }
}

impl From<CalculationInput> for InputOverrides {
    fn from(input: CalculationInput) -> Self {
        let mut overrides = Self::default();
        for (field, value) in input.iter() {
            overrides.set(field, Some(value));
        }
        overrides
    }
}

/// Partial override of one field's bounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundsOverride {
    /// Lower bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    /// Upper bound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    /// Slider step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

impl BoundsOverride {
    /// Layers this override over `base`, keeping its unit.
    #[must_use]
    pub fn apply(&self, base: FieldBounds) -> FieldBounds {
        FieldBounds::new(
            self.min.unwrap_or(base.min),
            self.max.unwrap_or(base.max),
            self.step.unwrap_or(base.step),
            base.unit,
        )
    }
}

/// A named scenario entry: a name plus field overrides over the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEntry {
    /// Scenario name.
    pub name: String,
    /// Fields that differ from the defaults.
    #[serde(flatten)]
    pub overrides: InputOverrides,
    /// Keys that match no input field; reported by validation.
    #[serde(flatten)]
    pub extra: BTreeMap<String, toml::Value>,
}

impl ScenarioEntry {
    /// Creates a scenario entry.
    pub fn new(name: impl Into<String>, overrides: InputOverrides) -> Self {
        Self {
            name: name.into(),
            overrides,
            extra: BTreeMap::new(),
        }
    }
}
