//! The capacity calculator.
//!
//! Maps a [`CalculationInput`] to a [`CalculationResult`] in a single pass.
//! The transform is pure: identical inputs give identical outputs and no
//! state is read or written.
//!
//! # Formulas
//!
//! ```text
//! active base   A = D × τ / μ            (D = segment's share of the target)
//! show rate     s = (5·weekday + 2·weekend) / 7 / 100 × (1 − no_show / 100)
//! capacity      C = customers × s × μ / τ
//! walk-in       W = walk_ins × μ × s
//! utilization   U = min(100, target / (C_local + C_tourist + W) × 100)
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::RotationResult;
use crate::types::{CalculationInput, CalculationResult, Segment, ShareSplit};
use crate::validation::ensure_valid;

/// Weekdays in the weekly show-up blend.
pub const WEEKDAYS: f64 = 5.0;

/// Weekend days in the weekly show-up blend.
pub const WEEKEND_DAYS: f64 = 2.0;

/// Show-up probabilities derived from an input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShowRates {
    /// Weekday/weekend show-up blended 5:2, as a fraction.
    pub blended_show_up: f64,
    /// Blended show-up after the no-show rate, as a fraction.
    pub effective: f64,
}

impl ShowRates {
    /// Derives the show rates of an input.
    #[must_use]
    pub fn from_input(input: &CalculationInput) -> Self {
        let blended_show_up = (input.weekday_show_up * WEEKDAYS
            + input.weekend_show_up * WEEKEND_DAYS)
            / (WEEKDAYS + WEEKEND_DAYS)
            / 100.0;
        let effective = blended_show_up * (1.0 - input.no_show_rate / 100.0);
        Self {
            blended_show_up,
            effective,
        }
    }
}

/// Customers arriving per day across all segments, before grouping.
#[must_use]
pub fn daily_throughput(input: &CalculationInput) -> f64 {
    input.local_customers / input.local_frequency
        + input.tourist_customers / input.tourist_frequency
        + input.walk_in_daily
}

/// Computes the capacity metrics for an input.
///
/// Never fails. Inputs outside the documented domain (zero frequencies,
/// group size or dishes per person) produce non-finite fields; use
/// [`try_compute`] to reject them instead.
///
/// # Example
///
/// ```rust
/// use rotation_core::{compute, CalculationInput};
///
/// let result = compute(&CalculationInput::default());
/// assert_eq!(result.total_capacity, 50.0);
/// assert_eq!(result.gap, -150.0);
/// assert_eq!(result.utilization_rate, 100.0);
/// ```
#[must_use]
pub fn compute(input: &CalculationInput) -> CalculationResult {
    let split = ShareSplit::STANDARD;

    let local_active_base = active_base(
        split.target_for(Segment::Local, input.target_dishes),
        input.local_frequency,
        input.dishes_per_person,
    );
    let tourist_active_base = active_base(
        split.target_for(Segment::Tourist, input.target_dishes),
        input.tourist_frequency,
        input.dishes_per_person,
    );

    let rates = ShowRates::from_input(input);

    let local_capacity = segment_capacity(
        input.local_customers,
        rates.effective,
        input.dishes_per_person,
        input.local_frequency,
    );
    let tourist_capacity = segment_capacity(
        input.tourist_customers,
        rates.effective,
        input.dishes_per_person,
        input.tourist_frequency,
    );
    let walk_in_capacity = (input.walk_in_daily * input.dishes_per_person * rates.effective).round();

    let total_capacity = local_capacity + tourist_capacity + walk_in_capacity;
    let groups_per_day = daily_throughput(input) / input.avg_group_size;
    let gap = total_capacity - input.target_dishes;
    let utilization_rate = utilization(input.target_dishes, total_capacity);

    debug!(
        total_capacity,
        target = input.target_dishes,
        gap,
        utilization_rate,
        "computed rotation metrics"
    );

    CalculationResult {
        local_active_base,
        tourist_active_base,
        local_capacity,
        tourist_capacity,
        walk_in_capacity,
        total_capacity,
        groups_per_day,
        gap,
        utilization_rate,
    }
}

/// Validates the input and then computes.
///
/// Returns the first constraint violation found, in field order.
pub fn try_compute(input: &CalculationInput) -> RotationResult<CalculationResult> {
    ensure_valid(input)?;
    Ok(compute(input))
}

fn active_base(daily_dishes: f64, frequency: f64, dishes_per_person: f64) -> f64 {
    (daily_dishes * frequency / dishes_per_person).round()
}

fn segment_capacity(customers: f64, show_rate: f64, dishes_per_person: f64, frequency: f64) -> f64 {
    (customers * show_rate * dishes_per_person / frequency).round()
}

/// Percent of capacity consumed by the target, capped at 100.
///
/// Zero capacity saturates at 100 unless the target is also zero. A
/// non-finite capacity or target gives NaN.
fn utilization(target: f64, capacity: f64) -> f64 {
    if !capacity.is_finite() || !target.is_finite() {
        return f64::NAN;
    }
    if capacity <= 0.0 {
        return if target > 0.0 { 100.0 } else { 0.0 };
    }
    (target / capacity * 100.0).min(100.0).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CapacityStatus, InputField};
    use approx::assert_relative_eq;

    #[test]
    fn test_default_example() {
        let input = CalculationInput::default();
        let rates = ShowRates::from_input(&input);
        assert_relative_eq!(rates.blended_show_up, 575.0 / 700.0, epsilon = 1e-12);
        assert_relative_eq!(rates.effective, 575.0 / 700.0 * 0.85, epsilon = 1e-12);

        let result = compute(&input);
        assert_eq!(result.local_capacity, 20.0);
        assert_eq!(result.tourist_capacity, 2.0);
        assert_eq!(result.walk_in_capacity, 28.0);
        assert_eq!(result.total_capacity, 50.0);
        assert_eq!(result.gap, -150.0);
        assert_eq!(result.utilization_rate, 100.0);
    }

    #[test]
    fn test_default_active_base() {
        let result = compute(&CalculationInput::default());
        // 200 × 0.6 × 7 / 2 and 200 × 0.3 × 30 / 2
        assert_eq!(result.local_active_base, 420.0);
        assert_eq!(result.tourist_active_base, 900.0);
        assert_eq!(result.total_active_base(), 1320.0);
    }

    #[test]
    fn test_out_of_domain_input_is_undefined() {
        let input = CalculationInput::default()
            .with(InputField::LocalFrequency, 0.0)
            .with(InputField::LocalCustomers, 0.0);
        let result = compute(&input);
        assert!(result.gap.is_nan());
        assert!(result.utilization_rate.is_nan());
        assert_eq!(result.status(), CapacityStatus::Undefined);
    }

    #[test]
    fn test_utilization_guards() {
        assert_eq!(utilization(200.0, 0.0), 100.0);
        assert_eq!(utilization(0.0, 0.0), 0.0);
        assert!(utilization(200.0, f64::NAN).is_nan());
        assert!(utilization(200.0, f64::INFINITY).is_nan());
        assert_eq!(utilization(100.0, 400.0), 25.0);
    }

    #[test]
    fn test_groups_per_day_not_rounded() {
        let result = compute(&CalculationInput::default());
        let expected = (100.0 / 7.0 + 50.0 / 30.0 + 20.0) / 3.0;
        assert_relative_eq!(result.groups_per_day, expected, epsilon = 1e-12);
        assert!(result.groups_per_day.fract() != 0.0);
    }

    #[test]
    fn test_surplus_utilization_below_cap() {
        let input = CalculationInput::default()
            .with(InputField::LocalCustomers, 2000.0)
            .with(InputField::TargetDishes, 100.0);
        let result = compute(&input);
        assert!(result.gap > 0.0);
        assert!(result.utilization_rate < 100.0);
        assert_eq!(
            result.utilization_rate,
            (100.0 / result.total_capacity * 100.0).round()
        );
    }

    #[test]
    fn test_zero_capacity() {
        let input = CalculationInput::default()
            .with(InputField::LocalCustomers, 0.0)
            .with(InputField::TouristCustomers, 0.0)
            .with(InputField::WalkInDaily, 0.0);
        let result = compute(&input);
        assert_eq!(result.total_capacity, 0.0);
        assert_eq!(result.utilization_rate, 100.0);

        let idle = input.with(InputField::TargetDishes, 0.0);
        assert_eq!(compute(&idle).utilization_rate, 0.0);
    }

    #[test]
    fn test_full_no_show_zeroes_capacity() {
        let input = CalculationInput::default().with(InputField::NoShowRate, 100.0);
        let result = compute(&input);
        assert_eq!(result.total_capacity, 0.0);
        // groups_per_day ignores show rates
        assert!(result.groups_per_day > 0.0);
    }

    #[test]
    fn test_try_compute_rejects_zero_divisor() {
        let input = CalculationInput::default().with(InputField::DishesPerPerson, 0.0);
        let err = try_compute(&input).unwrap_err();
        assert_eq!(err.field(), Some("dishes_per_person"));
    }

    #[test]
    fn test_try_compute_matches_compute() {
        let input = CalculationInput::default();
        assert_eq!(try_compute(&input).unwrap(), compute(&input));
    }
}
