//! Domain checks for calculation inputs.
//!
//! | field kind | rule |
//! |---|---|
//! | any | finite |
//! | counts, target, walk-ins | ≥ 0 |
//! | frequencies, group size, dishes per person | > 0 |
//! | show-up and no-show rates | 0 ≤ x ≤ 100 |

use crate::error::{RotationError, RotationResult};
use crate::types::{CalculationInput, InputField};

/// Checks a single field value against its domain.
pub fn validate_field(field: InputField, value: f64) -> RotationResult<()> {
    if !value.is_finite() {
        return Err(RotationError::invalid_input(
            field.as_str(),
            value,
            "must be a finite number",
        ));
    }
    if field.is_divisor() && value <= 0.0 {
        return Err(RotationError::invalid_input(
            field.as_str(),
            value,
            "must be greater than zero",
        ));
    }
    if value < 0.0 {
        return Err(RotationError::invalid_input(
            field.as_str(),
            value,
            "must not be negative",
        ));
    }
    if field.is_percentage() && value > 100.0 {
        return Err(RotationError::invalid_input(
            field.as_str(),
            value,
            "must be a percentage between 0 and 100",
        ));
    }
    Ok(())
}

/// Returns every constraint violation in the input, in field order.
#[must_use]
pub fn validate(input: &CalculationInput) -> Vec<RotationError> {
    input
        .iter()
        .filter_map(|(field, value)| validate_field(field, value).err())
        .collect()
}

/// Fails with the first constraint violation, if any.
pub fn ensure_valid(input: &CalculationInput) -> RotationResult<()> {
    match validate(input).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
