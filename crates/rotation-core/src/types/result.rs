//! Derived metrics produced by the calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metrics derived from a [`CalculationInput`](super::CalculationInput).
///
/// Active bases and capacities are whole numbers (already rounded);
/// `groups_per_day` keeps its fractional part.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Local customers needed over one visit cycle to sustain the local share.
    pub local_active_base: f64,
    /// Tourist customers needed over one visit cycle to sustain the tourist share.
    pub tourist_active_base: f64,
    /// Dishes per day served to locals.
    pub local_capacity: f64,
    /// Dishes per day served to tourists.
    pub tourist_capacity: f64,
    /// Dishes per day served to walk-ins.
    pub walk_in_capacity: f64,
    /// Sum of the three segment capacities.
    pub total_capacity: f64,
    /// Parties seated per day.
    pub groups_per_day: f64,
    /// `total_capacity - target_dishes`; positive is a surplus.
    pub gap: f64,
    /// Share of capacity the target consumes, percent in [0, 100].
    pub utilization_rate: f64,
}

impl CalculationResult {
    /// Combined local and tourist active base.
    #[must_use]
    pub fn total_active_base(&self) -> f64 {
        self.local_active_base + self.tourist_active_base
    }

    /// Classifies the gap.
    #[must_use]
    pub fn status(&self) -> CapacityStatus {
        CapacityStatus::from_gap(self.gap)
    }
}

/// Whether capacity covers the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityStatus {
    /// Capacity exceeds the target.
    Surplus,
    /// Capacity equals the target.
    OnTarget,
    /// Capacity falls short of the target.
    Shortfall,
    /// The gap is not a finite number; the input was out of domain.
    Undefined,
}

impl CapacityStatus {
    /// Classifies a signed gap.
    #[must_use]
    pub fn from_gap(gap: f64) -> Self {
        if !gap.is_finite() {
            Self::Undefined
        } else if gap > 0.0 {
            Self::Surplus
        } else if gap < 0.0 {
            Self::Shortfall
        } else {
            Self::OnTarget
        }
    }

    /// True when capacity is at least the target.
    #[must_use]
    pub fn meets_target(&self) -> bool {
        matches!(self, Self::Surplus | Self::OnTarget)
    }
}

impl fmt::Display for CapacityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Surplus => "Above target",
            Self::OnTarget => "On target",
            Self::Shortfall => "Below target",
            Self::Undefined => "Undefined",
        };
        write!(f, "{name}")
    }
}
