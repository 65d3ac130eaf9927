//! Customer segments and the target share split.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CalculationInput, CalculationResult, CapacityStatus};

/// The three customer segments a restaurant serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Segment {
    /// Repeat local customers.
    Local,
    /// Visiting tourists.
    Tourist,
    /// Unreserved walk-ins.
    WalkIn,
}

impl Segment {
    /// All segments in display order.
    pub const ALL: [Segment; 3] = [Segment::Local, Segment::Tourist, Segment::WalkIn];
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Segment::Local => "Local",
            Segment::Tourist => "Tourist",
            Segment::WalkIn => "Walk-in",
        };
        write!(f, "{name}")
    }
}

/// Fractions of the daily dish target attributed to each segment.
///
/// The split is fixed; it is not derived from any input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShareSplit {
    /// Local share of the target.
    pub local: f64,
    /// Tourist share of the target.
    pub tourist: f64,
    /// Walk-in share of the target. Display only.
    pub walk_in: f64,
}

impl ShareSplit {
    /// 60% local, 30% tourist, 10% walk-in.
    pub const STANDARD: ShareSplit = ShareSplit {
        local: 0.6,
        tourist: 0.3,
        walk_in: 0.1,
    };

    /// Returns the fraction for a segment.
    #[must_use]
    pub fn share(&self, segment: Segment) -> f64 {
        match segment {
            Segment::Local => self.local,
            Segment::Tourist => self.tourist,
            Segment::WalkIn => self.walk_in,
        }
    }

    /// Dishes per day the segment is expected to carry.
    #[must_use]
    pub fn target_for(&self, segment: Segment, target_dishes: f64) -> f64 {
        target_dishes * self.share(segment)
    }
}

impl Default for ShareSplit {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Capacity versus target for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SegmentRow {
    /// The segment.
    pub segment: Segment,
    /// Computed capacity in dishes per day.
    pub capacity: f64,
    /// Share of the target attributed to the segment.
    pub target: f64,
}

impl SegmentRow {
    /// `capacity - target` for this segment.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.capacity - self.target
    }

    /// Status of this segment alone.
    #[must_use]
    pub fn status(&self) -> CapacityStatus {
        CapacityStatus::from_gap(self.gap())
    }
}

/// Per-segment view of a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentBreakdown {
    /// Rows in [`Segment::ALL`] order.
    pub rows: Vec<SegmentRow>,
}

impl SegmentBreakdown {
    /// Builds the breakdown using the standard share split.
    #[must_use]
    pub fn from_metrics(input: &CalculationInput, result: &CalculationResult) -> Self {
        Self::with_split(input, result, ShareSplit::STANDARD)
    }

    /// Builds the breakdown using an explicit share split.
    #[must_use]
    pub fn with_split(
        input: &CalculationInput,
        result: &CalculationResult,
        split: ShareSplit,
    ) -> Self {
        let rows = Segment::ALL
            .iter()
            .map(|&segment| {
                let capacity = match segment {
                    Segment::Local => result.local_capacity,
                    Segment::Tourist => result.tourist_capacity,
                    Segment::WalkIn => result.walk_in_capacity,
                };
                SegmentRow {
                    segment,
                    capacity,
                    target: split.target_for(segment, input.target_dishes),
                }
            })
            .collect();
        Self { rows }
    }

    /// Looks up the row for a segment.
    #[must_use]
    pub fn row(&self, segment: Segment) -> Option<&SegmentRow> {
        self.rows.iter().find(|r| r.segment == segment)
    }
}
