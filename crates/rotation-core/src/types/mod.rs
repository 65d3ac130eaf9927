//! Domain types for customer rotation planning.
//!
//! - [`CalculationInput`]: customer base, visit cycles, show-up rates, target
//! - [`CalculationResult`]: derived active bases, capacities, gap, utilization
//! - [`InputField`]: addresses a single input field by name
//! - [`Segment`] / [`ShareSplit`]: local, tourist and walk-in shares of the target
//! - [`CapacityStatus`]: surplus / on target / shortfall

mod input;
mod result;
mod segment;

pub use input::{CalculationInput, FieldCommit, InputField};
pub use result::{CalculationResult, CapacityStatus};
pub use segment::{Segment, SegmentBreakdown, SegmentRow, ShareSplit};
