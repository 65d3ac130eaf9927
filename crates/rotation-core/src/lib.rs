//! # Rotation Core
//!
//! Core types and the capacity calculator for restaurant customer rotation
//! planning.
//!
//! - **Types**: [`CalculationInput`], [`CalculationResult`], segments and status
//! - **Calculator**: [`compute`] maps an input to derived metrics; [`try_compute`]
//!   validates first
//! - **Bounds**: slider ranges and clamping for every input field
//! - **Editor**: slider / text-box input adapter with debounced commits
//!
//! ## Example
//!
//! ```rust
//! use rotation_core::prelude::*;
//!
//! let input = CalculationInput::default().with(InputField::WalkInDaily, 60.0);
//! let result = compute(&input);
//! assert_eq!(result.gap, result.total_capacity - input.target_dishes);
//! assert!(result.utilization_rate <= 100.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]

pub mod bounds;
pub mod calculator;
pub mod editor;
pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bounds::{FieldBounds, InputBounds, Unit};
    pub use crate::calculator::{compute, daily_throughput, try_compute, ShowRates};
    pub use crate::editor::FieldEditor;
    pub use crate::error::{RotationError, RotationResult};
    pub use crate::types::{
        CalculationInput, CalculationResult, CapacityStatus, FieldCommit, InputField, Segment,
        SegmentBreakdown, SegmentRow, ShareSplit,
    };
    pub use crate::validation::validate;
}

// Re-export commonly used types at crate root
pub use calculator::{compute, try_compute};
pub use error::{RotationError, RotationResult};
pub use types::{CalculationInput, CalculationResult, CapacityStatus, InputField};
