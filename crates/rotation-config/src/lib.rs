//! # Rotation Config
//!
//! Configuration file support for the Rotation planner.
//!
//! A TOML file may set default inputs, widen or narrow slider bounds, tune
//! scenario evaluation and list named scenarios:
//!
//! ```toml
//! [defaults]
//! target_dishes = 250
//!
//! [bounds.local_customers]
//! max = 20000
//!
//! [evaluation]
//! parallel = true
//! parallel_threshold = 64
//!
//! [output]
//! precision = 1
//!
//! [[scenarios]]
//! name = "Weekend push"
//! walk_in_daily = 40
//! ```
//!
//! Field names are snake_case; camelCase is accepted for `[bounds.*]` keys.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod config;
mod error;
mod overrides;

pub use config::{OutputConfig, RotationConfig, MAX_PRECISION};
pub use error::{ConfigError, ConfigResult, Validate, ValidationError};
pub use overrides::{BoundsOverride, InputOverrides, ScenarioEntry};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::RotationConfig;
    pub use crate::error::{ConfigError, ConfigResult, Validate};
    pub use crate::overrides::{InputOverrides, ScenarioEntry};
}
