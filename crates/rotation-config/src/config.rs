//! The planner configuration file.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use rotation_core::bounds::InputBounds;
use rotation_core::{validation, CalculationInput, InputField};
use rotation_scenarios::set::BASELINE_NAME;
use rotation_scenarios::{EvaluationConfig, Scenario, ScenarioSet};

use crate::error::{ConfigError, ConfigResult, Validate, ValidationError};
use crate::overrides::{BoundsOverride, InputOverrides, ScenarioEntry};

/// Largest number of decimals the formatter will print.
pub const MAX_PRECISION: usize = 10;

/// Display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Decimal places for capacity and gap values.
    #[serde(default = "default_precision")]
    pub precision: usize,

    /// Colour status lines.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_precision() -> usize {
    1
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            color: default_true(),
        }
    }
}

/// Planner configuration: default inputs, slider bounds, evaluation and
/// output settings, plus a list of named scenarios.
///
/// Every section is optional; an empty document yields [`RotationConfig::default`].
///
/// # Example
///
/// ```rust
/// use rotation_config::RotationConfig;
///
/// let config = RotationConfig::from_toml_str(r#"
///     [defaults]
///     target_dishes = 250
///
///     [[scenarios]]
///     name = "Weekend push"
///     walk_in_daily = 40
/// "#)?;
///
/// let set = config.scenario_set()?;
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.scenarios()[1].input.target_dishes, 250.0);
/// # Ok::<(), rotation_config::ConfigError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RotationConfig {
    /// Put a `"Current"` scenario built from the defaults ahead of the
    /// configured scenarios.
    #[serde(default = "default_true")]
    pub include_baseline: bool,

    /// Overrides of the built-in default input.
    #[serde(default)]
    pub defaults: InputOverrides,

    /// Per-field bound overrides keyed by field name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub bounds: BTreeMap<String, BoundsOverride>,

    /// Scenario evaluation settings.
    #[serde(default)]
    pub evaluation: EvaluationConfig,

    /// Display settings.
    #[serde(default)]
    pub output: OutputConfig,

    /// Named scenarios, each layered over the defaults.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<ScenarioEntry>,
}

impl Default for RotationConfig {
    fn default() -> Self {
        Self {
            include_baseline: true,
            defaults: InputOverrides::default(),
            bounds: BTreeMap::new(),
            evaluation: EvaluationConfig::default(),
            output: OutputConfig::default(),
            scenarios: Vec::new(),
        }
    }
}

impl RotationConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            scenarios = config.scenarios.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Renders the configuration as TOML.
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        let path = path.as_ref();
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)?;
        debug!(path = %path.display(), "configuration saved");
        Ok(())
    }

    /// A starter file: the full default input and one sample scenario.
    #[must_use]
    pub fn template() -> Self {
        Self {
            defaults: InputOverrides::from(CalculationInput::default()),
            scenarios: vec![ScenarioEntry::new(
                "Walk-in push",
                InputOverrides {
                    walk_in_daily: Some(40.0),
                    ..InputOverrides::default()
                },
            )],
            ..Self::default()
        }
    }

    /// The built-in default input with `[defaults]` applied.
    #[must_use]
    pub fn default_input(&self) -> CalculationInput {
        self.defaults.apply(&CalculationInput::default())
    }

    /// The built-in slider bounds with `[bounds.*]` applied.
    pub fn input_bounds(&self) -> ConfigResult<InputBounds> {
        let mut bounds = InputBounds::default();
        for (key, over) in &self.bounds {
            let field: InputField = key.parse().map_err(|e: rotation_core::RotationError| {
                ConfigError::Validation {
                    field: format!("bounds.{key}"),
                    message: e.to_string(),
                }
            })?;
            bounds.set(field, over.apply(bounds.get(field)));
        }
        Ok(bounds)
    }

    /// Builds the scenario set: the baseline (if enabled) followed by each
    /// configured scenario in file order.
    pub fn scenario_set(&self) -> ConfigResult<ScenarioSet> {
        let defaults = self.default_input();
        let baseline = self
            .include_baseline
            .then(|| Scenario::new(BASELINE_NAME, defaults));
        let scenarios = baseline
            .into_iter()
            .chain(
                self.scenarios
                    .iter()
                    .map(|entry| Scenario::new(entry.name.clone(), entry.overrides.apply(&defaults))),
            )
            .collect();
        Ok(ScenarioSet::from_scenarios(scenarios)?)
    }
}

fn input_errors(prefix: &str, input: &CalculationInput) -> impl Iterator<Item = ValidationError> {
    let prefix = prefix.to_string();
    validation::validate(input).into_iter().map(move |err| {
        let field = err.field().unwrap_or("input");
        ValidationError::with_rule(format!("{prefix}.{field}"), err.to_string(), "input_domain")
    })
}

impl Validate for RotationConfig {
    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        let defaults = InputBounds::default();
        for (key, over) in &self.bounds {
            let name = format!("bounds.{key}");
            let Ok(field) = key.parse::<InputField>() else {
                errors.push(ValidationError::with_rule(
                    name,
                    "unknown input field",
                    "known_field",
                ));
                continue;
            };
            let merged = over.apply(defaults.get(field));
            if !(merged.min.is_finite() && merged.max.is_finite()) {
                errors.push(ValidationError::with_rule(
                    name.clone(),
                    "bounds must be finite",
                    "finite_bounds",
                ));
            } else if merged.min > merged.max {
                errors.push(ValidationError::with_rule(
                    name.clone(),
                    format!("min {} exceeds max {}", merged.min, merged.max),
                    "min_le_max",
                ));
            }
            if merged.step.is_nan() || merged.step <= 0.0 {
                errors.push(ValidationError::with_rule(
                    name,
                    "step must be positive",
                    "positive_step",
                ));
            }
        }

        errors.extend(input_errors("defaults", &self.default_input()));

        if !self.include_baseline && self.scenarios.is_empty() {
            errors.push(ValidationError::with_rule(
                "scenarios",
                "no scenarios configured and the baseline is disabled",
                "non_empty_set",
            ));
        }

        let mut seen = HashSet::new();
        if self.include_baseline {
            seen.insert(BASELINE_NAME);
        }
        let base = self.default_input();
        for (i, entry) in self.scenarios.iter().enumerate() {
            let prefix = format!("scenarios[{i}]");
            if entry.name.trim().is_empty() {
                errors.push(ValidationError::with_rule(
                    format!("{prefix}.name"),
                    "name must not be empty",
                    "non_empty_name",
                ));
            } else if !seen.insert(entry.name.as_str()) {
                errors.push(ValidationError::with_rule(
                    format!("{prefix}.name"),
                    format!("duplicate scenario name '{}'", entry.name),
                    "unique_name",
                ));
            }
            for key in entry.extra.keys() {
                errors.push(ValidationError::with_rule(
                    format!("{prefix}.{key}"),
                    "unknown input field",
                    "known_field",
                ));
            }
            errors.extend(input_errors(&prefix, &entry.overrides.apply(&base)));
        }

        if self.output.precision > MAX_PRECISION {
            errors.push(ValidationError::with_rule(
                "output.precision",
                format!("must be at most {MAX_PRECISION}"),
                "max_precision",
            ));
        }

        errors
    }
}
