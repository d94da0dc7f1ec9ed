//! YAML configuration file for calculation runs.

use std::path::Path;

use bagshop_core::{BagshopError, Result};
use bagshop_cost::{
    ExtraItem, ExtraItemPolicy, ModelParams, ScenarioParams, ScenarioSpec, validate_extra_items,
    validate_scenario_params, validate_scenario_specs, validate_with_policy,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Default configuration file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "bagshop.yaml";

/// Top-level configuration.
///
/// Every section is optional; missing values fall back to the reference data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BagshopConfig {
    /// Parameters for the cost breakdown engine
    pub params: ModelParams,

    /// Inputs for the scenario projection engine
    pub projection: ProjectionConfig,

    /// Treatment of blank or zero-amount extra items
    pub extra_item_policy: ExtraItemPolicy,
}

/// Scenario projection section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Base parameters
    pub params: ScenarioParams,

    /// Ad-hoc adjustments applied to every scenario
    pub extra_items: Vec<ExtraItem>,

    /// Scenarios to project, in tie-break order
    pub scenarios: Vec<ScenarioSpec>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            params: ScenarioParams::default(),
            extra_items: Vec::new(),
            scenarios: ScenarioSpec::standard(),
        }
    }
}

impl BagshopConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and validate configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading configuration");

        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BagshopError::config_not_found_with_source(path, e)
            } else {
                BagshopError::io("reading configuration", path, e)
            }
        })?;

        let config = Self::from_yaml_str(&content, path)?;
        info!(
            path = %path.display(),
            extra_items = config.params.extra_items.len(),
            scenarios = config.projection.scenarios.len(),
            "configuration loaded"
        );
        Ok(config)
    }

    /// Load from `path` when given, otherwise return the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no configuration file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse and validate configuration text. `origin` is used in error messages.
    pub fn from_yaml_str(content: &str, origin: &Path) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| BagshopError::config_invalid(origin, e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check all parameters against their allowed ranges.
    pub fn validate(&self) -> Result<()> {
        validate_with_policy(&self.params, self.extra_item_policy)
            .map_err(|e| BagshopError::config_validation(format!("params: {e}")))?;

        let projection = &self.projection;
        validate_scenario_params(&projection.params)
            .map_err(|e| BagshopError::config_validation(format!("projection.params: {e}")))?;
        validate_extra_items(&projection.extra_items, self.extra_item_policy)
            .map_err(|e| BagshopError::config_validation(format!("projection: {e}")))?;
        validate_scenario_specs(&projection.scenarios)
            .map_err(|e| BagshopError::config_validation(format!("projection: {e}")))?;

        if projection.scenarios.is_empty() {
            return Err(BagshopError::config_validation(
                "projection.scenarios must list at least one scenario",
            ));
        }
        Ok(())
    }

    /// Render as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| BagshopError::yaml("rendering configuration", e))
    }
}
