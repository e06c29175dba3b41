//! Configuration Validator, the strict gate in front of the optimizer.
//!
//! Rules run in a fixed order and stop at the first failure; each failure
//! has its own error variant.

use serde::Deserialize;

use crate::catalog::Catalog;
use crate::config::{
    DEFAULT_MODEL, DEFAULT_TEMPERATURE, MAX_TEMPERATURE, MIN_TEMPERATURE, SUPPORTED_MODELS,
};
use crate::errors::{IsoPromptError, Result};

/// The tuple a caller wants to optimize with. Absent fields take defaults.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct OptimizationConfig {
    pub mode: Option<String>,
    pub domain: Option<String>,
    pub temperature: Option<f64>,
    pub model: Option<String>,
}

impl OptimizationConfig {
    pub fn is_empty(&self) -> bool {
        self.mode.is_none()
            && self.domain.is_none()
            && self.temperature.is_none()
            && self.model.is_none()
    }
}

/// Validates against the built-in catalog.
pub fn validate_config(config: &OptimizationConfig) -> Result<()> {
    validate_config_with(Catalog::builtin(), config)
}

pub fn validate_config_with(catalog: &Catalog, config: &OptimizationConfig) -> Result<()> {
    if config.is_empty() {
        return Err(IsoPromptError::InvalidConfiguration(
            "no configuration provided".to_string(),
        ));
    }

    // Empty strings count as "not provided"
    if let Some(mode) = provided(&config.mode) {
        if !catalog.is_valid_mode(mode) {
            return Err(IsoPromptError::InvalidMode {
                given: mode.to_string(),
                available: owned(catalog.mode_keys()),
            });
        }
    }

    if let Some(domain) = provided(&config.domain) {
        if !catalog.is_valid_domain(domain) {
            return Err(IsoPromptError::InvalidDomain {
                given: domain.to_string(),
                available: owned(catalog.domain_keys()),
            });
        }
    }

    let temperature = config.temperature.unwrap_or(DEFAULT_TEMPERATURE);
    // NaN fails the range check
    if !(MIN_TEMPERATURE..=MAX_TEMPERATURE).contains(&temperature) {
        return Err(IsoPromptError::InvalidTemperature(temperature));
    }

    let model = config.model.as_deref().unwrap_or(DEFAULT_MODEL);
    if !SUPPORTED_MODELS.contains(&model) {
        return Err(IsoPromptError::InvalidModel {
            given: model.to_string(),
            available: owned(SUPPORTED_MODELS.to_vec()),
        });
    }

    Ok(())
}

fn provided(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn owned(keys: Vec<&str>) -> Vec<String> {
    keys.into_iter().map(str::to_string).collect()
}
