//! Configuration loading
//!
//! All fields carry serde defaults so a partial (or empty) config file is
//! valid. Sections deserialize independently, which the tests rely on.

use crate::error::{AdvisorError, Result};
use crate::optimizer::{MonteCarloConfig, WeightBounds};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub advisor: AdvisorSettings,
    #[serde(default)]
    pub optimizer: OptimizerSettings,
    #[serde(default)]
    pub monitor: MonitorSettings,
}

/// Advisory pipeline settings
#[derive(Debug, Clone, Deserialize)]
pub struct AdvisorSettings {
    /// Maximum opportunities returned per analysis
    #[serde(default = "default_max_opportunities")]
    pub max_opportunities: usize,
}

fn default_max_opportunities() -> usize {
    3
}

impl Default for AdvisorSettings {
    fn default() -> Self {
        Self {
            max_opportunities: default_max_opportunities(),
        }
    }
}

/// Monte Carlo optimizer settings
#[derive(Debug, Clone, Deserialize)]
pub struct OptimizerSettings {
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    #[serde(default)]
    pub min_weight: f64,
    #[serde(default = "default_max_weight")]
    pub max_weight: f64,
    /// Fixed seed for reproducible runs; omit for OS entropy
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_trials() -> u32 {
    1000
}

fn default_risk_free_rate() -> f64 {
    0.03
}

fn default_max_weight() -> f64 {
    1.0
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            risk_free_rate: default_risk_free_rate(),
            min_weight: 0.0,
            max_weight: default_max_weight(),
            seed: None,
        }
    }
}

impl OptimizerSettings {
    pub fn to_monte_carlo(&self) -> MonteCarloConfig {
        MonteCarloConfig {
            trials: self.trials,
            risk_free_rate: self.risk_free_rate,
            bounds: WeightBounds {
                min: self.min_weight,
                max: self.max_weight,
            },
        }
    }
}

/// Market monitor settings
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorSettings {
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
}

fn default_poll_interval_secs() -> u64 {
    300
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval_secs(),
        }
    }
}

impl MonitorSettings {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }
}

impl Config {
    /// Load from a TOML file, with `BAOBAB_`-prefixed environment
    /// variables overriding file values (e.g. `BAOBAB_OPTIMIZER__TRIALS`).
    pub fn load(path: &str) -> Result<Self> {
        config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("BAOBAB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| AdvisorError::Config(e.to_string()))
    }
}
