//! Battle tuning and compatibility switches

use super::ConfigError;
use crate::types::INIT_HEALTH;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do when a combatant's own attack or damage is zero
///
/// Both rates divide by the acting combatant's own stat, so a zero stat has
/// no defined rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroDivisorPolicy {
    /// The rate is 0: that combatant can't hit (or can't hurt)
    #[default]
    ZeroRate,
    /// The combatant fails validation
    Reject,
}

/// Which damage rate gates the defender's turn in each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefenderTurnGuard {
    /// The defender only acts while the attacker's damage rate is positive.
    /// Legacy behavior, kept for result compatibility.
    #[default]
    AttackerDamageRate,
    /// The defender acts while its own damage rate is positive
    DefenderDamageRate,
}

/// Tunable battle settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Health given to combatants that don't bring their own
    #[serde(default = "default_initial_health")]
    pub initial_health: f64,
    /// Abort the battle after this many rounds (unbounded when absent)
    #[serde(default)]
    pub max_rounds: Option<u32>,
    #[serde(default)]
    pub zero_divisor: ZeroDivisorPolicy,
    #[serde(default)]
    pub defender_guard: DefenderTurnGuard,
}

impl Default for BattleConfig {
    fn default() -> Self {
        BattleConfig {
            initial_health: INIT_HEALTH,
            max_rounds: None,
            zero_divisor: ZeroDivisorPolicy::default(),
            defender_guard: DefenderTurnGuard::default(),
        }
    }
}

fn default_initial_health() -> f64 {
    INIT_HEALTH
}

impl BattleConfig {
    /// Set a round cap
    pub fn with_max_rounds(mut self, max_rounds: u32) -> Self {
        self.max_rounds = Some(max_rounds);
        self
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config: BattleConfig = super::load_toml(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a config document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BattleConfig = super::parse_toml(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings make sense
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.initial_health.is_finite() || self.initial_health <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "initial_health must be a positive number, got {}",
                self.initial_health
            )));
        }
        if self.max_rounds == Some(0) {
            return Err(ConfigError::Invalid("max_rounds must be at least 1".to_string()));
        }
        Ok(())
    }
}
