//! Opponents - The combatant records fed into a battle

mod record;

pub use record::is_valid_opponent;

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};

/// A battle opponent: attack, defense, armor and damage, plus optional health
///
/// Health defaults to [`crate::types::INIT_HEALTH`] (or the configured
/// initial health) when not supplied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub attack: f64,
    pub defense: f64,
    pub armor: f64,
    pub damage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<f64>,
}

impl Combatant {
    /// Create a combatant with default starting health
    pub fn new(attack: f64, defense: f64, armor: f64, damage: f64) -> Self {
        Combatant {
            attack,
            defense,
            armor,
            damage,
            health: None,
        }
    }

    /// Pre-seed the starting health
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = Some(health);
        self
    }

    /// Check that every stat is a usable number
    ///
    /// Fields are checked in order (attack, defense, armor, damage, health)
    /// and the first bad one is reported.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let required = [
            ("attack", self.attack),
            ("defense", self.defense),
            ("armor", self.armor),
            ("damage", self.damage),
        ];
        for (field, value) in required {
            if !value.is_finite() {
                return Err(ValidationError::NotNumeric(field));
            }
        }

        match self.health {
            Some(health) if !health.is_finite() => Err(ValidationError::NotNumeric("health")),
            _ => Ok(()),
        }
    }

    /// Check the record form of a combatant and convert it
    pub fn from_record(record: &serde_json::Value) -> Result<Self, ValidationError> {
        record::parse_record(record)
    }
}
