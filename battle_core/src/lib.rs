//! battle_core - Turn-based battle resolution for role-playing games
//!
//! This library provides:
//! - Combatant: An opponent's attack, defense, armor and damage stats
//! - Rate derivation: Chance to hit and damage rate for each side
//! - Battle resolution: Alternating rounds until one side drops
//! - BattleSimulation: Win rates over many battles of one matchup

pub mod combat;
pub mod config;
pub mod error;
pub mod opponent;
pub mod prelude;
pub mod simulation;
pub mod types;

// Re-export core types for convenience
pub use combat::{
    resolve, resolve_random, resolve_records, resolve_with_config, BattleResult, Dice, Fighter,
    LoadedDice, Round,
};
pub use config::{BattleConfig, ConfigError, DefenderTurnGuard, ZeroDivisorPolicy};
pub use error::{BattleError, ValidationError};
pub use opponent::{is_valid_opponent, Combatant};
pub use simulation::BattleSimulation;
pub use types::{BattleOutcome, Role, INIT_HEALTH};
