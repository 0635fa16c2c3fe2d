//! Prelude module for convenient imports
//!
//! ```rust
//! use battle_core::prelude::*;
//! ```

// Core types
pub use crate::opponent::Combatant;
pub use crate::types::{BattleOutcome, Role, INIT_HEALTH};

// Combat
pub use crate::combat::{resolve, resolve_with_config, BattleResult, Dice, Fighter, Round};

// Config and errors
pub use crate::config::BattleConfig;
pub use crate::error::{BattleError, ValidationError};
