//! Core types shared across the battle resolver

use serde::{Deserialize, Serialize};
use std::fmt;

/// Starting health of each combatant, meant to be read as a percentage
pub const INIT_HEALTH: f64 = 100.0;

/// Final outcome of a battle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BattleOutcome {
    /// The attacker brought the defender's health to zero
    AttackerWins,
    /// Neither side could ever hit, or neither could ever deal damage
    Draw,
    /// The defender brought the attacker's health to zero
    DefenderWins,
}

impl BattleOutcome {
    /// Legacy numeric result code (1 = attacker wins, 0 = draw, -1 = defender wins)
    pub fn code(self) -> i8 {
        match self {
            BattleOutcome::AttackerWins => 1,
            BattleOutcome::Draw => 0,
            BattleOutcome::DefenderWins => -1,
        }
    }

    /// Parse a legacy numeric result code
    pub fn from_code(code: i8) -> Option<Self> {
        match code {
            1 => Some(BattleOutcome::AttackerWins),
            0 => Some(BattleOutcome::Draw),
            -1 => Some(BattleOutcome::DefenderWins),
            _ => None,
        }
    }

    /// The side that won, if any
    pub fn winner(self) -> Option<Role> {
        match self {
            BattleOutcome::AttackerWins => Some(Role::Attacker),
            BattleOutcome::Draw => None,
            BattleOutcome::DefenderWins => Some(Role::Defender),
        }
    }
}

/// Which side of the battle a combatant is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Attacker,
    Defender,
}

impl Role {
    /// The opposing side
    pub fn opponent(self) -> Role {
        match self {
            Role::Attacker => Role::Defender,
            Role::Defender => Role::Attacker,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Attacker => write!(f, "attacker"),
            Role::Defender => write!(f, "defender"),
        }
    }
}
