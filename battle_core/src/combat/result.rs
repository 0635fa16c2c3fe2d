//! BattleResult - Outcome of a resolved battle

use super::rates::RateSet;
use crate::opponent::Combatant;
use crate::types::{BattleOutcome, Role};
use serde::{Deserialize, Serialize};

/// A combatant's state during and after a battle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fighter {
    pub attack: f64,
    pub defense: f64,
    pub armor: f64,
    pub damage: f64,
    /// Current health, may end below zero after a killing blow
    pub health: f64,
    /// Percent chance to land a hit each round
    pub chance_to_hit: f64,
    /// Upper bound for the damage of a single hit
    pub damage_rate: f64,
}

impl Fighter {
    pub(crate) fn new(stats: &Combatant, rates: RateSet, default_health: f64) -> Self {
        Fighter {
            attack: stats.attack,
            defense: stats.defense,
            armor: stats.armor,
            damage: stats.damage,
            health: stats.health.unwrap_or(default_health),
            chance_to_hit: rates.chance_to_hit,
            damage_rate: rates.damage_rate,
        }
    }

    pub fn rates(&self) -> RateSet {
        RateSet {
            chance_to_hit: self.chance_to_hit,
            damage_rate: self.damage_rate,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0.0
    }
}

/// One exchange: the attacker's turn and possibly the defender's
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub attacker_roll: u32,
    /// Only set when the attacker hit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attacker_damage: Option<u32>,
    /// Only set when the defender got a turn
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defender_roll: Option<u32>,
    /// Only set when the defender hit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defender_damage: Option<u32>,
    /// Health at the end of the round
    pub attacker_health: f64,
    pub defender_health: f64,
}

impl Round {
    /// Damage dealt by one side this round
    pub fn damage_by(&self, role: Role) -> u32 {
        match role {
            Role::Attacker => self.attacker_damage.unwrap_or(0),
            Role::Defender => self.defender_damage.unwrap_or(0),
        }
    }

    /// Whether one side landed a hit this round (a 0-damage hit still counts)
    pub fn hit_by(&self, role: Role) -> bool {
        match role {
            Role::Attacker => self.attacker_damage.is_some(),
            Role::Defender => self.defender_damage.is_some(),
        }
    }
}

/// Result of resolving a battle between two combatants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattleResult {
    pub attacker: Fighter,
    pub defender: Fighter,
    #[serde(rename = "result")]
    pub outcome: BattleOutcome,
    /// Empty when the battle was drawn before it started
    pub rounds: Vec<Round>,
}

impl BattleResult {
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_draw(&self) -> bool {
        self.outcome == BattleOutcome::Draw
    }

    pub fn winner(&self) -> Option<Role> {
        self.outcome.winner()
    }

    pub fn fighter(&self, role: Role) -> &Fighter {
        match role {
            Role::Attacker => &self.attacker,
            Role::Defender => &self.defender,
        }
    }

    /// Total damage one side dealt across all rounds
    pub fn total_damage_dealt(&self, role: Role) -> u64 {
        self.rounds.iter().map(|r| u64::from(r.damage_by(role))).sum()
    }

    /// Number of rounds in which one side landed a hit
    pub fn hits(&self, role: Role) -> usize {
        self.rounds.iter().filter(|r| r.hit_by(role)).count()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let verdict = match self.outcome {
            BattleOutcome::AttackerWins => "Attacker wins",
            BattleOutcome::DefenderWins => "Defender wins",
            BattleOutcome::Draw => return "Draw, no rounds fought".to_string(),
        };

        format!(
            "{} after {} round{} ({} hits for {} damage vs {} hits for {} damage)",
            verdict,
            self.round_count(),
            if self.round_count() == 1 { "" } else { "s" },
            self.hits(Role::Attacker),
            self.total_damage_dealt(Role::Attacker),
            self.hits(Role::Defender),
            self.total_damage_dealt(Role::Defender),
        )
    }
}
