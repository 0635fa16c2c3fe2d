//! Batch simulation - Win rates for a matchup over many battles

use crate::combat::{resolve_with_config, Dice};
use crate::config::BattleConfig;
use crate::error::BattleError;
use crate::opponent::Combatant;
use crate::types::BattleOutcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tally of repeated battles between the same two combatants
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BattleSimulation {
    pub battles: u32,
    pub attacker_wins: u32,
    pub defender_wins: u32,
    pub draws: u32,
    /// Battles stopped by the configured round cap
    pub aborted: u32,
    /// Rounds fought across all finished battles
    pub total_rounds: u64,
}

impl BattleSimulation {
    /// Fight `iterations` battles and count the outcomes
    ///
    /// Invalid combatants fail the whole run; a battle hitting the round cap
    /// is counted as aborted.
    pub fn run<D: Dice + ?Sized>(
        attacker: &Combatant,
        defender: &Combatant,
        config: &BattleConfig,
        iterations: u32,
        dice: &mut D,
    ) -> Result<Self, BattleError> {
        let mut sim = BattleSimulation::default();

        for _ in 0..iterations {
            sim.battles += 1;
            match resolve_with_config(attacker, defender, config, dice) {
                Ok(result) => {
                    sim.total_rounds += result.rounds.len() as u64;
                    match result.outcome {
                        BattleOutcome::AttackerWins => sim.attacker_wins += 1,
                        BattleOutcome::DefenderWins => sim.defender_wins += 1,
                        BattleOutcome::Draw => sim.draws += 1,
                    }
                }
                Err(BattleError::RoundLimitExceeded { .. }) => sim.aborted += 1,
                Err(e) => return Err(e),
            }
        }

        debug!(
            battles = sim.battles,
            attacker_wins = sim.attacker_wins,
            defender_wins = sim.defender_wins,
            draws = sim.draws,
            aborted = sim.aborted,
            "simulation finished"
        );
        Ok(sim)
    }

    fn rate(&self, count: u32) -> f64 {
        if self.battles > 0 {
            count as f64 / self.battles as f64 * 100.0
        } else {
            0.0
        }
    }

    /// Attacker win rate as a percentage
    pub fn attacker_win_rate(&self) -> f64 {
        self.rate(self.attacker_wins)
    }

    /// Defender win rate as a percentage
    pub fn defender_win_rate(&self) -> f64 {
        self.rate(self.defender_wins)
    }

    /// Draw rate as a percentage
    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    /// Average rounds per finished battle
    pub fn avg_rounds(&self) -> f64 {
        let finished = self.battles - self.aborted;
        if finished > 0 {
            self.total_rounds as f64 / finished as f64
        } else {
            0.0
        }
    }
}
