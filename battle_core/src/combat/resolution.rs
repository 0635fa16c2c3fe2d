//! Battle resolution - Fight two combatants round by round

use super::dice::Dice;
use super::rates::Rates;
use super::result::{BattleResult, Fighter, Round};
use crate::config::{BattleConfig, DefenderTurnGuard};
use crate::error::BattleError;
use crate::opponent::Combatant;
use crate::types::{BattleOutcome, Role};
use serde_json::Value;
use tracing::{debug, trace, warn};

/// Resolve a battle with the default config and thread-local randomness
pub fn resolve_random(
    attacker: &Combatant,
    defender: &Combatant,
) -> Result<BattleResult, BattleError> {
    let mut rng = rand::thread_rng();
    resolve(attacker, defender, &mut rng)
}

/// Resolve a battle with the default config
pub fn resolve<D: Dice + ?Sized>(
    attacker: &Combatant,
    defender: &Combatant,
    dice: &mut D,
) -> Result<BattleResult, BattleError> {
    resolve_with_config(attacker, defender, &BattleConfig::default(), dice)
}

/// Validate two loosely-typed opponent records, then resolve the battle
pub fn resolve_records<D: Dice + ?Sized>(
    attacker: &Value,
    defender: &Value,
    config: &BattleConfig,
    dice: &mut D,
) -> Result<BattleResult, BattleError> {
    let attacker =
        Combatant::from_record(attacker).map_err(|e| BattleError::invalid(Role::Attacker, e))?;
    let defender =
        Combatant::from_record(defender).map_err(|e| BattleError::invalid(Role::Defender, e))?;
    resolve_with_config(&attacker, &defender, config, dice)
}

/// Resolve a battle between an attacker and a defender
///
/// This is the main battle function:
/// 1. Validates the config and both combatants
/// 2. Derives each side's chance to hit, then each side's damage rate
/// 3. Ends in a draw, without fighting, if neither side can hit or neither can hurt
/// 4. Fights rounds (attacker first) until one side's health drops to zero or below
///
/// Dice are consumed in a fixed order each round: attacker hit roll, attacker
/// damage (on a hit), defender hit roll (if the defender gets a turn),
/// defender damage (on a hit).
pub fn resolve_with_config<D: Dice + ?Sized>(
    attacker: &Combatant,
    defender: &Combatant,
    config: &BattleConfig,
    dice: &mut D,
) -> Result<BattleResult, BattleError> {
    config
        .validate()
        .map_err(|e| BattleError::InvalidConfig(e.to_string()))?;
    attacker
        .validate()
        .map_err(|e| BattleError::invalid(Role::Attacker, e))?;
    defender
        .validate()
        .map_err(|e| BattleError::invalid(Role::Defender, e))?;

    let rates = Rates::derive(attacker, defender, config.zero_divisor)?;

    let mut attacker = Fighter::new(attacker, rates.attacker, config.initial_health);
    let mut defender = Fighter::new(defender, rates.defender, config.initial_health);

    if rates.early_draw() {
        debug!(
            attacker_cth = rates.attacker.chance_to_hit,
            defender_cth = rates.defender.chance_to_hit,
            attacker_damage_rate = rates.attacker.damage_rate,
            defender_damage_rate = rates.defender.damage_rate,
            "battle drawn before the first round"
        );
        return Ok(BattleResult {
            attacker,
            defender,
            outcome: BattleOutcome::Draw,
            rounds: Vec::new(),
        });
    }

    debug!(
        attacker_cth = attacker.chance_to_hit,
        attacker_damage_rate = attacker.damage_rate,
        attacker_health = attacker.health,
        defender_cth = defender.chance_to_hit,
        defender_damage_rate = defender.damage_rate,
        defender_health = defender.health,
        "battle started"
    );

    let mut rounds = Vec::new();
    while attacker.is_alive() && defender.is_alive() {
        if let Some(limit) = config.max_rounds {
            if rounds.len() >= limit as usize {
                warn!(
                    rounds = limit,
                    attacker_health = attacker.health,
                    defender_health = defender.health,
                    "battle aborted at round limit"
                );
                return Err(BattleError::RoundLimitExceeded { rounds: limit });
            }
        }

        let round = fight_round(&mut attacker, &mut defender, config.defender_guard, dice);
        trace!(number = rounds.len() + 1, ?round, "round fought");
        rounds.push(round);
    }

    // Attacker is checked first, so a double knockout goes to the defender
    let outcome = if attacker.is_alive() {
        BattleOutcome::AttackerWins
    } else {
        BattleOutcome::DefenderWins
    };
    debug!(?outcome, rounds = rounds.len(), "battle finished");

    Ok(BattleResult {
        attacker,
        defender,
        outcome,
        rounds,
    })
}

/// Fight a single round, attacker first
fn fight_round<D: Dice + ?Sized>(
    attacker: &mut Fighter,
    defender: &mut Fighter,
    guard: DefenderTurnGuard,
    dice: &mut D,
) -> Round {
    let attacker_roll = dice.roll(0, 100);
    let attacker_damage = strike(attacker, defender, attacker_roll, dice);

    let defender_can_act = match guard {
        DefenderTurnGuard::AttackerDamageRate => attacker.damage_rate > 0.0,
        DefenderTurnGuard::DefenderDamageRate => defender.damage_rate > 0.0,
    };

    let (defender_roll, defender_damage) = if defender_can_act && defender.is_alive() {
        let roll = dice.roll(0, 100);
        (Some(roll), strike(defender, attacker, roll, dice))
    } else {
        (None, None)
    };

    Round {
        attacker_roll,
        attacker_damage,
        defender_roll,
        defender_damage,
        attacker_health: attacker.health,
        defender_health: defender.health,
    }
}

/// Apply one strike if the hit roll is within the striker's chance to hit
///
/// Returns the damage dealt on a hit.
fn strike<D: Dice + ?Sized>(
    striker: &Fighter,
    target: &mut Fighter,
    roll: u32,
    dice: &mut D,
) -> Option<u32> {
    if f64::from(roll) > striker.chance_to_hit {
        return None;
    }
    let amount = dice.roll(0, striker.rates().max_hit());
    target.health -= f64::from(amount);
    Some(amount)
}
