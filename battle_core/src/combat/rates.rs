//! Hit chance and damage rate derivation
//!
//! Both rates compare a combatant's offensive stat to the opponent's matching
//! defensive stat, relative to the offensive stat itself:
//!
//! - chance_to_hit = (attack - opponent.defense) / attack × 100
//! - damage_rate   = (damage - opponent.armor)   / damage × 100
//!
//! Negative results are clamped to 0. With positive stats both land in
//! [0, 100]; negative stats can push them past 100. A rate that overflows
//! to infinity is rejected.

use crate::config::ZeroDivisorPolicy;
use crate::error::{BattleError, ValidationError};
use crate::opponent::Combatant;
use crate::types::Role;
use serde::{Deserialize, Serialize};

/// Derived rates for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RateSet {
    pub chance_to_hit: f64,
    pub damage_rate: f64,
}

impl RateSet {
    /// Derive a combatant's rates against an opponent
    pub fn derive(
        own: &Combatant,
        opponent: &Combatant,
        policy: ZeroDivisorPolicy,
    ) -> Result<Self, ValidationError> {
        Ok(RateSet {
            chance_to_hit: hit_chance_of(own, opponent, policy)?,
            damage_rate: damage_rate_of(own, opponent, policy)?,
        })
    }

    /// Largest damage a single hit can deal
    pub fn max_hit(&self) -> u32 {
        // Saturating float-to-int cast; the rate is never negative
        self.damage_rate as u32
    }
}

/// Rates for both sides of a battle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rates {
    pub attacker: RateSet,
    pub defender: RateSet,
}

impl Rates {
    /// Derive both sides' rates, hit chances first
    ///
    /// When neither side can hit, the battle is already a draw and the damage
    /// rates are informational only: one that can't be derived is reported
    /// as 0 instead of failing the battle.
    pub fn derive(
        attacker: &Combatant,
        defender: &Combatant,
        policy: ZeroDivisorPolicy,
    ) -> Result<Self, BattleError> {
        let attacker_cth = hit_chance_of(attacker, defender, policy)
            .map_err(|e| BattleError::invalid(Role::Attacker, e))?;
        let defender_cth = hit_chance_of(defender, attacker, policy)
            .map_err(|e| BattleError::invalid(Role::Defender, e))?;
        let no_hits = attacker_cth == 0.0 && defender_cth == 0.0;

        let derive_damage = |own: &Combatant, opponent: &Combatant, role: Role| {
            match damage_rate_of(own, opponent, policy) {
                Ok(rate) => Ok(rate),
                Err(_) if no_hits => Ok(0.0),
                Err(e) => Err(BattleError::invalid(role, e)),
            }
        };

        Ok(Rates {
            attacker: RateSet {
                chance_to_hit: attacker_cth,
                damage_rate: derive_damage(attacker, defender, Role::Attacker)?,
            },
            defender: RateSet {
                chance_to_hit: defender_cth,
                damage_rate: derive_damage(defender, attacker, Role::Defender)?,
            },
        })
    }

    /// Whether the battle is a draw before any round is fought
    ///
    /// Neither side can land a hit, or neither side can deal damage.
    pub fn early_draw(&self) -> bool {
        let no_hits = self.attacker.chance_to_hit == 0.0 && self.defender.chance_to_hit == 0.0;
        let no_damage = self.attacker.damage_rate == 0.0 && self.defender.damage_rate == 0.0;
        no_hits || no_damage
    }
}

/// Chance to hit as a percentage
///
/// Returns `None` when `attack` is zero under [`ZeroDivisorPolicy::Reject`],
/// or when the result overflows.
pub fn chance_to_hit(
    attack: f64,
    opponent_defense: f64,
    policy: ZeroDivisorPolicy,
) -> Option<f64> {
    relative_rate(attack, opponent_defense, policy).ok()
}

/// Damage rate as a percentage
///
/// Returns `None` when `damage` is zero under [`ZeroDivisorPolicy::Reject`],
/// or when the result overflows.
pub fn damage_rate(
    damage: f64,
    opponent_armor: f64,
    policy: ZeroDivisorPolicy,
) -> Option<f64> {
    relative_rate(damage, opponent_armor, policy).ok()
}

fn hit_chance_of(
    own: &Combatant,
    opponent: &Combatant,
    policy: ZeroDivisorPolicy,
) -> Result<f64, ValidationError> {
    relative_rate(own.attack, opponent.defense, policy).map_err(|fault| fault.on("attack"))
}

fn damage_rate_of(
    own: &Combatant,
    opponent: &Combatant,
    policy: ZeroDivisorPolicy,
) -> Result<f64, ValidationError> {
    relative_rate(own.damage, opponent.armor, policy).map_err(|fault| fault.on("damage"))
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum RateFault {
    ZeroDivisor,
    Overflow,
}

impl RateFault {
    fn on(self, field: &'static str) -> ValidationError {
        match self {
            RateFault::ZeroDivisor => ValidationError::ZeroDivisor(field),
            RateFault::Overflow => ValidationError::RateOverflow(field),
        }
    }
}

fn relative_rate(own: f64, opposing: f64, policy: ZeroDivisorPolicy) -> Result<f64, RateFault> {
    if own == 0.0 {
        return match policy {
            ZeroDivisorPolicy::ZeroRate => Ok(0.0),
            ZeroDivisorPolicy::Reject => Err(RateFault::ZeroDivisor),
        };
    }
    let rate = (own - opposing) / own * 100.0;
    if rate.is_infinite() && rate > 0.0 {
        return Err(RateFault::Overflow);
    }
    // Also folds -0.0, -inf and NaN into 0
    Ok(if rate > 0.0 { rate } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: ZeroDivisorPolicy = ZeroDivisorPolicy::ZeroRate;

    #[test]
    fn test_chance_to_hit() {
        // (100 - 25) / 100 = 75%
        let cth = chance_to_hit(100.0, 25.0, POLICY).unwrap();
        assert!((cth - 75.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rates_clamped_at_zero() {
        assert_eq!(chance_to_hit(10.0, 10.0, POLICY), Some(0.0));
        assert_eq!(chance_to_hit(10.0, 50.0, POLICY), Some(0.0));
        assert_eq!(damage_rate(5.0, 20.0, POLICY), Some(0.0));
    }

    #[test]
    fn test_negative_defense_exceeds_hundred() {
        // (10 + 10) / 10 = 200%
        let cth = chance_to_hit(10.0, -10.0, POLICY).unwrap();
        assert!((cth - 200.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_divisor_policy() {
        assert_eq!(chance_to_hit(0.0, 0.0, ZeroDivisorPolicy::ZeroRate), Some(0.0));
        assert_eq!(damage_rate(0.0, -5.0, ZeroDivisorPolicy::ZeroRate), Some(0.0));
        assert_eq!(chance_to_hit(0.0, 0.0, ZeroDivisorPolicy::Reject), None);
    }

    #[test]
    fn test_overflowing_rate_rejected() {
        // (1e-300 + 1e10) / 1e-300 overflows to +inf
        assert_eq!(chance_to_hit(1e-300, -1e10, POLICY), None);

        let own = Combatant::new(1e-300, 0.0, 0.0, 10.0);
        let opponent = Combatant::new(10.0, -1e10, 0.0, 10.0);
        let err = RateSet::derive(&own, &opponent, POLICY).unwrap_err();
        assert_eq!(err, ValidationError::RateOverflow("attack"));

        let err = Rates::derive(&own, &opponent, POLICY).unwrap_err();
        assert_eq!(
            err,
            BattleError::InvalidOpponent {
                role: Role::Attacker,
                source: ValidationError::RateOverflow("attack"),
            }
        );
    }

    #[test]
    fn test_underflowing_rate_clamped() {
        // (1e-300 - 1e10) / 1e-300 overflows to -inf, clamped like any negative rate
        assert_eq!(chance_to_hit(1e-300, 1e10, POLICY), Some(0.0));
    }

    #[test]
    fn test_rate_set_reports_zero_field() {
        let own = Combatant::new(10.0, 0.0, 0.0, 0.0);
        let opponent = Combatant::new(10.0, 0.0, 0.0, 10.0);

        let err = RateSet::derive(&own, &opponent, ZeroDivisorPolicy::Reject).unwrap_err();
        assert_eq!(err, ValidationError::ZeroDivisor("damage"));

        let rates = RateSet::derive(&own, &opponent, POLICY).unwrap();
        assert!((rates.chance_to_hit - 100.0).abs() < f64::EPSILON);
        assert_eq!(rates.damage_rate, 0.0);
    }

    #[test]
    fn test_hit_chances_checked_before_damage() {
        // Neither side can hit, so the zero damage never matters
        let own = Combatant::new(10.0, 10.0, 0.0, 0.0);
        let opponent = Combatant::new(10.0, 10.0, 0.0, 10.0);

        let rates = Rates::derive(&own, &opponent, ZeroDivisorPolicy::Reject).unwrap();
        assert!(rates.early_draw());
        assert_eq!(rates.attacker.damage_rate, 0.0);

        // Once a side can hit, the zero damage is rejected
        let opponent = Combatant::new(10.0, 0.0, 0.0, 10.0);
        let err = Rates::derive(&own, &opponent, ZeroDivisorPolicy::Reject).unwrap_err();
        assert_eq!(
            err,
            BattleError::InvalidOpponent {
                role: Role::Attacker,
                source: ValidationError::ZeroDivisor("damage"),
            }
        );
    }

    #[test]
    fn test_max_hit_truncates() {
        let rates = RateSet {
            chance_to_hit: 50.0,
            damage_rate: 66.67,
        };
        assert_eq!(rates.max_hit(), 66);
    }

    #[test]
    fn test_early_draw() {
        let hits_no_damage = Rates {
            attacker: RateSet {
                chance_to_hit: 100.0,
                damage_rate: 0.0,
            },
            defender: RateSet {
                chance_to_hit: 100.0,
                damage_rate: 0.0,
            },
        };
        assert!(hits_no_damage.early_draw());

        let misses = Rates {
            attacker: RateSet {
                chance_to_hit: 0.0,
                damage_rate: 50.0,
            },
            defender: RateSet {
                chance_to_hit: 0.0,
                damage_rate: 50.0,
            },
        };
        assert!(misses.early_draw());

        let one_sided = Rates {
            attacker: RateSet {
                chance_to_hit: 50.0,
                damage_rate: 50.0,
            },
            defender: RateSet {
                chance_to_hit: 0.0,
                damage_rate: 0.0,
            },
        };
        assert!(!one_sided.early_draw());
    }
}
