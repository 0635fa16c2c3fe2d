//! Combat resolution - Fight two combatants to a result

mod dice;
pub mod rates;
mod resolution;
mod result;

pub use dice::{Dice, LoadedDice};
pub use rates::{RateSet, Rates};
pub use resolution::{resolve, resolve_random, resolve_records, resolve_with_config};
pub use result::{BattleResult, Fighter, Round};
