//! Loosely-typed combatant records
//!
//! Embedding applications often hand over opponents as plain JSON objects.
//! A field is usable when it is a JSON number, or a string holding a finite
//! decimal number (surrounding whitespace allowed). Absent and `null` fields
//! count as missing.

use super::Combatant;
use crate::error::ValidationError;
use serde_json::Value;

const REQUIRED_FIELDS: [&str; 4] = ["attack", "defense", "armor", "damage"];

/// Whether a record describes a well-formed opponent
pub fn is_valid_opponent(record: &Value) -> bool {
    parse_record(record).is_ok()
}

pub(super) fn parse_record(record: &Value) -> Result<Combatant, ValidationError> {
    let map = record.as_object().ok_or(ValidationError::NotARecord)?;

    let mut stats = [0.0; 4];
    for (slot, field) in stats.iter_mut().zip(REQUIRED_FIELDS) {
        *slot = match map.get(field) {
            None | Some(Value::Null) => return Err(ValidationError::MissingField(field)),
            Some(value) => numeric(value).ok_or(ValidationError::NotNumeric(field))?,
        };
    }

    let health = match map.get("health") {
        None | Some(Value::Null) => None,
        Some(value) => Some(numeric(value).ok_or(ValidationError::NotNumeric("health"))?),
    };

    let [attack, defense, armor, damage] = stats;
    Ok(Combatant {
        attack,
        defense,
        armor,
        damage,
        health,
    })
}

fn numeric(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => parse_numeric_str(s)?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn parse_numeric_str(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    // f64::from_str also takes "inf" and "NaN"; only plain decimal notation counts
    let decimal = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if trimmed.is_empty() || !decimal {
        return None;
    }
    trimmed.parse().ok()
}
