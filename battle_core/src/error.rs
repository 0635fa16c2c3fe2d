//! Error types for opponent validation and battle resolution

use crate::types::Role;
use thiserror::Error;

/// Why a combatant record was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("combatant record must be an object")]
    NotARecord,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` is not a valid number")]
    NotNumeric(&'static str),
    #[error("field `{0}` is zero and cannot be used as a divisor")]
    ZeroDivisor(&'static str),
    #[error("field `{0}` yields a rate too large to represent")]
    RateOverflow(&'static str),
}

/// Battle resolution error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BattleError {
    #[error("invalid {role}: {source}")]
    InvalidOpponent {
        role: Role,
        #[source]
        source: ValidationError,
    },
    #[error("{0}")]
    InvalidConfig(String),
    #[error("battle still undecided after {rounds} rounds")]
    RoundLimitExceeded { rounds: u32 },
}

impl BattleError {
    pub(crate) fn invalid(role: Role, source: ValidationError) -> Self {
        BattleError::InvalidOpponent { role, source }
    }

    /// Whether this error came from opponent validation
    pub fn is_validation_failure(&self) -> bool {
        matches!(self, BattleError::InvalidOpponent { .. })
    }
}
