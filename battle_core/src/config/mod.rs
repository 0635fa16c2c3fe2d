//! Battle configuration, loaded from TOML

mod battle;

pub use battle::{BattleConfig, DefenderTurnGuard, ZeroDivisorPolicy};

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse battle config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid battle config: {0}")]
    Invalid(String),
}

/// Read a TOML file into any deserializable settings type
pub fn load_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_toml(&content)
}

/// Deserialize settings from a TOML document
pub fn parse_toml<T: DeserializeOwned>(content: &str) -> Result<T, ConfigError> {
    Ok(toml::from_str(content)?)
}
