use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::rules::Rules;

/// On-disk game setup.
///
/// ```toml
/// seed = 42
///
/// [rules]
/// stacks = 4
/// stack_capacity = 8
/// max_discards = 2
/// lookahead = 2
/// terminal = 2048
/// ```
///
/// Every key is optional; missing ones take the reference values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub seed: Option<u64>,
    pub rules: Rules,
}

impl GameConfig {
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let cfg: Self = toml::from_str(contents)?;
        cfg.rules.validate()?;
        Ok(cfg)
    }
}
