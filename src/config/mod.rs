//! # Configuration Management
//!
//! Sectioned, TOML-backed configuration for the game: player identity, seed
//! file locations, and logging. Values are validated on load and every
//! section has sensible defaults, so a missing `config.toml` is never fatal
//! to `pymon play` — the built-in world is used instead.
//!
//! ```toml
//! [game]
//! player_name = "Kimimon"
//!
//! [seed]
//! locations = "data/locations.json"
//! creatures = "data/creatures.json"
//! items = "data/items.json"
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Core game settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    /// Nickname of the player's starting Pymon.
    #[serde(default = "default_player_name")]
    pub player_name: String,
}

fn default_player_name() -> String {
    "Kimimon".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_name: default_player_name(),
        }
    }
}

/// Where the world seed files live. When unset, the built-in canonical
/// world is used.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub locations: Option<String>,
    #[serde(default)]
    pub creatures: Option<String>,
    #[serde(default)]
    pub items: Option<String>,
}

impl SeedConfig {
    /// The three paths together, or `None` when any is missing. Partial
    /// seed configuration is rejected by validation.
    pub fn paths(&self) -> Option<(&str, &str, &str)> {
        match (&self.locations, &self.creatures, &self.items) {
            (Some(l), Some(c), Some(i)) => Some((l, c, i)),
            _ => None,
        }
    }

    fn is_partial(&self) -> bool {
        let set = [&self.locations, &self.creatures, &self.items]
            .iter()
            .filter(|p| p.is_some())
            .count();
        set != 0 && set != 3
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level when no `-v` flags are given: error, warn, info,
    /// debug, or trace.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub game: GameConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| anyhow!("cannot read {}: {e}", path.display()))?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| anyhow!("invalid {}: {e}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write a default configuration file, refusing to clobber an existing
    /// one.
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Err(anyhow!("{} already exists", path.display()));
        }
        let config = Config::default();
        fs::write(path, toml::to_string_pretty(&config)?)?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.game.player_name.trim().is_empty() {
            return Err(anyhow!("game.player_name cannot be empty"));
        }
        if self.seed.is_partial() {
            return Err(anyhow!(
                "seed configuration must name all three files or none"
            ));
        }
        match self.logging.level.as_str() {
            "error" | "warn" | "info" | "debug" | "trace" => Ok(()),
            other => Err(anyhow!("unknown logging.level '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.game.player_name, "Kimimon");
        assert!(config.seed.paths().is_none());
    }

    #[test]
    fn partial_seed_config_is_rejected() {
        let config: Config = toml::from_str(
            r#"
            [seed]
            locations = "data/locations.json"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }
}
