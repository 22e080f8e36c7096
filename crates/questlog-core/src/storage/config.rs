//! TOML-based application configuration.
//!
//! Stores user preferences for the CLI front end:
//! - Owner name used when a fresh profile is created
//! - Profile save file name inside the data directory
//! - Whether fresh profiles get the starter goals
//!
//! Configuration is stored at `~/.config/questlog/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/questlog/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Owner name for freshly created profiles.
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
    /// Profile save file name, resolved under the data directory.
    #[serde(default = "default_save_file")]
    pub save_file: String,
    /// Seed freshly created profiles with the starter goals.
    #[serde(default = "default_true")]
    pub seed_starter_goals: bool,
}

fn default_owner_name() -> String {
    "adventurer".into()
}
fn default_save_file() -> String {
    "goals.txt".into()
}
fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner_name: default_owner_name(),
            save_file: default_save_file(),
            seed_starter_goals: true,
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        Ok(data_dir()?.join("config.toml"))
    }

    /// Load from disk, writing defaults on first run.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Persist to disk.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(Self::path()?, content)?;
        Ok(())
    }

    /// Get a config value as a display string by key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let value = json.get(key)?;
        match value {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value from its string form and persist.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key, a value that does not parse
    /// for the key's type, or a failed save.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "owner_name" => self.owner_name = value.to_string(),
            "save_file" => self.save_file = value.to_string(),
            "seed_starter_goals" => {
                self.seed_starter_goals =
                    value.parse().map_err(|_| ConfigError::InvalidValue {
                        key: key.to_string(),
                        value: value.to_string(),
                    })?;
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let cfg = Config::default();
        assert_eq!(cfg.save_file, "goals.txt");
        assert!(cfg.seed_starter_goals);
    }

    #[test]
    fn get_renders_every_key() {
        let cfg = Config::default();
        assert_eq!(cfg.get("owner_name").as_deref(), Some("adventurer"));
        assert_eq!(cfg.get("save_file").as_deref(), Some("goals.txt"));
        assert_eq!(cfg.get("seed_starter_goals").as_deref(), Some("true"));
        assert_eq!(cfg.get("no_such_key"), None);
    }

    #[test]
    fn toml_roundtrip_preserves_fields() {
        let mut cfg = Config::default();
        cfg.owner_name = "Ingrid".into();
        cfg.seed_starter_goals = false;

        let content = toml::to_string_pretty(&cfg).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.owner_name, "Ingrid");
        assert!(!parsed.seed_starter_goals);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("owner_name = \"Ingrid\"").unwrap();
        assert_eq!(parsed.owner_name, "Ingrid");
        assert_eq!(parsed.save_file, "goals.txt");
        assert!(parsed.seed_starter_goals);
    }
}
