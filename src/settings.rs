//! Session settings
//!
//! Loaded from an optional JSON file; anything missing falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::STARTING_LIVES;
use crate::error::SettingsError;

/// Runtime settings for a play session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed; a random one is drawn when absent
    pub seed: Option<u64>,
    /// Lives the ship starts with
    pub starting_lives: u32,

    // === Driver ===
    /// Let the built-in pilot fly the ship
    pub autopilot: bool,
    /// Stop after this many ticks even if the game is not over (0 = no limit)
    pub max_ticks: u64,
    /// Pace ticks against the wall clock instead of running flat out
    pub realtime: bool,

    // === Output ===
    /// Log the HUD every this many ticks
    pub report_interval_ticks: u64,
    /// Print the final snapshot as JSON on exit
    pub dump_snapshot: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            starting_lives: STARTING_LIVES,

            autopilot: true,
            max_ticks: 30 * 120,
            realtime: false,

            report_interval_ticks: 30 * 10,
            dump_snapshot: false,
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.starting_lives == 0 {
            return Err(SettingsError::Invalid {
                field: "starting_lives",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.report_interval_ticks == 0 {
            return Err(SettingsError::Invalid {
                field: "report_interval_ticks",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// The configured seed, or a fresh random one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.starting_lives, STARTING_LIVES);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 42, "starting_lives": 3 }"#).unwrap();
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.starting_lives, 3);
        assert_eq!(settings.resolve_seed(), 42);
        assert_eq!(settings.max_ticks, Settings::default().max_ticks);
    }

    #[test]
    fn test_rejects_zero_lives() {
        let err = Settings::from_json(r#"{ "starting_lives": 0 }"#).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "starting_lives",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Settings::from_json("{ starting_lives: ").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, SettingsError::Io { .. }));
    }
}
