//! Game configuration
//!
//! Tunables default to the classic values. A JSON file may override any
//! subset of them.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    DAMAGE_CHANCE_PERCENT, INITIAL_ENERGY, INITIAL_TORPEDOES, MISSION_STARDATES,
    STARTING_STARDATE, YELLOW_ALERT_ENERGY,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[default]
    Normal,
    Difficult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Energy at game start and after every docked turn.
    pub initial_energy: i32,
    /// Torpedoes at game start and after every docked turn.
    pub initial_torpedoes: i32,
    pub mission_stardates: i32,
    pub starting_stardate: i32,
    /// Per-turn chance (0-100) of a random device failure.
    pub damage_chance_percent: i32,
    /// Below this much energy an undocked ship with no Klingons in sight is at yellow alert.
    pub yellow_alert_energy: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_energy: INITIAL_ENERGY,
            initial_torpedoes: INITIAL_TORPEDOES,
            mission_stardates: MISSION_STARDATES,
            starting_stardate: STARTING_STARDATE,
            damage_chance_percent: DAMAGE_CHANCE_PERCENT,
            yellow_alert_energy: YELLOW_ALERT_ENERGY,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse game config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read game config from {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid game config: {0}")]
    Invalid(String),
}

impl GameConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(data: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_energy <= 0 {
            return Err(ConfigError::Invalid(format!(
                "initial_energy must be positive, got {}",
                self.initial_energy
            )));
        }
        if self.initial_torpedoes < 0 {
            return Err(ConfigError::Invalid(format!(
                "initial_torpedoes must not be negative, got {}",
                self.initial_torpedoes
            )));
        }
        if self.mission_stardates <= 0 {
            return Err(ConfigError::Invalid(format!(
                "mission_stardates must be positive, got {}",
                self.mission_stardates
            )));
        }
        if self.starting_stardate < 0 {
            return Err(ConfigError::Invalid(format!(
                "starting_stardate must not be negative, got {}",
                self.starting_stardate
            )));
        }
        if self
            .starting_stardate
            .checked_add(self.mission_stardates)
            .is_none()
        {
            return Err(ConfigError::Invalid(format!(
                "starting_stardate {} plus mission_stardates {} is out of range",
                self.starting_stardate, self.mission_stardates
            )));
        }
        if self.yellow_alert_energy <= 0 {
            return Err(ConfigError::Invalid(format!(
                "yellow_alert_energy must be positive, got {}",
                self.yellow_alert_energy
            )));
        }
        if !(0..=100).contains(&self.damage_chance_percent) {
            return Err(ConfigError::Invalid(format!(
                "damage_chance_percent must be within 0-100, got {}",
                self.damage_chance_percent
            )));
        }
        Ok(())
    }
}
