//! Game state machine
//!
//! The engine owns the galaxy, gates commands on device health and on the
//! game still being in play, and decides when the mission is over. It never
//! prints; every command returns structured results for the caller to show.

use serde::Serialize;

use crate::models::config::{Difficulty, GameConfig};
use crate::models::constants::Device;
use crate::models::dice::Dice;
use crate::models::errors::{GameError, GameResult, Resource};
use crate::models::events::{Event, TurnReport};
use crate::models::galaxy::Galaxy;
use crate::models::navigation_types::{Heading, WarpFactor};
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::services::computer::{self, GalaxyMap, StatusReport};
use crate::services::scan::{self, LongRangeScan, SectorGrid};
use crate::services::{combat, navigation, turn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameState {
    Playing,
    Victory,
    Defeat { reason: DefeatReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefeatReason {
    ShipDestroyed,
    TimeExpired,
}

/// What the captain is told at the start of a mission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissionBriefing {
    pub stardate: i32,
    pub klingons: i32,
    pub starbases: i32,
    pub stardates: i32,
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
}

/// Core game engine that manages game state and victory/defeat conditions
pub struct GameEngine {
    galaxy: Galaxy,
    state: GameState,
    briefing: MissionBriefing,
}

impl GameEngine {
    /// New game with default tunables and a seeded RNG.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_config(GameConfig::default(), difficulty, Dice::seeded(seed))
    }

    pub fn with_config(config: GameConfig, difficulty: Difficulty, dice: Dice) -> Self {
        let galaxy = Galaxy::new(config, difficulty, dice);
        let ship = galaxy.enterprise();
        let briefing = MissionBriefing {
            stardate: galaxy.stardate(),
            klingons: galaxy.total_klingons(),
            starbases: galaxy.total_starbases(),
            stardates: galaxy.stardates_left(),
            quadrant: ship.quadrant,
            sector: ship.sector,
        };
        Self {
            galaxy,
            state: GameState::Playing,
            briefing,
        }
    }

    /// Returns an immutable reference to the galaxy
    pub fn galaxy(&self) -> &Galaxy {
        &self.galaxy
    }

    #[cfg(test)]
    pub(crate) fn galaxy_mut(&mut self) -> &mut Galaxy {
        &mut self.galaxy
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn briefing(&self) -> &MissionBriefing {
        &self.briefing
    }

    pub fn is_over(&self) -> bool {
        self.state != GameState::Playing
    }

    /// Evaluate the end conditions, in order: all Klingons gone, time run
    /// out, ship out of energy. Once terminal, the state never changes.
    pub fn check_game_over(&mut self) -> Option<GameState> {
        if self.is_over() {
            return Some(self.state.clone());
        }

        let outcome = if self.galaxy.all_klingons_destroyed() {
            GameState::Victory
        } else if self.galaxy.is_time_expired() {
            GameState::Defeat {
                reason: DefeatReason::TimeExpired,
            }
        } else if self.galaxy.is_ship_destroyed() {
            GameState::Defeat {
                reason: DefeatReason::ShipDestroyed,
            }
        } else {
            return None;
        };

        tracing::info!(
            state = ?outcome,
            klingons_left = self.galaxy.total_klingons(),
            stardates_left = self.galaxy.stardates_left(),
            energy = self.galaxy.enterprise().energy,
            "game over"
        );
        self.state = outcome.clone();
        Some(outcome)
    }

    fn ensure_playing(&mut self) -> GameResult<()> {
        match self.check_game_over() {
            Some(state) => Err(GameError::GameOver(state)),
            None => Ok(()),
        }
    }

    fn ensure_operational(&self, device: Device) -> GameResult<()> {
        if self.galaxy.enterprise().is_damaged(device) {
            return Err(GameError::DeviceDamaged(device));
        }
        Ok(())
    }

    // ========== Turn cycle ==========

    /// Repairs, random breakdowns and starbase resupply. Call once per
    /// command cycle, before the command.
    pub fn advance_turn(&mut self) -> GameResult<TurnReport> {
        self.ensure_playing()?;
        Ok(turn::advance_turn(&mut self.galaxy))
    }

    /// Klingons in the loaded quadrant fire back. Call once per command
    /// cycle, after the command.
    pub fn klingon_attack(&mut self) -> GameResult<Vec<Event>> {
        if self.is_over() {
            return Err(GameError::GameOver(self.state.clone()));
        }
        Ok(combat::klingons_fire(&mut self.galaxy))
    }

    // ========== Queries ==========

    pub fn short_range_scan(&self) -> GameResult<SectorGrid> {
        self.ensure_operational(Device::ShortRangeSensor)?;
        Ok(scan::short_range_scan(&self.galaxy))
    }

    pub fn long_range_scan(&self) -> GameResult<LongRangeScan> {
        self.ensure_operational(Device::LongRangeSensor)?;
        Ok(scan::long_range_scan(&self.galaxy))
    }

    pub fn galaxy_map(&self) -> GameResult<GalaxyMap> {
        self.ensure_operational(Device::ComputerDisplay)?;
        Ok(computer::galaxy_map(&self.galaxy))
    }

    /// Always available; needs no device.
    pub fn status(&self) -> StatusReport {
        computer::status_report(&self.galaxy)
    }

    // ========== Commands ==========

    pub fn fire_phasers(&mut self, amount: i32) -> GameResult<Vec<Event>> {
        self.ensure_playing()?;
        self.ensure_operational(Device::Phaser)?;
        combat::fire_phasers(&mut self.galaxy, amount)
    }

    /// Tubes working and at least one torpedo aboard.
    pub fn check_torpedo_ready(&self) -> GameResult<()> {
        self.ensure_operational(Device::PhotonTubes)?;
        let torpedoes = self.galaxy.enterprise().torpedoes;
        if torpedoes <= 0 {
            return Err(GameError::InsufficientResources {
                resource: Resource::Torpedoes,
                required: 1,
                available: torpedoes,
            });
        }
        Ok(())
    }

    pub fn fire_torpedo(&mut self, heading: f64) -> GameResult<Vec<Event>> {
        self.ensure_playing()?;
        self.check_torpedo_ready()?;
        let heading = Heading::new(heading)?;
        combat::fire_torpedo(&mut self.galaxy, heading)
    }

    /// Validate a warp factor and confirm the ship can pay for it, before
    /// any heading is asked for.
    pub fn check_warp(&self, factor: f64) -> GameResult<WarpFactor> {
        self.ensure_operational(Device::WarpEngine)?;
        let factor = WarpFactor::new(factor)?;
        navigation::check_warp_energy(&self.galaxy, factor)?;
        Ok(factor)
    }

    pub fn warp(&mut self, factor: f64, heading: f64) -> GameResult<Vec<Event>> {
        self.ensure_playing()?;
        let factor = self.check_warp(factor)?;
        let heading = Heading::new(heading)?;
        navigation::warp(&mut self.galaxy, factor, heading)
    }
}
