//! Galaxy model
//!
//! The authoritative game state: 64 quadrant summaries that persist for the
//! whole game, plus a disposable sector grid for whichever quadrant is
//! loaded. Only the summaries survive a quadrant change.

mod generation;
mod quadrant_ops;

use std::fmt;

use super::config::{Difficulty, GameConfig};
use super::constants::{Condition, SectorContent, GALAXY_SIZE, SECTOR_SIZE};
use super::dice::Dice;
use super::enterprise::Enterprise;
use super::events::Event;
use super::position::{QuadrantPosition, SectorPosition};
use super::quadrant::QuadrantData;
use super::sector_map::SectorMap;

pub use generation::{distribute, mission_totals};
pub use quadrant_ops::QuadrantEntry;
use quadrant_ops::{place_ship, populate_sector_map};

/// Consolidated Klingon count tracking
#[derive(Debug, Clone, Copy)]
struct KlingonCount {
    total: i32,
    initial: i32,
}

/// Top-level game state container.
pub struct Galaxy {
    config: GameConfig,
    stardates_left: i32,
    /// Indexed as quadrants[y][x].
    quadrants: [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE],
    klingon_count: KlingonCount,
    total_starbases: i32,
    initial_starbases: i32,
    enterprise: Enterprise,
    sector_map: SectorMap,
    dice: Dice,
}

impl Galaxy {
    /// Roll a new mission, scatter it across the galaxy and put the ship in
    /// a random starting quadrant.
    pub fn new(config: GameConfig, difficulty: Difficulty, mut dice: Dice) -> Self {
        let (klingons, starbases) = mission_totals(difficulty, &mut dice);
        let quadrants = distribute(klingons, starbases, &mut dice);

        let size = GALAXY_SIZE as i32;
        let qx = dice.below(size);
        let qy = dice.below(size);
        let sx = dice.below(SECTOR_SIZE as i32);
        let sy = dice.below(SECTOR_SIZE as i32);
        let quadrant = QuadrantPosition::new(qx, qy);
        let sector = SectorPosition::new(sx, sy);

        let enterprise = Enterprise::new(
            quadrant,
            sector,
            config.initial_energy,
            config.initial_torpedoes,
        );

        let mut galaxy = Galaxy {
            stardates_left: config.mission_stardates,
            config,
            quadrants,
            klingon_count: KlingonCount {
                total: klingons,
                initial: klingons,
            },
            total_starbases: starbases,
            initial_starbases: starbases,
            enterprise,
            sector_map: SectorMap::new(quadrant),
            dice,
        };
        galaxy.load_quadrant(quadrant, QuadrantEntry::ARRIVE);

        tracing::info!(
            klingons,
            starbases,
            quadrant = ?quadrant,
            sector = ?galaxy.enterprise.sector,
            "galaxy generated"
        );
        galaxy
    }

    // ========== Accessor Methods ==========

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn stardates_left(&self) -> i32 {
        self.stardates_left
    }

    /// Stardate shown to the player; starts at the configured starting stardate.
    pub fn stardate(&self) -> i32 {
        self.config.starting_stardate + self.config.mission_stardates - self.stardates_left
    }

    pub fn total_klingons(&self) -> i32 {
        self.klingon_count.total
    }

    pub fn initial_klingons(&self) -> i32 {
        self.klingon_count.initial
    }

    pub fn total_starbases(&self) -> i32 {
        self.total_starbases
    }

    pub fn initial_starbases(&self) -> i32 {
        self.initial_starbases
    }

    pub fn enterprise(&self) -> &Enterprise {
        &self.enterprise
    }

    pub fn enterprise_mut(&mut self) -> &mut Enterprise {
        &mut self.enterprise
    }

    pub fn sector_map(&self) -> &SectorMap {
        &self.sector_map
    }

    pub fn sector_map_mut(&mut self) -> &mut SectorMap {
        &mut self.sector_map
    }

    pub fn quadrants(&self) -> &[[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE] {
        &self.quadrants
    }

    /// Summary for a quadrant. Callers must pass a valid position.
    pub fn quadrant(&self, q: QuadrantPosition) -> &QuadrantData {
        &self.quadrants[q.y as usize][q.x as usize]
    }

    fn quadrant_mut(&mut self, q: QuadrantPosition) -> &mut QuadrantData {
        &mut self.quadrants[q.y as usize][q.x as usize]
    }

    pub fn dice_mut(&mut self) -> &mut Dice {
        &mut self.dice
    }

    pub fn consume_stardate(&mut self) {
        self.stardates_left -= 1;
    }

    // Test-only setters
    #[cfg(test)]
    pub(crate) fn set_stardates_left(&mut self, stardates: i32) {
        self.stardates_left = stardates;
    }

    #[cfg(test)]
    pub(crate) fn set_total_klingons(&mut self, count: i32) {
        self.klingon_count.total = count;
    }

    // ========== End Accessor Methods ==========

    /// Materialise a quadrant's sector grid from its summary.
    ///
    /// The ship's tracked quadrant becomes `quadrant`. Returns the position
    /// event when `entry` asks for an announcement.
    pub fn load_quadrant(&mut self, quadrant: QuadrantPosition, entry: QuadrantEntry) -> Option<Event> {
        let data = *self.quadrant(quadrant);
        self.sector_map = populate_sector_map(quadrant, &data, &mut self.dice);
        self.enterprise.quadrant = quadrant;

        if entry.place_ship {
            let sector = place_ship(
                &mut self.sector_map,
                self.enterprise.sector,
                entry.keep_position,
                &mut self.dice,
            );
            self.enterprise.sector = sector;
        }

        tracing::debug!(
            quadrant = ?quadrant,
            klingons = data.klingons,
            starbases = data.starbases,
            stars = data.stars,
            placed = entry.place_ship,
            "quadrant loaded"
        );

        (entry.place_ship && entry.announce).then(|| Event::ShipPositioned {
            quadrant,
            sector: self.enterprise.sector,
        })
    }

    // ========== Atomic Update Methods ==========

    /// Destroy the Klingon at `pos` in the loaded quadrant, updating the grid,
    /// the roster, the quadrant summary and the galaxy total together.
    pub fn destroy_klingon(&mut self, pos: SectorPosition) -> bool {
        if !self.sector_map.remove_klingon_at(pos) {
            return false;
        }
        let q = self.sector_map.quadrant();
        self.quadrant_mut(q).klingons -= 1;
        self.klingon_count.total -= 1;
        tracing::debug!(quadrant = ?q, sector = ?pos, remaining = self.klingon_count.total, "klingon destroyed");
        true
    }

    pub fn destroy_starbase(&mut self, pos: SectorPosition) -> bool {
        if self.sector_map.get(pos) != SectorContent::Starbase {
            return false;
        }
        self.sector_map.set(pos, SectorContent::Empty);
        let q = self.sector_map.quadrant();
        self.quadrant_mut(q).starbases -= 1;
        self.total_starbases -= 1;
        tracing::debug!(quadrant = ?q, sector = ?pos, remaining = self.total_starbases, "starbase destroyed");
        true
    }

    pub fn destroy_star(&mut self, pos: SectorPosition) -> bool {
        if self.sector_map.get(pos) != SectorContent::Star {
            return false;
        }
        self.sector_map.set(pos, SectorContent::Empty);
        let q = self.sector_map.quadrant();
        self.quadrant_mut(q).stars -= 1;
        tracing::debug!(quadrant = ?q, sector = ?pos, "star destroyed");
        true
    }

    /// Take the ship off the grid, as warp does before stepping.
    pub fn lift_ship(&mut self) {
        let sector = self.enterprise.sector;
        if self.sector_map.get(sector) == SectorContent::Enterprise {
            self.sector_map.set(sector, SectorContent::Empty);
        }
    }

    // ========== End Atomic Update Methods ==========

    /// Docked means a starbase sits in the ship's cell neighbourhood.
    pub fn is_docked(&self) -> bool {
        self.sector_map.is_adjacent_to_starbase(self.enterprise.sector)
    }

    pub fn evaluate_condition(&self) -> Condition {
        if self.is_docked() {
            Condition::Docked
        } else if !self.sector_map.klingons.is_empty() {
            Condition::Red
        } else if self.enterprise.energy < self.config.yellow_alert_energy {
            Condition::Yellow
        } else {
            Condition::Green
        }
    }

    pub fn all_klingons_destroyed(&self) -> bool {
        self.klingon_count.total <= 0
    }

    pub fn is_time_expired(&self) -> bool {
        self.stardates_left <= 0
    }

    pub fn is_ship_destroyed(&self) -> bool {
        self.enterprise.energy <= 0
    }
}

// Custom Debug that doesn't expose RNG internals
impl fmt::Debug for Galaxy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Galaxy")
            .field("stardates_left", &self.stardates_left)
            .field("total_klingons", &self.total_klingons())
            .field("starbases", &self.total_starbases())
            .field("enterprise", &self.enterprise)
            .finish_non_exhaustive()
    }
}

// ========== Scenario helpers for unit tests ==========

#[cfg(test)]
impl Galaxy {
    /// Empty the loaded quadrant of everything but the ship, keeping the
    /// summaries and galaxy totals consistent.
    pub(crate) fn clear_loaded_quadrant(&mut self) {
        let q = self.sector_map.quadrant();
        let data = *self.quadrant(q);
        self.klingon_count.total -= data.klingons;
        self.klingon_count.initial -= data.klingons;
        self.total_starbases -= data.starbases;
        self.initial_starbases -= data.starbases;
        *self.quadrant_mut(q) = QuadrantData::default();

        self.sector_map = SectorMap::new(q);
        self.sector_map
            .set(self.enterprise.sector, SectorContent::Enterprise);
    }

    /// Clear the loaded quadrant and park the ship at `ship`. At least one
    /// Klingon is kept somewhere else so the mission is not already won.
    pub(crate) fn isolate_ship(&mut self, ship: SectorPosition) {
        self.clear_loaded_quadrant();
        self.move_ship(ship);
        if self.total_klingons() == 0 {
            let q = self.sector_map.quadrant();
            let elsewhere = QuadrantPosition::new((q.x + 4) % GALAXY_SIZE as i32, q.y);
            let mut data = *self.quadrant(elsewhere);
            data.klingons += 1;
            self.set_quadrant(elsewhere, data);
        }
    }

    pub(crate) fn place_klingon(&mut self, pos: SectorPosition, hp: i32) {
        use super::klingon::Klingon;
        let q = self.sector_map.quadrant();
        self.sector_map.set(pos, SectorContent::Klingon);
        self.sector_map.klingons.push(Klingon::new(pos, hp));
        self.quadrant_mut(q).klingons += 1;
        self.klingon_count.total += 1;
        self.klingon_count.initial += 1;
    }

    pub(crate) fn place_starbase(&mut self, pos: SectorPosition) {
        let q = self.sector_map.quadrant();
        assert!(!self.quadrant(q).has_starbase(), "one starbase per quadrant");
        self.sector_map.set(pos, SectorContent::Starbase);
        self.quadrant_mut(q).starbases = 1;
        self.total_starbases += 1;
        self.initial_starbases += 1;
    }

    pub(crate) fn place_star(&mut self, pos: SectorPosition) {
        let q = self.sector_map.quadrant();
        self.sector_map.set(pos, SectorContent::Star);
        self.quadrant_mut(q).stars += 1;
    }

    pub(crate) fn move_ship(&mut self, pos: SectorPosition) {
        self.lift_ship();
        self.enterprise.sector = pos;
        self.sector_map.set(pos, SectorContent::Enterprise);
    }

    /// Set a summary directly, for quadrants other than the loaded one.
    pub(crate) fn set_quadrant(&mut self, q: QuadrantPosition, data: QuadrantData) {
        let old = *self.quadrant(q);
        self.klingon_count.total += data.klingons - old.klingons;
        self.klingon_count.initial += data.klingons - old.klingons;
        self.total_starbases += data.starbases - old.starbases;
        self.initial_starbases += data.starbases - old.starbases;
        *self.quadrant_mut(q) = data;
    }
}

/// A galaxy whose loaded quadrant holds only the ship at `ship`.
#[cfg(test)]
pub(crate) fn empty_scenario(seed: u64, ship: SectorPosition) -> Galaxy {
    let mut galaxy = Galaxy::new(GameConfig::default(), Difficulty::Normal, Dice::seeded(seed));
    galaxy.isolate_ship(ship);
    galaxy
}
