//! Ship's computer
//!
//! Galaxy map and status report.

use serde::Serialize;

use crate::models::constants::{Condition, GALAXY_SIZE};
use crate::models::enterprise::DeviceDamage;
use crate::models::galaxy::Galaxy;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::QuadrantData;

/// Every quadrant summary, rows top to bottom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GalaxyMap {
    pub quadrants: [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE],
    pub ship_quadrant: QuadrantPosition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub stardate: i32,
    pub stardates_left: i32,
    pub condition: Condition,
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    pub energy: i32,
    pub torpedoes: i32,
    pub klingons_left: i32,
    pub starbases_left: i32,
    pub damage: Vec<DeviceDamage>,
}

pub fn galaxy_map(galaxy: &Galaxy) -> GalaxyMap {
    GalaxyMap {
        quadrants: *galaxy.quadrants(),
        ship_quadrant: galaxy.enterprise().quadrant,
    }
}

pub fn status_report(galaxy: &Galaxy) -> StatusReport {
    let ship = galaxy.enterprise();
    StatusReport {
        stardate: galaxy.stardate(),
        stardates_left: galaxy.stardates_left(),
        condition: galaxy.evaluate_condition(),
        quadrant: ship.quadrant,
        sector: ship.sector,
        energy: ship.energy,
        torpedoes: ship.torpedoes,
        klingons_left: galaxy.total_klingons(),
        starbases_left: galaxy.total_starbases(),
        damage: ship.damaged_devices(),
    }
}
