//! Sensor queries
//!
//! Read-only views of the loaded sector grid and the surrounding quadrants.

use serde::Serialize;

use crate::models::constants::{SectorContent, SECTOR_SIZE};
use crate::models::galaxy::Galaxy;
use crate::models::position::QuadrantPosition;
use crate::models::quadrant::QuadrantData;

/// Snapshot of the loaded quadrant's cells, top row first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectorGrid {
    pub quadrant: QuadrantPosition,
    pub rows: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
}

/// Summaries of the 3x3 block of quadrants centred on the ship.
/// `None` marks positions beyond the galaxy edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LongRangeScan {
    pub center: QuadrantPosition,
    pub cells: [[Option<QuadrantData>; 3]; 3],
}

pub fn short_range_scan(galaxy: &Galaxy) -> SectorGrid {
    let map = galaxy.sector_map();
    SectorGrid {
        quadrant: map.quadrant(),
        rows: map.snapshot(),
    }
}

pub fn long_range_scan(galaxy: &Galaxy) -> LongRangeScan {
    let center = galaxy.enterprise().quadrant;
    let mut cells = [[None; 3]; 3];
    for (row, dy) in cells.iter_mut().zip(-1..=1) {
        for (cell, dx) in row.iter_mut().zip(-1..=1) {
            let q = QuadrantPosition::new(center.x + dx, center.y + dy);
            if q.is_valid() {
                *cell = Some(*galaxy.quadrant(q));
            }
        }
    }
    LongRangeScan { center, cells }
}
