use serde::Serialize;

use super::constants::{GALACTIC_SPAN, GALAXY_SIZE, SECTOR_SIZE};

/// A position within the 8x8 galaxy (quadrant coordinates).
/// Values range 0-7. (0,0) is upper-left; players see them 1-based.
/// X increases left-to-right, Y increases top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QuadrantPosition {
    pub x: i32,
    pub y: i32,
}

impl QuadrantPosition {
    pub fn new(x: i32, y: i32) -> Self {
        QuadrantPosition { x, y }
    }

    pub fn is_valid(&self) -> bool {
        let size = GALAXY_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }
}

/// A position within an 8x8 sector grid.
/// Values range 0-7, same orientation as [`QuadrantPosition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SectorPosition {
    pub x: i32,
    pub y: i32,
}

impl SectorPosition {
    pub fn new(x: i32, y: i32) -> Self {
        SectorPosition { x, y }
    }

    pub fn is_valid(&self) -> bool {
        let size = SECTOR_SIZE as i32;
        (0..size).contains(&self.x) && (0..size).contains(&self.y)
    }

    /// Squared grid distance, used by the Klingon hit formula.
    pub fn distance_squared(&self, other: SectorPosition) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// True when `other` is this cell or one of its eight neighbours.
    pub fn is_adjacent(&self, other: SectorPosition) -> bool {
        (self.x - other.x).abs() <= 1 && (self.y - other.y).abs() <= 1
    }
}

/// A cell in the flattened 64x64 galaxy used while warping across quadrants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalacticCell {
    pub x: i32,
    pub y: i32,
}

impl GalacticCell {
    pub fn from_parts(quadrant: QuadrantPosition, sector: SectorPosition) -> Self {
        let size = SECTOR_SIZE as i32;
        GalacticCell {
            x: quadrant.x * size + sector.x,
            y: quadrant.y * size + sector.y,
        }
    }

    pub fn is_inside_galaxy(&self) -> bool {
        (0..GALACTIC_SPAN).contains(&self.x) && (0..GALACTIC_SPAN).contains(&self.y)
    }

    /// Only meaningful for cells inside the galaxy.
    pub fn quadrant(&self) -> QuadrantPosition {
        let size = SECTOR_SIZE as i32;
        QuadrantPosition::new(self.x / size, self.y / size)
    }

    /// Only meaningful for cells inside the galaxy.
    pub fn sector(&self) -> SectorPosition {
        let size = SECTOR_SIZE as i32;
        SectorPosition::new(self.x % size, self.y % size)
    }
}
