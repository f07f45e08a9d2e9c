use serde::Serialize;

use super::position::SectorPosition;

/// A Klingon warship within the loaded quadrant's sector grid.
/// Hit points are rolled on every quadrant load and never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Klingon {
    pub sector: SectorPosition,
    pub hp: i32,
}

impl Klingon {
    pub fn new(sector: SectorPosition, hp: i32) -> Self {
        Klingon { sector, hp }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }
}
