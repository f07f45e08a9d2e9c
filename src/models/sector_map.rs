use super::constants::{SectorContent, SECTOR_SIZE};
use super::dice::Dice;
use super::klingon::Klingon;
use super::position::{QuadrantPosition, SectorPosition};

/// The 8x8 sector grid for the quadrant the Enterprise currently occupies.
/// Rebuilt from scratch every time a quadrant is loaded.
#[derive(Debug, Clone)]
pub struct SectorMap {
    quadrant: QuadrantPosition,
    /// Indexed as grid[y][x].
    grid: [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE],
    /// Klingons in this quadrant, in placement order.
    pub klingons: Vec<Klingon>,
}

impl SectorMap {
    pub fn new(quadrant: QuadrantPosition) -> Self {
        SectorMap {
            quadrant,
            grid: [[SectorContent::Empty; SECTOR_SIZE]; SECTOR_SIZE],
            klingons: Vec::new(),
        }
    }

    /// Which quadrant this grid was generated for.
    pub fn quadrant(&self) -> QuadrantPosition {
        self.quadrant
    }

    pub fn get(&self, pos: SectorPosition) -> SectorContent {
        self.grid[pos.y as usize][pos.x as usize]
    }

    pub fn set(&mut self, pos: SectorPosition, content: SectorContent) {
        self.grid[pos.y as usize][pos.x as usize] = content;
    }

    pub fn is_empty(&self, pos: SectorPosition) -> bool {
        self.get(pos) == SectorContent::Empty
    }

    pub fn count(&self, content: SectorContent) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|c| **c == content)
            .count()
    }

    /// Copy of the grid rows, top row first.
    pub fn snapshot(&self) -> [[SectorContent; SECTOR_SIZE]; SECTOR_SIZE] {
        self.grid
    }

    /// True when a starbase sits in `pos` or any of its eight neighbours.
    pub fn is_adjacent_to_starbase(&self, pos: SectorPosition) -> bool {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let neighbour = SectorPosition::new(pos.x + dx, pos.y + dy);
                if neighbour.is_valid() && self.get(neighbour) == SectorContent::Starbase {
                    return true;
                }
            }
        }
        false
    }

    /// Drop the Klingon at `pos` from the roster and clear its cell.
    /// Returns false if no Klingon was there.
    pub fn remove_klingon_at(&mut self, pos: SectorPosition) -> bool {
        let before = self.klingons.len();
        self.klingons.retain(|k| k.sector != pos);
        if self.get(pos) == SectorContent::Klingon {
            self.set(pos, SectorContent::Empty);
        }
        self.klingons.len() != before
    }

    /// Rejection-sample an empty cell, drawing x then y.
    ///
    /// The caller guarantees at least one empty cell remains. A loaded grid
    /// holds at most 8 stars, a starbase, 24 Klingons and the ship.
    pub fn find_random_empty(&self, dice: &mut Dice) -> SectorPosition {
        let size = SECTOR_SIZE as i32;
        loop {
            let x = dice.below(size);
            let y = dice.below(size);
            let pos = SectorPosition::new(x, y);
            if self.is_empty(pos) {
                return pos;
            }
        }
    }
}
