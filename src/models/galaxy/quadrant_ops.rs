use crate::models::constants::{SectorContent, KLINGON_BASE_HP, KLINGON_HP_SPREAD};
use crate::models::dice::Dice;
use crate::models::klingon::Klingon;
use crate::models::position::{QuadrantPosition, SectorPosition};
use crate::models::quadrant::QuadrantData;
use crate::models::sector_map::SectorMap;

/// How the ship takes part in a quadrant load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantEntry {
    /// Keep the ship's remembered sector if that cell is still free.
    pub keep_position: bool,
    /// Mark the ship on the grid.
    pub place_ship: bool,
    /// Report where the ship ended up.
    pub announce: bool,
}

impl QuadrantEntry {
    /// Ship arrives and stays: placed and announced.
    pub const ARRIVE: QuadrantEntry = QuadrantEntry {
        keep_position: true,
        place_ship: true,
        announce: true,
    };

    /// Ship passes through mid-warp: grid only.
    pub const TRANSIT: QuadrantEntry = QuadrantEntry {
        keep_position: true,
        place_ship: false,
        announce: false,
    };
}

/// Build a fresh sector grid from a quadrant summary.
///
/// Placement order is stars, then the starbase, then each Klingon with its
/// hit points rolled right after its cell.
pub fn populate_sector_map(
    quadrant: QuadrantPosition,
    data: &QuadrantData,
    dice: &mut Dice,
) -> SectorMap {
    let mut map = SectorMap::new(quadrant);

    for _ in 0..data.stars {
        let pos = map.find_random_empty(dice);
        map.set(pos, SectorContent::Star);
    }

    if data.has_starbase() {
        let pos = map.find_random_empty(dice);
        map.set(pos, SectorContent::Starbase);
    }

    for _ in 0..data.klingons {
        let pos = map.find_random_empty(dice);
        map.set(pos, SectorContent::Klingon);
        let hp = KLINGON_BASE_HP + dice.below(KLINGON_HP_SPREAD);
        map.klingons.push(Klingon::new(pos, hp));
    }

    map
}

/// Pick the ship's cell in a freshly populated grid and mark it.
pub fn place_ship(
    map: &mut SectorMap,
    remembered: SectorPosition,
    keep_position: bool,
    dice: &mut Dice,
) -> SectorPosition {
    let sector = if keep_position && map.is_empty(remembered) {
        remembered
    } else {
        map.find_random_empty(dice)
    };
    map.set(sector, SectorContent::Enterprise);
    sector
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(klingons: i32, starbases: i32, stars: i32) -> QuadrantData {
        QuadrantData {
            klingons,
            starbases,
            stars,
        }
    }

    #[test]
    fn grid_matches_summary() {
        let mut dice = Dice::seeded(21);
        let data = summary(3, 1, 8);
        let map = populate_sector_map(QuadrantPosition::new(1, 1), &data, &mut dice);

        assert_eq!(map.count(SectorContent::Klingon), 3);
        assert_eq!(map.count(SectorContent::Starbase), 1);
        assert_eq!(map.count(SectorContent::Star), 8);
        assert_eq!(map.klingons.len(), 3);
    }

    #[test]
    fn klingon_hit_points_in_range() {
        for seed in 0..50 {
            let mut dice = Dice::seeded(seed);
            let map = populate_sector_map(QuadrantPosition::new(0, 0), &summary(5, 0, 1), &mut dice);
            for k in &map.klingons {
                assert!((200..=500).contains(&k.hp), "hp {}", k.hp);
                assert_eq!(map.get(k.sector), SectorContent::Klingon);
            }
        }
    }

    #[test]
    fn ship_keeps_free_remembered_cell() {
        let mut dice = Dice::seeded(2);
        let mut map = SectorMap::new(QuadrantPosition::new(0, 0));
        let spot = SectorPosition::new(3, 3);
        assert_eq!(place_ship(&mut map, spot, true, &mut dice), spot);
        assert_eq!(map.get(spot), SectorContent::Enterprise);
    }

    #[test]
    fn ship_moves_off_occupied_cell() {
        let mut dice = Dice::seeded(2);
        let mut map = SectorMap::new(QuadrantPosition::new(0, 0));
        let spot = SectorPosition::new(3, 3);
        map.set(spot, SectorContent::Star);
        let placed = place_ship(&mut map, spot, true, &mut dice);
        assert_ne!(placed, spot);
        assert_eq!(map.get(spot), SectorContent::Star);
        assert_eq!(map.get(placed), SectorContent::Enterprise);
    }
}
