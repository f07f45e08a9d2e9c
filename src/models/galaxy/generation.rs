use crate::models::config::Difficulty;
use crate::models::constants::{
    GALAXY_SIZE, MAX_KLINGONS, MAX_STARBASES, MIN_KLINGONS, MIN_STARBASES,
};
use crate::models::dice::Dice;
use crate::models::quadrant::QuadrantData;

/// Roll the mission's Klingon and starbase totals.
///
/// Klingons are two (three when difficult) eight-sided rolls, halved on a
/// normal game. Both totals are clamped to their mission bounds.
pub fn mission_totals(difficulty: Difficulty, dice: &mut Dice) -> (i32, i32) {
    let difficult = difficulty == Difficulty::Difficult;
    let divisor = if difficult { 1 } else { 2 };

    let mut klingons = dice.one_to(8) + dice.one_to(8);
    if difficult {
        klingons += dice.one_to(8);
    }
    let klingons = (klingons / divisor).clamp(MIN_KLINGONS, MAX_KLINGONS);

    let starbases = dice.one_to(5).clamp(MIN_STARBASES, MAX_STARBASES);

    (klingons, starbases)
}

/// Scatter the mission totals across the 64 quadrants.
///
/// Klingons may pile up in one quadrant; starbases are redrawn until they
/// land in a quadrant without one. Every quadrant then gets 1-8 stars.
pub fn distribute(
    klingons: i32,
    starbases: i32,
    dice: &mut Dice,
) -> [[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE] {
    let size = GALAXY_SIZE as i32;
    let mut quadrants = [[QuadrantData::default(); GALAXY_SIZE]; GALAXY_SIZE];

    for _ in 0..klingons {
        let x = dice.below(size) as usize;
        let y = dice.below(size) as usize;
        quadrants[y][x].klingons += 1;
    }

    for _ in 0..starbases {
        loop {
            let x = dice.below(size) as usize;
            let y = dice.below(size) as usize;
            if !quadrants[y][x].has_starbase() {
                quadrants[y][x].starbases = 1;
                break;
            }
        }
    }

    for row in quadrants.iter_mut() {
        for quadrant in row.iter_mut() {
            quadrant.stars = dice.one_to(8);
        }
    }

    quadrants
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(quadrants: &[[QuadrantData; GALAXY_SIZE]; GALAXY_SIZE]) -> (i32, i32) {
        quadrants
            .iter()
            .flatten()
            .fold((0, 0), |(k, b), q| (k + q.klingons, b + q.starbases))
    }

    #[test]
    fn totals_stay_within_bounds() {
        for seed in 0..200 {
            let mut dice = Dice::seeded(seed);
            for difficulty in [Difficulty::Normal, Difficulty::Difficult] {
                let (k, b) = mission_totals(difficulty, &mut dice);
                assert!((MIN_KLINGONS..=MAX_KLINGONS).contains(&k), "klingons {}", k);
                assert!((MIN_STARBASES..=MAX_STARBASES).contains(&b), "starbases {}", b);
            }
        }
    }

    #[test]
    fn normal_game_never_exceeds_eight_klingons() {
        // (8 + 8) / 2
        for seed in 0..200 {
            let mut dice = Dice::seeded(seed);
            let (k, _) = mission_totals(Difficulty::Normal, &mut dice);
            assert!(k <= 8);
        }
    }

    #[test]
    fn distribution_preserves_totals() {
        let mut dice = Dice::seeded(5);
        let quadrants = distribute(17, 4, &mut dice);
        assert_eq!(totals(&quadrants), (17, 4));
    }

    #[test]
    fn at_most_one_starbase_per_quadrant() {
        for seed in 0..50 {
            let mut dice = Dice::seeded(seed);
            let quadrants = distribute(24, 6, &mut dice);
            assert!(quadrants.iter().flatten().all(|q| q.starbases <= 1));
        }
    }

    #[test]
    fn every_quadrant_has_one_to_eight_stars() {
        let mut dice = Dice::seeded(9);
        let quadrants = distribute(6, 2, &mut dice);
        assert!(quadrants
            .iter()
            .flatten()
            .all(|q| (1..=8).contains(&q.stars)));
    }
}
