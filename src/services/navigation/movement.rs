use crate::models::constants::{SectorContent, GALAXY_SIZE, SECTOR_SIZE};
use crate::models::errors::{GameError, GameResult, Resource};
use crate::models::events::Event;
use crate::models::galaxy::{Galaxy, QuadrantEntry};
use crate::models::navigation_types::{Heading, WarpFactor};
use crate::models::position::{GalacticCell, QuadrantPosition, SectorPosition};

use super::course::Trajectory;

/// Energy the jump will cost, or an error if the ship cannot pay it.
/// Nothing is spent here.
pub fn check_warp_energy(galaxy: &Galaxy, factor: WarpFactor) -> GameResult<i32> {
    let cost = factor.energy_cost();
    let available = galaxy.enterprise().energy;
    if available < cost {
        return Err(GameError::InsufficientResources {
            resource: Resource::Energy,
            required: cost,
            available,
        });
    }
    Ok(cost)
}

/// What a single warp increment ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Clear,
    Blocked(SectorContent),
    LeftGalaxy,
}

/// Warp in progress, carried across increments instead of re-entering the
/// quadrant loader recursively.
struct WarpStepper {
    trajectory: Trajectory,
    /// Quadrant whose grid is currently materialised.
    loaded: QuadrantPosition,
    /// Last cell the ship passed through that was empty.
    last_safe: GalacticCell,
}

impl WarpStepper {
    fn start(galaxy: &Galaxy, heading: Heading) -> Self {
        let ship = galaxy.enterprise();
        let origin = GalacticCell::from_parts(ship.quadrant, ship.sector);
        WarpStepper {
            trajectory: Trajectory::from_cell(origin.x, origin.y, heading),
            loaded: galaxy.sector_map().quadrant(),
            last_safe: origin,
        }
    }

    fn step(&mut self, galaxy: &mut Galaxy) -> Step {
        let (x, y) = self.trajectory.advance();
        let cell = GalacticCell { x, y };
        if !cell.is_inside_galaxy() {
            return Step::LeftGalaxy;
        }

        let quadrant = cell.quadrant();
        let sector = cell.sector();
        if quadrant != self.loaded {
            galaxy.load_quadrant(quadrant, QuadrantEntry::TRANSIT);
            self.loaded = quadrant;
        }
        galaxy.enterprise_mut().move_to(quadrant, sector);

        match galaxy.sector_map().get(sector) {
            SectorContent::Empty => {
                self.last_safe = cell;
                Step::Clear
            }
            obstacle => Step::Blocked(obstacle),
        }
    }
}

/// Warp the Enterprise along `heading`.
///
/// The stardate and energy are charged up front and stay spent even if an
/// obstacle cuts the jump short. Leaving the galaxy hands control to the
/// ship's computer, which drops the ship somewhere random.
pub fn warp(galaxy: &mut Galaxy, factor: WarpFactor, heading: Heading) -> GameResult<Vec<Event>> {
    let cost = check_warp_energy(galaxy, factor)?;
    galaxy.consume_stardate();
    galaxy.enterprise_mut().consume_energy(cost)?;
    galaxy.lift_ship();

    let mut events = Vec::new();
    let mut stepper = WarpStepper::start(galaxy, heading);

    for _ in 0..factor.steps() {
        match stepper.step(galaxy) {
            Step::Clear => {}
            Step::Blocked(obstacle) => {
                events.push(Event::EmergencyStop { obstacle });
                break;
            }
            Step::LeftGalaxy => {
                events.push(Event::GalaxyExcursion);
                events.extend(relocate(galaxy));
                return Ok(events);
            }
        }
    }

    let destination = stepper.last_safe;
    galaxy
        .enterprise_mut()
        .move_to(destination.quadrant(), destination.sector());
    events.extend(galaxy.load_quadrant(destination.quadrant(), QuadrantEntry::ARRIVE));

    tracing::debug!(
        warp = factor.value(),
        heading = heading.value(),
        cost,
        quadrant = ?galaxy.enterprise().quadrant,
        sector = ?galaxy.enterprise().sector,
        "warp complete"
    );
    Ok(events)
}

/// Drop the ship at a random quadrant and sector after a galaxy excursion.
fn relocate(galaxy: &mut Galaxy) -> Option<Event> {
    let dice = galaxy.dice_mut();
    let quadrant = QuadrantPosition::new(
        dice.below(GALAXY_SIZE as i32),
        dice.below(GALAXY_SIZE as i32),
    );
    let sector = SectorPosition::new(
        dice.below(SECTOR_SIZE as i32),
        dice.below(SECTOR_SIZE as i32),
    );
    galaxy.enterprise_mut().move_to(quadrant, sector);
    tracing::info!(quadrant = ?quadrant, sector = ?sector, "ship left the galaxy and was relocated");
    galaxy.load_quadrant(quadrant, QuadrantEntry::ARRIVE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::galaxy::empty_scenario;
    use crate::models::quadrant::QuadrantData;

    fn warp_of(f: f64) -> WarpFactor {
        WarpFactor::new(f).unwrap()
    }

    fn heading(h: f64) -> Heading {
        Heading::new(h).unwrap()
    }

    /// Ship parked at quadrant (0,0) with nothing around it, and every
    /// neighbouring quadrant emptied so arrivals are predictable.
    fn open_space(ship: SectorPosition) -> Galaxy {
        let mut galaxy = empty_scenario(31, ship);
        let origin = galaxy.enterprise().quadrant;
        for y in 0..8 {
            for x in 0..8 {
                let q = QuadrantPosition::new(x, y);
                if q != origin {
                    galaxy.set_quadrant(q, QuadrantData::default());
                }
            }
        }
        galaxy
    }

    #[test]
    fn refuses_without_enough_energy() {
        let mut galaxy = open_space(SectorPosition::new(3, 3));
        galaxy.enterprise_mut().energy = 2047;
        let before_dates = galaxy.stardates_left();
        let before_pos = (galaxy.enterprise().quadrant, galaxy.enterprise().sector);

        let err = warp(&mut galaxy, warp_of(8.0), heading(3.0)).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientResources {
                resource: Resource::Energy,
                required: 2048,
                available: 2047
            }
        ));
        assert_eq!(galaxy.enterprise().energy, 2047);
        assert_eq!(galaxy.stardates_left(), before_dates);
        assert_eq!(
            (galaxy.enterprise().quadrant, galaxy.enterprise().sector),
            before_pos
        );
    }

    #[test]
    fn charges_energy_and_one_stardate() {
        let mut galaxy = open_space(SectorPosition::new(0, 4));
        galaxy.enterprise_mut().energy = 1000;
        let dates = galaxy.stardates_left();

        warp(&mut galaxy, warp_of(0.5), heading(3.0)).unwrap();
        // distance 4 -> 16/2
        assert_eq!(galaxy.enterprise().energy, 992);
        assert_eq!(galaxy.stardates_left(), dates - 1);
    }

    #[test]
    fn short_hop_inside_quadrant() {
        let mut galaxy = open_space(SectorPosition::new(0, 4));
        let q = galaxy.enterprise().quadrant;

        let events = warp(&mut galaxy, warp_of(0.5), heading(3.0)).unwrap();
        assert_eq!(galaxy.enterprise().quadrant, q);
        assert_eq!(galaxy.enterprise().sector, SectorPosition::new(4, 4));
        assert_eq!(
            events,
            vec![Event::ShipPositioned {
                quadrant: q,
                sector: SectorPosition::new(4, 4)
            }]
        );
        assert_eq!(galaxy.sector_map().get(SectorPosition::new(4, 4)), SectorContent::Enterprise);
        assert_eq!(galaxy.sector_map().count(SectorContent::Enterprise), 1);
    }

    #[test]
    fn obstacle_stops_ship_on_last_empty_cell() {
        let mut galaxy = open_space(SectorPosition::new(0, 4));
        galaxy.place_star(SectorPosition::new(3, 4));
        let ship_quadrant = galaxy.enterprise().quadrant;
        // Re-arrival reshuffles the grid, so the final cell may move if the
        // star lands on it.
        let events = warp(&mut galaxy, warp_of(0.5), heading(3.0)).unwrap();
        assert_eq!(
            events[0],
            Event::EmergencyStop {
                obstacle: SectorContent::Star
            }
        );
        assert!(matches!(events[1], Event::ShipPositioned { .. }));
        assert_eq!(galaxy.enterprise().quadrant, ship_quadrant);
        assert_eq!(galaxy.quadrant(ship_quadrant).stars, 1);
        assert_eq!(galaxy.sector_map().count(SectorContent::Star), 1);
    }

    #[test]
    fn stepper_records_last_empty_cell_before_obstacle() {
        let mut galaxy = open_space(SectorPosition::new(0, 4));
        galaxy.place_star(SectorPosition::new(3, 4));
        galaxy.lift_ship();
        let q = galaxy.enterprise().quadrant;
        let mut stepper = WarpStepper::start(&galaxy, heading(3.0));

        let mut outcome = Step::Clear;
        while outcome == Step::Clear {
            outcome = stepper.step(&mut galaxy);
        }
        assert_eq!(outcome, Step::Blocked(SectorContent::Star));
        assert_eq!(
            stepper.last_safe,
            GalacticCell::from_parts(q, SectorPosition::new(2, 4))
        );
    }

    #[test]
    fn crossing_into_next_quadrant() {
        let mut galaxy = open_space(SectorPosition::new(6, 2));
        let start = galaxy.enterprise().quadrant;
        if start.x == 7 {
            // Nowhere to go rightward; run the mirror image instead.
            galaxy.move_ship(SectorPosition::new(1, 2));
            warp(&mut galaxy, warp_of(0.5), heading(7.0)).unwrap();
            assert_eq!(galaxy.enterprise().quadrant, QuadrantPosition::new(6, start.y));
            assert_eq!(galaxy.enterprise().sector, SectorPosition::new(5, 2));
        } else {
            warp(&mut galaxy, warp_of(0.5), heading(3.0)).unwrap();
            assert_eq!(galaxy.enterprise().quadrant, QuadrantPosition::new(start.x + 1, start.y));
            assert_eq!(galaxy.enterprise().sector, SectorPosition::new(2, 2));
        }
        assert_eq!(galaxy.sector_map().quadrant(), galaxy.enterprise().quadrant);
        assert_eq!(galaxy.sector_map().count(SectorContent::Enterprise), 1);
    }

    #[test]
    fn leaving_the_galaxy_relocates_ship() {
        let mut galaxy = open_space(SectorPosition::new(4, 4));
        let energy = galaxy.enterprise().energy;
        let events = warp(&mut galaxy, warp_of(8.0), heading(1.0)).unwrap();

        assert_eq!(events[0], Event::GalaxyExcursion);
        assert!(matches!(events[1], Event::ShipPositioned { .. }));
        assert_eq!(events.len(), 2);
        assert_eq!(galaxy.enterprise().energy, energy - 2048);
        assert!(galaxy.enterprise().quadrant.is_valid());
        assert_eq!(galaxy.sector_map().quadrant(), galaxy.enterprise().quadrant);
        assert_eq!(
            galaxy.sector_map().get(galaxy.enterprise().sector),
            SectorContent::Enterprise
        );
    }

    #[test]
    fn last_stardate_is_spent_by_any_warp() {
        let mut galaxy = open_space(SectorPosition::new(4, 4));
        galaxy.set_stardates_left(1);
        warp(&mut galaxy, warp_of(0.125), heading(5.0)).unwrap();
        assert_eq!(galaxy.stardates_left(), 0);
        assert!(galaxy.is_time_expired());
    }
}
