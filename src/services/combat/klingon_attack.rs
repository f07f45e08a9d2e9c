use crate::models::constants::{KLINGON_BASE_HIT, KLINGON_HIT_SPREAD};
use crate::models::events::Event;
use crate::models::galaxy::Galaxy;
use crate::models::position::SectorPosition;

/// Klingons in the loaded quadrant return fire.
///
/// A docked ship is fully covered by the starbase. Otherwise each Klingon
/// hits for its base strength divided by the squared distance to the ship,
/// and the total comes off ship energy in one go.
pub fn klingons_fire(galaxy: &mut Galaxy) -> Vec<Event> {
    if galaxy.sector_map().klingons.is_empty() {
        return Vec::new();
    }

    let mut events = vec![Event::KlingonsAttack];
    if galaxy.is_docked() {
        events.push(Event::StarbaseProtects);
        return events;
    }

    let ship = galaxy.enterprise().sector;
    // Collect positions first so the dice can be borrowed mutably
    let attackers: Vec<SectorPosition> = galaxy
        .sector_map()
        .klingons
        .iter()
        .map(|k| k.sector)
        .collect();

    let mut total = 0;
    for sector in attackers {
        let dist2 = sector.distance_squared(ship).max(1);
        let base = KLINGON_BASE_HIT + galaxy.dice_mut().below(KLINGON_HIT_SPREAD);
        let hit = (base / dist2).max(1);
        total += hit;
        events.push(Event::KlingonFire { sector, units: hit });
    }

    galaxy.enterprise_mut().take_hit(total);
    let energy = galaxy.enterprise().energy;
    tracing::debug!(total, energy, "klingons fired");

    if energy <= 0 {
        events.push(Event::ShipDestroyed { total });
    } else {
        events.push(Event::EnergyRemaining { total, energy });
    }
    events
}
