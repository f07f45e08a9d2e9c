//! Turn scheduler
//!
//! Runs once per command cycle before the player's command: repair work,
//! the chance of a fresh breakdown, and starbase resupply.

use crate::models::constants::{Device, MAX_REPAIR_TIME, NUM_DEVICES};
use crate::models::enterprise::DeviceDamage;
use crate::models::events::TurnReport;
use crate::models::galaxy::Galaxy;

/// Roll for a random breakdown. Damage adds to any outage already running.
fn random_damage_event(galaxy: &mut Galaxy) -> Option<DeviceDamage> {
    let chance = galaxy.config().damage_chance_percent;
    if !galaxy.dice_mut().chance(chance) {
        return None;
    }

    let index = galaxy.dice_mut().one_to(NUM_DEVICES as i32) - 1;
    let device = Device::ALL[index as usize];
    let stardates = galaxy.dice_mut().one_to(MAX_REPAIR_TIME);
    let repair_time = galaxy.enterprise_mut().damage_device(device, stardates);

    tracing::debug!(device = device.name(), repair_time, "device damaged");
    Some(DeviceDamage {
        device,
        repair_time,
    })
}

pub fn advance_turn(galaxy: &mut Galaxy) -> TurnReport {
    galaxy.enterprise_mut().tick_repairs();
    let damage = random_damage_event(galaxy);

    let resupplied = galaxy.is_docked();
    if resupplied {
        let energy = galaxy.config().initial_energy;
        let torpedoes = galaxy.config().initial_torpedoes;
        galaxy.enterprise_mut().resupply(energy, torpedoes);
    }

    TurnReport { damage, resupplied }
}
