use serde::Serialize;

use super::constants::{Device, NUM_DEVICES};
use super::errors::{GameError, GameResult, Resource};
use super::position::{QuadrantPosition, SectorPosition};

/// A device currently out of service and the stardates left until it works again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeviceDamage {
    pub device: Device,
    pub repair_time: i32,
}

/// The player's starship.
#[derive(Debug, Clone)]
pub struct Enterprise {
    pub quadrant: QuadrantPosition,
    pub sector: SectorPosition,
    /// May dip to zero or below after a Klingon attack; the game is lost then.
    pub energy: i32,
    pub torpedoes: i32,
    /// Stardates until each device is repaired. 0 = operational.
    repairs: [i32; NUM_DEVICES],
}

impl Enterprise {
    pub fn new(
        quadrant: QuadrantPosition,
        sector: SectorPosition,
        energy: i32,
        torpedoes: i32,
    ) -> Self {
        Enterprise {
            quadrant,
            sector,
            energy,
            torpedoes,
            repairs: [0; NUM_DEVICES],
        }
    }

    pub fn is_damaged(&self, device: Device) -> bool {
        self.repairs[device as usize] > 0
    }

    pub fn repair_time(&self, device: Device) -> i32 {
        self.repairs[device as usize]
    }

    /// Add `stardates` to the device's outage. Hits stack.
    pub fn damage_device(&mut self, device: Device, stardates: i32) -> i32 {
        let slot = &mut self.repairs[device as usize];
        *slot += stardates;
        *slot
    }

    /// One stardate of repair work on every damaged device.
    pub fn tick_repairs(&mut self) {
        for t in self.repairs.iter_mut().filter(|t| **t > 0) {
            *t -= 1;
        }
    }

    pub fn damaged_devices(&self) -> Vec<DeviceDamage> {
        Device::ALL
            .iter()
            .filter(|d| self.is_damaged(**d))
            .map(|d| DeviceDamage {
                device: *d,
                repair_time: self.repair_time(*d),
            })
            .collect()
    }

    /// Refill energy and torpedoes at a starbase.
    pub fn resupply(&mut self, energy: i32, torpedoes: i32) {
        self.energy = energy;
        self.torpedoes = torpedoes;
    }

    /// Spend energy the ship must already have.
    pub fn consume_energy(&mut self, amount: i32) -> GameResult<()> {
        if amount > self.energy {
            return Err(GameError::InsufficientResources {
                resource: Resource::Energy,
                required: amount,
                available: self.energy,
            });
        }
        self.energy -= amount;
        Ok(())
    }

    pub fn consume_torpedo(&mut self) -> GameResult<()> {
        if self.torpedoes <= 0 {
            return Err(GameError::InsufficientResources {
                resource: Resource::Torpedoes,
                required: 1,
                available: self.torpedoes,
            });
        }
        self.torpedoes -= 1;
        Ok(())
    }

    /// Unconditional drain, used for incoming fire.
    pub fn take_hit(&mut self, units: i32) {
        self.energy -= units;
    }

    pub fn move_to(&mut self, quadrant: QuadrantPosition, sector: SectorPosition) {
        self.quadrant = quadrant;
        self.sector = sector;
    }
}
