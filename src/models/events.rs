//! Structured outcomes reported by engine commands
//!
//! Commands return a log of [`Event`]s instead of printing; presenters turn
//! them into text.

use serde::Serialize;

use super::constants::{Device, SectorContent};
use super::enterprise::DeviceDamage;
use super::position::{QuadrantPosition, SectorPosition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Ship placed in a freshly loaded quadrant.
    ShipPositioned {
        quadrant: QuadrantPosition,
        sector: SectorPosition,
    },
    /// Warp overshot the galaxy edge; the computer relocated the ship.
    GalaxyExcursion,
    EmergencyStop { obstacle: SectorContent },
    TorpedoTrack { sector: SectorPosition },
    TorpedoMissed,
    KlingonDestroyed { sector: SectorPosition },
    StarbaseDestroyed { sector: SectorPosition },
    StarHit { sector: SectorPosition },
    StarDestroyed { sector: SectorPosition },
    PhaserWasted,
    PhaserHit {
        sector: SectorPosition,
        units: i32,
        destroyed: bool,
    },
    KlingonsAttack,
    StarbaseProtects,
    KlingonFire { sector: SectorPosition, units: i32 },
    /// The volley totalled `total` units and the ship survived.
    EnergyRemaining { total: i32, energy: i32 },
    ShipDestroyed { total: i32 },
    DeviceDamaged { device: Device, repair_time: i32 },
}

/// What happened while the turn advanced, before the player's command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TurnReport {
    /// Fresh equipment damage rolled this turn.
    pub damage: Option<DeviceDamage>,
    /// Energy and torpedoes were refilled by an adjacent starbase.
    pub resupplied: bool,
}

impl TurnReport {
    pub fn events(&self) -> Vec<Event> {
        self.damage
            .map(|d| Event::DeviceDamaged {
                device: d.device,
                repair_time: d.repair_time,
            })
            .into_iter()
            .collect()
    }
}
