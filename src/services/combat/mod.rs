//! Combat system
//!
//! Phaser and torpedo fire against the loaded quadrant, and the Klingon
//! counter-attack that follows every command.

mod klingon_attack;
mod phasers;
mod torpedoes;

pub use klingon_attack::klingons_fire;
pub use phasers::fire_phasers;
pub use torpedoes::fire_torpedo;
