//! Domain models
//!
//! Pure game state: the galaxy aggregate, the ship, positions, and the
//! value types commands are expressed in. Models never print.

pub mod config;
pub mod constants;
pub mod dice;
pub mod enterprise;
pub mod errors;
pub mod events;
pub mod galaxy;
pub mod klingon;
pub mod navigation_types;
pub mod position;
pub mod quadrant;
pub mod sector_map;
