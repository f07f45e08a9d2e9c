//! Navigation system
//!
//! Heading stepping shared by warp travel and torpedo flight, and the warp
//! drive itself.

mod course;
mod movement;

pub use course::{to_cell, Trajectory};
pub use movement::{check_warp_energy, warp};
