//! Type-safe wrappers for navigation values

use std::fmt;

use super::constants::{HEADING_VECTORS, MAX_WARP, SECTOR_SIZE, TRAJECTORY_STEP};
use super::errors::{GameError, GameResult};

/// Compass heading (1.0 to 9.0)
///
/// - 1 = up (north)
/// - 3 = right
/// - 5 = down
/// - 7 = left
/// - 2, 4, 6, 8 = diagonals
/// - 9 wraps around to 1
///
/// Fractional values interpolate the unit vector toward the next compass
/// point, then renormalise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heading(f64);

impl Heading {
    pub fn new(value: f64) -> GameResult<Self> {
        if !(1.0..=9.0).contains(&value) {
            return Err(GameError::InputRejected(format!(
                "heading must be between 1.0 and 9.0, got {}",
                value
            )));
        }
        if (value - 9.0).abs() < 1e-12 {
            return Ok(Heading(1.0));
        }
        Ok(Heading(value))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Unit direction vector in screen coordinates (x right, y down).
    pub fn direction(&self) -> (f64, f64) {
        let base = self.0.floor() as usize;
        let frac = self.0 - base as f64;
        let next = if base + 1 == 9 { 1 } else { base + 1 };

        let (bx, by) = HEADING_VECTORS[base];
        let (nx, ny) = HEADING_VECTORS[next];
        let mut dx = bx + (nx - bx) * frac;
        let mut dy = by + (ny - by) * frac;

        let len = (dx * dx + dy * dy).sqrt();
        if len > 1e-9 {
            dx /= len;
            dy /= len;
        }
        (dx, dy)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// Warp factor, in (0.0, 8.0]
///
/// Requests above 8 are clamped rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct WarpFactor(f64);

impl WarpFactor {
    pub fn new(value: f64) -> GameResult<Self> {
        if value.is_nan() || value <= 0.0 {
            return Err(GameError::InputRejected(format!(
                "warp factor must be positive, got {}",
                value
            )));
        }
        Ok(WarpFactor(value.min(MAX_WARP)))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Distance travelled, in sectors.
    pub fn distance(&self) -> f64 {
        self.0 * SECTOR_SIZE as f64
    }

    /// Energy spent on the jump: `round(distance^2 / 2)`, ties to even.
    pub fn energy_cost(&self) -> i32 {
        let d = self.distance();
        (d * d / 2.0).round_ties_even() as i32
    }

    /// Number of 1/8-sector steps the trajectory takes.
    pub fn steps(&self) -> usize {
        (self.distance() / TRAJECTORY_STEP).ceil() as usize
    }
}

impl fmt::Display for WarpFactor {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}
