use crate::models::constants::TRAJECTORY_STEP;
use crate::models::navigation_types::Heading;

/// Snap a continuous coordinate to its grid cell. Halves round to even.
pub fn to_cell(v: f64) -> i32 {
    v.round_ties_even() as i32
}

/// A point moving along a heading in 1/8-sector increments.
///
/// Shared by warp travel (galactic coordinates) and torpedo flight
/// (sector coordinates).
#[derive(Debug, Clone, Copy)]
pub struct Trajectory {
    x: f64,
    y: f64,
    dx: f64,
    dy: f64,
}

impl Trajectory {
    pub fn from_cell(x: i32, y: i32, heading: Heading) -> Self {
        let (dx, dy) = heading.direction();
        Trajectory {
            x: x as f64,
            y: y as f64,
            dx,
            dy,
        }
    }

    /// Move one increment and return the cell now under the point.
    pub fn advance(&mut self) -> (i32, i32) {
        self.x += self.dx * TRAJECTORY_STEP;
        self.y += self.dy * TRAJECTORY_STEP;
        (to_cell(self.x), to_cell(self.y))
    }
}
