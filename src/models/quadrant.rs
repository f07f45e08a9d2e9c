use serde::Serialize;

/// Persistent data about a single quadrant in the galaxy.
/// Stores only counts; sector positions are not preserved between visits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuadrantData {
    pub klingons: i32,
    /// 0 or 1. A quadrant never holds more than one starbase.
    pub starbases: i32,
    pub stars: i32,
}

impl QuadrantData {
    pub fn has_starbase(&self) -> bool {
        self.starbases > 0
    }
}
