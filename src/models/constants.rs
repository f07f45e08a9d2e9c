use serde::Serialize;

pub const GALAXY_SIZE: usize = 8;
pub const SECTOR_SIZE: usize = 8;
/// Width of the flattened galaxy in sectors (8 quadrants x 8 sectors).
pub const GALACTIC_SPAN: i32 = (GALAXY_SIZE * SECTOR_SIZE) as i32;

pub const INITIAL_ENERGY: i32 = 4000;
pub const INITIAL_TORPEDOES: i32 = 10;
pub const MISSION_STARDATES: i32 = 30;
pub const STARTING_STARDATE: i32 = 3200;
pub const DAMAGE_CHANCE_PERCENT: i32 = 5;
pub const YELLOW_ALERT_ENERGY: i32 = 1000;

pub const MIN_KLINGONS: i32 = 6;
pub const MAX_KLINGONS: i32 = 24;
pub const MIN_STARBASES: i32 = 2;
pub const MAX_STARBASES: i32 = 6;

pub const KLINGON_BASE_HP: i32 = 200;
/// Hit points are `KLINGON_BASE_HP + below(KLINGON_HP_SPREAD)`, i.e. 200..=500.
pub const KLINGON_HP_SPREAD: i32 = 301;
pub const KLINGON_BASE_HIT: i32 = 200;
pub const KLINGON_HIT_SPREAD: i32 = 200;

pub const MAX_WARP: f64 = 8.0;
/// Trajectories advance in eighths of a sector.
pub const TRAJECTORY_STEP: f64 = 1.0 / 8.0;
/// A star hit by a torpedo is destroyed when `below(STAR_ODDS_OUT_OF) < STAR_DESTROY_ODDS`.
pub const STAR_DESTROY_ODDS: i32 = 6;
pub const STAR_ODDS_OUT_OF: i32 = 9;
pub const MAX_REPAIR_TIME: i32 = 6;

pub const NUM_DEVICES: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    ShortRangeSensor = 0,
    ComputerDisplay = 1,
    LongRangeSensor = 2,
    Phaser = 3,
    WarpEngine = 4,
    PhotonTubes = 5,
    Shield = 6,
}

impl Device {
    pub fn name(&self) -> &'static str {
        match self {
            Device::ShortRangeSensor => "SHORT RANGE SENSOR",
            Device::ComputerDisplay => "COMPUTER DISPLAY",
            Device::LongRangeSensor => "LONG RANGE SENSOR",
            Device::Phaser => "PHASER",
            Device::WarpEngine => "WARP ENGINE",
            Device::PhotonTubes => "PHOTON TORPEDO TUBES",
            Device::Shield => "SHIELD",
        }
    }

    pub const ALL: [Device; NUM_DEVICES] = [
        Device::ShortRangeSensor,
        Device::ComputerDisplay,
        Device::LongRangeSensor,
        Device::Phaser,
        Device::WarpEngine,
        Device::PhotonTubes,
        Device::Shield,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectorContent {
    Empty,
    Enterprise,
    Klingon,
    Starbase,
    Star,
}

impl SectorContent {
    pub fn symbol(&self) -> char {
        match self {
            SectorContent::Empty => '.',
            SectorContent::Enterprise => 'E',
            SectorContent::Klingon => 'K',
            SectorContent::Starbase => 'B',
            SectorContent::Star => '*',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    Green,
    Yellow,
    Red,
    Docked,
}

impl Condition {
    pub fn label(&self) -> &'static str {
        match self {
            Condition::Green => "GREEN",
            Condition::Yellow => "YELLOW",
            Condition::Red => "RED",
            Condition::Docked => "DOCKED",
        }
    }
}

/// Unit directions for headings 1-8, in screen coordinates (x right, y down).
/// Index 0 is unused; heading 1 points up and the rest follow clockwise.
pub const HEADING_VECTORS: [(f64, f64); 9] = [
    (0.0, 0.0),   // index 0: unused
    (0.0, -1.0),  // heading 1: up
    (1.0, -1.0),  // heading 2: up-right
    (1.0, 0.0),   // heading 3: right
    (1.0, 1.0),   // heading 4: down-right
    (0.0, 1.0),   // heading 5: down
    (-1.0, 1.0),  // heading 6: down-left
    (-1.0, 0.0),  // heading 7: left
    (-1.0, -1.0), // heading 8: up-left
];
