//! Game services
//!
//! Operations over the galaxy state: combat, navigation, the per-turn
//! scheduler, sensor and computer queries, and the console session.

pub mod combat;
pub mod computer;
pub mod game;
pub mod navigation;
pub mod scan;
pub mod turn;
