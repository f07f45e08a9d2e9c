//! User interface and presentation
//!
//! Presenters turn events, grids and reports into teletype text,
//! separating presentation from game logic.

pub mod presenters;
