//! TinyTrek game engine
//!
//! A compact take on the classic Star Trek hunt: command the Enterprise
//! across an 8x8 galaxy and destroy every Klingon before the stardates
//! run out.
//!
//! # Modules
//!
//! - [`game_engine`] - Command/query facade, device gating and game-over logic
//! - [`models`] - Domain models (Galaxy, Enterprise, Klingon, etc.)
//! - [`services`] - Combat, navigation, turn scheduling, scans and the console loop
//! - [`io`] - Input/output abstractions and teletype pacing
//! - [`ui`] - Text presenters
//! - [`cli`] - Command-line arguments
//!
//! # Example
//!
//! ```rust
//! use tinytrek::{Difficulty, GameEngine, GameState};
//!
//! let mut engine = GameEngine::new(Difficulty::Normal, 42);
//! engine.advance_turn().unwrap();
//! assert_eq!(engine.status().stardates_left, 30);
//! assert_eq!(engine.state(), &GameState::Playing);
//! ```

pub mod cli;
pub mod game_engine;
pub mod io;
pub mod models;
pub mod services;
pub mod ui;

// Re-export commonly used types
pub use game_engine::{DefeatReason, GameEngine, GameState, MissionBriefing};
pub use models::config::{Difficulty, GameConfig};
pub use models::errors::{GameError, GameResult};
pub use models::events::{Event, TurnReport};
