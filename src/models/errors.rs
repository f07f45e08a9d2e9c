use std::fmt;

use thiserror::Error;

use crate::game_engine::GameState;
use crate::models::constants::Device;

/// Consumable the ship can run short of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Energy,
    Torpedoes,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resource::Energy => write!(f, "energy"),
            Resource::Torpedoes => write!(f, "torpedoes"),
        }
    }
}

/// Game-specific error types
#[derive(Debug, Error)]
pub enum GameError {
    /// Malformed or out-of-range command argument; the command is cancelled.
    #[error("input rejected: {0}")]
    InputRejected(String),
    /// Attempted to use a damaged device
    #[error("{} is damaged and cannot be used", .0.name())]
    DeviceDamaged(Device),
    /// Not enough energy or torpedoes
    #[error("insufficient {resource}: required {required}, available {available}")]
    InsufficientResources {
        resource: Resource,
        required: i32,
        available: i32,
    },
    /// The game has reached a terminal state and accepts no more commands
    #[error("game over: {0:?}")]
    GameOver(GameState),
    /// I/O error occurred
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn device_damaged_message_names_device() {
        let err = GameError::DeviceDamaged(Device::WarpEngine);
        assert_eq!(err.to_string(), "WARP ENGINE is damaged and cannot be used");
    }

    #[test]
    fn insufficient_resources_message() {
        let err = GameError::InsufficientResources {
            resource: Resource::Energy,
            required: 2048,
            available: 100,
        };
        assert_eq!(
            err.to_string(),
            "insufficient energy: required 2048, available 100"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
