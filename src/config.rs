//! Engine and session configuration

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::board::{Player, BOARD_SIZE};

/// Plies searched below the root before evaluating
pub const DEFAULT_MAX_DEPTH: u8 = 1;

/// Clock each player starts with
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

/// Where the move log is written
pub const DEFAULT_SAVE_PATH: &str = "./save.txt";

/// Board sizes the front ends accept (column labels run A..=Z)
pub const MIN_BOARD_SIZE: usize = 5;
pub const MAX_BOARD_SIZE: usize = 26;

/// Search settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_depth: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Session settings shared by the GUI and terminal front ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub time_limit: Duration,
    pub save_path: PathBuf,
    /// Color the person plays; the computer takes the other
    pub human: Player,
    pub engine: EngineConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            time_limit: DEFAULT_TIME_LIMIT,
            save_path: PathBuf::from(DEFAULT_SAVE_PATH),
            human: Player::Black,
            engine: EngineConfig::default(),
        }
    }
}

/// Rejected session settings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size must be between {min} and {max}, got {0}", min = MIN_BOARD_SIZE, max = MAX_BOARD_SIZE)]
    BoardSize(usize),

    #[error("time limit must be positive")]
    ZeroTimeLimit,
}

impl GameConfig {
    /// Check values a user can set from the command line
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::BoardSize(self.board_size));
        }
        if self.time_limit.is_zero() {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.board_size, 16);
        assert_eq!(config.time_limit, Duration::from_secs(60));
        assert_eq!(config.engine.max_depth, 1);
        assert_eq!(config.human, Player::Black);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_sizes() {
        let mut config = GameConfig::default();
        config.board_size = 4;
        assert_eq!(config.validate(), Err(ConfigError::BoardSize(4)));
        assert_eq!(
            ConfigError::BoardSize(4).to_string(),
            "board size must be between 5 and 26, got 4"
        );
        config.board_size = 27;
        assert_eq!(config.validate(), Err(ConfigError::BoardSize(27)));
        config.board_size = 26;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_time() {
        let config = GameConfig {
            time_limit: Duration::ZERO,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeLimit));
        assert_eq!(config.validate().unwrap_err().to_string(), "time limit must be positive");
    }
}
