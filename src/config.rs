use alloc::string::{String, ToString};
use core::fmt;

pub const DEFAULT_SIZE: usize = 3;
pub const DEFAULT_STRIKE: usize = 3;
pub const DEFAULT_FIRST_PLAYER: &str = "Player1";
pub const DEFAULT_SECOND_PLAYER: &str = "Player2";

/// Game settings chosen at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub size: usize,
    pub strike: usize,
    pub first_player_name: String,
    pub second_player_name: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            strike: DEFAULT_STRIKE,
            first_player_name: DEFAULT_FIRST_PLAYER.to_string(),
            second_player_name: DEFAULT_SECOND_PLAYER.to_string(),
        }
    }
}

impl GameConfig {
    /// Reject settings that cannot produce a playable grid. A strike longer than
    /// the board is allowed; such a game can only end in a draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.strike == 0 {
            return Err(ConfigError::ZeroStrike);
        }
        Ok(())
    }
}

/// Errors returned by [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    ZeroSize,
    ZeroStrike,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "Grid size must be at least 1"),
            ConfigError::ZeroStrike => write!(f, "Strike length must be at least 1"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
