//! Game error types.
//!
//! Gameplay operations are total and never fail; the only error paths are
//! startup concerns: reading `assets/game.toml` and loading sprite assets.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use crate::error::{GameError, GameResult};
//!
//! fn check(config: &GameConfig) -> GameResult<()> {
//!     validate_positive("playfield_width", config.playfield_width)?;
//!     Ok(())
//! }
//! ```

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A sprite asset failed to load.  Fatal: the app exits with an error code.
    AssetLoad {
        /// Asset path as requested from the asset server.
        path: String,
        /// Loader-provided description of the failure.
        reason: String,
    },

    /// The config file exists but is not valid TOML for [`crate::config::GameConfig`].
    ConfigParse {
        /// Path of the offending file.
        path: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// A config value is outside the range the game can run with.
    InvalidConfig {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the accepted range.
        expected: &'static str,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::AssetLoad { path, reason } => {
                write!(f, "failed to load asset '{}': {}", path, reason)
            }
            GameError::ConfigParse { path, reason } => {
                write!(f, "failed to parse config '{}': {}", path, reason)
            }
            GameError::InvalidConfig {
                name,
                value,
                expected,
            } => write!(
                f,
                "config value '{}' = {} is outside accepted range {}",
                name, value, expected
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error unless `value` is finite and strictly positive.
pub fn validate_positive(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "(0.0, ∞)",
        })
    }
}

/// Returns an error if `value` is NaN or infinite.
///
/// TOML accepts `nan` and `inf`; either one poisons every position it touches.
pub fn validate_finite(name: &'static str, value: f32) -> GameResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "finite",
        })
    }
}

/// Returns an error unless `value` lies in `[0.0, 1.0]`.
///
/// Used for the ship damping factor: values above 1.0 make velocity grow
/// without bound.
pub fn validate_unit_interval(name: &'static str, value: f32) -> GameResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GameError::InvalidConfig {
            name,
            value,
            expected: "[0.0, 1.0]",
        })
    }
}

/// Returns an error if a count-like value is zero.
pub fn validate_nonzero(name: &'static str, value: u64) -> GameResult<()> {
    if value == 0 {
        Err(GameError::InvalidConfig {
            name,
            value: 0.0,
            expected: "≥ 1",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if a count-like value exceeds `max`.
pub fn validate_at_most(
    name: &'static str,
    value: u64,
    max: u64,
    expected: &'static str,
) -> GameResult<()> {
    if value > max {
        Err(GameError::InvalidConfig {
            name,
            value: value as f32,
            expected,
        })
    } else {
        Ok(())
    }
}
