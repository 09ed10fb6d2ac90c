//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors the tuneables in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and replaces the defaults with the values found there.
//! Missing keys fall back to the compile-time defaults, so a minimal TOML can
//! override just the values you care about:
//!
//! ```toml
//! ship_turn_step = 6.0
//! debris_frame_duration_ms = 80
//! ```
//!
//! A file that fails to parse or validate is reported and ignored; the game
//! keeps running on the compiled defaults.

use crate::body::Playfield;
use crate::constants::*;
use crate::error::{
    validate_at_most, validate_finite, validate_nonzero, validate_positive,
    validate_unit_interval, GameError, GameResult,
};
use crate::ship::ShipHandling;
use bevy::prelude::*;
use serde::Deserialize;

/// Location of the optional config override file.
pub const CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable gameplay, asset and input configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Playfield ─────────────────────────────────────────────────────────────
    pub playfield_width: f32,
    pub playfield_height: f32,

    // ── Ship ──────────────────────────────────────────────────────────────────
    pub ship_turn_step: f32,
    pub ship_thrust: f32,
    pub ship_damping: f32,

    // ── Debris ────────────────────────────────────────────────────────────────
    pub debris_default_vel_x: f32,
    pub debris_default_vel_y: f32,
    pub initial_debris_count: usize,
    pub debris_frame_duration_ms: u64,

    // ── Assets ────────────────────────────────────────────────────────────────
    pub ship_image_path: String,
    pub debris_sheet_path: String,
    pub debris_tile_size: u32,
    pub debris_sheet_columns: u32,
    pub debris_sheet_rows: u32,

    // ── Gamepad ───────────────────────────────────────────────────────────────
    pub gamepad_stick_deadzone: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            playfield_width: PLAYFIELD_WIDTH,
            playfield_height: PLAYFIELD_HEIGHT,
            ship_turn_step: SHIP_TURN_STEP,
            ship_thrust: SHIP_THRUST,
            ship_damping: SHIP_DAMPING,
            debris_default_vel_x: DEBRIS_DEFAULT_VEL_X,
            debris_default_vel_y: DEBRIS_DEFAULT_VEL_Y,
            initial_debris_count: INITIAL_DEBRIS_COUNT,
            debris_frame_duration_ms: DEBRIS_FRAME_DURATION_MS,
            ship_image_path: SHIP_IMAGE_PATH.to_string(),
            debris_sheet_path: DEBRIS_SHEET_PATH.to_string(),
            debris_tile_size: DEBRIS_TILE_SIZE,
            debris_sheet_columns: DEBRIS_SHEET_COLUMNS,
            debris_sheet_rows: DEBRIS_SHEET_ROWS,
            gamepad_stick_deadzone: GAMEPAD_STICK_DEADZONE,
        }
    }
}

impl GameConfig {
    /// Parse and validate a TOML document.  Keys absent from `contents` keep
    /// their compiled defaults.
    pub fn from_toml_str(path: &str, contents: &str) -> GameResult<Self> {
        let config: GameConfig =
            toml::from_str(contents).map_err(|e| GameError::ConfigParse {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the game cannot run with (zero-sized playfield, empty
    /// sprite sheet, damping that amplifies velocity, ...).
    pub fn validate(&self) -> GameResult<()> {
        validate_positive("playfield_width", self.playfield_width)?;
        validate_positive("playfield_height", self.playfield_height)?;
        validate_finite("ship_turn_step", self.ship_turn_step)?;
        validate_finite("ship_thrust", self.ship_thrust)?;
        validate_unit_interval("ship_damping", self.ship_damping)?;
        validate_finite("debris_default_vel_x", self.debris_default_vel_x)?;
        validate_finite("debris_default_vel_y", self.debris_default_vel_y)?;
        validate_nonzero("debris_frame_duration_ms", self.debris_frame_duration_ms)?;
        validate_nonzero("debris_tile_size", u64::from(self.debris_tile_size))?;
        validate_nonzero("debris_sheet_columns", u64::from(self.debris_sheet_columns))?;
        validate_nonzero("debris_sheet_rows", u64::from(self.debris_sheet_rows))?;
        validate_at_most(
            "debris_sheet_columns * debris_sheet_rows",
            self.debris_sheet_frames(),
            MAX_DEBRIS_SHEET_FRAMES,
            "≤ 4096 frames",
        )?;
        validate_unit_interval("gamepad_stick_deadzone", self.gamepad_stick_deadzone)?;
        Ok(())
    }

    pub fn playfield(&self) -> Playfield {
        Playfield::new(self.playfield_width, self.playfield_height)
    }

    pub fn ship_handling(&self) -> ShipHandling {
        ShipHandling {
            turn_step: self.ship_turn_step,
            thrust: self.ship_thrust,
            damping: self.ship_damping,
        }
    }

    pub fn debris_default_velocity(&self) -> Vec2 {
        Vec2::new(self.debris_default_vel_x, self.debris_default_vel_y)
    }

    /// `columns × rows`, widened so any pair of `u32` values fits.
    pub fn debris_sheet_frames(&self) -> u64 {
        u64::from(self.debris_sheet_columns) * u64::from(self.debris_sheet_rows)
    }

    /// Total animation frames in the debris sprite sheet.
    pub fn debris_frame_count(&self) -> usize {
        usize::try_from(self.debris_sheet_frames()).unwrap_or(usize::MAX)
    }
}

/// Startup system: load `assets/game.toml` over the compiled defaults.
///
/// A missing file is not an error.  Parse or validation failures are logged
/// and the defaults already in the resource are kept.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(CONFIG_PATH, &contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("[setup] Loaded game config from {CONFIG_PATH}");
            }
            Err(e) => warn!("[setup] {e}; using compiled defaults"),
        },
        Err(_) => info!("[setup] No {CONFIG_PATH} found; using compiled defaults"),
    }
}
