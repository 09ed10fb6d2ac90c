//! Centralised gameplay, asset and rendering constants.
//!
//! Every tuneable value lives here so it can be found and changed in one
//! place.  [`crate::config::GameConfig::default`] reads from these constants,
//! and `assets/game.toml` can override any subset of them at startup.
//!
//! All motion values are expressed **per frame**: the game advances exactly
//! once per rendered frame, so a velocity of `1.0` moves one pixel per frame.

// ── Playfield ─────────────────────────────────────────────────────────────────

/// Width of the toroidal playfield in logical pixels.  Also the window width.
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Height of the toroidal playfield in logical pixels.  Also the window height.
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

/// Title shown on the game window.
pub const WINDOW_TITLE: &str = "Asteroids!";

// ── Ship ──────────────────────────────────────────────────────────────────────

/// Heading change (degrees) per frame while a turn input is held.
///
/// At 4.5° a full revolution takes 80 frames (~1.3 s at 60 Hz).
pub const SHIP_TURN_STEP: f32 = 4.5;

/// Length of the thrust vector added to the ship's velocity per frame of thrust.
pub const SHIP_THRUST: f32 = 0.5;

/// Multiplicative velocity decay applied to the ship after every advance.
///
/// With `SHIP_THRUST = 0.5` held continuously the ship approaches a terminal
/// speed of `0.5 × 0.95 / 0.05 = 9.5` px/frame.
pub const SHIP_DAMPING: f32 = 0.95;

// ── Debris ────────────────────────────────────────────────────────────────────

/// Horizontal drift applied to debris created without an explicit velocity.
pub const DEBRIS_DEFAULT_VEL_X: f32 = 0.5;

/// Vertical drift applied to debris created without an explicit velocity.
pub const DEBRIS_DEFAULT_VEL_Y: f32 = 1.0;

/// Number of debris spawned when the session starts.
pub const INITIAL_DEBRIS_COUNT: usize = 1;

/// Wall-clock duration of a single debris animation frame, in milliseconds.
pub const DEBRIS_FRAME_DURATION_MS: u64 = 100;

// ── Assets ────────────────────────────────────────────────────────────────────

/// Ship sprite, relative to the `assets/` directory.
pub const SHIP_IMAGE_PATH: &str = "media/ship1_32x32.png";

/// Debris sprite sheet, relative to the `assets/` directory.
pub const DEBRIS_SHEET_PATH: &str = "media/asteroid2.png";

/// Edge length (px) of one square tile in the debris sprite sheet.
pub const DEBRIS_TILE_SIZE: u32 = 64;

/// Tile columns in the debris sprite sheet.
pub const DEBRIS_SHEET_COLUMNS: u32 = 5;

/// Tile rows in the debris sprite sheet.
pub const DEBRIS_SHEET_ROWS: u32 = 6;

/// Upper bound on `columns × rows` accepted from config.
///
/// Far above any real sheet; only guards against typos that would build a
/// multi-million-entry atlas layout.
pub const MAX_DEBRIS_SHEET_FRAMES: u64 = 4096;

// ── Gamepad ───────────────────────────────────────────────────────────────────

/// Left-stick X deflection beyond which the stick counts as a held turn input.
pub const GAMEPAD_STICK_DEADZONE: f32 = 0.5;
