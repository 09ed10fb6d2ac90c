//! Simulation plugin: wires config, input, the session tick and drawing into
//! the Bevy schedule.
//!
//! Every `Update` frame runs, strictly in this order:
//!
//! ```text
//! clear intent → keyboard → gamepad → quit check → session tick
//!     → spawn new debris sprites → sync ship sprite → sync debris sprites
//! ```
//!
//! There is exactly one session tick per rendered frame; motion is in pixels
//! per frame, not per second.

use crate::config::{load_game_config, GameConfig};
use crate::graphics::{
    fatal_asset_failure_system, fit_window_to_playfield, load_sprites, setup_camera,
};
use crate::input::{
    control_intent_clear_system, gamepad_connection_system, gamepad_to_intent_system,
    keyboard_to_intent_system, quit_on_escape_system, ControlIntent,
};
use crate::rendering::{
    spawn_debris_views_system, spawn_ship_view, sync_debris_views_system, sync_ship_view_system,
};
use crate::session::Session;
use bevy::prelude::*;

pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<ControlIntent>()
            .add_systems(
                Startup,
                (
                    // Config first so every later startup system sees final values.
                    load_game_config,
                    fit_window_to_playfield,
                    start_session_system,
                    setup_camera,
                    load_sprites,
                    spawn_ship_view,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    (
                        control_intent_clear_system,
                        keyboard_to_intent_system,
                        gamepad_to_intent_system,
                        quit_on_escape_system,
                        session_tick_system,
                        spawn_debris_views_system,
                        sync_ship_view_system,
                        sync_debris_views_system,
                    )
                        .chain(),
                    gamepad_connection_system,
                    fatal_asset_failure_system,
                ),
            );
    }
}

/// Startup system: create the session from the loaded config.
pub fn start_session_system(mut commands: Commands, config: Res<GameConfig>) {
    let session = Session::from_config(&config, &mut rand::thread_rng());
    info!(
        "[setup] Session started: ship at {}, {} debris on a {}x{} field",
        session.ship.position(),
        session.debris_count(),
        session.field.width,
        session.field.height
    );
    commands.insert_resource(session);
}

/// Advance the session by one frame using this frame's [`ControlIntent`].
pub fn session_tick_system(mut session: ResMut<Session>, intent: Res<ControlIntent>) {
    let before = session.debris_count();
    session.tick(&intent, &mut rand::thread_rng());
    if session.debris_count() != before {
        debug!("Debris spawned; {} in play", session.debris_count());
    }
}
