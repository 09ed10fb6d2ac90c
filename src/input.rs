//! Input systems.
//!
//! ## Pipeline (runs in order every `Update` frame)
//!
//! 1. [`control_intent_clear_system`]: resets [`ControlIntent`].
//! 2. [`keyboard_to_intent_system`]: arrow keys and `N` into [`ControlIntent`].
//! 3. [`gamepad_to_intent_system`]: D-pad, left stick and South button into [`ControlIntent`].
//! 4. [`crate::simulation::session_tick_system`] consumes the intent.
//!
//! Input sources only ever *set* flags, so a keyboard and a gamepad held at
//! the same time combine instead of fighting.  Tests populate `ControlIntent`
//! directly to drive the session without a real device.
//!
//! [`quit_on_escape_system`] and [`gamepad_connection_system`] sit outside the
//! intent pipeline.

use crate::config::GameConfig;
use bevy::input::gamepad::{GamepadAxis, GamepadButton, GamepadConnection, GamepadConnectionEvent};
use bevy::prelude::*;

/// Controls held during the current frame, aggregated across input sources.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlIntent {
    pub turn_left: bool,
    pub turn_right: bool,
    pub thrust: bool,
    /// Spawn one debris this frame.  Stays set for as long as the key is held,
    /// so holding `N` spawns one per frame.
    pub spawn_debris: bool,
}

impl ControlIntent {
    pub fn is_idle(&self) -> bool {
        *self == Self::default()
    }
}

// ── Step 1: Clear ─────────────────────────────────────────────────────────────

pub fn control_intent_clear_system(mut intent: ResMut<ControlIntent>) {
    *intent = ControlIntent::default();
}

// ── Step 2: Keyboard ──────────────────────────────────────────────────────────

/// - **←** → `turn_left`
/// - **→** → `turn_right`
/// - **↑** → `thrust`
/// - **N** → `spawn_debris`
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<ControlIntent>,
) {
    if keys.pressed(KeyCode::ArrowLeft) {
        intent.turn_left = true;
    }
    if keys.pressed(KeyCode::ArrowRight) {
        intent.turn_right = true;
    }
    if keys.pressed(KeyCode::ArrowUp) {
        intent.thrust = true;
    }
    if keys.pressed(KeyCode::KeyN) {
        intent.spawn_debris = true;
    }
}

// ── Step 3: Gamepad ───────────────────────────────────────────────────────────

/// Every connected gamepad contributes:
///
/// - D-pad left / left stick pushed left → `turn_left`
/// - D-pad right / left stick pushed right → `turn_right`
/// - South button (A on Xbox layouts) → `thrust`
pub fn gamepad_to_intent_system(
    gamepads: Query<&Gamepad>,
    mut intent: ResMut<ControlIntent>,
    config: Res<GameConfig>,
) {
    for gamepad in &gamepads {
        let stick_x = gamepad.get(GamepadAxis::LeftStickX).unwrap_or(0.0);

        if gamepad.pressed(GamepadButton::DPadLeft) || stick_x < -config.gamepad_stick_deadzone {
            intent.turn_left = true;
        }
        if gamepad.pressed(GamepadButton::DPadRight) || stick_x > config.gamepad_stick_deadzone {
            intent.turn_right = true;
        }
        if gamepad.pressed(GamepadButton::South) {
            intent.thrust = true;
        }
    }
}

pub fn gamepad_connection_system(mut events: MessageReader<GamepadConnectionEvent>) {
    for event in events.read() {
        match &event.connection {
            GamepadConnection::Connected { name, .. } => {
                info!("[gamepad] {name} ({:?}) connected", event.gamepad);
            }
            GamepadConnection::Disconnected => {
                info!("[gamepad] {:?} disconnected", event.gamepad);
            }
        }
    }
}

// ── Quit ──────────────────────────────────────────────────────────────────────

/// Close the game as soon as Escape goes down.  Nothing needs flushing.
pub fn quit_on_escape_system(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.just_pressed(KeyCode::Escape) {
        info!("Escape pressed; exiting");
        exit.write(AppExit::Success);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(ControlIntent::default());
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.insert_resource(GameConfig::default());
        app
    }

    fn hold(app: &mut App, keys: &[KeyCode]) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        for key in keys {
            input.press(*key);
        }
    }

    fn run_keyboard(app: &mut App) -> ControlIntent {
        app.add_systems(
            Update,
            (control_intent_clear_system, keyboard_to_intent_system).chain(),
        );
        app.update();
        *app.world().resource::<ControlIntent>()
    }

    #[test]
    fn no_keys_means_idle_intent() {
        let mut app = build_test_app();
        assert!(run_keyboard(&mut app).is_idle());
    }

    #[test]
    fn arrow_keys_map_to_ship_controls() {
        let mut app = build_test_app();
        hold(&mut app, &[KeyCode::ArrowLeft, KeyCode::ArrowUp]);
        let intent = run_keyboard(&mut app);
        assert_eq!(
            intent,
            ControlIntent {
                turn_left: true,
                thrust: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn n_key_requests_a_spawn() {
        let mut app = build_test_app();
        hold(&mut app, &[KeyCode::KeyN]);
        assert!(run_keyboard(&mut app).spawn_debris);
    }

    #[test]
    fn clear_resets_a_stale_intent() {
        let mut app = build_test_app();
        app.insert_resource(ControlIntent {
            turn_right: true,
            spawn_debris: true,
            ..Default::default()
        });
        assert!(run_keyboard(&mut app).is_idle());
    }

    fn run_gamepad(app: &mut App, gamepad: Gamepad) -> ControlIntent {
        app.world_mut().spawn(gamepad);
        app.add_systems(
            Update,
            (control_intent_clear_system, gamepad_to_intent_system).chain(),
        );
        app.update();
        *app.world().resource::<ControlIntent>()
    }

    #[test]
    fn south_button_and_stick_right_map_to_thrust_and_turn() {
        let mut app = build_test_app();
        let mut gamepad = Gamepad::default();
        gamepad.digital_mut().press(GamepadButton::South);
        gamepad.analog_mut().set(GamepadAxis::LeftStickX, 0.9);

        let intent = run_gamepad(&mut app, gamepad);
        assert_eq!(
            intent,
            ControlIntent {
                turn_right: true,
                thrust: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn dpad_left_maps_to_turn_left() {
        let mut app = build_test_app();
        let mut gamepad = Gamepad::default();
        gamepad.digital_mut().press(GamepadButton::DPadLeft);

        let intent = run_gamepad(&mut app, gamepad);
        assert_eq!(
            intent,
            ControlIntent {
                turn_left: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn stick_inside_deadzone_is_ignored() {
        let mut app = build_test_app();
        let mut gamepad = Gamepad::default();
        gamepad.analog_mut().set(GamepadAxis::LeftStickX, -0.3);

        assert!(run_gamepad(&mut app, gamepad).is_idle());
    }

    #[test]
    fn stick_left_past_deadzone_turns_left() {
        let mut app = build_test_app();
        let mut gamepad = Gamepad::default();
        gamepad.analog_mut().set(GamepadAxis::LeftStickX, -0.8);

        assert!(run_gamepad(&mut app, gamepad).turn_left);
    }

    #[test]
    fn escape_requests_exit() {
        let mut app = build_test_app();
        app.add_systems(Update, quit_on_escape_system);
        hold(&mut app, &[KeyCode::Escape]);
        app.update();
        assert_eq!(app.should_exit(), Some(AppExit::Success));
    }

    #[test]
    fn other_keys_do_not_exit() {
        let mut app = build_test_app();
        app.add_systems(Update, quit_on_escape_system);
        hold(&mut app, &[KeyCode::KeyN, KeyCode::ArrowUp]);
        app.update();
        assert!(app.should_exit().is_none());
    }
}
