use asteroids::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, WINDOW_TITLE};
use asteroids::simulation::SimulationPlugin;
use bevy::prelude::*;
use bevy::window::WindowResolution;

fn main() {
    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.into(),
                        resolution: WindowResolution::new(
                            PLAYFIELD_WIDTH as u32,
                            PLAYFIELD_HEIGHT as u32,
                        ),
                        resizable: false,
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                // Sprites are small pixel art; keep them crisp.
                .set(ImagePlugin::default_nearest()),
        )
        .insert_resource(ClearColor(Color::BLACK))
        // Starts from compiled GameConfig defaults; load_game_config applies
        // assets/game.toml (if present) in the Startup schedule.
        .add_plugins(SimulationPlugin)
        .run();
}
