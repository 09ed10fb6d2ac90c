use crate::config::GameConfig;
use crate::debris::frame_index_with_duration;
use crate::error::GameError;
use bevy::asset::AssetLoadFailedEvent;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Static ship image.
#[derive(Resource, Clone, Default)]
pub struct ShipSprite(pub Handle<Image>);

/// The debris animation, shared read-only by every debris sprite.
///
/// Each sprite clones the two handles; the sheet itself is loaded once.
#[derive(Resource, Clone, Default)]
pub struct DebrisAnimation {
    pub sheet: Handle<Image>,
    pub layout: Handle<TextureAtlasLayout>,
    pub frame_count: usize,
    pub frame_ms: u64,
}

impl DebrisAnimation {
    /// Atlas index to show after `elapsed_ms` of wall-clock time.
    pub fn frame_at(&self, elapsed_ms: u64) -> usize {
        frame_index_with_duration(elapsed_ms, self.frame_ms, self.frame_count)
    }
}

/// Setup camera for 2D rendering.
///
/// The default `Camera2d` maps one world unit to one logical pixel with the
/// origin at the window centre, which is what [`crate::rendering::to_world`]
/// assumes.
pub fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    info!("[setup] Camera spawned");
}

/// Resize the primary window to the configured playfield.
///
/// The window is created from compiled defaults before `assets/game.toml` is
/// read, so this runs after [`crate::config::load_game_config`].
pub fn fit_window_to_playfield(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
) {
    let Ok(mut window) = windows.single_mut() else {
        return;
    };
    window
        .resolution
        .set(config.playfield_width, config.playfield_height);
}

/// Queue the ship image and the debris sheet, and slice the sheet into an
/// atlas of `debris_sheet_columns × debris_sheet_rows` square tiles.
pub fn load_sprites(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
    config: Res<GameConfig>,
) {
    let ship = asset_server.load(config.ship_image_path.clone());
    let sheet = asset_server.load(config.debris_sheet_path.clone());
    let layout = layouts.add(TextureAtlasLayout::from_grid(
        UVec2::splat(config.debris_tile_size),
        config.debris_sheet_columns,
        config.debris_sheet_rows,
        None,
        None,
    ));

    commands.insert_resource(ShipSprite(ship));
    commands.insert_resource(DebrisAnimation {
        sheet,
        layout,
        frame_count: config.debris_frame_count(),
        frame_ms: config.debris_frame_duration_ms,
    });
    info!(
        "[setup] Loading sprites: {} and {} ({} frames)",
        config.ship_image_path,
        config.debris_sheet_path,
        config.debris_frame_count()
    );
}

/// A sprite that fails to load ends the game with a non-zero exit code.
pub fn fatal_asset_failure_system(
    mut failures: MessageReader<AssetLoadFailedEvent<Image>>,
    mut exit: MessageWriter<AppExit>,
) {
    for failure in failures.read() {
        let err = GameError::AssetLoad {
            path: failure.path.to_string(),
            reason: failure.error.to_string(),
        };
        error!("{err}");
        exit.write(AppExit::error());
    }
}
