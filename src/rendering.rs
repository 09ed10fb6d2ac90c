//! Sprite drawing for the session.
//!
//! The session itself knows nothing about Bevy entities.  Rendering keeps one
//! sprite entity per game object and copies state across every frame:
//!
//! | System                      | Schedule | Purpose                                      |
//! |-----------------------------|----------|----------------------------------------------|
//! | `spawn_ship_view`           | Startup  | Spawn the rotated ship sprite                |
//! | `spawn_debris_views_system` | Update   | Spawn sprites for debris added this frame    |
//! | `sync_ship_view_system`     | Update   | Copy ship position and heading to its sprite |
//! | `sync_debris_views_system`  | Update   | Copy debris positions, set animation frame   |
//!
//! ## Coordinates
//!
//! Game state uses playfield pixels (origin top-left, +y down, headings
//! clockwise).  Bevy's 2D world is centred with +y up and counter-clockwise
//! rotation.  [`to_world`] and [`heading_rotation`] do the conversion.
//!
//! ## Animation clock
//!
//! Debris frames are picked from `Time<Real>`, the unscaled wall clock.
//! Virtual time clamps long frames, which would make the animation drift
//! behind real time after a stall.

use crate::body::Playfield;
use crate::graphics::{DebrisAnimation, ShipSprite};
use crate::session::Session;
use bevy::prelude::*;
use bevy::time::Real;

/// Draw layers, back to front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ZOrder {
    Background = 0,
    Stars = 1,
    Player = 2,
    Ui = 3,
}

impl ZOrder {
    pub fn z(self) -> f32 {
        self as i32 as f32
    }
}

/// Marker for the ship's sprite entity.
#[derive(Component)]
pub struct ShipView;

/// Sprite entity for `Session::debris[self.0]`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebrisView(pub usize);

/// Map a playfield position to Bevy world space on `layer`.
pub fn to_world(position: Vec2, field: &Playfield, layer: ZOrder) -> Vec3 {
    Vec3::new(
        position.x - field.width * 0.5,
        field.height * 0.5 - position.y,
        layer.z(),
    )
}

/// Rotation for a sprite drawn at a clockwise heading in degrees.
pub fn heading_rotation(heading_deg: f32) -> Quat {
    Quat::from_rotation_z(-heading_deg.to_radians())
}

pub fn spawn_ship_view(mut commands: Commands, session: Res<Session>, sprite: Res<ShipSprite>) {
    let ship = &session.ship;
    commands.spawn((
        ShipView,
        Sprite::from_image(sprite.0.clone()),
        Transform::from_translation(to_world(ship.position(), &session.field, ZOrder::Player))
            .with_rotation(heading_rotation(ship.heading)),
    ));
}

/// Spawn one sprite for every debris that does not have one yet.
///
/// Debris is only ever appended, so the first `views.iter().count()` indices
/// are already covered.
pub fn spawn_debris_views_system(
    mut commands: Commands,
    session: Res<Session>,
    views: Query<&DebrisView>,
    animation: Res<DebrisAnimation>,
    time: Res<Time<Real>>,
) {
    let existing = views.iter().count();
    if existing >= session.debris.len() {
        return;
    }

    let frame = animation.frame_at(time.elapsed().as_millis() as u64);
    for (index, debris) in session.debris.iter().enumerate().skip(existing) {
        commands.spawn((
            DebrisView(index),
            Sprite::from_atlas_image(
                animation.sheet.clone(),
                TextureAtlas {
                    layout: animation.layout.clone(),
                    index: frame,
                },
            ),
            Transform::from_translation(to_world(
                debris.position(),
                &session.field,
                ZOrder::Stars,
            )),
        ));
    }
    debug!(
        "Spawned {} debris sprite(s); {} total",
        session.debris.len() - existing,
        session.debris.len()
    );
}

pub fn sync_ship_view_system(
    session: Res<Session>,
    mut views: Query<&mut Transform, With<ShipView>>,
) {
    let Ok(mut transform) = views.single_mut() else {
        return;
    };
    let ship = &session.ship;
    transform.translation = to_world(ship.position(), &session.field, ZOrder::Player);
    transform.rotation = heading_rotation(ship.heading);
}

/// Move every debris sprite and show the frame for the current time.  All
/// debris share the same frame.
pub fn sync_debris_views_system(
    session: Res<Session>,
    animation: Res<DebrisAnimation>,
    time: Res<Time<Real>>,
    mut views: Query<(&DebrisView, &mut Transform, &mut Sprite)>,
) {
    let frame = animation.frame_at(time.elapsed().as_millis() as u64);
    for (view, mut transform, mut sprite) in &mut views {
        let Some(debris) = session.debris.get(view.0) else {
            continue;
        };
        transform.translation = to_world(debris.position(), &session.field, ZOrder::Stars);
        if let Some(atlas) = sprite.texture_atlas.as_mut() {
            atlas.index = frame;
        }
    }
}
