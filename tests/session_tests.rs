//! Headless tests for the per-frame session pipeline.
//!
//! These tests use [`MinimalPlugins`] (no window, no renderer, no asset
//! server) and register only the systems under test, so they run fast and
//! deterministically in CI.
//!
//! Covered scenarios:
//! 1. Holding the spawn control grows the debris collection by one per frame.
//! 2. A thrust frame moves the ship by the thrust vector and damps it.
//! 3. Every debris gets exactly one sprite entity, including ones spawned later.
//! 4. Sprites follow the session: positions map into world space, the ship
//!    sprite rotates with the heading, and all debris share one frame index.
//! 5. The debris frame follows the real (wall-clock) time, not virtual time.

use asteroids::debris::Debris;
use asteroids::graphics::DebrisAnimation;
use asteroids::input::ControlIntent;
use asteroids::rendering::{
    heading_rotation, spawn_debris_views_system, sync_debris_views_system,
    sync_ship_view_system, DebrisView, ShipView,
};
use asteroids::session::Session;
use asteroids::simulation::session_tick_system;
use bevy::prelude::*;
use bevy::time::Real;
use std::time::Duration;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Headless app with a default session and the tick plus sprite systems,
/// chained in the same order `SimulationPlugin` uses.
fn build_app(session: Session, intent: ControlIntent) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(session);
    app.insert_resource(intent);
    app.insert_resource(DebrisAnimation {
        frame_count: 30,
        frame_ms: 100,
        ..Default::default()
    });
    app.add_systems(
        Update,
        (
            session_tick_system,
            spawn_debris_views_system,
            sync_ship_view_system,
            sync_debris_views_system,
        )
            .chain(),
    );
    app
}

fn session(app: &App) -> &Session {
    app.world().resource::<Session>()
}

fn debris_views(app: &mut App) -> Vec<(DebrisView, Transform, Option<usize>)> {
    let mut query = app
        .world_mut()
        .query::<(&DebrisView, &Transform, &Sprite)>();
    let mut views: Vec<_> = query
        .iter(app.world())
        .map(|(view, transform, sprite)| {
            (
                *view,
                *transform,
                sprite.texture_atlas.as_ref().map(|atlas| atlas.index),
            )
        })
        .collect();
    views.sort_by_key(|(view, _, _)| view.0);
    views
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[test]
fn holding_spawn_adds_one_debris_per_frame() {
    let mut app = build_app(
        Session::default(),
        ControlIntent {
            spawn_debris: true,
            ..Default::default()
        },
    );

    for frame in 1..=10 {
        app.update();
        assert_eq!(
            session(&app).debris_count(),
            frame,
            "expected exactly one new debris per frame"
        );
    }
}

#[test]
fn idle_frames_never_spawn() {
    let mut app = build_app(Session::default(), ControlIntent::default());
    for _ in 0..10 {
        app.update();
    }
    assert_eq!(session(&app).debris_count(), 0);
}

#[test]
fn thrust_frame_moves_and_damps_the_ship() {
    let mut app = build_app(
        Session::default(),
        ControlIntent {
            thrust: true,
            ..Default::default()
        },
    );
    app.update();

    let ship = &session(&app).ship;
    assert_eq!(ship.position(), Vec2::new(400.0, 299.5));
    assert_eq!(ship.velocity(), Vec2::new(0.0, -0.5 * 0.95));
    assert_eq!(ship.heading, 0.0);
}

#[test]
fn every_debris_gets_exactly_one_sprite() {
    let mut start = Session::default();
    start.debris.push(Debris::at(Vec2::new(100.0, 100.0)));
    start.debris.push(Debris::at(Vec2::new(200.0, 200.0)));
    let mut app = build_app(start, ControlIntent::default());

    app.update();
    assert_eq!(debris_views(&mut app).len(), 2);

    app.insert_resource(ControlIntent {
        spawn_debris: true,
        ..Default::default()
    });
    app.update();
    app.update();

    app.insert_resource(ControlIntent::default());
    app.update();

    let views = debris_views(&mut app);
    let indices: Vec<usize> = views.iter().map(|(view, _, _)| view.0).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(session(&app).debris_count(), 4);
}

#[test]
fn debris_sprites_follow_the_session() {
    let mut start = Session::default();
    start
        .debris
        .push(Debris::new(Vec2::new(799.0, 599.0), Vec2::new(2.0, 2.0)));
    start.debris.push(Debris::at(Vec2::new(400.0, 300.0)));
    let mut app = build_app(start, ControlIntent::default());

    app.update(); // tick + spawn sprites
    app.update(); // tick + sync

    let views = debris_views(&mut app);
    for (view, transform, _) in &views {
        let debris = session(&app).debris[view.0];
        let field = session(&app).field;
        let expected = Vec3::new(
            debris.position().x - field.width / 2.0,
            field.height / 2.0 - debris.position().y,
            1.0,
        );
        assert_eq!(transform.translation, expected);
    }
    assert_eq!(session(&app).debris[0].position(), Vec2::new(3.0, 3.0));
}

#[test]
fn all_debris_show_the_same_frame() {
    let mut start = Session::default();
    for i in 0..5 {
        start.debris.push(Debris::at(Vec2::new(i as f32 * 100.0, 50.0)));
    }
    let mut app = build_app(start, ControlIntent::default());
    app.update();
    app.update();

    let frames: Vec<Option<usize>> = debris_views(&mut app)
        .into_iter()
        .map(|(_, _, frame)| frame)
        .collect();
    assert_eq!(frames.len(), 5);
    assert!(frames[0].is_some());
    assert!(frames.iter().all(|f| *f == frames[0]));
}

#[test]
fn ship_sprite_tracks_position_and_heading() {
    let mut app = build_app(
        Session::default(),
        ControlIntent {
            turn_right: true,
            ..Default::default()
        },
    );
    app.world_mut().spawn((ShipView, Transform::default()));

    for _ in 0..20 {
        app.update();
    }

    let ship = session(&app).ship.clone();
    assert!((ship.heading - 90.0).abs() < 1e-3);

    let mut query = app
        .world_mut()
        .query_filtered::<&Transform, With<ShipView>>();
    let transform = *query.single(app.world()).unwrap();
    assert_eq!(transform.translation, Vec3::new(0.0, 0.0, 2.0));
    assert!(transform.rotation.angle_between(heading_rotation(ship.heading)) < 1e-5);
}

#[test]
fn debris_frame_follows_wall_clock_not_virtual_time() {
    // No TimePlugin: both clocks are driven by hand so they can disagree.
    let mut app = App::new();
    let mut start = Session::default();
    start.debris.push(Debris::at(Vec2::new(50.0, 50.0)));
    app.insert_resource(start);
    app.insert_resource(DebrisAnimation {
        frame_count: 30,
        frame_ms: 100,
        ..Default::default()
    });

    let mut real = Time::<Real>::default();
    real.advance_by(Duration::from_millis(5_050));
    app.insert_resource(real);
    // Virtual time still at zero, as if a long stall had been clamped away.
    app.insert_resource(Time::<()>::default());

    app.add_systems(
        Update,
        (spawn_debris_views_system, sync_debris_views_system).chain(),
    );
    app.update();

    let views = debris_views(&mut app);
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].2, Some((5_050 / 100) % 30));
}
