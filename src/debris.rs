//! Passive drifting debris.
//!
//! Debris has no state of its own beyond a [`Body`]: it drifts at a constant
//! velocity and wraps around the playfield.  Its animation frame is chosen from
//! global elapsed time by [`frame_index`], so every piece of debris on screen
//! shows the same frame of the shared sprite sheet.

use crate::body::{Advance, Body, Playfield};
use crate::constants::{DEBRIS_DEFAULT_VEL_X, DEBRIS_DEFAULT_VEL_Y, DEBRIS_FRAME_DURATION_MS};
use bevy::prelude::*;
use rand::Rng;

/// Drift velocity used when none is given.
pub const DEFAULT_DEBRIS_VELOCITY: Vec2 = Vec2::new(DEBRIS_DEFAULT_VEL_X, DEBRIS_DEFAULT_VEL_Y);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Debris {
    pub body: Body,
}

impl Debris {
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            body: Body::new(position, velocity),
        }
    }

    /// Debris at `position` drifting at [`DEFAULT_DEBRIS_VELOCITY`].
    pub fn at(position: Vec2) -> Self {
        Self::new(position, DEFAULT_DEBRIS_VELOCITY)
    }

    /// Debris at a uniformly random point of `field`, drifting at `velocity`.
    pub fn spawn_random<R: Rng + ?Sized>(rng: &mut R, field: &Playfield, velocity: Vec2) -> Self {
        let position = Vec2::new(
            rng.gen_range(0.0..field.width),
            rng.gen_range(0.0..field.height),
        );
        Self::new(position, velocity)
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }
}

impl Advance for Debris {
    fn advance(&mut self, field: &Playfield) {
        self.body.advance(field);
    }
}

/// Animation frame to show after `elapsed_ms` milliseconds, at
/// [`DEBRIS_FRAME_DURATION_MS`] per frame.
#[inline]
pub fn frame_index(elapsed_ms: u64, frame_count: usize) -> usize {
    frame_index_with_duration(elapsed_ms, DEBRIS_FRAME_DURATION_MS, frame_count)
}

/// `floor(elapsed_ms / frame_ms) mod frame_count`.
///
/// Returns 0 for an empty animation or a zero frame duration.
pub fn frame_index_with_duration(elapsed_ms: u64, frame_ms: u64, frame_count: usize) -> usize {
    if frame_ms == 0 || frame_count == 0 {
        return 0;
    }
    ((elapsed_ms / frame_ms) % frame_count as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn default_velocity_is_half_right_one_down() {
        let debris = Debris::at(Vec2::new(10.0, 20.0));
        assert_eq!(debris.velocity(), Vec2::new(0.5, 1.0));
    }

    #[test]
    fn advance_wraps_corner_without_damping() {
        let mut debris = Debris::new(Vec2::new(799.0, 599.0), Vec2::new(2.0, 2.0));
        debris.advance(&Playfield::default());
        assert_eq!(debris.position(), Vec2::new(1.0, 1.0));
        assert_eq!(debris.velocity(), Vec2::new(2.0, 2.0));
    }

    #[test]
    fn default_drift_crosses_the_bottom_edge() {
        let mut debris = Debris::at(Vec2::new(100.0, 599.5));
        debris.advance(&Playfield::default());
        assert_eq!(debris.position(), Vec2::new(100.5, 0.5));
    }

    #[test]
    fn random_spawns_land_inside_the_playfield() {
        let field = Playfield::default();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1_000 {
            let debris = Debris::spawn_random(&mut rng, &field, DEFAULT_DEBRIS_VELOCITY);
            assert!(field.contains(debris.position()), "{:?}", debris.position());
            assert_eq!(debris.velocity(), DEFAULT_DEBRIS_VELOCITY);
        }
    }

    #[test]
    fn frame_index_follows_hundred_ms_steps() {
        assert_eq!(frame_index(0, 30), 0);
        assert_eq!(frame_index(99, 30), 0);
        assert_eq!(frame_index(100, 30), 1);
        assert_eq!(frame_index(2_999, 30), 29);
        assert_eq!(frame_index(3_000, 30), 0);
        assert_eq!(frame_index(12_345, 30), 123 % 30);
    }

    #[test]
    fn frame_index_handles_empty_animation() {
        assert_eq!(frame_index(5_000, 0), 0);
        assert_eq!(frame_index_with_duration(5_000, 0, 30), 0);
    }

    #[test]
    fn custom_frame_duration() {
        assert_eq!(frame_index_with_duration(250, 50, 4), 1);
    }
}
