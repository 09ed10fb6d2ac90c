//! Shared motion state for everything that moves on the playfield.
//!
//! Ships and debris both carry a [`Body`] and implement [`Advance`].  The
//! playfield is a torus: anything leaving one edge re-enters on the opposite
//! edge, so after every [`Body::advance`] the position lies inside
//! `[0, width) × [0, height)`.
//!
//! Coordinates are playfield pixels with the origin at the top-left corner and
//! +y pointing down.  [`crate::rendering::to_world`] maps them into Bevy's
//! centred, y-up world space for drawing.

use crate::constants::{PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH};
use bevy::prelude::*;

/// Dimensions of the wrap-around playfield.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self::new(PLAYFIELD_WIDTH, PLAYFIELD_HEIGHT)
    }
}

impl Playfield {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }

    /// Fold an arbitrary point back onto the playfield.
    pub fn wrap(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            wrap_axis(point.x, self.width),
            wrap_axis(point.y, self.height),
        )
    }

    /// Returns `true` if `point` already lies inside the half-open playfield.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..self.width).contains(&point.x) && (0.0..self.height).contains(&point.y)
    }
}

/// Reduce `value` into `[0, bound)`.
///
/// Uses Euclidean remainder, so negative values wrap forward into the positive
/// range.  A tiny negative input can round up to exactly `bound` in `f32`;
/// that case folds to `0.0` to keep the interval half-open.
#[inline]
pub fn wrap_axis(value: f32, bound: f32) -> f32 {
    let wrapped = value.rem_euclid(bound);
    if wrapped >= bound {
        0.0
    } else {
        wrapped
    }
}

/// Position and per-frame velocity of a moving object.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
}

impl Body {
    pub const fn new(position: Vec2, velocity: Vec2) -> Self {
        Self { position, velocity }
    }

    /// Move by one frame's worth of velocity, then wrap onto the playfield.
    pub fn advance(&mut self, field: &Playfield) {
        self.position = field.wrap(self.position + self.velocity);
        debug_assert!(
            field.contains(self.position),
            "wrapped position {} left the {}x{} playfield",
            self.position,
            field.width,
            field.height
        );
    }
}

/// One-frame motion update shared by every moving object.
pub trait Advance {
    fn advance(&mut self, field: &Playfield);
}

impl Advance for Body {
    fn advance(&mut self, field: &Playfield) {
        Body::advance(self, field);
    }
}
