//! The player's ship: heading, turning, thrust and drag.
//!
//! Heading is in degrees, 0° points up the screen and positive angles turn
//! clockwise.  It is never normalised; the thrust vector is built from `sin`
//! and `cos`, which are periodic, so any accumulated value works.

use crate::body::{Advance, Body, Playfield};
use crate::constants::{SHIP_DAMPING, SHIP_THRUST, SHIP_TURN_STEP};
use bevy::prelude::*;

/// Handling parameters copied from [`crate::config::GameConfig`] at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipHandling {
    /// Degrees added or removed per turn call.
    pub turn_step: f32,
    /// Length of the thrust vector added per `accelerate` call.
    pub thrust: f32,
    /// Velocity multiplier applied after every advance.
    pub damping: f32,
}

impl Default for ShipHandling {
    fn default() -> Self {
        Self {
            turn_step: SHIP_TURN_STEP,
            thrust: SHIP_THRUST,
            damping: SHIP_DAMPING,
        }
    }
}

/// Velocity delta of length `magnitude` pointing along `heading_deg`.
///
/// 0° is (0, −m) (up the screen, since +y is down); 90° is (m, 0).
#[inline]
pub fn thrust_vector(heading_deg: f32, magnitude: f32) -> Vec2 {
    let (sin, cos) = heading_deg.to_radians().sin_cos();
    Vec2::new(magnitude * sin, -magnitude * cos)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ship {
    pub body: Body,
    /// Degrees, clockwise from straight up.  Unbounded.
    pub heading: f32,
    /// Carried for completeness; nothing awards or displays points.
    pub score: u32,
    pub handling: ShipHandling,
}

impl Ship {
    /// A stationary ship at `position` facing up.
    pub fn new(position: Vec2, handling: ShipHandling) -> Self {
        Self {
            body: Body::new(position, Vec2::ZERO),
            heading: 0.0,
            score: 0,
            handling,
        }
    }

    /// A stationary ship at the centre of `field`.
    pub fn centered(field: &Playfield, handling: ShipHandling) -> Self {
        Self::new(field.center(), handling)
    }

    pub fn position(&self) -> Vec2 {
        self.body.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.body.velocity
    }

    pub fn turn_left(&mut self) {
        self.heading -= self.handling.turn_step;
    }

    pub fn turn_right(&mut self) {
        self.heading += self.handling.turn_step;
    }

    /// Add one thrust vector along the current heading.
    pub fn accelerate(&mut self) {
        self.body.velocity += thrust_vector(self.heading, self.handling.thrust);
    }
}

impl Advance for Ship {
    /// Move and wrap, then bleed off speed.
    fn advance(&mut self, field: &Playfield) {
        self.body.advance(field);
        self.body.velocity *= self.handling.damping;
    }
}
