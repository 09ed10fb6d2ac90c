//! The game session: one ship, an ever-growing list of debris, one playfield.
//!
//! [`Session`] is a Bevy [`Resource`] but holds no ECS handles; all of its
//! behaviour is plain Rust so it can be driven directly in tests.  The
//! per-frame order lives in [`Session::tick`]:
//!
//! 1. apply held controls to the ship (left, right, thrust) and spawn debris;
//! 2. advance the ship;
//! 3. advance every debris in insertion order.
//!
//! Debris is never removed, so indices into [`Session::debris`] are stable for
//! the lifetime of the session.  The renderer relies on that.

use crate::body::{Advance, Playfield};
use crate::config::GameConfig;
use crate::debris::{Debris, DEFAULT_DEBRIS_VELOCITY};
use crate::input::ControlIntent;
use crate::ship::{Ship, ShipHandling};
use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Session {
    pub field: Playfield,
    pub ship: Ship,
    pub debris: Vec<Debris>,
    /// Velocity given to debris spawned at runtime.
    pub debris_velocity: Vec2,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(
            Playfield::default(),
            ShipHandling::default(),
            DEFAULT_DEBRIS_VELOCITY,
        )
    }
}

impl Session {
    /// A session with the ship centred and no debris.
    pub fn new(field: Playfield, handling: ShipHandling, debris_velocity: Vec2) -> Self {
        Self {
            field,
            ship: Ship::centered(&field, handling),
            debris: Vec::new(),
            debris_velocity,
        }
    }

    /// A session built from `config`, with its initial debris already spawned.
    pub fn from_config<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Self {
        let mut session = Self::new(
            config.playfield(),
            config.ship_handling(),
            config.debris_default_velocity(),
        );
        for _ in 0..config.initial_debris_count {
            session.spawn_debris(rng);
        }
        session
    }

    /// Append one randomly placed debris and return a reference to it.
    pub fn spawn_debris<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &Debris {
        let debris = Debris::spawn_random(rng, &self.field, self.debris_velocity);
        self.debris.push(debris);
        &self.debris[self.debris.len() - 1]
    }

    pub fn debris_count(&self) -> usize {
        self.debris.len()
    }

    /// Apply every control held this frame.
    ///
    /// Left and right are both applied when both are held, so they cancel.
    pub fn apply_controls<R: Rng + ?Sized>(&mut self, intent: &ControlIntent, rng: &mut R) {
        if intent.is_idle() {
            return;
        }
        if intent.turn_left {
            self.ship.turn_left();
        }
        if intent.turn_right {
            self.ship.turn_right();
        }
        if intent.thrust {
            self.ship.accelerate();
        }
        if intent.spawn_debris {
            self.spawn_debris(rng);
        }
    }

    /// Advance the ship, then every debris in insertion order.
    pub fn advance_all(&mut self) {
        let field = self.field;
        self.ship.advance(&field);
        for debris in &mut self.debris {
            debris.advance(&field);
        }
    }

    /// One full update: controls, then motion.
    pub fn tick<R: Rng + ?Sized>(&mut self, intent: &ControlIntent, rng: &mut R) {
        self.apply_controls(intent, rng);
        self.advance_all();
    }
}
