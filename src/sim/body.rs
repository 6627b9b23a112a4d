//! Circle body physics for arena entities
//!
//! Every moving entity shares the same primitive: position, velocity, a
//! collision radius and a liveness flag. The arena is toroidal - bodies that
//! wrap re-enter from the opposite edge with velocity preserved. Death is a
//! tombstone: passes skip dead bodies and the tick sweeps them at the end.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{ARENA_HEIGHT, ARENA_WIDTH};

/// Shared state for every moving entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Collision radius (always > 0)
    pub radius: f32,
    /// Cleared on death; swept from the registry at end of tick
    pub alive: bool,
}

/// Wrap a coordinate into [0, size)
#[inline]
pub fn wrap_coord(v: f32, size: f32) -> f32 {
    let wrapped = v.rem_euclid(size);
    // rem_euclid can round up to `size` itself for tiny negative inputs
    if wrapped >= size { wrapped - size } else { wrapped }
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel,
            radius,
            alive: true,
        }
    }

    /// Advance position by one timestep
    #[inline]
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Re-enter from the opposite edge after leaving the arena on either axis
    #[inline]
    pub fn wrap(&mut self) {
        self.pos.x = wrap_coord(self.pos.x, ARENA_WIDTH);
        self.pos.y = wrap_coord(self.pos.y, ARENA_HEIGHT);
    }

    /// Circle overlap test: center distance <= sum of radii
    #[inline]
    pub fn overlaps(&self, other: &Body) -> bool {
        let reach = self.radius + other.radius;
        self.pos.distance_squared(other.pos) <= reach * reach
    }
}
