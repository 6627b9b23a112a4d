//! Wave spawning policy
//!
//! Asteroids enter from just outside the four arena edges, heading inward
//! with a jittered angle. Wave number scales both the head count and the
//! base speed, which is the game's only difficulty curve.

use glam::Vec2;
use rand::Rng;

use super::state::{Asteroid, GameEvent, GameState};
use crate::consts::*;

/// One of the four arena borders an asteroid can enter from
#[derive(Debug, Clone, Copy)]
pub enum SpawnEdge {
    Left,
    Right,
    Top,
    Bottom,
}

impl SpawnEdge {
    pub const ALL: [SpawnEdge; 4] = [
        SpawnEdge::Left,
        SpawnEdge::Right,
        SpawnEdge::Top,
        SpawnEdge::Bottom,
    ];

    /// Unit direction pointing into the arena
    pub fn inward(self) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::new(1.0, 0.0),
            SpawnEdge::Right => Vec2::new(-1.0, 0.0),
            SpawnEdge::Top => Vec2::new(0.0, 1.0),
            SpawnEdge::Bottom => Vec2::new(0.0, -1.0),
        }
    }

    /// Spawn point for offset `t` in [0, 1] along the edge, pushed outside
    /// the visible arena by the largest asteroid radius
    pub fn point(self, t: f32) -> Vec2 {
        match self {
            SpawnEdge::Left => Vec2::new(-ASTEROID_MAX_RADIUS, t * ARENA_HEIGHT),
            SpawnEdge::Right => Vec2::new(ARENA_WIDTH + ASTEROID_MAX_RADIUS, t * ARENA_HEIGHT),
            SpawnEdge::Top => Vec2::new(t * ARENA_WIDTH, -ASTEROID_MAX_RADIUS),
            SpawnEdge::Bottom => Vec2::new(t * ARENA_WIDTH, ARENA_HEIGHT + ASTEROID_MAX_RADIUS),
        }
    }
}

/// Number of asteroids for a wave
#[inline]
pub fn wave_count(wave: u32) -> u32 {
    WAVE_BASE_ASTEROIDS + (wave - 1) * WAVE_ASTEROID_INCREMENT
}

/// Compounding speed scale for a wave
#[inline]
pub fn wave_speed_multiplier(wave: u32) -> f32 {
    WAVE_SPEED_MULTIPLIER.powi(wave as i32 - 1)
}

/// Spawn the asteroids for `state.wave` along the arena edges
pub fn spawn_wave(state: &mut GameState) {
    let count = wave_count(state.wave);
    let speed_mult = wave_speed_multiplier(state.wave);

    for _ in 0..count {
        let edge = SpawnEdge::ALL[state.rng.random_range(0..SpawnEdge::ALL.len())];
        let speed =
            state.rng.random_range(ASTEROID_BASE_SPEED_MIN..=ASTEROID_BASE_SPEED_MAX) * speed_mult;
        let jitter = state
            .rng
            .random_range(-ASTEROID_HEADING_JITTER..=ASTEROID_HEADING_JITTER);
        let vel = Vec2::from_angle(jitter).rotate(edge.inward() * speed);
        let pos = edge.point(state.rng.random_range(0.0..1.0));
        let kind = state.rng.random_range(1..=ASTEROID_KINDS);
        let radius = ASTEROID_MIN_RADIUS * kind as f32;
        let asteroid = Asteroid::new(pos, vel, radius, &mut state.rng);
        state.asteroids.push(asteroid);
    }

    state.events.push(GameEvent::WaveSpawned {
        wave: state.wave,
        count,
    });
    log::info!(
        "wave {} spawned: {} asteroids, speed x{:.2}",
        state.wave,
        count,
        speed_mult
    );
}
