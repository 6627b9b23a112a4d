//! Vector Rocks - a wrap-around arena asteroids game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, game state)
//! - `audio`: Sound cue mapping for the shell's audio backend
//! - `telemetry`: Event and snapshot logging

pub mod audio;
pub mod sim;
pub mod telemetry;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    const DEG: f32 = std::f32::consts::PI / 180.0;

    /// Nominal shell cadence; the sim itself accepts any dt >= 0
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;

    /// Arena dimensions (toroidal: exiting one edge re-enters the opposite)
    pub const ARENA_WIDTH: f32 = 1280.0;
    pub const ARENA_HEIGHT: f32 = 720.0;
    pub const ARENA_CENTER: Vec2 = Vec2::new(ARENA_WIDTH * 0.5, ARENA_HEIGHT * 0.5);

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Turn rate (radians/s)
    pub const SHIP_TURN_SPEED: f32 = 300.0 * DEG;
    /// Thrust acceleration (pixels/s²)
    pub const SHIP_ACCELERATION: f32 = 300.0;
    /// Speed clamp (pixels/s)
    pub const SHIP_MAX_SPEED: f32 = 400.0;
    /// Per-frame multiplicative velocity decay
    pub const SHIP_DRAG: f32 = 0.98;
    pub const STARTING_LIVES: u8 = 3;
    /// Grace period after respawn
    pub const INVULNERABILITY_SECONDS: f32 = 2.0;
    /// Visibility toggle period while invulnerable
    pub const BLINK_RATE_SECONDS: f32 = 0.1;

    /// Shot defaults
    pub const SHOT_RADIUS: f32 = 5.0;
    pub const SHOT_SPEED: f32 = 500.0;
    pub const SHOT_COOLDOWN_SECONDS: f32 = 0.3;
    /// Shots do not wrap; the TTL bounds off-screen accumulation
    pub const SHOT_LIFETIME_SECONDS: f32 = 1.5;

    /// Smallest (terminal) asteroid radius; size classes are multiples of it
    pub const ASTEROID_MIN_RADIUS: f32 = 20.0;
    /// Number of size classes (radius = ASTEROID_MIN_RADIUS * class)
    pub const ASTEROID_KINDS: u32 = 3;
    pub const ASTEROID_MAX_RADIUS: f32 = ASTEROID_MIN_RADIUS * ASTEROID_KINDS as f32;
    /// Fragment speed multiplier applied to the parent velocity
    pub const ASTEROID_SPLIT_SPEED: f32 = 1.2;
    /// Fragment deflection angle range (radians)
    pub const ASTEROID_SPLIT_ANGLE_MIN: f32 = 20.0 * DEG;
    pub const ASTEROID_SPLIT_ANGLE_MAX: f32 = 50.0 * DEG;
    /// Silhouette vertex count
    pub const ASTEROID_VERTEX_COUNT: usize = 10;
    /// Silhouette radius perturbation factor (vertex distance in radius * [1-J, 1+J])
    pub const ASTEROID_JAGGEDNESS: f32 = 0.4;
    /// Spin rate range (radians/s, drawn from +-this)
    pub const ASTEROID_MAX_ROTATION_SPEED: f32 = 40.0 * DEG;
    /// Spawn base speed range (pixels/s, before wave scaling)
    pub const ASTEROID_BASE_SPEED_MIN: f32 = 40.0;
    pub const ASTEROID_BASE_SPEED_MAX: f32 = 100.0;
    /// Spawn heading jitter around the edge's inward direction (radians)
    pub const ASTEROID_HEADING_JITTER: f32 = 30.0 * DEG;

    /// Wave scaling: count = base + (wave - 1) * increment, speed *= mult^(wave - 1)
    pub const WAVE_BASE_ASTEROIDS: u32 = 4;
    pub const WAVE_ASTEROID_INCREMENT: u32 = 2;
    pub const WAVE_SPEED_MULTIPLIER: f32 = 1.1;
    /// Pause between clearing a wave and the next spawn
    pub const WAVE_DELAY_SECONDS: f32 = 2.0;

    /// Explosion burst defaults
    pub const PARTICLE_COUNT: usize = 8;
    pub const PARTICLE_SPEED_MIN: f32 = 50.0;
    pub const PARTICLE_SPEED_MAX: f32 = 150.0;
    pub const PARTICLE_LIFETIME_SECONDS: f32 = 0.6;
    pub const PARTICLE_RADIUS: f32 = 3.0;
    /// Jitter applied to each burst ray angle (radians)
    pub const PARTICLE_ANGLE_JITTER: f32 = 0.3;

    /// Points per destroyed asteroid, keyed by radius (largest first)
    pub const ASTEROID_SCORES: [(f32, u32); 3] = [
        (ASTEROID_MIN_RADIUS * 3.0, 20),
        (ASTEROID_MIN_RADIUS * 2.0, 50),
        (ASTEROID_MIN_RADIUS, 100),
    ];
    /// Awarded when a radius matches no configured size class
    pub const SCORE_FALLBACK: u32 = 10;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}
