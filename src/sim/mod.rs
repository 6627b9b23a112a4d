//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, drawn in a fixed order
//! - Stable entity order (spawn order, swept once per tick)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod field;
pub mod state;
pub mod tick;

pub use body::Body;
pub use collision::{resolve_collisions, score_for_radius};
pub use field::{SpawnEdge, spawn_wave, wave_count, wave_speed_multiplier};
pub use state::{
    Asteroid, GameEvent, GamePhase, GameState, Particle, ShapeVertex, Ship, Shot,
};
pub use tick::{TickInput, tick};
