//! Structured logging for sim events and state
//!
//! Events and periodic snapshots go out through the log facade as JSON, so a
//! headless run leaves a machine-readable trace.

use serde::Serialize;

use crate::sim::{GameEvent, GamePhase, GameState};

/// Compact view of a state for periodic logging
#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot {
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    pub wave: u32,
    pub asteroids: usize,
    pub shots: usize,
    pub particles: usize,
}

pub fn snapshot(state: &GameState) -> StateSnapshot {
    StateSnapshot {
        phase: state.phase,
        score: state.score,
        lives: state.lives,
        wave: state.wave,
        asteroids: state.asteroids.len(),
        shots: state.shots.len(),
        particles: state.particles.len(),
    }
}

/// Log one tick's drained events. Wave starts and run ends are info, the
/// rest is debug chatter.
pub fn log_events(events: &[GameEvent]) {
    for event in events {
        if let Ok(json) = serde_json::to_string(event) {
            match event {
                GameEvent::WaveSpawned { .. } | GameEvent::GameOver { .. } => {
                    log::info!("event {}: {}", event.name(), json);
                }
                _ => log::debug!("event {}: {}", event.name(), json),
            }
        }
    }
}

pub fn log_snapshot(state: &GameState) {
    if let Ok(json) = serde_json::to_string(&snapshot(state)) {
        log::debug!("snapshot {}", json);
    }
}
