//! Sound effect mapping
//!
//! The sim emits [`GameEvent`]s; this module names the effect each one should
//! trigger and defines the sink trait the platform's synthesizer implements.
//! No synthesis happens here.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Shot leaves the ship
    Shoot,
    /// Asteroid destroyed
    Explosion,
    /// Ship struck by an asteroid
    PlayerHit,
    /// New wave enters the field
    WaveStart,
    /// Run ended
    GameOver,
}

/// Effect to play for a sim event, if any
pub fn effect_for_event(event: &GameEvent) -> Option<SoundEffect> {
    match event {
        GameEvent::ShotFired => Some(SoundEffect::Shoot),
        GameEvent::AsteroidShot { .. } => Some(SoundEffect::Explosion),
        // The split accompanies an AsteroidShot; one explosion per kill
        GameEvent::AsteroidSplit { .. } => None,
        GameEvent::PlayerHit { .. } => Some(SoundEffect::PlayerHit),
        GameEvent::WaveSpawned { .. } => Some(SoundEffect::WaveStart),
        GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
    }
}

/// Playback boundary implemented by the platform layer
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Sink for headless runs; logs instead of synthesizing
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx {:?}", effect);
    }
}

/// Route a tick's drained events into a sink
pub fn play_events(sink: &mut dyn AudioSink, events: &[GameEvent]) {
    for event in events {
        if let Some(effect) = effect_for_event(event) {
            sink.play(effect);
        }
    }
}
