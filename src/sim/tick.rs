//! Variable timestep simulation tick
//!
//! Core loop that advances the game deterministically. Phase transitions are
//! applied first, so a press takes effect on the tick it arrives and the new
//! phase runs its update the same tick.

use super::collision::resolve_collisions;
use super::field::spawn_wave;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::normalize_angle;

/// Input commands for a single tick (deterministic)
///
/// The first five are held keys sampled every tick; confirm, cancel and quit
/// are one-shot presses the caller clears after the tick consumes them.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Rotate counter-clockwise
    pub rotate_left: bool,
    /// Rotate clockwise
    pub rotate_right: bool,
    /// Accelerate along the facing
    pub thrust_forward: bool,
    /// Accelerate against the facing
    pub thrust_back: bool,
    /// Fire, gated by the ship's cooldown
    pub fire: bool,
    /// Start or restart a run
    pub confirm: bool,
    /// Pause/resume toggle
    pub cancel: bool,
    /// Abandon the run back to the menu
    pub quit: bool,
    /// Idle/demo mode - autopilot flies the ship
    pub idle_mode: bool,
}

/// Fold a held-key pair into a -1/0/+1 axis value
#[inline]
fn axis(negative: bool, positive: bool) -> f32 {
    (positive as i8 - negative as i8) as f32
}

/// Advance the game state by one timestep of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Phase transitions
    match state.phase {
        GamePhase::Menu => {
            if input.confirm {
                state.reset_session();
                state.phase = GamePhase::Playing;
                spawn_wave(state);
                log::info!("run started, seed {}", state.seed);
            }
        }
        GamePhase::Playing => {
            if input.cancel {
                state.phase = GamePhase::Paused;
            }
        }
        GamePhase::Paused => {
            if input.quit {
                state.clear_entities();
                state.phase = GamePhase::Menu;
            } else if input.cancel {
                state.phase = GamePhase::Playing;
            }
        }
        GamePhase::GameOver => {
            if input.confirm {
                state.reset_session();
                state.phase = GamePhase::Playing;
                spawn_wave(state);
                log::info!("run restarted, seed {}", state.seed);
            } else if input.quit {
                state.clear_entities();
                state.phase = GamePhase::Menu;
            }
        }
    }

    match state.phase {
        // Nothing moves on the menu or while paused
        GamePhase::Menu | GamePhase::Paused => {}

        GamePhase::Playing => {
            state.time_ticks += 1;

            let mut input = input.clone();
            if input.idle_mode {
                autopilot(state, &mut input);
            }
            let input = &input;

            for asteroid in &mut state.asteroids {
                asteroid.update(dt);
            }
            for shot in &mut state.shots {
                shot.update(dt);
            }
            for particle in &mut state.particles {
                particle.update(dt);
            }
            if let Some(ship) = state.ship.as_mut() {
                let turn = axis(input.rotate_left, input.rotate_right);
                let thrust = axis(input.thrust_back, input.thrust_forward);
                if let Some(shot) = ship.update(turn, thrust, input.fire, dt) {
                    state.shots.push(shot);
                    state.events.push(GameEvent::ShotFired);
                }
            }

            resolve_collisions(state);
            state.sweep_dead();

            // Inter-wave controller: the first empty tick arms the delay,
            // later ticks count it down. A fatal hit this tick skips it.
            if state.phase == GamePhase::Playing && state.asteroids.is_empty() {
                if state.wave_delay > 0.0 {
                    state.wave_delay -= dt;
                    if state.wave_delay <= 0.0 {
                        state.wave += 1;
                        spawn_wave(state);
                    }
                } else {
                    state.wave_delay = WAVE_DELAY_SECONDS;
                }
            }
        }

        // The field freezes but explosion debris keeps settling
        GamePhase::GameOver => {
            for particle in &mut state.particles {
                particle.update(dt);
            }
            state.sweep_dead();
        }
    }
}

/// Demo-mode pilot: turn toward the nearest asteroid, fire once roughly
/// lined up, thrust when the target is far off
fn autopilot(state: &GameState, input: &mut TickInput) {
    let Some(ship) = &state.ship else { return };
    let nearest = state
        .asteroids
        .iter()
        .filter(|a| a.body.alive)
        .min_by(|a, b| {
            let da = (a.body.pos - ship.body.pos).length_squared();
            let db = (b.body.pos - ship.body.pos).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        });
    let Some(target) = nearest else { return };

    let to_target = target.body.pos - ship.body.pos;
    let delta = normalize_angle(to_target.y.atan2(to_target.x) - ship.rotation);
    input.rotate_left = delta < -0.05;
    input.rotate_right = delta > 0.05;
    input.fire = delta.abs() < 0.3;
    input.thrust_forward = to_target.length() > 300.0;
    input.thrust_back = false;
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = NOMINAL_DT;

    fn confirm() -> TickInput {
        TickInput {
            confirm: true,
            ..Default::default()
        }
    }

    fn cancel() -> TickInput {
        TickInput {
            cancel: true,
            ..Default::default()
        }
    }

    fn quit() -> TickInput {
        TickInput {
            quit: true,
            ..Default::default()
        }
    }

    fn started_state(seed: u64) -> GameState {
        let mut state = GameState::new(seed);
        tick(&mut state, &confirm(), DT);
        state.drain_events();
        state
    }

    #[test]
    fn test_menu_confirm_starts_run() {
        let mut state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.ship.is_none());

        // A tick without confirm stays on the menu
        tick(&mut state, &TickInput::default(), DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.time_ticks, 0);

        tick(&mut state, &confirm(), DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.wave, 1);
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.ship.is_some());
        // The confirm tick already ran an update
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_pause_freezes_the_field() {
        let mut state = started_state(42);
        tick(&mut state, &cancel(), DT);
        assert_eq!(state.phase, GamePhase::Paused);

        let frozen: Vec<_> = state.asteroids.iter().map(|a| a.body.pos).collect();
        let ticks_before = state.time_ticks;
        for _ in 0..10 {
            tick(&mut state, &TickInput::default(), DT);
        }
        assert_eq!(state.time_ticks, ticks_before);
        for (a, pos) in state.asteroids.iter().zip(frozen.iter()) {
            assert!((a.body.pos - *pos).length() < 0.001);
        }
    }

    #[test]
    fn test_paused_cancel_resumes() {
        let mut state = started_state(42);
        tick(&mut state, &cancel(), DT);
        assert_eq!(state.phase, GamePhase::Paused);
        tick(&mut state, &cancel(), DT);
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_paused_quit_clears_to_menu() {
        let mut state = started_state(42);
        tick(&mut state, &cancel(), DT);
        tick(&mut state, &quit(), DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.ship.is_none());
        assert!(state.asteroids.is_empty());
        assert!(state.shots.is_empty());
    }

    #[test]
    fn test_game_over_confirm_restarts_fresh() {
        let mut state = started_state(42);
        state.phase = GamePhase::GameOver;
        state.score = 900;
        state.lives = 0;
        state.wave = 5;

        tick(&mut state, &confirm(), DT);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.wave, 1);
        assert_eq!(state.asteroids.len(), 4);
        assert!(state.ship.is_some());
    }

    #[test]
    fn test_game_over_quit_clears_to_menu() {
        let mut state = started_state(42);
        state.phase = GamePhase::GameOver;
        tick(&mut state, &quit(), DT);
        assert_eq!(state.phase, GamePhase::Menu);
        assert!(state.ship.is_none());
        assert!(state.asteroids.is_empty());
    }

    #[test]
    fn test_wave_cleared_schedules_next() {
        let mut state = started_state(7);
        state.asteroids.clear();

        // First empty tick arms the delay without counting it down
        tick(&mut state, &TickInput::default(), DT);
        assert!((state.wave_delay - WAVE_DELAY_SECONDS).abs() < 0.001);
        assert_eq!(state.wave, 1);
        assert!(state.asteroids.is_empty());

        // Half the delay: still waiting
        tick(&mut state, &TickInput::default(), WAVE_DELAY_SECONDS / 2.0);
        assert_eq!(state.wave, 1);
        assert!(state.asteroids.is_empty());

        // Remainder elapses: wave 2 spawns with two more asteroids
        tick(&mut state, &TickInput::default(), WAVE_DELAY_SECONDS / 2.0);
        assert_eq!(state.wave, 2);
        assert_eq!(state.asteroids.len(), 6);
        let spawned = state
            .drain_events()
            .into_iter()
            .find(|e| e.name() == "wave_spawned");
        assert!(matches!(
            spawned,
            Some(GameEvent::WaveSpawned { wave: 2, count: 6 })
        ));
    }

    #[test]
    fn test_firing_emits_shot_and_event() {
        let mut state = started_state(42);
        let input = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        assert_eq!(state.shots.len(), 1);
        let names: Vec<_> = state.drain_events().iter().map(|e| e.name()).collect();
        assert!(names.contains(&"shot_fired"));

        // Cooldown suppresses the next tick's shot
        tick(&mut state, &input, DT);
        assert_eq!(state.shots.len(), 1);
        assert!(state.drain_events().is_empty());
    }

    #[test]
    fn test_turn_and_thrust_axes() {
        let mut state = started_state(42);
        let heading_before = state.ship.as_ref().unwrap().rotation;
        let input = TickInput {
            rotate_right: true,
            thrust_forward: true,
            ..Default::default()
        };
        tick(&mut state, &input, DT);
        let ship = state.ship.as_ref().unwrap();
        assert!(ship.rotation > heading_before);
        assert!(ship.body.vel.length() > 0.0);

        // Opposed keys cancel out
        let input = TickInput {
            rotate_left: true,
            rotate_right: true,
            ..Default::default()
        };
        let heading_before = state.ship.as_ref().unwrap().rotation;
        tick(&mut state, &input, DT);
        assert!((state.ship.as_ref().unwrap().rotation - heading_before).abs() < 0.0001);
    }

    #[test]
    fn test_game_over_only_settles_particles() {
        let mut state = started_state(42);
        state.phase = GamePhase::GameOver;
        state.spawn_explosion(ARENA_CENTER);
        let rock_pos = state.asteroids[0].body.pos;

        tick(&mut state, &TickInput::default(), DT);
        assert!((state.asteroids[0].body.pos - rock_pos).length() < 0.001);
        assert!(!state.particles.is_empty());

        // Debris expires and sweeps out
        tick(&mut state, &TickInput::default(), PARTICLE_LIFETIME_SECONDS + 0.01);
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and input stream stay identical
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);

        let hold = TickInput {
            rotate_left: true,
            thrust_forward: true,
            fire: true,
            ..Default::default()
        };
        tick(&mut state1, &confirm(), DT);
        tick(&mut state2, &confirm(), DT);
        for _ in 0..300 {
            tick(&mut state1, &hold, DT);
            tick(&mut state2, &hold, DT);
        }

        let json1 = serde_json::to_string(&state1).unwrap();
        let json2 = serde_json::to_string(&state2).unwrap();
        assert_eq!(json1, json2);
    }

    #[test]
    fn test_idle_mode_flies_the_ship() {
        let mut state = started_state(31);
        let input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        let mut fired = false;
        for _ in 0..1800 {
            tick(&mut state, &input, DT);
            fired |= !state.shots.is_empty();
            if let Some(ship) = &state.ship {
                assert!(ship.body.pos.x >= 0.0 && ship.body.pos.x < ARENA_WIDTH);
                assert!(ship.body.pos.y >= 0.0 && ship.body.pos.y < ARENA_HEIGHT);
            }
            if state.phase == GamePhase::GameOver {
                break;
            }
        }
        // The pilot at least took some shots
        assert!(fired);
    }
}
