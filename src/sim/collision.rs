//! Collision resolution for one simulation tick
//!
//! The scan order is load-bearing: for each asteroid alive at scan start,
//! shots are tested before the ship, so a shot that destroys an asteroid on
//! the same tick the ship touches it saves the ship. Tombstoned entities are
//! skipped immediately; fragments spawned by splits are merged in after the
//! scan so they are never tested within the tick that created them.

use super::state::{Asteroid, GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Points for destroying an asteroid of the given radius, with a fallback
/// for radii outside the configured size classes
pub fn score_for_radius(radius: f32) -> u32 {
    ASTEROID_SCORES
        .iter()
        .find(|(size, _)| (radius - size).abs() < 0.5)
        .map(|&(_, points)| points)
        .unwrap_or(SCORE_FALLBACK)
}

/// Run the full resolution pass for the tick. Mutates liveness, score and
/// lives; may flip the phase to GameOver.
pub fn resolve_collisions(state: &mut GameState) {
    let mut fragments: Vec<Asteroid> = Vec::new();
    // Fragments are appended after the loop, so this bounds the scan to the
    // asteroids alive when it started
    let scanned = state.asteroids.len();

    'asteroids: for ai in 0..scanned {
        if !state.asteroids[ai].body.alive {
            continue;
        }

        let mut shot_hit = false;
        for si in 0..state.shots.len() {
            if !state.shots[si].body.alive {
                continue;
            }
            if state.asteroids[ai].body.overlaps(&state.shots[si].body) {
                state.shots[si].body.alive = false;
                shot_hit = true;
                break;
            }
        }

        if shot_hit {
            let hit_pos = state.asteroids[ai].body.pos;
            let radius = state.asteroids[ai].body.radius;
            let points = score_for_radius(radius);
            state.score += u64::from(points);
            state.events.push(GameEvent::AsteroidShot { radius, points });
            state.spawn_explosion(hit_pos);
            if let Some(children) = state.asteroids[ai].split(&mut state.rng) {
                state.events.push(GameEvent::AsteroidSplit {
                    parent_radius: radius,
                    child_radius: children[0].body.radius,
                });
                fragments.extend(children);
            }
            // Dead asteroids are never tested against the ship
            continue;
        }

        let ship_overlap = match &state.ship {
            Some(ship) if !ship.is_invulnerable() => {
                ship.body.overlaps(&state.asteroids[ai].body)
            }
            _ => false,
        };
        if ship_overlap {
            let ship_pos = match &state.ship {
                Some(ship) => ship.body.pos,
                None => continue,
            };
            state.lives = state.lives.saturating_sub(1);
            state.events.push(GameEvent::PlayerHit {
                lives_left: state.lives,
            });
            state.spawn_explosion(ship_pos);
            log::info!("ship hit, {} lives left", state.lives);
            if state.lives == 0 {
                state.phase = GamePhase::GameOver;
                state.events.push(GameEvent::GameOver {
                    score: state.score,
                    wave: state.wave,
                });
                break 'asteroids;
            }
            if let Some(ship) = state.ship.as_mut() {
                ship.respawn(ARENA_CENTER);
            }
        }
    }

    state.asteroids.extend(fragments);
}
