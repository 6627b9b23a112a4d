//! Game state and core simulation types
//!
//! Everything needed to reproduce a session deterministically lives here:
//! the phase machine, the entity registry (ship slot + dense vectors) and the
//! seeded RNG stream. Transient per-tick queues are skipped by serde.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::body::Body;
use crate::consts::*;
use crate::polar_to_cartesian;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, no entities
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run
    Paused,
    /// Run ended, decorative particles still settle
    GameOver,
}

/// Events emitted by the sim, drained once per tick by the shell
/// for its audio and telemetry collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ShotFired,
    AsteroidShot { radius: f32, points: u32 },
    AsteroidSplit { parent_radius: f32, child_radius: f32 },
    PlayerHit { lives_left: u8 },
    WaveSpawned { wave: u32, count: u32 },
    GameOver { score: u64, wave: u32 },
}

impl GameEvent {
    /// Stable snake_case name for telemetry
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::ShotFired => "shot_fired",
            GameEvent::AsteroidShot { .. } => "asteroid_shot",
            GameEvent::AsteroidSplit { .. } => "asteroid_split",
            GameEvent::PlayerHit { .. } => "player_hit",
            GameEvent::WaveSpawned { .. } => "wave_spawned",
            GameEvent::GameOver { .. } => "game_over",
        }
    }
}

/// One silhouette vertex, fixed at construction
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ShapeVertex {
    /// Angle around the body center (radians, before spin)
    pub angle: f32,
    /// Distance from the body center
    pub dist: f32,
}

/// A drifting rock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    /// Current spin angle (radians)
    pub rotation: f32,
    /// Spin rate (radians/s, may be negative)
    pub rotation_speed: f32,
    /// Lumpy outline, generated once and reused every frame
    pub shape: Vec<ShapeVertex>,
}

impl Asteroid {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, rng: &mut Pcg32) -> Self {
        let rotation = rng.random_range(0.0..TAU);
        let rotation_speed =
            rng.random_range(-ASTEROID_MAX_ROTATION_SPEED..=ASTEROID_MAX_ROTATION_SPEED);
        let jag = ASTEROID_JAGGEDNESS;
        let shape = (0..ASTEROID_VERTEX_COUNT)
            .map(|i| ShapeVertex {
                angle: i as f32 / ASTEROID_VERTEX_COUNT as f32 * TAU,
                dist: radius * rng.random_range(1.0 - jag..=1.0 + jag),
            })
            .collect();
        Self {
            body: Body::new(pos, vel, radius),
            rotation,
            rotation_speed,
            shape,
        }
    }

    /// Drift, spin and wrap
    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.rotation += self.rotation_speed * dt;
        self.body.wrap();
    }

    /// Tombstone self and, unless already at the terminal size, produce two
    /// fragments at the current position with the parent velocity deflected
    /// by +-(a random angle) and scaled up
    pub fn split(&mut self, rng: &mut Pcg32) -> Option<[Asteroid; 2]> {
        self.body.alive = false;
        if self.body.radius <= ASTEROID_MIN_RADIUS {
            return None;
        }
        let deflect = rng.random_range(ASTEROID_SPLIT_ANGLE_MIN..=ASTEROID_SPLIT_ANGLE_MAX);
        let child_radius = self.body.radius - ASTEROID_MIN_RADIUS;
        let vel_a = Vec2::from_angle(deflect).rotate(self.body.vel) * ASTEROID_SPLIT_SPEED;
        let vel_b = Vec2::from_angle(-deflect).rotate(self.body.vel) * ASTEROID_SPLIT_SPEED;
        let a = Asteroid::new(self.body.pos, vel_a, child_radius, rng);
        let b = Asteroid::new(self.body.pos, vel_b, child_radius, rng);
        Some([a, b])
    }

    /// World-space outline points for the render collaborator
    pub fn outline(&self) -> Vec<Vec2> {
        self.shape
            .iter()
            .map(|v| self.body.pos + polar_to_cartesian(v.dist, v.angle + self.rotation))
            .collect()
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Facing angle (radians)
    pub rotation: f32,
    /// Seconds until the next shot is allowed (decremented unconditionally)
    pub shot_cooldown: f32,
    /// Grace period remaining; collisions are ignored while > 0
    pub invulnerable_timer: f32,
    /// Blink phase timer while invulnerable
    pub blink_timer: f32,
    /// Render visibility; toggles while invulnerable
    pub visible: bool,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, SHIP_RADIUS),
            rotation: 0.0,
            shot_cooldown: 0.0,
            invulnerable_timer: 0.0,
            blink_timer: 0.0,
            visible: true,
        }
    }

    /// Unit vector along the current facing
    #[inline]
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.rotation)
    }

    /// Per-tick update. `turn` and `thrust` are -1, 0 or +1 from the held-key
    /// set; a shot is returned when `firing` and the cooldown allows it.
    pub fn update(&mut self, turn: f32, thrust: f32, firing: bool, dt: f32) -> Option<Shot> {
        self.shot_cooldown -= dt;

        if self.invulnerable_timer > 0.0 {
            self.invulnerable_timer -= dt;
            self.blink_timer -= dt;
            if self.blink_timer <= 0.0 {
                self.visible = !self.visible;
                self.blink_timer = BLINK_RATE_SECONDS;
            }
        } else {
            self.visible = true;
        }

        self.rotation += SHIP_TURN_SPEED * turn * dt;
        if thrust != 0.0 {
            self.body.vel += self.forward() * SHIP_ACCELERATION * thrust * dt;
            self.body.vel = self.body.vel.clamp_length_max(SHIP_MAX_SPEED);
        }
        let shot = if firing { self.shoot() } else { None };

        self.body.vel *= SHIP_DRAG;
        self.body.integrate(dt);
        self.body.wrap();
        shot
    }

    /// Spawn a shot along the facing direction, gated by the cooldown
    pub fn shoot(&mut self) -> Option<Shot> {
        if self.shot_cooldown > 0.0 {
            return None;
        }
        self.shot_cooldown = SHOT_COOLDOWN_SECONDS;
        Some(Shot::new(
            self.body.pos,
            polar_to_cartesian(SHOT_SPEED, self.rotation),
        ))
    }

    /// Reset to a standstill at `at` with a fresh grace period
    pub fn respawn(&mut self, at: Vec2) {
        self.body.pos = at;
        self.body.vel = Vec2::ZERO;
        self.rotation = 0.0;
        self.invulnerable_timer = INVULNERABILITY_SECONDS;
    }

    /// Gate used by the collision resolver to ignore asteroid hits
    #[inline]
    pub fn is_invulnerable(&self) -> bool {
        self.invulnerable_timer > 0.0
    }

    /// Hull vertices for the render collaborator: tip, rear-left, rear-right
    pub fn triangle(&self) -> [Vec2; 3] {
        let forward = self.forward();
        let side = Vec2::new(-forward.y, forward.x) * (self.body.radius / 1.5);
        let rear = self.body.pos - forward * self.body.radius;
        [
            self.body.pos + forward * self.body.radius,
            rear - side,
            rear + side,
        ]
    }
}

/// A ship projectile; does not wrap and despawns when its TTL runs out
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Shot {
    pub body: Body,
    /// Seconds before despawn
    pub ttl: f32,
}

impl Shot {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            body: Body::new(pos, vel, SHOT_RADIUS),
            ttl: SHOT_LIFETIME_SECONDS,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.ttl -= dt;
        if self.ttl <= 0.0 {
            self.body.alive = false;
            return;
        }
        self.body.integrate(dt);
    }
}

/// A short-lived explosion fleck (visual only, never collides)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub body: Body,
    /// Remaining lifetime in seconds
    pub lifetime: f32,
}

impl Particle {
    pub fn new(pos: Vec2, heading: f32, rng: &mut Pcg32) -> Self {
        let speed = rng.random_range(PARTICLE_SPEED_MIN..=PARTICLE_SPEED_MAX);
        Self {
            body: Body::new(pos, polar_to_cartesian(speed, heading), PARTICLE_RADIUS),
            lifetime: PARTICLE_LIFETIME_SECONDS,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.body.integrate(dt);
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            self.body.alive = false;
        }
    }

    /// Remaining-lifetime fraction in [0, 1] for render alpha
    pub fn fade(&self) -> f32 {
        (self.lifetime / PARTICLE_LIFETIME_SECONDS).clamp(0.0, 1.0)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Deterministic RNG stream; every sim draw goes through it
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    pub score: u64,
    pub lives: u8,
    /// Current wave number (>= 1)
    pub wave: u32,
    /// Inter-wave countdown, armed when the field empties
    pub wave_delay: f32,
    /// Simulation tick counter (Playing only)
    pub time_ticks: u64,
    /// Single ship slot; empty on the menu
    pub ship: Option<Ship>,
    pub asteroids: Vec<Asteroid>,
    pub shots: Vec<Shot>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh state on the menu with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            score: 0,
            lives: STARTING_LIVES,
            wave: 1,
            wave_delay: 0.0,
            time_ticks: 0,
            ship: None,
            asteroids: Vec::new(),
            shots: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Reset session counters and entities for a fresh run; the caller spawns
    /// the first wave
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.wave = 1;
        self.wave_delay = 0.0;
        self.time_ticks = 0;
        self.clear_entities();
        self.ship = Some(Ship::new(ARENA_CENTER));
    }

    /// Drop every entity (returning to the menu)
    pub fn clear_entities(&mut self) {
        self.ship = None;
        self.asteroids.clear();
        self.shots.clear();
        self.particles.clear();
    }

    /// Burst of explosion particles radiating from a point
    pub fn spawn_explosion(&mut self, at: Vec2) {
        for i in 0..PARTICLE_COUNT {
            let heading = i as f32 / PARTICLE_COUNT as f32 * TAU
                + self.rng.random_range(-PARTICLE_ANGLE_JITTER..=PARTICLE_ANGLE_JITTER);
            let particle = Particle::new(at, heading, &mut self.rng);
            self.particles.push(particle);
        }
    }

    /// Remove tombstoned entities; runs after all passes for the tick
    pub fn sweep_dead(&mut self) {
        self.asteroids.retain(|a| a.body.alive);
        self.shots.retain(|s| s.body.alive);
        self.particles.retain(|p| p.body.alive);
    }

    /// Hand this tick's events to the shell
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
