//! Headless demo entry point
//!
//! Boots a run with the autopilot flying and streams sim events through the
//! audio mapping and telemetry logging. The seed comes from the first
//! argument, falling back to the clock.

use std::time::{SystemTime, UNIX_EPOCH};

use vector_rocks::audio::{LogAudio, play_events};
use vector_rocks::consts::NOMINAL_DT;
use vector_rocks::sim::{GamePhase, GameState, TickInput, tick};
use vector_rocks::telemetry;

/// Snapshot once per second of sim time
const SNAPSHOT_EVERY_TICKS: u64 = 60;
/// Cap the demo at one minute of sim time
const MAX_DEMO_TICKS: u64 = 3600;

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(clock_seed);
    log::info!("vector-rocks demo starting, seed {}", seed);

    let mut state = GameState::new(seed);
    let mut sink = LogAudio;

    // Confirm off the menu, then let the autopilot fly
    let mut input = TickInput {
        confirm: true,
        idle_mode: true,
        ..Default::default()
    };

    for n in 0..MAX_DEMO_TICKS {
        tick(&mut state, &input, NOMINAL_DT);
        // Clear one-shot inputs after processing
        input.confirm = false;

        let events = state.drain_events();
        telemetry::log_events(&events);
        play_events(&mut sink, &events);

        if n % SNAPSHOT_EVERY_TICKS == 0 {
            telemetry::log_snapshot(&state);
        }
        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "demo finished: score {}, wave {}, {} ticks",
        state.score,
        state.wave,
        state.time_ticks
    );
}
