//! Pixel Pursuit headless demo driver
//!
//! Runs the classic variant with a small avoid/collect AI standing in for a
//! human, at the fixed simulation timestep. Useful for balance checks and as
//! a reference for wiring a real render/audio/input frontend.
//!
//! Usage: `pixel-pursuit [seed]`

use glam::Vec2;

use pixel_pursuit::consts::SIM_DT;
use pixel_pursuit::sim::{GameEvent, GamePhase, GameState, TickInput, VariantConfig, tick};

/// Maximum demo length: ten minutes of simulated play
const MAX_TICKS: u32 = 10 * 60 * 60;

/// Flee the nearest chaser, drift toward the nearest collectible when safe
fn demo_input(state: &GameState) -> TickInput {
    let player = state.player.pos;

    let mut steer = Vec2::ZERO;
    if let Some(nearest) = state
        .chasers
        .iter()
        .min_by(|a, b| {
            let da = (a.pos - player).length_squared();
            let db = (b.pos - player).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
    {
        let away = player - nearest.pos;
        let dist = away.length();
        if dist < 140.0 && dist > 0.0 {
            // Danger close: run, biased toward the canvas center so the AI
            // doesn't pin itself in a corner
            let to_center = (state.config.bounds.center() - player) * 0.004;
            steer = away / dist + to_center;
        }
    }

    if steer == Vec2::ZERO {
        if let Some(target) = state.collectibles.iter().min_by(|a, b| {
            let da = (a.pos - player).length_squared();
            let db = (b.pos - player).length_squared();
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        }) {
            steer = target.pos - player;
        }
    }

    TickInput {
        up: steer.y < -1.0,
        down: steer.y > 1.0,
        left: steer.x < -1.0,
        right: steer.x > 1.0,
        ..Default::default()
    }
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(2024);

    let mut state = GameState::new(VariantConfig::classic(), seed);
    let start = TickInput {
        start: true,
        ..Default::default()
    };
    tick(&mut state, &start, SIM_DT);

    for _ in 0..MAX_TICKS {
        let input = demo_input(&state);
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            match event {
                GameEvent::Collected => log::info!("collected (score {})", state.snapshot().score),
                GameEvent::Stolen => log::info!("stolen (score {})", state.snapshot().score),
                GameEvent::LeveledUp => log::info!("level up -> {}", state.snapshot().level),
                GameEvent::Started => log::info!("started (seed {seed})"),
                GameEvent::GameOver => log::info!("game over"),
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    let snapshot = state.snapshot();
    println!(
        "seed {seed}: score {} | level {} | survived {} ticks",
        snapshot.score, snapshot.level, state.time_ticks
    );
}
