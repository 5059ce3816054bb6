//! Fixed timestep simulation tick
//!
//! One entry point, [`tick`], callable from any scheduler: a display-refresh
//! callback in the browser, a timer, or a test harness. The phase machine
//! gates what runs: Start and GameOver are frozen except for the start
//! signal, which performs a full reset.

use glam::Vec2;

use super::collision;
use super::config::{CollectibleMotion, CollectibleRespawn};
use super::motion;
use super::progression::Progression;
use super::spawn;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
///
/// The driver records input events asynchronously into its latest-input
/// record and hands it over once per tick; entity state is never touched
/// from event handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directional keys
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer/touch target for seek-controlled variants. Tap-to-move
    /// drivers record a discrete tap here the same way as a drag.
    pub pointer_target: Option<Vec2>,
    /// Start/restart trigger edge
    pub start: bool,
}

/// Advance the game state by one fixed timestep
///
/// Inputs that do not apply to the current phase are no-ops (a pointer drag
/// during Start moves nothing).
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    match state.phase {
        GamePhase::Start | GamePhase::GameOver => {
            if input.start {
                reset_match(state);
                state.phase = GamePhase::Playing;
                state.push_event(GameEvent::Started);
                log::debug!("match started (seed {})", state.seed);
            }
            return;
        }
        GamePhase::Playing => {}
    }

    state.time_ticks += 1;

    // Motion: player by input, chasers by pursuit, roaming collectibles
    let bounds = state.config.bounds;
    let control = state.config.control;
    motion::step_player(&mut state.player, input, control, bounds, dt);

    let player_pos = state.player.pos;
    for chaser in &mut state.chasers {
        motion::step_chaser(chaser, player_pos, bounds, dt);
    }
    if let CollectibleMotion::Bouncing { speed } = state.config.collectible_motion {
        for collectible in &mut state.collectibles {
            motion::step_collectible(collectible, speed, bounds, dt);
        }
    }

    // Collisions: pickups, then the match-ending chaser check
    collision::resolve(state);
    if state.phase == GamePhase::GameOver {
        return;
    }

    // Timed spawning, interval per current progression
    if let CollectibleRespawn::Timed { max_active, .. } = state.config.respawn {
        state.spawn_timer_ms += dt * 1000.0;
        let interval = state.progression.spawn_interval_ms;
        while state.spawn_timer_ms >= interval && state.collectibles.len() < max_active {
            state.spawn_timer_ms -= interval;
            spawn::spawn_collectible(state);
        }
        if state.collectibles.len() >= max_active {
            // Full field: don't bank time toward a burst of spawns
            state.spawn_timer_ms = state.spawn_timer_ms.min(interval);
        }
    }
}

/// Full state reset on (re)start: score 0, level 1, base speeds and spawn
/// interval, entity set repopulated
fn reset_match(state: &mut GameState) {
    state.progression = Progression::initial(&state.config);
    state.time_ticks = 0;
    state.spawn_timer_ms = 0.0;
    spawn::populate(state);
}
