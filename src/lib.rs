//! Pixel Pursuit - a chase/collect arcade game core
//!
//! One parametrized simulation engine behind the repo's four game variants
//! (keyboard chase, pointer rush, bounce garden, cat-and-mouse). The crate
//! contains only the game-state core:
//! - `sim`: deterministic simulation (motion, collisions, progression, phases)
//!
//! Rendering, audio and input capture are external collaborators: a driver
//! feeds a [`sim::TickInput`] into [`sim::tick`] once per display refresh,
//! draws the resulting [`sim::Snapshot`] and plays cues for the drained
//! [`sim::GameEvent`]s.

pub mod sim;

pub use sim::{GameEvent, GamePhase, GameState, Snapshot, TickInput, VariantConfig, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one display refresh)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Default canvas dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Distance below which a pointer-seeking player stops moving (anti-jitter)
    pub const SEEK_EPSILON: f32 = 1.0;

    /// Retry cap for spawn-away-from-player rejection sampling
    pub const MAX_SPAWN_ATTEMPTS: u32 = 16;

    /// Hard floor for the timed spawn interval (milliseconds)
    pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 200.0;
}
