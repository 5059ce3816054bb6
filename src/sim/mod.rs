//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod geom;
pub mod motion;
pub mod progression;
pub mod spawn;
pub mod state;
pub mod tick;

pub use config::{
    ChaserSpawnPolicy, CollectibleMotion, CollectibleRespawn, ControlMode, LevelCurve,
    ScoringPolicy, VariantConfig,
};
pub use geom::{circle_circle_overlap, circle_rect_overlap, distance, hitbox_overlap};
pub use progression::Progression;
pub use state::{
    Bounds, Chaser, Collectible, GameEvent, GamePhase, GameState, Hitbox, Player, Snapshot,
};
pub use tick::{TickInput, tick};
