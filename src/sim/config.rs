//! Variant configuration
//!
//! The repo's four game variants are near-identical chase/collect games that
//! differ only along a few axes: how the player is driven, where chasers
//! spawn, whether collectibles roam, how scoring works and how difficulty
//! ramps. Instead of duplicating the loop per variant, one engine is
//! parametrized by a [`VariantConfig`] selected at match setup.
//!
//! Configs are plain serde data so balance can be tuned from JSON.

use serde::{Deserialize, Serialize};

use super::state::{Bounds, Hitbox};
use crate::consts::*;

/// How the player avatar is driven each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ControlMode {
    /// Discrete directional input (held arrow/WASD keys)
    #[default]
    Keyboard,
    /// Steer toward a pointer/touch target point
    PointerSeek,
}

/// Where freshly created chasers are placed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ChaserSpawnPolicy {
    /// Uniformly random inside the canvas, resampled until at least
    /// `min_distance` away from the player (bounded retries)
    RandomAway { min_distance: f32 },
    /// Just outside a uniformly chosen canvas edge; such chasers are not
    /// confined to the canvas and may approach from outside
    Edge,
}

/// How collectibles move between pickups
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollectibleMotion {
    /// Sits where it spawned
    Static,
    /// Roams at a fixed speed, reflecting elastically off the walls
    Bouncing { speed: f32 },
}

/// What touching a collectible is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringPolicy {
    /// Player pickup awards `reward` points
    PlayerCollects { reward: i64 },
    /// Player pickup awards `reward`; a chaser reaching the collectible
    /// first steals it and deducts `penalty`. Score may go negative.
    ChaserSteals { reward: i64, penalty: i64 },
}

/// When consumed collectibles are replaced
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CollectibleRespawn {
    /// A fresh collectible appears the moment one is consumed
    OnConsume,
    /// New collectibles appear on a timer, up to `max_active` at once.
    /// The interval tightens with each level but never drops below
    /// `floor_ms`.
    Timed {
        base_interval_ms: f32,
        decrement_ms: f32,
        floor_ms: f32,
        max_active: usize,
    },
}

/// How many qualifying hits each level-up costs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LevelCurve {
    /// Same hit count every level
    Fixed { hits_per_level: u32 },
    /// Each level costs `increment` more hits than the previous one
    Growing { base: u32, increment: u32 },
}

impl LevelCurve {
    /// Threshold for the first level-up
    pub fn initial_threshold(&self) -> u32 {
        match *self {
            LevelCurve::Fixed { hits_per_level } => hits_per_level,
            LevelCurve::Growing { base, .. } => base,
        }
    }

    /// Threshold that follows `current` after a level-up
    pub fn next_threshold(&self, current: u32) -> u32 {
        match *self {
            LevelCurve::Fixed { hits_per_level } => hits_per_level,
            LevelCurve::Growing { increment, .. } => current + increment,
        }
    }
}

/// Full parametrization of one game variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantConfig {
    /// Display surface dimensions; spawn and clamp logic read these
    pub bounds: Bounds,
    pub control: ControlMode,
    pub chaser_spawn: ChaserSpawnPolicy,
    pub collectible_motion: CollectibleMotion,
    pub scoring: ScoringPolicy,
    pub respawn: CollectibleRespawn,
    pub level_curve: LevelCurve,

    pub player_hitbox: Hitbox,
    /// Player speed in px/sec
    pub player_speed: f32,

    pub chaser_hitbox: Hitbox,
    /// Chaser speed at level 1, px/sec
    pub chaser_base_speed: f32,
    /// Added to chaser speed on every level-up
    pub chaser_speed_per_level: f32,
    pub chaser_count: usize,

    pub collectible_hitbox: Hitbox,
    pub collectible_count: usize,

    /// No further level-ups past this level
    pub max_level: u32,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self::classic()
    }
}

impl VariantConfig {
    /// The keyboard chase game: yellow circle player, one red square
    /// chaser, one green square collectible. Speeds are per-frame pixel
    /// values converted to px/sec at 60 Hz.
    pub fn classic() -> Self {
        Self {
            bounds: Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            control: ControlMode::Keyboard,
            chaser_spawn: ChaserSpawnPolicy::RandomAway { min_distance: 150.0 },
            collectible_motion: CollectibleMotion::Static,
            scoring: ScoringPolicy::PlayerCollects { reward: 10 },
            respawn: CollectibleRespawn::OnConsume,
            // 100 points per level at 10 points a pickup
            level_curve: LevelCurve::Fixed { hits_per_level: 10 },
            player_hitbox: Hitbox::Circle { radius: 15.0 },
            player_speed: 300.0,
            chaser_hitbox: Hitbox::Square { half_extent: 12.5 },
            chaser_base_speed: 120.0,
            chaser_speed_per_level: 12.0,
            chaser_count: 1,
            collectible_hitbox: Hitbox::Square { half_extent: 10.0 },
            collectible_count: 1,
            max_level: 500,
        }
    }

    /// Pointer/touch variant: the player glides toward the pointer, chasers
    /// pour in from the canvas edges and collectibles appear on a timer
    /// that tightens per level.
    pub fn pointer_rush() -> Self {
        Self {
            bounds: Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            control: ControlMode::PointerSeek,
            chaser_spawn: ChaserSpawnPolicy::Edge,
            collectible_motion: CollectibleMotion::Static,
            scoring: ScoringPolicy::PlayerCollects { reward: 10 },
            respawn: CollectibleRespawn::Timed {
                base_interval_ms: 800.0,
                decrement_ms: 50.0,
                floor_ms: SPAWN_INTERVAL_FLOOR_MS,
                max_active: 5,
            },
            level_curve: LevelCurve::Growing { base: 8, increment: 2 },
            player_hitbox: Hitbox::Circle { radius: 14.0 },
            player_speed: 280.0,
            chaser_hitbox: Hitbox::Circle { radius: 12.0 },
            chaser_base_speed: 100.0,
            chaser_speed_per_level: 15.0,
            chaser_count: 2,
            collectible_hitbox: Hitbox::Circle { radius: 8.0 },
            collectible_count: 1,
            max_level: 30,
        }
    }

    /// Several free-roaming collectibles bouncing around the canvas
    pub fn bounce_garden() -> Self {
        Self {
            bounds: Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            control: ControlMode::Keyboard,
            chaser_spawn: ChaserSpawnPolicy::RandomAway { min_distance: 120.0 },
            collectible_motion: CollectibleMotion::Bouncing { speed: 90.0 },
            scoring: ScoringPolicy::PlayerCollects { reward: 10 },
            respawn: CollectibleRespawn::OnConsume,
            level_curve: LevelCurve::Fixed { hits_per_level: 12 },
            player_hitbox: Hitbox::Circle { radius: 15.0 },
            player_speed: 300.0,
            chaser_hitbox: Hitbox::Square { half_extent: 12.5 },
            chaser_base_speed: 110.0,
            chaser_speed_per_level: 10.0,
            chaser_count: 1,
            collectible_hitbox: Hitbox::Circle { radius: 8.0 },
            collectible_count: 3,
            max_level: 50,
        }
    }

    /// Penalty variant: the collectible flees (bounces), and a chaser that
    /// reaches it first steals it for a score deduction
    pub fn cat_and_mouse() -> Self {
        Self {
            bounds: Bounds::new(CANVAS_WIDTH, CANVAS_HEIGHT),
            control: ControlMode::Keyboard,
            chaser_spawn: ChaserSpawnPolicy::RandomAway { min_distance: 150.0 },
            collectible_motion: CollectibleMotion::Bouncing { speed: 120.0 },
            scoring: ScoringPolicy::ChaserSteals { reward: 10, penalty: 5 },
            respawn: CollectibleRespawn::OnConsume,
            level_curve: LevelCurve::Fixed { hits_per_level: 10 },
            player_hitbox: Hitbox::Circle { radius: 15.0 },
            player_speed: 300.0,
            chaser_hitbox: Hitbox::Square { half_extent: 12.5 },
            chaser_base_speed: 120.0,
            chaser_speed_per_level: 12.0,
            chaser_count: 1,
            collectible_hitbox: Hitbox::Circle { radius: 8.0 },
            collectible_count: 1,
            max_level: 50,
        }
    }

    /// Load a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize to JSON text
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Spawn interval at level 1 (0 for on-consume respawn, which is untimed)
    pub fn base_spawn_interval_ms(&self) -> f32 {
        match self.respawn {
            CollectibleRespawn::OnConsume => 0.0,
            CollectibleRespawn::Timed {
                base_interval_ms, ..
            } => base_interval_ms,
        }
    }
}
