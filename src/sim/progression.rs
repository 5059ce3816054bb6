//! Difficulty progression
//!
//! Tracks score, level and the two difficulty knobs (chaser speed, timed
//! spawn interval). Every adjustment is a deterministic function of level.

use serde::{Deserialize, Serialize};

use super::config::{CollectibleRespawn, VariantConfig};

/// Score, level and difficulty scaling for one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progression {
    /// Signed: the steal-scoring variant may drive it below zero
    pub score: i64,
    /// 1-based, capped at the configured maximum
    pub level: u32,
    /// Qualifying hits since the last level-up
    pub hits_since_level: u32,
    /// Hits required for the next level-up
    pub next_threshold: u32,
    /// Current chaser speed, px/sec
    pub chaser_speed: f32,
    /// Current timed spawn interval, ms (unused for on-consume respawn)
    pub spawn_interval_ms: f32,
}

impl Progression {
    /// Base values for level 1
    pub fn initial(config: &VariantConfig) -> Self {
        Self {
            score: 0,
            level: 1,
            hits_since_level: 0,
            next_threshold: config.level_curve.initial_threshold(),
            chaser_speed: config.chaser_base_speed,
            spawn_interval_ms: config.base_spawn_interval_ms(),
        }
    }

    /// Record one qualifying hit (a player pickup). Returns true when the
    /// hit triggered a level-up.
    ///
    /// At `max_level` hits keep accumulating but no further level-ups occur.
    pub fn record_hit(&mut self, config: &VariantConfig) -> bool {
        self.hits_since_level += 1;
        if self.hits_since_level < self.next_threshold || self.level >= config.max_level {
            return false;
        }

        self.level += 1;
        self.hits_since_level = 0;
        self.chaser_speed += config.chaser_speed_per_level;
        if let CollectibleRespawn::Timed {
            decrement_ms,
            floor_ms,
            ..
        } = config.respawn
        {
            self.spawn_interval_ms = (self.spawn_interval_ms - decrement_ms).max(floor_ms);
        }
        self.next_threshold = config.level_curve.next_threshold(self.next_threshold);
        true
    }
}
