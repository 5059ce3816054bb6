//! Game state and core simulation types
//!
//! The session state is a single value owned by the game-loop driver;
//! collaborators receive read-only [`Snapshot`]s and drained [`GameEvent`]s.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::VariantConfig;
use super::progression::Progression;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Idle, awaiting the start signal
    Start,
    /// Active gameplay
    Playing,
    /// Match ended, simulation frozen until restart
    GameOver,
}

/// Discrete cue notifications for the audio collaborator
///
/// Accumulated during a tick and drained by the driver; fire-and-forget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Started,
    Collected,
    /// A chaser reached a collectible first (steal-scoring variant)
    Stolen,
    LeveledUp,
    GameOver,
}

/// Collision shape of an entity, centered on its position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Hitbox {
    Circle { radius: f32 },
    Square { half_extent: f32 },
}

impl Hitbox {
    /// Half-size along either axis (radius or half extent); used for
    /// spawn insets and bound clamps
    pub fn half_size(&self) -> f32 {
        match *self {
            Hitbox::Circle { radius } => radius,
            Hitbox::Square { half_extent } => half_extent,
        }
    }
}

/// Display surface dimensions
///
/// Treated as configuration: may change between ticks (window resize), never
/// mid-tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Valid center range along one axis for an entity of the given
    /// half-size. Degenerate ranges (entity as large as the canvas)
    /// collapse to the midpoint rather than inverting.
    pub fn axis_range(dim: f32, half: f32) -> (f32, f32) {
        let lo = half;
        let hi = dim - half;
        if hi < lo {
            let mid = dim / 2.0;
            (mid, mid)
        } else {
            (lo, hi)
        }
    }

    /// Clamp a center position so the entity stays fully on the canvas
    pub fn clamp(&self, pos: Vec2, half: f32) -> Vec2 {
        let (min_x, max_x) = Self::axis_range(self.width, half);
        let (min_y, max_y) = Self::axis_range(self.height, half);
        Vec2::new(pos.x.clamp(min_x, max_x), pos.y.clamp(min_y, max_y))
    }

    /// Center of the canvas
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// The player avatar. Created once per match and persists until reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub hitbox: Hitbox,
    /// px/sec, constant for the match
    pub speed: f32,
}

/// A pursuing entity; contact with the player ends the match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chaser {
    pub id: u32,
    pub pos: Vec2,
    pub hitbox: Hitbox,
    /// px/sec; raised by the progression controller on level-up
    pub speed: f32,
    /// Edge-spawned chasers approach from outside the canvas and are not
    /// clamped to it
    pub confined: bool,
}

/// A score pickup. Consumed collectibles are destroyed and recreated, never
/// mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    pub pos: Vec2,
    pub hitbox: Hitbox,
    /// Unit travel direction for bouncing variants, zero when static
    pub dir: Vec2,
}

/// Read-only per-tick view for the render collaborator
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub player: &'a Player,
    pub chasers: &'a [Chaser],
    pub collectibles: &'a [Collectible],
    pub score: i64,
    pub level: u32,
    pub phase: GamePhase,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Variant parametrization for this match
    pub config: VariantConfig,
    /// Match seed for reproducibility
    pub seed: u64,
    /// Match RNG; serialized so respawn randomness survives save/restore
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter (only advances while playing)
    pub time_ticks: u64,
    pub player: Player,
    /// Active chasers (stable order by id)
    pub chasers: Vec<Chaser>,
    /// Active collectibles (stable order by id)
    pub collectibles: Vec<Collectible>,
    /// Score, level and difficulty scaling
    pub progression: Progression,
    /// Milliseconds accumulated toward the next timed spawn
    pub spawn_timer_ms: f32,
    /// Cues emitted this tick, drained by the driver
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a match in the Start phase with an initial entity layout
    /// (so the start screen has something to draw). The start signal
    /// performs the full reset.
    pub fn new(config: VariantConfig, seed: u64) -> Self {
        let progression = Progression::initial(&config);
        let player = Player {
            pos: config.bounds.center(),
            hitbox: config.player_hitbox,
            speed: config.player_speed,
        };
        let mut state = Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            time_ticks: 0,
            player,
            chasers: Vec::new(),
            collectibles: Vec::new(),
            progression,
            spawn_timer_ms: 0.0,
            events: Vec::new(),
            next_id: 1,
        };
        super::spawn::populate(&mut state);
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Adopt new display bounds (e.g. after a window resize). Takes effect
    /// from the next tick; never called mid-tick by contract.
    pub fn resize(&mut self, bounds: Bounds) {
        self.config.bounds = bounds;
    }

    /// Read-only view for the render collaborator
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            player: &self.player,
            chasers: &self.chasers,
            collectibles: &self.collectibles,
            score: self.progression.score,
            level: self.progression.level,
            phase: self.phase,
        }
    }

    /// Take the cues accumulated since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
