//! Game state and core simulation types
//!
//! Everything needed to re-run a session deterministically lives here: the
//! active world-object sets, the pools they recycle through, the spawn
//! cadence state, and the per-run player/score state.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::background;
use super::pool::{ObjectPool, Poolable};
use super::spawn;
use crate::GameplayConfig;
use crate::consts::*;

/// World-object categories with distinct spawn/recycle behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Platform,
    Coin,
    Fire,
}

/// A recyclable world object: platform, coin, or fire hazard.
///
/// Positions are sprite centers in screen space, y growing downward. Owned
/// exclusively by either the active set for its kind or that kind's pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldObject {
    pub id: u32,
    pub kind: ObjectKind,
    pub pos: Vec2,
    pub width: f32,
    pub active: bool,
    /// Leftward scroll velocity, pixels/s (negative)
    pub velocity_x: f32,
    /// Coins only: remaining ticks of the collect tween before release
    pub fade_ticks: Option<u32>,
}

impl WorldObject {
    pub fn new(id: u32, kind: ObjectKind, pos: Vec2, width: f32, velocity_x: f32) -> Self {
        Self {
            id,
            kind,
            pos,
            width,
            active: true,
            velocity_x,
            fade_ticks: None,
        }
    }

    pub fn left_edge(&self) -> f32 {
        self.pos.x - self.width / 2.0
    }

    pub fn right_edge(&self) -> f32 {
        self.pos.x + self.width / 2.0
    }

    /// Right edge has crossed the left world boundary.
    pub fn is_offscreen_left(&self) -> bool {
        self.pos.x < -self.width / 2.0
    }
}

impl Poolable for WorldObject {
    fn deactivate(&mut self) {
        self.active = false;
        self.fade_ticks = None;
    }
}

/// A parallax background element. Mountains are repositioned in place when
/// they scroll off, never pooled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mountain {
    /// Bottom-center anchor position
    pub pos: Vec2,
    /// Sprite sheet frame, `0..MOUNTAIN_VARIANTS`
    pub variant: u8,
    /// Drawn in front of the far layer when true
    pub near_layer: bool,
}

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Normal play
    Running,
    /// Touched fire: input disabled, falling out of the world
    Dying,
    /// Fell past the bottom boundary
    GameOver,
}

/// Per-run mutable state, reset on restart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunState {
    pub score: u64,
    pub coins: u32,
    /// Ground covered this run, pixels
    pub distance: f32,
    /// Jumps taken since last grounded
    pub player_jumps: u32,
}

/// The player sprite's simulation-visible state.
///
/// Horizontal position is pinned by the engine; only vertical kinematics are
/// integrated here so the termination checks are observable headlessly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub velocity_y: f32,
    /// Grounded contact, re-reported by the engine every frame and consumed
    /// at the end of each tick
    pub touching_down: bool,
}

/// Spawn cadence state for the platform track
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnState {
    /// Gap the rightmost platform must open up before the next spawn
    pub next_platform_distance: f32,
    /// Total platforms emitted this run (first one carries no attachments)
    pub spawned_platforms: u32,
}

/// Renderer-relevant transitions, drained once per frame via
/// [`GameState::take_events`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Start scrolling a platform sprite
    PlatformSpawned { id: u32 },
    /// Start the looping rotate animation
    CoinSpawned { id: u32 },
    /// Start the looping burn animation
    FireSpawned { id: u32 },
    /// Play the fade-and-rise collect tween
    CoinCollected { id: u32, score: u64 },
    /// Play the death pose
    HazardHit { id: u32 },
    GameOver { score: u64 },
    Restarted,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub config: GameplayConfig,
    /// The single random source; every uniform draw goes through it
    pub rng: Pcg32,
    pub phase: RunPhase,
    pub run: RunState,
    pub player: Player,
    pub spawn: SpawnState,
    /// Active sets, one per kind
    pub platforms: Vec<WorldObject>,
    pub coins: Vec<WorldObject>,
    pub fires: Vec<WorldObject>,
    pub mountains: Vec<Mountain>,
    /// Recycle bins; contents persist across restarts
    pub platform_pool: ObjectPool<WorldObject>,
    pub coin_pool: ObjectPool<WorldObject>,
    pub fire_pool: ObjectPool<WorldObject>,
    /// Simulation tick counter
    pub time_ticks: u64,
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new session with the given seed and tuning.
    ///
    /// The world starts with a full-width floor platform at the corridor
    /// ceiling and a filled mountain backdrop.
    pub fn new(seed: u64, config: GameplayConfig) -> Self {
        let player_start = Vec2::new(
            config.player_start_position,
            SCREEN_HEIGHT * PLAYER_START_HEIGHT,
        );
        let mut state = Self {
            seed,
            config,
            rng: Pcg32::seed_from_u64(seed),
            phase: RunPhase::Running,
            run: RunState::default(),
            player: Player {
                pos: player_start,
                velocity_y: 0.0,
                touching_down: false,
            },
            spawn: SpawnState {
                next_platform_distance: 0.0,
                spawned_platforms: 0,
            },
            platforms: Vec::new(),
            coins: Vec::new(),
            fires: Vec::new(),
            mountains: Vec::new(),
            platform_pool: ObjectPool::new(),
            coin_pool: ObjectPool::new(),
            fire_pool: ObjectPool::new(),
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        background::fill(&mut state);
        state.spawn_floor_platform();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The full-width platform every run starts on
    fn spawn_floor_platform(&mut self) {
        let y = self.config.corridor_max(SCREEN_HEIGHT);
        spawn::spawn_platform(self, SCREEN_WIDTH, SCREEN_WIDTH / 2.0, y);
    }

    /// Discard all per-run state and start a fresh run.
    ///
    /// Active platforms/coins/fires are released to their pools (pooled
    /// objects persist across restarts), the score and spawn cadence reset,
    /// the backdrop refills, and the floor platform is re-spawned.
    pub fn restart(&mut self) {
        for obj in self.platforms.drain(..) {
            self.platform_pool.release(obj);
        }
        for obj in self.coins.drain(..) {
            self.coin_pool.release(obj);
        }
        for obj in self.fires.drain(..) {
            self.fire_pool.release(obj);
        }

        self.phase = RunPhase::Running;
        self.run = RunState::default();
        self.spawn = SpawnState {
            next_platform_distance: 0.0,
            spawned_platforms: 0,
        };
        self.player = Player {
            pos: Vec2::new(
                self.config.player_start_position,
                SCREEN_HEIGHT * PLAYER_START_HEIGHT,
            ),
            velocity_y: 0.0,
            touching_down: false,
        };

        background::fill(self);
        self.spawn_floor_platform();
        self.events.push(GameEvent::Restarted);
        log::info!("run restarted (seed {})", self.seed);
    }

    /// Drain the events accumulated since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn pool_mut(&mut self, kind: ObjectKind) -> &mut ObjectPool<WorldObject> {
        match kind {
            ObjectKind::Platform => &mut self.platform_pool,
            ObjectKind::Coin => &mut self.coin_pool,
            ObjectKind::Fire => &mut self.fire_pool,
        }
    }

    pub(crate) fn active_mut(&mut self, kind: ObjectKind) -> &mut Vec<WorldObject> {
        match kind {
            ObjectKind::Platform => &mut self.platforms,
            ObjectKind::Coin => &mut self.coins,
            ObjectKind::Fire => &mut self.fires,
        }
    }
}
