//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only, one source per session
//! - No rendering or platform dependencies
//!
//! The embedding engine owns sprites, animations, input devices, and overlap
//! detection; it reports contacts through the handlers on [`GameState`] and
//! drains [`GameState::take_events`] to drive presentation.

pub mod background;
pub mod geometry;
pub mod player;
pub mod pool;
pub mod registry;
pub mod spawn;
pub mod state;
pub mod tick;

pub use geometry::{PlatformProposal, clamp_to_corridor, propose_platform};
pub use pool::{ObjectPool, Poolable};
pub use state::{
    GameEvent, GameState, Mountain, ObjectKind, Player, RunPhase, RunState, SpawnState,
    WorldObject,
};
pub use tick::{TickInput, tick};
