//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `tick` per displayed frame
//! - Seeded RNG only
//! - Logical playfield coordinates only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::catches;
pub use spawn::{SpawnScheduler, spawn_x};
pub use state::{
    Facing, FallingObject, GameState, MovementIntent, Player, RewardTimer, SpriteMetrics,
};
pub use tick::{TickSummary, tick};
