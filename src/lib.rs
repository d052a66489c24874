//! Niku Catch - a small browser arcade game
//!
//! A dog walks along the bottom of a fixed 800x600 playfield and catches meat
//! falling from the sky. Catching one pops a heart above the dog.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, collisions)
//! - `viewport`: Logical <-> physical coordinate mapping
//! - `input`: On-screen control hit-testing
//! - `frame`: Per-frame orchestration and draw order
//! - `assets`: Image manifest and async batch loading
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser host (canvas, events, animation frames)

pub mod assets;
pub mod frame;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;
pub mod viewport;

pub use assets::{AssetError, AssetSet};
pub use frame::{DrawCommand, FrameDriver, FrameScheduler, Surface};
pub use input::{Control, InputRouter};
pub use sim::{GameState, SpriteMetrics};
pub use tuning::Tuning;
pub use viewport::Viewport;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Logical playfield dimensions
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_Y: f32 = 400.0;
    pub const PLAYER_SPEED: f32 = 2.0;
    /// Number of frames in the walk cycle (frame 0 is the idle pose)
    pub const PLAYER_FRAMES: usize = 2;

    /// Falling object speed in pixels per tick
    pub const FALL_SPEED: f32 = 5.0;
    /// Timer-driven spawn interval (ms)
    pub const SPAWN_INTERVAL_MS: f64 = 2000.0;
    /// Floor-refill rule keeps at least this many objects falling
    pub const MIN_LIVE_OBJECTS: usize = 3;

    /// Ticks the heart stays visible after a catch
    pub const REWARD_TICKS: u32 = 3;
    /// Heart is drawn at 1/10 of its intrinsic size
    pub const REWARD_SCALE: f32 = 0.1;
    /// Horizontal nudge of the heart past the dog's right edge
    pub const REWARD_OFFSET_X: f32 = 10.0;

    /// On-screen control buttons
    pub const BUTTON_WIDTH: f32 = 50.0;
    pub const BUTTON_HEIGHT: f32 = 50.0;
    pub const LEFT_BUTTON_X: f32 = 10.0;
    pub const LEFT_BUTTON_Y: f32 = HEIGHT - 150.0;
    pub const RIGHT_BUTTON_X: f32 = WIDTH - 100.0;
    pub const RIGHT_BUTTON_Y: f32 = HEIGHT - 150.0;

    /// Root that image paths are resolved against
    pub const IMAGE_PATH: &str = ".";
}

/// Logical size of a sprite or region
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in logical coordinates (top-left anchored)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Closed containment test (edges count as inside)
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }
}
