//! Game state and core simulation types
//!
//! A single `GameState` is built once at startup and handed to `tick` and to
//! the frame driver by reference. Nothing here touches the platform.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::spawn::SpawnScheduler;
use crate::Size;
use crate::consts::*;
use crate::tuning::Tuning;

/// Which way the dog is looking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    /// The sprite art's native orientation
    #[default]
    Left,
    Right,
}

/// Intrinsic sizes of the sprites the simulation hit-tests against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteMetrics {
    /// Size of each walk-cycle frame (they need not match)
    pub player: [Size; PLAYER_FRAMES],
    /// Falling object size
    pub object: Size,
    /// Reward indicator (heart) intrinsic size
    pub reward: Size,
}

impl SpriteMetrics {
    /// Size of a walk-cycle frame
    #[inline]
    pub fn player_frame(&self, frame: usize) -> Size {
        self.player[frame % PLAYER_FRAMES]
    }
}

impl Default for SpriteMetrics {
    fn default() -> Self {
        Self {
            player: [Size::new(64.0, 64.0); PLAYER_FRAMES],
            object: Size::new(32.0, 32.0),
            reward: Size::new(200.0, 200.0),
        }
    }
}

/// The dog
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Left edge (logical), always within `[0, WIDTH - sprite width]`
    pub x: f32,
    /// Top edge, fixed for the whole run
    pub y: f32,
    pub facing: Facing,
    /// Index into the walk cycle, 0 while idle
    pub frame: usize,
    /// Pixels per tick
    pub speed: f32,
}

impl Player {
    /// Dog centered horizontally on the playfield, facing left
    pub fn centered(sprite: Size, y: f32, speed: f32) -> Self {
        Self {
            x: WIDTH / 2.0 - sprite.width / 2.0,
            y,
            facing: Facing::Left,
            frame: 0,
            speed,
        }
    }

    /// Clamp into the playfield for the given sprite width
    pub fn clamp_to_bounds(&mut self, sprite_width: f32) {
        let max_x = (WIDTH - sprite_width).max(0.0);
        self.x = self.x.clamp(0.0, max_x);
    }
}

/// A piece of meat falling from the top edge
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingObject {
    /// Top-left corner; `x` never changes after spawn
    pub pos: Vec2,
}

impl FallingObject {
    pub fn at_top(x: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
        }
    }
}

/// Countdown for the heart shown after a catch (0 = hidden)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RewardTimer {
    remaining: u32,
}

impl RewardTimer {
    /// Restart the countdown
    pub fn start(&mut self, ticks: u32) {
        self.remaining = ticks;
    }

    /// Count down one tick, saturating at zero
    pub fn decrement(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    pub fn is_active(&self) -> bool {
        self.remaining > 0
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }
}

/// "Player wants to move" flags, written by input and read once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementIntent {
    pub move_left: bool,
    pub move_right: bool,
}

impl MovementIntent {
    /// Hold one direction and drop the other
    pub fn press(&mut self, dir: Facing) {
        match dir {
            Facing::Left => {
                self.move_left = true;
                self.move_right = false;
            }
            Facing::Right => {
                self.move_right = true;
                self.move_left = false;
            }
        }
    }

    /// Drop a single direction
    pub fn release(&mut self, dir: Facing) {
        match dir {
            Facing::Left => self.move_left = false,
            Facing::Right => self.move_right = false,
        }
    }

    /// Direction that actually moves the player this tick (left wins ties)
    pub fn active(&self) -> Option<Facing> {
        if self.move_left {
            Some(Facing::Left)
        } else if self.move_right {
            Some(Facing::Right)
        } else {
            None
        }
    }

    pub fn is_moving(&self) -> bool {
        self.move_left || self.move_right
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub tuning: Tuning,
    pub sprites: SpriteMetrics,
    pub player: Player,
    /// Live falling objects in insertion order
    pub objects: Vec<FallingObject>,
    pub reward: RewardTimer,
    pub intent: MovementIntent,
    pub spawner: SpawnScheduler,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Objects caught this run
    pub caught: u64,
    /// Objects that fell past the bottom edge
    pub missed: u64,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, sprites: SpriteMetrics, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::centered(sprites.player[0], tuning.player_y, tuning.player_speed),
            objects: Vec::new(),
            reward: RewardTimer::default(),
            intent: MovementIntent::default(),
            spawner: SpawnScheduler::new(tuning.spawn_interval_ms, tuning.min_live_objects),
            time_ticks: 0,
            caught: 0,
            missed: 0,
            sprites,
            tuning,
        }
    }
}
