//! Display-less host used by the native binary
//!
//! Drives the frame driver with a synthetic clock and a scripted input pattern
//! so the whole loop can be exercised without a browser.

use crate::assets::Sprite;
use crate::frame::{DrawCommand, FrameDriver, Surface};
use crate::input::{Control, InputRouter};
use crate::sim::{GameState, SpriteMetrics};
use crate::tuning::Tuning;

/// Surface that only counts what it was asked to draw
#[derive(Debug, Default, Clone)]
pub struct CountingSurface {
    pub frames: u64,
    pub draws: u64,
    pub hearts: u64,
}

impl Surface for CountingSurface {
    fn begin_frame(&mut self) {
        self.frames += 1;
    }

    fn draw(&mut self, cmd: &DrawCommand) {
        self.draws += 1;
        if cmd.sprite == Sprite::Reward {
            self.hearts += 1;
        }
    }
}

/// Run `ticks` frames at ~60 Hz, sweeping the dog back and forth
pub fn run_headless(seed: u64, ticks: u64, tuning: Tuning) -> (GameState, CountingSurface) {
    let mut driver = FrameDriver::new(GameState::new(seed, SpriteMetrics::default(), tuning));
    let mut surface = CountingSurface::default();
    let frame_ms = 1000.0 / 60.0;

    for t in 0..ticks {
        // Hold each direction for two seconds, then rest for one
        match t % 300 {
            0 => InputRouter::press_control(&mut driver.state, Control::Left),
            120 => InputRouter::press_control(&mut driver.state, Control::Right),
            240 => InputRouter::release_control(&mut driver.state, Control::Right),
            _ => {}
        }
        let summary = driver.frame(t as f64 * frame_ms, &mut surface);
        if summary.caught > 0 {
            log::debug!("tick {}: caught {}", t, summary.caught);
        }
    }

    (driver.state, surface)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headless_session_runs() {
        let (state, surface) = run_headless(2024, 600, Tuning::default());
        assert_eq!(state.seed, 2024);
        assert_eq!(state.time_ticks, 600);
        assert_eq!(surface.frames, 600);
        // Background, player and both buttons every frame
        assert!(surface.draws >= 600 * 4);
        assert!(state.missed > 0);
    }
}
