//! On-screen control hit-testing
//!
//! Pointer and touch positions arrive in physical pixels. They are mapped into
//! the playfield through the current [`Viewport`] and tested against the two
//! arrow buttons drawn near the bottom corners.

use crate::Rect;
use crate::consts::*;
use crate::sim::{Facing, GameState};
use crate::viewport::Viewport;

/// One of the two arrow buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Left,
    Right,
}

impl Control {
    /// Logical hit region (also where the button sprite is drawn)
    pub const fn rect(self) -> Rect {
        match self {
            Control::Left => Rect::new(LEFT_BUTTON_X, LEFT_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
            Control::Right => Rect::new(RIGHT_BUTTON_X, RIGHT_BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
        }
    }

    pub fn direction(self) -> Facing {
        match self {
            Control::Left => Facing::Left,
            Control::Right => Facing::Right,
        }
    }
}

/// Routes press/release events to movement intent
#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    viewport: Viewport,
}

impl InputRouter {
    pub fn new(viewport: Viewport) -> Self {
        Self { viewport }
    }

    /// Called by the resize handler
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Which control (if any) lies under a physical point
    pub fn hit_test(&self, physical_x: f32, physical_y: f32) -> Option<Control> {
        let point = self.viewport.to_logical(physical_x, physical_y);
        [Control::Left, Control::Right]
            .into_iter()
            .find(|c| c.rect().contains(point))
    }

    /// Pointer down / touch start at a physical position
    pub fn press(&self, state: &mut GameState, physical_x: f32, physical_y: f32) -> Option<Control> {
        let control = self.hit_test(physical_x, physical_y)?;
        Self::press_control(state, control);
        Some(control)
    }

    /// Hold a control directly (keyboard)
    pub fn press_control(state: &mut GameState, control: Control) {
        let dir = control.direction();
        state.intent.press(dir);
        state.player.facing = dir;
        log::debug!("Pressed {:?}", control);
    }

    /// Pointer up / touch end: stops whichever direction is being held
    pub fn release(&self, state: &mut GameState) {
        if let Some(dir) = state.intent.active() {
            state.intent.release(dir);
            log::debug!("Released {:?}", dir);
        }
    }

    /// Let go of one control only (keyboard key-up)
    pub fn release_control(state: &mut GameState, control: Control) {
        state.intent.release(control.direction());
    }
}
