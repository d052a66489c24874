//! Per-frame orchestration
//!
//! Each frame runs exactly one simulation tick and then emits the scene in a
//! fixed back-to-front order:
//!
//! 1. background
//! 2. falling objects
//! 3. heart (while the reward timer runs)
//! 4. the dog
//! 5. left and right buttons
//!
//! The scene is produced as plain [`DrawCommand`] data so the order can be
//! checked without a display. The host supplies a [`Surface`] to draw on and a
//! [`FrameScheduler`] to re-arm the loop.

use crate::Rect;
use crate::assets::Sprite;
use crate::consts::*;
use crate::input::Control;
use crate::sim::{Facing, GameState, TickSummary, tick};

/// One image blit in logical coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCommand {
    pub sprite: Sprite,
    pub rect: Rect,
    /// Flip horizontally about the rect's own vertical center line
    pub mirrored: bool,
}

impl DrawCommand {
    fn plain(sprite: Sprite, rect: Rect) -> Self {
        Self {
            sprite,
            rect,
            mirrored: false,
        }
    }
}

/// Rendering backend (canvas 2D context, recorder in tests)
pub trait Surface {
    /// Called before the first command of a frame
    fn begin_frame(&mut self) {}
    fn draw(&mut self, cmd: &DrawCommand);
    /// Called after the last command of a frame
    fn end_frame(&mut self) {}
}

/// Host "run this before the next repaint" primitive
pub trait FrameScheduler {
    fn schedule(&self, callback: Box<dyn FnOnce(f64)>);
}

/// Build the scene for the current state
pub fn draw_list(state: &GameState) -> Vec<DrawCommand> {
    let sprites = &state.sprites;
    let player = &state.player;
    let player_size = sprites.player_frame(player.frame);
    let mut cmds = Vec::with_capacity(state.objects.len() + 5);

    cmds.push(DrawCommand::plain(
        Sprite::Background,
        Rect::new(0.0, 0.0, WIDTH, HEIGHT),
    ));

    for obj in &state.objects {
        cmds.push(DrawCommand::plain(
            Sprite::Object,
            Rect::new(obj.pos.x, obj.pos.y, sprites.object.width, sprites.object.height),
        ));
    }

    if state.reward.is_active() {
        // Positioned from the heart's full size, drawn at a tenth of it
        let x = player.x + player_size.width - sprites.reward.width + REWARD_OFFSET_X;
        cmds.push(DrawCommand::plain(
            Sprite::Reward,
            Rect::new(
                x,
                player.y,
                sprites.reward.width * REWARD_SCALE,
                sprites.reward.height * REWARD_SCALE,
            ),
        ));
    }

    // Source art faces left
    cmds.push(DrawCommand {
        sprite: Sprite::Player(player.frame),
        rect: Rect::new(player.x, player.y, player_size.width, player_size.height),
        mirrored: player.facing == Facing::Right,
    });

    cmds.push(DrawCommand::plain(Sprite::LeftButton, Control::Left.rect()));
    cmds.push(DrawCommand::plain(Sprite::RightButton, Control::Right.rect()));

    cmds
}

/// Owns the game state and turns frames into ticks plus draw calls
#[derive(Debug)]
pub struct FrameDriver {
    pub state: GameState,
}

impl FrameDriver {
    pub fn new(state: GameState) -> Self {
        Self { state }
    }

    /// Run one tick at wall-clock `now_ms` and draw the result
    pub fn frame<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> TickSummary {
        let summary = tick(&mut self.state, now_ms);

        surface.begin_frame();
        for cmd in draw_list(&self.state) {
            surface.draw(&cmd);
        }
        surface.end_frame();

        summary
    }
}

/// Start a loop that calls `frame` once per scheduled callback, forever
pub fn run_loop<S, F>(scheduler: std::rc::Rc<S>, frame: F)
where
    S: FrameScheduler + 'static,
    F: FnMut(f64) + 'static,
{
    let next = std::rc::Rc::clone(&scheduler);
    let mut frame = frame;
    scheduler.schedule(Box::new(move |time| {
        frame(time);
        run_loop(next, frame);
    }));
}
