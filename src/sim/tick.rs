//! Per-frame simulation tick
//!
//! One call advances the game by exactly one display frame. Speeds are in
//! pixels per tick, spawning is driven by wall-clock milliseconds.

use glam::Vec2;

use super::collision::catches;
use super::state::{Facing, GameState};
use crate::consts::*;

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickSummary {
    /// Objects added by the spawn scheduler
    pub spawned: usize,
    /// Live objects right after the spawn phase
    pub live_after_spawn: usize,
    /// Objects caught by the player
    pub caught: usize,
    /// Objects that fell out of the playfield
    pub missed: usize,
}

/// Advance the game state by one tick
///
/// Walk-cycle frames may differ in size. The move is clamped against the frame
/// shown before the animation step, and the dog is kept inside the playfield
/// for the frame it advances to, which is also the frame catches are tested
/// with.
///
/// A catch restarts the reward timer and skips that tick's countdown, so the
/// heart is drawn on the catch frame and the following `reward_ticks - 1`
/// frames, and the timer reads 0 exactly `reward_ticks` ticks after the catch.
pub fn tick(state: &mut GameState, now_ms: f64) -> TickSummary {
    // Input may change between frames but never during one
    let intent = state.intent;
    let obj_size = state.sprites.object;
    let mut summary = TickSummary::default();

    state.time_ticks += 1;

    // Move and turn (left wins if both are held)
    match intent.active() {
        Some(Facing::Left) => {
            state.player.x -= state.player.speed;
            state.player.facing = Facing::Left;
        }
        Some(Facing::Right) => {
            state.player.x += state.player.speed;
            state.player.facing = Facing::Right;
        }
        None => {}
    }
    let shown = state.sprites.player_frame(state.player.frame);
    state.player.clamp_to_bounds(shown.width);

    // Walk cycle only runs while moving
    if intent.is_moving() {
        state.player.frame = (state.player.frame + 1) % PLAYER_FRAMES;
    } else {
        state.player.frame = 0;
    }
    let player_size = state.sprites.player_frame(state.player.frame);
    state.player.clamp_to_bounds(player_size.width);

    summary.spawned = state
        .spawner
        .run(now_ms, &mut state.objects, obj_size.width, &mut state.rng);
    summary.live_after_spawn = state.objects.len();

    // Newest first so removal never skips an element
    let player_pos = Vec2::new(state.player.x, state.player.y);
    let fall_speed = state.tuning.fall_speed;
    for i in (0..state.objects.len()).rev() {
        let obj = &mut state.objects[i];
        obj.pos.y += fall_speed;

        if obj.pos.y > HEIGHT {
            state.objects.remove(i);
            summary.missed += 1;
            continue;
        }

        if catches(player_pos, player_size, obj.pos, obj_size) {
            log::debug!("Caught object at ({:.1}, {:.1})", obj.pos.x, obj.pos.y);
            state.objects.remove(i);
            summary.caught += 1;
        }
    }

    if summary.caught > 0 {
        state.reward.start(state.tuning.reward_ticks);
    } else {
        state.reward.decrement();
    }

    state.caught += summary.caught as u64;
    state.missed += summary.missed as u64;

    summary
}
