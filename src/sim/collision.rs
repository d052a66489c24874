//! Player / falling object hit-testing
//!
//! Not a plain rectangle intersection: the object is anchored by its top-left
//! corner and the player's catch zone is widened by half the object's width on
//! the left and narrowed by the same amount on the right. This is what makes a
//! catch feel centered on the dog's mouth rather than its bounding box.

use glam::Vec2;

use crate::Size;

/// Whether an object at `obj_pos` is caught by a player at `player_pos`
#[inline]
pub fn catches(player_pos: Vec2, player: Size, obj_pos: Vec2, obj: Size) -> bool {
    obj_pos.y >= player_pos.y - obj.height
        && obj_pos.y <= player_pos.y + player.height
        && obj_pos.x >= player_pos.x - obj.width / 2.0
        && obj_pos.x <= player_pos.x + player.width - obj.width / 2.0
}
