//! Logical <-> physical coordinate mapping
//!
//! The playfield is always `WIDTH x HEIGHT` logical units. The window is
//! fitted with a uniform scale and the leftover space is split evenly on both
//! sides (letterboxing), so gameplay never sees physical pixels.

use glam::Vec2;

use crate::Size;
use crate::consts::{HEIGHT, WIDTH};

/// Uniform scale plus letterbox offset for the current display size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for Viewport {
    /// Identity mapping (physical display exactly the playfield size)
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl Viewport {
    /// Fit the playfield into a physical area.
    ///
    /// Returns `None` for degenerate sizes; callers keep the previous viewport.
    pub fn compute(physical_width: f32, physical_height: f32) -> Option<Self> {
        if !(physical_width > 0.0 && physical_height > 0.0) {
            return None;
        }
        let scale = (physical_width / WIDTH).min(physical_height / HEIGHT);
        Some(Self {
            scale,
            offset_x: (physical_width - WIDTH * scale) / 2.0,
            offset_y: (physical_height - HEIGHT * scale) / 2.0,
        })
    }

    /// Physical size of the drawing surface
    pub fn surface_size(&self) -> Size {
        Size::new(WIDTH * self.scale, HEIGHT * self.scale)
    }

    /// Map a physical point (e.g. a pointer's client position) into the playfield
    #[inline]
    pub fn to_logical(&self, physical_x: f32, physical_y: f32) -> Vec2 {
        Vec2::new(
            (physical_x - self.offset_x) / self.scale,
            (physical_y - self.offset_y) / self.scale,
        )
    }

    /// Map a logical point back to physical pixels
    #[inline]
    pub fn to_physical(&self, logical: Vec2) -> Vec2 {
        Vec2::new(
            logical.x * self.scale + self.offset_x,
            logical.y * self.scale + self.offset_y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_window_letterboxes_horizontally() {
        let vp = Viewport::compute(1600.0, 600.0).unwrap();
        assert_eq!(vp.scale, 1.0);
        assert_eq!(vp.offset_x, 400.0);
        assert_eq!(vp.offset_y, 0.0);
        assert_eq!(vp.surface_size(), Size::new(800.0, 600.0));
        // Canvas is placed at the letterbox origin
        assert_eq!(vp.to_physical(Vec2::ZERO), Vec2::new(400.0, 0.0));
    }

    #[test]
    fn test_tall_window_letterboxes_vertically() {
        let vp = Viewport::compute(400.0, 1000.0).unwrap();
        assert_eq!(vp.scale, 0.5);
        assert_eq!(vp.offset_x, 0.0);
        assert_eq!(vp.offset_y, 350.0);
    }

    #[test]
    fn test_degenerate_sizes_rejected() {
        assert!(Viewport::compute(0.0, 600.0).is_none());
        assert!(Viewport::compute(800.0, -1.0).is_none());
        assert!(Viewport::compute(f32::NAN, 600.0).is_none());
    }

    #[test]
    fn test_to_logical_inverts_to_physical() {
        let vp = Viewport::compute(1920.0, 1080.0).unwrap();
        let logical = Vec2::new(123.0, 456.0);
        let back = vp.to_logical(vp.to_physical(logical).x, vp.to_physical(logical).y);
        assert!((back - logical).length() < 1e-3);

        // Letterbox origin maps to the playfield origin
        assert!(vp.to_logical(vp.offset_x, vp.offset_y).length() < 1e-4);
    }
}
