//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Image loading (`<img>` elements on web)
//! - Drawing surfaces (canvas 2D on web, a counting recorder natively)
//! - Frame scheduling (`requestAnimationFrame` on web)
//! - Input events and window resizing

pub mod headless;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use headless::{CountingSurface, run_headless};
