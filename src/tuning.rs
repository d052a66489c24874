//! Data-driven game balance
//!
//! Every field defaults to the matching constant in [`crate::consts`]. A JSON
//! document only needs to name the values it overrides:
//!
//! ```
//! use niku_catch::Tuning;
//!
//! let tuning = Tuning::from_json(r#"{ "fall_speed": 7.5 }"#);
//! assert_eq!(tuning.fall_speed, 7.5);
//! assert_eq!(tuning.min_live_objects, 3);
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay knobs that can change without a rebuild
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fixed vertical position of the dog
    pub player_y: f32,
    /// Horizontal speed in pixels per tick
    pub player_speed: f32,
    /// Falling speed in pixels per tick
    pub fall_speed: f32,
    /// Milliseconds between timer-driven spawns
    pub spawn_interval_ms: f64,
    /// Floor-refill target for concurrently falling objects
    pub min_live_objects: usize,
    /// Heart visibility after a catch, in ticks
    pub reward_ticks: u32,
    /// Root that image paths are resolved against
    pub image_path: String,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            player_y: PLAYER_Y,
            player_speed: PLAYER_SPEED,
            fall_speed: FALL_SPEED,
            spawn_interval_ms: SPAWN_INTERVAL_MS,
            min_live_objects: MIN_LIVE_OBJECTS,
            reward_ticks: REWARD_TICKS,
            image_path: IMAGE_PATH.to_string(),
        }
    }
}

impl Tuning {
    /// Parse a tuning document, falling back to defaults when it is malformed
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str(json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring malformed tuning ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Load tuning from an inline `<script id="tuning">` block (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded tuning from page");
                Self::from_json(&json)
            }
            _ => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
