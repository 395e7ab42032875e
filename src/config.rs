//! Data-driven gameplay tuning
//!
//! All randomized policy in the simulation reads from this one bundle. The
//! defaults are the shipped balance; embedders may load a different bundle
//! from JSON at startup. The config is read-only once the run begins.

use serde::{Deserialize, Serialize};

/// Tunable gameplay parameters.
///
/// Every `*_range` field is an inclusive `[min, max]` pair sampled uniformly.
/// Preconditions, not validated at runtime: `min <= max` for every range, and
/// the percentages lie in `0..=100`. Violating them is a programmer error.
///
/// The vertical corridor (`platform_vertical_limit`) and the jump parameters
/// (`jump_force`, `player_gravity`, `platform_high_scale`,
/// `platform_height_range`) are co-tuned: the largest vertical step between
/// consecutive platforms must stay within reach of the configured jump count.
/// The defaults satisfy this; change them together or not at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Leftward platform speed, pixels/s (sampled once per fresh platform)
    pub platform_speed_range: [f32; 2],
    /// Leftward background speed, pixels/s (slower than platforms, for
    /// parallax)
    pub mountain_speed: f32,
    /// Gap before the next platform spawn, pixels
    pub spawn_range: [f32; 2],
    /// Platform width, pixels
    pub platform_size_range: [f32; 2],
    /// Vertical step between consecutive platforms, in units of
    /// `platform_high_scale` pixels
    pub platform_height_range: [i32; 2],
    /// Pixel multiplier for one unit of height step
    pub platform_high_scale: f32,
    /// Traversal corridor as fractions of screen height `[min, max]`
    pub platform_vertical_limit: [f32; 2],
    /// Downward acceleration on the player, pixels/s²
    pub player_gravity: f32,
    /// Upward impulse per jump, pixels/s
    pub jump_force: f32,
    /// Fixed horizontal player position, pixels from the left edge
    pub player_start_position: f32,
    /// Total jumps before the player must touch ground again
    pub jumps: u32,
    /// Percent chance a platform spawn carries a coin
    pub coin_percent: u32,
    /// Percent chance a platform spawn carries a fire hazard
    pub fire_percent: u32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            platform_speed_range: [300.0, 300.0],
            mountain_speed: 80.0,
            spawn_range: [80.0, 300.0],
            platform_size_range: [90.0, 300.0],
            platform_height_range: [-5, 5],
            platform_high_scale: 20.0,
            platform_vertical_limit: [0.4, 0.8],
            player_gravity: 900.0,
            jump_force: 400.0,
            player_start_position: 200.0,
            jumps: 2,
            coin_percent: 25,
            fire_percent: 25,
        }
    }
}

impl GameplayConfig {
    /// Load a config bundle from a JSON file.
    pub fn load(path: &std::path::Path) -> std::io::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        serde_json::from_str(&json).map_err(std::io::Error::other)
    }

    /// The corridor floor in pixels for a given screen height.
    pub fn corridor_min(&self, screen_height: f32) -> f32 {
        screen_height * self.platform_vertical_limit[0]
    }

    /// The corridor ceiling in pixels for a given screen height.
    pub fn corridor_max(&self, screen_height: f32) -> f32 {
        screen_height * self.platform_vertical_limit[1]
    }
}
