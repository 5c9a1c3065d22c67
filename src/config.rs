//! World and level configuration
//!
//! `WorldConfig` is the single immutable description of the play area. It is
//! passed explicitly to every component that needs bounds, instead of reading
//! screen size from globals.
//!
//! `LevelLayout` describes platforms, enemy spawns and decorations in
//! viewport-relative units so the same level scales to any display. The
//! built-in palace level is embedded at compile time and parsed with
//! `serde_json`, the same way entity configs are described in JSON.

use crate::enemy::EnemyKind;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Height of the solid ground strip at the bottom of the viewport.
pub const GROUND_HEIGHT: f32 = 50.0;

/// How many viewport widths the level extends horizontally.
pub const WORLD_WIDTH_SCREENS: f32 = 3.0;

/// Simulation tick rate the per-frame constants are tuned for.
pub const FPS: u32 = 60;

const DEFAULT_LEVEL_JSON: &str = include_str!("../assets/levels/palace.json");

/// Immutable world dimensions derived from the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldConfig {
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl WorldConfig {
    /// Creates a validated world configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidViewport` if either dimension is not a
    /// positive finite number, or the viewport is too short to hold the ground.
    pub fn new(viewport_width: f32, viewport_height: f32) -> Result<Self, ConfigError> {
        let invalid = |reason| ConfigError::InvalidViewport {
            width: viewport_width,
            height: viewport_height,
            reason,
        };

        if !viewport_width.is_finite() || !viewport_height.is_finite() {
            return Err(invalid("dimensions must be finite"));
        }
        if viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Err(invalid("dimensions must be positive"));
        }
        if viewport_height <= GROUND_HEIGHT {
            return Err(invalid("viewport is shorter than the ground strip"));
        }

        Ok(WorldConfig {
            viewport_width,
            viewport_height,
        })
    }

    /// Total horizontal extent of the level.
    pub fn world_width(&self) -> f32 {
        self.viewport_width * WORLD_WIDTH_SCREENS
    }

    /// Y coordinate of the ground line that every body rests on.
    pub fn ground_y(&self) -> f32 {
        self.viewport_height - GROUND_HEIGHT
    }
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            viewport_width: 1280.0,
            viewport_height: 720.0,
        }
    }
}

/// Player spawn point. `x` is absolute, `rise` is measured up from the
/// bottom of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnPoint {
    pub x: f32,
    pub rise: f32,
}

/// A platform in viewport-relative units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    /// Left edge as a fraction of viewport width
    pub x: f32,
    /// Top edge in pixels above the bottom of the viewport
    pub rise: f32,
    /// Width as a fraction of viewport width
    pub width: f32,
    /// Height in pixels
    pub height: f32,
}

/// An enemy spawn in viewport-relative units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub rise: f32,
    pub kind: EnemyKind,
    /// Patrol distance as a fraction of viewport width
    pub patrol: f32,
}

/// A row of evenly spaced background arches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecorationRow {
    pub count: usize,
    pub spacing: f32,
    pub width: f32,
    pub rise: f32,
    pub height: f32,
}

/// Complete description of a level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub spawn: SpawnPoint,
    pub platforms: Vec<PlatformSpec>,
    pub enemies: Vec<EnemySpawn>,
    pub decorations: DecorationRow,
}

impl LevelLayout {
    /// Parses a layout from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// The built-in palace level.
    pub fn palace() -> Result<Self, ConfigError> {
        Self::from_json(DEFAULT_LEVEL_JSON)
    }
}
