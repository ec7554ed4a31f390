//! Editor limits and grid configuration

use serde::{Deserialize, Serialize};

/// Tunable limits of the editing engine.
///
/// These are constructor parameters, not hardcoded: hosts may raise the
/// layer cap or deepen the history as they see fit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Maximum number of simultaneous layers the brush may allocate
    pub max_layers: usize,
    /// Maximum number of retained history snapshots
    pub max_history: usize,
    /// Minimum viewport zoom factor
    pub min_zoom: f32,
    /// Maximum viewport zoom factor
    pub max_zoom: f32,
    /// Edge length of a map tile in pixels (unzoomed)
    pub tile_size: u32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            max_layers: 4,
            max_history: 10,
            min_zoom: 2.0,
            max_zoom: 5.0,
            tile_size: 32,
        }
    }
}

impl EditorConfig {
    /// Default configuration adjusted for a specific tile size.
    ///
    /// Small tiles get a higher minimum zoom so the viewport never renders
    /// an impractically dense grid.
    pub fn for_tile_size(tile_size: u32) -> Self {
        let mut config = Self {
            tile_size,
            ..Self::default()
        };
        if tile_size < 32 {
            config.min_zoom = 3.2;
        }
        config
    }

    /// Clamp a requested zoom factor into the configured range.
    pub fn clamp_zoom(&self, zoom: f32) -> f32 {
        zoom.clamp(self.min_zoom, self.max_zoom)
    }
}
