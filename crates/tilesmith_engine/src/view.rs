//! View-space values handed in by the input layer
//!
//! The engine never owns or mutates viewport state. The input layer
//! translates gestures into document pixel space (scroll offset already
//! applied) and passes an immutable [`ViewState`] alongside, which the
//! engine only uses to convert pixels to grid cells.

use serde::{Deserialize, Serialize};

/// A point in document pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: i32,
}

impl PixelPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A cell position on the map grid. Signed so brush offsets may drift
/// off-canvas; bounds are checked at placement time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPoint {
    pub row: i32,
    pub col: i32,
}

impl GridPoint {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

/// Snapshot of the viewport as the input layer sees it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    /// Current zoom factor
    pub zoom: f32,
    /// Mouse position in document pixel space
    pub mouse: PixelPoint,
    /// Whether the mouse is over the map viewport at all
    pub on_viewport: bool,
}

impl ViewState {
    pub fn new(zoom: f32, mouse: PixelPoint, on_viewport: bool) -> Self {
        Self {
            zoom,
            mouse,
            on_viewport,
        }
    }

    /// Size of one map tile at the current zoom, in pixels.
    pub fn tile_zoomed(&self, tile_size: u32) -> i32 {
        ((tile_size as f32 * self.zoom).floor() as i32).max(1)
    }

    /// Convert a document pixel point to the grid cell containing it.
    pub fn grid_at(&self, point: PixelPoint, tile_size: u32) -> GridPoint {
        let tz = self.tile_zoomed(tile_size);
        GridPoint::new(point.y.div_euclid(tz), point.x.div_euclid(tz))
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            mouse: PixelPoint::new(0, 0),
            on_viewport: true,
        }
    }
}
