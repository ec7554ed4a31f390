//! Tool algorithms and shared tool state
//!
//! Each algorithm consumes the current snapshot and produces a brand-new
//! map (or nothing, for previews and misses); committing the result to
//! history is the editor context's job. This keeps the algorithms pure
//! and the copy-on-write discipline in one place.

pub mod brush;
pub mod collider;
pub mod eraser;
pub mod select;

use crate::view::{GridPoint, PixelPoint};
use serde::{Deserialize, Serialize};
use tilesmith_core::Tile;

/// The tools available for map interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolKind {
    Brush,
    Eraser,
    Selection,
    Collider,
}

/// Modifier keys active during a selection click.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
}

/// Transient, non-undoable tool state.
#[derive(Debug, Clone)]
pub struct ToolState {
    /// Currently active tool
    pub current: ToolKind,
    /// Collider tool places triggers instead of physical colliders
    pub trigger: bool,
    /// Cell the eraser would clear on click (hover preview)
    pub erase_preview: GridPoint,
    /// First click of the current shift-select interaction
    pub shift_anchor: Option<PixelPoint>,
    /// Tiles the brush would place at the current mouse position
    pub preview: Vec<Tile>,
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            current: ToolKind::Brush,
            trigger: false,
            // off-screen until the first hover
            erase_preview: GridPoint::new(-1000, -1000),
            shift_anchor: None,
            preview: Vec::new(),
        }
    }
}
