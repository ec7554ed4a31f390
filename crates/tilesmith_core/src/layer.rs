//! A single z-ordered plane of tiles covering the whole map

use crate::Tile;
use serde::{Deserialize, Serialize};

/// One z-ordered plane of tiles. Higher z-indices draw on top.
///
/// The tile grid is row-major and always sized `height * width`. The
/// per-layer selection list is transient editor state: it is excluded
/// from equality and dropped by [`Layer::clone`], so history snapshots
/// never resurrect a stale selection.
#[derive(Debug, Serialize, Deserialize)]
pub struct Layer {
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Depth of the layer; bigger indices draw on top of smaller ones
    pub z_index: f32,
    /// Layer opacity in `[0, 1]` (viewport tweak only)
    pub opacity: f32,
    /// Row-major tile grid, `None` for empty cells
    pub tiles: Vec<Option<Tile>>,
    /// Currently selected tiles of this layer (placeholders holding map indices)
    #[serde(skip)]
    pub selection: Vec<Tile>,
}

impl Layer {
    /// Create an empty layer of the given size.
    pub fn new(z_index: f32, opacity: f32, width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            z_index,
            opacity,
            tiles: vec![None; (width * height) as usize],
            selection: Vec::new(),
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Get the tile at a cell, if any.
    pub fn tile(&self, row: u32, col: u32) -> Option<&Tile> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.tiles[self.index(row, col)].as_ref()
    }

    /// Replace the tile at a cell. Out-of-bounds cells are ignored.
    pub fn set_tile(&mut self, row: u32, col: u32, tile: Option<Tile>) {
        if row >= self.height || col >= self.width {
            return;
        }
        let index = self.index(row, col);
        self.tiles[index] = tile;
    }

    /// Whether the layer contains no tiles at all.
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|t| t.is_none())
    }

    /// Resize the grid, keeping whatever fits in the overlapping region.
    ///
    /// The selection is reset: its entries index the old grid.
    pub fn resize(&mut self, width: u32, height: u32) {
        let mut tiles = vec![None; (width * height) as usize];
        for row in 0..height.min(self.height) {
            for col in 0..width.min(self.width) {
                let index = self.index(row, col);
                tiles[(row * width + col) as usize] = self.tiles[index].take();
            }
        }
        self.width = width;
        self.height = height;
        self.tiles = tiles;
        self.selection.clear();
    }
}

// Snapshot copies start with an empty selection: the selection belongs to
// the live document, not to history.
impl Clone for Layer {
    fn clone(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            z_index: self.z_index,
            opacity: self.opacity,
            tiles: self.tiles.clone(),
            selection: Vec::new(),
        }
    }
}

// Equality is structural over the painted content; the transient selection
// must not make two otherwise identical snapshots compare unequal.
impl PartialEq for Layer {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.z_index == other.z_index
            && self.opacity == other.opacity
            && self.tiles == other.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tileset;

    fn tileset() -> Tileset {
        Tileset::new("t".to_string(), 16, 64, 64, "t.png".to_string(), 1)
    }

    #[test]
    fn test_new_layer_is_empty() {
        let layer = Layer::new(0.0, 1.0, 8, 6);
        assert!(layer.is_empty());
        assert_eq!(layer.tiles.len(), 48);
    }

    #[test]
    fn test_set_and_get_tile() {
        let ts = tileset();
        let mut layer = Layer::new(0.0, 1.0, 8, 6);
        layer.set_tile(2, 3, Some(Tile::new(0, 0, &ts)));
        assert!(layer.tile(2, 3).is_some());
        assert!(layer.tile(3, 2).is_none());
        assert!(!layer.is_empty());
        // out of bounds is a no-op
        layer.set_tile(100, 100, Some(Tile::new(0, 0, &ts)));
        assert!(layer.tile(100, 100).is_none());
    }

    #[test]
    fn test_clone_is_deep_and_drops_selection() {
        let ts = tileset();
        let mut layer = Layer::new(0.0, 1.0, 4, 4);
        layer.set_tile(1, 1, Some(Tile::new(0, 0, &ts)));
        layer.selection.push(Tile::new(1, 1, &ts));

        let mut copy = layer.clone();
        assert!(copy.selection.is_empty());
        assert_eq!(copy, layer);

        // mutating the copy must not affect the original
        copy.set_tile(1, 1, None);
        assert!(layer.tile(1, 1).is_some());
        assert_ne!(copy, layer);
    }

    #[test]
    fn test_resize_keeps_overlap() {
        let ts = tileset();
        let mut layer = Layer::new(0.0, 1.0, 4, 4);
        layer.set_tile(1, 1, Some(Tile::new(0, 0, &ts)));
        layer.set_tile(3, 3, Some(Tile::new(0, 1, &ts)));

        layer.resize(2, 2);
        assert!(layer.tile(1, 1).is_some());
        assert!(layer.tile(3, 3).is_none());

        layer.resize(6, 6);
        assert!(layer.tile(1, 1).is_some());
        assert_eq!(layer.tiles.len(), 36);
    }
}
