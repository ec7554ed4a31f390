//! The full editable document: a stack of layers plus a collider grid

use crate::{Collider, Layer, Tile};
use serde::{Deserialize, Serialize};

/// The map being edited: an ordered stack of layers (bottom to top) and a
/// collider grid orthogonal to them.
///
/// A map always owns at least layer 0; tools allocate further layers on
/// demand and compact empty ones away, but never layer 0. The whole graph
/// is owned, so `clone()` yields a fully independent snapshot - this is
/// what the history manager relies on for copy-on-write isolation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileMap {
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Layer stack, bottom first
    pub layers: Vec<Layer>,
    /// Index of the layer edits apply to
    pub selected_layer: usize,
    /// Row-major collider grid, `None` for unmarked cells
    pub colliders: Vec<Option<Collider>>,
}

impl TileMap {
    /// Create an empty map with a single base layer.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            layers: vec![Layer::new(0.0, 1.0, width, height)],
            selected_layer: 0,
            colliders: vec![None; (width * height) as usize],
        }
    }

    /// Assemble a map from already-built parts (used by the load path).
    pub fn from_parts(
        width: u32,
        height: u32,
        layers: Vec<Layer>,
        selected_layer: usize,
        colliders: Vec<Option<Collider>>,
    ) -> Self {
        Self {
            width,
            height,
            layers,
            selected_layer,
            colliders,
        }
    }

    /// Whether a signed grid point lies inside the map.
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && (row as u32) < self.height && (col as u32) < self.width
    }

    /// Get the tile at a cell of a given layer.
    pub fn tile(&self, layer: usize, row: u32, col: u32) -> Option<&Tile> {
        self.layers.get(layer)?.tile(row, col)
    }

    /// The global tile id at a cell of a given layer, 0 when empty.
    pub fn tile_id(&self, layer: usize, row: u32, col: u32) -> u32 {
        self.tile(layer, row, col).map_or(0, |t| t.id)
    }

    fn collider_index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    /// Get the collider at a cell, if any.
    pub fn collider(&self, row: u32, col: u32) -> Option<&Collider> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.colliders[self.collider_index(row, col)].as_ref()
    }

    /// Replace the collider at a cell. Out-of-bounds cells are ignored.
    pub fn set_collider(&mut self, row: u32, col: u32, collider: Option<Collider>) {
        if row >= self.height || col >= self.width {
            return;
        }
        let index = self.collider_index(row, col);
        self.colliders[index] = collider;
    }

    /// The layer edits currently apply to.
    pub fn selected(&self) -> &Layer {
        &self.layers[self.selected_layer]
    }

    /// Mutable access to the selected layer.
    pub fn selected_mut(&mut self) -> &mut Layer {
        &mut self.layers[self.selected_layer]
    }

    /// Resize every layer and the collider grid, keeping the overlap.
    pub fn resize(&mut self, width: u32, height: u32) {
        for layer in &mut self.layers {
            layer.resize(width, height);
        }
        let mut colliders = vec![None; (width * height) as usize];
        for row in 0..height.min(self.height) {
            for col in 0..width.min(self.width) {
                colliders[(row * width + col) as usize] =
                    self.colliders[(row * self.width + col) as usize].take();
            }
        }
        self.width = width;
        self.height = height;
        self.colliders = colliders;
    }
}
