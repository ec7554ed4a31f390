//! A single painted cell, resolved against a tileset

use crate::Tileset;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One painted cell: a reference into a tileset plus its place on the map.
///
/// A tile starts out *incomplete*: only the tileset-local indices and the
/// global id are known (e.g. a selection placeholder or a brush source).
/// Once the brush assigns draw coordinates the tile is marked `complete`
/// and is ready to be placed or previewed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    /// Identity of the source tileset
    pub tileset_id: Uuid,
    /// Global id across all tilesets (0 is reserved for "empty")
    pub id: u32,
    /// Row inside the tileset
    pub local_row: i32,
    /// Column inside the tileset
    pub local_col: i32,
    /// Map row this tile occupies (paste anchor for clipboard entries)
    #[serde(default)]
    pub matrix_row: i32,
    /// Map column this tile occupies (paste anchor for clipboard entries)
    #[serde(default)]
    pub matrix_col: i32,
    /// Row the tile is drawn at (may differ from matrix during preview)
    #[serde(default)]
    pub draw_row: i32,
    /// Column the tile is drawn at
    #[serde(default)]
    pub draw_col: i32,
    /// True once draw coordinates have been assigned
    #[serde(default)]
    pub complete: bool,
}

impl Tile {
    /// Create an incomplete tile from tileset-local indices.
    ///
    /// The global id is derived from the tileset's id range. Selection
    /// placeholders on the map side also use this constructor, storing map
    /// indices in `local_row`/`local_col` until the tile is bound to data.
    pub fn new(local_row: i32, local_col: i32, tileset: &Tileset) -> Self {
        let id = tileset.first_id as i32 + local_row * tileset.columns as i32 + local_col;
        Self {
            tileset_id: tileset.id,
            id: id.max(0) as u32,
            local_row,
            local_col,
            matrix_row: 0,
            matrix_col: 0,
            draw_row: 0,
            draw_col: 0,
            complete: false,
        }
    }

    /// Create a fully resolved tile as reconstructed from a saved map.
    pub fn resolved(
        local_row: i32,
        local_col: i32,
        tileset: &Tileset,
        id: u32,
        matrix_row: i32,
        matrix_col: i32,
    ) -> Self {
        Self {
            tileset_id: tileset.id,
            id,
            local_row,
            local_col,
            matrix_row,
            matrix_col,
            draw_row: matrix_row,
            draw_col: matrix_col,
            complete: true,
        }
    }

    /// Assign draw coordinates, completing the tile.
    pub fn place_at(&mut self, draw_row: i32, draw_col: i32) {
        self.draw_row = draw_row;
        self.draw_col = draw_col;
        self.complete = true;
    }
}
