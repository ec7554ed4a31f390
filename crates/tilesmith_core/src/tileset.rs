//! Tilesets and the catalog resolving global tile ids

use crate::TileResolutionError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A source of tiles: one atlas image cut into square tiles.
///
/// Every tileset claims a contiguous range of global tile ids,
/// `first_id .. first_id + tile_count`; ranges of distinct tilesets never
/// overlap. Global id 0 is reserved for "empty cell".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tileset {
    pub id: Uuid,
    pub name: String,
    /// Edge length of a (square) tile in pixels
    pub tile_size: u32,
    /// Path to the atlas image
    pub image_path: String,
    /// Atlas image width in pixels
    pub image_width: u32,
    /// Atlas image height in pixels
    pub image_height: u32,
    /// Global id of this tileset's first tile
    pub first_id: u32,
    /// Number of tiles in the tileset
    pub tile_count: u32,
    /// Tiles per row in the atlas
    pub columns: u32,
    /// Tile rows in the atlas
    pub rows: u32,
}

impl Tileset {
    /// Create a tileset from its atlas dimensions.
    ///
    /// The tile size is clamped so it never exceeds the image, and the
    /// grid dimensions are rounded up so partial rows/columns still count.
    pub fn new(
        name: String,
        tile_size: u32,
        image_width: u32,
        image_height: u32,
        image_path: String,
        first_id: u32,
    ) -> Self {
        let tile_size = tile_size.min(image_width).min(image_height).max(1);
        let columns = image_width.div_ceil(tile_size);
        let rows = image_height.div_ceil(tile_size);
        Self {
            id: Uuid::new_v4(),
            name,
            tile_size,
            image_path,
            image_width,
            image_height,
            first_id,
            tile_count: columns * rows,
            columns,
            rows,
        }
    }

    /// Whether this tileset's id range claims the given global id.
    pub fn contains(&self, id: u32) -> bool {
        id >= self.first_id && id < self.first_id + self.tile_count
    }
}

/// A resolved global tile id: the owning tileset and local indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileLocation<'a> {
    pub tileset: &'a Tileset,
    pub local_row: u32,
    pub local_col: u32,
}

/// The ordered list of tilesets loaded into a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TilesetCatalog {
    tilesets: Vec<Tileset>,
    /// Index of the tileset currently shown in the tileset view
    current: usize,
}

impl TilesetCatalog {
    /// Append a tileset to the catalog.
    pub fn add(&mut self, tileset: Tileset) {
        self.tilesets.push(tileset);
    }

    /// First global id for the next tileset to be appended.
    ///
    /// One past the last tile of the latest tileset, or 1 for an empty
    /// catalog (id 0 is reserved for "empty").
    pub fn calculate_first_id(&self) -> u32 {
        match self.tilesets.last() {
            Some(last) => last.first_id + last.tile_count,
            None => 1,
        }
    }

    /// Resolve a global tile id to its tileset and local indices.
    pub fn resolve(&self, id: u32) -> Result<TileLocation<'_>, TileResolutionError> {
        for tileset in &self.tilesets {
            if tileset.contains(id) {
                let offset = id - tileset.first_id;
                return Ok(TileLocation {
                    tileset,
                    local_row: offset / tileset.columns,
                    local_col: offset % tileset.columns,
                });
            }
        }
        Err(TileResolutionError { id })
    }

    /// All tilesets, in import order.
    pub fn tilesets(&self) -> &[Tileset] {
        &self.tilesets
    }

    /// The tileset currently shown in the tileset view, if any.
    pub fn current_tileset(&self) -> Option<&Tileset> {
        self.tilesets.get(self.current)
    }

    /// Switch the tileset shown in the tileset view.
    pub fn set_current(&mut self, index: usize) {
        if index < self.tilesets.len() {
            self.current = index;
        }
    }

    /// Index of the current tileset.
    pub fn current_index(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_round_up() {
        // 70x33 image with 16px tiles: 5 columns, 3 rows
        let ts = Tileset::new("t".to_string(), 16, 70, 33, "t.png".to_string(), 1);
        assert_eq!(ts.columns, 5);
        assert_eq!(ts.rows, 3);
        assert_eq!(ts.tile_count, 15);
    }

    #[test]
    fn test_tile_size_clamped_to_image() {
        let ts = Tileset::new("t".to_string(), 64, 32, 48, "t.png".to_string(), 1);
        assert_eq!(ts.tile_size, 32);
    }

    #[test]
    fn test_calculate_first_id() {
        let mut catalog = TilesetCatalog::default();
        assert_eq!(catalog.calculate_first_id(), 1);

        catalog.add(Tileset::new(
            "a".to_string(),
            16,
            64,
            64,
            "a.png".to_string(),
            catalog.calculate_first_id(),
        ));
        // 4x4 tiles -> ids 1..=16, next first id is 17
        assert_eq!(catalog.calculate_first_id(), 17);

        catalog.add(Tileset::new(
            "b".to_string(),
            16,
            32,
            32,
            "b.png".to_string(),
            catalog.calculate_first_id(),
        ));
        assert_eq!(catalog.calculate_first_id(), 21);
    }

    #[test]
    fn test_resolve_local_indices() {
        let mut catalog = TilesetCatalog::default();
        catalog.add(Tileset::new(
            "a".to_string(),
            16,
            64,
            32,
            "a.png".to_string(),
            1,
        ));

        // 4 columns: id 6 is row 1, col 1
        let loc = catalog.resolve(6).unwrap();
        assert_eq!((loc.local_row, loc.local_col), (1, 1));
        assert_eq!(loc.tileset.name, "a");
    }

    #[test]
    fn test_resolve_across_tilesets() {
        let mut catalog = TilesetCatalog::default();
        catalog.add(Tileset::new(
            "a".to_string(),
            16,
            64,
            64,
            "a.png".to_string(),
            1,
        ));
        catalog.add(Tileset::new(
            "b".to_string(),
            16,
            32,
            32,
            "b.png".to_string(),
            17,
        ));

        assert_eq!(catalog.resolve(16).unwrap().tileset.name, "a");
        assert_eq!(catalog.resolve(17).unwrap().tileset.name, "b");
        let loc = catalog.resolve(20).unwrap();
        assert_eq!((loc.local_row, loc.local_col), (1, 1));
    }

    #[test]
    fn test_resolve_unclaimed_id_fails() {
        let catalog = TilesetCatalog::default();
        let err = catalog.resolve(7).unwrap_err();
        assert_eq!(err.id, 7);
    }
}
