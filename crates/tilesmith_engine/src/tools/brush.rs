//! Brush: stamp the active selection onto the map
//!
//! The first tile of the source selection anchors the stroke; every other
//! tile lands at `target + (its offset - anchor offset)`, preserving the
//! selection's shape. Placement scans layers bottom-to-top for a free
//! cell, allocates a new layer when all are occupied (up to the layer
//! cap), and past the cap overwrites the topmost cell - an accepted lossy
//! fallback, not a failure.

use crate::view::GridPoint;
use tilesmith_core::{Layer, Tile, TileMap};
use tracing::{debug, warn};

/// Which indices of a source tile anchor the stroke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSpace {
    /// Tileset-local indices (painting from the tileset selection)
    TilesetLocal,
    /// Map matrix indices (pasting clipboard content)
    MapMatrix,
}

/// Result of one brush invocation.
#[derive(Debug)]
pub struct BrushOutcome {
    /// The stamped tiles with draw coordinates assigned (for preview
    /// rendering; includes tiles that drifted off-map)
    pub preview: Vec<Tile>,
    /// The mutated map copy, present only if a committing invocation
    /// actually placed at least one tile in bounds
    pub map: Option<TileMap>,
}

fn anchor_of(tile: &Tile, space: AnchorSpace) -> (i32, i32) {
    match space {
        AnchorSpace::TilesetLocal => (tile.local_row, tile.local_col),
        AnchorSpace::MapMatrix => (tile.matrix_row, tile.matrix_col),
    }
}

/// Stamp `source` onto a copy of `current` around `target`.
///
/// Hover invocations compute the same placement but leave the map alone:
/// only the preview is produced.
pub fn brush_tiles(
    current: &TileMap,
    target: GridPoint,
    source: &[Tile],
    space: AnchorSpace,
    max_layers: usize,
    hover: bool,
) -> BrushOutcome {
    let mut preview = Vec::with_capacity(source.len());
    if source.is_empty() {
        return BrushOutcome { preview, map: None };
    }

    let anchor = anchor_of(&source[0], space);
    let mut map = current.clone();
    let mut placed = false;

    for selected in source {
        let offset = anchor_of(selected, space);
        let row = target.row - (anchor.0 - offset.0);
        let col = target.col - (anchor.1 - offset.1);

        let mut tile = selected.clone();
        tile.place_at(row, col);
        preview.push(tile.clone());

        if !map.in_bounds(row, col) {
            continue;
        }
        if hover {
            continue;
        }

        tile.matrix_row = row;
        tile.matrix_col = col;
        place_tile(&mut map, row as u32, col as u32, tile, max_layers);
        placed = true;
    }

    BrushOutcome {
        preview,
        map: if placed && !hover { Some(map) } else { None },
    }
}

/// Put a tile at a cell, resolving stacking conflicts by layer.
fn place_tile(map: &mut TileMap, row: u32, col: u32, tile: Tile, max_layers: usize) {
    // first free cell wins, scanning bottom to top
    for layer in &mut map.layers {
        if layer.tile(row, col).is_none() {
            layer.set_tile(row, col, Some(tile));
            return;
        }
    }

    if map.layers.len() < max_layers {
        let mut layer = Layer::new(map.layers.len() as f32, 1.0, map.width, map.height);
        layer.set_tile(row, col, Some(tile));
        map.layers.push(layer);
        debug!(
            layer = map.layers.len(),
            row, col, "allocated layer for stacked tile"
        );
        return;
    }

    // layer cap reached: overwrite the topmost cell (lossy by policy)
    warn!(row, col, "layer cap reached, overwriting topmost tile");
    if let Some(top) = map.layers.last_mut() {
        top.set_tile(row, col, Some(tile));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesmith_core::{Tileset, TilesetCatalog};

    fn tileset() -> Tileset {
        // 2x2 tiles, ids 1..=4
        Tileset::new("t".to_string(), 16, 32, 32, "t.png".to_string(), 1)
    }

    fn single(ts: &Tileset, local_row: i32, local_col: i32) -> Vec<Tile> {
        vec![Tile::new(local_row, local_col, ts)]
    }

    #[test]
    fn test_single_tile_placement() {
        let ts = tileset();
        let map = TileMap::new(10, 10);
        let out = brush_tiles(
            &map,
            GridPoint::new(2, 2),
            &single(&ts, 1, 0),
            AnchorSpace::TilesetLocal,
            4,
            false,
        );
        let map = out.map.expect("committing brush mutates a copy");
        assert_eq!(map.tile_id(0, 2, 2), 3);
        assert_eq!(map.layers.len(), 1);

        let placed = map.tile(0, 2, 2).unwrap();
        assert!(placed.complete);
        assert_eq!((placed.matrix_row, placed.matrix_col), (2, 2));
    }

    #[test]
    fn test_hover_never_mutates() {
        let ts = tileset();
        let map = TileMap::new(10, 10);
        let out = brush_tiles(
            &map,
            GridPoint::new(2, 2),
            &single(&ts, 0, 0),
            AnchorSpace::TilesetLocal,
            4,
            true,
        );
        assert!(out.map.is_none());
        assert_eq!(out.preview.len(), 1);
        assert!(out.preview[0].complete);
        assert_eq!((out.preview[0].draw_row, out.preview[0].draw_col), (2, 2));
    }

    #[test]
    fn test_multi_tile_selection_keeps_shape() {
        let ts = tileset();
        let map = TileMap::new(10, 10);
        // 2x2 block of the whole tileset, anchor at local (0,0)
        let source = vec![
            Tile::new(0, 0, &ts),
            Tile::new(0, 1, &ts),
            Tile::new(1, 0, &ts),
            Tile::new(1, 1, &ts),
        ];
        let out = brush_tiles(
            &map,
            GridPoint::new(3, 4),
            &source,
            AnchorSpace::TilesetLocal,
            4,
            false,
        );
        let map = out.map.unwrap();
        assert_eq!(map.tile_id(0, 3, 4), 1);
        assert_eq!(map.tile_id(0, 3, 5), 2);
        assert_eq!(map.tile_id(0, 4, 4), 3);
        assert_eq!(map.tile_id(0, 4, 5), 4);
    }

    #[test]
    fn test_off_map_tiles_skipped_but_previewed() {
        let ts = tileset();
        let map = TileMap::new(4, 4);
        let source = vec![Tile::new(0, 0, &ts), Tile::new(0, 1, &ts)];
        // anchor lands on the last column; the second tile drifts off-map
        let out = brush_tiles(
            &map,
            GridPoint::new(0, 3),
            &source,
            AnchorSpace::TilesetLocal,
            4,
            false,
        );
        assert_eq!(out.preview.len(), 2);
        let map = out.map.unwrap();
        assert_eq!(map.tile_id(0, 0, 3), 1);
    }

    #[test]
    fn test_fully_off_map_brush_is_noop() {
        let ts = tileset();
        let map = TileMap::new(4, 4);
        let out = brush_tiles(
            &map,
            GridPoint::new(40, 40),
            &single(&ts, 0, 0),
            AnchorSpace::TilesetLocal,
            4,
            false,
        );
        assert!(out.map.is_none());
    }

    #[test]
    fn test_stacking_allocates_layers_up_to_cap() {
        let ts = tileset();
        let mut map = TileMap::new(4, 4);
        for expected_layers in 1..=2 {
            let out = brush_tiles(
                &map,
                GridPoint::new(1, 1),
                &single(&ts, 0, 0),
                AnchorSpace::TilesetLocal,
                2,
                false,
            );
            map = out.map.unwrap();
            assert_eq!(map.layers.len(), expected_layers);
        }
    }

    #[test]
    fn test_overwrite_topmost_at_layer_cap() {
        let ts = tileset();
        let mut map = TileMap::new(4, 4);
        // place ids 1, 2, 3 on the same cell with a cap of 2 layers
        for local_col in 0..3 {
            let out = brush_tiles(
                &map,
                GridPoint::new(1, 1),
                &single(&ts, 0, local_col),
                AnchorSpace::TilesetLocal,
                2,
                false,
            );
            map = out.map.unwrap();
        }
        assert_eq!(map.layers.len(), 2);
        assert_eq!(map.tile_id(0, 1, 1), 1);
        // the second tile was overwritten by the third
        assert_eq!(map.tile_id(1, 1, 1), 3);
    }

    #[test]
    fn test_clipboard_paste_anchors_on_matrix() {
        let catalog = {
            let mut c = TilesetCatalog::default();
            c.add(tileset());
            c
        };
        let ts = &catalog.tilesets()[0];
        // clipboard tiles copied from map cells (5,5) and (5,6)
        let mut a = Tile::new(0, 0, ts);
        a.matrix_row = 5;
        a.matrix_col = 5;
        let mut b = Tile::new(0, 1, ts);
        b.matrix_row = 5;
        b.matrix_col = 6;

        let map = TileMap::new(10, 10);
        let out = brush_tiles(
            &map,
            GridPoint::new(0, 0),
            &[a, b],
            AnchorSpace::MapMatrix,
            4,
            false,
        );
        let map = out.map.unwrap();
        assert_eq!(map.tile_id(0, 0, 0), 1);
        assert_eq!(map.tile_id(0, 0, 1), 2);
    }
}
