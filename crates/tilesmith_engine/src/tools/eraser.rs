//! Eraser: clear tiles and compact emptied layers

use crate::view::GridPoint;
use tilesmith_core::TileMap;
use tracing::debug;

/// Erase the topmost tile under `target`, if any.
///
/// Scans layers top to bottom and clears the first occupied cell found.
/// Returns the mutated copy, or `None` when the point is out of bounds or
/// no layer holds a tile there.
pub fn erase_at(current: &TileMap, target: GridPoint) -> Option<TileMap> {
    if !current.in_bounds(target.row, target.col) {
        return None;
    }
    let (row, col) = (target.row as u32, target.col as u32);

    let mut map = current.clone();
    let hit = (0..map.layers.len())
        .rev()
        .find(|&i| map.layers[i].tile(row, col).is_some())?;

    map.layers[hit].set_tile(row, col, None);
    debug!(layer = hit, row, col, "erased tile");
    compact_layer(&mut map, hit);
    Some(map)
}

/// Erase the tile at a cell of one specific layer (selection erase).
pub fn erase_in_layer(current: &TileMap, row: i32, col: i32, layer: usize) -> Option<TileMap> {
    if !current.in_bounds(row, col) || layer >= current.layers.len() {
        return None;
    }
    let (row, col) = (row as u32, col as u32);
    if current.layers[layer].tile(row, col).is_none() {
        return None;
    }

    let mut map = current.clone();
    map.layers[layer].set_tile(row, col, None);
    compact_layer(&mut map, layer);
    Some(map)
}

/// Remove a layer that just became empty (never layer 0) and keep the
/// selected-layer index pointing at a live layer.
fn compact_layer(map: &mut TileMap, layer: usize) {
    if layer == 0 || !map.layers[layer].is_empty() {
        return;
    }
    map.layers.remove(layer);
    debug!(layer, "removed emptied layer");
    if map.selected_layer == layer {
        map.selected_layer = layer - 1;
    } else if map.selected_layer > layer {
        map.selected_layer -= 1;
    }
}
