//! Line-grid persistence interface for maps
//!
//! Layers interchange as newline-delimited, comma-separated grids of
//! global tile ids (0 = empty cell); colliders as one comma-separated
//! grid of collider ids (0 = none, 1 = physical, 2 = trigger). Loading is
//! all-or-nothing: a single unresolvable tile id aborts the whole map.

use crate::{Collider, Layer, MapLoadError, Tile, TileMap, TilesetCatalog, EMPTY_TILE_ID};

/// Serialize every layer of a map to its id-grid string, bottom first.
pub fn serialize_layers(map: &TileMap) -> Vec<String> {
    map.layers
        .iter()
        .map(|layer| serialize_layer(layer))
        .collect()
}

fn serialize_layer(layer: &Layer) -> String {
    let mut out = String::new();
    for row in 0..layer.height {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..layer.width {
            if col > 0 {
                out.push(',');
            }
            let id = layer.tile(row, col).map_or(EMPTY_TILE_ID, |t| t.id);
            out.push_str(&id.to_string());
        }
    }
    out
}

/// Serialize the collider grid of a map to its id-grid string.
pub fn serialize_colliders(map: &TileMap) -> String {
    let mut out = String::new();
    for row in 0..map.height {
        if row > 0 {
            out.push('\n');
        }
        for col in 0..map.width {
            if col > 0 {
                out.push(',');
            }
            let id = map.collider(row, col).map_or(0, |c| c.id);
            out.push_str(&id.to_string());
        }
    }
    out
}

/// Reconstruct a map from serialized layer grids and a collider grid.
///
/// Map dimensions are taken from the first layer's grid, and every layer
/// grid must measure exactly that: a missing row or a ragged line aborts
/// the load rather than silently dropping cells. Every non-zero tile id
/// must resolve against the catalog; otherwise the whole load is aborted
/// and no map is returned. The selected layer of the result is 0.
pub fn create_map(
    layers: &[String],
    catalog: &TilesetCatalog,
    colliders: &str,
) -> Result<TileMap, MapLoadError> {
    let first = layers.first().ok_or(MapLoadError::EmptyLayer { layer: 0 })?;
    let (width, height) = grid_dimensions(first, 0)?;

    let mut map_layers = Vec::with_capacity(layers.len());
    for (layer_index, text) in layers.iter().enumerate() {
        let mut layer = Layer::new(layer_index as f32, 1.0, width, height);
        let rows: Vec<&str> = lines(text).collect();
        if rows.len() != height as usize {
            return Err(MapLoadError::LayerShape {
                layer: layer_index,
                width,
                height,
            });
        }
        for (row, line) in rows.iter().enumerate() {
            let cells: Vec<&str> = line.split(',').collect();
            if cells.len() != width as usize {
                return Err(MapLoadError::LayerShape {
                    layer: layer_index,
                    width,
                    height,
                });
            }
            for (col, cell) in cells.iter().enumerate() {
                let id: u32 =
                    cell.trim()
                        .parse()
                        .map_err(|_| MapLoadError::InvalidTileId {
                            layer: layer_index,
                            row,
                            col,
                            value: cell.trim().to_string(),
                        })?;
                if id == EMPTY_TILE_ID {
                    continue;
                }
                let location =
                    catalog
                        .resolve(id)
                        .map_err(|source| MapLoadError::UnresolvedTile {
                            layer: layer_index,
                            row,
                            col,
                            source,
                        })?;
                let tile = Tile::resolved(
                    location.local_row as i32,
                    location.local_col as i32,
                    location.tileset,
                    id,
                    row as i32,
                    col as i32,
                );
                layer.set_tile(row as u32, col as u32, Some(tile));
            }
        }
        map_layers.push(layer);
    }

    let colliders = parse_colliders(colliders, width, height)?;
    Ok(TileMap::from_parts(width, height, map_layers, 0, colliders))
}

/// Parse a collider id grid into a row-major collider vector.
///
/// Absent collider data (an all-whitespace string) loads as an unmarked
/// grid; anything else must measure exactly `width` x `height`.
pub fn parse_colliders(
    text: &str,
    width: u32,
    height: u32,
) -> Result<Vec<Option<Collider>>, MapLoadError> {
    let mut grid = vec![None; (width * height) as usize];
    let rows: Vec<&str> = lines(text).collect();
    if rows.is_empty() {
        return Ok(grid);
    }
    if rows.len() != height as usize {
        return Err(MapLoadError::ColliderShape { width, height });
    }
    for (row, line) in rows.iter().enumerate() {
        let cells: Vec<&str> = line.split(',').collect();
        if cells.len() != width as usize {
            return Err(MapLoadError::ColliderShape { width, height });
        }
        for (col, cell) in cells.iter().enumerate() {
            let id: u32 = cell
                .trim()
                .parse()
                .map_err(|_| MapLoadError::InvalidColliderId {
                    row,
                    col,
                    value: cell.trim().to_string(),
                })?;
            grid[row * width as usize + col] = Collider::from_id(id, row as u32, col as u32);
        }
    }
    Ok(grid)
}

fn grid_dimensions(text: &str, layer: usize) -> Result<(u32, u32), MapLoadError> {
    let mut height = 0u32;
    let mut width = 0u32;
    for line in lines(text) {
        height += 1;
        if height == 1 {
            width = line.split(',').count() as u32;
        }
    }
    if width == 0 || height == 0 {
        return Err(MapLoadError::EmptyLayer { layer });
    }
    Ok((width, height))
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}
