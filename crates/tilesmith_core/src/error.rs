//! Error types for map loading and tile resolution

use thiserror::Error;

/// A global tile id that no tileset in the catalog claims.
///
/// Callers must abort the surrounding operation (typically a map load)
/// instead of constructing a partial map.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("tile id {id} is not claimed by any tileset")]
pub struct TileResolutionError {
    /// The unresolvable global tile id
    pub id: u32,
}

/// Failure while reconstructing a map from serialized layer grids.
///
/// Any of these aborts the whole load; no partial map is returned.
#[derive(Debug, Error)]
pub enum MapLoadError {
    /// A cell referenced a tile id outside every tileset's id range
    #[error("layer {layer}, cell ({row}, {col}): {source}")]
    UnresolvedTile {
        layer: usize,
        row: usize,
        col: usize,
        #[source]
        source: TileResolutionError,
    },
    /// A cell held something that does not parse as a tile id
    #[error("layer {layer}, cell ({row}, {col}): invalid tile id {value:?}")]
    InvalidTileId {
        layer: usize,
        row: usize,
        col: usize,
        value: String,
    },
    /// A collider cell held something that does not parse as a collider id
    #[error("collider cell ({row}, {col}): invalid collider id {value:?}")]
    InvalidColliderId { row: usize, col: usize, value: String },
    /// A layer grid's shape does not match the map dimensions
    #[error("layer {layer}: grid is not {width}x{height}")]
    LayerShape { layer: usize, width: u32, height: u32 },
    /// The collider grid's shape does not match the map dimensions
    #[error("collider grid is not {width}x{height}")]
    ColliderShape { width: u32, height: u32 },
    /// A serialized layer contained no rows at all
    #[error("layer {layer} is empty")]
    EmptyLayer { layer: usize },
}
