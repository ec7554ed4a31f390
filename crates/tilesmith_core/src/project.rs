//! Project - bundles a map with its tileset catalog for saving/loading
//!
//! The project is the self-contained unit of persistence: the map, every
//! tileset it references, and the grid configuration. The JSON form is
//! produced with serde; the layer/collider grids themselves also have a
//! plain-text interchange form in [`crate::codec`].

use crate::{TileMap, TilesetCatalog};
use serde::{Deserialize, Serialize};

/// A self-contained map project.
///
/// `map` holds the last persisted (or freshly created) document; the live,
/// editable snapshot belongs to the history manager. `saved` tracks
/// whether the current snapshot still deep-equals `map`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Format version for future compatibility
    pub version: u32,
    /// Project name
    pub name: String,
    /// Edge length of a map tile in pixels
    pub tile_size: u32,
    /// Map width in tiles
    pub width: u32,
    /// Map height in tiles
    pub height: u32,
    /// Tilesets available to the map
    pub tilesets: TilesetCatalog,
    /// The persisted map
    pub map: TileMap,
    /// Whether the document is up to date with its saved file
    #[serde(skip)]
    pub saved: bool,
}

impl Project {
    /// Create a new empty project.
    pub fn new(
        name: String,
        tile_size: u32,
        width: u32,
        height: u32,
        tilesets: TilesetCatalog,
    ) -> Self {
        Self {
            version: 1,
            name,
            tile_size,
            width,
            height,
            tilesets,
            map: TileMap::new(width, height),
            saved: false,
        }
    }

    /// Assemble a project around an already-loaded map.
    pub fn from_map(
        name: String,
        tile_size: u32,
        map: TileMap,
        tilesets: TilesetCatalog,
    ) -> Self {
        Self {
            version: 1,
            name,
            tile_size,
            width: map.width,
            height: map.height,
            tilesets,
            map,
            saved: true,
        }
    }

    /// Serialize the project to pretty JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load a project from its JSON form. Loaded projects start saved.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        let mut project: Self = serde_json::from_str(text)?;
        project.saved = true;
        Ok(project)
    }
}
