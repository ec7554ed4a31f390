//! Core data structures for the tilesmith map editor
//!
//! This crate provides the fundamental types for representing layered
//! tile-based maps:
//! - `TileMap` - A complete editable document (layers + colliders)
//! - `Layer` - A single z-ordered plane of tiles
//! - `Tile` - One painted cell, resolved against a tileset
//! - `Collider` - A physical or trigger marker on one cell
//! - `Tileset` / `TilesetCatalog` - Tile sources and global-id resolution
//! - `Project` - Self-contained bundle of a map and its tilesets
//!
//! The persistence interface lives in [`codec`]: layers serialize to
//! newline-delimited, comma-separated grids of global tile ids and
//! colliders to a comma-separated id grid.

mod collider;
mod error;
mod layer;
mod map;
mod project;
mod tile;
mod tileset;

pub mod codec;

pub use collider::{Collider, COLLIDER_PHYSICAL, COLLIDER_TRIGGER};
pub use error::{MapLoadError, TileResolutionError};
pub use layer::Layer;
pub use map::TileMap;
pub use project::Project;
pub use tile::Tile;
pub use tileset::{TileLocation, Tileset, TilesetCatalog};

/// Global tile id reserved for "empty cell" in serialized layers.
pub const EMPTY_TILE_ID: u32 = 0;
