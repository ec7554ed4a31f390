//! Clipboard holding detached copies of selected tiles

use tilesmith_core::Tile;

/// The user's copied tiles, detached from any layer.
///
/// Entries are fully resolved tiles stamped with their map matrix indices,
/// which the brush uses as the paste anchor. Content is replaced wholesale
/// on copy; paste never aliases the source tiles.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    tiles: Vec<Tile>,
    paste_pending: bool,
}

impl Clipboard {
    /// Replace the clipboard content.
    pub fn set_tiles(&mut self, tiles: Vec<Tile>) {
        self.tiles = tiles;
    }

    /// The copied tiles, in copy order.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether the brush should place clipboard content instead of the
    /// tileset selection.
    pub fn paste_pending(&self) -> bool {
        self.paste_pending
    }

    pub fn set_paste_pending(&mut self, pending: bool) {
        self.paste_pending = pending;
    }
}
