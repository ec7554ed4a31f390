//! The long-lived editing context tying tools, history and clipboard together

use crate::clipboard::Clipboard;
use crate::config::EditorConfig;
use crate::events::{EditorEvent, EventQueue};
use crate::history::MapHistory;
use crate::tools::brush::{brush_tiles, AnchorSpace};
use crate::tools::{collider, eraser, select, Modifiers, ToolKind, ToolState};
use crate::view::{PixelPoint, ViewState};
use tilesmith_core::{Project, Tile, TileMap, Tileset};
use tracing::{debug, info};

/// One open document and everything needed to edit it.
///
/// Replaces the global singletons of classic tile editors: the editor
/// owns its config, history, tool state, clipboard and tileset catalog,
/// so several documents can coexist. All mutation goes copy-then-commit
/// through the history manager; the view layer drains [`EditorEvent`]s
/// after each call to know what to redraw.
///
/// Gesture protocol: drags coalesce into the current history entry; the
/// input layer calls [`MapEditor::release`] on mouse-up, which makes the
/// next mutating tool call open a fresh entry.
#[derive(Debug)]
pub struct MapEditor {
    config: EditorConfig,
    project: Project,
    history: MapHistory,
    tool: ToolState,
    clipboard: Clipboard,
    tileset_selection: Vec<Tile>,
    pending_commit: bool,
    events: EventQueue,
}

impl MapEditor {
    /// Open a project for editing.
    pub fn new(project: Project, config: EditorConfig) -> Self {
        let history = MapHistory::new(config.max_history, project.map.clone());
        Self {
            config,
            project,
            history,
            tool: ToolState::default(),
            clipboard: Clipboard::default(),
            tileset_selection: Vec::new(),
            pending_commit: false,
            events: EventQueue::default(),
        }
    }

    /// The snapshot being displayed and edited.
    pub fn current_map(&self) -> &TileMap {
        self.history.current_map()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &MapHistory {
        &self.history
    }

    /// Tiles selected in the tileset view (the default brush source).
    pub fn tileset_selection(&self) -> &[Tile] {
        &self.tileset_selection
    }

    /// Take all pending change notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<EditorEvent> {
        self.events.drain()
    }

    // ---- tool + view plumbing ------------------------------------------

    /// Switch the active tool.
    pub fn set_tool(&mut self, kind: ToolKind) {
        self.tool.current = kind;
        self.events.push(EditorEvent::ToolChanged);
    }

    /// Collider tool option: place triggers instead of physical colliders.
    pub fn set_trigger(&mut self, trigger: bool) {
        self.tool.trigger = trigger;
        self.events.push(EditorEvent::ToolChanged);
    }

    /// The input layer reports a mouse release: the gesture is over, the
    /// next mutating tool call commits a new history entry.
    pub fn release(&mut self) {
        self.pending_commit = true;
    }

    /// Let the input layer signal a viewport change (e.g. zoom) so views
    /// observing this editor re-layout.
    pub fn emit_view_changed(&mut self, zoom: bool) {
        self.events.push(EditorEvent::DocumentChanged { zoom });
    }

    // ---- painting -------------------------------------------------------

    /// Brush at a document pixel point.
    ///
    /// Paints the clipboard content when a paste is pending, otherwise the
    /// tileset selection. Hover invocations only refresh the preview.
    pub fn brush(&mut self, point: PixelPoint, view: ViewState, hover: bool) {
        let target = view.grid_at(point, self.config.tile_size);

        let (source, space) = if self.clipboard.paste_pending() && !self.clipboard.is_empty() {
            (self.clipboard.tiles().to_vec(), AnchorSpace::MapMatrix)
        } else {
            (self.tileset_selection.clone(), AnchorSpace::TilesetLocal)
        };
        if source.is_empty() {
            return;
        }

        let outcome = brush_tiles(
            self.current_map(),
            target,
            &source,
            space,
            self.config.max_layers,
            hover,
        );
        self.tool.preview = outcome.preview;

        match outcome.map {
            Some(map) => self.commit(map),
            None => self.events.push(EditorEvent::ToolChanged),
        }
    }

    /// Erase at a document pixel point. Hover only moves the preview cell.
    pub fn erase(&mut self, point: PixelPoint, view: ViewState, hover: bool) {
        if !view.on_viewport {
            return;
        }
        let target = view.grid_at(point, self.config.tile_size);
        self.tool.erase_preview = target;
        if hover {
            self.events.push(EditorEvent::ToolChanged);
            return;
        }
        match eraser::erase_at(self.current_map(), target) {
            Some(map) => self.commit(map),
            None => self.events.push(EditorEvent::ToolChanged),
        }
    }

    /// Toggle a collider at a document pixel point.
    pub fn toggle_collider(&mut self, point: PixelPoint, view: ViewState, hover: bool) {
        if !view.on_viewport || hover {
            return;
        }
        let target = view.grid_at(point, self.config.tile_size);
        if let Some(map) = collider::toggle_collider(self.current_map(), target, self.tool.trigger)
        {
            self.commit(map);
        }
    }

    // ---- selection ------------------------------------------------------

    /// Point/rect selection on the map viewport.
    pub fn select_map_tiles(&mut self, click: PixelPoint, view: ViewState, modifiers: Modifiers) {
        let Some(tileset) = self.project.tilesets.current_tileset().cloned() else {
            return;
        };
        if !modifiers.shift {
            self.tool.shift_anchor = Some(click);
        }
        let tile_size = view.tile_zoomed(self.config.tile_size);
        let current = self.current_map();
        let (cols, rows) = (current.width as i32, current.height as i32);
        let shift_anchor = self.tool.shift_anchor;
        let selection = &mut self.history.current_map_mut().selected_mut().selection;
        select::select_tile(
            click,
            &tileset,
            selection,
            shift_anchor,
            modifiers,
            tile_size,
            cols,
            rows,
        );
        self.events.push(EditorEvent::MapSelectionChanged);
    }

    /// Point/rect selection on the tileset viewport.
    ///
    /// Clicking into the tileset also ends a pending paste and re-arms the
    /// brush with tileset content.
    pub fn select_tileset_tiles(&mut self, click: PixelPoint, modifiers: Modifiers) {
        let Some(tileset) = self.project.tilesets.current_tileset().cloned() else {
            return;
        };
        if self.clipboard.paste_pending() {
            self.clipboard.set_paste_pending(false);
            self.events.push(EditorEvent::ClipboardChanged);
        }
        if !modifiers.shift {
            self.tool.shift_anchor = Some(click);
        }
        let shift_anchor = self.tool.shift_anchor;
        select::select_tile(
            click,
            &tileset,
            &mut self.tileset_selection,
            shift_anchor,
            modifiers,
            tileset.tile_size as i32,
            tileset.columns as i32,
            tileset.rows as i32,
        );
        self.tool.current = ToolKind::Brush;
        self.events.push(EditorEvent::TilesetSelectionChanged);
        self.events.push(EditorEvent::ToolChanged);
    }

    /// Switch the tileset shown in the tileset view.
    ///
    /// The tileset-side selection is cleared: its entries index the
    /// previous tileset. Out-of-range indices are ignored.
    pub fn select_tileset(&mut self, index: usize) {
        if index >= self.project.tilesets.tilesets().len()
            || index == self.project.tilesets.current_index()
        {
            return;
        }
        self.project.tilesets.set_current(index);
        self.tileset_selection.clear();
        self.events.push(EditorEvent::TilesetSelectionChanged);
        self.events.push(EditorEvent::DocumentChanged { zoom: false });
    }

    /// Switch the layer subsequent edits apply to.
    pub fn select_layer(&mut self, index: usize) {
        let map = self.history.current_map_mut();
        if index < map.layers.len() {
            map.selected_layer = index;
            self.events.push(EditorEvent::DocumentChanged { zoom: false });
        }
    }

    // ---- clipboard ------------------------------------------------------

    /// Copy the selected tiles of the selected layer to the clipboard.
    ///
    /// Selection entries are placeholders; the authoritative tile at each
    /// selected cell is looked up and stamped with its matrix position as
    /// the paste anchor. The clipboard is replaced wholesale - an empty
    /// selection yields an empty clipboard.
    pub fn copy_selection(&mut self) {
        let map = self.history.current_map();
        let layer = map.selected();
        let mut copied = Vec::new();
        for placeholder in &layer.selection {
            let (row, col) = (placeholder.local_row, placeholder.local_col);
            if !map.in_bounds(row, col) {
                continue;
            }
            if let Some(tile) = layer.tile(row as u32, col as u32) {
                let mut tile = tile.clone();
                tile.matrix_row = row;
                tile.matrix_col = col;
                copied.push(tile);
            }
        }
        debug!(count = copied.len(), "copied tiles to clipboard");
        self.clipboard.set_tiles(copied);
        self.events.push(EditorEvent::ClipboardChanged);
    }

    /// Arm a paste: the brush will place clipboard content until the user
    /// clicks back into the tileset view. Empty clipboard is a no-op.
    pub fn paste_from_clipboard(&mut self) {
        if self.clipboard.is_empty() {
            return;
        }
        self.clipboard.set_paste_pending(true);
        self.tool.current = ToolKind::Brush;
        self.events.push(EditorEvent::ClipboardChanged);
        self.events.push(EditorEvent::ToolChanged);
    }

    /// Erase every selected tile of the selected layer.
    ///
    /// Stops early if the layer itself is compacted away by the erase.
    pub fn erase_selection(&mut self) {
        let layer_index = self.current_map().selected_layer;
        let selection: Vec<(i32, i32)> = self
            .current_map()
            .selected()
            .selection
            .iter()
            .map(|t| (t.local_row, t.local_col))
            .collect();

        for (row, col) in selection {
            if let Some(map) = eraser::erase_in_layer(self.current_map(), row, col, layer_index) {
                self.commit(map);
            }
            if self.current_map().selected_layer != layer_index {
                break;
            }
        }
    }

    /// Cut: copy the selection, then erase it.
    pub fn cut_selection(&mut self) {
        self.copy_selection();
        self.erase_selection();
    }

    // ---- history --------------------------------------------------------

    /// Step one state into the past, if possible.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            self.events.push(EditorEvent::HistoryChanged);
        }
        moved
    }

    /// Step one state into the future, if possible.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            self.events.push(EditorEvent::HistoryChanged);
        }
        moved
    }

    pub fn is_undo_possible(&self) -> bool {
        self.history.is_undo_possible()
    }

    pub fn is_redo_possible(&self) -> bool {
        self.history.is_redo_possible()
    }

    // ---- document lifecycle ---------------------------------------------

    /// Replace the open document, collapsing history so the previous
    /// project cannot be undone into.
    pub fn load_project(&mut self, project: Project) {
        info!(name = %project.name, "loading project");
        self.history = MapHistory::new(self.config.max_history, project.map.clone());
        self.history.remove_old_states();
        self.project = project;
        self.project.saved = true;
        self.clipboard = Clipboard::default();
        self.tileset_selection.clear();
        self.tool = ToolState::default();
        self.pending_commit = false;
        self.events.push(EditorEvent::HistoryChanged);
        self.events.push(EditorEvent::DocumentChanged { zoom: false });
    }

    /// Record that the current snapshot was persisted.
    pub fn mark_saved(&mut self) {
        self.project.map = self.current_map().clone();
        if !self.project.saved {
            self.project.saved = true;
            self.events.push(EditorEvent::SavedStateChanged { saved: true });
        }
    }

    /// Resize the document; a discrete, undoable operation.
    pub fn resize_map(&mut self, width: u32, height: u32) {
        let mut map = self.current_map().clone();
        map.resize(width, height);
        self.project.width = width;
        self.project.height = height;
        self.history.add_state(map);
        self.pending_commit = false;
        self.events.push(EditorEvent::HistoryChanged);
        self.after_commit();
    }

    /// Import a tileset, assigning it the next free global id range.
    /// Returns the first global id of the new tileset.
    pub fn add_tileset(
        &mut self,
        name: String,
        tile_size: u32,
        image_width: u32,
        image_height: u32,
        image_path: String,
    ) -> u32 {
        let first_id = self.project.tilesets.calculate_first_id();
        let tileset = Tileset::new(name, tile_size, image_width, image_height, image_path, first_id);
        self.project.tilesets.add(tileset);
        self.events.push(EditorEvent::DocumentChanged { zoom: false });
        first_id
    }

    // ---- internals ------------------------------------------------------

    /// Hand a mutated copy to history: a fresh entry right after a mouse
    /// release, coalesced into the current entry mid-gesture.
    fn commit(&mut self, map: TileMap) {
        if self.pending_commit {
            self.history.add_state(map);
            self.pending_commit = false;
        } else {
            self.history.update_state(map);
        }
        self.events.push(EditorEvent::HistoryChanged);
        self.after_commit();
    }

    fn after_commit(&mut self) {
        let saved = *self.history.current_map() == self.project.map;
        if saved != self.project.saved {
            self.project.saved = saved;
            self.events.push(EditorEvent::SavedStateChanged { saved });
        }
        self.events.push(EditorEvent::DocumentChanged { zoom: false });
    }
}
