//! Change notifications from engine to view
//!
//! Instead of observer mixins, the engine pushes events into a queue the
//! view drains after each call into the editor. Events carry just enough
//! context for the view to decide between a full re-layout and a repaint.

use std::collections::VecDeque;

/// Something the view layer may want to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    /// The history moved: a commit, undo, redo or collapse
    HistoryChanged,
    /// Document-level state changed; `zoom` hints that a re-layout
    /// (not just a repaint) is needed
    DocumentChanged { zoom: bool },
    /// The saved/dirty flag flipped
    SavedStateChanged { saved: bool },
    /// Active tool or tool options changed (includes preview updates)
    ToolChanged,
    /// Clipboard content or paste-pending flag changed
    ClipboardChanged,
    /// The tileset-side selection changed
    TilesetSelectionChanged,
    /// The map-side selection changed
    MapSelectionChanged,
}

/// FIFO queue of pending notifications.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<EditorEvent>,
}

impl EventQueue {
    pub fn push(&mut self, event: EditorEvent) {
        self.events.push_back(event);
    }

    /// Take all pending events, oldest first.
    pub fn drain(&mut self) -> Vec<EditorEvent> {
        self.events.drain(..).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
