//! Map editing engine for tilesmith
//!
//! Everything between the input layer and the data model lives here:
//! - [`MapEditor`] - the long-lived editing context (replaces the
//!   singletons of classic editors with one injectable object)
//! - [`MapHistory`] - bounded undo/redo over whole-map snapshots
//! - [`tools`] - brush, eraser, selection and collider algorithms
//! - [`Clipboard`] - detached tile list for copy/cut/paste
//! - [`EditorEvent`] - change notifications drained by the view layer
//!
//! The engine is single-threaded: every tool operation copies the current
//! snapshot, mutates the copy and hands it back to history in one call, so
//! snapshots pinned by undo are never aliased by an in-progress edit.

mod clipboard;
mod config;
mod editor;
mod events;
mod history;
mod view;

pub mod tools;

pub use clipboard::Clipboard;
pub use config::EditorConfig;
pub use editor::MapEditor;
pub use events::EditorEvent;
pub use history::MapHistory;
pub use tools::{Modifiers, ToolKind, ToolState};
pub use view::{GridPoint, PixelPoint, ViewState};
