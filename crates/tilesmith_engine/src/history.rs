//! Bounded undo/redo over whole-map snapshots

use tilesmith_core::TileMap;

/// A bounded list of map snapshots with a seek cursor.
///
/// Every entry is a fully independent deep copy of the map, so moving the
/// cursor never requires patching the document back together. `seek`
/// points at the current state; it is *shifted* when an undo/redo moved it
/// off the tail, and the next destructive edit then discards the abandoned
/// redo branch (history stays linear).
#[derive(Debug)]
pub struct MapHistory {
    states: Vec<TileMap>,
    capacity: usize,
    seek: usize,
    seek_shifted: bool,
}

impl MapHistory {
    /// Create a history seeded with the initial document state.
    pub fn new(capacity: usize, initial: TileMap) -> Self {
        Self {
            states: vec![initial],
            capacity: capacity.max(1),
            seek: 0,
            seek_shifted: false,
        }
    }

    /// Append a new terminal state.
    ///
    /// Discards the abandoned redo branch first (if an undo happened),
    /// then evicts the oldest state if the capacity is reached.
    pub fn add_state(&mut self, map: TileMap) {
        if self.seek_shifted {
            self.states.truncate(self.seek + 1);
            self.seek_shifted = false;
        }
        if self.states.len() >= self.capacity {
            self.states.remove(0);
        }
        self.states.push(map);
        self.seek = self.states.len() - 1;
    }

    /// Replace the state at the cursor in place.
    ///
    /// Used by drag gestures to coalesce many intermediate edits into one
    /// entry. With at most one stored state this falls back to
    /// [`MapHistory::add_state`] so the very first edit of a fresh
    /// document still gets its own entry to undo back to.
    pub fn update_state(&mut self, map: TileMap) {
        if self.states.len() <= 1 {
            self.add_state(map);
            return;
        }
        let seek = self.seek.min(self.states.len() - 1);
        self.states[seek] = map;
    }

    /// Move one state into the past. Returns false at the boundary.
    pub fn undo(&mut self) -> bool {
        if self.seek == 0 {
            return false;
        }
        self.seek -= 1;
        self.seek_shifted = true;
        true
    }

    /// Move one state into the future. Returns false at the boundary.
    pub fn redo(&mut self) -> bool {
        if self.seek + 1 >= self.states.len() {
            return false;
        }
        self.seek += 1;
        self.seek_shifted = true;
        true
    }

    /// Collapse the history to just the current state.
    ///
    /// Called after loading a project so the previous document's states
    /// cannot be undone into.
    pub fn remove_old_states(&mut self) {
        let current = self.current_map().clone();
        self.states.clear();
        self.states.push(current);
        self.seek = 0;
        self.seek_shifted = false;
    }

    /// The snapshot at the cursor.
    pub fn current_map(&self) -> &TileMap {
        &self.states[self.seek.min(self.states.len() - 1)]
    }

    /// Mutable access to the snapshot at the cursor.
    ///
    /// Only transient, non-undoable state (selections) may be edited this
    /// way; everything else must go through copy-and-commit.
    pub fn current_map_mut(&mut self) -> &mut TileMap {
        let seek = self.seek.min(self.states.len() - 1);
        &mut self.states[seek]
    }

    /// Whether there is an older state to undo into.
    pub fn is_undo_possible(&self) -> bool {
        self.seek > 0
    }

    /// Whether there is a newer state to redo into.
    pub fn is_redo_possible(&self) -> bool {
        self.seek + 1 < self.states.len()
    }

    /// Number of retained states.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilesmith_core::Collider;

    fn map_marked(mark: u32) -> TileMap {
        // use a collider as a cheap distinguishing mark
        let mut map = TileMap::new(4, 4);
        if mark > 0 {
            map.set_collider(0, 0, Some(Collider::from_id(mark, 0, 0).unwrap()));
        }
        map
    }

    fn mark_of(map: &TileMap) -> u32 {
        map.collider(0, 0).map_or(0, |c| c.id)
    }

    #[test]
    fn test_capacity_bound_fifo() {
        let mut history = MapHistory::new(3, map_marked(0));
        for mark in 1..=10 {
            history.add_state(map_marked(mark));
            assert!(history.len() <= 3);
        }
        assert_eq!(mark_of(history.current_map()), 10);
        // oldest surviving state is 8: 0..=7 were evicted first
        while history.undo() {}
        assert_eq!(mark_of(history.current_map()), 8);
    }

    #[test]
    fn test_undo_redo_boundaries() {
        let mut history = MapHistory::new(10, map_marked(0));
        assert!(!history.undo());
        assert!(!history.redo());

        history.add_state(map_marked(1));
        assert!(history.is_undo_possible());
        assert!(history.undo());
        assert_eq!(mark_of(history.current_map()), 0);
        assert!(!history.undo());
        assert!(history.redo());
        assert_eq!(mark_of(history.current_map()), 1);
        assert!(!history.redo());
    }

    #[test]
    fn test_add_after_undo_discards_redo_branch() {
        let mut history = MapHistory::new(10, map_marked(0));
        history.add_state(map_marked(1));
        history.add_state(map_marked(2));
        history.undo();
        assert!(history.is_redo_possible());

        history.add_state(map_marked(3));
        assert!(!history.is_redo_possible());
        assert_eq!(mark_of(history.current_map()), 3);
        history.undo();
        assert_eq!(mark_of(history.current_map()), 1);
    }

    #[test]
    fn test_update_state_coalesces() {
        let mut history = MapHistory::new(10, map_marked(0));
        history.add_state(map_marked(1));
        let before = history.len();
        history.update_state(map_marked(2));
        history.update_state(map_marked(3));
        assert_eq!(history.len(), before);
        assert_eq!(mark_of(history.current_map()), 3);
    }

    #[test]
    fn test_update_state_falls_back_on_fresh_history() {
        let mut history = MapHistory::new(10, map_marked(0));
        history.update_state(map_marked(1));
        // the initial state must survive as an undo target
        assert_eq!(history.len(), 2);
        assert!(history.undo());
        assert_eq!(mark_of(history.current_map()), 0);
    }

    #[test]
    fn test_remove_old_states() {
        let mut history = MapHistory::new(10, map_marked(0));
        history.add_state(map_marked(1));
        history.add_state(map_marked(2));
        history.undo();

        history.remove_old_states();
        assert_eq!(history.len(), 1);
        assert_eq!(mark_of(history.current_map()), 1);
        assert!(!history.is_undo_possible());
        assert!(!history.is_redo_possible());
    }
}
