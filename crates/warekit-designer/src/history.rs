//! Linear snapshot history for undo/redo.
//!
//! An array of whole-layout snapshots plus a cursor. Commits truncate
//! everything after the cursor before appending, so the history never
//! branches; undo and redo move the cursor only and never mutate the
//! sequence.

use crate::component::Layout;

/// The snapshot sequence and cursor. "Now" is always `snapshots[cursor]`.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Layout>,
    cursor: usize,
}

impl History {
    /// Seeds the history with the initial layout at index 0.
    pub fn new(initial: Layout) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
        }
    }

    /// The layout at the cursor.
    pub fn current(&self) -> &Layout {
        &self.snapshots[self.cursor]
    }

    /// Appends a committed snapshot, discarding any redo tail beyond the
    /// cursor.
    pub fn commit(&mut self, next: Layout) {
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(next);
        self.cursor = self.snapshots.len() - 1;
    }

    /// Steps the cursor back one snapshot. Returns `false` (and does
    /// nothing) at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Steps the cursor forward one snapshot. Returns `false` (and does
    /// nothing) at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        if self.cursor + 1 == self.snapshots.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of snapshots held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ComponentKind;
    use crate::component::LayoutComponent;

    fn layout_with(id: u64) -> Layout {
        Layout::new(vec![LayoutComponent {
            id,
            kind: ComponentKind::Bin,
            name: format!("BIN-{id}"),
            x: 0,
            y: 0,
            width: 40,
            height: 40,
            color: "#bbf7d0".to_string(),
            parent_id: None,
            capacity: None,
        }])
    }

    #[test]
    fn fresh_session_has_no_undo_or_redo() {
        let mut h = History::new(Layout::default());
        assert!(!h.can_undo());
        assert!(!h.can_redo());
        assert!(!h.undo());
        assert!(!h.redo());
        assert_eq!(h.cursor(), 0);
    }

    #[test]
    fn undo_redo_round_trip_restores_exact_layout() {
        let mut h = History::new(Layout::default());
        h.commit(layout_with(1));
        let before = h.current().clone();
        assert!(h.undo());
        assert_eq!(h.current(), &Layout::default());
        assert!(h.redo());
        assert_eq!(h.current(), &before);
    }

    #[test]
    fn commit_after_undo_discards_redo_tail() {
        let mut h = History::new(Layout::default());
        h.commit(layout_with(1));
        h.commit(layout_with(2));
        h.commit(layout_with(3));
        assert_eq!(h.len(), 4);

        h.undo();
        h.undo();
        assert_eq!(h.cursor(), 1);

        h.commit(layout_with(9));
        assert_eq!(h.len(), 3);
        assert!(!h.redo());
        assert_eq!(h.current(), &layout_with(9));
    }
}
