//! Selection state and hit testing.
//!
//! At most one component is selected at a time (the property panel edits a
//! single component). Hit testing picks the topmost component under the
//! pointer, i.e. the last one in draw order.

use crate::component::Layout;
use warekit_core::Point;

/// Tracks the primary selected component id.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    selected_id: Option<u64>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The selected component id, if any.
    pub fn selected_id(&self) -> Option<u64> {
        self.selected_id
    }

    pub fn select(&mut self, id: u64) {
        self.selected_id = Some(id);
    }

    pub fn clear(&mut self) {
        self.selected_id = None;
    }

    /// Drops the selection if the referenced component is no longer in the
    /// layout (deleted, or undone past its creation).
    pub fn retain_valid(&mut self, layout: &Layout) {
        if let Some(id) = self.selected_id {
            if !layout.contains(id) {
                self.selected_id = None;
            }
        }
    }

    /// Selects the topmost component whose rectangle contains the world
    /// point; clears the selection on empty canvas. Returns the new
    /// selection.
    pub fn select_at(&mut self, layout: &Layout, point: Point) -> Option<u64> {
        self.selected_id = layout
            .iter()
            .rev()
            .find(|c| c.rect().contains_point(point))
            .map(|c| c.id);
        self.selected_id
    }
}
