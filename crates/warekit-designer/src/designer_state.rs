//! Designer session for UI integration.
//!
//! `DesignerSession` composes the placement engine, history, selection,
//! and viewport into the single state object a host editor owns for one
//! editing session. Pointer events arrive in screen coordinates and are
//! converted through the viewport; every accepted mutation lands in the
//! history as a whole-layout snapshot, and every rejection leaves the
//! session exactly as it was.
//!
//! Constructed on editor mount, discarded on unmount; nothing persists
//! unless the host invokes its save hook with [`DesignerSession::start_save`].

use tracing::{debug, warn};
use uuid::Uuid;

use crate::catalog::ComponentKind;
use crate::component::{Layout, LayoutComponent};
use crate::history::History;
use crate::placement::PlacementEngine;
use crate::selection::Selection;
use crate::serialization::LayoutDocument;
use crate::viewport::Viewport;
use warekit_core::{PlacementError, Result};

/// An in-progress drag of one component: screen deltas accumulate in
/// world space and nothing is validated or committed until the pointer is
/// released.
#[derive(Debug, Clone)]
struct DragState {
    id: u64,
    world_dx: f64,
    world_dy: f64,
}

/// One editing session over one warehouse layout.
pub struct DesignerSession {
    warehouse_id: String,
    engine: PlacementEngine,
    history: History,
    selection: Selection,
    viewport: Viewport,
    drag: Option<DragState>,
    saving: bool,
}

impl DesignerSession {
    /// Creates a session for a warehouse the host has not named yet.
    pub fn new(initial: Vec<LayoutComponent>) -> Self {
        Self::with_warehouse_id(Uuid::new_v4().to_string(), initial)
    }

    /// Creates a session seeded with the host's layout; the initial layout
    /// becomes history index 0.
    pub fn with_warehouse_id(warehouse_id: impl Into<String>, initial: Vec<LayoutComponent>) -> Self {
        let layout = Layout::new(initial);
        let engine = PlacementEngine::new(&layout);
        Self {
            warehouse_id: warehouse_id.into(),
            engine,
            history: History::new(layout),
            selection: Selection::new(),
            viewport: Viewport::new(),
            drag: None,
            saving: false,
        }
    }

    /// The current committed layout (`history[cursor]`).
    pub fn layout(&self) -> &Layout {
        self.history.current()
    }

    pub fn warehouse_id(&self) -> &str {
        &self.warehouse_id
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    // ----- component creation -----

    /// Drops a palette item onto the canvas at a screen position.
    pub fn add_component_at(&mut self, kind: ComponentKind, px: f64, py: f64) -> Result<u64> {
        let world = self.viewport.screen_to_world(px, py);
        let (next, id) = self
            .engine
            .create(self.history.current(), kind, world.x, world.y)
            .inspect_err(|err| warn!(%kind, %err, "create rejected"))?;
        self.history.commit(next);
        self.selection.select(id);
        Ok(id)
    }

    /// Auto-places an aisle into a zone at the first free slot.
    pub fn auto_place_in_zone(&mut self, zone_id: u64) -> Result<u64> {
        self.auto_place_child(zone_id, ComponentKind::Aisle)
    }

    /// Auto-places a child of `kind` into a zone.
    pub fn auto_place_child(&mut self, zone_id: u64, kind: ComponentKind) -> Result<u64> {
        let (next, id) = self
            .engine
            .auto_place_child(self.history.current(), zone_id, kind)
            .inspect_err(|err| warn!(zone_id, %err, "auto-place rejected"))?;
        self.history.commit(next);
        self.selection.select(id);
        Ok(id)
    }

    // ----- selection -----

    pub fn selected_id(&self) -> Option<u64> {
        self.selection.selected_id()
    }

    /// Selects the component at a screen position (topmost hit), clearing
    /// the selection over empty canvas.
    pub fn select_at(&mut self, px: f64, py: f64) -> Option<u64> {
        let world = self.viewport.screen_to_world(px, py);
        self.selection.select_at(self.history.current(), world)
    }

    /// Selects a component by id; ignored if the id is not in the layout.
    pub fn select(&mut self, id: u64) {
        if self.layout().contains(id) {
            self.selection.select(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // ----- dragging -----

    /// Starts dragging a component. Returns `false` for a stale id.
    pub fn begin_drag(&mut self, id: u64) -> bool {
        if !self.layout().contains(id) {
            return false;
        }
        self.selection.select(id);
        self.drag = Some(DragState {
            id,
            world_dx: 0.0,
            world_dy: 0.0,
        });
        true
    }

    /// Accumulates a pointer-move delta (screen pixels) into the active
    /// drag. The layout is untouched until the drag ends.
    pub fn drag_by(&mut self, screen_dx: f64, screen_dy: f64) {
        let (dx, dy) = self.viewport.screen_delta_to_world(screen_dx, screen_dy);
        if let Some(drag) = &mut self.drag {
            drag.world_dx += dx;
            drag.world_dy += dy;
        }
    }

    /// The dragged component's provisional (unsnapped) world position, for
    /// rendering the drag preview.
    pub fn drag_position(&self) -> Option<(f64, f64)> {
        let drag = self.drag.as_ref()?;
        let c = self.layout().get(drag.id)?;
        Some((
            f64::from(c.x) + drag.world_dx,
            f64::from(c.y) + drag.world_dy,
        ))
    }

    /// Releases the drag: validates the accumulated delta and commits on
    /// success. On rejection the layout stays at its pre-drag snapshot.
    pub fn end_drag(&mut self) -> Result<()> {
        let Some(drag) = self.drag.take() else {
            return Ok(());
        };
        let next = self
            .engine
            .move_by(self.layout(), drag.id, drag.world_dx, drag.world_dy)
            .inspect_err(|err| warn!(id = drag.id, %err, "drag rejected"))?;
        self.history.commit(next);
        Ok(())
    }

    /// Abandons the drag without committing anything.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    // ----- property editing -----

    /// Moves a component to an explicit position (property panel edit);
    /// snapped and validated like a drag.
    pub fn set_position(&mut self, id: u64, x: i32, y: i32) -> Result<()> {
        let next = self.engine.set_position(self.layout(), id, x, y)?;
        self.history.commit(next);
        Ok(())
    }

    /// Resizes a component; each dimension is snapped with the minimum-size
    /// floor.
    pub fn set_size(&mut self, id: u64, width: i32, height: i32) -> Result<()> {
        let next = self.engine.resize(self.layout(), id, width, height)?;
        self.history.commit(next);
        Ok(())
    }

    /// Rotates a component a quarter turn (swaps width and height).
    pub fn rotate(&mut self, id: u64) -> Result<()> {
        let next = self.engine.rotate(self.layout(), id)?;
        self.history.commit(next);
        Ok(())
    }

    /// Renames a component.
    pub fn rename(&mut self, id: u64, name: &str) -> Result<()> {
        self.update_fields(id, |c| c.name = name.to_string())
    }

    /// Changes a component's display color.
    pub fn set_color(&mut self, id: u64, color: &str) -> Result<()> {
        self.update_fields(id, |c| c.color = color.to_string())
    }

    /// Sets or clears a zone's aisle capacity. The new bound applies to
    /// subsequent placements; existing children are not evicted.
    pub fn set_capacity(&mut self, id: u64, capacity: Option<u32>) -> Result<()> {
        self.update_fields(id, |c| c.capacity = capacity)
    }

    fn update_fields(&mut self, id: u64, apply: impl FnOnce(&mut LayoutComponent)) -> Result<()> {
        if !self.layout().contains(id) {
            return Err(PlacementError::UnknownComponent { id });
        }
        let mut next = self.layout().clone();
        if let Some(c) = next.get_mut(id) {
            apply(c);
        }
        self.history.commit(next);
        Ok(())
    }

    // ----- structural edits -----

    /// Deletes a component; the selection is cleared only if it referenced
    /// the deleted component.
    pub fn delete(&mut self, id: u64) -> Result<()> {
        let next = self
            .engine
            .delete(self.history.current(), id)
            .inspect_err(|err| warn!(id, %err, "delete rejected"))?;
        self.history.commit(next);
        self.selection.retain_valid(self.history.current());
        Ok(())
    }

    /// Deletes the selected component. Returns `false` when nothing is
    /// selected.
    pub fn delete_selected(&mut self) -> bool {
        let Some(id) = self.selection.selected_id() else {
            return false;
        };
        self.delete(id).is_ok()
    }

    /// Duplicates the selected component one grid unit down-right and
    /// selects the clone.
    pub fn duplicate_selected(&mut self) -> Option<u64> {
        let id = self.selection.selected_id()?;
        match self.engine.duplicate(self.history.current(), id) {
            Ok((next, new_id)) => {
                self.history.commit(next);
                self.selection.select(new_id);
                Some(new_id)
            }
            Err(err) => {
                warn!(id, %err, "duplicate rejected");
                None
            }
        }
    }

    // ----- history -----

    /// Steps back one snapshot. Returns `false` at the oldest snapshot.
    pub fn undo(&mut self) -> bool {
        let moved = self.history.undo();
        if moved {
            debug!(cursor = self.history.cursor(), "undo");
            self.selection.retain_valid(self.history.current());
        }
        moved
    }

    /// Steps forward one snapshot. Returns `false` at the newest snapshot.
    pub fn redo(&mut self) -> bool {
        let moved = self.history.redo();
        if moved {
            debug!(cursor = self.history.cursor(), "redo");
            self.selection.retain_valid(self.history.current());
        }
        moved
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // ----- viewport controls -----

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }

    pub fn reset_view(&mut self) {
        self.viewport.reset_view();
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.viewport.pan_by(dx, dy);
    }

    pub fn toggle_grid(&mut self) {
        self.viewport.toggle_grid();
    }

    // ----- save / export -----

    /// Marks the host's save hook as outstanding and hands it the layout
    /// to persist. Only the save affordance is disabled; editing continues.
    pub fn start_save(&mut self) -> Layout {
        self.saving = true;
        self.history.current().clone()
    }

    /// Clears the save busy flag once the host's save hook settles.
    pub fn finish_save(&mut self) {
        self.saving = false;
    }

    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Builds the downloadable export document for the current layout.
    pub fn export_document(&self) -> LayoutDocument {
        LayoutDocument::new(self.warehouse_id.clone(), self.layout())
    }

    /// The export document as formatted JSON.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.export_document().to_json()
    }
}
