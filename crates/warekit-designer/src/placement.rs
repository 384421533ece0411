//! Placement and constraint engine.
//!
//! The sole authority for accepting or rejecting geometry changes. Every
//! operation takes the current layout by reference and returns either a new
//! layout snapshot or a [`PlacementError`]; nothing is mutated in place, so
//! a rejection leaves the caller's layout untouched.
//!
//! Constraint model:
//! - committed coordinates and sizes are grid multiples, sizes never below
//!   the minimum
//! - an aisle fully contained in a zone counts against that zone's capacity
//! - aisles never overlap other aisles, anywhere in the layout (collision
//!   is global; only the capacity count is zone-scoped)

use tracing::debug;

use crate::catalog::{defaults_for, ComponentKind};
use crate::component::{Layout, LayoutComponent};
use warekit_core::geometry::{snap_floor, snap_round, snap_size};
use warekit_core::{PlacementError, Rect, Result, GRID_UNIT};

/// Interior margin a zone keeps around auto-placed children.
const ZONE_PADDING: i32 = 20;

/// Vertical strip reserved at the top of a zone for its label.
const ZONE_HEADER_OFFSET: i32 = 40;

/// Validates and commits layout mutations, and owns id assignment.
///
/// Ids are never reused within a session: the counter is seeded past the
/// largest id in the initial layout and only moves forward.
#[derive(Debug, Clone)]
pub struct PlacementEngine {
    next_id: u64,
}

impl PlacementEngine {
    /// Creates an engine whose id counter starts after the seed layout's
    /// largest id.
    pub fn new(seed: &Layout) -> Self {
        Self {
            next_id: seed.max_id() + 1,
        }
    }

    fn generate_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Places a new component of `kind` at a raw (unsnapped) world
    /// position, as when a palette item is dropped on the canvas.
    ///
    /// Returns the new snapshot and the created component's id.
    pub fn create(
        &mut self,
        layout: &Layout,
        kind: ComponentKind,
        raw_x: f64,
        raw_y: f64,
    ) -> Result<(Layout, u64)> {
        let x = snap_floor(raw_x);
        let y = snap_floor(raw_y);
        let d = defaults_for(kind);
        let candidate = Rect::new(x, y, d.width, d.height);

        if kind == ComponentKind::Aisle {
            validate_aisle(layout, candidate, None)?;
        }

        let id = self.generate_id();
        let ordinal = layout.count_of_kind(kind) + 1;
        let component = LayoutComponent {
            id,
            kind,
            name: format!("{}-{}", kind.label(), ordinal),
            x,
            y,
            width: d.width,
            height: d.height,
            color: d.color.to_string(),
            parent_id: None,
            capacity: None,
        };

        debug!(id, %kind, x, y, "created component");
        let mut next = layout.clone();
        next.push(component);
        Ok((next, id))
    }

    /// Moves a component by a raw world-space delta, snapping the result
    /// to the grid and clamping it to non-negative coordinates.
    pub fn move_by(&self, layout: &Layout, id: u64, raw_dx: f64, raw_dy: f64) -> Result<Layout> {
        let component = layout
            .get(id)
            .ok_or(PlacementError::UnknownComponent { id })?;
        let x = snap_round(f64::from(component.x) + raw_dx);
        let y = snap_round(f64::from(component.y) + raw_dy);

        if component.is_aisle() {
            let candidate = Rect::new(x, y, component.width, component.height);
            validate_aisle(layout, candidate, Some(id))?;
        }

        debug!(id, x, y, "moved component");
        let mut next = layout.clone();
        if let Some(c) = next.get_mut(id) {
            c.x = x;
            c.y = y;
        }
        Ok(next)
    }

    /// Sets a component's position directly (property editor), through the
    /// same snap and validation path as a drag.
    pub fn set_position(&self, layout: &Layout, id: u64, x: i32, y: i32) -> Result<Layout> {
        let component = layout
            .get(id)
            .ok_or(PlacementError::UnknownComponent { id })?;
        self.move_by(
            layout,
            id,
            f64::from(x - component.x),
            f64::from(y - component.y),
        )
    }

    /// Resizes a component, snapping each dimension to the grid with the
    /// minimum-size floor. Aisles are re-validated against their zone.
    pub fn resize(&self, layout: &Layout, id: u64, width: i32, height: i32) -> Result<Layout> {
        let component = layout
            .get(id)
            .ok_or(PlacementError::UnknownComponent { id })?;
        let width = snap_size(width);
        let height = snap_size(height);

        if component.is_aisle() {
            let candidate = Rect::new(component.x, component.y, width, height);
            validate_aisle(layout, candidate, Some(id))?;
        }

        debug!(id, width, height, "resized component");
        let mut next = layout.clone();
        if let Some(c) = next.get_mut(id) {
            c.width = width;
            c.height = height;
        }
        Ok(next)
    }

    /// Rotates a component a quarter turn by swapping width and height.
    pub fn rotate(&self, layout: &Layout, id: u64) -> Result<Layout> {
        let component = layout
            .get(id)
            .ok_or(PlacementError::UnknownComponent { id })?;
        self.resize(layout, id, component.height, component.width)
    }

    /// Places a new child of `kind` into a zone at the first free slot,
    /// scanning the zone interior row-major from the top-left.
    ///
    /// Returns the new snapshot and the child's id.
    pub fn auto_place_child(
        &mut self,
        layout: &Layout,
        zone_id: u64,
        kind: ComponentKind,
    ) -> Result<(Layout, u64)> {
        let zone = layout
            .get(zone_id)
            .filter(|c| c.is_zone())
            .ok_or(PlacementError::UnknownComponent { id: zone_id })?;
        let zone_rect = zone.rect();

        // Aisles already inside this zone: both the capacity gate and the
        // slot scan test against these.
        let children: Vec<&LayoutComponent> = layout
            .iter()
            .filter(|c| c.is_aisle() && zone_rect.contains_rect(&c.rect()))
            .collect();

        if kind == ComponentKind::Aisle {
            let capacity = zone.effective_capacity();
            if children.len() >= capacity as usize {
                return Err(PlacementError::CapacityFull {
                    count: children.len(),
                    capacity,
                });
            }
        }

        let d = defaults_for(kind);
        let x_min = zone_rect.x + ZONE_PADDING;
        let x_max = zone_rect.right() - d.width - ZONE_PADDING;
        let y_min = zone_rect.y + ZONE_HEADER_OFFSET;
        let y_max = zone_rect.bottom() - d.height - ZONE_PADDING;

        let mut slot = None;
        'scan: for y in (y_min..=y_max).step_by(GRID_UNIT as usize) {
            for x in (x_min..=x_max).step_by(GRID_UNIT as usize) {
                let candidate = Rect::new(x, y, d.width, d.height);
                if !children.iter().any(|c| candidate.intersects(&c.rect())) {
                    slot = Some(candidate);
                    break 'scan;
                }
            }
        }
        let slot = slot.ok_or(PlacementError::NoSpaceAvailable { zone: zone_id })?;

        let id = self.generate_id();
        let ordinal = layout.count_of_kind(kind) + 1;
        let component = LayoutComponent {
            id,
            kind,
            name: format!("{}-{}", kind.label(), ordinal),
            x: slot.x,
            y: slot.y,
            width: slot.width,
            height: slot.height,
            color: d.color.to_string(),
            parent_id: Some(zone_id),
            capacity: None,
        };

        debug!(id, zone_id, x = slot.x, y = slot.y, "auto-placed child");
        let mut next = layout.clone();
        next.push(component);
        Ok((next, id))
    }

    /// Removes a component. Children keep their (now dangling) `parent_id`;
    /// the back-reference is informational only.
    pub fn delete(&self, layout: &Layout, id: u64) -> Result<Layout> {
        let mut next = layout.clone();
        next.remove(id)
            .ok_or(PlacementError::UnknownComponent { id })?;
        debug!(id, "deleted component");
        Ok(next)
    }

    /// Clones a component one grid unit down-right with a fresh id. All
    /// other fields, `parent_id` included, carry over unchanged.
    ///
    /// The clone is committed without a collision check; the first move of
    /// the clone goes through validation as usual.
    pub fn duplicate(&mut self, layout: &Layout, id: u64) -> Result<(Layout, u64)> {
        let source = layout
            .get(id)
            .ok_or(PlacementError::UnknownComponent { id })?;
        let mut clone = source.clone();
        clone.id = self.generate_id();
        clone.name = format!("{} copy", source.name);
        clone.x += GRID_UNIT;
        clone.y += GRID_UNIT;

        debug!(id = clone.id, source = id, "duplicated component");
        let new_id = clone.id;
        let mut next = layout.clone();
        next.push(clone);
        Ok((next, new_id))
    }
}

/// Shared containment / capacity / collision check for a candidate aisle
/// rectangle. `exclude` removes the moved/resized aisle itself from the
/// capacity count and the obstacle set.
fn validate_aisle(layout: &Layout, candidate: Rect, exclude: Option<u64>) -> Result<()> {
    let others = || {
        layout
            .iter()
            .filter(move |c| c.is_aisle() && Some(c.id) != exclude)
    };

    // Containment: the first zone fully enclosing the candidate scopes the
    // capacity check. An aisle outside every zone is unconstrained by
    // capacity.
    let enclosing = layout
        .iter()
        .filter(|c| c.is_zone())
        .find(|z| z.rect().contains_rect(&candidate));

    if let Some(zone) = enclosing {
        let zone_rect = zone.rect();
        let count = others()
            .filter(|c| zone_rect.contains_rect(&c.rect()))
            .count();
        let capacity = zone.effective_capacity();
        if count >= capacity as usize {
            return Err(PlacementError::CapacityFull { count, capacity });
        }
    }

    // Collision is global: an aisle may not overlap any other aisle, in or
    // out of a zone.
    if let Some(hit) = others().find(|c| candidate.intersects(&c.rect())) {
        return Err(PlacementError::Collision { other: hit.id });
    }

    Ok(())
}
