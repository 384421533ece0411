//! Layout data model: placed components and the layout snapshot.

use serde::{Deserialize, Serialize};

use crate::catalog::{ComponentKind, DEFAULT_ZONE_CAPACITY};
use warekit_core::Rect;

/// A placed rectangle on the canvas.
///
/// The serde representation is camelCase because the JSON document format
/// is shared with the host warehouse-management application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutComponent {
    /// Unique within the layout for the lifetime of the session; never reused.
    pub id: u64,
    pub kind: ComponentKind,
    pub name: String,
    /// Top-left world coordinates, grid multiples after commit.
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Display color, hex string.
    pub color: String,
    /// Back-reference to the zone this component was auto-placed into.
    /// Informational only; geometry is never derived from it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    /// Aisle capacity; meaningful on zones only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
}

impl LayoutComponent {
    /// The component's bounding box.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn is_zone(&self) -> bool {
        self.kind == ComponentKind::Zone
    }

    pub fn is_aisle(&self) -> bool {
        self.kind == ComponentKind::Aisle
    }

    /// The capacity used for the aisle-count bound; zones that declare no
    /// capacity fall back to [`DEFAULT_ZONE_CAPACITY`].
    pub fn effective_capacity(&self) -> u32 {
        self.capacity.unwrap_or(DEFAULT_ZONE_CAPACITY)
    }
}

/// The ordered collection of all components at a point in time.
///
/// This is the unit the history manager snapshots; commits replace the
/// whole layout rather than patching it in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Layout {
    components: Vec<LayoutComponent>,
}

impl Layout {
    pub fn new(components: Vec<LayoutComponent>) -> Self {
        Self { components }
    }

    pub fn components(&self) -> &[LayoutComponent] {
        &self.components
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LayoutComponent> {
        self.components.iter()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&LayoutComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.get(id).is_some()
    }

    /// Count of components of the given kind, used for default names.
    pub fn count_of_kind(&self, kind: ComponentKind) -> usize {
        self.components.iter().filter(|c| c.kind == kind).count()
    }

    /// Largest id in the layout, 0 when empty. Seeds the id counter.
    pub fn max_id(&self) -> u64 {
        self.components.iter().map(|c| c.id).max().unwrap_or(0)
    }

    pub(crate) fn push(&mut self, component: LayoutComponent) {
        self.components.push(component);
    }

    pub(crate) fn get_mut(&mut self, id: u64) -> Option<&mut LayoutComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    pub(crate) fn remove(&mut self, id: u64) -> Option<LayoutComponent> {
        let idx = self.components.iter().position(|c| c.id == id)?;
        Some(self.components.remove(idx))
    }
}

impl From<Vec<LayoutComponent>> for Layout {
    fn from(components: Vec<LayoutComponent>) -> Self {
        Self::new(components)
    }
}

impl<'a> IntoIterator for &'a Layout {
    type Item = &'a LayoutComponent;
    type IntoIter = std::slice::Iter<'a, LayoutComponent>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}
