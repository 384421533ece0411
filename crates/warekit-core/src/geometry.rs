//! Grid-aligned rectangle geometry for the layout canvas.
//!
//! World coordinates are integers: every committed position and size is a
//! multiple of [`GRID_UNIT`]. Floating point only appears at the screen
//! boundary (pointer positions, pan/zoom) and is snapped onto the grid
//! before anything is committed.

use serde::{Deserialize, Serialize};

/// The grid quantum. All committed coordinates and sizes are multiples of it.
pub const GRID_UNIT: i32 = 20;

/// Minimum committed width/height of any component.
pub const MIN_COMPONENT_SIZE: i32 = 20;

/// A point in continuous (screen or unsnapped world) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Snaps a raw coordinate down to the nearest non-negative grid multiple.
///
/// Used when a palette item is dropped: the component lands in the grid
/// cell under the pointer.
pub fn snap_floor(raw: f64) -> i32 {
    let unit = f64::from(GRID_UNIT);
    let snapped = (raw / unit).floor() * unit;
    (snapped as i32).max(0)
}

/// Snaps a raw coordinate to the nearest non-negative grid multiple.
///
/// Used for drag deltas: `snap_round(40.0 + 17.0) == 60`.
pub fn snap_round(raw: f64) -> i32 {
    let unit = f64::from(GRID_UNIT);
    let snapped = (raw / unit).round() * unit;
    (snapped as i32).max(0)
}

/// Snaps a size to the nearest grid multiple, never below
/// [`MIN_COMPONENT_SIZE`].
pub fn snap_size(raw: i32) -> i32 {
    let snapped = snap_round(f64::from(raw));
    snapped.max(MIN_COMPONENT_SIZE)
}

/// An axis-aligned rectangle in world coordinates, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// The exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Tests strict AABB overlap with another rectangle.
    ///
    /// Rectangles that merely share an edge do not overlap.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Tests whether `other` lies entirely within this rectangle
    /// (edges may coincide).
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Tests whether a continuous point falls inside this rectangle.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= f64::from(self.x)
            && p.x < f64::from(self.right())
            && p.y >= f64::from(self.y)
            && p.y < f64::from(self.bottom())
    }
}
