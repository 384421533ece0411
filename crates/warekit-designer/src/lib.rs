//! # WareKit Designer
//!
//! Interactive 2D editor for composing a warehouse's physical layout:
//! zones, storage aisles, bins, docks, and offices placed as rectangles on
//! a gridded canvas.
//!
//! ## Core Components
//!
//! - **Catalog**: the fixed set of placeable component kinds and their
//!   default geometry and color
//! - **Placement Engine**: the sole authority for accepting or rejecting
//!   geometry changes (containment, capacity, collision)
//! - **History**: linear snapshot undo/redo
//! - **Viewport**: screen/world coordinate mapping, pan and zoom
//! - **Selection**: primary-selection tracking and hit testing
//! - **Designer Session**: composes the above and drives drags, property
//!   edits, and export
//!
//! ## Architecture
//!
//! ```text
//! DesignerSession (shell)
//!   ├── Viewport (screen <-> world)
//!   ├── PlacementEngine (validate + produce snapshots)
//!   ├── History (snapshots + cursor)
//!   └── Selection (primary id)
//! ```
//!
//! Pointer events are converted by the viewport, validated by the engine,
//! and committed to history as whole-layout snapshots; rejections leave
//! both layout and history untouched.

pub mod catalog;
pub mod component;
pub mod designer_state;
pub mod history;
pub mod placement;
pub mod selection;
pub mod serialization;
pub mod viewport;

pub use catalog::{defaults_for, ComponentKind, KindDefaults, DEFAULT_ZONE_CAPACITY};
pub use component::{Layout, LayoutComponent};
pub use designer_state::DesignerSession;
pub use history::History;
pub use placement::PlacementEngine;
pub use selection::Selection;
pub use serialization::{DocumentMetadata, LayoutDocument};
pub use viewport::Viewport;

pub use warekit_core::{PlacementError, Point, Rect, GRID_UNIT, MIN_COMPONENT_SIZE};
