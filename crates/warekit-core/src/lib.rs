//! # WareKit Core
//!
//! Core types shared by the WareKit layout designer crates:
//! grid-aligned rectangle geometry and the placement error taxonomy.

pub mod error;
pub mod geometry;

pub use error::{PlacementError, Result};
pub use geometry::{Point, Rect, GRID_UNIT, MIN_COMPONENT_SIZE};
