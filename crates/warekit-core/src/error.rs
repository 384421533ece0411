//! Error handling for the layout designer.
//!
//! Every placement failure is a recoverable validation outcome reported to
//! the operator; none of these cross the engine boundary as a panic.
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Placement validation error.
///
/// Returned by every constraint-checked operation on the layout. An
/// operation that returns one of these has made no change to the layout
/// or the history.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// The target zone already holds its maximum number of aisles.
    #[error("Zone capacity reached: {count} of {capacity} aisle slots in use")]
    CapacityFull {
        /// Aisles currently contained in the zone.
        count: usize,
        /// The zone's effective capacity.
        capacity: u32,
    },

    /// The candidate rectangle overlaps an existing aisle.
    #[error("Placement overlaps aisle {other}")]
    Collision {
        /// Id of the aisle the candidate collided with.
        other: u64,
    },

    /// The auto-placement scan found no free slot inside the zone.
    #[error("No free slot available in zone {zone}")]
    NoSpaceAvailable {
        /// Id of the zone that was scanned.
        zone: u64,
    },

    /// The operation referenced a component id that is not in the layout.
    #[error("Unknown component id {id}")]
    UnknownComponent {
        /// The id that failed to resolve.
        id: u64,
    },
}

/// Result alias used throughout the designer crates.
pub type Result<T> = std::result::Result<T, PlacementError>;
