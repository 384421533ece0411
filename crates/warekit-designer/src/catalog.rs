//! Component catalog: the placeable component kinds and their defaults.
//!
//! A static lookup table, not a stateful registry. Default geometry is
//! expressed in grid units so freshly dropped components are already
//! aligned.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many aisles a zone may contain when it declares no capacity.
pub const DEFAULT_ZONE_CAPACITY: u32 = 10;

/// The kind of a placeable layout component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// A large region (lot) that contains storage aisles, capacity-bounded.
    Zone,
    /// A storage unit, subject to capacity and collision constraints.
    Aisle,
    /// A freestanding storage bin.
    Bin,
    /// A loading dock.
    Dock,
    /// An office area.
    Office,
}

impl ComponentKind {
    /// Uppercase label used for default component names ("ZONE-1").
    pub fn label(&self) -> &'static str {
        match self {
            ComponentKind::Zone => "ZONE",
            ComponentKind::Aisle => "AISLE",
            ComponentKind::Bin => "BIN",
            ComponentKind::Dock => "DOCK",
            ComponentKind::Office => "OFFICE",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComponentKind::Zone => "zone",
            ComponentKind::Aisle => "aisle",
            ComponentKind::Bin => "bin",
            ComponentKind::Dock => "dock",
            ComponentKind::Office => "office",
        };
        f.write_str(s)
    }
}

/// Default geometry and display color for a component kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindDefaults {
    pub width: i32,
    pub height: i32,
    pub color: &'static str,
}

/// Looks up the catalog defaults for a kind.
pub fn defaults_for(kind: ComponentKind) -> KindDefaults {
    match kind {
        ComponentKind::Zone => KindDefaults {
            width: 300,
            height: 200,
            color: "#dbeafe",
        },
        ComponentKind::Aisle => KindDefaults {
            width: 60,
            height: 100,
            color: "#fde68a",
        },
        ComponentKind::Bin => KindDefaults {
            width: 40,
            height: 40,
            color: "#bbf7d0",
        },
        ComponentKind::Dock => KindDefaults {
            width: 80,
            height: 60,
            color: "#fecaca",
        },
        ComponentKind::Office => KindDefaults {
            width: 100,
            height: 80,
            color: "#e9d5ff",
        },
    }
}
