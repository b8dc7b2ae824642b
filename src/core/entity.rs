//! Tile handles.
//!
//! Every tile created by the board gets a `TileId` that stays attached to
//! the tile object for its whole lifetime, including across reshuffles.
//! Ids are never reused within a registry, so a handle to a removed tile
//! can be detected instead of silently aliasing a newer tile.
//!
//! ```
//! use turtle_mahjong::core::TileId;
//!
//! let id = TileId::new(12);
//! assert_eq!(id.raw(), 12);
//! assert_eq!(id.to_string(), "Tile(12)");
//! ```

use serde::{Deserialize, Serialize};

/// Stable handle to a tile in a [`TileRegistry`](crate::tiles::TileRegistry).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TileId(pub u32);

impl TileId {
    /// Create a tile handle from a raw value.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for TileId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Tile({})", self.0)
    }
}
