//! Tile system: faces, entities, and the live registry.
//!
//! ## Key Types
//!
//! - `TileKind`: Closed set of face identifiers (three suits, seasons, flowers)
//! - `Category`: Suit / Season / Flower grouping used by the match rules
//! - `TileFace`: Kind plus optional value, the identity printed on a tile
//! - `Tile`: Runtime tile state (position, selected, open)
//! - `TileSnapshot`: Full attribute copy handed to observers
//! - `TileRegistry`: Owns the live tiles, indexes them by position

pub mod kind;
pub mod registry;
pub mod tile;

pub use kind::{Category, TileFace, TileKind};
pub use registry::TileRegistry;
pub use tile::{Tile, TileSnapshot};
