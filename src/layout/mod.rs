//! Board construction: catalog, tile set, and generator.
//!
//! ## Key Types
//!
//! - `PositionCatalog`: Per-layer coordinate lists (the turtle by default)
//! - `TileSet` / `SuitRange`: Faces available to the generator
//! - `FaceSequence`: Deterministic cyclic face order before shuffling
//! - `LayoutGenerator`: Shuffles faces and deals them onto the catalog

pub mod catalog;
pub mod generator;
pub mod tile_set;

pub use catalog::PositionCatalog;
pub use generator::{FaceSequence, LayoutGenerator};
pub use tile_set::{SuitRange, TileSet};
