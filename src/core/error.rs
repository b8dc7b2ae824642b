//! Configuration errors.
//!
//! Interactive input never fails: clicks on empty cells or closed tiles are
//! ignored. The only recoverable errors come from validating a custom
//! [`BoardConfig`](super::BoardConfig) before a board is built.

use crate::tiles::TileKind;

/// Errors raised when a catalog or tile set is not a usable board definition.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The catalog has no layers at all.
    #[error("Position catalog has no layers")]
    EmptyCatalog,

    /// A layer was declared with no cells.
    #[error("Layer {layer} has no cells")]
    EmptyLayer { layer: usize },

    /// The same cell appears twice within one layer.
    #[error("Cell ({row}, {column}) appears twice on layer {layer}")]
    DuplicateCell { layer: u8, row: i32, column: i32 },

    /// Layer indices must fit in a `u8`.
    #[error("Too many layers: {count} (at most 256 supported)")]
    TooManyLayers { count: usize },

    /// The tile set has no standard suits to draw from.
    #[error("Tile set has no standard suits")]
    NoSuits,

    /// A suit range is empty or starts below 1.
    #[error("Invalid value range {min}..={max} for {kind}")]
    InvalidSuitRange { kind: TileKind, min: u8, max: u8 },

    /// A tile kind was listed under the wrong category.
    #[error("{kind} cannot be used as a {expected} tile")]
    WrongCategory { kind: TileKind, expected: &'static str },

    /// A special category (seasons or flowers) has no members.
    #[error("Tile set has no {category} tiles")]
    EmptySpecials { category: &'static str },
}
