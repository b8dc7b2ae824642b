//! # turtle-mahjong
//!
//! Board engine for Mahjong solitaire on the classic "Turtle" layout.
//!
//! ## Design Principles
//!
//! 1. **View-Agnostic**: No rendering or audio. The board reports what
//!    changed through events; collaborators decide how to show it.
//!
//! 2. **Silent Input**: Clicks on empty cells, closed tiles or the held tile
//!    are no-ops, never errors.
//!
//! 3. **Reproducible**: All randomness flows through an injectable, seedable
//!    `BoardRng`. Unseeded boards draw fresh entropy.
//!
//! ## Architecture
//!
//! - **Registry + handles**: Tiles live in a `TileRegistry` and are referred
//!   to by `TileId`. The held tile is a handle, cleared when its tile leaves.
//!
//! - **Change-on-write**: Tile setters report real changes only; the board
//!   turns them into one `TileChanged` event per mutated tile.
//!
//! - **Recompute after every structural change**: exposure is a pure
//!   function of the occupied positions.
//!
//! ## Modules
//!
//! - `core`: Coordinates, tile handles, RNG, configuration, errors
//! - `tiles`: Faces, tile entities, the live registry
//! - `layout`: Position catalog, tile set, deterministic face sequence
//! - `rules`: Exposure and pair matching
//! - `events`: Board events, audio cues, observers
//! - `board`: The `Board` aggregate and its selection state machine

pub mod core;
pub mod tiles;
pub mod layout;
pub mod rules;
pub mod events;
pub mod board;

// Re-export commonly used types
pub use crate::core::{
    BoardConfig, BoardRng, BoardRngState, Cell, ConfigError, Position, TileId,
};

pub use crate::tiles::{Category, Tile, TileFace, TileKind, TileRegistry, TileSnapshot};

pub use crate::layout::{FaceSequence, LayoutGenerator, PositionCatalog, SuitRange, TileSet};

pub use crate::rules::{faces_match, OccupancyIndex};

pub use crate::events::{AudioCue, BoardEvent, BoardObserver, EventLog};

pub use crate::board::{Board, SelectOutcome, Selection};
