//! Board events.
//!
//! Events describe what a board operation did, in the order it happened.
//! Rendering collaborators mirror the tile list from the structural events
//! and per-tile changes; audio collaborators only care about [`AudioCue`]s.

use serde::{Deserialize, Serialize};

use crate::core::entity::TileId;
use crate::tiles::TileSnapshot;

/// The three interaction outcomes that get a sound.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AudioCue {
    /// A first tile was picked.
    TilePicked,
    /// Two matching tiles were removed.
    PairRemoved,
    /// The second pick did not match the first.
    Mismatch,
}

/// Something observable that happened to the board.
///
/// ## Ordering
///
/// Within one operation, structural events (`Cleared`, `TileInserted`,
/// `TileRemoved`) come first in the order they happened, then one
/// `TileChanged` per tile whose attributes changed, then the audio cue if
/// the operation produced one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardEvent {
    /// Every tile was removed (layout generation or reshuffle reset).
    Cleared,

    /// A tile was appended at `index` of the enumeration order.
    TileInserted { index: usize, tile: TileSnapshot },

    /// The tile at `index` was removed; later tiles shift down by one.
    TileRemoved { index: usize, id: TileId },

    /// A tile's attributes changed; carries its full current state.
    TileChanged(TileSnapshot),

    /// An interaction outcome worth a sound.
    Cue(AudioCue),
}

impl BoardEvent {
    /// The audio cue carried by this event, if any.
    #[must_use]
    pub fn cue(&self) -> Option<AudioCue> {
        match self {
            BoardEvent::Cue(cue) => Some(*cue),
            _ => None,
        }
    }

    /// The tile this event is about, if any.
    #[must_use]
    pub fn tile_id(&self) -> Option<TileId> {
        match self {
            BoardEvent::TileInserted { tile, .. } => Some(tile.id),
            BoardEvent::TileRemoved { id, .. } => Some(*id),
            BoardEvent::TileChanged(tile) => Some(tile.id),
            BoardEvent::Cleared | BoardEvent::Cue(_) => None,
        }
    }
}
