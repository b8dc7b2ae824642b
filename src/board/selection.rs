//! Selection state and click outcomes.

use serde::{Deserialize, Serialize};

use crate::core::entity::TileId;

/// Interactive state between two clicks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Nothing held.
    #[default]
    Idle,
    /// One tile picked, waiting for its partner.
    OneSelected(TileId),
}

impl Selection {
    /// The held tile, if any.
    #[must_use]
    pub fn held(self) -> Option<TileId> {
        match self {
            Selection::Idle => None,
            Selection::OneSelected(id) => Some(id),
        }
    }

    #[must_use]
    pub fn is_idle(self) -> bool {
        self == Selection::Idle
    }
}

/// What a click did.
///
/// `Ignored` covers every silent no-op: an empty cell, a closed tile, or a
/// second click on the held tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectOutcome {
    Ignored,
    /// The tile is now held.
    Picked(TileId),
    /// Held tile and clicked tile matched and were removed.
    PairRemoved(TileId, TileId),
    /// Held tile and clicked tile did not match; both were released.
    Mismatch(TileId, TileId),
}

impl SelectOutcome {
    /// Check if the click changed anything.
    #[must_use]
    pub fn is_ignored(self) -> bool {
        self == SelectOutcome::Ignored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held() {
        assert_eq!(Selection::Idle.held(), None);
        assert_eq!(Selection::OneSelected(TileId(3)).held(), Some(TileId(3)));
        assert!(Selection::default().is_idle());
    }

    #[test]
    fn test_outcome_ignored() {
        assert!(SelectOutcome::Ignored.is_ignored());
        assert!(!SelectOutcome::Picked(TileId(1)).is_ignored());
    }
}
