//! Tile entities - runtime tile state.
//!
//! A `Tile` pairs an immutable identity (its [`TileId`] and [`TileFace`])
//! with the mutable state the board drives: position, selection and
//! exposure. Every setter compares before writing and reports whether the
//! value actually changed, so the registry only notifies observers about
//! real changes.

use serde::{Deserialize, Serialize};

use super::kind::{Category, TileFace, TileKind};
use crate::core::entity::TileId;
use crate::core::position::{Cell, Position};

/// A tile on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: TileId,
    face: TileFace,
    position: Position,
    face_up: bool,
    selected: bool,
    open: bool,
}

impl Tile {
    /// Create a face-up, unselected, closed tile.
    #[must_use]
    pub fn new(id: TileId, face: TileFace, position: Position) -> Self {
        Self {
            id,
            face,
            position,
            face_up: true,
            selected: false,
            open: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> TileId {
        self.id
    }

    #[must_use]
    pub fn face(&self) -> TileFace {
        self.face
    }

    #[must_use]
    pub fn kind(&self) -> TileKind {
        self.face.kind
    }

    #[must_use]
    pub fn value(&self) -> Option<u8> {
        self.face.value
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.face.category()
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn cell(&self) -> Cell {
        self.position.cell()
    }

    #[must_use]
    pub fn row(&self) -> i32 {
        self.position.row
    }

    #[must_use]
    pub fn column(&self) -> i32 {
        self.position.column
    }

    #[must_use]
    pub fn layer(&self) -> u8 {
        self.position.layer
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Whether the tile can currently be picked.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    // === Change-reporting setters ===

    pub(crate) fn set_position(&mut self, position: Position) -> bool {
        replace_if_changed(&mut self.position, position)
    }

    pub(crate) fn set_face_up(&mut self, face_up: bool) -> bool {
        replace_if_changed(&mut self.face_up, face_up)
    }

    pub(crate) fn set_selected(&mut self, selected: bool) -> bool {
        replace_if_changed(&mut self.selected, selected)
    }

    pub(crate) fn set_open(&mut self, open: bool) -> bool {
        replace_if_changed(&mut self.open, open)
    }

    /// Full attribute set, as handed to rendering collaborators.
    #[must_use]
    pub fn snapshot(&self) -> TileSnapshot {
        TileSnapshot {
            id: self.id,
            kind: self.face.kind,
            value: self.face.value,
            face_up: self.face_up,
            row: self.position.row,
            column: self.position.column,
            layer: self.position.layer,
            selected: self.selected,
            open: self.open,
        }
    }
}

fn replace_if_changed<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        false
    } else {
        *slot = value;
        true
    }
}

/// Plain copy of every tile attribute.
///
/// Serializes under the attribute names the view layer binds to
/// (`type`, `value`, `faceUp`, `row`, `column`, `layer`, `selected`, `open`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSnapshot {
    pub id: TileId,
    #[serde(rename = "type")]
    pub kind: TileKind,
    pub value: Option<u8>,
    pub face_up: bool,
    pub row: i32,
    pub column: i32,
    pub layer: u8,
    pub selected: bool,
    pub open: bool,
}

impl TileSnapshot {
    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.row, self.column, self.layer)
    }

    #[must_use]
    pub fn face(&self) -> TileFace {
        TileFace { kind: self.kind, value: self.value }
    }
}
