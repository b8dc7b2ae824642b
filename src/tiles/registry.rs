//! Tile registry: the live tile set.
//!
//! The `TileRegistry` owns every tile on the board. It supports:
//! - Insertion with fresh ids (`spawn`) or re-insertion of detached tiles (`restore`)
//! - Removal by handle
//! - Lookup by handle, enumeration index, exact position, or topmost at a cell
//! - Stable ordered enumeration (insertion order)
//! - Change tracking: every real mutation is queued as a [`BoardEvent`]
//!
//! Two tiles at the same `Position`, or a handle that does not resolve, are
//! internal faults and panic.

use rustc_hash::{FxHashMap, FxHashSet};

use super::kind::TileFace;
use super::tile::Tile;
use crate::core::entity::TileId;
use crate::core::position::Position;
use crate::events::BoardEvent;

/// Owns the live tiles and records what changed since the last drain.
///
/// ## Usage
///
/// ```
/// use turtle_mahjong::core::Position;
/// use turtle_mahjong::tiles::{TileFace, TileKind, TileRegistry};
///
/// let mut registry = TileRegistry::new();
///
/// let low = registry.spawn(TileFace::suit(TileKind::Circle, 1), Position::new(5, 5, 0));
/// let high = registry.spawn(TileFace::special(TileKind::Fall), Position::new(5, 5, 1));
///
/// // The highest layer wins at a shared footprint
/// assert_eq!(registry.find_topmost(5, 5).map(|t| t.id()), Some(high));
///
/// registry.remove(high);
/// assert_eq!(registry.find_topmost(5, 5).map(|t| t.id()), Some(low));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TileRegistry {
    /// Tile storage by handle.
    tiles: FxHashMap<TileId, Tile>,

    /// Enumeration order (insertion order).
    order: Vec<TileId>,

    /// Occupancy index.
    by_position: FxHashMap<Position, TileId>,

    /// Next handle to hand out. Never reused.
    next_id: u32,

    /// Structural events in the order they happened.
    pending: Vec<BoardEvent>,

    /// Tiles whose attributes changed since the last drain, in first-change order.
    dirty: Vec<TileId>,
    dirty_set: FxHashSet<TileId>,
}

impl TileRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Number of live tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Check if a handle refers to a live tile.
    #[must_use]
    pub fn contains(&self, id: TileId) -> bool {
        self.tiles.contains_key(&id)
    }

    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(&id)
    }

    /// Tile at an enumeration index.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Tile> {
        self.order.get(index).and_then(|id| self.tiles.get(id))
    }

    /// Enumeration index of a live tile.
    #[must_use]
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.order.iter().position(|&t| t == id)
    }

    /// Tile occupying an exact position.
    #[must_use]
    pub fn find_at(&self, position: Position) -> Option<&Tile> {
        self.by_position.get(&position).and_then(|id| self.tiles.get(id))
    }

    /// Check if a position is occupied.
    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.by_position.contains_key(&position)
    }

    /// Highest-layer tile standing on `(row, column)`.
    #[must_use]
    pub fn find_topmost(&self, row: i32, column: i32) -> Option<&Tile> {
        self.iter()
            .filter(|t| t.row() == row && t.column() == column)
            .max_by_key(|t| t.layer())
    }

    /// Iterate over live tiles in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.order.iter().map(move |id| &self.tiles[id])
    }

    /// Handles in enumeration order.
    #[must_use]
    pub fn ids(&self) -> &[TileId] {
        &self.order
    }

    /// Occupied positions in enumeration order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().map(Tile::position)
    }

    // === Structural mutation ===

    /// Create a tile at `position` and return its handle.
    ///
    /// Panics if the position is already occupied.
    pub fn spawn(&mut self, face: TileFace, position: Position) -> TileId {
        let id = TileId::new(self.next_id);
        self.next_id += 1;
        self.insert(Tile::new(id, face, position));
        id
    }

    /// Re-insert a tile previously detached with `take_all` or `remove`.
    ///
    /// Panics if its handle is live or its position is occupied.
    pub fn restore(&mut self, tile: Tile) {
        if self.tiles.contains_key(&tile.id()) {
            panic!("{} is already in the registry", tile.id());
        }
        self.next_id = self.next_id.max(tile.id().raw() + 1);
        self.insert(tile);
    }

    fn insert(&mut self, tile: Tile) {
        let position = tile.position();
        if let Some(existing) = self.by_position.get(&position) {
            panic!("Position {} already occupied by {}", position, existing);
        }

        let id = tile.id();
        let index = self.order.len();
        self.pending.push(BoardEvent::TileInserted {
            index,
            tile: tile.snapshot(),
        });

        self.by_position.insert(position, id);
        self.order.push(id);
        self.tiles.insert(id, tile);
    }

    /// Remove a tile, returning it.
    ///
    /// Returns `None` if the handle is not live.
    pub fn remove(&mut self, id: TileId) -> Option<Tile> {
        let tile = self.tiles.remove(&id)?;
        let index = self
            .index_of(id)
            .unwrap_or_else(|| panic!("{} missing from enumeration order", id));

        self.order.remove(index);
        self.by_position.remove(&tile.position());
        self.forget_dirty(id);
        self.pending.push(BoardEvent::TileRemoved { index, id });

        Some(tile)
    }

    /// Destroy every tile.
    pub fn clear(&mut self) {
        drop(self.take_all());
    }

    /// Detach every tile, in enumeration order.
    ///
    /// Detached tiles can be edited freely and handed back with `restore`;
    /// nothing is reported for edits made while they are detached.
    pub fn take_all(&mut self) -> Vec<Tile> {
        if self.order.is_empty() {
            return Vec::new();
        }

        self.by_position.clear();
        self.dirty.clear();
        self.dirty_set.clear();
        self.pending.push(BoardEvent::Cleared);

        let order = std::mem::take(&mut self.order);
        order
            .into_iter()
            .filter_map(|id| self.tiles.remove(&id))
            .collect()
    }

    // === Attribute mutation ===

    /// Set the open flag. Returns whether it changed.
    pub fn set_open(&mut self, id: TileId, open: bool) -> bool {
        let changed = self.tile_mut(id).set_open(open);
        self.note_change(id, changed)
    }

    /// Set the selected flag. Returns whether it changed.
    pub fn set_selected(&mut self, id: TileId, selected: bool) -> bool {
        let changed = self.tile_mut(id).set_selected(selected);
        self.note_change(id, changed)
    }

    /// Set the face-up flag. Returns whether it changed.
    pub fn set_face_up(&mut self, id: TileId, face_up: bool) -> bool {
        let changed = self.tile_mut(id).set_face_up(face_up);
        self.note_change(id, changed)
    }

    fn tile_mut(&mut self, id: TileId) -> &mut Tile {
        self.tiles
            .get_mut(&id)
            .unwrap_or_else(|| panic!("{} not found in registry", id))
    }

    fn note_change(&mut self, id: TileId, changed: bool) -> bool {
        if changed && self.dirty_set.insert(id) {
            self.dirty.push(id);
        }
        changed
    }

    fn forget_dirty(&mut self, id: TileId) {
        if self.dirty_set.remove(&id) {
            self.dirty.retain(|&d| d != id);
        }
    }

    // === Notifications ===

    /// Check if anything happened since the last drain.
    #[must_use]
    pub fn has_pending_events(&self) -> bool {
        !self.pending.is_empty() || !self.dirty.is_empty()
    }

    /// Drain queued notifications.
    ///
    /// Structural events come first, in the order they happened, followed by
    /// one `TileChanged` per live tile whose attributes changed, carrying its
    /// current state.
    pub fn take_events(&mut self) -> Vec<BoardEvent> {
        let mut events = std::mem::take(&mut self.pending);
        self.dirty_set.clear();
        for id in std::mem::take(&mut self.dirty) {
            if let Some(tile) = self.tiles.get(&id) {
                events.push(BoardEvent::TileChanged(tile.snapshot()));
            }
        }
        events
    }
}
