//! Exposure: which tiles can currently be picked.
//!
//! A tile at `(r, c, l)` is covered if any live tile stands on `(r, c)` at a
//! higher layer; covered tiles are never open. An uncovered tile is open
//! when at least one of its same-layer horizontal neighbors `(r, c - 1, l)`
//! and `(r, c + 1, l)` is empty.
//!
//! Exposure is a pure function of the occupied position set, so recomputing
//! twice without an intervening mutation changes nothing.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use crate::core::position::{Cell, Position};
use crate::tiles::TileRegistry;

/// Position index built once per recompute.
///
/// Stacks rarely exceed five layers, so each cell's layer list stays inline.
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    occupied: FxHashSet<Position>,
    stacks: FxHashMap<Cell, SmallVec<[u8; 5]>>,
}

impl OccupancyIndex {
    /// Index a set of occupied positions.
    pub fn from_positions(positions: impl IntoIterator<Item = Position>) -> Self {
        let mut index = Self::default();
        for position in positions {
            index.occupied.insert(position);
            index.stacks.entry(position.cell()).or_default().push(position.layer);
        }
        index
    }

    #[must_use]
    pub fn is_occupied(&self, position: Position) -> bool {
        self.occupied.contains(&position)
    }

    /// Highest occupied layer on a cell.
    #[must_use]
    pub fn top_layer(&self, cell: Cell) -> Option<u8> {
        self.stacks.get(&cell).and_then(|layers| layers.iter().copied().max())
    }

    /// Check if anything stands above `position` on the same cell.
    #[must_use]
    pub fn is_covered(&self, position: Position) -> bool {
        self.top_layer(position.cell())
            .is_some_and(|top| top > position.layer)
    }

    /// Check if both same-layer horizontal neighbors are occupied.
    #[must_use]
    pub fn is_flanked(&self, position: Position) -> bool {
        self.is_occupied(position.left()) && self.is_occupied(position.right())
    }

    /// Whether a tile at `position` may be picked.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        !self.is_covered(position) && !self.is_flanked(position)
    }
}

/// Recompute every tile's open flag. Returns how many tiles are open.
pub fn recompute(registry: &mut TileRegistry) -> usize {
    let index = OccupancyIndex::from_positions(registry.positions());
    let updates: Vec<_> = registry
        .iter()
        .map(|tile| (tile.id(), index.is_open(tile.position())))
        .collect();

    let mut open = 0;
    let mut changed = 0;
    for (id, is_open) in updates {
        if registry.set_open(id, is_open) {
            changed += 1;
        }
        if is_open {
            open += 1;
        }
    }

    tracing::trace!(tiles = registry.len(), open, changed, "exposure recomputed");
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entity::TileId;
    use crate::tiles::{TileFace, TileKind};

    fn registry_with(positions: &[(i32, i32, u8)]) -> (TileRegistry, Vec<TileId>) {
        let mut registry = TileRegistry::new();
        let ids = positions
            .iter()
            .map(|&(r, c, l)| registry.spawn(TileFace::suit(TileKind::Circle, 1), Position::new(r, c, l)))
            .collect();
        (registry, ids)
    }

    fn is_open(registry: &TileRegistry, id: TileId) -> bool {
        registry.get(id).map_or(false, |t| t.is_open())
    }

    #[test]
    fn test_single_tile_is_open() {
        let (mut registry, ids) = registry_with(&[(0, 0, 0)]);
        assert_eq!(recompute(&mut registry), 1);
        assert!(is_open(&registry, ids[0]));
    }

    #[test]
    fn test_row_ends_open_middle_closed() {
        let (mut registry, ids) = registry_with(&[(0, 0, 0), (0, 1, 0), (0, 2, 0)]);
        assert_eq!(recompute(&mut registry), 2);
        assert!(is_open(&registry, ids[0]));
        assert!(!is_open(&registry, ids[1]));
        assert!(is_open(&registry, ids[2]));
    }

    #[test]
    fn test_covered_tile_closed_even_without_neighbors() {
        let (mut registry, ids) = registry_with(&[(2, 2, 0), (2, 2, 1)]);
        recompute(&mut registry);
        assert!(!is_open(&registry, ids[0]));
        assert!(is_open(&registry, ids[1]));
    }

    #[test]
    fn test_cover_two_layers_up_counts() {
        let (mut registry, ids) = registry_with(&[(2, 2, 0), (2, 2, 2)]);
        recompute(&mut registry);
        assert!(!is_open(&registry, ids[0]));
    }

    #[test]
    fn test_neighbors_on_other_layers_do_not_flank() {
        // Neighbors exist only on layer 1; layer 0 tile at (0,1) is uncovered
        let (mut registry, ids) = registry_with(&[(0, 1, 0), (0, 0, 1), (0, 2, 1)]);
        recompute(&mut registry);
        assert!(is_open(&registry, ids[0]));
    }

    #[test]
    fn test_removal_opens_neighbor() {
        let (mut registry, ids) = registry_with(&[(0, 0, 0), (0, 1, 0), (0, 2, 0)]);
        recompute(&mut registry);
        assert!(!is_open(&registry, ids[1]));

        registry.remove(ids[0]);
        recompute(&mut registry);
        assert!(is_open(&registry, ids[1]));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let (mut registry, _) = registry_with(&[(0, 0, 0), (0, 1, 0), (0, 2, 0), (0, 1, 1)]);
        recompute(&mut registry);
        let first: Vec<_> = registry.iter().map(|t| t.is_open()).collect();
        registry.take_events();

        recompute(&mut registry);
        let second: Vec<_> = registry.iter().map(|t| t.is_open()).collect();

        assert_eq!(first, second);
        assert!(!registry.has_pending_events());
    }

    #[test]
    fn test_index_queries() {
        let index = OccupancyIndex::from_positions([
            Position::new(1, 1, 0),
            Position::new(1, 1, 1),
            Position::new(1, 0, 0),
        ]);
        assert_eq!(index.top_layer(Cell::new(1, 1)), Some(1));
        assert_eq!(index.top_layer(Cell::new(9, 9)), None);
        assert!(index.is_covered(Position::new(1, 1, 0)));
        assert!(!index.is_covered(Position::new(1, 1, 1)));
        assert!(!index.is_flanked(Position::new(1, 1, 0)));
    }
}
