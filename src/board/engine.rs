//! The board aggregate: layout, selection, removal, reshuffle.
//!
//! `Board` owns the tile registry, the RNG and the selection state, and is
//! the only thing that mutates them. Every public operation runs to
//! completion, recomputes exposure after structural changes, and then
//! delivers the resulting events to subscribed observers.

use crate::core::config::BoardConfig;
use crate::core::entity::TileId;
use crate::core::error::ConfigError;
use crate::core::position::Position;
use crate::core::rng::{BoardRng, BoardRngState};
use crate::events::{AudioCue, BoardEvent, BoardObserver};
use crate::layout::LayoutGenerator;
use crate::rules::{exposure, faces_match};
use crate::tiles::{Tile, TileFace, TileRegistry, TileSnapshot};

use super::selection::{SelectOutcome, Selection};

/// Mahjong solitaire board.
///
/// ## Example
///
/// ```
/// use turtle_mahjong::board::{Board, SelectOutcome};
///
/// let mut board = Board::with_seed(42);
/// board.generate_layout();
/// assert_eq!(board.len(), 144);
///
/// // Pick any open tile
/// let tile = board.tiles().find(|t| t.is_open()).unwrap();
/// let (row, column, id) = (tile.row(), tile.column(), tile.id());
///
/// assert_eq!(board.select_tile(row, column), SelectOutcome::Picked(id));
/// assert_eq!(board.first_selected(), Some(id));
///
/// // Clicking the held tile again does nothing
/// assert!(board.select_tile(row, column).is_ignored());
/// ```
pub struct Board {
    config: BoardConfig,
    registry: TileRegistry,
    rng: BoardRng,
    selection: Selection,
    observers: Vec<Box<dyn BoardObserver>>,
}

impl Board {
    /// Create an empty board from a validated configuration.
    ///
    /// Call [`generate_layout`](Self::generate_layout) to deal tiles.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rng = config.rng();
        Ok(Self::from_parts(config, rng))
    }

    /// Create an empty board with an injected RNG; the config seed is ignored.
    pub fn with_rng(config: BoardConfig, rng: BoardRng) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_parts(config, rng))
    }

    /// Empty canonical turtle board, entropy-seeded.
    #[must_use]
    pub fn turtle() -> Self {
        let config = BoardConfig::new();
        let rng = config.rng();
        Self::from_parts(config, rng)
    }

    /// Empty canonical turtle board with a fixed seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(BoardConfig::new().with_seed(seed), BoardRng::new(seed))
    }

    fn from_parts(config: BoardConfig, rng: BoardRng) -> Self {
        Self {
            config,
            registry: TileRegistry::new(),
            rng,
            selection: Selection::Idle,
            observers: Vec::new(),
        }
    }

    /// Register an observer for every event from now on.
    pub fn subscribe(&mut self, observer: impl BoardObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Operations ===

    /// Discard every tile and deal a fresh layout onto the catalog.
    pub fn generate_layout(&mut self) {
        self.selection = Selection::Idle;
        LayoutGenerator::new(&self.config.catalog, &self.config.tile_set)
            .populate(&mut self.registry, &mut self.rng);
        let open = exposure::recompute(&mut self.registry);

        tracing::debug!(tiles = self.registry.len(), open, "layout generated");
        self.finish(None);
    }

    /// Handle a click on `(row, column)`.
    ///
    /// Resolves the topmost tile on that cell. Empty cells, closed tiles and
    /// the already-held tile are ignored without any side effect.
    pub fn select_tile(&mut self, row: i32, column: i32) -> SelectOutcome {
        let clicked = match self.registry.find_topmost(row, column) {
            Some(tile) if tile.is_open() => tile.id(),
            _ => {
                tracing::trace!(row, column, "click ignored: no open tile");
                return SelectOutcome::Ignored;
            }
        };

        let outcome = match self.selection {
            Selection::OneSelected(held) if held == clicked => return SelectOutcome::Ignored,
            Selection::Idle => {
                self.registry.set_selected(clicked, true);
                self.selection = Selection::OneSelected(clicked);
                tracing::debug!(%clicked, "tile picked");
                SelectOutcome::Picked(clicked)
            }
            Selection::OneSelected(held) => self.resolve_pair(held, clicked),
        };

        let cue = match outcome {
            SelectOutcome::Picked(_) => AudioCue::TilePicked,
            SelectOutcome::PairRemoved(..) => AudioCue::PairRemoved,
            SelectOutcome::Mismatch(..) => AudioCue::Mismatch,
            SelectOutcome::Ignored => return outcome,
        };
        self.finish(Some(cue));
        outcome
    }

    fn resolve_pair(&mut self, held: TileId, clicked: TileId) -> SelectOutcome {
        self.selection = Selection::Idle;

        if faces_match(self.face_of(held), self.face_of(clicked)) {
            self.registry.remove(held);
            self.registry.remove(clicked);
            let open = exposure::recompute(&mut self.registry);
            tracing::debug!(%held, %clicked, remaining = self.registry.len(), open, "pair removed");
            SelectOutcome::PairRemoved(held, clicked)
        } else {
            self.registry.set_selected(held, false);
            self.registry.set_selected(clicked, false);
            tracing::debug!(%held, %clicked, "mismatch");
            SelectOutcome::Mismatch(held, clicked)
        }
    }

    fn face_of(&self, id: TileId) -> TileFace {
        self.registry
            .get(id)
            .map(Tile::face)
            .unwrap_or_else(|| panic!("{} not found in registry", id))
    }

    /// Move the live tiles among their current positions at random.
    ///
    /// Tile count, faces and handles are kept; the occupied position set is
    /// unchanged. Clears any selection. Returns `false` on an empty board.
    pub fn reshuffle(&mut self) -> bool {
        let mut tiles = self.registry.take_all();
        if tiles.is_empty() {
            return false;
        }

        let positions: Vec<Position> = tiles.iter().map(Tile::position).collect();
        self.rng.shuffle(&mut tiles);

        for (tile, position) in tiles.iter_mut().zip(positions) {
            tile.set_position(position);
            tile.set_selected(false);
            tile.set_open(false);
        }
        for tile in tiles {
            self.registry.restore(tile);
        }

        self.selection = Selection::Idle;
        let open = exposure::recompute(&mut self.registry);

        tracing::debug!(tiles = self.registry.len(), open, "board reshuffled");
        self.finish(None);
        true
    }

    /// Recompute exposure without any structural change.
    ///
    /// Operations already do this; calling it again changes nothing.
    pub fn recompute_exposure(&mut self) -> usize {
        let open = exposure::recompute(&mut self.registry);
        self.finish(None);
        open
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[must_use]
    pub fn registry(&self) -> &TileRegistry {
        &self.registry
    }

    /// Live tiles in stable enumeration order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.registry.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.registry.get(id)
    }

    /// Topmost tile on `(row, column)`.
    #[must_use]
    pub fn tile_at(&self, row: i32, column: i32) -> Option<&Tile> {
        self.registry.find_topmost(row, column)
    }

    /// Tile at an enumeration index.
    #[must_use]
    pub fn tile_at_index(&self, index: usize) -> Option<&Tile> {
        self.registry.get_index(index)
    }

    /// Tiles that can currently be picked.
    pub fn open_tiles(&self) -> impl Iterator<Item = &Tile> + '_ {
        self.registry.iter().filter(|t| t.is_open())
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Handle of the held tile, if any.
    #[must_use]
    pub fn first_selected(&self) -> Option<TileId> {
        self.selection.held()
    }

    /// Full attribute copy of every live tile, in enumeration order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TileSnapshot> {
        self.registry.iter().map(Tile::snapshot).collect()
    }

    /// Current RNG state, for reproducing later shuffles.
    #[must_use]
    pub fn rng_state(&self) -> BoardRngState {
        self.rng.state()
    }

    // === Notification ===

    fn finish(&mut self, cue: Option<AudioCue>) {
        self.debug_check_selection();

        let mut events = self.registry.take_events();
        events.extend(cue.map(BoardEvent::Cue));
        if events.is_empty() || self.observers.is_empty() {
            return;
        }

        for observer in &mut self.observers {
            for event in &events {
                observer.on_event(event);
            }
        }
    }

    fn debug_check_selection(&self) {
        if cfg!(debug_assertions) {
            let selected: Vec<TileId> = self
                .registry
                .iter()
                .filter(|t| t.is_selected())
                .map(Tile::id)
                .collect();
            assert!(selected.len() <= 1, "more than one tile selected: {:?}", selected);
            assert_eq!(
                selected.first().copied(),
                self.selection.held(),
                "selection state out of sync with tiles"
            );
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::turtle()
    }
}

impl std::fmt::Debug for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Board")
            .field("tiles", &self.registry.len())
            .field("selection", &self.selection)
            .field("observers", &self.observers.len())
            .finish()
    }
}
