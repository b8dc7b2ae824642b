//! Position catalog: the shape of the pyramid.
//!
//! A catalog is an ordered list of layers, each an ordered list of cells.
//! Enumerating it layer by layer yields every board position; a position's
//! layer is the index of the list it came from. Layout generation deals
//! faces onto positions in exactly this order.

use rustc_hash::FxHashSet;

use crate::core::error::ConfigError;
use crate::core::position::{Cell, Position};

/// Canonical turtle footprint per layer: inclusive row span and column span.
///
/// Cells are enumerated row-major within each layer.
const TURTLE_LAYERS: [((i32, i32), (i32, i32)); 5] = [
    ((3, 10), (3, 11)),
    ((4, 9), (4, 10)),
    ((5, 8), (5, 9)),
    ((6, 8), (6, 8)),
    ((7, 7), (7, 7)),
];

/// Immutable set of board coordinates, grouped by layer.
///
/// ## Example
///
/// ```
/// use turtle_mahjong::layout::PositionCatalog;
///
/// let turtle = PositionCatalog::turtle();
/// assert_eq!(turtle.layer_sizes(), vec![72, 42, 20, 9, 1]);
/// assert_eq!(turtle.len(), 144);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PositionCatalog {
    layers: Vec<Vec<Cell>>,
}

impl PositionCatalog {
    /// The canonical five-layer turtle (144 positions).
    #[must_use]
    pub fn turtle() -> Self {
        let layers = TURTLE_LAYERS
            .iter()
            .map(|&((row_lo, row_hi), (col_lo, col_hi))| {
                (row_lo..=row_hi)
                    .flat_map(|row| (col_lo..=col_hi).map(move |column| Cell::new(row, column)))
                    .collect()
            })
            .collect();
        Self { layers }
    }

    /// Build a custom catalog from per-layer cell lists, bottom layer first.
    ///
    /// Fails if there are no layers, a layer is empty, a cell repeats within
    /// a layer, or there are more layers than fit in a `u8`.
    pub fn from_layers<L, C>(layers: impl IntoIterator<Item = L>) -> Result<Self, ConfigError>
    where
        L: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let layers: Vec<Vec<Cell>> = layers
            .into_iter()
            .map(|layer| layer.into_iter().map(Into::into).collect())
            .collect();

        let catalog = Self { layers };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check the catalog is a usable board shape.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        if self.layers.len() > usize::from(u8::MAX) + 1 {
            return Err(ConfigError::TooManyLayers { count: self.layers.len() });
        }

        for (index, layer) in self.layers.iter().enumerate() {
            if layer.is_empty() {
                return Err(ConfigError::EmptyLayer { layer: index });
            }
            let mut seen = FxHashSet::default();
            for cell in layer {
                if !seen.insert(*cell) {
                    return Err(ConfigError::DuplicateCell {
                        layer: index as u8,
                        row: cell.row,
                        column: cell.column,
                    });
                }
            }
        }
        Ok(())
    }

    // === Queries ===

    /// Total number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Number of cells on each layer, bottom first.
    #[must_use]
    pub fn layer_sizes(&self) -> Vec<usize> {
        self.layers.iter().map(Vec::len).collect()
    }

    /// Cells of one layer, in enumeration order.
    #[must_use]
    pub fn layer(&self, layer: u8) -> &[Cell] {
        self.layers.get(usize::from(layer)).map_or(&[], Vec::as_slice)
    }

    /// Layer a flat enumeration index falls on.
    #[must_use]
    pub fn layer_of_index(&self, index: usize) -> Option<u8> {
        let mut remainder = index;
        for (layer, cells) in self.layers.iter().enumerate() {
            if remainder < cells.len() {
                return Some(layer as u8);
            }
            remainder -= cells.len();
        }
        None
    }

    /// Every position, layer 0 first.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.layers.iter().enumerate().flat_map(|(layer, cells)| {
            cells.iter().map(move |cell| cell.at_layer(layer as u8))
        })
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        self.layer(position.layer).contains(&position.cell())
    }
}

impl Default for PositionCatalog {
    fn default() -> Self {
        Self::turtle()
    }
}
