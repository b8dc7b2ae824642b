//! Board configuration.
//!
//! Callers configure the engine at startup by providing:
//! - `PositionCatalog`: The pyramid shape (turtle by default)
//! - `TileSet`: Faces available to the generator (classic set by default)
//! - A seed, or nothing for an entropy-seeded board
//!
//! The defaults reproduce the canonical 144-tile turtle.

use crate::layout::{PositionCatalog, TileSet};

use super::error::ConfigError;
use super::rng::BoardRng;

/// Complete board configuration.
///
/// ```
/// use turtle_mahjong::core::BoardConfig;
///
/// let config = BoardConfig::new().with_seed(42);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.catalog.len(), 144);
/// ```
#[derive(Clone, Debug, Default)]
pub struct BoardConfig {
    /// Coordinates tiles are dealt onto.
    pub catalog: PositionCatalog,

    /// Faces the generator draws from.
    pub tile_set: TileSet,

    /// Fixed RNG seed. `None` draws fresh entropy.
    pub seed: Option<u64>,
}

impl BoardConfig {
    /// Canonical turtle with the classic tile set and an entropy seed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a fixed seed so every shuffle is reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Use a custom board shape.
    #[must_use]
    pub fn with_catalog(mut self, catalog: PositionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Use a custom tile set.
    #[must_use]
    pub fn with_tile_set(mut self, tile_set: TileSet) -> Self {
        self.tile_set = tile_set;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.tile_set.validate()
    }

    /// RNG for a board built from this configuration.
    #[must_use]
    pub fn rng(&self) -> BoardRng {
        self.seed.map_or_else(BoardRng::from_entropy, BoardRng::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::SuitRange;
    use crate::tiles::TileKind;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::new();
        assert_eq!(config.catalog, PositionCatalog::turtle());
        assert_eq!(config.tile_set, TileSet::classic());
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let config = BoardConfig::new().with_seed(11);
        assert_eq!(config.rng().seed(), 11);
        assert_eq!(config.rng().state(), config.rng().state());
    }

    #[test]
    fn test_builder() {
        let catalog = PositionCatalog::from_layers(vec![vec![(0, 0), (0, 1)]]).unwrap();
        let mut tile_set = TileSet::classic();
        tile_set.suits.truncate(1);

        let config = BoardConfig::new()
            .with_catalog(catalog.clone())
            .with_tile_set(tile_set.clone())
            .with_seed(3);

        assert_eq!(config.catalog, catalog);
        assert_eq!(config.tile_set, tile_set);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_validate_reports_tile_set_error() {
        let mut tile_set = TileSet::classic();
        tile_set.suits[0] = SuitRange::new(TileKind::Bamboo, 0, 9);

        let config = BoardConfig::new().with_tile_set(tile_set);
        assert_eq!(
            config.validate(),
            Err(ConfigError::InvalidSuitRange { kind: TileKind::Bamboo, min: 0, max: 9 })
        );
    }
}
