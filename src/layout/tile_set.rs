//! Tile set: which faces the generator draws from.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::tiles::{Category, TileKind};

/// A standard suit and its inclusive value range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitRange {
    pub kind: TileKind,
    pub min: u8,
    pub max: u8,
}

impl SuitRange {
    #[must_use]
    pub const fn new(kind: TileKind, min: u8, max: u8) -> Self {
        Self { kind, min, max }
    }
}

/// Faces available to layout generation, in draw order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSet {
    /// Standard suits, drawn in ascending value order one suit after another.
    pub suits: Vec<SuitRange>,
    /// Season members, cycled in order.
    pub seasons: Vec<TileKind>,
    /// Flower members, cycled in order.
    pub flowers: Vec<TileKind>,
}

impl TileSet {
    /// Bamboo 1-9, Circle 1-9, Pinyin 1-15, four seasons, four flowers.
    #[must_use]
    pub fn classic() -> Self {
        Self {
            suits: vec![
                SuitRange::new(TileKind::Bamboo, 1, 9),
                SuitRange::new(TileKind::Circle, 1, 9),
                SuitRange::new(TileKind::Pinyin, 1, 15),
            ],
            seasons: TileKind::SEASONS.to_vec(),
            flowers: TileKind::FLOWERS.to_vec(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.suits.is_empty() {
            return Err(ConfigError::NoSuits);
        }
        for suit in &self.suits {
            if suit.kind.category() != Category::Suit {
                return Err(ConfigError::WrongCategory {
                    kind: suit.kind,
                    expected: Category::Suit.name(),
                });
            }
            if suit.min == 0 || suit.min > suit.max {
                return Err(ConfigError::InvalidSuitRange {
                    kind: suit.kind,
                    min: suit.min,
                    max: suit.max,
                });
            }
        }
        check_specials(&self.seasons, Category::Season)?;
        check_specials(&self.flowers, Category::Flower)
    }
}

fn check_specials(kinds: &[TileKind], category: Category) -> Result<(), ConfigError> {
    if kinds.is_empty() {
        return Err(ConfigError::EmptySpecials { category: category.name() });
    }
    match kinds.iter().find(|k| k.category() != category) {
        Some(&kind) => Err(ConfigError::WrongCategory { kind, expected: category.name() }),
        None => Ok(()),
    }
}

impl Default for TileSet {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_is_valid() {
        let set = TileSet::classic();
        assert!(set.validate().is_ok());
        assert_eq!(set.suits.len(), 3);
        assert_eq!(set.suits[2], SuitRange::new(TileKind::Pinyin, 1, 15));
    }

    #[test]
    fn test_validation_errors() {
        let mut set = TileSet::classic();
        set.suits.clear();
        assert_eq!(set.validate(), Err(ConfigError::NoSuits));

        let mut set = TileSet::classic();
        set.suits[0] = SuitRange::new(TileKind::Bamboo, 5, 4);
        assert_eq!(
            set.validate(),
            Err(ConfigError::InvalidSuitRange { kind: TileKind::Bamboo, min: 5, max: 4 })
        );

        let mut set = TileSet::classic();
        set.suits[1] = SuitRange::new(TileKind::Spring, 1, 4);
        assert_eq!(
            set.validate(),
            Err(ConfigError::WrongCategory { kind: TileKind::Spring, expected: "suit" })
        );

        let mut set = TileSet::classic();
        set.seasons.push(TileKind::Peony);
        assert_eq!(
            set.validate(),
            Err(ConfigError::WrongCategory { kind: TileKind::Peony, expected: "season" })
        );

        let mut set = TileSet::classic();
        set.flowers.clear();
        assert_eq!(set.validate(), Err(ConfigError::EmptySpecials { category: "flower" }));
    }

    #[test]
    fn test_serde_roundtrip() {
        let set = TileSet::classic();
        let json = serde_json::to_string(&set).unwrap();
        let back: TileSet = serde_json::from_str(&json).unwrap();
        assert_eq!(set, back);
    }
}
