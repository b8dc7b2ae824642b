//! Tile faces: kind, category, and value.
//!
//! The face set is closed. Standard suit tiles always carry a value; season
//! and flower tiles carry none and match anything in their own category.

use serde::{Deserialize, Serialize};

/// Broad grouping used by the match rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Numbered suit tiles (Bamboo, Circle, Pinyin).
    Suit,
    /// Spring, Summer, Fall, Winter.
    Season,
    /// Chrysanthemum, Lotus, Orchid, Peony.
    Flower,
}

impl Category {
    /// Lowercase name, as used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Suit => "suit",
            Category::Season => "season",
            Category::Flower => "flower",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Every face identifier a tile can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Bamboo,
    Circle,
    Pinyin,
    Spring,
    Summer,
    Fall,
    Winter,
    Chrysanthemum,
    Lotus,
    Orchid,
    Peony,
}

impl TileKind {
    /// The three standard suits, in draw order.
    pub const SUITS: [TileKind; 3] = [TileKind::Bamboo, TileKind::Circle, TileKind::Pinyin];

    /// Season tiles, in draw order.
    pub const SEASONS: [TileKind; 4] =
        [TileKind::Spring, TileKind::Summer, TileKind::Fall, TileKind::Winter];

    /// Flower tiles, in draw order.
    pub const FLOWERS: [TileKind; 4] =
        [TileKind::Chrysanthemum, TileKind::Lotus, TileKind::Orchid, TileKind::Peony];

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            TileKind::Bamboo | TileKind::Circle | TileKind::Pinyin => Category::Suit,
            TileKind::Spring | TileKind::Summer | TileKind::Fall | TileKind::Winter => {
                Category::Season
            }
            TileKind::Chrysanthemum | TileKind::Lotus | TileKind::Orchid | TileKind::Peony => {
                Category::Flower
            }
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TileKind::Bamboo => "Bamboo",
            TileKind::Circle => "Circle",
            TileKind::Pinyin => "Pinyin",
            TileKind::Spring => "Spring",
            TileKind::Summer => "Summer",
            TileKind::Fall => "Fall",
            TileKind::Winter => "Winter",
            TileKind::Chrysanthemum => "Chrysanthemum",
            TileKind::Lotus => "Lotus",
            TileKind::Orchid => "Orchid",
            TileKind::Peony => "Peony",
        }
    }
}

impl std::fmt::Display for TileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The identity printed on a tile: kind plus optional value.
///
/// ```
/// use turtle_mahjong::tiles::{Category, TileFace, TileKind};
///
/// let three_bamboo = TileFace::suit(TileKind::Bamboo, 3);
/// assert_eq!(three_bamboo.value, Some(3));
///
/// let lotus = TileFace::special(TileKind::Lotus);
/// assert_eq!(lotus.category(), Category::Flower);
/// assert_eq!(lotus.value, None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileFace {
    pub kind: TileKind,
    pub value: Option<u8>,
}

impl TileFace {
    /// A numbered suit tile.
    #[must_use]
    pub fn suit(kind: TileKind, value: u8) -> Self {
        debug_assert_eq!(kind.category(), Category::Suit, "{kind} is not a suit");
        Self { kind, value: Some(value) }
    }

    /// A season or flower tile.
    #[must_use]
    pub fn special(kind: TileKind) -> Self {
        debug_assert_ne!(kind.category(), Category::Suit, "{kind} needs a value");
        Self { kind, value: None }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        self.kind.category()
    }
}

impl std::fmt::Display for TileFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Some(v) => write!(f, "{} {}", self.kind, v),
            None => write!(f, "{}", self.kind),
        }
    }
}
