//! Pair matching.

use crate::tiles::{Category, TileFace};

/// Whether two faces form a removable pair.
///
/// Any season matches any season and any flower matches any flower. Suit
/// tiles match only the same kind with the same value.
///
/// ```
/// use turtle_mahjong::rules::faces_match;
/// use turtle_mahjong::tiles::{TileFace, TileKind};
///
/// let spring = TileFace::special(TileKind::Spring);
/// let winter = TileFace::special(TileKind::Winter);
/// let lotus = TileFace::special(TileKind::Lotus);
///
/// assert!(faces_match(spring, winter));
/// assert!(!faces_match(spring, lotus));
/// ```
#[must_use]
pub fn faces_match(a: TileFace, b: TileFace) -> bool {
    match (a.category(), b.category()) {
        (Category::Season, Category::Season) | (Category::Flower, Category::Flower) => true,
        (Category::Suit, Category::Suit) => a.kind == b.kind && a.value == b.value,
        _ => false,
    }
}
