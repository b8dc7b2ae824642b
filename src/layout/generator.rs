//! Layout generation.
//!
//! Faces are produced in a fixed cyclic order by [`FaceSequence`]: every
//! other draw is the next standard-suit tile (values ascending, suits in
//! turn, wrapping after the last suit); the draws in between alternate
//! between the next season and the next flower. The sequence is shuffled
//! and dealt onto the catalog positions in enumeration order.
//!
//! The sequence does not guarantee every face appears an even number of
//! times, so a generated board is not necessarily clearable.

use crate::core::position::Position;
use crate::core::rng::BoardRng;
use crate::tiles::{TileFace, TileRegistry};

use super::catalog::PositionCatalog;
use super::tile_set::TileSet;

/// Infinite iterator over faces in generation order.
///
/// ```
/// use turtle_mahjong::layout::{FaceSequence, TileSet};
/// use turtle_mahjong::tiles::{TileFace, TileKind};
///
/// let set = TileSet::classic();
/// let first: Vec<_> = FaceSequence::new(&set).take(4).collect();
/// assert_eq!(first, vec![
///     TileFace::suit(TileKind::Bamboo, 1),
///     TileFace::special(TileKind::Spring),
///     TileFace::suit(TileKind::Bamboo, 2),
///     TileFace::special(TileKind::Chrysanthemum),
/// ]);
/// ```
#[derive(Clone, Debug)]
pub struct FaceSequence<'a> {
    tile_set: &'a TileSet,
    suit_index: usize,
    suit_value: u8,
    standard_next: bool,
    season_next: bool,
    season_index: usize,
    flower_index: usize,
}

impl<'a> FaceSequence<'a> {
    /// Start a fresh sequence. The tile set must be valid.
    #[must_use]
    pub fn new(tile_set: &'a TileSet) -> Self {
        debug_assert!(tile_set.validate().is_ok(), "invalid tile set");
        Self {
            tile_set,
            suit_index: 0,
            suit_value: tile_set.suits.first().map_or(1, |s| s.min),
            standard_next: true,
            season_next: true,
            season_index: 0,
            flower_index: 0,
        }
    }

    fn next_standard(&mut self) -> TileFace {
        let suits = &self.tile_set.suits;
        let suit = suits[self.suit_index];
        let face = TileFace::suit(suit.kind, self.suit_value);

        if self.suit_value >= suit.max {
            self.suit_index = (self.suit_index + 1) % suits.len();
            self.suit_value = suits[self.suit_index].min;
        } else {
            self.suit_value += 1;
        }
        face
    }

    fn next_special(&mut self) -> TileFace {
        let set = self.tile_set;
        let kind = if self.season_next {
            let kind = set.seasons[self.season_index];
            self.season_index = (self.season_index + 1) % set.seasons.len();
            kind
        } else {
            let kind = set.flowers[self.flower_index];
            self.flower_index = (self.flower_index + 1) % set.flowers.len();
            kind
        };
        self.season_next = !self.season_next;
        TileFace::special(kind)
    }
}

impl Iterator for FaceSequence<'_> {
    type Item = TileFace;

    fn next(&mut self) -> Option<TileFace> {
        let face = if self.standard_next {
            self.next_standard()
        } else {
            self.next_special()
        };
        self.standard_next = !self.standard_next;
        Some(face)
    }
}

/// Deals a shuffled face sequence onto a catalog.
#[derive(Clone, Copy, Debug)]
pub struct LayoutGenerator<'a> {
    catalog: &'a PositionCatalog,
    tile_set: &'a TileSet,
}

impl<'a> LayoutGenerator<'a> {
    #[must_use]
    pub fn new(catalog: &'a PositionCatalog, tile_set: &'a TileSet) -> Self {
        Self { catalog, tile_set }
    }

    /// Unshuffled faces, one per catalog position.
    #[must_use]
    pub fn faces(&self) -> Vec<TileFace> {
        FaceSequence::new(self.tile_set).take(self.catalog.len()).collect()
    }

    /// Shuffle the faces and pair them with positions in catalog order.
    pub fn deal(&self, rng: &mut BoardRng) -> Vec<(Position, TileFace)> {
        let mut faces = self.faces();
        rng.shuffle(&mut faces);
        self.catalog.positions().zip(faces).collect()
    }

    /// Replace the registry contents with a freshly dealt layout.
    ///
    /// Tiles are inserted closed and unselected; exposure is the caller's job.
    pub fn populate(&self, registry: &mut TileRegistry, rng: &mut BoardRng) {
        registry.clear();
        for (position, face) in self.deal(rng) {
            registry.spawn(face, position);
        }
        tracing::debug!(tiles = registry.len(), layers = self.catalog.layer_count(), "layout dealt");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::{Category, TileKind};
    use rustc_hash::FxHashMap;

    fn turtle_faces() -> Vec<TileFace> {
        let catalog = PositionCatalog::turtle();
        let set = TileSet::classic();
        LayoutGenerator::new(&catalog, &set).faces()
    }

    #[test]
    fn test_standard_draws_walk_suits_in_order() {
        let faces = turtle_faces();
        let standard: Vec<_> = faces.iter().step_by(2).copied().collect();

        assert_eq!(standard.len(), 72);
        assert_eq!(standard[0], TileFace::suit(TileKind::Bamboo, 1));
        assert_eq!(standard[8], TileFace::suit(TileKind::Bamboo, 9));
        assert_eq!(standard[9], TileFace::suit(TileKind::Circle, 1));
        assert_eq!(standard[17], TileFace::suit(TileKind::Circle, 9));
        assert_eq!(standard[18], TileFace::suit(TileKind::Pinyin, 1));
        assert_eq!(standard[32], TileFace::suit(TileKind::Pinyin, 15));
        // Wraps back to the first suit
        assert_eq!(standard[33], TileFace::suit(TileKind::Bamboo, 1));
        assert_eq!(standard[66], TileFace::suit(TileKind::Bamboo, 1));
        assert_eq!(standard[71], TileFace::suit(TileKind::Bamboo, 6));
    }

    #[test]
    fn test_special_draws_alternate_categories() {
        let faces = turtle_faces();
        let special: Vec<_> = faces.iter().skip(1).step_by(2).copied().collect();

        assert_eq!(special.len(), 72);
        for (i, face) in special.iter().enumerate() {
            let expected = if i % 2 == 0 { Category::Season } else { Category::Flower };
            assert_eq!(face.category(), expected, "draw {}", i);
            assert_eq!(face.value, None);
        }

        assert_eq!(special[0].kind, TileKind::Spring);
        assert_eq!(special[1].kind, TileKind::Chrysanthemum);
        assert_eq!(special[2].kind, TileKind::Summer);
        assert_eq!(special[3].kind, TileKind::Lotus);
        assert_eq!(special[6].kind, TileKind::Winter);
        assert_eq!(special[7].kind, TileKind::Peony);
        assert_eq!(special[8].kind, TileKind::Spring);
    }

    #[test]
    fn test_face_counts_for_turtle() {
        let faces = turtle_faces();
        assert_eq!(faces.len(), 144);

        let mut counts: FxHashMap<TileFace, usize> = FxHashMap::default();
        for face in &faces {
            *counts.entry(*face).or_default() += 1;
        }

        // Two full passes over 33 suit faces plus Bamboo 1..=6 once more
        assert_eq!(counts[&TileFace::suit(TileKind::Bamboo, 1)], 3);
        assert_eq!(counts[&TileFace::suit(TileKind::Bamboo, 7)], 2);
        assert_eq!(counts[&TileFace::suit(TileKind::Pinyin, 15)], 2);
        for kind in TileKind::SEASONS.iter().chain(TileKind::FLOWERS.iter()) {
            assert_eq!(counts[&TileFace::special(*kind)], 9);
        }
    }

    #[test]
    fn test_sequence_restarts_per_generator() {
        assert_eq!(turtle_faces(), turtle_faces());
    }

    #[test]
    fn test_deal_is_seeded_permutation() {
        let catalog = PositionCatalog::turtle();
        let set = TileSet::classic();
        let generator = LayoutGenerator::new(&catalog, &set);

        let a = generator.deal(&mut BoardRng::new(5));
        let b = generator.deal(&mut BoardRng::new(5));
        let c = generator.deal(&mut BoardRng::new(6));
        assert_eq!(a, b);
        assert_ne!(a, c);

        let positions: Vec<_> = a.iter().map(|(p, _)| *p).collect();
        assert_eq!(positions, catalog.positions().collect::<Vec<_>>());

        let mut dealt: Vec<_> = a.iter().map(|(_, f)| *f).collect();
        let mut ordered = generator.faces();
        dealt.sort_by_key(|f| (f.kind, f.value));
        ordered.sort_by_key(|f| (f.kind, f.value));
        assert_eq!(dealt, ordered);
    }

    #[test]
    fn test_populate_replaces_registry() {
        let catalog = PositionCatalog::turtle();
        let set = TileSet::classic();
        let generator = LayoutGenerator::new(&catalog, &set);
        let mut registry = TileRegistry::new();
        let mut rng = BoardRng::new(1);

        generator.populate(&mut registry, &mut rng);
        generator.populate(&mut registry, &mut rng);

        assert_eq!(registry.len(), 144);
        assert!(registry.iter().all(|t| !t.is_open() && !t.is_selected() && t.is_face_up()));
    }
}
