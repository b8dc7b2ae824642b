//! Shared helpers for integration tests.

#![allow(dead_code)]

use turtle_mahjong::{faces_match, Board, Position, Tile, TileId};

/// Install a test-friendly subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Open tiles as `(id, row, column)`.
pub fn open_tiles(board: &Board) -> Vec<(TileId, i32, i32)> {
    board.open_tiles().map(|t| (t.id(), t.row(), t.column())).collect()
}

/// First pair of open tiles satisfying `predicate`, in enumeration order.
pub fn find_open_pair(
    board: &Board,
    predicate: impl Fn(&Tile, &Tile) -> bool,
) -> Option<(Tile, Tile)> {
    let open: Vec<&Tile> = board.open_tiles().collect();
    for (i, a) in open.iter().enumerate() {
        for b in &open[i + 1..] {
            if predicate(a, b) {
                return Some(((*a).clone(), (*b).clone()));
            }
        }
    }
    None
}

/// Generated board that has at least one open matching pair.
pub fn board_with_open_match() -> (Board, Tile, Tile) {
    for seed in 0..64 {
        let mut board = Board::with_seed(seed);
        board.generate_layout();
        if let Some((a, b)) = find_open_pair(&board, |a, b| faces_match(a.face(), b.face())) {
            return (board, a, b);
        }
    }
    panic!("no seed in 0..64 produced an open matching pair");
}

/// Exposure computed the slow way, straight from the rules.
pub fn expected_open(board: &Board, tile: &Tile) -> bool {
    let pos = tile.position();
    let occupied = |p: Position| board.tiles().any(|t| t.position() == p);

    let covered = board
        .tiles()
        .any(|t| t.row() == pos.row && t.column() == pos.column && t.layer() > pos.layer);
    if covered {
        return false;
    }
    !(occupied(pos.left()) && occupied(pos.right()))
}

/// Assert every board invariant the engine promises.
pub fn assert_invariants(board: &Board) {
    let selected: Vec<TileId> = board.tiles().filter(|t| t.is_selected()).map(Tile::id).collect();
    assert!(selected.len() <= 1, "several tiles selected: {:?}", selected);
    assert_eq!(selected.first().copied(), board.first_selected());

    let mut positions: Vec<Position> = board.tiles().map(Tile::position).collect();
    let count = positions.len();
    positions.sort();
    positions.dedup();
    assert_eq!(positions.len(), count, "two tiles share a position");

    for tile in board.tiles() {
        assert!(tile.is_face_up());
        assert_eq!(tile.is_open(), expected_open(board, tile), "wrong exposure for {}", tile.position());
        assert!(board.config().catalog.contains(tile.position()));
    }
}
