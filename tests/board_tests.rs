//! Board tests - grid storage and position invariants

use tilepop::core::Board;
use tilepop::types::{Tile, TileColor, TileId, TileVariant, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.tile_count(), 0);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_empty_at(x, y), "cell ({}, {}) should be empty", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    assert!(board.is_out_of_bounds(BOARD_WIDTH as i8, 0));
    assert!(!board.is_out_of_bounds(0, 0));
}

#[test]
fn test_insert_and_lookup() {
    let mut board = Board::new();
    let tile = Tile::normal(TileId(1), TileColor::Red, 5, 10);

    assert!(board.insert(tile));
    assert_eq!(board.tile_at(5, 10), Some(tile));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_empty_at(5, 10));
}

#[test]
fn test_one_tile_per_cell() {
    let mut board = Board::new();
    assert!(board.insert(Tile::normal(TileId(1), TileColor::Red, 2, 2)));
    assert!(!board.insert(Tile::normal(TileId(2), TileColor::Blue, 2, 2)));

    // The original occupant is untouched
    assert_eq!(board.tile_at(2, 2).unwrap().id, TileId(1));
    assert_eq!(board.tile_count(), 1);
}

#[test]
fn test_remove_at_returns_the_tile() {
    let mut board = Board::new();
    let tile = Tile::counter(TileId(4), TileVariant::Counter, TileColor::Green, 1, 1, 3);
    board.insert(tile);

    assert_eq!(board.remove_at(1, 1), Some(tile));
    assert_eq!(board.remove_at(1, 1), None);
    assert_eq!(board.remove_at(-1, -1), None);
}

#[test]
fn test_from_tiles_skips_collisions() {
    let board = Board::from_tiles([
        Tile::normal(TileId(1), TileColor::Red, 0, 0),
        Tile::normal(TileId(2), TileColor::Blue, 0, 0),
        Tile::normal(TileId(3), TileColor::Green, 0, 14), // out of bounds
    ]);
    assert_eq!(board.tile_count(), 1);
    assert_eq!(board.tile_at(0, 0).unwrap().id, TileId(1));
}

#[test]
fn test_clear() {
    let mut board = Board::from_tiles([
        Tile::normal(TileId(1), TileColor::Red, 0, 0),
        Tile::normal(TileId(2), TileColor::Blue, 1, 0),
    ]);
    board.clear();
    assert_eq!(board.tile_count(), 0);
}
