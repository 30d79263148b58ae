//! Connectivity analyzer - same-color flood fill over the board
//!
//! Computes the removable group for a start tile with a 4-directional BFS.
//! Every step lands on a tile of the start color; what happens there depends
//! on the variant:
//!
//! - participating tiles (normal, exposed counters) join the group and the
//!   walk continues through them;
//! - ice tiles are walked across but never join the group;
//! - rock and steel terminate the walk in that direction regardless of color.
//!
//! The walk inspects a cell's color before its variant: an ice tile of a
//! different color is not traversed at all.

use std::collections::VecDeque;

use crate::board::{Board, BOARD_SIZE};
use tilepop_types::{Tile, TileColor, TileVariant};

/// 4-directional neighbor offsets
pub(crate) const DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A removable group: the tiles collected by the flood fill, plus their color
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub color: TileColor,
    pub members: Vec<Tile>,
}

impl Group {
    /// Number of tiles in the group
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether the group contains the tile at (x, y)
    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.members.iter().any(|t| t.x == x && t.y == y)
    }
}

/// Compute the removable group for the tile at (x, y).
///
/// Returns `None` when the cell is empty or the start tile does not
/// participate in groups (ice, rock, steel): such tiles have no group of
/// their own. The group always contains the start tile itself.
pub fn same_color_group(board: &Board, x: i8, y: i8) -> Option<Group> {
    let start = board.tile_at(x, y)?;
    if !start.variant.participates_in_group() {
        return None;
    }
    Some(flood(board, start))
}

/// Compute the connectivity count group for a counter-family tile at (x, y).
///
/// The walk is identical to [`same_color_group`]; the difference is the
/// admission rule at the start: only an exposed `Counter`/`CounterPlus` tile
/// qualifies, and it counts itself toward its own threshold. Iced counters
/// have no count until their shell thaws.
pub fn counter_group(board: &Board, x: i8, y: i8) -> Option<Group> {
    let start = board.tile_at(x, y)?;
    match start.variant {
        TileVariant::Counter | TileVariant::CounterPlus => Some(flood(board, start)),
        _ => None,
    }
}

/// BFS flood fill from a participating start tile.
///
/// The visited bitmap covers every inspected cell, so each tile is examined
/// once and the walk always terminates. Every rule consulted along the way
/// depends only on the tile itself, never on the path taken to it, so marking
/// rejected cells visited is safe.
fn flood(board: &Board, start: Tile) -> Group {
    let mut visited = [false; BOARD_SIZE];
    let mut queue = VecDeque::new();
    let mut members = Vec::new();

    // Start index is in bounds: the tile came off the board.
    if let Some(idx) = Board::index(start.x, start.y) {
        visited[idx] = true;
    }
    members.push(start);
    queue.push_back(start.pos());

    while let Some((cx, cy)) = queue.pop_front() {
        for (dx, dy) in DIRS {
            let nx = cx + dx;
            let ny = cy + dy;
            let idx = match Board::index(nx, ny) {
                Some(idx) => idx,
                None => continue,
            };
            if visited[idx] {
                continue;
            }
            let tile = match board.tile_at(nx, ny) {
                Some(tile) => tile,
                None => continue,
            };
            visited[idx] = true;

            if tile.variant.blocks_walk() || tile.color != start.color {
                continue;
            }
            if tile.variant.participates_in_group() {
                members.push(tile);
                queue.push_back(tile.pos());
            } else if tile.variant.passes_through() {
                queue.push_back(tile.pos());
            }
        }
    }

    Group {
        color: start.color,
        members,
    }
}

/// Whether any `Normal` tile on the board belongs to a group of size >= 2.
///
/// Used by the layout generator's validation step. Each accepted group marks
/// its members in a seen bitmap so the scan visits every component once.
pub fn has_removable_normal_group(board: &Board) -> bool {
    let mut seen = [false; BOARD_SIZE];
    for tile in board.tiles() {
        if tile.variant != TileVariant::Normal {
            continue;
        }
        let idx = match Board::index(tile.x, tile.y) {
            Some(idx) => idx,
            None => continue,
        };
        if seen[idx] {
            continue;
        }
        let group = flood(board, tile);
        for member in &group.members {
            if let Some(midx) = Board::index(member.x, member.y) {
                seen[midx] = true;
            }
        }
        if group.len() >= 2 {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilepop_types::{TileColor, TileId};

    fn normal(id: u32, color: TileColor, x: i8, y: i8) -> Tile {
        Tile::normal(TileId(id), color, x, y)
    }

    #[test]
    fn test_singleton_group() {
        let board = Board::from_tiles([normal(1, TileColor::Red, 4, 4)]);
        let group = same_color_group(&board, 4, 4).unwrap();
        assert_eq!(group.len(), 1);
        assert_eq!(group.color, TileColor::Red);
    }

    #[test]
    fn test_group_ignores_other_colors() {
        let board = Board::from_tiles([
            normal(1, TileColor::Red, 0, 0),
            normal(2, TileColor::Red, 1, 0),
            normal(3, TileColor::Blue, 2, 0),
        ]);
        let group = same_color_group(&board, 0, 0).unwrap();
        assert_eq!(group.len(), 2);
        assert!(group.contains(0, 0));
        assert!(group.contains(1, 0));
        assert!(!group.contains(2, 0));
    }

    #[test]
    fn test_start_on_non_participating_tile() {
        let mut board = Board::new();
        board.insert(Tile::obstacle(
            TileId(1),
            TileVariant::IceLv1,
            TileColor::Red,
            0,
            0,
        ));
        board.insert(Tile::obstacle(
            TileId(2),
            TileVariant::Rock,
            TileColor::Red,
            1,
            0,
        ));
        assert!(same_color_group(&board, 0, 0).is_none());
        assert!(same_color_group(&board, 1, 0).is_none());
        assert!(same_color_group(&board, 5, 5).is_none(), "empty cell");
    }
}
