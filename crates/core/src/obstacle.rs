//! Obstacle resolver - ice degradation around a removal
//!
//! After a group comes off the board, every surviving ice tile that sits
//! orthogonally next to a removed tile of its own color thaws one level:
//! thick ice thins, thin ice becomes a plain tile, and an iced counter loses
//! its shell. A single pass degrades a tile at most one level, no matter how
//! many removed tiles bordered it.

use crate::board::{Board, BOARD_SIZE};
use crate::connect::DIRS;
use tilepop_types::Tile;

/// Thaw every ice tile adjacent to a removed same-color tile, one level each.
///
/// `board` is the survivor board (the removed tiles are already gone);
/// `removed` is the group that came off. Returns the degraded board. The
/// marker grid keyed by cell guarantees idempotence within the pass.
pub fn degrade_adjacent(board: &Board, removed: &[Tile]) -> Board {
    let mut degraded = board.clone();
    let mut marked = [false; BOARD_SIZE];

    for gone in removed {
        for (dx, dy) in DIRS {
            let nx = gone.x + dx;
            let ny = gone.y + dy;
            let idx = match Board::index(nx, ny) {
                Some(idx) => idx,
                None => continue,
            };
            if marked[idx] {
                continue;
            }
            let neighbor = match degraded.tile_at(nx, ny) {
                Some(tile) => tile,
                None => continue,
            };
            if !neighbor.variant.is_ice() || neighbor.color != gone.color {
                continue;
            }
            let thawed = match neighbor.variant.thawed() {
                Some(variant) => variant,
                None => continue,
            };
            marked[idx] = true;
            let mut next = neighbor;
            next.variant = thawed;
            degraded.remove_at(nx, ny);
            degraded.insert(next);
        }
    }

    degraded
}
