//! Gravity engine - per-column downward compaction
//!
//! Each column settles independently: present tiles pack toward the bottom
//! (increasing y) preserving their relative vertical order, leaving any empty
//! cells at the top. No variant is exempt - rock, steel, and ice fall exactly
//! like plain tiles.
//!
//! The engine does not animate anything. It returns the settled board plus a
//! movement plan describing every tile whose position changed; the animation
//! layer replays the plan and the settled board is the ground truth.

use arrayvec::ArrayVec;

use crate::board::Board;
use tilepop_types::{Tile, TileId, BOARD_HEIGHT, BOARD_WIDTH};

/// One tile's displacement under gravity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Movement {
    pub tile_id: TileId,
    pub from: (i8, i8),
    pub to: (i8, i8),
}

/// All displacements of one settle pass; tiles that did not move are omitted
pub type MovementPlan = Vec<Movement>;

/// Capacity of a single column stack
const COLUMN_CAP: usize = BOARD_HEIGHT as usize;

/// Settle the board under gravity.
///
/// Post-condition: in every column the occupied cells form one contiguous run
/// ending at the bottom row, with all empties above it.
pub fn settle(board: &Board) -> (Board, MovementPlan) {
    let mut settled = Board::new();
    let mut plan = MovementPlan::new();

    for x in 0..BOARD_WIDTH as i8 {
        // Collect the column top to bottom; packing assigns the last-collected
        // (lowest) tile to the bottom row, preserving relative order.
        let mut stack: ArrayVec<Tile, COLUMN_CAP> = ArrayVec::new();
        for y in 0..BOARD_HEIGHT as i8 {
            if let Some(tile) = board.tile_at(x, y) {
                stack.push(tile);
            }
        }

        let mut write_y = BOARD_HEIGHT as i8 - 1;
        for tile in stack.iter().rev() {
            let mut moved = *tile;
            if moved.y != write_y {
                plan.push(Movement {
                    tile_id: moved.id,
                    from: (moved.x, moved.y),
                    to: (x, write_y),
                });
                moved.y = write_y;
            }
            settled.insert(moved);
            write_y -= 1;
        }
    }

    (settled, plan)
}
