//! Removal engine - group removal, scoring, and counter eligibility
//!
//! A removal takes a start tile, computes its group, and produces the
//! post-removal board together with the score breakdown. Scoring is quadratic
//! in the group size; the all-clear and booster bonuses are 3/2 multipliers
//! composed multiplicatively, with rounding applied once to the fully
//! composed value.
//!
//! Counter tiles are never removed by their own threshold implicitly: the
//! input layer probes [`can_remove_counter`] before letting a tap on a
//! counter tile proceed.

use crate::board::Board;
use crate::connect::{counter_group, same_color_group, Group};
use tilepop_types::{
    Tile, ALL_CLEAR_DENOMINATOR, ALL_CLEAR_NUMERATOR, BOOSTER_DENOMINATOR, BOOSTER_NUMERATOR,
};

/// Minimum group size removable by a direct tap
pub const MIN_GROUP_SIZE: usize = 2;

/// Score breakdown for a single removal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    /// Base points: group size squared
    pub base: u32,
    /// Whether the removal left no further removable move on the board
    pub all_clear: bool,
    /// Whether the external booster flag was active
    pub booster: bool,
    /// Fully composed and rounded score
    pub final_score: u32,
}

/// Result of a removal: what came off, what remains, and what it scored
#[derive(Debug, Clone, PartialEq)]
pub struct RemovalResult {
    pub removed: Vec<Tile>,
    pub survivors: Board,
    pub score: ScoreBreakdown,
}

impl RemovalResult {
    /// A removal that took nothing off the board
    pub fn is_noop(&self) -> bool {
        self.removed.is_empty()
    }

    fn noop(board: &Board) -> Self {
        Self {
            removed: Vec::new(),
            survivors: board.clone(),
            score: ScoreBreakdown::default(),
        }
    }
}

/// Remove the group of the tile at (x, y).
///
/// A group smaller than [`MIN_GROUP_SIZE`] (including taps on empty cells and
/// non-participating tiles) yields a no-op result: empty `removed`, the board
/// unchanged, zero score. Isolated tiles are never removable by direct tap.
pub fn remove_group(board: &Board, x: i8, y: i8, booster_active: bool) -> RemovalResult {
    let group = match same_color_group(board, x, y) {
        Some(group) if group.len() >= MIN_GROUP_SIZE => group,
        _ => return RemovalResult::noop(board),
    };

    let mut survivors = board.clone();
    for tile in &group.members {
        survivors.remove_at(tile.x, tile.y);
    }

    let base = (group.len() * group.len()) as u32;
    let all_clear = !has_removable_move(&survivors);
    let final_score = compose_score(base, all_clear, booster_active);

    RemovalResult {
        removed: group.members,
        survivors,
        score: ScoreBreakdown {
            base,
            all_clear,
            booster: booster_active,
            final_score,
        },
    }
}

/// Whether the counter tile at (x, y) currently satisfies its threshold.
///
/// The connected same-color count `n` (including the counter itself) is
/// compared against the tile's value: a plus counter is eligible when
/// `n >= value`, a plain counter only when `n == value` exactly. Any other
/// variant, an iced-over counter included, answers false.
pub fn can_remove_counter(board: &Board, x: i8, y: i8) -> bool {
    let tile = match board.tile_at(x, y) {
        Some(tile) => tile,
        None => return false,
    };
    let value = match tile.counter_value {
        Some(value) => value as usize,
        None => return false,
    };
    let group = match counter_group(board, x, y) {
        Some(group) => group,
        None => return false,
    };
    if tile.variant.is_plus() {
        group.len() >= value
    } else {
        group.len() == value
    }
}

/// Whether any player-initiated removal is still possible.
///
/// True when some participating tile belongs to a group of size >= 2, or some
/// counter tile currently satisfies its threshold. Remaining rock, steel, and
/// iced tiles do not count: a board holding only those is considered cleared.
pub fn has_removable_move(board: &Board) -> bool {
    for tile in board.tiles() {
        if !tile.variant.participates_in_group() {
            continue;
        }
        if let Some(group) = same_color_group(board, tile.x, tile.y) {
            if group.len() >= MIN_GROUP_SIZE {
                return true;
            }
        }
        if tile.variant.is_counter() && can_remove_counter(board, tile.x, tile.y) {
            return true;
        }
    }
    false
}

/// Compose the bonus multipliers over the base score and round once.
///
/// Bonuses are integer ratios, so the composed value is computed as a single
/// fraction and rounded half-up at the end, never per multiplier.
fn compose_score(base: u32, all_clear: bool, booster: bool) -> u32 {
    let mut num: u64 = 1;
    let mut den: u64 = 1;
    if all_clear {
        num *= ALL_CLEAR_NUMERATOR as u64;
        den *= ALL_CLEAR_DENOMINATOR as u64;
    }
    if booster {
        num *= BOOSTER_NUMERATOR as u64;
        den *= BOOSTER_DENOMINATOR as u64;
    }
    ((base as u64 * num + den / 2) / den) as u32
}

/// Group accessor re-exported for callers that only need the size probe
pub fn group_size(board: &Board, x: i8, y: i8) -> usize {
    same_color_group(board, x, y).as_ref().map_or(0, Group::len)
}
