//! Layout generator - stage specs to opening boards
//!
//! Generation places the spec's obstacles first, fills the rest of the grid
//! with uniformly random colors from the stage's palette prefix, and accepts
//! the board once at least one removable group of plain tiles exists. The
//! retry loop is bounded; when every attempt comes up empty a deterministic
//! repair recolors a pair of tiles, so generation always terminates with a
//! board and never surfaces an error.
//!
//! Bad placements (out of bounds, colliding with an earlier placement) are
//! dropped with a warning rather than failing the stage.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::connect::{has_removable_normal_group, DIRS};
use crate::rng::SimpleRng;
use crate::snapshot::{color_str_opt, variant_str};
use tilepop_types::{
    Tile, TileColor, TileId, TileVariant, DEFAULT_COUNTER_VALUE, MAX_GENERATION_ATTEMPTS,
    MAX_PALETTE, MIN_PALETTE, PALETTE,
};

/// One fixed obstacle in a stage spec.
///
/// `counter_value` applies to the counter family and defaults to
/// [`DEFAULT_COUNTER_VALUE`] when omitted. `color` may be omitted, in which
/// case the obstacle draws a random color from the stage palette (it is
/// meaningless for rock and steel either way).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePlacement {
    #[serde(with = "variant_str")]
    pub variant: TileVariant,
    pub x: i8,
    pub y: i8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_value: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none", with = "color_str_opt")]
    pub color: Option<TileColor>,
}

/// Input to the layout generator, consumed once per stage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    /// Number of active colors, a prefix of the global palette (3..=6)
    pub palette_size: u8,
    /// Score the player must reach to clear the stage
    pub target_score: u32,
    /// Fixed obstacle placements, applied before the random fill
    #[serde(default)]
    pub obstacles: Vec<ObstaclePlacement>,
}

impl StageSpec {
    /// A spec with no obstacles
    pub fn plain(palette_size: u8, target_score: u32) -> Self {
        Self {
            palette_size,
            target_score,
            obstacles: Vec::new(),
        }
    }
}

/// Generate an opening board for the spec.
///
/// Retries the random fill up to [`MAX_GENERATION_ATTEMPTS`] times until the
/// board holds at least one removable group of `Normal` tiles; after the last
/// failed attempt the deterministic repair step recolors a pair of tiles
/// instead of retrying forever. The generator holds no state across calls.
pub fn generate(spec: &StageSpec, rng: &mut SimpleRng) -> Board {
    let palette_size = active_palette_size(spec);

    let mut board = roll_layout(spec, palette_size, rng);
    for _ in 1..MAX_GENERATION_ATTEMPTS {
        if has_removable_normal_group(&board) {
            return board;
        }
        board = roll_layout(spec, palette_size, rng);
    }
    if has_removable_normal_group(&board) {
        return board;
    }

    warn!(
        "no valid layout in {} attempts, applying deterministic repair",
        MAX_GENERATION_ATTEMPTS
    );
    repair(&mut board);
    board
}

/// Clamp the palette size into the supported 3..=6 range
fn active_palette_size(spec: &StageSpec) -> u8 {
    let clamped = spec.palette_size.clamp(MIN_PALETTE, MAX_PALETTE);
    if clamped != spec.palette_size {
        warn!(
            "palette_size {} outside {}..={}, clamped to {}",
            spec.palette_size, MIN_PALETTE, MAX_PALETTE, clamped
        );
    }
    clamped
}

/// One random layout: obstacles at fixed positions, then the random fill.
/// Tile ids are assigned sequentially per rolled board.
fn roll_layout(spec: &StageSpec, palette_size: u8, rng: &mut SimpleRng) -> Board {
    let mut board = Board::new();
    let mut next_id = 0u32;

    for placement in &spec.obstacles {
        if board.is_out_of_bounds(placement.x, placement.y) {
            warn!(
                "obstacle {} at ({}, {}) is out of bounds, dropped",
                placement.variant.as_str(),
                placement.x,
                placement.y
            );
            continue;
        }
        if board.is_occupied(placement.x, placement.y) {
            warn!(
                "obstacle {} at ({}, {}) collides with an earlier placement, dropped",
                placement.variant.as_str(),
                placement.x,
                placement.y
            );
            continue;
        }
        let color = placement
            .color
            .unwrap_or_else(|| draw_color(palette_size, rng));
        let id = TileId(next_id);
        next_id += 1;
        let tile = if placement.variant.is_counter() {
            let value = placement.counter_value.unwrap_or(DEFAULT_COUNTER_VALUE);
            Tile::counter(id, placement.variant, color, placement.x, placement.y, value)
        } else {
            Tile::obstacle(id, placement.variant, color, placement.x, placement.y)
        };
        board.insert(tile);
    }

    for y in 0..board.height() as i8 {
        for x in 0..board.width() as i8 {
            if board.is_empty_at(x, y) {
                let id = TileId(next_id);
                next_id += 1;
                board.insert(Tile::normal(id, draw_color(palette_size, rng), x, y));
            }
        }
    }

    board
}

/// Uniform draw from the first `palette_size` entries of the global palette
fn draw_color(palette_size: u8, rng: &mut SimpleRng) -> TileColor {
    PALETTE[rng.next_range(palette_size as u32) as usize]
}

/// Deterministic fallback for pathological random draws.
///
/// Forces the first pair of 4-adjacent `Normal` tiles to one color; when no
/// two normals are adjacent, recolors the first two normals in iteration
/// order instead. Guarantees termination without an unbounded retry.
fn repair(board: &mut Board) {
    let normals: Vec<Tile> = board
        .tiles()
        .filter(|t| t.variant == TileVariant::Normal)
        .collect();

    for tile in &normals {
        for (dx, dy) in DIRS {
            let neighbor = match board.tile_at(tile.x + dx, tile.y + dy) {
                Some(n) if n.variant == TileVariant::Normal => n,
                _ => continue,
            };
            recolor(board, neighbor, tile.color);
            return;
        }
    }

    if let [first, second, ..] = normals.as_slice() {
        recolor(board, *second, first.color);
    }
}

fn recolor(board: &mut Board, tile: Tile, color: TileColor) {
    if let Some(mut taken) = board.remove_at(tile.x, tile.y) {
        taken.color = color;
        board.insert(taken);
    }
}
