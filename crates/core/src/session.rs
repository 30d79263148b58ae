//! Session module - drives one stage through a sequence of taps
//!
//! Ties the engine stages together the way the driving layer uses them:
//! generate the opening board, then for each player tap run removal, obstacle
//! degradation, and gravity, in that order, replacing the held board and
//! accumulating score. Everything is synchronous and the session holds no
//! state beyond the current board and the running totals; callers serialize
//! one tap at a time.

use crate::board::Board;
use crate::generator::{generate, StageSpec};
use crate::gravity::{settle, MovementPlan};
use crate::obstacle::degrade_adjacent;
use crate::removal::{can_remove_counter, remove_group, RemovalResult};
use crate::rng::SimpleRng;

/// Everything a single accepted tap produced
#[derive(Debug, Clone, PartialEq)]
pub struct TapOutcome {
    /// Removed tiles, pre-settle survivors, and the score breakdown
    pub removal: RemovalResult,
    /// Displacements applied by gravity after removal and degradation
    pub movements: MovementPlan,
}

/// One stage in progress: the current board plus score bookkeeping
#[derive(Debug, Clone)]
pub struct StageSession {
    spec: StageSpec,
    board: Board,
    score: u32,
    taps: u32,
}

impl StageSession {
    /// Generate the opening board for `spec` and start the session
    pub fn new(spec: StageSpec, seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let board = generate(&spec, &mut rng);
        Self {
            spec,
            board,
            score: 0,
            taps: 0,
        }
    }

    /// Apply one player tap at (x, y).
    ///
    /// Returns `None` when the tap removes nothing: empty cell, group below
    /// the minimum size, or a counter tile whose threshold is not met (the
    /// eligibility probe gates counter taps before any removal happens).
    /// On success the held board advances to the settled post-tap state.
    pub fn tap(&mut self, x: i8, y: i8, booster_active: bool) -> Option<TapOutcome> {
        let tile = self.board.tile_at(x, y)?;
        if tile.variant.is_counter() && !can_remove_counter(&self.board, x, y) {
            return None;
        }

        let removal = remove_group(&self.board, x, y, booster_active);
        if removal.is_noop() {
            return None;
        }

        let degraded = degrade_adjacent(&removal.survivors, &removal.removed);
        let (settled, movements) = settle(&degraded);

        self.board = settled;
        self.score += removal.score.final_score;
        self.taps += 1;
        Some(TapOutcome { removal, movements })
    }

    /// Probe whether a tap at (x, y) would remove anything, without mutating
    pub fn can_tap(&self, x: i8, y: i8) -> bool {
        let tile = match self.board.tile_at(x, y) {
            Some(tile) => tile,
            None => return false,
        };
        if tile.variant.is_counter() && !can_remove_counter(&self.board, x, y) {
            return false;
        }
        !remove_group(&self.board, x, y, false).is_noop()
    }

    /// Current board state
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Accumulated score across accepted taps
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of accepted taps
    pub fn taps(&self) -> u32 {
        self.taps
    }

    /// Whether the accumulated score has reached the stage target
    pub fn target_reached(&self) -> bool {
        self.score >= self.spec.target_score
    }

    /// The spec this session was started from
    pub fn spec(&self) -> &StageSpec {
        &self.spec
    }
}
