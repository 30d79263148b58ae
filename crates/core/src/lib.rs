//! Core board simulation engine - pure, deterministic, and testable
//!
//! This crate contains the whole board engine of the tile-matching puzzle.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: the same stage spec and seed produce identical boards
//! - **Testable**: every stage transition is a pure function over the board
//! - **Portable**: runs headless, in a game client, or in a test harness
//!
//! # Module Structure
//!
//! - [`board`]: 10x14 stage grid with flat-array storage
//! - [`connect`]: 4-directional flood fill honoring per-variant walk rules
//! - [`removal`]: group removal, quadratic scoring, counter eligibility
//! - [`obstacle`]: ice degradation adjacent to removed tiles
//! - [`gravity`]: per-column settling with movement plans for the animator
//! - [`generator`]: stage specs to opening boards, retry loop with repair
//! - [`session`]: the per-stage tap pipeline used by the driving layer
//! - [`snapshot`]: serializable board views for the rendering collaborator
//! - [`rng`]: seedable LCG behind the generator
//!
//! # Game Rules
//!
//! - A tap removes the maximal 4-connected group of same-color tiles, two
//!   tiles minimum. Ice tiles let the walk pass through without joining the
//!   group; rock and steel stop it cold.
//! - A removal of `n` tiles scores `n²` points, times 3/2 when it empties the
//!   board of removable moves and times 3/2 again under an active booster,
//!   rounded once.
//! - Ice adjacent to a removed tile of its color thaws one level per tap.
//! - Counter tiles come off when their connected count meets their printed
//!   threshold: exactly for plain counters, at-least for plus counters.
//! - After each removal the surviving tiles settle column by column.
//!
//! # Example
//!
//! ```
//! use tilepop_core::generator::StageSpec;
//! use tilepop_core::session::StageSession;
//!
//! let mut session = StageSession::new(StageSpec::plain(4, 500), 12345);
//!
//! // Tap the first removable cell the board owns
//! let (w, h) = (session.board().width() as i8, session.board().height() as i8);
//! let target = (0..h)
//!     .flat_map(|y| (0..w).map(move |x| (x, y)))
//!     .find(|&(x, y)| session.can_tap(x, y))
//!     .expect("generated boards always hold a removable group");
//!
//! let outcome = session.tap(target.0, target.1, false).unwrap();
//! assert!(outcome.removal.removed.len() >= 2);
//! assert!(session.score() > 0);
//! ```

pub mod board;
pub mod connect;
pub mod generator;
pub mod gravity;
pub mod obstacle;
pub mod removal;
pub mod rng;
pub mod session;
pub mod snapshot;

pub use tilepop_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use connect::{same_color_group, counter_group, Group};
pub use generator::{generate, ObstaclePlacement, StageSpec};
pub use gravity::{settle, Movement, MovementPlan};
pub use obstacle::degrade_adjacent;
pub use removal::{can_remove_counter, remove_group, RemovalResult, ScoreBreakdown};
pub use rng::SimpleRng;
pub use session::{StageSession, TapOutcome};
pub use snapshot::{BoardSnapshot, TileSnapshot};
