//! Shared types module - tile model and board constants
//!
//! This crate defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, UI rendering, stage configuration).
//!
//! # Board Dimensions
//!
//! Standard stage dimensions:
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 14 rows (indexed 0-13, top to bottom)
//!
//! # Tile Variants
//!
//! Each board cell holds at most one [`Tile`]. A tile's [`TileVariant`] decides
//! how it behaves under connectivity analysis and removal:
//!
//! | Variant | Groupable | Walk-through | Notes |
//! |---------|-----------|--------------|-------|
//! | `Normal` | yes | no | plain colored tile |
//! | `IceLv1` / `IceLv2` | no | yes | thaws one level per adjacent removal |
//! | `Counter` / `CounterPlus` | yes | no | removable via threshold probe |
//! | `IceCounter` / `IceCounterPlus` | no | yes | iced counter, thaws to counter |
//! | `Rock` / `Steel` | no | no | blocks the walk entirely |
//!
//! The "groupable" and "walk-through" columns are two independent predicates
//! ([`TileVariant::participates_in_group`] and [`TileVariant::passes_through`]):
//! an ice tile can be crossed by a same-color flood fill without ever being
//! counted in the resulting group. The two must not be collapsed into one flag.
//!
//! # Scoring Constants
//!
//! A removal of `n` tiles scores `n²` base points. The all-clear and booster
//! bonuses are expressed as integer `3/2` ratios and composed multiplicatively
//! before a single rounding step.

/// Board dimensions
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 14;

/// Palette bounds for stage generation (active colors per stage)
pub const MIN_PALETTE: u8 = 3;
pub const MAX_PALETTE: u8 = 6;

/// Upper bound on random layout attempts before the deterministic repair kicks in
pub const MAX_GENERATION_ATTEMPTS: u32 = 10;

/// Default threshold for counter obstacles placed without an explicit value
pub const DEFAULT_COUNTER_VALUE: u8 = 5;

/// All-clear bonus multiplier (as numerator, denominator is 2)
pub const ALL_CLEAR_NUMERATOR: u32 = 3;
pub const ALL_CLEAR_DENOMINATOR: u32 = 2;

/// Booster bonus multiplier (as numerator, denominator is 2)
pub const BOOSTER_NUMERATOR: u32 = 3;
pub const BOOSTER_DENOMINATOR: u32 = 2;

/// Tile colors (global palette order; stages use a prefix of this array)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileColor {
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Orange,
}

/// Global palette in stage-prefix order
pub const PALETTE: [TileColor; 6] = [
    TileColor::Red,
    TileColor::Blue,
    TileColor::Green,
    TileColor::Yellow,
    TileColor::Purple,
    TileColor::Orange,
];

impl TileColor {
    /// Parse color from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "red" => Some(TileColor::Red),
            "blue" => Some(TileColor::Blue),
            "green" => Some(TileColor::Green),
            "yellow" => Some(TileColor::Yellow),
            "purple" => Some(TileColor::Purple),
            "orange" => Some(TileColor::Orange),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileColor::Red => "red",
            TileColor::Blue => "blue",
            TileColor::Green => "green",
            TileColor::Yellow => "yellow",
            TileColor::Purple => "purple",
            TileColor::Orange => "orange",
        }
    }
}

/// Tile variant - the tagged case of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileVariant {
    Normal,
    IceLv1,
    IceLv2,
    Counter,
    CounterPlus,
    IceCounter,
    IceCounterPlus,
    Rock,
    Steel,
}

impl TileVariant {
    /// Whether a flood fill counts this tile as a group member.
    ///
    /// True for plain tiles and exposed counters. Ice must thaw before it can
    /// join a group; rock and steel never do.
    pub fn participates_in_group(&self) -> bool {
        matches!(
            self,
            TileVariant::Normal | TileVariant::Counter | TileVariant::CounterPlus
        )
    }

    /// Whether a flood fill may walk across this tile without collecting it.
    ///
    /// True only for the ice family: a same-color run is not broken by an ice
    /// tile sitting in the middle of it.
    pub fn passes_through(&self) -> bool {
        matches!(
            self,
            TileVariant::IceLv1
                | TileVariant::IceLv2
                | TileVariant::IceCounter
                | TileVariant::IceCounterPlus
        )
    }

    /// Whether this tile terminates a flood-fill walk regardless of color
    pub fn blocks_walk(&self) -> bool {
        matches!(self, TileVariant::Rock | TileVariant::Steel)
    }

    /// Whether this tile is any ice variant
    pub fn is_ice(&self) -> bool {
        self.passes_through()
    }

    /// Whether this tile carries counter semantics (iced or exposed)
    pub fn is_counter(&self) -> bool {
        matches!(
            self,
            TileVariant::Counter
                | TileVariant::CounterPlus
                | TileVariant::IceCounter
                | TileVariant::IceCounterPlus
        )
    }

    /// Whether the counter threshold is an at-least comparison
    pub fn is_plus(&self) -> bool {
        matches!(self, TileVariant::CounterPlus | TileVariant::IceCounterPlus)
    }

    /// Remaining ice levels, if any (2 for thick ice, 1 for the rest of the family)
    pub fn ice_level(&self) -> Option<u8> {
        match self {
            TileVariant::IceLv2 => Some(2),
            TileVariant::IceLv1 | TileVariant::IceCounter | TileVariant::IceCounterPlus => Some(1),
            _ => None,
        }
    }

    /// One degradation step for the ice family; `None` for non-ice variants.
    ///
    /// `IceLv2` thaws to `IceLv1`, `IceLv1` to `Normal`; an iced counter loses
    /// its shell and exposes the underlying counter unchanged.
    pub fn thawed(&self) -> Option<TileVariant> {
        match self {
            TileVariant::IceLv2 => Some(TileVariant::IceLv1),
            TileVariant::IceLv1 => Some(TileVariant::Normal),
            TileVariant::IceCounter => Some(TileVariant::Counter),
            TileVariant::IceCounterPlus => Some(TileVariant::CounterPlus),
            _ => None,
        }
    }

    /// Parse variant from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "normal" => Some(TileVariant::Normal),
            "ice_lv1" => Some(TileVariant::IceLv1),
            "ice_lv2" => Some(TileVariant::IceLv2),
            "counter" => Some(TileVariant::Counter),
            "counter_plus" => Some(TileVariant::CounterPlus),
            "ice_counter" => Some(TileVariant::IceCounter),
            "ice_counter_plus" => Some(TileVariant::IceCounterPlus),
            "rock" => Some(TileVariant::Rock),
            "steel" => Some(TileVariant::Steel),
            _ => None,
        }
    }

    /// Convert to snake_case string
    pub fn as_str(&self) -> &'static str {
        match self {
            TileVariant::Normal => "normal",
            TileVariant::IceLv1 => "ice_lv1",
            TileVariant::IceLv2 => "ice_lv2",
            TileVariant::Counter => "counter",
            TileVariant::CounterPlus => "counter_plus",
            TileVariant::IceCounter => "ice_counter",
            TileVariant::IceCounterPlus => "ice_counter_plus",
            TileVariant::Rock => "rock",
            TileVariant::Steel => "steel",
        }
    }
}

/// Opaque unique token identifying a tile across board transformations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId(pub u32);

/// A board cell occupant.
///
/// Tiles are value-like: they own no references to other tiles, and the board
/// is their sole owner. `color` is meaningless for `Rock`/`Steel` (they never
/// match anything); `counter_value` is `Some` exactly for the counter family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    pub variant: TileVariant,
    pub color: TileColor,
    pub x: i8,
    pub y: i8,
    pub counter_value: Option<u8>,
}

impl Tile {
    /// Create a plain colored tile
    pub fn normal(id: TileId, color: TileColor, x: i8, y: i8) -> Self {
        Self {
            id,
            variant: TileVariant::Normal,
            color,
            x,
            y,
            counter_value: None,
        }
    }

    /// Create a counter-family tile with its removal threshold
    pub fn counter(
        id: TileId,
        variant: TileVariant,
        color: TileColor,
        x: i8,
        y: i8,
        value: u8,
    ) -> Self {
        debug_assert!(variant.is_counter());
        Self {
            id,
            variant,
            color,
            x,
            y,
            counter_value: Some(value),
        }
    }

    /// Create a non-counter obstacle tile (ice, rock, steel)
    pub fn obstacle(id: TileId, variant: TileVariant, color: TileColor, x: i8, y: i8) -> Self {
        Self {
            id,
            variant,
            color,
            x,
            y,
            counter_value: None,
        }
    }

    /// Position as an `(x, y)` pair
    pub fn pos(&self) -> (i8, i8) {
        (self.x, self.y)
    }
}
