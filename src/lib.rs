//! tilepop (workspace facade crate).
//!
//! This package keeps the public `tilepop::{core,types}` API in one place
//! while the implementation lives in dedicated crates under `crates/`.

pub use tilepop_core as core;
pub use tilepop_types as types;
