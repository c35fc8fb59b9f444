//! twenty48 (workspace facade crate).
//!
//! Keeps a single `twenty48::{core,engine,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use twenty48_core as core;
pub use twenty48_engine as engine;
pub use twenty48_types as types;
