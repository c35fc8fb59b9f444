//! Play engine - the collaborators around the rules core
//!
//! The core executes one tilt at a time and never decides where tiles appear.
//! This crate supplies the pieces a front end needs to run whole games:
//!
//! - [`spawn`]: spawn policies (seeded random, scripted replay)
//! - [`session`]: a single-writer driver that spawns after changed tilts and
//!   notifies observers through explicit callbacks
//! - [`config`]: session settings with environment overrides
//! - [`rng`]: the deterministic generator behind random spawns

pub mod config;
pub mod rng;
pub mod session;
pub mod spawn;

pub use twenty48_core as core;
pub use twenty48_types as types;

pub use config::SessionConfig;
pub use rng::SimpleRng;
pub use session::{GameEvent, Session, OPENING_TILES};
pub use spawn::{RandomSpawn, ScriptedSpawn, SpawnPolicy};
