//! Data-driven combat content and loaders.
//!
//! This crate assembles the static data a simulation consumes:
//! - Ability database and range table (data-driven via RON)
//! - Authored combat-area bounds per actor type (data-driven via RON)
//! - Simulation tuning (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in live actor
//! state. All loaders use combat-core types directly with serde for
//! RON/TOML deserialization.

pub mod book;
pub mod error;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use book::AbilityBook;
pub use error::ContentError;

#[cfg(feature = "loaders")]
pub use loaders::{AbilityLoader, RegionLoader, SimTuning, TuningLoader};
