//! Core engine types: coordinates, tile handles, RNG, configuration, errors.
//!
//! These are the building blocks every other module shares. Nothing here
//! knows about selection or matching.

pub mod config;
pub mod entity;
pub mod error;
pub mod position;
pub mod rng;

pub use config::BoardConfig;
pub use entity::TileId;
pub use error::ConfigError;
pub use position::{Cell, Position};
pub use rng::{BoardRng, BoardRngState};
