//! Event system connecting the board to rendering and audio collaborators.
//!
//! The board never calls into a view directly. After every operation it
//! drains the registry's change queue and hands each [`BoardEvent`] to the
//! subscribed [`BoardObserver`]s.
//!
//! ## Key Components
//!
//! - [`BoardEvent`]: Structural change, per-tile change, or audio cue
//! - [`AudioCue`]: Tile picked, pair removed, mismatch
//! - [`BoardObserver`]: Subscriber seam (closures and channels implement it)
//! - [`EventLog`]: Shared recorder, mostly for tests and replays

mod event;
mod observer;

pub use event::{AudioCue, BoardEvent};
pub use observer::{BoardObserver, EventLog};
