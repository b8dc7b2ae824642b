//! The board engine.
//!
//! [`Board`] ties the pieces together: it deals layouts from the catalog,
//! runs the two-click selection state machine, removes matched pairs,
//! reshuffles, and keeps exposure current after every change.
//!
//! ## Selection state machine
//!
//! ```text
//!   Idle --click open tile--> OneSelected(held)
//!   OneSelected(held) --click held--> OneSelected(held)   (ignored)
//!   OneSelected(held) --click matching tile--> Idle       (pair removed)
//!   OneSelected(held) --click other tile--> Idle          (mismatch)
//! ```
//!
//! Clicks on empty cells or closed tiles never change anything.

mod engine;
mod selection;

pub use engine::Board;
pub use selection::{SelectOutcome, Selection};
