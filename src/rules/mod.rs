//! Game rules: exposure and pair matching.
//!
//! Both rules are pure functions of board state. The board calls
//! [`exposure::recompute`] after every structural change and
//! [`faces_match`] when a second tile is picked.

pub mod exposure;
pub mod matching;

pub use exposure::OccupancyIndex;
pub use matching::faces_match;
