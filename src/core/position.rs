//! Board coordinates.
//!
//! A [`Cell`] is a `(row, column)` footprint on the table, the unit the UI
//! reports clicks in. A [`Position`] adds the stacking `layer`; layer 0 lies
//! on the table and higher layers cover the cells beneath them.

use serde::{Deserialize, Serialize};

/// A `(row, column)` footprint, shared by every layer stacked on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub column: i32,
}

impl Cell {
    #[must_use]
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    /// Place this cell on a layer.
    #[must_use]
    pub const fn at_layer(self, layer: u8) -> Position {
        Position::new(self.row, self.column, layer)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, column): (i32, i32)) -> Self {
        Self::new(row, column)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// A full `(row, column, layer)` tile coordinate.
///
/// Two live tiles never share a `Position`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub column: i32,
    pub layer: u8,
}

impl Position {
    #[must_use]
    pub const fn new(row: i32, column: i32, layer: u8) -> Self {
        Self { row, column, layer }
    }

    /// The footprint this position stands on.
    #[must_use]
    pub const fn cell(self) -> Cell {
        Cell::new(self.row, self.column)
    }

    /// Same-layer neighbor to the left (`column - 1`).
    #[must_use]
    pub const fn left(self) -> Self {
        Self::new(self.row, self.column - 1, self.layer)
    }

    /// Same-layer neighbor to the right (`column + 1`).
    #[must_use]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.column + 1, self.layer)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, L{})", self.row, self.column, self.layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neighbors_stay_on_layer() {
        let pos = Position::new(4, 7, 2);
        assert_eq!(pos.left(), Position::new(4, 6, 2));
        assert_eq!(pos.right(), Position::new(4, 8, 2));
    }

    #[test]
    fn test_cell_roundtrip() {
        let cell = Cell::from((3, 11));
        let pos = cell.at_layer(1);
        assert_eq!(pos, Position::new(3, 11, 1));
        assert_eq!(pos.cell(), cell);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::new(3, 4).to_string(), "(3, 4)");
        assert_eq!(Position::new(3, 4, 1).to_string(), "(3, 4, L1)");
    }
}
