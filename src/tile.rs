//! Player marks.

use core::fmt;

/// One of the two marks a player can place on the grid.
///
/// An empty cell is never a `Tile`; the grid stores `Option<Tile>` and the
/// wire format uses [`CellState::Empty`](crate::CellState::Empty).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[cfg_attr(feature = "std", serde(rename = "X"))]
    First,
    #[cfg_attr(feature = "std", serde(rename = "O"))]
    Second,
}

impl Tile {
    /// The opposing mark.
    pub const fn other(self) -> Self {
        match self {
            Tile::First => Tile::Second,
            Tile::Second => Tile::First,
        }
    }

    /// Single-character symbol used by the terminal view.
    pub const fn symbol(self) -> char {
        match self {
            Tile::First => 'X',
            Tile::Second => 'O',
        }
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
