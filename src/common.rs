//! Common types for the grid: coordinates, moves, results and errors.

use alloc::vec::Vec;
use core::fmt;

use crate::tile::Tile;

/// A cell coordinate on the grid. `x` selects the row, `y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Position {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single placement recorded in the move history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub x: usize,
    pub y: usize,
    pub tile: Tile,
}

impl Move {
    pub fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// Overall state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    Draw,
    Victory,
    KeepPlaying,
}

/// Outcome of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    /// The board is full and nobody completed a strike.
    Draw,
    /// The move completed a strike, carrying the winner and the strike cells in order.
    Victory { winner: Tile, strike: Vec<Position> },
    /// The game goes on.
    KeepPlaying,
}

impl MoveResult {
    pub fn status(&self) -> GameStatus {
        match self {
            MoveResult::Draw => GameStatus::Draw,
            MoveResult::Victory { .. } => GameStatus::Victory,
            MoveResult::KeepPlaying => GameStatus::KeepPlaying,
        }
    }
}

/// Errors returned by grid operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinate lies outside `[0, size)`.
    InvalidPosition { x: usize, y: usize, size: usize },
    /// The target cell already holds a mark.
    CellOccupied { x: usize, y: usize },
    /// No tile was given and the game has already ended.
    GameOver,
    /// A restored cell matrix is not `size × size`.
    ShapeMismatch { expected: usize, found: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::InvalidPosition { x, y, size } => {
                write!(f, "Position ({}, {}) is out of bounds for a grid of size {}", x, y, size)
            }
            GridError::CellOccupied { x, y } => {
                write!(f, "Position ({}, {}) was already occupied", x, y)
            }
            GridError::GameOver => write!(f, "The game is already over"),
            GridError::ShapeMismatch { expected, found } => write!(
                f,
                "Cell matrix has {} entries in a dimension, expected {}",
                found, expected
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}
