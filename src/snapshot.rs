//! Serializable records exchanged with storage and views.

use alloc::vec::Vec;

use crate::common::GameStatus;
use crate::tile::Tile;

/// Contents of a single cell on the wire. `Empty` is an explicit sentinel,
/// never confused with a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    #[default]
    #[cfg_attr(feature = "std", serde(rename = "."))]
    Empty,
    #[cfg_attr(feature = "std", serde(rename = "X"))]
    First,
    #[cfg_attr(feature = "std", serde(rename = "O"))]
    Second,
}

impl CellState {
    pub fn tile(self) -> Option<Tile> {
        match self {
            CellState::Empty => None,
            CellState::First => Some(Tile::First),
            CellState::Second => Some(Tile::Second),
        }
    }
}

impl From<Option<Tile>> for CellState {
    fn from(tile: Option<Tile>) -> Self {
        match tile {
            None => CellState::Empty,
            Some(Tile::First) => CellState::First,
            Some(Tile::Second) => CellState::Second,
        }
    }
}

impl From<Tile> for CellState {
    fn from(tile: Tile) -> Self {
        CellState::from(Some(tile))
    }
}

/// Plain snapshot of a grid: dimensions plus the full cell matrix indexed `[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GridSnapshot {
    pub size: usize,
    pub strike: usize,
    pub cells: Vec<Vec<CellState>>,
}

/// Full game state persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameSnapshot {
    pub first_player: Tile,
    pub next_player: Option<Tile>,
    pub game_status: GameStatus,
    pub winner: Option<Tile>,
    pub grid: GridSnapshot,
}

/// Running score of both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "camelCase"))]
pub struct GameStatistics {
    pub first_player_score: u32,
    pub second_player_score: u32,
}

impl GameStatistics {
    pub fn score(&self, tile: Tile) -> u32 {
        match tile {
            Tile::First => self.first_player_score,
            Tile::Second => self.second_player_score,
        }
    }
}
