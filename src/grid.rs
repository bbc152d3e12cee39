//! Game grid: board state, move history and incremental winner detection.
//!
//! Winner detection never scans the whole board. Any new strike has to pass
//! through the cell that was just marked, so only the four lines through that
//! cell are sampled, each clipped to `2 * strike - 1` cells and to the board.
//! A move therefore costs `O(min(strike, size))` regardless of the grid size.

use alloc::vec::Vec;

use crate::common::{GameStatus, GridError, Move, MoveResult, Position};
use crate::snapshot::{CellState, GridSnapshot};
use crate::tile::Tile;

/// Line directions through the last placed cell as `(dx, dy)` steps, in the
/// order they are checked: rising diagonal, horizontal, falling diagonal, vertical.
const DIRECTIONS: [(isize, isize); 4] = [(1, 1), (0, 1), (-1, 1), (1, 0)];

/// A cell sampled along a line together with its occupant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Sample {
    pos: Position,
    tile: Option<Tile>,
}

/// A run of equal marks inside a sampled line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Run {
    tile: Option<Tile>,
    begin: usize,
    len: usize,
}

/// Square board with a fixed strike length and a linear move history.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    strike: usize,
    first_move: Tile,
    cells: Vec<Option<Tile>>,
    history: Vec<Move>,
    // Cached result of winner detection, plus the history index of the move
    // that produced it.
    winner: Option<Tile>,
    winning_move: Option<usize>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(size: usize, strike: usize, first_move: Tile) -> Self {
        Self {
            size,
            strike,
            first_move,
            cells: alloc::vec![None; size * size],
            history: Vec::new(),
            winner: None,
            winning_move: None,
        }
    }

    /// Restore a grid from a `size × size` cell matrix indexed `[x][y]`.
    ///
    /// Occupied cells are replayed as moves in row-major order, so the history
    /// and the winner are rebuilt the same way live play builds them.
    pub fn from_cells(
        size: usize,
        strike: usize,
        first_move: Tile,
        cells: &[Vec<CellState>],
    ) -> Result<Self, GridError> {
        if cells.len() != size {
            return Err(GridError::ShapeMismatch {
                expected: size,
                found: cells.len(),
            });
        }
        if let Some(row) = cells.iter().find(|row| row.len() != size) {
            return Err(GridError::ShapeMismatch {
                expected: size,
                found: row.len(),
            });
        }

        let mut grid = Self::new(size, strike, first_move);
        for (x, row) in cells.iter().enumerate() {
            for (y, cell) in row.iter().enumerate() {
                if let Some(tile) = cell.tile() {
                    grid.make_move(x, y, Some(tile))?;
                }
            }
        }
        Ok(grid)
    }

    /// Restore a grid from a snapshot produced by [`Grid::serialize`].
    pub fn from_snapshot(first_move: Tile, snapshot: &GridSnapshot) -> Result<Self, GridError> {
        Self::from_cells(snapshot.size, snapshot.strike, first_move, &snapshot.cells)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn strike(&self) -> usize {
        self.strike
    }

    /// Tile that opened the game.
    pub fn first_move(&self) -> Tile {
        self.first_move
    }

    /// The cached winner, if a strike has been completed.
    pub fn winner(&self) -> Option<Tile> {
        self.winner
    }

    /// Moves made so far, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.last().copied()
    }

    /// Mark at (x, y), or `None` for an empty cell.
    pub fn tile_at(&self, x: usize, y: usize) -> Result<Option<Tile>, GridError> {
        self.check_bounds(x, y)?;
        Ok(self.cells[self.index(x, y)])
    }

    pub fn is_occupied(&self, x: usize, y: usize) -> Result<bool, GridError> {
        Ok(self.tile_at(x, y)?.is_some())
    }

    pub fn occupied_cells_count(&self) -> usize {
        self.history.len()
    }

    pub fn empty_cells_count(&self) -> usize {
        self.size * self.size - self.occupied_cells_count()
    }

    /// Coordinates of all empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Position> {
        (0..self.size)
            .flat_map(|x| (0..self.size).map(move |y| Position::new(x, y)))
            .filter(|p| self.cells[self.index(p.x, p.y)].is_none())
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.empty_cells_count() == 0
    }

    /// Evaluate the current game status.
    pub fn game_status(&self) -> GameStatus {
        if self.winner.is_some() {
            GameStatus::Victory
        } else if self.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::KeepPlaying
        }
    }

    /// Tile expected to move next, or `None` once the game has ended.
    pub fn next_player(&self) -> Option<Tile> {
        if self.game_status() != GameStatus::KeepPlaying {
            return None;
        }
        if self.history.len() % 2 == 0 {
            Some(self.first_move)
        } else {
            Some(self.first_move.other())
        }
    }

    /// Place `tile` (or the next player's tile when `None`) at (x, y).
    ///
    /// A rejected move leaves the grid untouched.
    pub fn make_move(
        &mut self,
        x: usize,
        y: usize,
        tile: Option<Tile>,
    ) -> Result<MoveResult, GridError> {
        if self.is_occupied(x, y)? {
            return Err(GridError::CellOccupied { x, y });
        }
        let tile = match tile {
            Some(tile) => tile,
            None => self.next_player().ok_or(GridError::GameOver)?,
        };
        let result = self.apply(x, y, tile);
        self.check_winner_cache();
        Ok(result)
    }

    /// Place the next player's tile at (x, y).
    pub fn play(&mut self, x: usize, y: usize) -> Result<MoveResult, GridError> {
        self.make_move(x, y, None)
    }

    /// Revert the most recent move. Returns `None` when there is nothing to undo.
    pub fn undo_move(&mut self) -> Option<Move> {
        let last = self.history.pop()?;
        let idx = self.index(last.x, last.y);
        self.cells[idx] = None;
        if self
            .winning_move
            .is_some_and(|index| index >= self.history.len())
        {
            self.winner = None;
            self.winning_move = None;
        }
        self.check_winner_cache();
        Some(last)
    }

    /// Produce a plain snapshot of the board.
    pub fn serialize(&self) -> GridSnapshot {
        let cells = (0..self.size)
            .map(|x| {
                (0..self.size)
                    .map(|y| CellState::from(self.cells[self.index(x, y)]))
                    .collect()
            })
            .collect();
        GridSnapshot {
            size: self.size,
            strike: self.strike,
            cells,
        }
    }

    /// Look for a strike of at least `strike` cells passing through `p`.
    ///
    /// Returns the winning tile and the cells of the first strike found.
    pub fn check_winner(&self, p: Position) -> Option<(Tile, Vec<Position>)> {
        // cells further out than the board edge are never in bounds
        let reach = self.strike.saturating_sub(1).min(self.size.saturating_sub(1)) as isize;
        for &(dx, dy) in DIRECTIONS.iter() {
            let line = self.sample_line(p, dx, dy, reach);
            let run = longest_run(&line);
            if let Some(tile) = run.tile {
                if run.len >= self.strike {
                    let strike: Vec<Position> = line[run.begin..run.begin + run.len]
                        .iter()
                        .map(|s| s.pos)
                        .collect();
                    log::debug!(
                        "strike of {} for {} through {} along ({}, {})",
                        run.len,
                        tile,
                        p,
                        dx,
                        dy
                    );
                    return Some((tile, strike));
                }
            }
        }
        None
    }

    /// Cells of the strike that decided the game, if it has been won.
    pub fn winning_strike(&self) -> Option<Vec<Position>> {
        let mv = self.history.get(self.winning_move?)?;
        self.check_winner(mv.position()).map(|(_, strike)| strike)
    }

    fn apply(&mut self, x: usize, y: usize, tile: Tile) -> MoveResult {
        let idx = self.index(x, y);
        self.cells[idx] = Some(tile);
        self.history.push(Move { x, y, tile });

        match self.check_winner(Position::new(x, y)) {
            Some((winner, strike)) => {
                if self.winner.is_none() {
                    self.winner = Some(winner);
                    self.winning_move = Some(self.history.len() - 1);
                }
                MoveResult::Victory { winner, strike }
            }
            None if self.game_status() == GameStatus::Draw => MoveResult::Draw,
            None => MoveResult::KeepPlaying,
        }
    }

    /// Cells within bounds on the line `p + step * (dx, dy)` for `step` in `-reach..=reach`.
    fn sample_line(&self, p: Position, dx: isize, dy: isize, reach: isize) -> Vec<Sample> {
        let mut line = Vec::with_capacity(2 * reach as usize + 1);
        for step in -reach..=reach {
            let x = p.x as isize + step * dx;
            let y = p.y as isize + step * dy;
            if let Some(pos) = self.position_at(x, y) {
                line.push(Sample {
                    pos,
                    tile: self.cells[self.index(pos.x, pos.y)],
                });
            }
        }
        line
    }

    fn position_at(&self, x: isize, y: isize) -> Option<Position> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.size && y < self.size {
            Some(Position::new(x, y))
        } else {
            None
        }
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), GridError> {
        if x >= self.size || y >= self.size {
            return Err(GridError::InvalidPosition {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    /// Replay the history on a fresh board and report where a winner first appears.
    fn recompute_winner(&self) -> Option<(usize, Tile)> {
        let mut replay = Grid::new(self.size, self.strike, self.first_move);
        for mv in &self.history {
            replay.apply(mv.x, mv.y, mv.tile);
        }
        replay.winning_move.zip(replay.winner)
    }

    fn check_winner_cache(&self) {
        if cfg!(debug_assertions) {
            debug_assert_eq!(
                self.recompute_winner(),
                self.winning_move.zip(self.winner),
                "winner cache diverged from move history"
            );
        }
    }
}

/// Longest run of equal marks in `line`. Empty cells break a run; ties keep the earliest.
fn longest_run(line: &[Sample]) -> Run {
    let mut best = Run::default();
    let mut current = Run::default();
    for (index, sample) in line.iter().enumerate() {
        match sample.tile {
            Some(tile) if current.tile == Some(tile) => current.len += 1,
            Some(tile) => {
                current = Run {
                    tile: Some(tile),
                    begin: index,
                    len: 1,
                }
            }
            None => current = Run::default(),
        }
        if current.len > best.len {
            best = current;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(tiles: &[Option<Tile>]) -> Vec<Sample> {
        tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| Sample {
                pos: Position::new(0, i),
                tile,
            })
            .collect()
    }

    const X: Option<Tile> = Some(Tile::First);
    const O: Option<Tile> = Some(Tile::Second);
    const E: Option<Tile> = None;

    #[test]
    fn longest_run_of_empty_line_is_blank() {
        assert_eq!(longest_run(&line(&[E, E, E])), Run::default());
        assert_eq!(longest_run(&[]), Run::default());
    }

    #[test]
    fn empty_cell_breaks_run() {
        let run = longest_run(&line(&[X, X, E, X, X, X]));
        assert_eq!(run.tile, X);
        assert_eq!(run.begin, 3);
        assert_eq!(run.len, 3);
    }

    #[test]
    fn value_change_restarts_run() {
        let run = longest_run(&line(&[O, O, X, X, X, O]));
        assert_eq!((run.tile, run.begin, run.len), (X, 2, 3));
    }

    #[test]
    fn ties_keep_earliest_run() {
        let run = longest_run(&line(&[O, O, E, X, X]));
        assert_eq!((run.tile, run.begin, run.len), (O, 0, 2));
    }

    #[test]
    fn sample_line_skips_out_of_bounds_cells() {
        let grid = Grid::new(3, 3, Tile::First);
        let sample = grid.sample_line(Position::new(0, 0), 1, 1, 2);
        let positions: Vec<_> = sample.iter().map(|s| s.pos).collect();
        assert_eq!(
            positions,
            vec![Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)]
        );
    }

    #[test]
    fn falling_diagonal_walks_from_high_x_to_low_x() {
        let grid = Grid::new(5, 3, Tile::First);
        let sample = grid.sample_line(Position::new(2, 2), -1, 1, 2);
        let positions: Vec<_> = sample.iter().map(|s| (s.pos.x, s.pos.y)).collect();
        assert_eq!(positions, vec![(4, 0), (3, 1), (2, 2), (1, 3), (0, 4)]);
    }

    #[test]
    fn recompute_matches_cache_after_win_and_undo() {
        let mut grid = Grid::new(3, 3, Tile::First);
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            grid.play(x, y).unwrap();
        }
        assert_eq!(grid.recompute_winner(), Some((4, Tile::First)));
        grid.undo_move();
        assert_eq!(grid.recompute_winner(), None);
        assert_eq!(grid.winner(), None);
    }
}
