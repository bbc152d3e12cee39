#![cfg(feature = "std")]

//! Presentation side of the game.

use std::fmt::Write as _;

use crate::common::Position;
use crate::snapshot::{CellState, GameSnapshot, GameStatistics};
use crate::tile::Tile;

/// Receiver of everything the controller wants shown to the players.
pub trait View {
    /// Prompt the named player for a move.
    fn introduce_next_player(&mut self, player_name: &str);

    fn make_move(&mut self, x: usize, y: usize, tile: Tile);

    /// A move was undone and the cell is empty again.
    fn remove_tile(&mut self, x: usize, y: usize);

    /// Drop any victory or draw message currently shown.
    fn clear_message(&mut self);

    fn victory(&mut self, winner_name: &str, strike: &[Position]);

    fn draw(&mut self);

    fn update_game_statistics(&mut self, statistics: &GameStatistics);

    /// Replace the whole board with the given snapshot.
    fn update_game_state(&mut self, snapshot: &GameSnapshot);
}

/// Renders the board to stdout after every change.
#[derive(Debug, Default)]
pub struct TerminalView {
    cells: Vec<Vec<CellState>>,
    highlight: Vec<Position>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Framed text rendering of the board. Cells on the winning strike are bracketed.
    pub fn render_board(&self) -> String {
        let size = self.cells.len();
        let mut out = String::new();
        out.push_str("     ");
        for y in 0..size {
            let _ = write!(out, "{:^3}", y);
        }
        out.push('\n');
        let _ = writeln!(out, "    ╔{}╗", "═".repeat(size * 3 + 1));
        for (x, row) in self.cells.iter().enumerate() {
            let _ = write!(out, "{:>3} ║", x);
            for (y, cell) in row.iter().enumerate() {
                let ch = match cell {
                    CellState::Empty => '.',
                    CellState::First => Tile::First.symbol(),
                    CellState::Second => Tile::Second.symbol(),
                };
                if self.highlight.contains(&Position::new(x, y)) {
                    let _ = write!(out, "[{}]", ch);
                } else {
                    let _ = write!(out, " {} ", ch);
                }
            }
            out.push_str(" ║\n");
        }
        let _ = writeln!(out, "    ╚{}╝", "═".repeat(size * 3 + 1));
        out
    }

    fn print_board(&self) {
        print!("{}", self.render_board());
    }

    fn set_cell(&mut self, x: usize, y: usize, state: CellState) {
        if let Some(cell) = self.cells.get_mut(x).and_then(|row| row.get_mut(y)) {
            *cell = state;
        }
    }
}

impl View for TerminalView {
    fn introduce_next_player(&mut self, player_name: &str) {
        println!("{}, this is your move!", player_name);
    }

    fn make_move(&mut self, x: usize, y: usize, tile: Tile) {
        self.set_cell(x, y, CellState::from(tile));
        self.print_board();
    }

    fn remove_tile(&mut self, x: usize, y: usize) {
        self.set_cell(x, y, CellState::Empty);
        self.highlight.clear();
        self.print_board();
    }

    fn clear_message(&mut self) {
        self.highlight.clear();
    }

    fn victory(&mut self, winner_name: &str, strike: &[Position]) {
        self.highlight = strike.to_vec();
        self.print_board();
        println!("{}: You win!", winner_name);
    }

    fn draw(&mut self) {
        println!("Game over! This is a draw.");
    }

    fn update_game_statistics(&mut self, statistics: &GameStatistics) {
        println!(
            "Score  {}: {}  {}: {}",
            Tile::First,
            statistics.first_player_score,
            Tile::Second,
            statistics.second_player_score
        );
    }

    fn update_game_state(&mut self, snapshot: &GameSnapshot) {
        self.cells = snapshot.grid.cells.clone();
        self.highlight.clear();
        self.print_board();
    }
}
