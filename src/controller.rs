#![cfg(feature = "std")]

//! Turn sequencing, score keeping and persistence around a [`Grid`].

use crate::common::{GameStatus, MoveResult};
use crate::config::GameConfig;
use crate::grid::Grid;
use crate::input::InputEvent;
use crate::snapshot::{GameSnapshot, GameStatistics};
use crate::storage::Storage;
use crate::tile::Tile;
use crate::view::View;

/// A named participant and the number of games they have won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerScore {
    pub name: String,
    pub score: u32,
}

/// Drives a game: routes input to the grid, keeps score and notifies the view
/// and the storage after every change.
pub struct GameController<V: View, S: Storage> {
    grid: Grid,
    first_player: PlayerScore,
    second_player: PlayerScore,
    view: V,
    storage: S,
}

impl<V: View, S: Storage> GameController<V, S> {
    /// Build a controller, resuming the stored game if it matches `config`.
    pub fn new(config: GameConfig, view: V, storage: S) -> anyhow::Result<Self> {
        config.validate()?;
        let mut controller = Self {
            grid: Grid::new(config.size, config.strike, Tile::First),
            first_player: PlayerScore {
                name: config.first_player_name,
                score: 0,
            },
            second_player: PlayerScore {
                name: config.second_player_name,
                score: 0,
            },
            view,
            storage,
        };
        controller.restore_game_state()?;
        controller.restore_game_statistics()?;
        controller.announce_status();
        Ok(controller)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Name and score of the player owning `tile`.
    pub fn player(&self, tile: Tile) -> &PlayerScore {
        match tile {
            Tile::First => &self.first_player,
            Tile::Second => &self.second_player,
        }
    }

    fn player_mut(&mut self, tile: Tile) -> &mut PlayerScore {
        match tile {
            Tile::First => &mut self.first_player,
            Tile::Second => &mut self.second_player,
        }
    }

    pub fn statistics(&self) -> GameStatistics {
        GameStatistics {
            first_player_score: self.first_player.score,
            second_player_score: self.second_player.score,
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            first_player: self.grid.first_move(),
            next_player: self.grid.next_player(),
            game_status: self.grid.game_status(),
            winner: self.grid.winner(),
            grid: self.grid.serialize(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) -> anyhow::Result<()> {
        match event {
            InputEvent::TileClick { x, y } => self.handle_click(x, y),
            InputEvent::Restart => self.restart(),
            InputEvent::Undo => self.undo(),
        }
    }

    fn handle_click(&mut self, x: usize, y: usize) -> anyhow::Result<()> {
        let Some(tile) = self.grid.next_player() else {
            log::debug!("ignoring click at ({}, {}): game is over", x, y);
            return Ok(());
        };
        match self.grid.is_occupied(x, y) {
            Ok(false) => {}
            Ok(true) => {
                log::debug!("ignoring click at ({}, {}): cell is occupied", x, y);
                return Ok(());
            }
            Err(e) => {
                log::debug!("ignoring click: {}", e);
                return Ok(());
            }
        }

        let result = self.grid.play(x, y)?;
        self.view.make_move(x, y, tile);

        match result {
            MoveResult::Victory { winner, strike } => {
                self.player_mut(winner).score += 1;
                let name = self.player(winner).name.clone();
                log::info!("{} ({}) wins with {} cells", name, winner, strike.len());
                self.view.victory(&name, &strike);
                self.publish_statistics()?;
            }
            MoveResult::Draw => {
                log::info!("game ended in a draw");
                self.view.draw();
            }
            MoveResult::KeepPlaying => self.announce_status(),
        }

        self.storage.update_game_snapshot(&self.snapshot())
    }

    /// Start a new game of the same shape. The player who went second now goes first.
    fn restart(&mut self) -> anyhow::Result<()> {
        let first_move = self.grid.first_move().other();
        self.grid = Grid::new(self.grid.size(), self.grid.strike(), first_move);
        log::info!("restarting; {} moves first", first_move);

        let snapshot = self.snapshot();
        self.storage.update_game_snapshot(&snapshot)?;
        self.view.clear_message();
        self.view.update_game_state(&snapshot);
        self.announce_status();
        Ok(())
    }

    fn undo(&mut self) -> anyhow::Result<()> {
        let winner = self.grid.winner();
        let Some(mv) = self.grid.undo_move() else {
            log::debug!("nothing to undo");
            return Ok(());
        };
        log::info!("undid {} at ({}, {})", mv.tile, mv.x, mv.y);
        self.view.remove_tile(mv.x, mv.y);

        if let Some(winner) = winner {
            if self.grid.winner().is_none() {
                let player = self.player_mut(winner);
                player.score = player.score.saturating_sub(1);
                self.publish_statistics()?;
            }
        }

        self.view.clear_message();
        self.announce_status();
        self.storage.update_game_snapshot(&self.snapshot())
    }

    fn restore_game_state(&mut self) -> anyhow::Result<()> {
        if let Some(snapshot) = self.storage.game_snapshot()? {
            let (size, strike) = (self.grid.size(), self.grid.strike());
            if snapshot.grid.size != size || snapshot.grid.strike != strike {
                log::info!(
                    "discarding stored game: {}x{} strike {} does not match {}x{} strike {}",
                    snapshot.grid.size,
                    snapshot.grid.size,
                    snapshot.grid.strike,
                    size,
                    size,
                    strike
                );
            } else {
                match Grid::from_snapshot(snapshot.first_player, &snapshot.grid) {
                    Ok(grid) => {
                        if grid.next_player() != snapshot.next_player {
                            log::warn!(
                                "restored game expects {:?} to move, stored state said {:?}",
                                grid.next_player(),
                                snapshot.next_player
                            );
                        }
                        self.grid = grid;
                    }
                    Err(e) => log::warn!("discarding stored game: {}", e),
                }
            }
        }
        let snapshot = self.snapshot();
        self.view.update_game_state(&snapshot);
        Ok(())
    }

    fn restore_game_statistics(&mut self) -> anyhow::Result<()> {
        if let Some(statistics) = self.storage.game_statistics()? {
            self.first_player.score = statistics.first_player_score;
            self.second_player.score = statistics.second_player_score;
        }
        let statistics = self.statistics();
        self.view.update_game_statistics(&statistics);
        Ok(())
    }

    fn publish_statistics(&mut self) -> anyhow::Result<()> {
        let statistics = self.statistics();
        self.storage.update_game_statistics(&statistics)?;
        self.view.update_game_statistics(&statistics);
        Ok(())
    }

    /// Tell the view whose turn it is, or how the game ended.
    fn announce_status(&mut self) {
        match self.grid.game_status() {
            GameStatus::KeepPlaying => {
                if let Some(tile) = self.grid.next_player() {
                    let name = self.player(tile).name.clone();
                    self.view.introduce_next_player(&name);
                }
            }
            GameStatus::Victory => {
                if let Some(winner) = self.grid.winner() {
                    let strike = self.grid.winning_strike().unwrap_or_default();
                    let name = self.player(winner).name.clone();
                    self.view.victory(&name, &strike);
                }
            }
            GameStatus::Draw => self.view.draw(),
        }
    }
}
