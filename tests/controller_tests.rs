use strike::{
    CellState, GameConfig, GameController, GameSnapshot, GameStatistics, GameStatus,
    InputEvent, MemoryStorage, Position, Storage, Tile, View,
};

/// View that records what it was told.
#[derive(Debug, Default)]
struct FakeView {
    introduced: Option<String>,
    moved: Option<(usize, usize, Tile)>,
    removed: Option<(usize, usize)>,
    cleared: bool,
    winner: Option<(String, Vec<Position>)>,
    draw_called: bool,
    statistics: Option<GameStatistics>,
    state: Option<GameSnapshot>,
}

impl View for FakeView {
    fn introduce_next_player(&mut self, player_name: &str) {
        self.introduced = Some(player_name.to_string());
    }

    fn make_move(&mut self, x: usize, y: usize, tile: Tile) {
        self.moved = Some((x, y, tile));
    }

    fn remove_tile(&mut self, x: usize, y: usize) {
        self.removed = Some((x, y));
    }

    fn clear_message(&mut self) {
        self.cleared = true;
        self.winner = None;
    }

    fn victory(&mut self, winner_name: &str, strike: &[Position]) {
        self.winner = Some((winner_name.to_string(), strike.to_vec()));
    }

    fn draw(&mut self) {
        self.draw_called = true;
    }

    fn update_game_statistics(&mut self, statistics: &GameStatistics) {
        self.statistics = Some(*statistics);
    }

    fn update_game_state(&mut self, snapshot: &GameSnapshot) {
        self.state = Some(snapshot.clone());
    }
}

fn config() -> GameConfig {
    GameConfig {
        first_player_name: "player1".to_string(),
        second_player_name: "player2".to_string(),
        ..GameConfig::default()
    }
}

fn controller() -> GameController<FakeView, MemoryStorage> {
    GameController::new(config(), FakeView::default(), MemoryStorage::new()).unwrap()
}

fn click(controller: &mut GameController<FakeView, MemoryStorage>, x: usize, y: usize) {
    controller
        .handle_input(InputEvent::TileClick { x, y })
        .unwrap();
}

fn win_for_first(controller: &mut GameController<FakeView, MemoryStorage>) {
    for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
        click(controller, x, y);
    }
}

#[test]
fn test_basic_flow() {
    let mut controller = controller();
    assert_eq!(controller.view().introduced.as_deref(), Some("player1"));

    click(&mut controller, 0, 0);

    assert_eq!(controller.view().moved, Some((0, 0, Tile::First)));
    assert_eq!(controller.view().introduced.as_deref(), Some("player2"));

    let stored = controller.storage().game_snapshot().unwrap().unwrap();
    assert_eq!(stored.grid.cells[0][0], CellState::First);
    assert_eq!(stored.next_player, Some(Tile::Second));
}

#[test]
fn test_ignored_clicks_do_not_change_state() {
    let mut controller = controller();
    click(&mut controller, 0, 0);
    click(&mut controller, 0, 0);
    click(&mut controller, 9, 9);

    assert_eq!(controller.grid().history().len(), 1);
    assert_eq!(controller.grid().next_player(), Some(Tile::Second));
}

#[test]
fn test_victory_updates_score_and_storage() {
    let mut controller = controller();
    win_for_first(&mut controller);

    let (name, strike) = controller.view().winner.clone().unwrap();
    assert_eq!(name, "player1");
    assert_eq!(
        strike,
        vec![Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)]
    );
    assert_eq!(controller.player(Tile::First).score, 1);
    assert_eq!(
        controller.storage().game_statistics().unwrap(),
        Some(GameStatistics {
            first_player_score: 1,
            second_player_score: 0
        })
    );
    assert_eq!(controller.view().statistics.unwrap().first_player_score, 1);

    // further clicks are ignored once the game is over
    click(&mut controller, 2, 2);
    assert_eq!(controller.grid().history().len(), 5);
}

#[test]
fn test_draw_is_reported() {
    let mut controller = controller();
    for (x, y) in [
        (0, 0),
        (0, 2),
        (0, 1),
        (1, 0),
        (1, 2),
        (1, 1),
        (2, 0),
        (2, 1),
        (2, 2),
    ] {
        click(&mut controller, x, y);
    }
    assert!(controller.view().draw_called);
    assert_eq!(controller.grid().game_status(), GameStatus::Draw);
    assert_eq!(controller.statistics(), GameStatistics::default());
}

#[test]
fn test_restart_swaps_first_player_and_keeps_score() {
    let mut controller = controller();
    win_for_first(&mut controller);

    controller.handle_input(InputEvent::Restart).unwrap();

    assert!(controller.view().cleared);
    assert_eq!(controller.grid().first_move(), Tile::Second);
    assert!(controller.grid().history().is_empty());
    assert_eq!(controller.view().introduced.as_deref(), Some("player2"));
    assert_eq!(controller.player(Tile::First).score, 1);

    let state = controller.view().state.clone().unwrap();
    assert_eq!(state.first_player, Tile::Second);
    assert!(state
        .grid
        .cells
        .iter()
        .all(|row| row.iter().all(|c| *c == CellState::Empty)));
}

#[test]
fn test_undo_winning_move_reverts_score() {
    let mut controller = controller();
    win_for_first(&mut controller);
    assert_eq!(controller.player(Tile::First).score, 1);

    controller.handle_input(InputEvent::Undo).unwrap();

    assert_eq!(controller.view().removed, Some((0, 2)));
    assert_eq!(controller.player(Tile::First).score, 0);
    assert_eq!(controller.grid().game_status(), GameStatus::KeepPlaying);
    assert_eq!(controller.view().introduced.as_deref(), Some("player1"));
    assert_eq!(
        controller
            .storage()
            .game_statistics()
            .unwrap()
            .unwrap()
            .first_player_score,
        0
    );
}

#[test]
fn test_undo_with_empty_history_is_noop() {
    let mut controller = controller();
    controller.handle_input(InputEvent::Undo).unwrap();
    assert_eq!(controller.view().removed, None);
    assert!(controller.grid().history().is_empty());
}

#[test]
fn test_resume_from_storage() {
    let mut first = controller();
    click(&mut first, 1, 1);
    click(&mut first, 0, 0);
    let storage = first.storage().clone();

    let resumed = GameController::new(config(), FakeView::default(), storage).unwrap();
    assert_eq!(resumed.grid().history().len(), 2);
    assert_eq!(resumed.grid().tile_at(1, 1).unwrap(), Some(Tile::First));
    assert_eq!(resumed.grid().tile_at(0, 0).unwrap(), Some(Tile::Second));
    assert_eq!(resumed.grid().next_player(), Some(Tile::First));
    assert_eq!(resumed.view().introduced.as_deref(), Some("player1"));
    assert_eq!(resumed.view().state.as_ref(), Some(&first.snapshot()));
}

#[test]
fn test_resume_finished_game_shows_winner() {
    let mut first = controller();
    win_for_first(&mut first);
    let storage = first.storage().clone();

    let resumed = GameController::new(config(), FakeView::default(), storage).unwrap();
    assert_eq!(resumed.grid().winner(), Some(Tile::First));
    assert_eq!(resumed.player(Tile::First).score, 1);
    let (name, strike) = resumed.view().winner.clone().unwrap();
    assert_eq!(name, "player1");
    assert_eq!(strike.len(), 3);
}

#[test]
fn test_mismatched_snapshot_is_discarded() {
    let mut first = controller();
    click(&mut first, 1, 1);
    let storage = first.storage().clone();

    let bigger = GameConfig {
        size: 5,
        strike: 4,
        ..config()
    };
    let resumed = GameController::new(bigger, FakeView::default(), storage).unwrap();
    assert_eq!(resumed.grid().size(), 5);
    assert!(resumed.grid().history().is_empty());
}

#[test]
fn test_corrupt_snapshot_is_ignored() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item("gameState", "{not json".to_string())
        .unwrap();
    let controller = GameController::new(config(), FakeView::default(), storage).unwrap();
    assert!(controller.grid().history().is_empty());
}

#[test]
fn test_invalid_config_is_rejected() {
    let bad = GameConfig {
        size: 0,
        ..config()
    };
    assert!(GameController::new(bad, FakeView::default(), MemoryStorage::new()).is_err());
}
