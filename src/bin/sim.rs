use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde_json::json;
use strike::{Grid, MoveResult, Tile, DEFAULT_SIZE, DEFAULT_STRIKE};

/// Play one game of uniformly random moves and return its final result and length.
fn random_game(
    rng: &mut SmallRng,
    size: usize,
    strike: usize,
    first: Tile,
) -> anyhow::Result<(MoveResult, usize)> {
    let mut grid = Grid::new(size, strike, first);
    loop {
        let empty = grid.empty_cells();
        let pos = empty[rng.random_range(0..empty.len())];
        let result = grid.play(pos.x, pos.y)?;
        if !matches!(result, MoveResult::KeepPlaying) {
            return Ok((result, grid.history().len()));
        }
    }
}

fn main() -> anyhow::Result<()> {
    strike::init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 && args.len() != 5 {
        eprintln!("Usage: {} <seed> <games> [<size> <strike>]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = args[2].parse()?;
    let (size, strike) = if args.len() == 5 {
        (args[3].parse()?, args[4].parse()?)
    } else {
        (DEFAULT_SIZE, DEFAULT_STRIKE)
    };
    if size == 0 {
        anyhow::bail!("size must be at least 1");
    }

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut first_wins = 0usize;
    let mut second_wins = 0usize;
    let mut draws = 0usize;
    let mut total_moves = 0usize;
    let mut first = Tile::First;

    for _ in 0..games {
        let (result, moves) = random_game(&mut rng, size, strike, first)?;
        total_moves += moves;
        match result {
            MoveResult::Victory { winner: Tile::First, .. } => first_wins += 1,
            MoveResult::Victory { winner: Tile::Second, .. } => second_wins += 1,
            _ => draws += 1,
        }
        first = first.other();
    }

    let result = json!({
        "games": games,
        "size": size,
        "strike": strike,
        "firstWins": first_wins,
        "secondWins": second_wins,
        "draws": draws,
        "moves": total_moves,
    });
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
