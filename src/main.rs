#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::io::{self, BufRead, Write};
#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use strike::{
    init_logging, parse_input, FileStorage, GameConfig, GameController, MemoryStorage, Storage,
    TerminalView, DEFAULT_FIRST_PLAYER, DEFAULT_SECOND_PLAYER, DEFAULT_SIZE, DEFAULT_STRIKE,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play a game in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_SIZE, help = "Board dimension (N for an NxN grid)")]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_STRIKE, help = "Marks in a row needed to win")]
        strike: usize,
        #[arg(long, default_value = DEFAULT_FIRST_PLAYER)]
        first_name: String,
        #[arg(long, default_value = DEFAULT_SECOND_PLAYER)]
        second_name: String,
        #[arg(long, help = "Directory for the saved game and score (omit to keep nothing)")]
        state_dir: Option<PathBuf>,
    },
    /// Forget the saved game and score.
    Reset {
        #[arg(long)]
        state_dir: PathBuf,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            size,
            strike,
            first_name,
            second_name,
            state_dir,
        } => {
            let config = GameConfig {
                size,
                strike,
                first_player_name: first_name,
                second_player_name: second_name,
            };
            match state_dir {
                Some(dir) => run(config, FileStorage::new(dir)),
                None => run(config, MemoryStorage::new()),
            }
        }
        Commands::Reset { state_dir } => {
            let mut storage = FileStorage::new(state_dir);
            storage.reset()?;
            println!("Cleared saved state in {}", storage.dir().display());
            Ok(())
        }
    }
}

#[cfg(feature = "std")]
fn run<S: Storage>(config: GameConfig, storage: S) -> anyhow::Result<()> {
    let size = config.size;
    let mut controller = GameController::new(config, TerminalView::new(), storage)?;
    println!("Enter 'x y' to move, 'undo', 'restart' or 'quit'.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if matches!(trimmed, "quit" | "q" | "exit") {
            break;
        }
        match parse_input(trimmed, size) {
            Ok(event) => controller.handle_input(event)?,
            Err(msg) => println!("{}", msg),
        }
    }
    Ok(())
}
