//! Gomoku in the terminal
//!
//! Humans type a row and a column when prompted; AI players announce their
//! moves. Player setup comes from `gomoku.toml` (or `GOMOKU_CONFIG`),
//! environment overrides, and finally the flags below.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gomoku::config::{self, GameConfig, PlayerConfig, DEFAULT_DEPTH};
use gomoku::{Board, GameError, GameSession, MoveInput, Outcome, Player, PlayerKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gomoku-cli")]
#[command(version, about = "Play Gomoku against humans or search AIs", long_about = None)]
struct Cli {
    /// Board size (5-19)
    #[arg(long)]
    size: Option<usize>,

    /// Player 1 type (plays X and moves first)
    #[arg(long, value_enum)]
    p1: Option<PlayerKind>,

    #[arg(long)]
    p1_name: Option<String>,

    /// Player 1 search depth
    #[arg(long)]
    p1_depth: Option<u8>,

    /// Player 2 type (plays O)
    #[arg(long, value_enum)]
    p2: Option<PlayerKind>,

    #[arg(long)]
    p2_name: Option<String>,

    /// Player 2 search depth
    #[arg(long)]
    p2_depth: Option<u8>,

    /// Seed for AI tie-breaks, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Config file (default: gomoku.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Choose both players interactively
    #[arg(long)]
    choose: bool,
}

impl Cli {
    fn apply(&self, config: &mut GameConfig) {
        if let Some(size) = self.size {
            config.board_size = size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        apply_seat(&mut config.player1, self.p1, &self.p1_name, self.p1_depth);
        apply_seat(&mut config.player2, self.p2, &self.p2_name, self.p2_depth);
    }
}

fn apply_seat(seat: &mut PlayerConfig, kind: Option<PlayerKind>, name: &Option<String>, depth: Option<u8>) {
    if let Some(kind) = kind {
        seat.kind = kind;
    }
    if let Some(name) = name {
        seat.name = name.clone();
    }
    if let Some(depth) = depth {
        seat.depth = depth;
    }
}

/// Line-oriented prompts on stdin
struct Console {
    lines: io::Lines<io::StdinLock<'static>>,
}

impl Console {
    fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }

    /// Print `text` and read one line. `None` on end of input.
    fn prompt(&mut self, text: &str) -> Option<String> {
        print!("{text}");
        io::stdout().flush().ok()?;
        self.lines.next()?.ok()
    }

    fn choose_seat(&mut self, number: u8) -> Option<PlayerConfig> {
        println!("\nSelect type for Player {number}:");
        for (i, kind) in PlayerKind::ALL.iter().enumerate() {
            println!("{}. {kind}", i + 1);
        }
        loop {
            let choice = self.prompt("Enter your choice (1-3): ")?;
            let kind = match choice.trim().parse::<usize>() {
                Ok(n @ 1..=3) => PlayerKind::ALL[n - 1],
                Ok(_) => {
                    println!("Invalid choice.");
                    continue;
                }
                Err(_) => {
                    println!("Please enter a number.");
                    continue;
                }
            };
            let name = self.prompt(&format!("Enter name for Player {number}: "))?;
            return Some(PlayerConfig::new(name.trim(), kind, DEFAULT_DEPTH));
        }
    }
}

impl MoveInput for Console {
    fn next_move(&mut self, _board: &Board, player: &Player) -> Option<(i32, i32)> {
        loop {
            let row = self.prompt(&format!("{player} row: "))?;
            let col = self.prompt(&format!("{player} col: "))?;
            match (row.trim().parse(), col.trim().parse()) {
                (Ok(row), Ok(col)) => return Some((row, col)),
                _ => println!("Please enter numeric values."),
            }
        }
    }

    fn reject(&mut self, _row: i32, _col: i32) {
        println!("Invalid move. Cell is occupied or out of bounds.");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gomoku=warn")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => config::apply_env_overrides(
            GameConfig::from_file(path).with_context(|| format!("loading {}", path.display()))?,
        ),
        None => config::load_config(),
    };
    cli.apply(&mut config);

    let mut console = Console::new();
    println!("Welcome to Gomoku!");
    if cli.choose {
        for number in 1..=2 {
            let seat = console.choose_seat(number).context("input closed during setup")?;
            let depth = config.player(number).map_or(DEFAULT_DEPTH, |p| p.depth);
            let seat = PlayerConfig { depth, ..seat };
            match number {
                1 => config.player1 = seat,
                _ => config.player2 = seat,
            }
        }
    }

    let mut session = GameSession::new(&config).context("invalid game setup")?;
    loop {
        println!("{}", session.board());
        let player = session.current_player().clone();

        let outcome = match session.play_turn(&mut console) {
            Ok(outcome) => outcome,
            Err(GameError::InputClosed) => {
                println!("\nInput closed, quitting.");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };
        if let (false, Some(pos)) = (player.is_human(), session.last_move()) {
            println!("Player: {} played at row: {}, col: {}", player.name(), pos.row, pos.col);
        }

        match outcome {
            Outcome::InProgress => {}
            Outcome::Won { .. } => {
                print!("{}", session.board());
                println!("{player} wins!");
                break;
            }
            Outcome::Draw => {
                print!("{}", session.board());
                println!("It's a draw!");
                break;
            }
        }
    }
    Ok(())
}
