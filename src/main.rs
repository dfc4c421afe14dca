//! Gomoku-Rust: five-in-a-row against a heuristic opponent.
//!
//! ## Usage
//!
//! - `gomoku-rust` - Same as `selfplay`
//! - `gomoku-rust play` - Play in the terminal against the computer
//! - `gomoku-rust protocol` - Start the text protocol server for front ends
//! - `gomoku-rust selfplay` - Watch the computer play itself

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use gomoku_rust::board::{Board, Color, Outcome};
use gomoku_rust::config::GameConfig;
use gomoku_rust::constants::{DEFAULT_SIZE, DEFAULT_THINK_MS};
use gomoku_rust::coord::{format_vertex, parse_vertex};
use gomoku_rust::game::{Game, GameMode, GameState};
use gomoku_rust::heuristic::{Difficulty, select_move_with_difficulty};
use gomoku_rust::protocol::ProtocolEngine;
use gomoku_rust::random::FastRng;

/// Gomoku-Rust: five-in-a-row against a heuristic opponent
#[derive(Parser)]
#[command(name = "gomoku-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Board size (NxN)
    #[arg(short, long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Computer strength: easy, medium or hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: Difficulty,

    /// RNG seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pause before each computer move, in milliseconds
    #[arg(long, global = true, default_value_t = DEFAULT_THINK_MS)]
    think_ms: u64,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, global = true, default_value = "info")]
    log_level: LevelFilter,
}

#[derive(Subcommand)]
enum Commands {
    /// Play in the terminal; enter moves like `H8`
    Play {
        /// Two humans share the terminal, no computer
        #[arg(long)]
        two_player: bool,
    },
    /// Start the text protocol server on stdin/stdout
    Protocol,
    /// Let the computer play both sides
    Selfplay,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    initialize_logging(cli.log_level);

    let config = GameConfig {
        size: cli.size,
        difficulty: cli.difficulty,
        seed: cli.seed,
        think_delay: Duration::from_millis(cli.think_ms),
    };
    config.validate().context("invalid configuration")?;

    match cli.command {
        Some(Commands::Play { two_player }) => {
            let mode = if two_player {
                GameMode::TwoPlayer
            } else {
                GameMode::VsComputer(config.difficulty)
            };
            run_play(&config, mode)
        }
        Some(Commands::Protocol) => {
            let mut engine = ProtocolEngine::new(&config);
            let stdin = io::stdin();
            engine
                .run(stdin.lock(), io::stdout())
                .context("protocol session failed")
        }
        Some(Commands::Selfplay) | None => {
            run_selfplay(&config);
            Ok(())
        }
    }
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}

fn announce(outcome: Outcome) {
    match outcome {
        Outcome::Win(color) => println!("{color} wins!"),
        Outcome::Draw => println!("Draw!"),
        Outcome::Ongoing => {}
    }
}

fn run_play(config: &GameConfig, mode: GameMode) -> anyhow::Result<()> {
    let mut game = Game::new(config, mode)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Enter a vertex like H8, `restart` for a new game, `quit` to leave.\n");
    loop {
        if game.is_computer_turn() {
            thread::sleep(config.think_delay);
            let (pt, outcome) = game.computer_move()?;
            println!("Computer plays {}", format_vertex(pt));
            announce(outcome);
            continue;
        }

        print!("{}", game.board());
        match game.state() {
            GameState::Playing => print!("{} to move> ", game.current_player()),
            GameState::GameOver(_) => print!("game over> "),
        }
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line.context("failed to read move")?;
        let input = line.trim();
        match input.to_lowercase().as_str() {
            "" => continue,
            "quit" | "exit" => return Ok(()),
            "restart" => {
                game.restart();
                continue;
            }
            _ => {}
        }

        let Some((row, col)) = parse_vertex(input, game.board().size()) else {
            println!("Not a vertex on this board: {input}");
            continue;
        };
        match game.play(row, col) {
            Ok(outcome) => announce(outcome),
            Err(err) => println!("{:#}", anyhow::Error::from(err)),
        }
    }
}

fn run_selfplay(config: &GameConfig) {
    let mut board = Board::new(config.size);
    let mut rng = FastRng::from_seed(config.seed);
    let mut color = Color::Black;

    let outcome = loop {
        let Some((row, col)) = select_move_with_difficulty(
            &board,
            color,
            color.opponent(),
            config.difficulty,
            &mut rng,
        ) else {
            break Outcome::Draw;
        };
        board.place(row, col, color);
        info!(%color, vertex = %format_vertex((row, col)), "move");
        let outcome = board.outcome_after(row, col, color);
        if outcome != Outcome::Ongoing {
            break outcome;
        }
        color = color.opponent();
    };

    print!("{board}");
    announce(outcome);
}

