//! Line-based text protocol for driving the engine from other programs.
//!
//! Modeled on the Go Text Protocol: each request is an optional numeric id,
//! a command and its arguments. Each response is `=[id] message` on success
//! or `?[id] message` on failure, followed by a blank line.
//!
//! ## Supported Commands
//!
//! - `name`, `version`, `protocol_version`
//! - `list_commands`, `known_command <cmd>`
//! - `quit`
//! - `boardsize <size>` - Resize and clear the board (5 to 26)
//! - `clear_board` - Reset the board to empty
//! - `difficulty <easy|medium|hard>` - Strength used by `genmove`
//! - `play <color> <vertex>` - Place a stone, e.g. `play black H8`
//! - `genmove <color>` - Choose and play a move for the given color
//! - `showboard` - Print the board
//! - `score <color> <vertex>` - Raw heuristic score of a cell
//!
//! A move that ends the game answers with `win <color>` or `draw`.

use std::io::{self, BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Board, Color, Outcome};
use crate::config::{GameConfig, validate_size};
use crate::coord::{format_vertex, parse_vertex};
use crate::heuristic::{Difficulty, score_candidate, select_move_with_difficulty};
use crate::random::{FastRng, RandomSource};

/// The list of known commands.
const KNOWN_COMMANDS: &[&str] = &[
    "boardsize",
    "clear_board",
    "difficulty",
    "genmove",
    "known_command",
    "list_commands",
    "name",
    "play",
    "protocol_version",
    "quit",
    "score",
    "showboard",
    "version",
];

/// Protocol engine state.
pub struct ProtocolEngine<R: RandomSource = FastRng> {
    board: Board,
    /// Outcome of the last move played
    outcome: Outcome,
    difficulty: Difficulty,
    rng: R,
}

impl ProtocolEngine<FastRng> {
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, FastRng::from_seed(config.seed))
    }
}

impl<R: RandomSource> ProtocolEngine<R> {
    pub fn with_rng(config: &GameConfig, rng: R) -> Self {
        Self {
            board: Board::new(config.size),
            outcome: Outcome::Ongoing,
            difficulty: config.difficulty,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the command loop until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;

            // Skip empty lines and comments
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (id, command_line) = Self::parse_id(line);
            let parts: Vec<&str> = command_line.split_whitespace().collect();
            let Some((command, args)) = parts.split_first() else {
                continue;
            };
            let command = command.to_lowercase();

            let (success, message) = self.execute(&command, args);
            if !success {
                warn!(command = %command, %message, "command failed");
            }
            let prefix = if success { '=' } else { '?' };
            let id_str = id.map(|i| i.to_string()).unwrap_or_default();
            write!(output, "{prefix}{id_str} {message}\n\n")?;
            output.flush()?;

            if command == "quit" {
                break;
            }
        }
        Ok(())
    }

    /// Split an optional numeric command id off the front of the line.
    fn parse_id(line: &str) -> (Option<u32>, &str) {
        let trimmed = line.trim();
        let end = trimmed
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(trimmed.len());
        match trimmed[..end].parse::<u32>() {
            Ok(id) => (Some(id), trimmed[end..].trim()),
            Err(_) => (None, trimmed),
        }
    }

    fn parse_color(arg: &str) -> Option<Color> {
        match arg.to_lowercase().as_str() {
            "b" | "black" => Some(Color::Black),
            "w" | "white" => Some(Color::White),
            _ => None,
        }
    }

    fn outcome_message(outcome: Outcome, vertex: String) -> String {
        match outcome {
            Outcome::Ongoing => vertex,
            Outcome::Win(color) => format!("{vertex} win {color}").trim_start().to_string(),
            Outcome::Draw => format!("{vertex} draw").trim_start().to_string(),
        }
    }

    fn clear(&mut self) {
        self.board.reset();
        self.outcome = Outcome::Ongoing;
    }

    /// Execute a command and return (success, response).
    fn execute(&mut self, command: &str, args: &[&str]) -> (bool, String) {
        debug!(command, ?args, "command");
        match command {
            "name" => (true, "gomoku-rust".to_string()),

            "version" => (true, env!("CARGO_PKG_VERSION").to_string()),

            "protocol_version" => (true, "2".to_string()),

            "list_commands" => (true, KNOWN_COMMANDS.join("\n")),

            "known_command" => {
                let Some(cmd) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let known = KNOWN_COMMANDS.contains(&cmd.to_lowercase().as_str());
                (true, known.to_string())
            }

            "quit" => (true, String::new()),

            "boardsize" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                let Ok(size) = arg.parse::<usize>() else {
                    return (false, "invalid size".to_string());
                };
                if let Err(err) = validate_size(size) {
                    return (false, format!("unacceptable size: {err}"));
                }
                self.board = Board::new(size);
                self.outcome = Outcome::Ongoing;
                (true, String::new())
            }

            "clear_board" => {
                self.clear();
                (true, String::new())
            }

            "difficulty" => {
                let Some(arg) = args.first() else {
                    return (false, "missing argument".to_string());
                };
                match arg.parse::<Difficulty>() {
                    Ok(difficulty) => {
                        self.difficulty = difficulty;
                        (true, String::new())
                    }
                    Err(err) => (false, err.to_string()),
                }
            }

            "play" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = Self::parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                let Some((row, col)) = parse_vertex(vertex, self.board.size()) else {
                    return (false, "invalid vertex".to_string());
                };
                if self.outcome != Outcome::Ongoing {
                    return (false, "game is over".to_string());
                }
                if let Err(err) = self.board.check_placement(row, col) {
                    return (false, err.to_string());
                }
                self.board.place(row, col, color);
                self.outcome = self.board.outcome_after(row, col, color);
                (true, Self::outcome_message(self.outcome, String::new()))
            }

            "genmove" => {
                let Some(color) = args.first().and_then(|a| Self::parse_color(a)) else {
                    return (false, "invalid color".to_string());
                };
                if self.outcome != Outcome::Ongoing {
                    return (false, "game is over".to_string());
                }
                let choice = select_move_with_difficulty(
                    &self.board,
                    color,
                    color.opponent(),
                    self.difficulty,
                    &mut self.rng,
                );
                let Some((row, col)) = choice else {
                    return (true, "pass".to_string());
                };
                self.board.place(row, col, color);
                self.outcome = self.board.outcome_after(row, col, color);
                (true, Self::outcome_message(self.outcome, format_vertex((row, col))))
            }

            "showboard" => (true, format!("\n{}", self.board).trim_end().to_string()),

            "score" => {
                let [color, vertex, ..] = args else {
                    return (false, "missing arguments".to_string());
                };
                let Some(color) = Self::parse_color(color) else {
                    return (false, "invalid color".to_string());
                };
                let Some(pt) = parse_vertex(vertex, self.board.size()) else {
                    return (false, "invalid vertex".to_string());
                };
                (true, score_candidate(&self.board, pt, color).to_string())
            }

            _ => (false, format!("unknown command: {command}")),
        }
    }
}
