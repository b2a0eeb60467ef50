//! Toroidal Sliding-Tile Puzzle CLI
//!
//! Inspects puzzle instances: lists the moves available from a state,
//! prints the goal states for a grid size, and checks puzzle files.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use rustc_hash::FxHashSet;

use torus_puzzle::persistence::{load_puzzles, parse_puzzle};
use torus_puzzle::{goals_for_dimensions, is_goal, Expand, PuzzleError, State};

/// Expands and inspects toroidal sliding-tile puzzles.
#[derive(Parser)]
#[command(name = "torus-puzzle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Grid size shared by every subcommand.
#[derive(Args, Clone, Copy)]
struct Dimensions {
    /// Number of columns.
    #[arg(long)]
    width: usize,
    /// Number of rows.
    #[arg(long)]
    height: usize,
}

impl Dimensions {
    fn pair(self) -> (usize, usize) {
        (self.width, self.height)
    }
}

#[derive(Subcommand)]
enum Command {
    /// List every legal move from a state and the state it leads to.
    Moves {
        #[command(flatten)]
        dimensions: Dimensions,
        /// Tiles in row-major order, 0 for the empty cell.
        #[arg(required = true)]
        tiles: Vec<String>,
    },
    /// Print the row-major and column-major goal states.
    Goals {
        #[command(flatten)]
        dimensions: Dimensions,
    },
    /// Load a puzzle file and report on every instance.
    Check {
        #[command(flatten)]
        dimensions: Dimensions,
        /// File with one puzzle instance per line.
        file: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Moves { dimensions, tiles } => run_moves(dimensions, &tiles),
        Command::Goals { dimensions } => run_goals(dimensions),
        Command::Check { dimensions, file } => run_check(dimensions, &file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Formats a state followed by one line per legal move.
fn format_moves(state: &State) -> String {
    let mut output = state.to_string();
    for (mv, next) in state.successors() {
        output.push_str(&format!(
            "cost {} tile ({}, {}) dir ({}, {}) -> {}\n",
            State::cost(&mv),
            mv.tile.0,
            mv.tile.1,
            mv.direction.0,
            mv.direction.1,
            next.to_single_line_string()
        ));
    }
    output
}

/// Prints the moves available from the state given on the command line.
fn run_moves(dimensions: Dimensions, tiles: &[String]) -> Result<(), PuzzleError> {
    let state = parse_puzzle(&tiles.join(" "), dimensions.pair())?;
    print!("{}", format_moves(&state));
    Ok(())
}

/// Prints both goal states, one per line.
fn run_goals(dimensions: Dimensions) -> Result<(), PuzzleError> {
    let (row_major, column_major) = goals_for_dimensions(dimensions.pair())?;
    println!("{}", row_major.to_single_line_string());
    println!("{}", column_major.to_single_line_string());
    Ok(())
}

/// Prints per-instance move counts and goal status, then a summary.
fn run_check(dimensions: Dimensions, file: &Path) -> Result<(), PuzzleError> {
    let puzzles = load_puzzles(file, dimensions.pair())?;

    let mut distinct: FxHashSet<&State> = FxHashSet::default();
    let mut solved = 0;
    for (i, puzzle) in puzzles.iter().enumerate() {
        let goal = is_goal(puzzle);
        if goal {
            solved += 1;
        }
        distinct.insert(puzzle);
        println!(
            "Puzzle {}: {} moves{}",
            i + 1,
            puzzle.moves().len(),
            if goal { ", solved" } else { "" }
        );
    }

    println!(
        "{} puzzles, {} distinct, {} solved",
        puzzles.len(),
        distinct.len(),
        solved
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_snapshot() {
        let state = parse_puzzle("1 2 3 4 5 6 7 8 0", (3, 3)).unwrap();
        insta::assert_snapshot!(format_moves(&state).trim_end(), @r"
        1 2 3
        4 5 6
        7 8 0
        cost 1 tile (2, 1) dir (0, 1) -> 1 2 3 4 5 0 7 8 6
        cost 2 tile (2, 0) dir (0, -1) -> 1 2 0 4 5 6 7 8 3
        cost 1 tile (1, 2) dir (1, 0) -> 1 2 3 4 5 6 7 0 8
        cost 2 tile (0, 2) dir (-1, 0) -> 1 2 3 4 5 6 0 8 7
        cost 3 tile (1, 1) dir (1, 1) -> 1 2 3 4 0 6 7 8 5
        cost 3 tile (0, 0) dir (-1, -1) -> 0 2 3 4 5 6 7 8 1
        ");
    }

    #[test]
    fn test_cli_parses_moves_command() {
        let cli = Cli::try_parse_from([
            "torus-puzzle",
            "moves",
            "--width",
            "2",
            "--height",
            "2",
            "1",
            "2",
            "3",
            "0",
        ])
        .unwrap();
        match cli.command {
            Command::Moves { dimensions, tiles } => {
                assert_eq!(dimensions.pair(), (2, 2));
                assert_eq!(tiles, ["1", "2", "3", "0"]);
            }
            _ => panic!("Expected the moves subcommand"),
        }
    }

    #[test]
    fn test_cli_requires_dimensions() {
        assert!(Cli::try_parse_from(["torus-puzzle", "goals", "--width", "3"]).is_err());
    }
}
