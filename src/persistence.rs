//! Text encoding of puzzle instances.
//!
//! One instance per line, tiles separated by whitespace, row-major:
//!
//! ```text
//! 1 2 3 4 5 6 7 0 8
//! 4 1 3 7 0 5 8 2 6
//! ```
//!
//! The grid size is not stored in the file, so every reader takes the
//! target `(width, height)`. Blank lines are skipped.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::PuzzleError;
use crate::state::State;

/// Parses one whitespace-separated line, numbering errors with `line_number`.
fn parse_line(
    line_number: usize,
    line: &str,
    dimensions: (usize, usize),
) -> Result<State, PuzzleError> {
    let tiles = line
        .split_whitespace()
        .map(|token| {
            token.parse::<u32>().map_err(|_| PuzzleError::InvalidToken {
                line: line_number,
                token: token.to_owned(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    State::from_int_list(&tiles, dimensions)
}

/// Parses a single puzzle instance.
pub fn parse_puzzle(line: &str, dimensions: (usize, usize)) -> Result<State, PuzzleError> {
    parse_line(1, line, dimensions)
}

/// Parses every non-blank line of `text` as a puzzle instance.
pub fn parse_puzzles(text: &str, dimensions: (usize, usize)) -> Result<Vec<State>, PuzzleError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_line(index + 1, line, dimensions))
        .collect()
}

/// Reads and parses a puzzle file.
pub fn load_puzzles(
    path: impl AsRef<Path>,
    dimensions: (usize, usize),
) -> Result<Vec<State>, PuzzleError> {
    let text = fs::read_to_string(path)?;
    parse_puzzles(&text, dimensions)
}

/// Writes states to a puzzle file, one instance per line.
pub fn save_puzzles(path: impl AsRef<Path>, states: &[State]) -> std::io::Result<()> {
    let mut file = BufWriter::new(File::create(path)?);
    for state in states {
        writeln!(file, "{}", state.to_single_line_string())?;
    }
    file.flush()
}
