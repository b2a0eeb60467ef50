//! Error type shared by every fallible operation in the crate.
//!
//! Every variant describes malformed caller input. Nothing here is transient,
//! so callers should propagate rather than retry.

use thiserror::Error;

use crate::state::TilePos;

/// Errors raised while building or loading puzzle states.
#[derive(Error, Debug)]
pub enum PuzzleError {
    /// Width or height below the minimum of 2.
    #[error("invalid puzzle dimensions {width}x{height}: width and height must be at least 2")]
    InvalidDimensions { width: usize, height: usize },
    /// The number of cells does not match `width * height`.
    #[error("expected {expected} tiles but got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// A raw grid row has a different length than the first row.
    #[error("row {row} has {actual} tiles, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// No cell holds the requested value.
    #[error("no tile marked as '{0}' found in the puzzle definition")]
    TileNotFound(u32),
    /// More than one cell holds the empty marker.
    #[error("empty tile found at both {first:?} and {second:?}")]
    DuplicateEmptyTile { first: TilePos, second: TilePos },
    /// A supplied empty-cell coordinate disagrees with the grid contents.
    #[error("empty tile hint {hint:?} does not match its actual position {actual:?}")]
    EmptyHintMismatch { hint: TilePos, actual: TilePos },
    /// A token in a puzzle line is not a non-negative integer.
    #[error("line {line}: invalid tile {token:?}")]
    InvalidToken { line: usize, token: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
