//! Puzzle state and coordinate types.
//!
//! A `State` owns one grid configuration plus the cached position of the
//! empty tile. Once built it is never changed from outside the crate: every
//! move produces a fresh `State`, so states can sit in visited sets and
//! frontiers without one of them changing under another.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use crate::error::PuzzleError;
use crate::grid::{coord_to_idx, format_grid, format_single_line, idx_to_coord};

/// A tile coordinate `(x, y)` with the origin at the top left.
pub type TilePos = (usize, usize);

/// A vector in `{-1, 0, 1}²` pointing from a moving tile to the empty cell.
pub type Direction = (i8, i8);

/// Value marking the empty cell.
pub const EMPTY_TILE: u32 = 0;

/// Smallest allowed width or height.
pub const MIN_DIMENSION: usize = 2;

/// One configuration of a toroidal sliding-tile puzzle.
///
/// Equality and hashing only look at the grid shape and contents. The cached
/// empty position is derived from them.
#[derive(Debug, Clone)]
pub struct State {
    width: usize,
    height: usize,
    /// Row-major cell values, `width * height` long.
    cells: Box<[u32]>,
    empty_pos: TilePos,
}

/// Validates a grid size and returns its cell count.
pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<usize, PuzzleError> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(PuzzleError::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .ok_or(PuzzleError::InvalidDimensions { width, height })
}

fn check_cell_count(cells: &[u32], expected: usize) -> Result<(), PuzzleError> {
    if cells.len() != expected {
        return Err(PuzzleError::SizeMismatch {
            expected,
            actual: cells.len(),
        });
    }
    Ok(())
}

/// Scans row-major (y outer, x inner) for the first cell equal to `value`.
fn locate_in(cells: &[u32], width: usize, value: u32) -> Result<TilePos, PuzzleError> {
    cells
        .iter()
        .position(|&cell| cell == value)
        .map(|cell_index| idx_to_coord(width, cell_index))
        .ok_or(PuzzleError::TileNotFound(value))
}

/// Locates the empty tile, rejecting grids that hold more than one.
fn locate_single_empty(cells: &[u32], width: usize) -> Result<TilePos, PuzzleError> {
    let first = locate_in(cells, width, EMPTY_TILE)?;
    let next_index = coord_to_idx(width, first) + 1;
    if let Some(offset) = cells[next_index..].iter().position(|&cell| cell == EMPTY_TILE) {
        return Err(PuzzleError::DuplicateEmptyTile {
            first,
            second: idx_to_coord(width, next_index + offset),
        });
    }
    Ok(first)
}

impl State {
    /// Builds a state from row-major cells and explicit dimensions.
    ///
    /// The empty tile is located by scanning and must appear exactly once.
    pub fn new(width: usize, height: usize, cells: Vec<u32>) -> Result<Self, PuzzleError> {
        let expected = check_dimensions(width, height)?;
        check_cell_count(&cells, expected)?;

        let empty_pos = locate_single_empty(&cells, width)?;
        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
            empty_pos,
        })
    }

    /// Builds a state from row-major cells with a known empty-cell position.
    ///
    /// The hint is checked against a scan and rejected, with the scanned
    /// position, when the two disagree.
    pub fn with_empty_hint(
        width: usize,
        height: usize,
        cells: Vec<u32>,
        hint: TilePos,
    ) -> Result<Self, PuzzleError> {
        let expected = check_dimensions(width, height)?;
        check_cell_count(&cells, expected)?;

        let actual = locate_single_empty(&cells, width)?;
        if actual != hint {
            return Err(PuzzleError::EmptyHintMismatch { hint, actual });
        }

        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
            empty_pos: hint,
        })
    }

    /// Builds a state from a 2-D grid, one `Vec` per row.
    ///
    /// Dimensions are inferred from the grid's shape.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self, PuzzleError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let expected = check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(expected);
        for (row_index, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(PuzzleError::RaggedGrid {
                    row: row_index,
                    expected: width,
                    actual: row.len(),
                });
            }
            cells.extend_from_slice(row);
        }

        Self::new(width, height, cells)
    }

    /// Reshapes a flat list into a `(width, height)` grid, row by row.
    pub fn from_int_list(list: &[u32], dimensions: (usize, usize)) -> Result<Self, PuzzleError> {
        Self::new(dimensions.0, dimensions.1, list.to_vec())
    }

    /// Assembles a state whose dimensions and empty position are already known.
    pub(crate) fn from_parts(
        width: usize,
        height: usize,
        cells: Box<[u32]>,
        empty_pos: TilePos,
    ) -> Self {
        debug_assert!(width >= MIN_DIMENSION && height >= MIN_DIMENSION);
        debug_assert_eq!(cells.len(), width * height);
        debug_assert_eq!(cells[coord_to_idx(width, empty_pos)], EMPTY_TILE);
        Self {
            width,
            height,
            cells,
            empty_pos,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Returns the cached position of the empty tile.
    #[inline]
    pub fn empty_pos(&self) -> TilePos {
        self.empty_pos
    }

    /// Returns all cell values in row-major order.
    #[inline]
    pub fn cells(&self) -> &[u32] {
        &self.cells
    }

    /// Iterates over the grid rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Returns the value at `pos`, or `None` when it lies outside the grid.
    pub fn get(&self, pos: TilePos) -> Option<u32> {
        (pos.0 < self.width && pos.1 < self.height)
            .then(|| self.cells[coord_to_idx(self.width, pos)])
    }

    /// Finds the first cell holding `value` in row-major order.
    pub fn locate(&self, value: u32) -> Result<TilePos, PuzzleError> {
        locate_in(&self.cells, self.width, value)
    }

    /// Swaps two cells, keeping the cached empty position in step.
    ///
    /// Only used on freshly cloned states while applying a move.
    pub(crate) fn swap_tiles(&mut self, a: TilePos, b: TilePos) {
        let a_index = coord_to_idx(self.width, a);
        let b_index = coord_to_idx(self.width, b);
        self.cells.swap(a_index, b_index);

        if self.empty_pos == a {
            self.empty_pos = b;
        } else if self.empty_pos == b {
            self.empty_pos = a;
        }
    }

    /// Lists every cell value, row-major, separated by single spaces.
    ///
    /// This is the same encoding `persistence::parse_puzzle` reads.
    pub fn to_single_line_string(&self) -> String {
        format_single_line(&self.cells)
    }
}

impl Index<TilePos> for State {
    type Output = u32;

    fn index(&self, pos: TilePos) -> &Self::Output {
        assert!(
            pos.0 < self.width && pos.1 < self.height,
            "tile {pos:?} outside {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[coord_to_idx(self.width, pos)]
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for State {}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.width.hash(state);
        self.cells.hash(state);
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_grid(&self.cells, self.width))
    }
}
