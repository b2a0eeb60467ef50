//! Move generation and application on the toroidal grid.
//!
//! Every edge of the grid wraps to the opposite edge. Move rules:
//! - the four lateral neighbors of the empty cell cost 1, or 2 when the slide
//!   crosses a seam on an axis longer than 2
//! - on a 2-long axis both neighbors are the same cell and appear once
//! - from a corner of any grid except 2x2, two diagonal moves costing 3 are
//!   offered as well
//!
//! A move's direction points from the moving tile to the empty cell, so
//! `tile + direction` (wrapped) is always where the empty cell sits before
//! the move is applied.

use crate::grid::wrap_pos;
use crate::state::{Direction, State, TilePos};

/// Traversal cost of a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MoveCost {
    /// Slide between two neighboring cells.
    Regular = 1,
    /// Slide across a torus seam.
    Wrapped = 2,
    /// Corner move combining two wraps.
    Diagonal = 3,
}

impl MoveCost {
    #[inline]
    pub const fn value(self) -> u32 {
        self as u32
    }
}

/// A tile sliding into the empty cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub cost: MoveCost,
    /// The tile that moves; it becomes the empty cell afterwards.
    pub tile: TilePos,
    /// Vector from `tile` to the current empty cell.
    pub direction: Direction,
}

impl Move {
    /// Returns the move that slides the tile back, undoing this one.
    pub fn reversed(&self, dimensions: (usize, usize)) -> Move {
        Move {
            cost: self.cost,
            tile: wrap_pos(self.tile, self.direction, dimensions),
            direction: (-self.direction.0, -self.direction.1),
        }
    }
}

/// Tile offsets from the empty cell, top then bottom.
const VERTICAL_OFFSETS: [Direction; 2] = [(0, -1), (0, 1)];

/// Tile offsets from the empty cell, left then right.
const HORIZONTAL_OFFSETS: [Direction; 2] = [(-1, 0), (1, 0)];

/// Diagonal tile offsets from the top-left and bottom-right corners.
const MAIN_DIAGONAL_OFFSETS: [Direction; 2] = [(-1, -1), (1, 1)];

/// Diagonal tile offsets from the top-right and bottom-left corners.
const ANTI_DIAGONAL_OFFSETS: [Direction; 2] = [(-1, 1), (1, -1)];

/// Cost of a lateral slide from `tile` into `empty`.
fn lateral_cost(tile: TilePos, empty: TilePos, (width, height): (usize, usize)) -> MoveCost {
    let crosses_seam = |tile_axis: usize, empty_axis: usize, size: usize| {
        size > 2
            && ((tile_axis == 0 && empty_axis == size - 1)
                || (tile_axis == size - 1 && empty_axis == 0))
    };

    if crosses_seam(tile.0, empty.0, width) || crosses_seam(tile.1, empty.1, height) {
        MoveCost::Wrapped
    } else {
        MoveCost::Regular
    }
}

/// Picks the lateral offsets for one axis.
///
/// Both neighbors coincide on a 2-long axis, so only the one at index
/// `keep` is offered.
fn axis_offsets(offsets: &[Direction; 2], size: usize, keep: usize) -> &[Direction] {
    if size == 2 {
        &offsets[keep..=keep]
    } else {
        offsets
    }
}

/// Diagonal tile offsets available from `empty`, if it sits on a corner.
fn diagonal_offsets(empty: TilePos, (width, height): (usize, usize)) -> &'static [Direction] {
    // every cell of a 2x2 grid is already a lateral neighbor
    if (width, height) == (2, 2) {
        return &[];
    }

    let (last_x, last_y) = (width - 1, height - 1);
    if empty == (0, 0) || empty == (last_x, last_y) {
        &MAIN_DIAGONAL_OFFSETS
    } else if empty == (last_x, 0) || empty == (0, last_y) {
        &ANTI_DIAGONAL_OFFSETS
    } else {
        &[]
    }
}

/// Enumerates every legal move from `state`.
///
/// Order is top, bottom, left, right (a 2-long axis keeps only top or
/// right), followed by the two diagonals when the empty cell is on a corner.
pub fn get_moves(state: &State) -> Vec<Move> {
    let dimensions = state.dimensions();
    let (width, height) = dimensions;
    let empty = state.empty_pos();
    let mut moves = Vec::with_capacity(6);

    let laterals = axis_offsets(&VERTICAL_OFFSETS, height, 0)
        .iter()
        .chain(axis_offsets(&HORIZONTAL_OFFSETS, width, 1));
    for &offset in laterals {
        let tile = wrap_pos(empty, offset, dimensions);
        moves.push(Move {
            cost: lateral_cost(tile, empty, dimensions),
            tile,
            direction: (-offset.0, -offset.1),
        });
    }

    for &offset in diagonal_offsets(empty, dimensions) {
        moves.push(Move {
            cost: MoveCost::Diagonal,
            tile: wrap_pos(empty, offset, dimensions),
            direction: (-offset.0, -offset.1),
        });
    }

    moves
}

/// Applies `mv` to a copy of `state` and returns the successor.
///
/// `mv` must come from `get_moves` on this same state. The source is left
/// untouched and the successor's empty cell is `mv.tile`.
pub fn compute_move(state: &State, mv: &Move) -> State {
    let new_empty = wrap_pos(mv.tile, mv.direction, state.dimensions());
    debug_assert_eq!(
        new_empty,
        state.empty_pos(),
        "move {mv:?} was not generated for this state"
    );

    let mut successor = state.clone();
    successor.swap_tiles(mv.tile, new_empty);
    successor
}

impl State {
    /// Enumerates every legal move. See [`get_moves`].
    pub fn get_moves(&self) -> Vec<Move> {
        get_moves(self)
    }

    /// Returns the state reached by applying `mv`. See [`compute_move`].
    pub fn compute_move(&self, mv: &Move) -> State {
        compute_move(self, mv)
    }
}
