//! Toroidal Sliding-Tile Puzzle Library
//!
//! Models an N×M sliding-tile puzzle whose edges wrap around, and expands
//! states for an external graph search (A*, IDA*, ...). The library owns
//! state representation, move generation with costs, move application and
//! goal construction. Searching is left to the caller.

pub mod error;
pub mod goals;
pub mod grid;
pub mod moves;
pub mod persistence;
pub mod state;

use std::hash::Hash;

pub use error::PuzzleError;
pub use goals::{find_goals, goals_for_dimensions, is_goal};
pub use moves::{compute_move, get_moves, Move, MoveCost};
pub use state::{Direction, State, TilePos, EMPTY_TILE};

/// What a search needs from a puzzle state: its moves, their costs, and the
/// states they lead to.
///
/// States are compared and hashed by value so they can key visited sets and
/// frontiers directly.
pub trait Expand: Clone + Eq + Hash {
    type Move: Copy;

    fn moves(&self) -> Vec<Self::Move>;
    fn apply(&self, mv: &Self::Move) -> Self;
    fn cost(mv: &Self::Move) -> u32;

    /// Pairs every legal move with the state it produces.
    fn successors(&self) -> Vec<(Self::Move, Self)> {
        self.moves()
            .into_iter()
            .map(|mv| (mv, self.apply(&mv)))
            .collect()
    }
}

impl Expand for State {
    type Move = Move;

    fn moves(&self) -> Vec<Move> {
        get_moves(self)
    }

    fn apply(&self, mv: &Move) -> Self {
        compute_move(self, mv)
    }

    fn cost(mv: &Move) -> u32 {
        mv.cost.value()
    }
}
