//! Solved configurations for a given grid size.
//!
//! Tiles `1..N` followed by the empty tile form the solved sequence. A grid
//! counts as solved when that sequence is laid out either row by row or
//! column by column, since instances defined with width and height swapped
//! read the same sequence along the other axis.

use crate::error::PuzzleError;
use crate::grid::coord_to_idx;
use crate::state::{check_dimensions, State, EMPTY_TILE};

/// Value of the `index`-th tile in the solved sequence of `count` cells.
#[inline]
fn solved_value(index: usize, count: usize) -> u32 {
    if index + 1 == count {
        EMPTY_TILE
    } else {
        (index + 1) as u32
    }
}

/// Builds the row-major and column-major goal states for `state`'s size.
///
/// Only the dimensions of `state` are used. In both goals the empty tile
/// ends up in the bottom-right corner.
pub fn find_goals(state: &State) -> (State, State) {
    build_goals(state.dimensions())
}

/// Builds both goal states for a grid size given without a state.
pub fn goals_for_dimensions(dimensions: (usize, usize)) -> Result<(State, State), PuzzleError> {
    check_dimensions(dimensions.0, dimensions.1)?;
    Ok(build_goals(dimensions))
}

fn build_goals((width, height): (usize, usize)) -> (State, State) {
    let count = width * height;
    let empty_pos = (width - 1, height - 1);

    let row_major: Box<[u32]> = (0..count).map(|index| solved_value(index, count)).collect();

    let mut column_major = vec![EMPTY_TILE; count].into_boxed_slice();
    for x in 0..width {
        for y in 0..height {
            column_major[coord_to_idx(width, (x, y))] = solved_value(x * height + y, count);
        }
    }

    (
        State::from_parts(width, height, row_major, empty_pos),
        State::from_parts(width, height, column_major, empty_pos),
    )
}

/// Returns whether `state` equals either of its goal states.
pub fn is_goal(state: &State) -> bool {
    let (row_major, column_major) = find_goals(state);
    *state == row_major || *state == column_major
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_3x3_goals() {
        let scrambled = State::from_int_list(&[8, 7, 6, 5, 4, 3, 2, 1, 0], (3, 3)).unwrap();
        let (row_major, column_major) = find_goals(&scrambled);

        assert_eq!(row_major.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(column_major.cells(), &[1, 4, 7, 2, 5, 8, 3, 6, 0]);
    }

    #[test]
    fn test_rectangular_goals() {
        let state = State::from_int_list(&[0, 1, 2, 3, 4, 5], (3, 2)).unwrap();
        let (row_major, column_major) = find_goals(&state);

        assert_eq!(row_major, State::from_rows(&[vec![1, 2, 3], vec![4, 5, 0]]).unwrap());
        assert_eq!(column_major, State::from_rows(&[vec![1, 3, 5], vec![2, 4, 0]]).unwrap());
    }

    #[test]
    fn test_goals_keep_dimensions_and_empty_position() {
        for (width, height) in [(2, 2), (2, 5), (4, 3), (4, 4)] {
            let cells: Vec<u32> = (0..(width * height) as u32).collect();
            let state = State::new(width, height, cells).unwrap();
            let (row_major, column_major) = find_goals(&state);
            for goal in [row_major, column_major] {
                assert_eq!(goal.dimensions(), (width, height));
                assert_eq!(goal.empty_pos(), (width - 1, height - 1));
                assert_eq!(goal.locate(EMPTY_TILE).unwrap(), goal.empty_pos());
            }
        }
    }

    #[test]
    fn test_goals_for_dimensions() {
        let (row_major, _) = goals_for_dimensions((2, 3)).unwrap();
        assert_eq!(row_major.cells(), &[1, 2, 3, 4, 5, 0]);
        assert!(matches!(
            goals_for_dimensions((1, 3)),
            Err(PuzzleError::InvalidDimensions { width: 1, height: 3 })
        ));
        assert!(matches!(
            goals_for_dimensions((usize::MAX, 3)),
            Err(PuzzleError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_is_goal() {
        let row_major = State::from_rows(&[vec![1, 2], vec![3, 0]]).unwrap();
        let column_major = State::from_rows(&[vec![1, 3], vec![2, 0]]).unwrap();
        let scrambled = State::from_rows(&[vec![3, 1], vec![2, 0]]).unwrap();

        assert!(is_goal(&row_major));
        assert!(is_goal(&column_major));
        assert!(!is_goal(&scrambled));
    }
}
