//! Flat grid addressing, toroidal wrap arithmetic, and text formatting.
//!
//! A grid is stored as a flat row-major array: the cell at `(x, y)` lives at
//! index `y * width + x`. The origin is the top-left cell, x grows to the
//! right and y grows downward.

use crate::state::{Direction, TilePos};

/// Converts an `(x, y)` coordinate to a linear cell index.
#[inline(always)]
pub const fn coord_to_idx(width: usize, pos: TilePos) -> usize {
    pos.1 * width + pos.0
}

/// Converts a linear cell index to an `(x, y)` coordinate.
#[inline(always)]
pub const fn idx_to_coord(width: usize, cell_index: usize) -> TilePos {
    (cell_index % width, cell_index / width)
}

/// Offsets `value` by `delta` on an axis of `size` cells, re-entering from the
/// opposite edge when it falls off either end.
#[inline(always)]
pub fn wrap(value: usize, delta: i8, size: usize) -> usize {
    (value as isize + delta as isize).rem_euclid(size as isize) as usize
}

/// Offsets a coordinate by a direction vector on a `(width, height)` torus.
#[inline]
pub fn wrap_pos(pos: TilePos, direction: Direction, dimensions: (usize, usize)) -> TilePos {
    (
        wrap(pos.0, direction.0, dimensions.0),
        wrap(pos.1, direction.1, dimensions.1),
    )
}

/// Formats cells as one whitespace-separated line in row-major order.
pub fn format_single_line(cells: &[u32]) -> String {
    cells
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats cells as a right-aligned block, one grid row per line.
///
/// Every column is padded to the widest value so rows line up.
pub fn format_grid(cells: &[u32], width: usize) -> String {
    let cell_width = cells
        .iter()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1);

    let mut output = String::new();
    for row in cells.chunks(width) {
        let line = row
            .iter()
            .map(|value| format!("{value:>cell_width$}"))
            .collect::<Vec<_>>()
            .join(" ");
        output.push_str(&line);
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_conversion_roundtrip_4x3() {
        for idx in 0..12 {
            let (x, y) = idx_to_coord(4, idx);
            assert!(x < 4 && y < 3, "idx_to_coord(4, {idx}) produced out-of-range ({x},{y})");
            assert_eq!(coord_to_idx(4, (x, y)), idx, "Roundtrip failed for index {idx}");
        }
    }

    #[test]
    fn test_coord_to_idx_is_row_major() {
        assert_eq!(coord_to_idx(3, (0, 0)), 0);
        assert_eq!(coord_to_idx(3, (2, 0)), 2);
        assert_eq!(coord_to_idx(3, (0, 1)), 3);
        assert_eq!(coord_to_idx(3, (2, 2)), 8);
    }

    #[test]
    fn test_wrap_reenters_from_opposite_edge() {
        assert_eq!(wrap(0, -1, 4), 3);
        assert_eq!(wrap(3, 1, 4), 0);
        assert_eq!(wrap(1, 1, 4), 2);
        assert_eq!(wrap(1, 0, 4), 1);
        // on a 2-cell axis both neighbors are the same cell
        assert_eq!(wrap(0, -1, 2), wrap(0, 1, 2));
    }

    #[test]
    fn test_wrap_pos_applies_both_axes() {
        assert_eq!(wrap_pos((0, 0), (-1, -1), (4, 3)), (3, 2));
        assert_eq!(wrap_pos((3, 2), (1, 1), (4, 3)), (0, 0));
        assert_eq!(wrap_pos((1, 1), (1, -1), (4, 3)), (2, 0));
    }

    #[test]
    fn test_format_single_line() {
        assert_eq!(format_single_line(&[1, 2, 3, 0]), "1 2 3 0");
    }

    #[test]
    fn test_format_grid_pads_columns() {
        let cells = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 0];
        let expected = " 1  2  3  4\n 5  6  7  8\n 9 10 11 12\n13 14 15  0\n";
        assert_eq!(format_grid(&cells, 4), expected);
    }
}
