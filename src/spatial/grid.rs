//! Row-major tile storage with point lookup and directional scans
//!
//! Rows of the source layout may be ragged; storage rectangularizes them
//! by padding short rows with void. Reads outside the stored rectangle
//! return the same absent sentinel as void cells, so callers never
//! distinguish the two.

use crate::algebra::vector::Vec2;
use ndarray::Array2;

/// A traversable cell
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    /// Open floor a walker may occupy
    Open,
    /// A wall that rejects movement
    Wall,
}

/// Rectangularized row-major tile storage
///
/// Cells are `Option<Tile>` with `None` marking void, both inside the
/// layout (gaps around the net) and as row padding.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    cells: Array2<Option<Tile>>,
}

impl Grid {
    /// Build a grid from tile rows, padding ragged rows with void
    pub fn from_rows(rows: &[Vec<Option<Tile>>]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let cells = Array2::from_shape_fn((height, width), |(row, column)| {
            rows.get(row)
                .and_then(|cells| cells.get(column))
                .copied()
                .flatten()
        });
        Self { cells }
    }

    /// Number of columns
    pub fn width(&self) -> i32 {
        self.cells.ncols() as i32
    }

    /// Number of rows
    pub fn height(&self) -> i32 {
        self.cells.nrows() as i32
    }

    /// Whether a position lies inside the stored rectangle
    pub fn contains(&self, position: Vec2) -> bool {
        position.x >= 0
            && position.x < self.width()
            && position.y >= 0
            && position.y < self.height()
    }

    /// Tile at a position, or `None` for void and out-of-bounds reads
    pub fn tile(&self, position: Vec2) -> Option<Tile> {
        if position.x < 0 || position.y < 0 {
            return None;
        }
        self.cells
            .get((position.y as usize, position.x as usize))
            .copied()
            .flatten()
    }

    /// First open tile in row-major scan order
    ///
    /// The conventional start cell: for a layout whose top row contains
    /// open floor this is the leftmost open tile of that row.
    pub fn first_open(&self) -> Option<Vec2> {
        self.cells
            .indexed_iter()
            .find(|(_, tile)| **tile == Some(Tile::Open))
            .map(|((row, column), _)| Vec2::new(column as i32, row as i32))
    }

    /// Leftmost occupied cell of a row, skipping void
    pub fn first_occupied_in_row(&self, row: i32) -> Option<Vec2> {
        (0..self.width())
            .map(|column| Vec2::new(column, row))
            .find(|&cell| self.tile(cell).is_some())
    }

    /// Rightmost occupied cell of a row, skipping void
    pub fn last_occupied_in_row(&self, row: i32) -> Option<Vec2> {
        (0..self.width())
            .rev()
            .map(|column| Vec2::new(column, row))
            .find(|&cell| self.tile(cell).is_some())
    }

    /// Topmost occupied cell of a column, skipping void
    pub fn first_occupied_in_column(&self, column: i32) -> Option<Vec2> {
        (0..self.height())
            .map(|row| Vec2::new(column, row))
            .find(|&cell| self.tile(cell).is_some())
    }

    /// Bottommost occupied cell of a column, skipping void
    pub fn last_occupied_in_column(&self, column: i32) -> Option<Vec2> {
        (0..self.height())
            .rev()
            .map(|row| Vec2::new(column, row))
            .find(|&cell| self.tile(cell).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ragged() -> Grid {
        // . #
        //   . .
        Grid::from_rows(&[
            vec![Some(Tile::Open), Some(Tile::Wall)],
            vec![None, Some(Tile::Open), Some(Tile::Open)],
        ])
    }

    #[test]
    fn test_ragged_rows_pad_with_void() {
        let grid = ragged();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.tile(Vec2::new(2, 0)), None);
        assert_eq!(grid.tile(Vec2::new(2, 1)), Some(Tile::Open));
    }

    #[test]
    fn test_out_of_bounds_reads_are_absent() {
        let grid = ragged();
        assert_eq!(grid.tile(Vec2::new(-1, 0)), None);
        assert_eq!(grid.tile(Vec2::new(0, 5)), None);
        assert!(!grid.contains(Vec2::new(3, 0)));
        assert!(grid.contains(Vec2::new(2, 0)));
    }

    #[test]
    fn test_scans_skip_void() {
        let grid = ragged();
        assert_eq!(grid.first_occupied_in_row(1), Some(Vec2::new(1, 1)));
        assert_eq!(grid.last_occupied_in_row(0), Some(Vec2::new(1, 0)));
        assert_eq!(grid.first_occupied_in_column(1), Some(Vec2::new(1, 0)));
        assert_eq!(grid.last_occupied_in_column(0), Some(Vec2::new(0, 0)));
    }
}
