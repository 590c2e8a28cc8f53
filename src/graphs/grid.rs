/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::RandomAccessGraph;
use sux::bits::BitVec;

/// The value of land cells; any other value is water.
pub const LAND: u8 = 1;

/// Offsets of the eight neighbors of a cell: up, down, left, right,
/// down-right, up-left, up-right and down-left. Successors are enumerated in
/// this order.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (1, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
];

/// A 0/1 matrix seen as an implicit graph whose arcs connect each land cell
/// with the land cells sharing an edge or a corner with it.
///
/// The cell in row `r` and column `c` is node `r * num_cols + c`. Water cells
/// are nodes too, but they have no successors and are never successors of
/// other nodes. Diagonal moves are allowed even if both cells at the corners
/// they cut are water.
///
/// # Examples
///
/// ```
/// use graph_visits::graphs::{Grid, RandomAccessGraph};
///
/// let grid = Grid::new(&[[1u8, 1, 0], [0, 1, 0], [1, 0, 1]]);
/// // The center cell reaches all land cells but itself.
/// let mut succ = grid.successors(grid.node(1, 1)).collect::<Vec<_>>();
/// succ.sort();
/// assert_eq!(succ, vec![0, 1, 6, 8]);
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    num_rows: usize,
    num_cols: usize,
    land: BitVec,
}

impl Grid {
    /// Creates a grid from a sequence of rows.
    ///
    /// Cells equal to [`LAND`] are land; all other cells are water. Rows
    /// shorter than the longest one are padded with water.
    pub fn new<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let num_rows = rows.len();
        let num_cols = rows
            .iter()
            .map(|row| row.as_ref().len())
            .max()
            .unwrap_or(0);
        let mut land = BitVec::new(num_rows * num_cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.as_ref().iter().enumerate() {
                if cell == LAND {
                    land.set(r * num_cols + c, true);
                }
            }
        }

        Self {
            num_rows,
            num_cols,
            land,
        }
    }

    /// Returns the number of rows.
    #[inline(always)]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[inline(always)]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// Returns the node of the cell in the given row and column.
    ///
    /// # Panics
    ///
    /// If the cell is outside the grid.
    #[inline(always)]
    pub fn node(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.num_rows && col < self.num_cols,
            "cell ({}, {}) is outside a {}x{} grid",
            row,
            col,
            self.num_rows,
            self.num_cols
        );
        row * self.num_cols + col
    }

    /// Returns the row and the column of the cell of a node.
    #[inline(always)]
    pub fn cell(&self, node: usize) -> (usize, usize) {
        (node / self.num_cols, node % self.num_cols)
    }

    /// Returns whether the cell in the given row and column is land;
    /// cells outside the grid are water.
    #[inline(always)]
    pub fn is_land(&self, row: usize, col: usize) -> bool {
        row < self.num_rows && col < self.num_cols && self.land[row * self.num_cols + col]
    }

    /// Returns whether the cell of a node is land.
    #[inline(always)]
    pub fn is_land_node(&self, node: usize) -> bool {
        self.land[node]
    }

    /// Returns the number of land cells.
    pub fn num_land_cells(&self) -> usize {
        (0..self.land.len()).filter(|&node| self.land[node]).count()
    }
}

impl RandomAccessGraph for Grid {
    type Successors<'succ> = LandNeighbors<'succ>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.num_rows * self.num_cols
    }

    fn successors(&self, node: usize) -> LandNeighbors<'_> {
        let (row, col) = self.cell(node);
        LandNeighbors {
            grid: self,
            row,
            col,
            // Water has no successors
            next_dir: if self.land[node] { 0 } else { DIRECTIONS.len() },
        }
    }
}

/// The iterator on the land neighbors of a land cell returned by
/// [`Grid::successors`].
#[derive(Debug, Clone)]
pub struct LandNeighbors<'a> {
    grid: &'a Grid,
    row: usize,
    col: usize,
    next_dir: usize,
}

impl Iterator for LandNeighbors<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while let Some(&(d_row, d_col)) = DIRECTIONS.get(self.next_dir) {
            self.next_dir += 1;
            // Each direction is checked independently against both bounds;
            // is_land takes care of the upper ones.
            let (Some(row), Some(col)) = (
                self.row.checked_add_signed(d_row),
                self.col.checked_add_signed(d_col),
            ) else {
                continue;
            };
            if self.grid.is_land(row, col) {
                return Some(self.grid.node(row, col));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(DIRECTIONS.len() - self.next_dir))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn successors(grid: &Grid, row: usize, col: usize) -> Vec<(usize, usize)> {
        grid.successors(grid.node(row, col))
            .map(|node| grid.cell(node))
            .collect()
    }

    #[test]
    fn test_all_land() {
        let grid = Grid::new(&[[1u8; 3]; 3]);
        assert_eq!(grid.num_nodes(), 9);
        assert_eq!(grid.num_land_cells(), 9);
        assert_eq!(
            successors(&grid, 1, 1),
            vec![
                (0, 1),
                (2, 1),
                (1, 0),
                (1, 2),
                (2, 2),
                (0, 0),
                (0, 2),
                (2, 0)
            ]
        );
        // Corners only see three neighbors
        assert_eq!(successors(&grid, 0, 0), vec![(1, 0), (0, 1), (1, 1)]);
        assert_eq!(successors(&grid, 2, 2), vec![(1, 2), (2, 1), (1, 1)]);
        assert_eq!(successors(&grid, 0, 2), vec![(1, 2), (0, 1), (1, 1)]);
        assert_eq!(successors(&grid, 2, 0), vec![(1, 0), (2, 1), (1, 1)]);
        assert_eq!(grid.num_arcs(), 4 * 3 + 4 * 5 + 8);
    }

    #[test]
    fn test_water_has_no_successors() {
        let grid = Grid::new(&[[1u8, 0], [0, 1]]);
        assert_eq!(successors(&grid, 0, 1), Vec::<(usize, usize)>::new());
        assert_eq!(successors(&grid, 0, 0), vec![(1, 1)]);
        assert_eq!(successors(&grid, 1, 1), vec![(0, 0)]);
    }

    #[test]
    fn test_ragged_rows() {
        let grid = Grid::new(&[vec![1u8], vec![1, 2, 1], vec![]]);
        assert_eq!(grid.num_rows(), 3);
        assert_eq!(grid.num_cols(), 3);
        assert!(grid.is_land(0, 0));
        assert!(!grid.is_land(0, 1));
        assert!(!grid.is_land(1, 1));
        assert!(grid.is_land(1, 2));
        assert!(!grid.is_land(2, 0));
        assert!(!grid.is_land(5, 5));
    }

    #[test]
    fn test_node() {
        let grid = Grid::new(&[[1u8, 0, 1], [0, 1, 0]]);
        assert_eq!(grid.node(1, 2), 5);
        assert_eq!(grid.cell(5), (1, 2));
    }

    #[test]
    #[should_panic]
    fn test_node_outside_grid() {
        let grid = Grid::new(&[[1u8, 0, 1], [0, 1, 0]]);
        // Column 3 is past the last column
        grid.node(0, 3);
    }

    #[test]
    fn test_empty() {
        let grid = Grid::new::<Vec<u8>>(&[]);
        assert_eq!(grid.num_nodes(), 0);
        let grid = Grid::new(&[Vec::<u8>::new()]);
        assert_eq!(grid.num_rows(), 1);
        assert_eq!(grid.num_nodes(), 0);
    }
}
