/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{breadth_first, Sequential};
use crate::graphs::{Grid, RandomAccessGraph};
use dsi_progress_logger::{no_logging, ProgressLog};
use std::convert::Infallible;

/// The islands of a [`Grid`], that is, its connected components of land
/// cells under 8-connectivity.
///
/// Islands are numbered from zero in the order in which a row-major scan of
/// the grid meets their first cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Islands {
    num_islands: usize,
    num_rows: usize,
    num_cols: usize,
    island: Box<[Option<usize>]>,
}

impl Islands {
    /// Returns the number of islands.
    pub fn num_islands(&self) -> usize {
        self.num_islands
    }

    /// Returns the island of each cell, in row-major order, or `None` for
    /// water cells.
    pub fn island(&self) -> &[Option<usize>] {
        &self.island
    }

    /// Returns the island of the cell in the given row and column, or `None`
    /// if the cell is water or outside the grid.
    pub fn island_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.num_rows || col >= self.num_cols {
            return None;
        }
        self.island[row * self.num_cols + col]
    }

    /// Returns the number of cells of each island.
    pub fn compute_sizes(&self) -> Box<[usize]> {
        let mut sizes = vec![0; self.num_islands];
        for &island in self.island.iter().flatten() {
            sizes[island] += 1;
        }
        sizes.into_boxed_slice()
    }
}

/// Computes the islands of a grid.
///
/// A breadth-first visit is started from every land cell not yet visited; each
/// such visit floods exactly one island. Water cells are never visited.
pub fn islands(grid: &Grid, pl: &mut impl ProgressLog) -> Islands {
    let num_cells = grid.num_nodes();
    pl.item_name("cell");
    pl.expected_updates(Some(grid.num_land_cells()));
    pl.start("Computing islands...");

    let mut visit = breadth_first::Seq::new(grid);
    let mut island = vec![None; num_cells].into_boxed_slice();
    let mut num_islands = 0;

    visit
        .visit_all_filtered(
            |event| {
                match event {
                    breadth_first::EventPred::Unknown { curr, .. } => {
                        island[curr] = Some(num_islands);
                    }
                    breadth_first::EventPred::Done { .. } => {
                        num_islands += 1;
                    }
                    _ => (),
                }
                Ok::<_, Infallible>(())
            },
            // Only matters for roots, as water is never a successor
            |args: breadth_first::FilterArgsPred| grid.is_land_node(args.curr),
            pl,
        )
        .unwrap_or_else(|never| match never {});

    pl.done();

    Islands {
        num_islands,
        num_rows: grid.num_rows(),
        num_cols: grid.num_cols(),
        island,
    }
}

/// Returns the number of islands of a 0/1 matrix, where two land cells
/// (cells equal to 1) belong to the same island if they share an edge or a
/// corner.
///
/// See [`Grid::new`] for the handling of ragged matrices.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::count_islands;
///
/// let matrix: [[u8; 5]; 5] = [
///     [1, 1, 0, 0, 0],
///     [0, 1, 0, 0, 0],
///     [1, 0, 0, 1, 1],
///     [0, 0, 0, 0, 0],
///     [1, 0, 1, 0, 1],
/// ];
/// assert_eq!(count_islands(&matrix), 5);
/// ```
pub fn count_islands<R: AsRef<[u8]>>(matrix: &[R]) -> usize {
    islands(&Grid::new(matrix), no_logging![]).num_islands()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_diagonal_merge() {
        let matrix: [[u8; 3]; 3] = [[1, 1, 0], [0, 1, 0], [1, 0, 1]];
        // (2, 0) touches (1, 1) at a corner, and so does (2, 2)
        assert_eq!(count_islands(&matrix), 1);

        let matrix: [[u8; 4]; 3] = [[1, 1, 0, 0], [0, 1, 0, 0], [1, 0, 0, 1]];
        assert_eq!(count_islands(&matrix), 2);
    }

    #[test]
    fn test_labels() {
        let grid = Grid::new(&[[0u8, 0, 1, 0, 1, 0, 1, 1, 1], [0, 1, 0, 0, 1, 1, 1, 0, 1]]);
        let islands = islands(&grid, no_logging![]);
        assert_eq!(islands.num_islands(), 2);
        assert_eq!(islands.island_of(0, 2), Some(0));
        assert_eq!(islands.island_of(1, 1), Some(0));
        assert_eq!(islands.island_of(0, 4), Some(1));
        assert_eq!(islands.island_of(1, 8), Some(1));
        assert_eq!(islands.island_of(0, 0), None);
        assert_eq!(islands.island_of(2, 0), None);
        assert_eq!(islands.island_of(0, 9), None);
        assert_eq!(&*islands.compute_sizes(), &[2, 8]);
    }

    #[test]
    fn test_island_of_far_rows() {
        let islands = islands(&Grid::new(&[[1u8, 0], [0, 1]]), no_logging![]);
        assert_eq!(islands.island_of(1, 1), Some(0));
        assert_eq!(islands.island_of(2, 0), None);
        assert_eq!(islands.island_of(usize::MAX / 2 + 1, 0), None);
        assert_eq!(islands.island_of(0, usize::MAX), None);
    }

    #[test]
    fn test_no_land() {
        assert_eq!(count_islands::<[u8; 0]>(&[]), 0);
        assert_eq!(count_islands(&[[0u8; 4]; 4]), 0);
        assert_eq!(count_islands(&[[1u8; 4]; 4]), 1);
    }

    #[test]
    fn test_checkerboard() {
        // Every land cell touches another one at a corner
        let matrix: [[u8; 4]; 4] = [[1, 0, 1, 0], [0, 1, 0, 1], [1, 0, 1, 0], [0, 1, 0, 1]];
        assert_eq!(count_islands(&matrix), 1);
        // Separated by a full column of water
        let matrix: [[u8; 3]; 2] = [[1, 0, 1], [1, 0, 1]];
        assert_eq!(count_islands(&matrix), 2);
    }
}
