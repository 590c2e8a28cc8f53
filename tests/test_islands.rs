/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::Result;
use dsi_progress_logger::prelude::*;
use graph_visits::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Counts islands with a union-find over the 8-connected land cells.
fn naive_count(matrix: &[Vec<u8>]) -> usize {
    let num_rows = matrix.len();
    let num_cols = matrix.first().map_or(0, Vec::len);
    let mut parent = (0..num_rows * num_cols).collect::<Vec<_>>();

    fn find(parent: &mut [usize], mut x: usize) -> usize {
        while parent[x] != x {
            parent[x] = parent[parent[x]];
            x = parent[x];
        }
        x
    }

    for r in 0..num_rows {
        for c in 0..num_cols {
            if matrix[r][c] != 1 {
                continue;
            }
            for (dr, dc) in [(0, 1), (1, -1), (1, 0), (1, 1)] {
                let (nr, nc) = (r as isize + dr, c as isize + dc);
                if nr < 0 || nc < 0 || nr as usize >= num_rows || nc as usize >= num_cols {
                    continue;
                }
                if matrix[nr as usize][nc as usize] == 1 {
                    let a = find(&mut parent, r * num_cols + c);
                    let b = find(&mut parent, nr as usize * num_cols + nc as usize);
                    parent[a] = b;
                }
            }
        }
    }

    (0..num_rows * num_cols)
        .filter(|&node| matrix[node / num_cols][node % num_cols] == 1 && parent[node] == node)
        .count()
}

#[test]
fn test_small_grids() {
    let matrix: [[u8; 5]; 5] = [
        [1, 1, 0, 0, 0],
        [0, 1, 0, 0, 0],
        [1, 0, 0, 1, 1],
        [0, 0, 0, 0, 0],
        [1, 0, 1, 0, 1],
    ];
    assert_eq!(count_islands(&matrix), 5);

    let matrix: [[u8; 9]; 2] = [[0, 0, 1, 0, 1, 0, 1, 1, 1], [0, 1, 0, 0, 1, 1, 1, 0, 1]];
    assert_eq!(count_islands(&matrix), 2);

    // The bottom corners both touch the center cell
    let matrix: [[u8; 3]; 3] = [[1, 1, 0], [0, 1, 0], [1, 0, 1]];
    assert_eq!(count_islands(&matrix), 1);
}

#[test]
fn test_ragged_rows() {
    let matrix = vec![vec![1u8], vec![0, 0, 1], vec![1, 1]];
    let grid = Grid::new(&matrix);
    assert_eq!(grid.num_cols(), 3);
    assert!(!grid.is_land(0, 2));
    // (0, 0) and (1, 2) are not adjacent; (1, 2) touches (2, 1)
    assert_eq!(count_islands(&matrix), 2);
}

#[test]
fn test_other_values_are_water() {
    let matrix: [[u8; 3]; 1] = [[1, 2, 1]];
    assert_eq!(count_islands(&matrix), 2);
}

#[test]
fn test_random_grids() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..50 {
        let num_rows = rng.random_range(1..20);
        let num_cols = rng.random_range(1..20);
        let density = rng.random_range(0.1..0.6);
        let matrix = (0..num_rows)
            .map(|_| {
                (0..num_cols)
                    .map(|_| rng.random_bool(density) as u8)
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let islands = islands(&Grid::new(&matrix), no_logging![]);
        assert_eq!(islands.num_islands(), naive_count(&matrix));

        let sizes = islands.compute_sizes();
        let num_land = matrix.iter().flatten().filter(|&&cell| cell == 1).count();
        assert_eq!(sizes.iter().sum::<usize>(), num_land);
        assert!(sizes.iter().all(|&size| size > 0));
    }
    Ok(())
}

#[test]
fn test_island_numbering() {
    let matrix: [[u8; 4]; 3] = [[0, 0, 0, 1], [1, 0, 0, 0], [1, 0, 1, 0]];
    let islands = islands(&Grid::new(&matrix), no_logging![]);
    assert_eq!(islands.num_islands(), 3);
    // Numbered in row-major order of their first cell
    assert_eq!(islands.island_of(0, 3), Some(0));
    assert_eq!(islands.island_of(1, 0), Some(1));
    assert_eq!(islands.island_of(2, 0), Some(1));
    assert_eq!(islands.island_of(2, 2), Some(2));
    assert_eq!(&*islands.compute_sizes(), &[1, 2, 1]);
}
