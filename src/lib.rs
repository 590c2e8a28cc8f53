/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod graphs;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
    pub use graphs::RandomAccessGraph;
}

/// Use `use graph_visits::prelude::*;` to import common utilities, modules and
/// all traits.
pub mod prelude {
    use super::*;
    pub use algo::reachability;
    pub use algo::visits::breadth_first;
    pub use algo::visits::depth_first;
    pub use algo::visits::StoppedWhenDone;
    pub use algo::{
        bfs_order, count_islands, dfs_order, dfs_order_recursive, is_reachable_in_tree, islands,
        path_exists, Islands,
    };
    pub use graphs::{AdjacencyList, DirectedGraph, Grid, SparseGraph};
    pub use traits::*;
    pub use utils::Threads;
}
