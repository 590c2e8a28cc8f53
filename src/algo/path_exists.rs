/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::reachability::is_reachable;
use crate::graphs::SparseGraph;
use dsi_progress_logger::no_logging;

/// Returns whether, in a directed graph with nodes labelled from 1 to
/// `num_nodes`, there is a path from node 1 to node `num_nodes`.
///
/// Arcs whose endpoints are not valid labels are ignored. A graph with a
/// single node has a (trivial) path; a graph with no nodes has none.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::path_exists;
///
/// assert!(path_exists(5, &[(1, 2), (2, 3), (3, 4), (4, 5)]));
/// assert!(!path_exists(5, &[(1, 2), (4, 1), (2, 4), (3, 4), (5, 2), (1, 3)]));
/// ```
pub fn path_exists(num_nodes: usize, arcs: &[(usize, usize)]) -> bool {
    if num_nodes == 0 {
        return false;
    }
    // Label 0 is unused
    let graph = SparseGraph::from_arcs(
        num_nodes + 1,
        arcs.iter().copied().filter(|&(src, dst)| src != 0 && dst != 0),
    );
    is_reachable(&graph, 1, num_nodes, no_logging![])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_arc() {
        assert!(path_exists(2, &[(1, 2)]));
        assert!(!path_exists(2, &[(2, 1)]));
    }

    #[test]
    fn test_degenerate() {
        assert!(path_exists(1, &[]));
        assert!(!path_exists(0, &[]));
        assert!(!path_exists(3, &[]));
    }

    #[test]
    fn test_invalid_labels_are_ignored() {
        assert!(!path_exists(3, &[(1, 0), (0, 3)]));
        assert!(!path_exists(3, &[(1, 4), (4, 3)]));
        assert!(path_exists(3, &[(1, 4), (1, 2), (2, 3)]));
    }

    #[test]
    fn test_cycles() {
        assert!(path_exists(4, &[(1, 2), (2, 1), (2, 3), (3, 2), (3, 4)]));
        assert!(!path_exists(4, &[(1, 2), (2, 3), (3, 1), (4, 1)]));
    }
}
