/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{breadth_first, depth_first, Sequential};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::no_logging;
use std::convert::Infallible;
use sux::bits::BitVec;

/// Returns the nodes reachable from `root` in breadth-first order.
///
/// Successors at the same distance from `root` appear in the order in which
/// their predecessors appear, and then in the order of the successor lists.
/// If `root` is not a node of the graph the result is empty.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::bfs_order;
/// use graph_visits::graphs::DirectedGraph;
///
/// let graph = DirectedGraph::from_arcs(
///     6,
///     [(0, 1), (0, 4), (4, 3), (1, 2), (1, 5), (3, 2)],
/// );
/// assert_eq!(bfs_order(&graph, 0), vec![0, 1, 4, 2, 5, 3]);
/// assert_eq!(bfs_order(&graph, 4), vec![4, 3, 2]);
/// ```
pub fn bfs_order(graph: impl RandomAccessGraph, root: usize) -> Vec<usize> {
    if root >= graph.num_nodes() {
        return vec![];
    }
    let mut visit = breadth_first::Seq::new(&graph);
    let mut order = Vec::new();
    visit
        .visit(
            root,
            |event| {
                if let breadth_first::EventPred::Unknown { curr, .. } = event {
                    order.push(curr);
                }
                Ok::<_, Infallible>(())
            },
            no_logging![],
        )
        .unwrap_or_else(|never| match never {});
    order
}

/// Returns the nodes reachable from `root` that are not set in `visited`, in
/// depth-first preorder, and sets them in `visited`.
///
/// The visit is iterative, so it can be used on graphs with arbitrarily long
/// paths. Passing the same `visited` set to calls with different roots visits
/// a forest without visiting any node twice. If `root` is not a node of the
/// graph the result is empty.
///
/// # Panics
///
/// If the length of `visited` is not the number of nodes of the graph.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::dfs_order;
/// use graph_visits::graphs::DirectedGraph;
/// use sux::bits::BitVec;
///
/// let graph = DirectedGraph::from_arcs(
///     6,
///     [(0, 1), (0, 4), (4, 3), (1, 2), (1, 5), (3, 2)],
/// );
/// let mut visited = BitVec::new(6);
/// assert_eq!(dfs_order(&graph, 4, &mut visited), vec![4, 3, 2]);
/// assert_eq!(dfs_order(&graph, 0, &mut visited), vec![0, 1, 5]);
/// ```
pub fn dfs_order(graph: impl RandomAccessGraph, root: usize, visited: &mut BitVec) -> Vec<usize> {
    if root >= graph.num_nodes() {
        return vec![];
    }
    let known = std::mem::replace(visited, BitVec::new(0));
    let mut visit = depth_first::SeqNoPred::with_visited(&graph, known);
    let mut order = Vec::new();
    visit
        .visit(
            root,
            |event| {
                if let depth_first::EventNoPred::Previsit { curr, .. } = event {
                    order.push(curr);
                }
                Ok::<_, Infallible>(())
            },
            no_logging![],
        )
        .unwrap_or_else(|never| match never {});
    *visited = visit.into_visited();
    order
}

/// Same as [`dfs_order`], but using a [recursive
/// visit](depth_first::rec::visit).
///
/// The depth of the recursion is the length of the longest visit path, so
/// this function should be used only on graphs without long paths.
pub fn dfs_order_recursive(
    graph: impl RandomAccessGraph,
    root: usize,
    visited: &mut BitVec,
) -> Vec<usize> {
    if root >= graph.num_nodes() {
        return vec![];
    }
    let mut order = Vec::new();
    depth_first::rec::visit(&graph, root, visited, &mut |node| order.push(node));
    order
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graphs::DirectedGraph;

    #[test]
    fn test_single_node() {
        let graph = DirectedGraph::new(1);
        assert_eq!(bfs_order(&graph, 0), vec![0]);
        assert_eq!(dfs_order(&graph, 0, &mut BitVec::new(1)), vec![0]);
    }

    #[test]
    fn test_no_nodes() {
        let graph = DirectedGraph::new(0);
        assert!(bfs_order(&graph, 0).is_empty());
        assert!(dfs_order(&graph, 0, &mut BitVec::new(0)).is_empty());
        assert!(dfs_order_recursive(&graph, 0, &mut BitVec::new(0)).is_empty());
    }
}
