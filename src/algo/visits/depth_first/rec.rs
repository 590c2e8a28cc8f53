/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Recursive depth-first visits.
//!
//! The visit recurses once per node on the visit path, so it is suitable
//! only for graphs whose longest visit path fits in the call stack; use the
//! [iterative visits](super::SeqNoPred) otherwise. The two produce the same
//! preorder.

use crate::graphs::RandomAccessGraph;
use sux::bits::BitVec;

/// Visits recursively the nodes reachable from `curr` that are not already
/// set in `visited`, calling `callback` on each of them in preorder.
///
/// The same `visited` set is threaded through the whole recursion and is left
/// containing all visited nodes, so it can be passed to further calls to visit
/// the rest of a forest. If `curr` is already visited, nothing happens.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::visits::depth_first::rec;
/// use graph_visits::graphs::DirectedGraph;
/// use sux::bits::BitVec;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 0), (2, 3)]);
/// let mut visited = BitVec::new(4);
/// let mut preorder = vec![];
/// rec::visit(&graph, 0, &mut visited, &mut |node| preorder.push(node));
/// rec::visit(&graph, 1, &mut visited, &mut |node| preorder.push(node));
/// rec::visit(&graph, 2, &mut visited, &mut |node| preorder.push(node));
/// assert_eq!(preorder, vec![0, 1, 2, 3]);
/// ```
pub fn visit<G: RandomAccessGraph + ?Sized>(
    graph: &G,
    curr: usize,
    visited: &mut BitVec,
    callback: &mut impl FnMut(usize),
) {
    if visited[curr] {
        return;
    }
    visited.set(curr, true);
    callback(curr);
    for succ in graph.successors(curr) {
        if !visited[succ] {
            visit(graph, succ, visited, callback);
        }
    }
}
