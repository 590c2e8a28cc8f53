/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{AdjacencyList, GraphError, Iter, RandomAccessGraph};
use crate::utils::closure_vec;
use std::fmt;

/// A directed graph with a fixed number of nodes, each owning an
/// [`AdjacencyList`] of its successors.
///
/// Arcs can only be added. Arcs whose endpoints are not nodes of the graph
/// are silently ignored by [`add_arc`](Self::add_arc), so that callers can
/// feed loosely validated input; [`try_add_arc`](Self::try_add_arc) reports
/// them instead. Duplicate arcs and loops are kept.
///
/// # Examples
///
/// ```
/// use graph_visits::graphs::{DirectedGraph, RandomAccessGraph};
///
/// let mut graph = DirectedGraph::new(3);
/// assert!(graph.add_arc(0, 1));
/// assert!(graph.add_arc(0, 2));
/// assert!(!graph.add_arc(0, 3));
/// assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 2]);
/// assert_eq!(graph.num_arcs(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph {
    lists: Box<[AdjacencyList]>,
    num_arcs: usize,
}

impl DirectedGraph {
    /// Creates a graph with `num_nodes` nodes and no arcs.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            lists: closure_vec(AdjacencyList::new, num_nodes).into_boxed_slice(),
            num_arcs: 0,
        }
    }

    /// Creates a graph with `num_nodes` nodes and no arcs, failing if
    /// `num_nodes` is negative.
    pub fn try_new(num_nodes: i64) -> Result<Self, GraphError> {
        if num_nodes < 0 {
            return Err(GraphError::NegativeNodeCount(num_nodes));
        }
        let num_nodes =
            usize::try_from(num_nodes).map_err(|_| GraphError::TooManyNodes(num_nodes))?;
        Ok(Self::new(num_nodes))
    }

    /// Creates a graph with `num_nodes` nodes and the given arcs, added in
    /// order with [`add_arc`](Self::add_arc).
    pub fn from_arcs(num_nodes: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(num_nodes);
        for (src, dst) in arcs {
            graph.add_arc(src, dst);
        }
        graph
    }

    /// Appends `dst` to the successors of `src`.
    ///
    /// Returns false, leaving the graph unchanged, if either endpoint is out
    /// of range.
    pub fn add_arc(&mut self, src: usize, dst: usize) -> bool {
        match self.try_add_arc(src, dst) {
            Ok(()) => true,
            Err(err) => {
                log::debug!("Ignoring arc ({}, {}): {}", src, dst, err);
                false
            }
        }
    }

    /// Appends `dst` to the successors of `src`, or returns an error if
    /// either endpoint is out of range.
    pub fn try_add_arc(&mut self, src: usize, dst: usize) -> Result<(), GraphError> {
        let num_nodes = self.lists.len();
        for node in [src, dst] {
            if node >= num_nodes {
                return Err(GraphError::NodeOutOfRange { node, num_nodes });
            }
        }
        self.lists[src].insert_at_tail(dst);
        self.num_arcs += 1;
        Ok(())
    }

    /// Returns the adjacency list of a node.
    ///
    /// # Panics
    ///
    /// If `node` is out of range.
    pub fn adjacency(&self, node: usize) -> &AdjacencyList {
        &self.lists[node]
    }

    /// Returns the adjacency lists of all nodes, indexed by node.
    pub fn adjacency_lists(&self) -> &[AdjacencyList] {
        &self.lists
    }

    /// Returns a [`Display`](fmt::Display) adapter writing one line per node
    /// in the form `| 0 | => [1] -> [4] -> null`, or `| 0 | => null` for
    /// nodes without successors.
    pub fn dump(&self) -> Dump<'_> {
        Dump { graph: self }
    }
}

impl RandomAccessGraph for DirectedGraph {
    type Successors<'succ> = Iter<'succ>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.lists.len()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Iter<'_> {
        self.lists[node].iter()
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        self.lists[node].len()
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }
}

/// The adapter returned by [`DirectedGraph::dump`].
pub struct Dump<'a> {
    graph: &'a DirectedGraph,
}

impl fmt::Display for Dump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, list) in self.graph.adjacency_lists().iter().enumerate() {
            write!(f, "| {} | =>", node)?;
            for succ in list {
                write!(f, " [{}] ->", succ)?;
            }
            writeln!(f, " null")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_new() {
        let graph = DirectedGraph::new(4);
        assert_eq!(graph.num_nodes(), 4);
        assert_eq!(graph.num_arcs(), 0);
        assert!(graph.adjacency_lists().iter().all(AdjacencyList::is_empty));

        assert_eq!(DirectedGraph::new(0).num_nodes(), 0);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(DirectedGraph::try_new(3).map(|g| g.num_nodes()), Ok(3));
        assert_eq!(
            DirectedGraph::try_new(-1),
            Err(GraphError::NegativeNodeCount(-1))
        );
    }

    #[test]
    fn test_out_of_range_arcs_are_ignored() {
        let mut graph = DirectedGraph::from_arcs(3, [(0, 1), (1, 2)]);
        let before = graph.clone();

        assert!(!graph.add_arc(3, 0));
        assert!(!graph.add_arc(0, 3));
        assert!(!graph.add_arc(7, 9));
        assert_eq!(graph, before);
        assert_eq!(graph.num_arcs(), 2);

        assert_eq!(
            graph.try_add_arc(1, 5),
            Err(GraphError::NodeOutOfRange {
                node: 5,
                num_nodes: 3
            })
        );
        assert_eq!(graph, before);
    }

    #[test]
    fn test_duplicates_and_loops_are_kept() {
        let graph = DirectedGraph::from_arcs(2, [(0, 1), (0, 1), (1, 1)]);
        assert_eq!(graph.successors(0).collect::<Vec<_>>(), vec![1, 1]);
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![1]);
        assert_eq!(graph.outdegree(0), 2);
        assert_eq!(graph.num_arcs(), 3);
    }

    #[test]
    fn test_dump() {
        let graph = DirectedGraph::from_arcs(3, [(0, 1), (0, 2), (2, 0)]);
        assert_eq!(
            graph.dump().to_string(),
            "| 0 | => [1] -> [2] -> null\n| 1 | => null\n| 2 | => [0] -> null\n"
        );
        assert_eq!(DirectedGraph::new(0).dump().to_string(), "");
    }
}
