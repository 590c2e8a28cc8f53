/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::RandomAccessGraph;
use std::collections::HashMap;
use std::iter::Copied;
use std::slice;

/// An immutable graph storing successor lists only for nodes that have at
/// least one successor.
///
/// This representation is convenient for graphs built once from an arc list
/// and queried a few times, where most nodes might have no successors.
/// Successors are returned in the order in which the arcs were provided.
/// Arcs whose endpoints are out of range are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGraph {
    num_nodes: usize,
    num_arcs: usize,
    successors: HashMap<usize, Box<[usize]>>,
}

impl SparseGraph {
    /// Builds a graph with `num_nodes` nodes from a list of arcs.
    pub fn from_arcs(num_nodes: usize, arcs: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut lists = HashMap::<usize, Vec<usize>>::new();
        let mut num_arcs = 0;
        for (src, dst) in arcs {
            if src >= num_nodes || dst >= num_nodes {
                log::debug!(
                    "Ignoring arc ({}, {}) in a graph with {} nodes",
                    src,
                    dst,
                    num_nodes
                );
                continue;
            }
            lists.entry(src).or_default().push(dst);
            num_arcs += 1;
        }

        Self {
            num_nodes,
            num_arcs,
            successors: lists
                .into_iter()
                .map(|(node, succ)| (node, succ.into_boxed_slice()))
                .collect(),
        }
    }

    /// Builds a forest from a parent array.
    ///
    /// Nodes are labelled from 1 to `parents.len()`, so the resulting graph
    /// has `parents.len() + 1` nodes, node 0 being unused. For each
    /// `i` in `[1..parents.len())` there is an arc from `parents[i]` to
    /// `i + 1`; `parents[0]` is ignored, as are entries pointing to
    /// themselves.
    ///
    /// # Examples
    ///
    /// ```
    /// use graph_visits::graphs::{RandomAccessGraph, SparseGraph};
    ///
    /// // 1 → 2 → 3
    /// let graph = SparseGraph::from_parents(&[1, 1, 2]);
    /// assert_eq!(graph.num_nodes(), 4);
    /// assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![2]);
    /// assert_eq!(graph.successors(2).collect::<Vec<_>>(), vec![3]);
    /// assert_eq!(graph.successors(3).count(), 0);
    /// ```
    pub fn from_parents(parents: &[usize]) -> Self {
        Self::from_arcs(
            parents.len() + 1,
            parents
                .iter()
                .enumerate()
                .skip(1)
                .map(|(i, &parent)| (parent, i + 1))
                .filter(|&(parent, child)| parent != child),
        )
    }

    /// Returns the number of nodes having at least one successor.
    pub fn num_sources(&self) -> usize {
        self.successors.len()
    }
}

impl RandomAccessGraph for SparseGraph {
    type Successors<'succ> = Copied<slice::Iter<'succ, usize>>;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    fn successors(&self, node: usize) -> Self::Successors<'_> {
        self.successors
            .get(&node)
            .map_or(&[][..], |succ| &succ[..])
            .iter()
            .copied()
    }

    fn outdegree(&self, node: usize) -> usize {
        self.successors.get(&node).map_or(0, |succ| succ.len())
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        self.num_arcs
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_arcs() {
        let graph = SparseGraph::from_arcs(6, [(1, 2), (4, 1), (2, 4), (1, 3), (9, 1), (1, 6)]);
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.num_arcs(), 4);
        assert_eq!(graph.num_sources(), 3);
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(graph.successors(0).count(), 0);
        assert_eq!(graph.outdegree(5), 0);
    }

    #[test]
    fn test_from_parents() {
        // 1 → 2, 1 → 3, 2 → 4, 3 → 5
        let graph = SparseGraph::from_parents(&[1, 1, 1, 2, 3]);
        assert_eq!(graph.num_nodes(), 6);
        assert_eq!(graph.num_arcs(), 4);
        assert_eq!(graph.successors(1).collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(graph.successors(2).collect::<Vec<_>>(), vec![4]);
        assert_eq!(graph.successors(3).collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn test_from_parents_skips_self_references() {
        let graph = SparseGraph::from_parents(&[1, 2, 3]);
        assert_eq!(graph.num_arcs(), 0);

        assert_eq!(SparseGraph::from_parents(&[]).num_nodes(), 1);
    }
}
