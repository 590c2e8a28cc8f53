/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// A graph providing random access to the successors of its nodes.
///
/// Nodes are identified by their index in `[0..num_nodes())`. Successors
/// must be returned in a deterministic order: visits rely on it to produce
/// the same visit order every time they are run.
pub trait RandomAccessGraph {
    /// The type of the iterable returned by [`successors`](Self::successors).
    type Successors<'succ>: IntoIterator<Item = usize>
    where
        Self: 'succ;

    /// Returns the number of nodes.
    fn num_nodes(&self) -> usize;

    /// Returns the successors of a node.
    ///
    /// The behavior is unspecified if `node` is not smaller than
    /// [`num_nodes`](Self::num_nodes).
    fn successors(&self, node: usize) -> Self::Successors<'_>;

    /// Returns the number of successors of a node.
    fn outdegree(&self, node: usize) -> usize {
        self.successors(node).into_iter().count()
    }

    /// Returns the number of arcs.
    fn num_arcs(&self) -> usize {
        (0..self.num_nodes()).map(|node| self.outdegree(node)).sum()
    }
}

impl<G: RandomAccessGraph + ?Sized> RandomAccessGraph for &G {
    type Successors<'succ>
        = G::Successors<'succ>
    where
        Self: 'succ;

    #[inline(always)]
    fn num_nodes(&self) -> usize {
        (**self).num_nodes()
    }

    #[inline(always)]
    fn successors(&self, node: usize) -> Self::Successors<'_> {
        (**self).successors(node)
    }

    #[inline(always)]
    fn outdegree(&self, node: usize) -> usize {
        (**self).outdegree(node)
    }

    #[inline(always)]
    fn num_arcs(&self) -> usize {
        (**self).num_arcs()
    }
}
