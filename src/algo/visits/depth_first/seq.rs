/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    depth_first::{EventNoPred, EventPred, FilterArgsNoPred, FilterArgsPred},
    Sequential,
};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// A depth-first visit which does not keep track of predecessors.
pub type SeqNoPred<'a, G> = SeqIter<'a, G, (), false>;

/// A depth-first visit which keeps track of predecessors.
pub type SeqPred<'a, G> = SeqIter<'a, G, usize, true>;

/// Sequential depth-first visits.
///
/// This is an iterative implementation that does not need a large stack size:
/// the visit path is represented by an explicit stack of iterators on
/// successors, one for each node on the path.
///
/// There are two versions of the visit, which are type aliases to the same
/// common implementation: [`SeqNoPred`] and [`SeqPred`] (the generic
/// implementation should not be instantiated by the user).
///
/// * [`SeqNoPred`] does not keep track of predecessors; it can be used, for
///   example, to compute reachability information.
/// * [`SeqPred`] keeps track of predecessors; it uses a stack of pairs made of
///   an iterator and a predecessor, and generates events of type
///   [`EventPred`], which provide the predecessor of the current node and a
///   [postvisit event](EventPred::Postvisit).
///
/// Both use one bit per node to remember known nodes. The set of known nodes
/// can be provided at construction time with
/// [`with_visited`](SeqIter::with_visited) and recovered with
/// [`into_visited`](SeqIter::into_visited), so that a visit of a forest can be
/// carried on by different visit instances.
///
/// If the visit was interrupted, the nodes still on the visit path can be
/// retrieved using the [`stack`](SeqPred::stack) method (only for
/// [`SeqPred`]).
///
/// The progress logger will be [invoked](ProgressLog::light_update) after the
/// successors of each node have been enumerated.
///
/// # Examples
///
/// Let's compute the preorder of a visit:
///
/// ```
/// use std::convert::Infallible;
/// use graph_visits::algo::visits::*;
/// use graph_visits::algo::visits::depth_first::*;
/// use graph_visits::graphs::DirectedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (0, 3)]);
/// let mut visit = depth_first::SeqNoPred::new(&graph);
/// let mut preorder = vec![];
///
/// visit.visit(
///     0,
///     |event| {
///         if let EventNoPred::Previsit { curr, .. } = event {
///             preorder.push(curr);
///         }
///         Ok::<_, Infallible>(())
///     },
///     no_logging![],
/// ).unwrap();
///
/// assert_eq!(preorder, vec![0, 1, 2, 3]);
/// ```
///
/// Or let us stop the visit as soon as node 2 is found, and recover the
/// path that led to it:
///
/// ```
/// use graph_visits::algo::visits::*;
/// use graph_visits::algo::visits::depth_first::*;
/// use graph_visits::graphs::DirectedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 3), (0, 1), (1, 2)]);
/// let mut visit = depth_first::SeqPred::new(&graph);
/// let mut last = None;
///
/// assert!(visit.visit(
///     0,
///     |event| match event {
///         EventPred::Previsit { curr: 2, pred, .. } => {
///             last = Some(pred);
///             Err(StoppedWhenDone)
///         }
///         _ => Ok(()),
///     },
///     no_logging![],
/// ).is_err());
///
/// assert_eq!(last, Some(1));
/// // The rest of the visit path, in reverse order
/// assert_eq!(visit.stack().collect::<Vec<_>>(), vec![0]);
/// ```
pub struct SeqIter<'a, G: RandomAccessGraph, P, const PRED: bool> {
    graph: &'a G,
    /// Entries on this stack represent the iterator on the successors of a node
    /// and the parent of the node. This approach makes it possible to avoid
    /// storing both the current and the parent node in the stack.
    stack: Vec<(<G::Successors<'a> as IntoIterator>::IntoIter, P)>,
    visited: BitVec,
}

/// The iterator returned by [`stack`](SeqPred::stack).
pub struct StackIterator<'a, 'b, G: RandomAccessGraph> {
    visit: &'b mut SeqIter<'a, G, usize, true>,
}

impl<G: RandomAccessGraph> Iterator for StackIterator<'_, '_, G> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        // Since we put predecessors on the stack, the
        // first two stack entries are equal to the root,
        // so we avoid to return the first one
        if self.visit.stack.len() <= 1 {
            return None;
        }
        self.visit.stack.pop().map(|(_, parent)| parent)
    }
}

impl<'a, G: RandomAccessGraph, P, const PRED: bool> SeqIter<'a, G, P, PRED> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: &'a G) -> SeqIter<'a, G, P, PRED> {
        let num_nodes = graph.num_nodes();
        Self::with_visited(graph, BitVec::new(num_nodes))
    }

    /// Creates a new sequential visit considering as already visited the
    /// nodes set in `visited`.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    ///
    /// * `visited`: the nodes to consider as already visited.
    ///
    /// # Panics
    ///
    /// If the length of `visited` is not the number of nodes of the graph.
    pub fn with_visited(graph: &'a G, visited: BitVec) -> SeqIter<'a, G, P, PRED> {
        assert_eq!(
            visited.len(),
            graph.num_nodes(),
            "the visited set must have one bit per node"
        );
        Self {
            graph,
            stack: Vec::with_capacity(16),
            visited,
        }
    }

    /// Returns the nodes visited so far.
    pub fn visited(&self) -> &BitVec {
        &self.visited
    }

    /// Consumes the visit, returning the nodes visited so far.
    pub fn into_visited(self) -> BitVec {
        self.visited
    }
}

impl<'a, G: RandomAccessGraph> SeqIter<'a, G, usize, true> {
    /// Returns an iterator over the nodes still on the visit path,
    /// except for the last one.
    ///
    /// Node will be returned in reverse order of visit.
    ///
    /// This method is useful only in the case of interrupted visits,
    /// as in a completed visit the stack will be empty. The last node
    /// on the visit path at the moment of the interruption must be
    /// treated separately.
    pub fn stack(&mut self) -> StackIterator<'a, '_, G> {
        StackIterator { visit: self }
    }
}

impl<G: RandomAccessGraph> Sequential<EventPred> for SeqIter<'_, G, usize, true> {
    fn visit_filtered<
        E,
        C: FnMut(EventPred) -> Result<(), E>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        let visited = &mut self.visited;

        if visited[root]
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                depth: 0,
            })
        {
            // We ignore the node: it might be visited later
            return Ok(());
        }

        callback(EventPred::Init { root })?;

        visited.set(root, true);

        callback(EventPred::Previsit {
            curr: root,
            pred: root,
            root,
            depth: 0,
        })?;

        self.stack.clear();
        self.stack
            .push((self.graph.successors(root).into_iter(), root));

        // This variable keeps track of the current node being visited; the
        // parent node is derived at each iteration of the 'recurse loop.
        let mut current_node = root;

        'recurse: loop {
            // The depth of the successors of the current node
            let depth = self.stack.len();
            let Some((iter, parent)) = self.stack.last_mut() else {
                callback(EventPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                // Check if node should be visited
                if visited[succ] {
                    // Node has already been discovered
                    callback(EventPred::Revisit {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    })?;
                } else {
                    // First time seeing node
                    if filter(FilterArgsPred {
                        curr: succ,
                        pred: current_node,
                        root,
                        depth,
                    }) {
                        visited.set(succ, true);

                        callback(EventPred::Previsit {
                            curr: succ,
                            pred: current_node,
                            root,
                            depth,
                        })?;
                        // current_node is the parent of succ
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), current_node));

                        // At the next iteration, succ will be the current node
                        current_node = succ;

                        continue 'recurse;
                    } // Else we ignore the node: it might be visited later
                }
            }

            callback(EventPred::Postvisit {
                curr: current_node,
                pred: *parent,
                root,
                depth: depth - 1,
            })?;

            pl.light_update();

            // We're going up one stack level, so the next current_node
            // is the current parent.
            current_node = *parent;
            self.stack.pop();
        }
    }

    fn visit_all_filtered<
        E,
        C: FnMut(EventPred) -> Result<(), E>,
        F: FnMut(FilterArgsPred) -> bool,
    >(
        &mut self,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit_filtered(node, &mut callback, &mut filter, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.visited.fill(false);
    }
}

impl<G: RandomAccessGraph> Sequential<EventNoPred> for SeqIter<'_, G, (), false> {
    fn visit_filtered<
        E,
        C: FnMut(EventNoPred) -> Result<(), E>,
        F: FnMut(FilterArgsNoPred) -> bool,
    >(
        &mut self,
        root: usize,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        let visited = &mut self.visited;

        if visited[root]
            || !filter(FilterArgsNoPred {
                curr: root,
                root,
                depth: 0,
            })
        {
            // We ignore the node: it might be visited later
            return Ok(());
        }

        callback(EventNoPred::Init { root })?;

        visited.set(root, true);

        callback(EventNoPred::Previsit {
            curr: root,
            root,
            depth: 0,
        })?;

        self.stack.clear();
        self.stack
            .push((self.graph.successors(root).into_iter(), ()));

        'recurse: loop {
            let depth = self.stack.len();
            let Some((iter, _)) = self.stack.last_mut() else {
                callback(EventNoPred::Done { root })?;
                return Ok(());
            };

            for succ in iter {
                // Check if node should be visited
                if visited[succ] {
                    // Node has already been discovered
                    callback(EventNoPred::Revisit {
                        curr: succ,
                        root,
                        depth,
                    })?;
                } else {
                    // First time seeing node
                    if filter(FilterArgsNoPred {
                        curr: succ,
                        root,
                        depth,
                    }) {
                        visited.set(succ, true);

                        callback(EventNoPred::Previsit {
                            curr: succ,
                            root,
                            depth,
                        })?;
                        self.stack
                            .push((self.graph.successors(succ).into_iter(), ()));

                        continue 'recurse;
                    } // Else we ignore the node: it might be visited later
                }
            }

            pl.light_update();

            // We're going up one stack level
            self.stack.pop();
        }
    }

    fn visit_all_filtered<
        E,
        C: FnMut(EventNoPred) -> Result<(), E>,
        F: FnMut(FilterArgsNoPred) -> bool,
    >(
        &mut self,
        mut callback: C,
        mut filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for node in 0..self.graph.num_nodes() {
            self.visit_filtered(node, &mut callback, &mut filter, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.visited.fill(false);
    }
}
