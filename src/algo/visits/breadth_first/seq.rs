/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::visits::{
    breadth_first::{EventPred, FilterArgsPred},
    Sequential,
};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// A sequential breadth-first visit.
///
/// This implementation uses an algorithm that is slightly different from the
/// classical textbook algorithm, as we do not store parents or distances of the
/// nodes from the root: Parents and distances are computed on the fly and
/// passed to the callback function by visiting nodes when they are discovered,
/// rather than when they are extracted from the queue.
///
/// This approach requires inserting a level separator between nodes at
/// different distances: to obtain this result in a compact way, nodes are
/// represented using [`NonMaxUsize`], so the `None` variant of
/// `Option<NonMaxUsize>` can be used as a separator.
///
/// The progress logger will be [invoked](ProgressLog::light_update) after the
/// successors of each node have been enumerated.
///
/// # Examples
///
/// ```
/// use std::convert::Infallible;
/// use graph_visits::algo::visits::*;
/// use graph_visits::graphs::DirectedGraph;
/// use dsi_progress_logger::no_logging;
///
/// // Let's compute the distances from 0
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 0), (1, 3), (3, 3)]);
/// let mut visit = breadth_first::Seq::new(&graph);
/// let mut d = [0; 4];
/// visit.visit(
///     0,
///     |event| {
///         // Set distance from 0
///         if let breadth_first::EventPred::Unknown { curr, distance, .. } = event {
///             d[curr] = distance;
///         }
///         Ok::<_, Infallible>(())
///     },
///     no_logging![],
/// ).unwrap();
/// assert_eq!(d, [0, 1, 2, 2]);
/// ```
pub struct Seq<G: RandomAccessGraph> {
    graph: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, we use `None` as a
    /// separator between levels. [`NonMaxUsize`] is used to avoid
    /// storage for the option variant tag.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: RandomAccessGraph> Seq<G> {
    /// Creates a new sequential visit.
    ///
    /// # Arguments
    /// * `graph`: an immutable reference to the graph to visit.
    pub fn new(graph: G) -> Self {
        let num_nodes = graph.num_nodes();
        Self {
            graph,
            visited: BitVec::new(num_nodes),
            queue: VecDeque::new(),
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

impl<G: RandomAccessGraph> Sequential<EventPred> for Seq<G> {
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
        if self.visited[root]
            || !filter(FilterArgsPred {
                curr: root,
                pred: root,
                root,
                distance: 0,
            })
        {
            // We ignore the node: it might be visited later
            return Ok(());
        }

        callback(EventPred::Init { root })?;

        self.visited.set(root, true);
        callback(EventPred::Unknown {
            curr: root,
            pred: root,
            root,
            distance: 0,
        })?;

        // Leftovers of an interrupted visit
        self.queue.clear();
        self.queue.push_back(Some(
            NonMaxUsize::new(root).expect("node index should never be usize::MAX"),
        ));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(current_node) = self.queue.pop_front() {
            match current_node {
                Some(node) => {
                    let node = node.get();
                    for succ in self.graph.successors(node) {
                        if !self.visited[succ] {
                            if filter(FilterArgsPred {
                                curr: succ,
                                pred: node,
                                root,
                                distance,
                            }) {
                                self.visited.set(succ, true);
                                callback(EventPred::Unknown {
                                    curr: succ,
                                    pred: node,
                                    root,
                                    distance,
                                })?;
                                self.queue.push_back(Some(
                                    NonMaxUsize::new(succ)
                                        .expect("node index should never be usize::MAX"),
                                ))
                            }
                        } else {
                            callback(EventPred::Known {
                                curr: succ,
                                pred: node,
                                root,
                            })?;
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // We are at the end of the current level, so
                    // we increment the distance and add a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        callback(EventPred::Done { root })
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
        self.queue.clear();
        self.visited.fill(false);
    }
}
