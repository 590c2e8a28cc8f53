/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Reachability queries.

use crate::algo::visits::{breadth_first, depth_first, Sequential, StoppedWhenDone};
use crate::graphs::RandomAccessGraph;
use dsi_progress_logger::{no_logging, ProgressLog};
use rayon::prelude::*;
use rayon::ThreadPool;
use std::convert::Infallible;
use sux::bits::BitVec;

/// Returns whether there is a directed path from `src` to `dst`.
///
/// Every node reaches itself. Nodes that are not in the graph reach nothing
/// and are reached by nothing. The breadth-first visit from `src` stops as
/// soon as `dst` is discovered.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::reachability::is_reachable;
/// use graph_visits::graphs::DirectedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (3, 2)]);
/// assert!(is_reachable(&graph, 0, 2, no_logging![]));
/// assert!(!is_reachable(&graph, 0, 3, no_logging![]));
/// assert!(is_reachable(&graph, 3, 3, no_logging![]));
/// ```
pub fn is_reachable(
    graph: impl RandomAccessGraph,
    src: usize,
    dst: usize,
    pl: &mut impl ProgressLog,
) -> bool {
    let num_nodes = graph.num_nodes();
    if src >= num_nodes || dst >= num_nodes {
        return false;
    }
    if src == dst {
        return true;
    }

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!("Looking for a path from {} to {}...", src, dst));

    let mut visit = breadth_first::Seq::new(&graph);
    let found = visit
        .visit(
            src,
            |event| match event {
                breadth_first::EventPred::Unknown { curr, .. } if curr == dst => {
                    Err(StoppedWhenDone)
                }
                _ => Ok(()),
            },
            pl,
        )
        .is_err();

    pl.done();
    found
}

/// Returns the set of nodes reachable from `src`, including `src` itself.
///
/// If `src` is not a node of the graph the set is empty.
pub fn reachable_set(graph: impl RandomAccessGraph, src: usize, pl: &mut impl ProgressLog) -> BitVec {
    let num_nodes = graph.num_nodes();
    if src >= num_nodes {
        return BitVec::new(num_nodes);
    }

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!("Computing the nodes reachable from {}...", src));

    let mut visit = breadth_first::Seq::new(&graph);
    visit
        .visit(src, |_| Ok::<_, Infallible>(()), pl)
        .unwrap_or_else(|never| match never {});

    pl.done();
    visit.into_visited()
}

/// Returns a path from `src` to `dst`, if any, as the sequence of its nodes.
///
/// The path is found by a depth-first visit and it is not necessarily a
/// shortest path. The path from a node to itself contains only the node.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::reachability::find_path;
/// use graph_visits::graphs::DirectedGraph;
/// use dsi_progress_logger::no_logging;
///
/// let graph = DirectedGraph::from_arcs(5, [(0, 4), (0, 1), (1, 2), (2, 3)]);
/// assert_eq!(find_path(&graph, 0, 3, no_logging![]), Some(vec![0, 1, 2, 3]));
/// assert_eq!(find_path(&graph, 3, 0, no_logging![]), None);
/// ```
pub fn find_path(
    graph: impl RandomAccessGraph,
    src: usize,
    dst: usize,
    pl: &mut impl ProgressLog,
) -> Option<Vec<usize>> {
    let num_nodes = graph.num_nodes();
    if src >= num_nodes || dst >= num_nodes {
        return None;
    }
    if src == dst {
        return Some(vec![src]);
    }

    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start(format!("Looking for a path from {} to {}...", src, dst));

    let mut visit = depth_first::SeqPred::new(&graph);
    let mut last = None;
    let result = visit.visit(
        src,
        |event| match event {
            depth_first::EventPred::Previsit { curr, pred, .. } if curr == dst => {
                last = Some(pred);
                Err(StoppedWhenDone)
            }
            _ => Ok(()),
        },
        pl,
    );

    pl.done();

    result.err()?;
    let last = last?;
    // The visit path, except for its last node, in reverse order
    let mut path = visit.stack().collect::<Vec<_>>();
    path.reverse();
    path.push(last);
    path.push(dst);
    Some(path)
}

/// Returns, for each node, the number of nodes reachable from it, including
/// the node itself.
///
/// Each thread of `thread_pool` runs its own breadth-first visits, with its own
/// visit state; the graph is shared by all threads.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::reachability::par_num_reachable;
/// use graph_visits::graphs::DirectedGraph;
/// use graph_visits::utils::Threads;
/// use dsi_progress_logger::no_logging;
///
/// let graph = DirectedGraph::from_arcs(4, [(0, 1), (1, 2), (2, 1)]);
/// let thread_pool = Threads::NumThreads(2).build().unwrap();
/// assert_eq!(
///     &*par_num_reachable(&graph, &thread_pool, no_logging![]),
///     &[3, 2, 2, 1]
/// );
/// ```
pub fn par_num_reachable(
    graph: impl RandomAccessGraph + Sync,
    thread_pool: &ThreadPool,
    pl: &mut impl ProgressLog,
) -> Box<[usize]> {
    let num_nodes = graph.num_nodes();
    pl.item_name("node");
    pl.expected_updates(Some(num_nodes));
    pl.start("Counting reachable nodes...");

    let graph = &graph;
    let counts = thread_pool.install(|| {
        (0..num_nodes)
            .into_par_iter()
            .map_init(
                || breadth_first::Seq::new(graph),
                |visit, root| {
                    visit.reset();
                    let mut count = 0;
                    visit
                        .visit(
                            root,
                            |event| {
                                if let breadth_first::EventPred::Unknown { .. } = event {
                                    count += 1;
                                }
                                Ok::<_, Infallible>(())
                            },
                            no_logging![],
                        )
                        .unwrap_or_else(|never| match never {});
                    count
                },
            )
            .collect::<Vec<usize>>()
    });

    pl.update_with_count(num_nodes);
    pl.done();
    counts.into_boxed_slice()
}
