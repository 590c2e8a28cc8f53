/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Errors raised by graph construction.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// A graph was requested with a negative number of nodes.
    #[error("the number of nodes must be nonnegative, got {0}")]
    NegativeNodeCount(i64),
    /// A graph was requested with more nodes than can be addressed.
    #[error("the number of nodes {0} does not fit in a usize")]
    TooManyNodes(i64),
    /// An arc endpoint is not a node of the graph.
    #[error("node {node} is out of range for a graph with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },
}
