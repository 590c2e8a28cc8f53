/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Random graphs.

use super::DirectedGraph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random directed graphs in the Erdős–Rényi model: every arc between
/// two distinct nodes is present independently with probability `p`.
///
/// The same seed always generates the same graph, with successors in
/// increasing order.
#[derive(Debug, Clone, Copy)]
pub struct ErdosRenyi {
    num_nodes: usize,
    p: f64,
    seed: u64,
}

impl ErdosRenyi {
    /// Creates a new generator.
    ///
    /// # Panics
    ///
    /// If `p` is not in `[0..1]`.
    pub fn new(num_nodes: usize, p: f64, seed: u64) -> Self {
        assert!((0.0..=1.0).contains(&p), "p must be in [0..1], got {}", p);
        Self { num_nodes, p, seed }
    }

    /// Generates the graph.
    pub fn build(&self) -> DirectedGraph {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut graph = DirectedGraph::new(self.num_nodes);
        for src in 0..self.num_nodes {
            for dst in 0..self.num_nodes {
                if src != dst && rng.random_bool(self.p) {
                    graph.add_arc(src, dst);
                }
            }
        }
        graph
    }
}
