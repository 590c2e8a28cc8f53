/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{bail, Context, Result};
use dsi_progress_logger::prelude::*;
use graph_visits::algo::reachability::par_num_reachable;
use graph_visits::prelude::*;
use sux::bits::BitVec;

fn join(nodes: &[usize]) -> String {
    nodes
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

fn root_arg(graph: &DirectedGraph) -> Result<usize> {
    let root = match std::env::args().nth(2) {
        Some(arg) => arg
            .parse()
            .with_context(|| format!("Cannot parse root {:?}", arg))?,
        None => 0,
    };
    if root >= graph.num_nodes() {
        bail!(
            "Root {} is out of range for a graph with {} nodes",
            root,
            graph.num_nodes()
        );
    }
    Ok(root)
}

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;

    let graph = DirectedGraph::from_arcs(6, [(0, 1), (0, 4), (4, 3), (1, 2), (1, 5), (3, 2)]);
    let mut main_pl = progress_logger![display_memory = true];

    match std::env::args()
        .nth(1)
        .context("No operation provided")?
        .as_str()
    {
        "dump" => {
            println!(">> Adjacency List of the Graph <<");
            print!("{}", graph.dump());
        }
        "bfs" => {
            let root = root_arg(&graph)?;
            println!("BFS Traversal: {}", join(&bfs_order(&graph, root)));
        }
        "dfs" => {
            let root = root_arg(&graph)?;
            let mut visited = BitVec::new(graph.num_nodes());
            println!(
                "DFS Traversal: {}",
                join(&dfs_order(&graph, root, &mut visited))
            );
        }
        "reach" => {
            let thread_pool = Threads::Default.build()?;
            let counts = par_num_reachable(&graph, &thread_pool, &mut main_pl);
            for (node, count) in counts.iter().enumerate() {
                println!("| {} | reaches {} nodes", node, count);
            }
        }
        "path" => {
            for (num_nodes, arcs) in [
                (2, vec![(1, 2)]),
                (5, vec![(1, 2), (2, 3), (3, 4), (4, 5)]),
                (5, vec![(1, 2), (4, 1), (2, 4), (3, 4), (5, 2), (1, 3)]),
            ] {
                println!(
                    "Path from 1 to {} in {:?}: {}",
                    num_nodes,
                    arcs,
                    path_exists(num_nodes, &arcs)
                );
            }
        }
        "towns" => {
            let parents = [1, 1, 2];
            for (target, source) in [(2, 1), (1, 2)] {
                println!(
                    "Town {} reachable from town {} with parents {:?}: {}",
                    target,
                    source,
                    parents,
                    is_reachable_in_tree(&parents, target, source)
                );
            }
        }
        "islands" => {
            let grid = Grid::new(&[[0u8, 0, 1, 0, 1, 0, 1, 1, 1], [0, 1, 0, 0, 1, 1, 1, 0, 1]]);
            let islands = islands(&grid, &mut main_pl);
            main_pl.info(format_args!(
                "Island sizes: {:?}",
                islands.compute_sizes()
            ));
            println!("{}", islands.num_islands());
        }
        op => bail!("Unknown operation {:?}", op),
    }

    Ok(())
}
