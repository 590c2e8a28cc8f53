/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use criterion::{criterion_group, criterion_main, Criterion};
use dsi_progress_logger::no_logging;
use graph_visits::graphs::random::ErdosRenyi;
use graph_visits::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use sux::bits::BitVec;

fn bench_bfs(c: &mut Criterion) {
    let graph = ErdosRenyi::new(2000, 0.002, 0).build();

    c.bench_function("bfs_order_erdos_renyi_2000", |b| {
        b.iter(|| black_box(bfs_order(&graph, black_box(0))));
    });
}

fn bench_dfs(c: &mut Criterion) {
    let graph = ErdosRenyi::new(2000, 0.002, 0).build();

    c.bench_function("dfs_order_erdos_renyi_2000", |b| {
        b.iter(|| {
            let mut visited = BitVec::new(graph.num_nodes());
            black_box(dfs_order(&graph, black_box(0), &mut visited))
        });
    });

    c.bench_function("dfs_order_recursive_erdos_renyi_2000", |b| {
        b.iter(|| {
            let mut visited = BitVec::new(graph.num_nodes());
            black_box(dfs_order_recursive(&graph, black_box(0), &mut visited))
        });
    });
}

fn bench_reachability(c: &mut Criterion) {
    let graph = ErdosRenyi::new(2000, 0.001, 1).build();

    c.bench_function("is_reachable_erdos_renyi_2000", |b| {
        b.iter(|| {
            black_box(reachability::is_reachable(
                &graph,
                black_box(0),
                black_box(1999),
                no_logging![],
            ))
        });
    });
}

fn bench_islands(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    let matrix = (0..500)
        .map(|_| (0..500).map(|_| rng.random_bool(0.4) as u8).collect::<Vec<_>>())
        .collect::<Vec<_>>();

    c.bench_function("count_islands_500x500", |b| {
        b.iter(|| black_box(count_islands(black_box(&matrix[..]))));
    });
}

criterion_group!(
    benches,
    bench_bfs,
    bench_dfs,
    bench_reachability,
    bench_islands
);
criterion_main!(benches);
