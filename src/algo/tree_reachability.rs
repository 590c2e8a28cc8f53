/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::algo::reachability::is_reachable;
use crate::graphs::SparseGraph;
use dsi_progress_logger::no_logging;

/// Returns whether node `target` can be reached from node `source` in the
/// forest described by a parent array.
///
/// Nodes are labelled from 1 to `parents.len()`, and for every `i` in
/// `[1..parents.len())` there is an arc from `parents[i]` to `i + 1` (see
/// [`SparseGraph::from_parents`]). Labels outside `[1..parents.len()]`
/// are reachable from nothing and reach nothing.
///
/// # Examples
///
/// ```
/// use graph_visits::algo::is_reachable_in_tree;
///
/// // 1 → 2 → 3
/// assert!(is_reachable_in_tree(&[1, 1, 2], 2, 1));
/// assert!(!is_reachable_in_tree(&[1, 1, 2], 1, 2));
/// ```
pub fn is_reachable_in_tree(parents: &[usize], target: usize, source: usize) -> bool {
    if source == 0 || target == 0 {
        return false;
    }
    let graph = SparseGraph::from_parents(parents);
    is_reachable(&graph, source, target, no_logging![])
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_branches() {
        // 1 → 2, 1 → 3, 2 → 4, 3 → 5, 3 → 6
        let parents = [1, 1, 1, 2, 3, 3];
        assert!(is_reachable_in_tree(&parents, 6, 1));
        assert!(is_reachable_in_tree(&parents, 4, 2));
        assert!(!is_reachable_in_tree(&parents, 5, 2));
        assert!(!is_reachable_in_tree(&parents, 4, 3));
        assert!(!is_reachable_in_tree(&parents, 1, 6));
    }

    #[test]
    fn test_degenerate() {
        assert!(is_reachable_in_tree(&[1], 1, 1));
        assert!(is_reachable_in_tree(&[1, 1, 2], 3, 3));
        assert!(!is_reachable_in_tree(&[1, 1, 2], 4, 1));
        assert!(!is_reachable_in_tree(&[1, 1, 2], 0, 0));
        assert!(!is_reachable_in_tree(&[], 1, 1));
    }
}
