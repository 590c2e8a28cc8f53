/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/// Creates a [`Vec`] where each value is created calling the passed closure.
///
/// This is useful for types that are not [`Clone`], or whose clones should not
/// share state, such as one empty adjacency list per node.
///
/// # Arguments
/// * `closure`: the closure called to initialize each value of the [`Vec`].
/// * `length`: the length of the created [`Vec`].
///
/// # Examples
/// ```
/// # use graph_visits::utils::closure_vec;
/// # use graph_visits::graphs::AdjacencyList;
/// let v = closure_vec(AdjacencyList::new, 3);
/// assert_eq!(v.len(), 3);
/// assert!(v.iter().all(AdjacencyList::is_empty));
/// ```
#[inline(always)]
pub fn closure_vec<T>(mut closure: impl FnMut() -> T, length: usize) -> Vec<T> {
    (0..length).map(|_| closure()).collect()
}
