/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Graph representations visited by the algorithms in [`crate::algo`].
//!
//! All graphs implement [`RandomAccessGraph`], which is the only capability
//! visits need: the number of nodes and, for each node, its successors.

mod traits;
pub use traits::*;

mod error;
pub use error::*;

mod adj_list;
pub use adj_list::*;

mod digraph;
pub use digraph::*;

mod sparse;
pub use sparse::*;

mod grid;
pub use grid::*;

pub mod random;
