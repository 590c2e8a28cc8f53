/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Breadth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventPred`]. The callback is called at the [start of a
//! visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Unknown), [every time a known node is
//! found again](EventPred::Known), and [at the end of a
//! visit](EventPred::Done).
//!
//! Discovered nodes are enqueued in discovery order, so the sequence of
//! [`Unknown`](EventPred::Unknown) events is also the order in which nodes
//! leave the queue, that is, the classical breadth-first order.

mod seq;
pub use seq::*;

use sealed::sealed;

/// Types of callback events generated during a breadth-first visit
/// keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventPred {
    /// Initialization: this event should be used to set up state at the start
    /// of the visit from `root`.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Unknown {
        /// The current node.
        curr: usize,
        /// The parent of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The distance of the current node from the root.
        distance: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Known {
        /// The current node.
        curr: usize,
        /// The predecessor of `curr`.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for visits that keep track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsPred {
    /// The node about to be discovered.
    pub curr: usize,
    /// The predecessor of [curr](`Self::curr`).
    pub pred: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The distance of the current node from the [root](`Self::root`).
    pub distance: usize,
}

#[sealed]
impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}
