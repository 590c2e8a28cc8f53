/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Depth-first visits.
//!
//! Implementations must accept a callback function with argument
//! [`EventNoPred`] or [`EventPred`]. The callback must be called at the [start
//! of a visit](EventPred::Init), [every time a new node is
//! discovered](EventPred::Previsit), [every time a node is
//! revisited](EventPred::Revisit), if supported, [every time the enumeration
//! of the successors of a node is completed](EventPred::Postvisit), and [at the
//! end of a visit](EventPred::Done).
//!
//! Note that since [`EventPred`] contains the predecessor of the visited node,
//! all post-start visit events can be interpreted as arc events. The only
//! exception are the previsit and postvisit events of the root.
//!
//! Besides the iterative visits, which do not need a large stack, the
//! [`rec`] module provides a recursive visit threading the set of
//! visited nodes through the recursion.

mod seq;
pub use seq::*;

pub mod rec;

use sealed::sealed;

/// Types of callback events generated during a depth-first visit
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
    Previsit {
        /// The current node.
        curr: usize,
        /// The parent of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to `curr`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The predecessor of `curr`.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to `curr`.
        depth: usize,
    },
    /// The enumeration of the successors of the node has been completed: we
    /// are retreating from a tree arc, unless all fields are equal to the
    /// root.
    Postvisit {
        /// The current node.
        curr: usize,
        /// The parent of `curr` in the visit tree.
        pred: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to `curr`.
        depth: usize,
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
    /// The depth of the visit, that is, the length of the visit path from the
    /// [root](`Self::root`) to [curr](`Self::curr`).
    pub depth: usize,
}

#[sealed]
impl super::Event for EventPred {
    type FilterArgs = FilterArgsPred;
}

/// Types of callback events generated during a depth-first visit
/// not keeping track of parent nodes.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum EventNoPred {
    /// Initialization: this event should be used to set up state at the start
    /// of the visit from `root`.
    Init {
        /// The root of the current visit tree.
        root: usize,
    },
    /// The node has been encountered for the first time: we are traversing a
    /// new tree arc, unless all fields are equal to the root.
    Previsit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to `curr`.
        depth: usize,
    },
    /// The node has been encountered before: we are traversing a back arc, a
    /// forward arc, or a cross arc.
    Revisit {
        /// The current node.
        curr: usize,
        /// The root of the current visit tree.
        root: usize,
        /// The depth of the visit, that is, the length of the visit path from
        /// the root to `curr`.
        depth: usize,
    },
    /// The visit from `root` has been completed.
    Done {
        /// The root of the current visit tree.
        root: usize,
    },
}

/// Filter arguments for visits that do not keep track of predecessors.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct FilterArgsNoPred {
    /// The node about to be discovered.
    pub curr: usize,
    /// The root of the current visit tree.
    pub root: usize,
    /// The depth of the visit, that is, the length of the visit path from the
    /// [root](`Self::root`) to [curr](`Self::curr`).
    pub depth: usize,
}

#[sealed]
impl super::Event for EventNoPred {
    type FilterArgs = FilterArgsNoPred;
}
