/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Visits on graphs.
//!
//! Implementations of [`Sequential`] must provide the
//! [`visit_filtered`](Sequential::visit_filtered) method, which performs a
//! visit of a graph starting from a given node, and the
//! [`visit_all_filtered`](Sequential::visit_all_filtered) method, which
//! performs a visit of the whole graph, starting from each node in turn.
//!
//! For each node, the visit invokes a callback with an argument of type `A`,
//! an event describing what is happening. Callbacks return a `Result`: if they
//! return an error, the visit is interrupted and the error is returned. In
//! this case, the state of the visit is undefined and it must be
//! [reset](Sequential::reset) before being used again. Errors can be used to
//! stop a visit as soon as the goal of the visit is reached, using for
//! example [`StoppedWhenDone`].
//!
//! A visit can also be restricted by a filter, which is called on every node
//! that is about to be discovered: if the filter returns false, the node is
//! ignored, and it might be discovered later from another predecessor.
//!
//! The state of a visit (in particular, the set of visited nodes) is kept
//! across calls: a visit from a node already visited does nothing, which
//! makes it possible to visit all the trees of a forest one at a time.

pub mod breadth_first;
pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use thiserror::Error;

/// An error that can be used to stop a visit when its goal is reached.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("stopped when done")]
pub struct StoppedWhenDone;

/// An event generated by a visit, associated with the type of arguments
/// passed to filters.
#[sealed]
pub trait Event: Copy {
    /// The type of arguments passed to filters.
    type FilterArgs: Copy;
}

/// A sequential visit.
pub trait Sequential<A: Event> {
    /// Visits the graph from the specified node.
    ///
    /// # Arguments
    /// * `root`: The node to start the visit from.
    ///
    /// * `callback`: The callback function.
    ///
    /// * `filter`: The filter function.
    ///
    /// * `pl`: A progress logger.
    fn visit_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        root: usize,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the graph from the specified node without a filter.
    ///
    /// The default implementation calls
    /// [`visit_filtered`](Sequential::visit_filtered) with a filter that
    /// always returns true.
    #[inline(always)]
    fn visit<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: usize,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_filtered(root, callback, |_| true, pl)
    }

    /// Visits the whole graph, starting a visit from each node in increasing
    /// order.
    ///
    /// See [`visit_filtered`](Sequential::visit_filtered) for more details.
    fn visit_all_filtered<E, C: FnMut(A) -> Result<(), E>, F: FnMut(A::FilterArgs) -> bool>(
        &mut self,
        callback: C,
        filter: F,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the whole graph without a filter.
    ///
    /// The default implementation calls
    /// [`visit_all_filtered`](Sequential::visit_all_filtered) with a filter
    /// that always returns true.
    #[inline(always)]
    fn visit_all<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_all_filtered(callback, |_| true, pl)
    }

    /// Resets the visit status, making it possible to reuse it.
    fn reset(&mut self);
}
