/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing all algorithm implementations.

pub mod visits;

mod orders;
pub use orders::*;

pub mod reachability;

mod path_exists;
pub use path_exists::*;

mod tree_reachability;
pub use tree_reachability::*;

mod islands;
pub use islands::*;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use visits::{Event, Sequential};
}
