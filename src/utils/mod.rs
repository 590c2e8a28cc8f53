/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Support code shared by graphs and algorithms.

mod closure_vec;
pub use closure_vec::closure_vec;

mod threadpool;
pub use threadpool::Threads;
