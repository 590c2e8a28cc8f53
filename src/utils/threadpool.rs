/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// The number of threads of the [`ThreadPool`] used by parallel algorithms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// As many threads as rayon chooses by default.
    #[default]
    Default,
    /// The given number of threads.
    NumThreads(usize),
}

impl Threads {
    /// Builds a thread pool with this number of threads.
    pub fn build(self) -> Result<ThreadPool, ThreadPoolBuildError> {
        match self {
            Self::Default => ThreadPoolBuilder::new().build(),
            Self::NumThreads(num_threads) => {
                ThreadPoolBuilder::new().num_threads(num_threads).build()
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_build() -> anyhow::Result<()> {
        assert_eq!(Threads::NumThreads(3).build()?.current_num_threads(), 3);
        assert!(Threads::default().build()?.current_num_threads() >= 1);
        Ok(())
    }
}
