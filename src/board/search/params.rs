use super::constants::{DEFAULT_DEPTH, DEFAULT_THREADS};

/// Search limits: a fixed depth and how many threads score root moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u32,
    pub threads: usize,
}

impl SearchConfig {
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchConfig {
            depth,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Depth actually searched; never below one ply.
    #[must_use]
    pub fn effective_depth(&self) -> u32 {
        self.depth.max(1)
    }

    #[must_use]
    pub fn effective_threads(&self) -> usize {
        self.threads.max(1)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            threads: DEFAULT_THREADS,
        }
    }
}
