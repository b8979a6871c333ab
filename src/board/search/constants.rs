//! Search constants.

/// Window bound wider than any reachable score, mates included
pub const INFINITY: i32 = 1_000_000;

/// Default fixed search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Default number of root worker threads (1 = sequential search)
pub const DEFAULT_THREADS: usize = 1;
