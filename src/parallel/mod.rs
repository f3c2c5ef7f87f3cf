//! Parallel-for abstraction used by the parallel kernels.
//!
//! The kernels never talk to a thread pool directly. They hand a list of
//! independent work units to a [`ParallelFor`] and rely on one contract: every
//! unit is passed to the closure exactly once, and `for_each` returns only after
//! all of them have completed.

use crate::config::ParallelOptions;
use crate::error::KernelError;

pub trait ParallelFor {
    /// Number of workers units may be spread across.
    fn workers(&self) -> usize;
    /// Run `f` on every item; blocks until all calls have returned.
    fn for_each<I, F>(&self, items: Vec<I>, f: F)
    where
        I: Send,
        F: Fn(I) + Send + Sync;
}

/// Runs every unit on the calling thread, in order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Serial;

impl ParallelFor for Serial {
    fn workers(&self) -> usize {
        1
    }
    fn for_each<I, F>(&self, items: Vec<I>, f: F)
    where
        I: Send,
        F: Fn(I) + Send + Sync,
    {
        items.into_iter().for_each(f);
    }
}

#[cfg(feature = "rayon")]
pub mod rayon_pool;
#[cfg(feature = "rayon")]
pub use rayon_pool::RayonPool;

#[derive(Debug)]
pub enum Executor {
    Serial(Serial),
    #[cfg(feature = "rayon")]
    Rayon(RayonPool),
}

impl Executor {
    pub fn serial() -> Self {
        Executor::Serial(Serial)
    }

    /// Dedicated rayon pool when the `rayon` feature is on; otherwise serial.
    pub fn from_options(opts: &ParallelOptions) -> Result<Self, KernelError> {
        #[cfg(feature = "rayon")]
        {
            RayonPool::from_options(opts).map(Executor::Rayon)
        }
        #[cfg(not(feature = "rayon"))]
        {
            opts.validate()?;
            Ok(Executor::Serial(Serial))
        }
    }
}

impl Default for Executor {
    fn default() -> Self {
        #[cfg(feature = "rayon")]
        {
            Executor::Rayon(RayonPool::new())
        }
        #[cfg(not(feature = "rayon"))]
        {
            Executor::Serial(Serial)
        }
    }
}

impl ParallelFor for Executor {
    fn workers(&self) -> usize {
        match self {
            Executor::Serial(s) => s.workers(),
            #[cfg(feature = "rayon")]
            Executor::Rayon(pool) => pool.workers(),
        }
    }
    fn for_each<I, F>(&self, items: Vec<I>, f: F)
    where
        I: Send,
        F: Fn(I) + Send + Sync,
    {
        match self {
            Executor::Serial(s) => s.for_each(items, f),
            #[cfg(feature = "rayon")]
            Executor::Rayon(pool) => pool.for_each(items, f),
        }
    }
}
