// rayon-based parallel-for

use super::ParallelFor;
use crate::config::ParallelOptions;
use crate::error::KernelError;
use rayon::prelude::*;

#[derive(Debug)]
pub struct RayonPool {
    // None: rayon's global pool
    pool: Option<rayon::ThreadPool>,
    min_len: usize,
}

impl RayonPool {
    pub fn new() -> Self {
        Self { pool: None, min_len: 1 }
    }

    pub fn with_threads(num_threads: usize) -> Result<Self, KernelError> {
        Self::from_options(&ParallelOptions::with_threads(num_threads))
    }

    pub fn from_options(opts: &ParallelOptions) -> Result<Self, KernelError> {
        opts.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(opts.num_threads.unwrap_or_else(num_cpus::get))
            .build()
            .map_err(|e| KernelError::ThreadPool(e.to_string()))?;
        Ok(Self { pool: Some(pool), min_len: opts.min_len })
    }
}

impl Default for RayonPool {
    fn default() -> Self {
        Self::new()
    }
}

impl ParallelFor for RayonPool {
    fn workers(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn for_each<I, F>(&self, items: Vec<I>, f: F)
    where
        I: Send,
        F: Fn(I) + Send + Sync,
    {
        let min_len = self.min_len;
        let run = move || items.into_par_iter().with_min_len(min_len).for_each(f);
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}
