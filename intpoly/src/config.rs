//! This module contains various configuration options. In general, the
//! configuration options impact performance only. The default configuration is
//! sane and should provide good performance for most users.
//!
//! Most configuration options can also be set via environment variables.
//! Generally, the environment variables take precedence over the options set
//! in this module.

use std::cell::RefCell;

use arbitrary::Arbitrary;

thread_local! {
    static CONFIG: RefCell<Config> = RefCell::new(Config::new());
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
struct Config {
    pub parallel_multiplication_cutoff: ParallelMultiplicationCutoff,
}

impl Config {
    fn new() -> Self {
        let parallel_multiplication_cutoff = ParallelMultiplicationCutoff::new(None);

        Self {
            parallel_multiplication_cutoff,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
struct ParallelMultiplicationCutoff(usize);

impl ParallelMultiplicationCutoff {
    const ENV_VAR: &'static str = "INTPOLY_PARALLEL_MULTIPLICATION_CUTOFF";
    const DEFAULT: usize = 256;
    const MINIMUM: usize = 1;

    /// Creates a new `ParallelMultiplicationCutoff` with the given value.
    /// Respects the precedence of the environment variable if set. Uses the
    /// default if no value is provided.
    fn new(config_value: Option<usize>) -> Self {
        let cutoff = std::env::var(Self::ENV_VAR)
            .ok()
            .and_then(|s| s.parse().ok())
            .or(config_value)
            .unwrap_or(Self::DEFAULT)
            .max(Self::MINIMUM);

        Self(cutoff)
    }
}

/// Sets the cutoff for parallelizing polynomial multiplication.
///
/// For example, if the cutoff is set to 256, then a product with fewer than
/// 256 coefficients is computed sequentially. Products with 256 or more
/// coefficients have their coefficients computed in parallel. Either way, the
/// result is the same.
///
/// Can also be set via the environment variable
/// `INTPOLY_PARALLEL_MULTIPLICATION_CUTOFF`. The environment variable has
/// higher precedence than this function.
///
/// The default is 256. The minimum is always 1.
///
/// The setting is thread-local.
pub fn set_parallel_multiplication_cutoff(cutoff: usize) {
    let cutoff = ParallelMultiplicationCutoff::new(Some(cutoff));
    CONFIG.with(|c| c.borrow_mut().parallel_multiplication_cutoff = cutoff);
}

pub(crate) fn parallel_multiplication_cutoff() -> usize {
    CONFIG
        .with(|c| c.borrow().parallel_multiplication_cutoff)
        .0
}
