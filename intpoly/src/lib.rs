#![deny(clippy::shadow_unrelated)]
//! Exact arithmetic over polynomials with integer coefficients, and recovery
//! of a polynomial with non-negative coefficients from two of its evaluations.
//!
//! The central types and functions are re-exported in the [`prelude`].

pub mod config;
pub mod error;
pub mod math;
pub mod prelude;
