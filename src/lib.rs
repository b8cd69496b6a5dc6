//! # Euler: batch solvers for competition-style numerical puzzles
//!
//! Each solver computes one exact answer for one hard-coded puzzle instance
//! by brute force, dynamic programming or linear recurrences. Monte-Carlo
//! simulation backs up the probability solvers as a cross-check.
//! The solvers share a small toolbox instead of an architecture:
//!
//! | Module | Role |
//! |--------|------|
//! | [`number_theory`] | Sieves, prime lists, modular arithmetic, factorization |
//! | [`memo`] | Bit-packed state keys and memo tables for recursive DP |
//! | [`recurrence`] | Modular matrix powers, Kitamasa and Berlekamp–Massey |
//! | [`parallel`] | Progress reporting and rayon range reductions |
//! | [`monte_carlo`] | SplitMix64 and a convergence-driven trial runner |
//! | [`problems`] | One module per puzzle plus the registry used by the CLI |
//!
//! ## Conventions
//!
//! - Every solver exposes a parameterized function that reproduces the small
//!   instances quoted in its puzzle statement, and a `solve()` that runs the
//!   full instance and returns an [`Answer`].
//! - Large loops run on the global rayon pool, configured once by
//!   [`env_config::init_rayon_threads_lenient`].
//! - Packed keys: a DP state with several small coordinates is packed into a
//!   single `u64` by [`memo::KeyLayout`], so memo tables hash one word.

#![allow(clippy::needless_range_loop)]

pub mod answer;
pub mod env_config;
pub mod error;
pub mod memo;
pub mod monte_carlo;
pub mod number_theory;
pub mod parallel;
pub mod problems;
pub mod recurrence;
pub mod report;

pub use answer::Answer;
pub use error::SolveError;
