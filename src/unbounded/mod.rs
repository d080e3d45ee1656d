//! Convergence-driven fixed-point solvers for purely probabilistic systems.
//!
//! These kernels repeat propagation sweeps until two successive iterates
//! differ by less than the configured [`PrecisionCriterion`] in the sup-norm.
//! There is no iteration cap: the caller is responsible for ensuring the
//! input system is contractive (e.g. by making target and divergent states
//! absorbing before invocation); a non-convergent input loops indefinitely.
//!
//! # Iteration Schemes
//!
//! Two classic schemes are provided:
//!
//! - **Jacobi** ([`jacobi`], [`jacobi_cumulative`]): double-buffered
//!   synchronous sweeps; every new value is computed purely from the previous
//!   sweep. The measured difference between successive iterates lags the true
//!   fixed-point error by one step, which the solver compensates by stopping
//!   only once the difference drops to *half* the requested threshold.
//! - **Gauss-Seidel** ([`gauss_seidel`], [`gauss_seidel_cumulative`]):
//!   in-place sequential sweeps where successor reads observe whichever value
//!   (old or freshly updated) the processing order has produced. Converges
//!   against the full threshold, needs no scratch buffer, and is usually
//!   faster in practice, at the price of an order-dependent intermediate
//!   trajectory.
//!
//! [`PrecisionCriterion`]: crate::precision::PrecisionCriterion

mod gauss_seidel;
mod jacobi;


pub use gauss_seidel::{gauss_seidel, gauss_seidel_cumulative};
pub use jacobi::{jacobi, jacobi_cumulative};
