//! Iterative value/reward propagation kernels for explicit-state probabilistic
//! model checking.
//!
//! The crate operates on sparsely-represented transition structures:
//! [`graph::TransitionGraph`] for purely probabilistic systems (DTMCs, or
//! uniformized CTMCs) and [`graph::ChoiceGraph`] for nondeterministic and
//! game-based systems (MDPs, turn-based stochastic games). Every kernel takes
//! a caller-owned value vector, sweeps it to the requested horizon or fixed
//! point, and leaves the result in place.
//!
//! # Kernel Families
//!
//! - [`bounded`]: fixed-iteration-count propagation, including cumulative
//!   reward and discounted variants, their min/max counterparts over choice
//!   structures, and the uniformization-weighted transient kernel for
//!   continuous-time models.
//! - [`unbounded`]: convergence-driven fixed-point iteration for
//!   probabilistic systems, in Jacobi and Gauss-Seidel flavours.
//! - [`game`]: convergence-driven min-max iteration over two-player
//!   partitioned choice structures.
//!
//! # Example
//!
//! ```
//! use sparse_value_iteration::graph::TransitionGraph;
//! use sparse_value_iteration::precision::PrecisionCriterion;
//! use sparse_value_iteration::progress::ProgressCounter;
//! use sparse_value_iteration::unbounded;
//!
//! // State 0 moves to the absorbing target 1 with probability 1/2.
//! let graph = TransitionGraph::from_rows(&[
//!     vec![(0, 0.5), (1, 0.5)],
//!     vec![(1, 1.0)],
//! ]);
//! let mut values = vec![0.0, 1.0];
//! let criterion = PrecisionCriterion::absolute(1e-9);
//! let progress = ProgressCounter::new();
//! unbounded::gauss_seidel(&graph, &criterion, &mut values, &progress).unwrap();
//! assert!((values[0] - 1.0).abs() < 1e-6);
//! ```

pub mod bounded;
pub mod error;
pub mod game;
pub mod graph;
pub mod precision;
pub mod progress;
pub mod unbounded;

#[cfg(test)]
mod test_utils;

pub use error::OutOfMemory;

/// A utility method for printing useful metadata of a value vector.
fn log_values(values: &[f64]) -> String {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    format!("states={}; min={min}; max={max}", values.len())
}
