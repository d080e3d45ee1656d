//! Fixed-iteration-count propagation kernels.
//!
//! Every kernel in this module performs a caller-chosen number of synchronous
//! Jacobi sweeps over a sparse transition structure: each sweep computes the
//! new value of every state purely from the previous sweep's values
//! (double-buffered, so a sweep never observes a value it has already
//! overwritten). The caller's value vector serves as the horizon-0 base case
//! and receives the result; a bound of zero is the identity.
//!
//! # Kernel Variants
//!
//! - [`bounded`]: plain propagation `next[s] = Σ w(s,t)·pres[t]`.
//! - [`bounded_cumulative`]: adds a per-state immediate reward every sweep,
//!   accumulating total expected reward over the horizon.
//! - [`bounded_cumulative_discounted`]: like the cumulative variant, with the
//!   propagated part scaled by a discount factor.
//! - [`bounded_nondet`] / [`bounded_cumulative_nondet`]: the same sweeps over
//!   a [`ChoiceGraph`](crate::graph::ChoiceGraph), resolving each state to
//!   the minimum or maximum over its choices.
//! - [`transient`]: two-phase uniformization-weighted propagation computing
//!   time-bounded values of continuous-time models from precomputed
//!   [`FoxGlynnWeights`].
//!
//! All kernels write the current outer-iteration index to a
//! [`ProgressCounter`](crate::progress::ProgressCounter) so a concurrent
//! observer can monitor long horizons.

mod discrete;
mod nondet;
mod transient;

#[cfg(test)]
mod tests;

pub use discrete::{bounded, bounded_cumulative, bounded_cumulative_discounted};
pub use nondet::{Objective, bounded_cumulative_nondet, bounded_nondet};
pub use transient::{FoxGlynnWeights, transient};
