//! Min-max fixed-point solvers for two-player turn-based stochastic games.
//!
//! States of a [`ChoiceGraph`] are partitioned into a maximizer prefix, a
//! minimizer segment, and a trailing range of states the caller has already
//! resolved (see [`PlayerPartition`]). Each sweep resolves every undecided
//! state to the optimum, over its choices, of the choice's weighted successor
//! sum; resolved states are read as fixed boundary values and never written.
//!
//! Degenerate partitions reduce the game to plain MDP value iteration:
//! [`PlayerPartition::all_maximizer`] computes maximal values,
//! [`PlayerPartition::all_minimizer`] minimal ones.
//!
//! The Jacobi/Gauss-Seidel split mirrors the [`unbounded`](crate::unbounded)
//! module, including the halved stopping threshold of the Jacobi variant.

use crate::error::{self, OutOfMemory};
use crate::graph::ChoiceGraph;
use crate::log_values;
use crate::precision::PrecisionCriterion;
use crate::progress::ProgressCounter;
use log::{debug, info};


/// Contiguous state-index ranges assigning each undecided state to a player.
///
/// States `0..max_end` belong to the maximizer, states `max_end..min_end` to
/// the minimizer. States at `min_end` and beyond are outside the solver's
/// responsibility: their values are assumed already resolved by the caller
/// and only serve as read-only boundary values during sweeps.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerPartition {
    /// End (exclusive) of the maximizer state range.
    pub max_end: usize,
    /// End (exclusive) of the minimizer state range.
    pub min_end: usize,
}

impl PlayerPartition {
    /// Create a partition with maximizer states `0..max_end` and minimizer
    /// states `max_end..min_end`.
    pub fn new(max_end: usize, min_end: usize) -> PlayerPartition {
        debug_assert!(max_end <= min_end);
        PlayerPartition { max_end, min_end }
    }

    /// All `num_states` states maximize: plain MDP max-value iteration.
    pub fn all_maximizer(num_states: usize) -> PlayerPartition {
        PlayerPartition::new(num_states, num_states)
    }

    /// All `num_states` states minimize: plain MDP min-value iteration.
    pub fn all_minimizer(num_states: usize) -> PlayerPartition {
        PlayerPartition::new(0, num_states)
    }
}

/// Resolve one state to the optimum over its choices, reading successor
/// values from `values`.
///
/// A choice-less maximizer state yields `-∞` and a choice-less minimizer
/// state `+∞`: the identity of the respective optimum, signalling "no
/// strategy available" without ever dominating an actual choice value.
fn resolve(
    graph: &ChoiceGraph,
    partition: &PlayerPartition,
    state: usize,
    values: &[f64],
) -> f64 {
    let maximize = state < partition.max_end;
    let mut opt = if maximize {
        f64::NEG_INFINITY
    } else {
        f64::INFINITY
    };
    for choice in graph.choices(state) {
        let value = graph.choice_value(choice, values);
        opt = if maximize {
            opt.max(value)
        } else {
            opt.min(value)
        };
    }
    opt
}

/// Solve the min-max Bellman fixed point by double-buffered synchronous
/// iteration.
///
/// As with the probabilistic [`jacobi`](crate::unbounded::jacobi) solver,
/// iteration stops once the sup-norm difference over the undecided states
/// drops to half the criterion's threshold, compensating the one-step lag of
/// the measured difference.
pub fn jacobi(
    graph: &ChoiceGraph,
    partition: &PlayerPartition,
    criterion: &PrecisionCriterion,
    values: &mut [f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_copied(&values[..num_states])?;
    // Resolved states past min_end must stay readable in both buffers, so the
    // second buffer starts as a copy as well.
    let mut next = error::try_copied(&values[..num_states])?;
    let stop = criterion.threshold / 2.0;

    let mut iterations = 0u64;
    loop {
        let mut max_diff = 0.0f64;
        for state in 0..partition.min_end {
            let value = resolve(graph, partition, state, &pres);
            max_diff = max_diff.max(criterion.difference(pres[state], value));
            next[state] = value;
        }
        std::mem::swap(&mut pres, &mut next);
        progress.set(iterations);
        iterations += 1;

        debug!("[iteration:{iterations}] Game Jacobi sweep difference {max_diff}.");
        if max_diff <= stop {
            break;
        }
    }

    values[..num_states].copy_from_slice(&pres);
    info!(
        "Game Jacobi converged after {iterations} iterations ({}).",
        log_values(&pres)
    );
    Ok(())
}

/// Solve the min-max Bellman fixed point by in-place sequential iteration.
///
/// Later states in a sweep observe values already updated earlier in the same
/// sweep. Converges against the full (unhalved) threshold, mirroring
/// [`gauss_seidel`](crate::unbounded::gauss_seidel).
pub fn gauss_seidel(
    graph: &ChoiceGraph,
    partition: &PlayerPartition,
    criterion: &PrecisionCriterion,
    values: &mut [f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let mut iterations = 0u64;
    loop {
        let mut max_diff = 0.0f64;
        for state in 0..partition.min_end {
            let value = resolve(graph, partition, state, values);
            max_diff = max_diff.max(criterion.difference(values[state], value));
            values[state] = value;
        }
        progress.set(iterations);
        iterations += 1;

        debug!("[iteration:{iterations}] Game Gauss-Seidel sweep difference {max_diff}.");
        if max_diff <= criterion.threshold {
            break;
        }
    }

    info!(
        "Game Gauss-Seidel converged after {iterations} iterations ({}).",
        log_values(&values[..graph.num_states()])
    );
    Ok(())
}
