use crate::error::{self, OutOfMemory};
use crate::graph::TransitionGraph;
use crate::log_values;
use crate::progress::ProgressCounter;
use log::debug;

/// Externally precomputed uniformization weights for transient analysis of
/// continuous-time models.
///
/// `weights[i]` is the Poisson probability of observing `left + i` steps of
/// the uniformized chain within the analyzed time window, for `i` in
/// `0..=right - left`. Step counts below `left` and above `right` carry
/// negligible probability and are truncated by the (out-of-scope) Fox-Glynn
/// precomputation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoxGlynnWeights {
    /// First step count with non-negligible probability.
    pub left: usize,
    /// Last step count with non-negligible probability.
    pub right: usize,
    /// One weight per step count in `left..=right`.
    pub weights: Vec<f64>,
}

impl FoxGlynnWeights {
    /// Create a weight sequence covering the step counts `left..=right`.
    pub fn new(left: usize, right: usize, weights: Vec<f64>) -> FoxGlynnWeights {
        debug_assert!(left <= right);
        debug_assert_eq!(weights.len(), right - left + 1);
        FoxGlynnWeights {
            left,
            right,
            weights,
        }
    }

    /// The weight of step count `left + index`.
    pub fn weight(&self, index: usize) -> f64 {
        self.weights[index]
    }
}

/// Compute time-bounded values of a uniformized continuous-time model.
///
/// The kernel runs two double-buffered phases. Phase A walks the weighted
/// step counts `right - left` down to `0`, accumulating the Poisson-weighted
/// contribution of stopping at each uniformization step:
/// `next[s] = fg[i]·base[s] + Σ w·pres[t]`, where `base` is the caller's
/// original, unmutated vector. Phase B extends the result through the `left`
/// leading steps with plain propagation (those steps carry zero Poisson
/// weight). With `left == 0` phase B naturally runs zero iterations; no
/// special case is needed.
///
/// The progress counter increments once per outer iteration across both
/// phases, `fg.right + 1` iterations in total.
pub fn transient(
    graph: &TransitionGraph,
    fg: &FoxGlynnWeights,
    values: &mut [f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_zeroed(num_states)?;
    let mut next = error::try_zeroed(num_states)?;

    let mut iteration = 0u64;
    for i in (0..fg.weights.len()).rev() {
        progress.set(iteration);
        iteration += 1;
        let fg_weight = fg.weight(i);
        for state in 0..num_states {
            next[state] = fg_weight * values[state] + graph.weighted_sum(state, &pres);
        }
        std::mem::swap(&mut pres, &mut next);
    }

    for _ in 0..fg.left {
        progress.set(iteration);
        iteration += 1;
        for state in 0..num_states {
            next[state] = graph.weighted_sum(state, &pres);
        }
        std::mem::swap(&mut pres, &mut next);
    }

    values[..num_states].copy_from_slice(&pres);
    debug!(
        "Transient propagation finished after {iteration} sweeps ({}).",
        log_values(&pres)
    );
    Ok(())
}
