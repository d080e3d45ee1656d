use crate::error::{self, OutOfMemory};
use crate::graph::TransitionGraph;
use crate::log_values;
use crate::progress::ProgressCounter;
use log::debug;

/// Propagate `values` through `bound` synchronous sweeps of the graph.
///
/// After the call, `values[s]` holds `Σ w(s,t)·v_prev[t]` applied `bound`
/// times to the caller's initial vector. With values seeded to `1.0` at
/// target states and the targets made absorbing, this computes bounded-until
/// reachability probabilities.
pub fn bounded(
    graph: &TransitionGraph,
    bound: usize,
    values: &mut [f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_copied(&values[..num_states])?;
    let mut next = error::try_zeroed(num_states)?;

    for step in 0..bound {
        progress.set(step as u64);
        for state in 0..num_states {
            next[state] = graph.weighted_sum(state, &pres);
        }
        std::mem::swap(&mut pres, &mut next);
    }

    values[..num_states].copy_from_slice(&pres);
    debug!("Bounded propagation finished after {bound} sweeps ({}).", log_values(&pres));
    Ok(())
}

/// Propagate `values` through `bound` sweeps, injecting the immediate reward
/// `cumul[s]` into every state on every sweep.
///
/// This accumulates the total expected reward gained over the horizon; with
/// `cumul` all zero it coincides with [`bounded`].
pub fn bounded_cumulative(
    graph: &TransitionGraph,
    bound: usize,
    values: &mut [f64],
    cumul: &[f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_copied(&values[..num_states])?;
    let mut next = error::try_zeroed(num_states)?;

    for step in 0..bound {
        progress.set(step as u64);
        for state in 0..num_states {
            next[state] = cumul[state] + graph.weighted_sum(state, &pres);
        }
        std::mem::swap(&mut pres, &mut next);
    }

    values[..num_states].copy_from_slice(&pres);
    debug!("Cumulative propagation finished after {bound} sweeps ({}).", log_values(&pres));
    Ok(())
}

/// Like [`bounded_cumulative`], with the propagated part scaled by
/// `discount` each sweep: `next[s] = cumul[s] + discount · Σ w·pres[t]`.
///
/// A discount of `1.0` coincides with the undiscounted cumulative kernel.
pub fn bounded_cumulative_discounted(
    graph: &TransitionGraph,
    bound: usize,
    discount: f64,
    values: &mut [f64],
    cumul: &[f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_copied(&values[..num_states])?;
    let mut next = error::try_zeroed(num_states)?;

    for step in 0..bound {
        progress.set(step as u64);
        for state in 0..num_states {
            next[state] = cumul[state] + discount * graph.weighted_sum(state, &pres);
        }
        std::mem::swap(&mut pres, &mut next);
    }

    values[..num_states].copy_from_slice(&pres);
    Ok(())
}
