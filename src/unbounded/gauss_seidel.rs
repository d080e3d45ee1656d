use crate::error::OutOfMemory;
use crate::graph::TransitionGraph;
use crate::log_values;
use crate::precision::PrecisionCriterion;
use crate::progress::ProgressCounter;
use log::{debug, info};

/// Solve `v = Pv` by in-place sequential iteration.
///
/// Each sweep overwrites `values[s]` immediately, so successor reads observe
/// whichever value (old or freshly updated) the processing order has already
/// produced. Unlike [`jacobi`](crate::unbounded::jacobi) there is no one-step
/// lag to compensate, so iteration stops at the full (unhalved) threshold.
/// Needs no scratch buffer and never fails; the `Result` keeps the kernel
/// contract uniform.
pub fn gauss_seidel(
    graph: &TransitionGraph,
    criterion: &PrecisionCriterion,
    values: &mut [f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();

    let mut iterations = 0u64;
    loop {
        let mut max_diff = 0.0f64;
        for state in 0..num_states {
            let value = graph.weighted_sum(state, values);
            max_diff = max_diff.max(criterion.difference(values[state], value));
            values[state] = value;
        }
        progress.set(iterations);
        iterations += 1;

        debug!("[iteration:{iterations}] Gauss-Seidel sweep difference {max_diff}.");
        if max_diff <= criterion.threshold {
            break;
        }
    }

    info!(
        "Gauss-Seidel converged after {iterations} iterations ({}).",
        log_values(&values[..num_states])
    );
    Ok(())
}

/// Solve the cumulative-reward fixed point `v = r + Pv` by in-place
/// sequential iteration, injecting the per-state reward `cumul[s]` into
/// every sweep. Stopping behaves exactly as in [`gauss_seidel`].
pub fn gauss_seidel_cumulative(
    graph: &TransitionGraph,
    criterion: &PrecisionCriterion,
    values: &mut [f64],
    cumul: &[f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();

    let mut iterations = 0u64;
    loop {
        let mut max_diff = 0.0f64;
        for state in 0..num_states {
            let value = cumul[state] + graph.weighted_sum(state, values);
            max_diff = max_diff.max(criterion.difference(values[state], value));
            values[state] = value;
        }
        progress.set(iterations);
        iterations += 1;

        debug!("[iteration:{iterations}] Gauss-Seidel sweep difference {max_diff}.");
        if max_diff <= criterion.threshold {
            break;
        }
    }

    info!(
        "Cumulative Gauss-Seidel converged after {iterations} iterations ({}).",
        log_values(&values[..num_states])
    );
    Ok(())
}
