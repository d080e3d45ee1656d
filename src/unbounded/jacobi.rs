use crate::error::{self, OutOfMemory};
use crate::graph::TransitionGraph;
use crate::log_values;
use crate::precision::PrecisionCriterion;
use crate::progress::ProgressCounter;
use log::{debug, info};

/// Solve `v = Pv` by double-buffered synchronous iteration.
///
/// Sweeps run until the sup-norm difference between successive iterates drops
/// to half the criterion's threshold; the halving compensates the one-step
/// lag between the measured difference and the true fixed-point error, so the
/// delivered solution meets the caller's requested precision. At least one
/// sweep always runs.
pub fn jacobi(
    graph: &TransitionGraph,
    criterion: &PrecisionCriterion,
    values: &mut [f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_copied(&values[..num_states])?;
    let mut next = error::try_zeroed(num_states)?;
    let stop = criterion.threshold / 2.0;

    let mut iterations = 0u64;
    loop {
        let mut max_diff = 0.0f64;
        for state in 0..num_states {
            let value = graph.weighted_sum(state, &pres);
            max_diff = max_diff.max(criterion.difference(pres[state], value));
            next[state] = value;
        }
        std::mem::swap(&mut pres, &mut next);
        progress.set(iterations);
        iterations += 1;

        debug!("[iteration:{iterations}] Jacobi sweep difference {max_diff}.");
        if max_diff <= stop {
            break;
        }
    }

    values[..num_states].copy_from_slice(&pres);
    info!("Jacobi converged after {iterations} iterations ({}).", log_values(&pres));
    Ok(())
}

/// Solve the cumulative-reward fixed point `v = r + Pv` by double-buffered
/// synchronous iteration, injecting the per-state reward `cumul[s]` into
/// every sweep. Stopping behaves exactly as in [`jacobi`].
pub fn jacobi_cumulative(
    graph: &TransitionGraph,
    criterion: &PrecisionCriterion,
    values: &mut [f64],
    cumul: &[f64],
    progress: &ProgressCounter,
) -> Result<(), OutOfMemory> {
    let num_states = graph.num_states();
    let mut pres = error::try_copied(&values[..num_states])?;
    let mut next = error::try_zeroed(num_states)?;
    let stop = criterion.threshold / 2.0;

    let mut iterations = 0u64;
    loop {
        let mut max_diff = 0.0f64;
        for state in 0..num_states {
            let value = cumul[state] + graph.weighted_sum(state, &pres);
            max_diff = max_diff.max(criterion.difference(pres[state], value));
            next[state] = value;
        }
        std::mem::swap(&mut pres, &mut next);
        progress.set(iterations);
        iterations += 1;

        debug!("[iteration:{iterations}] Jacobi sweep difference {max_diff}.");
        if max_diff <= stop {
            break;
        }
    }

    values[..num_states].copy_from_slice(&pres);
    info!(
        "Cumulative Jacobi converged after {iterations} iterations ({}).",
        log_values(&pres)
    );
    Ok(())
}
