use crate::error::{self, OutOfMemory};
use crate::graph::ChoiceGraph;
use crate::progress::ProgressCounter;

/// How a nondeterministic state resolves the values of its choices.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Objective {
    /// Take the maximum over the state's choices.
    Maximize,
    /// Take the minimum over the state's choices.
    Minimize,
}

impl Objective {
    /// The identity element of the optimization: `-∞` for max, `+∞` for min.
    /// A state without choices keeps this value, signalling that no strategy
    /// is available; it never dominates an actual choice value.
    fn start(self) -> f64 {
        match self {
            Objective::Maximize => f64::NEG_INFINITY,
            Objective::Minimize => f64::INFINITY,
        }
    }

    fn pick(self, current: f64, candidate: f64) -> f64 {
        match self {
            Objective::Maximize => current.max(candidate),
            Objective::Minimize => current.min(candidate),
        }
    }
}

/// Propagate `values` through `bound` synchronous sweeps of a choice graph,
/// resolving each state to the optimum over its choices' weighted sums.
pub fn bounded_nondet(
    graph: &ChoiceGraph,
    objective: Objective,
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
            let mut opt = objective.start();
            for choice in graph.choices(state) {
                opt = objective.pick(opt, graph.choice_value(choice, &pres));
            }
            next[state] = opt;
        }
        std::mem::swap(&mut pres, &mut next);
    }

    values[..num_states].copy_from_slice(&pres);
    Ok(())
}

/// Like [`bounded_nondet`], with each choice's sum seeded by the per-choice
/// immediate reward `cumul[choice]`.
///
/// Note that, unlike the probabilistic kernels, the reward vector is indexed
/// by *choice*, not by state: the reward gained depends on which distribution
/// the player picks.
pub fn bounded_cumulative_nondet(
    graph: &ChoiceGraph,
    objective: Objective,
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
            let mut opt = objective.start();
            for choice in graph.choices(state) {
                let value = cumul[choice] + graph.choice_value(choice, &pres);
                opt = objective.pick(opt, value);
            }
            next[state] = opt;
        }
        std::mem::swap(&mut pres, &mut next);
    }

    values[..num_states].copy_from_slice(&pres);
    Ok(())
}
