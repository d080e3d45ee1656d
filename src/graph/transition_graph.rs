/// A compressed, offset-indexed adjacency representation of a probabilistic
/// transition relation.
///
/// The outgoing edges of state `s` occupy the index range
/// `state_bounds[s]..state_bounds[s + 1]` of the parallel `targets` and
/// `weights` arrays. Weights are probabilities for discrete-time systems and
/// uniformized rates for continuous-time ones; the kernels treat them
/// uniformly as nonnegative edge weights.
///
/// # Preconditions
///
/// `state_bounds` must be non-decreasing with `state_bounds[0] == 0` and
/// `state_bounds[num_states] == targets.len() == weights.len()`; every target
/// must be a valid state index of the value vectors the graph is used with.
/// These are caller obligations (checked by debug assertions only); the
/// kernels perform no validation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionGraph {
    state_bounds: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<f64>,
}

impl TransitionGraph {
    /// Create a graph from its raw compressed representation.
    pub fn new(state_bounds: Vec<usize>, targets: Vec<usize>, weights: Vec<f64>) -> TransitionGraph {
        debug_assert!(!state_bounds.is_empty());
        debug_assert_eq!(state_bounds[0], 0);
        debug_assert_eq!(*state_bounds.last().unwrap(), targets.len());
        debug_assert_eq!(targets.len(), weights.len());
        debug_assert!(state_bounds.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(weights.iter().all(|w| *w >= 0.0));

        TransitionGraph {
            state_bounds,
            targets,
            weights,
        }
    }

    /// Create a graph from one `(target, weight)` row per state.
    pub fn from_rows(rows: &[Vec<(usize, f64)>]) -> TransitionGraph {
        let mut state_bounds = Vec::with_capacity(rows.len() + 1);
        let mut targets = Vec::new();
        let mut weights = Vec::new();
        state_bounds.push(0);
        for row in rows {
            for &(target, weight) in row {
                targets.push(target);
                weights.push(weight);
            }
            state_bounds.push(targets.len());
        }
        TransitionGraph::new(state_bounds, targets, weights)
    }

    /// The number of states covered by this graph.
    pub fn num_states(&self) -> usize {
        self.state_bounds.len() - 1
    }

    /// The total number of edges.
    pub fn num_transitions(&self) -> usize {
        self.targets.len()
    }

    /// Iterate over the `(target, weight)` pairs of a state's outgoing edges.
    pub fn transitions(&self, state: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.state_bounds[state]..self.state_bounds[state + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// The weighted sum `Σ w(state, t) · values[t]` over the state's
    /// outgoing edges. This is the single-state building block of every
    /// propagation sweep.
    pub fn weighted_sum(&self, state: usize, values: &[f64]) -> f64 {
        self.transitions(state)
            .map(|(target, weight)| weight * values[target])
            .sum()
    }
}
