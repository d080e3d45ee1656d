use std::ops::Range;

/// A two-level compressed adjacency representation for nondeterministic and
/// game-based transition structures.
///
/// Compared to [`TransitionGraph`](crate::graph::TransitionGraph), one more
/// indirection level is inserted: `state_bounds[s]..state_bounds[s + 1]` is
/// the range of *choice* indices owned by state `s`, and
/// `nondet_bounds[c]..nondet_bounds[c + 1]` is the edge range of choice `c`
/// in the flat `targets`/`weights` arrays. Each choice represents one
/// probability distribution the controlling player may pick.
///
/// # Preconditions
///
/// Both offset sequences must be non-decreasing, start at `0` and end at the
/// length of the level below them. As with the single-level graph, this is a
/// caller obligation checked by debug assertions only.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChoiceGraph {
    state_bounds: Vec<usize>,
    nondet_bounds: Vec<usize>,
    targets: Vec<usize>,
    weights: Vec<f64>,
}

impl ChoiceGraph {
    /// Create a graph from its raw compressed representation.
    pub fn new(
        state_bounds: Vec<usize>,
        nondet_bounds: Vec<usize>,
        targets: Vec<usize>,
        weights: Vec<f64>,
    ) -> ChoiceGraph {
        debug_assert!(!state_bounds.is_empty());
        debug_assert!(!nondet_bounds.is_empty());
        debug_assert_eq!(state_bounds[0], 0);
        debug_assert_eq!(nondet_bounds[0], 0);
        debug_assert_eq!(*state_bounds.last().unwrap(), nondet_bounds.len() - 1);
        debug_assert_eq!(*nondet_bounds.last().unwrap(), targets.len());
        debug_assert_eq!(targets.len(), weights.len());
        debug_assert!(state_bounds.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(nondet_bounds.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(weights.iter().all(|w| *w >= 0.0));

        ChoiceGraph {
            state_bounds,
            nondet_bounds,
            targets,
            weights,
        }
    }

    /// Create a graph from nested rows: one list of choices per state, each
    /// choice being a list of `(target, weight)` pairs.
    pub fn from_rows(rows: &[Vec<Vec<(usize, f64)>>]) -> ChoiceGraph {
        let mut state_bounds = Vec::with_capacity(rows.len() + 1);
        let mut nondet_bounds = vec![0];
        let mut targets = Vec::new();
        let mut weights = Vec::new();
        state_bounds.push(0);
        for choices in rows {
            for choice in choices {
                for &(target, weight) in choice {
                    targets.push(target);
                    weights.push(weight);
                }
                nondet_bounds.push(targets.len());
            }
            state_bounds.push(nondet_bounds.len() - 1);
        }
        ChoiceGraph::new(state_bounds, nondet_bounds, targets, weights)
    }

    /// The number of states covered by this graph.
    pub fn num_states(&self) -> usize {
        self.state_bounds.len() - 1
    }

    /// The total number of choices across all states.
    pub fn num_choices(&self) -> usize {
        self.nondet_bounds.len() - 1
    }

    /// The range of choice indices owned by a state. Empty for states whose
    /// value the caller has already resolved.
    pub fn choices(&self, state: usize) -> Range<usize> {
        self.state_bounds[state]..self.state_bounds[state + 1]
    }

    /// Iterate over the `(target, weight)` pairs of one choice's
    /// distribution.
    pub fn successors(&self, choice: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        let range = self.nondet_bounds[choice]..self.nondet_bounds[choice + 1];
        self.targets[range.clone()]
            .iter()
            .copied()
            .zip(self.weights[range].iter().copied())
    }

    /// The weighted sum `Σ w(choice, t) · values[t]` of one choice.
    pub fn choice_value(&self, choice: usize, values: &[f64]) -> f64 {
        self.successors(choice)
            .map(|(target, weight)| weight * values[target])
            .sum()
    }
}
