//! Shared helpers for kernel tests: logging setup and a naive dense
//! reference implementation of one propagation step.

use crate::graph::TransitionGraph;

/// Initialize env_logger for tests. Safe to call multiple times.
pub fn init_logger() {
    let _ = env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

/// Expand a sparse graph into a dense `num_states × num_states` matrix.
///
/// Parallel edges to the same target are summed, matching how the kernels
/// accumulate them.
pub fn dense_matrix(graph: &TransitionGraph) -> Vec<Vec<f64>> {
    let n = graph.num_states();
    let mut matrix = vec![vec![0.0; n]; n];
    for state in 0..n {
        for (target, weight) in graph.transitions(state) {
            matrix[state][target] += weight;
        }
    }
    matrix
}

/// One synchronous propagation step computed the obvious dense way,
/// used to cross-check the sparse kernels.
pub fn naive_step(matrix: &[Vec<f64>], values: &[f64]) -> Vec<f64> {
    matrix
        .iter()
        .map(|row| row.iter().zip(values).map(|(w, v)| w * v).sum())
        .collect()
}

/// `bound` naive propagation steps applied to `values`.
pub fn naive_propagate(matrix: &[Vec<f64>], values: &[f64], bound: usize) -> Vec<f64> {
    let mut current = values.to_vec();
    for _ in 0..bound {
        current = naive_step(matrix, &current);
    }
    current
}

/// Assert two value vectors agree within `tolerance` in every component.
pub fn assert_values_close(left: &[f64], right: &[f64], tolerance: f64) {
    assert_eq!(left.len(), right.len());
    for (index, (l, r)) in left.iter().zip(right).enumerate() {
        assert!(
            (l - r).abs() <= tolerance,
            "state {index}: {l} vs {r} differs by more than {tolerance}"
        );
    }
}
