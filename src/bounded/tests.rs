//! Tests for the fixed-iteration-count kernels.

use crate::bounded::{
    FoxGlynnWeights, Objective, bounded, bounded_cumulative, bounded_cumulative_discounted,
    bounded_cumulative_nondet, bounded_nondet, transient,
};
use crate::graph::{ChoiceGraph, TransitionGraph};
use crate::progress::ProgressCounter;
use crate::test_utils::{assert_values_close, dense_matrix, init_logger, naive_propagate};

/// A small contracting chain: 0 -> 1 -> 2, with 2 absorbing and some
/// probability mass staying put in 0 and 1.
fn chain() -> TransitionGraph {
    TransitionGraph::from_rows(&[
        vec![(0, 0.5), (1, 0.5)],
        vec![(1, 0.25), (2, 0.75)],
        vec![(2, 1.0)],
    ])
}

#[test]
fn bound_zero_is_the_identity() {
    init_logger();
    let graph = chain();
    let progress = ProgressCounter::new();
    let mut values = vec![0.25, 0.5, 1.0];

    bounded(&graph, 0, &mut values, &progress).unwrap();

    assert_eq!(values, vec![0.25, 0.5, 1.0]);
}

#[test]
fn bounded_matches_naive_dense_propagation() {
    init_logger();
    let graph = chain();
    let matrix = dense_matrix(&graph);
    let progress = ProgressCounter::new();

    for bound in [1, 2, 5, 13] {
        let mut values = vec![0.0, 0.3, 1.0];
        let expected = naive_propagate(&matrix, &values, bound);
        bounded(&graph, bound, &mut values, &progress).unwrap();
        assert_values_close(&values, &expected, 1e-12);
    }
}

#[test]
fn bounded_propagation_is_linear() {
    init_logger();
    let graph = chain();
    let progress = ProgressCounter::new();
    let (a, b) = (2.5, -0.75);
    let v1 = [0.1, 0.2, 0.3];
    let v2 = [1.0, 0.0, 0.5];

    let mut combined: Vec<f64> = v1.iter().zip(&v2).map(|(x, y)| a * x + b * y).collect();
    bounded(&graph, 7, &mut combined, &progress).unwrap();

    let mut p1 = v1.to_vec();
    let mut p2 = v2.to_vec();
    bounded(&graph, 7, &mut p1, &progress).unwrap();
    bounded(&graph, 7, &mut p2, &progress).unwrap();
    let expected: Vec<f64> = p1.iter().zip(&p2).map(|(x, y)| a * x + b * y).collect();

    assert_values_close(&combined, &expected, 1e-12);
}

#[test]
fn reaching_an_absorbing_target_is_certain_after_one_step() {
    init_logger();
    // State 0 moves to state 1 with probability 1, state 1 loops on itself.
    let graph = TransitionGraph::from_rows(&[vec![(1, 1.0)], vec![(1, 1.0)]]);
    let progress = ProgressCounter::new();
    let mut values = vec![0.0, 1.0];

    bounded(&graph, 5, &mut values, &progress).unwrap();

    assert_values_close(&values, &[1.0, 1.0], 1e-12);
}

#[test]
fn progress_counter_reaches_the_last_sweep() {
    init_logger();
    let graph = chain();
    let progress = ProgressCounter::new();
    let mut values = vec![0.0, 0.0, 1.0];

    bounded(&graph, 12, &mut values, &progress).unwrap();

    assert_eq!(progress.get(), 11);
}

#[test]
fn zero_rewards_reduce_cumulative_to_plain_propagation() {
    init_logger();
    let graph = chain();
    let progress = ProgressCounter::new();

    let mut plain = vec![0.0, 0.5, 1.0];
    let mut cumulative = plain.clone();
    bounded(&graph, 9, &mut plain, &progress).unwrap();
    bounded_cumulative(&graph, 9, &mut cumulative, &[0.0; 3], &progress).unwrap();

    assert_eq!(plain, cumulative);
}

#[test]
fn cumulative_rewards_accumulate_over_the_horizon() {
    init_logger();
    // A single absorbing state earning reward 2 per step.
    let graph = TransitionGraph::from_rows(&[vec![(0, 1.0)]]);
    let progress = ProgressCounter::new();
    let mut values = vec![0.0];

    bounded_cumulative(&graph, 4, &mut values, &[2.0], &progress).unwrap();

    assert_values_close(&values, &[8.0], 1e-12);
}

#[test]
fn discount_one_equals_undiscounted_cumulative() {
    init_logger();
    let graph = chain();
    let progress = ProgressCounter::new();
    let cumul = [0.5, 0.25, 0.0];

    let mut discounted = vec![0.0, 0.1, 1.0];
    let mut undiscounted = discounted.clone();
    bounded_cumulative_discounted(&graph, 6, 1.0, &mut discounted, &cumul, &progress).unwrap();
    bounded_cumulative(&graph, 6, &mut undiscounted, &cumul, &progress).unwrap();

    assert_eq!(discounted, undiscounted);
}

#[test]
fn discounting_shrinks_the_propagated_part() {
    init_logger();
    // Absorbing state with value 1 and reward 0: after `bound` steps the
    // value is discount^bound.
    let graph = TransitionGraph::from_rows(&[vec![(0, 1.0)]]);
    let progress = ProgressCounter::new();
    let mut values = vec![1.0];

    bounded_cumulative_discounted(&graph, 3, 0.5, &mut values, &[0.0], &progress).unwrap();

    assert_values_close(&values, &[0.125], 1e-12);
}

// ========== Nondeterministic variants ==========

#[test]
fn single_choice_graph_reduces_to_plain_propagation() {
    init_logger();
    let graph = chain();
    let choice_graph = ChoiceGraph::from_rows(&[
        vec![vec![(0, 0.5), (1, 0.5)]],
        vec![vec![(1, 0.25), (2, 0.75)]],
        vec![vec![(2, 1.0)]],
    ]);
    let progress = ProgressCounter::new();

    for objective in [Objective::Maximize, Objective::Minimize] {
        let mut plain = vec![0.0, 0.5, 1.0];
        let mut nondet = plain.clone();
        bounded(&graph, 8, &mut plain, &progress).unwrap();
        bounded_nondet(&choice_graph, objective, 8, &mut nondet, &progress).unwrap();
        assert_values_close(&plain, &nondet, 1e-12);
    }
}

#[test]
fn maximizer_and_minimizer_pick_opposite_choices() {
    init_logger();
    // State 0 chooses between jumping to the low-valued state 1 or the
    // high-valued state 2; both are absorbing.
    let graph = ChoiceGraph::from_rows(&[
        vec![vec![(1, 1.0)], vec![(2, 1.0)]],
        vec![vec![(1, 1.0)]],
        vec![vec![(2, 1.0)]],
    ]);
    let progress = ProgressCounter::new();

    let mut max_values = vec![0.0, 0.2, 0.9];
    bounded_nondet(&graph, Objective::Maximize, 1, &mut max_values, &progress).unwrap();
    assert_values_close(&max_values, &[0.9, 0.2, 0.9], 1e-12);

    let mut min_values = vec![0.0, 0.2, 0.9];
    bounded_nondet(&graph, Objective::Minimize, 1, &mut min_values, &progress).unwrap();
    assert_values_close(&min_values, &[0.2, 0.2, 0.9], 1e-12);
}

#[test]
fn choice_rewards_decide_between_otherwise_equal_choices() {
    init_logger();
    // Two choices with identical successor distributions; only the
    // per-choice rewards differ.
    let graph = ChoiceGraph::from_rows(&[
        vec![vec![(1, 1.0)], vec![(1, 1.0)]],
        vec![vec![(1, 1.0)]],
    ]);
    let progress = ProgressCounter::new();
    let cumul = [0.25, 0.75, 0.0];

    let mut values = vec![0.0, 0.0];
    bounded_cumulative_nondet(
        &graph,
        Objective::Maximize,
        1,
        &mut values,
        &cumul,
        &progress,
    )
    .unwrap();

    assert_values_close(&values, &[0.75, 0.0], 1e-12);
}

#[test]
fn choice_less_states_keep_the_optimization_identity() {
    init_logger();
    let graph = ChoiceGraph::from_rows(&[vec![], vec![vec![(1, 1.0)]]]);
    let progress = ProgressCounter::new();

    let mut max_values = vec![0.0, 1.0];
    bounded_nondet(&graph, Objective::Maximize, 1, &mut max_values, &progress).unwrap();
    assert_eq!(max_values[0], f64::NEG_INFINITY);

    let mut min_values = vec![0.0, 1.0];
    bounded_nondet(&graph, Objective::Minimize, 1, &mut min_values, &progress).unwrap();
    assert_eq!(min_values[0], f64::INFINITY);
}

// ========== Transient (continuous-time) kernel ==========

#[test]
fn transient_with_a_single_unit_weight_is_the_base_case() {
    init_logger();
    // left == right == 0 with weight 1: phase A runs once and contributes
    // exactly fg[0] * base, phase B is empty.
    let graph = chain();
    let fg = FoxGlynnWeights::new(0, 0, vec![1.0]);
    let progress = ProgressCounter::new();
    let mut values = vec![0.25, 0.5, 1.0];

    transient(&graph, &fg, &mut values, &progress).unwrap();

    assert_values_close(&values, &[0.25, 0.5, 1.0], 1e-12);
}

#[test]
fn transient_weights_mix_propagation_depths() {
    init_logger();
    // Window 0..=1 with weights w0, w1: the result must equal
    // w0 * base + w1 * P(base) by linearity of the two-phase recursion.
    let graph = chain();
    let matrix = dense_matrix(&graph);
    let (w0, w1) = (0.4, 0.6);
    let fg = FoxGlynnWeights::new(0, 1, vec![w0, w1]);
    let progress = ProgressCounter::new();

    let base = vec![0.0, 0.5, 1.0];
    let stepped = naive_propagate(&matrix, &base, 1);
    let expected: Vec<f64> = base
        .iter()
        .zip(&stepped)
        .map(|(b, s)| w0 * b + w1 * s)
        .collect();

    let mut values = base.clone();
    transient(&graph, &fg, &mut values, &progress).unwrap();

    assert_values_close(&values, &expected, 1e-12);
}

#[test]
fn transient_left_phase_extends_the_propagation() {
    init_logger();
    // left = 2 prepends two plain propagation steps to the weighted result:
    // expected = P^2 (w2 * base) for a window containing only step count 2.
    let graph = chain();
    let matrix = dense_matrix(&graph);
    let fg = FoxGlynnWeights::new(2, 2, vec![1.0]);
    let progress = ProgressCounter::new();

    let base = vec![0.0, 0.5, 1.0];
    let expected = naive_propagate(&matrix, &base, 2);

    let mut values = base.clone();
    transient(&graph, &fg, &mut values, &progress).unwrap();

    assert_values_close(&values, &expected, 1e-12);
    // One phase-A iteration plus two phase-B iterations.
    assert_eq!(progress.get(), 2);
}
