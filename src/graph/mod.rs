//! Compressed sparse representations of probabilistic transition structures.
//!
//! Both graph types store their edges in a single flat `targets`/`weights`
//! pair, indexed by ordered offset sequences:
//!
//! - [`TransitionGraph`]: one offset level, `state -> edge range`. This is
//!   the representation for purely probabilistic systems (DTMCs, or CTMCs
//!   after uniformization), where every state owns exactly one distribution.
//! - [`ChoiceGraph`]: two offset levels, `state -> choice range` and
//!   `choice -> edge range`. This covers nondeterministic systems (MDPs) and
//!   turn-based stochastic games, where a state offers several distributions
//!   and a player resolves which one is taken.
//!
//! The graphs are plain read-only data: construction happens up front (by a
//! higher-level engine translating a symbolic or explicit model, or by
//! [`TransitionGraph::from_rows`]-style helpers), and the iteration kernels
//! only ever read them. Structural well-formedness — monotone offsets,
//! in-range targets, nonnegative weights, row-stochasticity where the model
//! semantics require it — is a documented caller obligation checked only by
//! debug assertions.

mod choice_graph;
mod transition_graph;


pub use choice_graph::ChoiceGraph;
pub use transition_graph::TransitionGraph;
