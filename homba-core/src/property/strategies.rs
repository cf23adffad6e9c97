//! Strategy builders for generation property tests.
//!
//! Draws generation plans whose node count always accommodates the seed
//! set, with minority fractions across the full unit interval and seeds
//! across the full `u64` range.

use proptest::prelude::*;

use super::types::{GenerationPlan, MixingRegime};

/// Maximum attachment count for generated plans.
const MAX_EDGES_PER_NODE: usize = 4;
/// Maximum node count for generated plans.
const MAX_NODES: usize = 48;

/// Generates plans covering all mixing regimes.
pub(super) fn plan_strategy() -> impl Strategy<Value = GenerationPlan> {
    (1..=MAX_EDGES_PER_NODE)
        .prop_flat_map(|edges_per_node| {
            (
                Just(edges_per_node),
                edges_per_node..=MAX_NODES,
                0.0_f64..=1.0,
                any::<MixingRegime>(),
                any::<u64>(),
            )
        })
        .prop_map(
            |(edges_per_node, nodes, minority_fraction, regime, seed)| GenerationPlan {
                nodes,
                edges_per_node,
                minority_fraction,
                regime,
                seed,
            },
        )
}
