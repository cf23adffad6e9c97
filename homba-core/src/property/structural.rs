//! Structural invariant verification for generated graphs.
//!
//! For any graph produced from a plan, verifies:
//!
//! - **Shape** — node, label, and degree storage match the planned node
//!   count, and the minority count equals the planned floor.
//! - **Edge direction** — every edge points from a later node to an earlier
//!   one, and no source lies inside the seed set.
//! - **Commit order** — edge sources never decrease along the edge list.
//! - **Uniqueness and quota** — no duplicate attachments, at most
//!   `edges_per_node` per source.
//! - **Degrees** — stored degrees equal a recount over the edge list and
//!   never exceed the simple-graph ceiling.
//! - **Determinism** — a seeded plan regenerates the identical graph.
//! - **Mixing extremes** — vanished affinities partition the edge list
//!   exactly.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::types::{GenerationPlan, MixingRegime};
use crate::Graph;

/// Runs the shape property for the given plan.
pub(super) fn run_shape_property(plan: &GenerationPlan) -> TestCaseResult {
    let graph = plan.generate();
    if graph.node_count() != plan.nodes {
        return Err(TestCaseError::fail(format!(
            "node count {} differs from planned {} ({plan:?})",
            graph.node_count(),
            plan.nodes,
        )));
    }
    if graph.labels().len() != plan.nodes || graph.degrees().len() != plan.nodes {
        return Err(TestCaseError::fail(format!(
            "label or degree storage out of step with node count ({plan:?})",
        )));
    }
    let expected_minority = (plan.minority_fraction * plan.nodes as f64) as usize;
    if graph.minority_count() != expected_minority {
        return Err(TestCaseError::fail(format!(
            "minority count {} differs from floor {expected_minority} ({plan:?})",
            graph.minority_count(),
        )));
    }
    let ceiling = (plan.nodes - plan.edges_per_node) * plan.edges_per_node;
    if graph.edge_count() > ceiling {
        return Err(TestCaseError::fail(format!(
            "edge count {} exceeds ceiling {ceiling} ({plan:?})",
            graph.edge_count(),
        )));
    }
    Ok(())
}

/// Runs the edge invariants property for the given plan.
pub(super) fn run_edge_invariants_property(plan: &GenerationPlan) -> TestCaseResult {
    let graph = plan.generate();
    let mut seen = HashSet::new();
    let mut per_source = vec![0_usize; plan.nodes];
    let mut previous_source = 0;
    for edge in graph.edges() {
        let (source, target) = edge.endpoints();
        if source <= target {
            return Err(TestCaseError::fail(format!(
                "edge ({source}, {target}) does not point backwards ({plan:?})",
            )));
        }
        if source < plan.edges_per_node {
            return Err(TestCaseError::fail(format!(
                "edge source {source} lies inside the seed set ({plan:?})",
            )));
        }
        if source < previous_source {
            return Err(TestCaseError::fail(format!(
                "edge source {source} committed after {previous_source} ({plan:?})",
            )));
        }
        previous_source = source;
        if !seen.insert((source, target)) {
            return Err(TestCaseError::fail(format!(
                "duplicate edge ({source}, {target}) ({plan:?})",
            )));
        }
        per_source[source] += 1;
        if per_source[source] > plan.edges_per_node {
            return Err(TestCaseError::fail(format!(
                "source {source} exceeds its attachment quota ({plan:?})",
            )));
        }
    }
    Ok(())
}

/// Runs the degree consistency property for the given plan.
pub(super) fn run_degree_consistency_property(plan: &GenerationPlan) -> TestCaseResult {
    let graph = plan.generate();
    let mut recount = vec![0_usize; graph.node_count()];
    for edge in graph.edges() {
        let (source, target) = edge.endpoints();
        recount[source] += 1;
        recount[target] += 1;
    }
    if recount != graph.degrees() {
        return Err(TestCaseError::fail(format!(
            "stored degrees diverge from edge recount ({plan:?})",
        )));
    }
    if let Some(&peak) = graph.degrees().iter().max() {
        if peak > plan.nodes - 1 {
            return Err(TestCaseError::fail(format!(
                "degree {peak} exceeds the simple-graph ceiling ({plan:?})",
            )));
        }
    }
    Ok(())
}

/// Runs the determinism property for the given plan.
pub(super) fn run_determinism_property(plan: &GenerationPlan) -> TestCaseResult {
    if plan.generate() != plan.generate() {
        return Err(TestCaseError::fail(format!("seeded runs diverged ({plan:?})")));
    }
    Ok(())
}

/// Runs the mixing property: vanished affinities partition the edges exactly.
pub(super) fn run_mixing_extremes_property(plan: &GenerationPlan) -> TestCaseResult {
    let graph = plan.generate();
    let cross = cross_group_edges(&graph);
    match plan.regime {
        MixingRegime::SameGroupOnly if cross != 0 => Err(TestCaseError::fail(format!(
            "{cross} cross-group edges under full homophily ({plan:?})",
        ))),
        MixingRegime::CrossGroupOnly if cross != graph.edge_count() => {
            Err(TestCaseError::fail(format!(
                "{} same-group edges under zero homophily ({plan:?})",
                graph.edge_count() - cross,
            )))
        }
        _ => Ok(()),
    }
}

/// Counts edges whose endpoints carry different labels.
pub(super) fn cross_group_edges(graph: &Graph) -> usize {
    let labels = graph.labels();
    graph
        .edges()
        .iter()
        .filter(|edge| labels[edge.source()] != labels[edge.target()])
        .count()
}
