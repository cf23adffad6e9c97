//! Degree- and homophily-weighted target selection.
//!
//! For each new node the generator asks this module for up to `quota`
//! distinct attachment targets among the current candidates. Candidate
//! weights combine preferential attachment (degree) with group affinity
//! (homophily), and draws are made without replacement against the fixed
//! initial normaliser, so a draw can miss once removed candidates carry
//! part of the weight mass. Misses are deliberate: they bound the work per
//! node instead of renormalising, and a node that keeps missing simply
//! under-connects.

use rand::{Rng, distributions::Standard, rngs::SmallRng};
use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Additive degree smoothing keeping zero-degree candidates selectable.
pub(crate) const DEGREE_SMOOTHING: f64 = 1e-5;

/// Inputs for one target-selection call.
///
/// Selection is a pure function of this snapshot and the RNG; it holds no
/// state of its own between calls.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SelectionContext<'a> {
    /// Graph as committed by all prior growth-loop iterations.
    pub(crate) graph: &'a Graph,
    /// Nodes eligible to receive an edge, in insertion order.
    pub(crate) candidates: &'a [NodeId],
    /// Same-group affinity in `[0, 1]`; cross-group affinity is its
    /// complement.
    pub(crate) homophily: f64,
    /// Number of targets to collect.
    pub(crate) quota: usize,
}

/// Selects up to `quota` distinct targets for `source`.
///
/// Each candidate's weight is `affinity * (degree + DEGREE_SMOOTHING)` where
/// affinity is `homophily` for same-group pairs and `1 - homophily`
/// otherwise. Draws partition `[0, 1)` into the remaining candidates'
/// shares of the initial total, in candidate-list order, and take the first
/// bin containing the uniform draw. At most `graph.node_count()` draws are
/// attempted; the result may hold fewer than `quota` targets and may be
/// empty when no candidate carries positive weight.
#[must_use]
pub(crate) fn pick_targets(
    ctx: &SelectionContext<'_>,
    source: NodeId,
    rng: &mut SmallRng,
) -> Vec<NodeId> {
    let labels = ctx.graph.labels();
    let degrees = ctx.graph.degrees();
    let source_label = labels[source];

    let weights: Vec<f64> = ctx
        .candidates
        .iter()
        .map(|&candidate| {
            let affinity = if labels[candidate] == source_label {
                ctx.homophily
            } else {
                1.0 - ctx.homophily
            };
            affinity * (degrees[candidate] as f64 + DEGREE_SMOOTHING)
        })
        .collect();

    // The normaliser stays fixed for the whole call even as candidates are
    // removed; removed weight mass turns into draws that miss.
    let total: f64 = weights.iter().sum();
    let mut targets = Vec::new();
    if total <= 0.0 {
        debug!(
            source,
            candidates = ctx.candidates.len(),
            quota = ctx.quota,
            "no positively weighted candidate"
        );
        record_zero_weight_selection();
        return targets;
    }

    let mut remaining: Vec<usize> = (0..ctx.candidates.len()).collect();
    let mut misses = 0_u64;
    for _ in 0..ctx.graph.node_count() {
        if targets.len() == ctx.quota {
            break;
        }
        let draw: f64 = rng.sample(Standard);
        let mut cumulative = 0.0;
        let mut hit = None;
        for (slot, &index) in remaining.iter().enumerate() {
            cumulative += weights[index] / total;
            if draw < cumulative {
                hit = Some(slot);
                break;
            }
        }
        if let Some(slot) = hit {
            let index = remaining.remove(slot);
            targets.push(ctx.candidates[index]);
        } else {
            misses += 1;
        }
    }
    record_failed_draws(misses);

    if targets.len() < ctx.quota {
        debug!(
            source,
            collected = targets.len(),
            quota = ctx.quota,
            "selection budget exhausted"
        );
        record_partial_selection();
    }
    targets
}

#[cfg(feature = "metrics")]
fn record_zero_weight_selection() {
    metrics::counter!("generator_zero_weight_selections").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_zero_weight_selection() {}

#[cfg(feature = "metrics")]
fn record_partial_selection() {
    metrics::counter!("generator_partial_selections").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_partial_selection() {}

#[cfg(feature = "metrics")]
fn record_failed_draws(misses: u64) {
    if misses > 0 {
        metrics::counter!("generator_failed_draws").increment(misses);
    }
}

#[cfg(not(feature = "metrics"))]
fn record_failed_draws(_misses: u64) {}
